//! CLI domain: flag parsing, console command grammar, dispatch, help, output and
//! presentation. Store access goes through the shared client handle only.

mod command;
mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use command::{Command, SyntaxError};
pub use help::{command_name, help_lines};
pub use output::{map_error, map_select_error};
pub use parse::{Cli, Commands};
pub use presentation::{
    format_domain_list, format_local_timestamp, format_metadata, format_select_result,
};
pub use route::{Console, Flow, PROMPT};
