//! Console help text and command names for logging.

use crate::cli::command::Command;

const HELP_LINES: &[&str] = &[
    "",
    "COMMANDS",
    "  ls                      List all domains",
    "  create <domain>         Create domain with name <domain>",
    "  drop <domain>           Drop domain with name <domain>",
    "  meta <domain>           Get metadata for domain with name <domain>",
    "  delete <domain> <item>  Delete item with name <item> from domain named <domain>",
    "  select...               Command starting with \"select\" will be sent as a select query to the store",
    "  q                       Exits the console (also: exit)",
    "",
];

/// Lines printed for an empty input line.
pub fn help_lines() -> &'static [&'static str] {
    HELP_LINES
}

/// Command name used in log fields (e.g. "select", "delete").
pub fn command_name(command: &Command) -> &'static str {
    match command {
        Command::List => "ls",
        Command::Create { .. } => "create",
        Command::Drop { .. } => "drop",
        Command::Meta { .. } => "meta",
        Command::DeleteItem { .. } => "delete",
        Command::Select { .. } => "select",
        Command::Help => "help",
        Command::Exit => "exit",
        Command::Invalid(_) => "invalid",
        Command::Unrecognized { .. } => "unrecognized",
    }
}
