//! CLI route: the console dispatcher. One command at a time, each store call driven to
//! completion before the next line is read.

use crate::cli::command::Command;
use crate::cli::help::{command_name, help_lines};
use crate::cli::output::{map_error, map_select_error};
use crate::cli::presentation::{
    format_domain_list, format_metadata, format_select_result, DOMAIN_CREATED, DOMAIN_DELETED,
    ITEM_DELETED,
};
use crate::error::AppError;
use crate::store::SharedClient;
use std::io::{BufRead, Write};
use tokio::runtime::Runtime;
use tracing::{debug, error, warn};

pub const PROMPT: &str = "> ";

/// Whether the read loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Console dispatcher: the shared client handle, an output sink and the runtime used to
/// drive client calls synchronously.
pub struct Console<W: Write> {
    client: SharedClient,
    out: W,
    runtime: Runtime,
}

impl<W: Write> Console<W> {
    pub fn new(client: SharedClient, out: W) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            client,
            out,
            runtime,
        })
    }

    /// Output sink (tests read captured output through this).
    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Read lines until the exit command or end of input.
    ///
    /// Store failures never end the loop; only a failing input or output stream does.
    ///
    /// Lines are split on raw bytes and decoded lossily, so stray non-UTF-8 input is
    /// passed through instead of ending the session.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), AppError> {
        self.prompt()?;
        for raw in input.split(b'\n') {
            let raw = raw.map_err(|e| {
                error!("reading standard input: {}", e);
                AppError::IoError(e)
            })?;
            let line = String::from_utf8_lossy(&raw);
            let command = Command::parse(&line);
            if self.execute(&command)? == Flow::Exit {
                return Ok(());
            }
            self.prompt()?;
        }
        Ok(())
    }

    /// Execute one command, writing its result or diagnostic to the sink.
    pub fn execute(&mut self, command: &Command) -> Result<Flow, AppError> {
        debug!(command = command_name(command), "executing console command");
        let client = self.client.clone();

        let lines: Vec<String> = match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Help => help_lines().iter().map(|l| l.to_string()).collect(),
            Command::Invalid(e) => vec![e.to_string()],
            Command::Unrecognized { line } => {
                debug!(line = %line, "ignoring unrecognized command");
                Vec::new()
            }
            Command::List => match self.runtime.block_on(client.list_domains()) {
                Ok(domains) => format_domain_list(&domains),
                Err(e) => self.failed(command, map_error(&e)),
            },
            Command::Create { domain } => match self.runtime.block_on(client.create_domain(domain)) {
                Ok(()) => vec![DOMAIN_CREATED.to_string()],
                Err(e) => self.failed(command, map_error(&e)),
            },
            Command::Drop { domain } => match self.runtime.block_on(client.drop_domain(domain)) {
                Ok(()) => vec![DOMAIN_DELETED.to_string()],
                Err(e) => self.failed(command, map_error(&e)),
            },
            Command::Meta { domain } => {
                match self.runtime.block_on(client.domain_metadata(domain)) {
                    Ok(meta) => format_metadata(domain, &meta),
                    Err(e) => self.failed(command, map_error(&e)),
                }
            }
            Command::DeleteItem { domain, item } => {
                match self.runtime.block_on(client.delete_item(domain, item)) {
                    Ok(()) => vec![ITEM_DELETED.to_string()],
                    Err(e) => self.failed(command, map_error(&e)),
                }
            }
            Command::Select { query } => match self.runtime.block_on(client.select(query)) {
                Ok(result) => format_select_result(&result),
                Err(e) => {
                    let mut lines = map_select_error(&e);
                    let first = lines.remove(0);
                    let mut out = self.failed(command, first);
                    out.extend(lines);
                    out
                }
            },
        };

        self.write_lines(&lines)?;
        Ok(Flow::Continue)
    }

    fn failed(&self, command: &Command, diagnostic: String) -> Vec<String> {
        warn!(command = command_name(command), "{}", diagnostic);
        vec![diagnostic]
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<(), AppError> {
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<(), AppError> {
        write!(self.out, "{}", PROMPT)?;
        self.out.flush()?;
        Ok(())
    }
}
