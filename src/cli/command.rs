//! Console command grammar: one trimmed input line to one `Command`.

use std::fmt;

/// Syntax errors detected before any store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// Wrong argument count for create, drop, meta or delete
    NoName,
    /// Select with no usable clause
    InvalidExpression,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::NoName => write!(f, "syntax error, no name found"),
            SyntaxError::InvalidExpression => write!(f, "syntax error, invalid expression"),
        }
    }
}

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Create { domain: String },
    Drop { domain: String },
    Meta { domain: String },
    DeleteItem { domain: String, item: String },
    /// Full input line, sent to the store verbatim
    Select { query: String },
    Help,
    Exit,
    Invalid(SyntaxError),
    Unrecognized { line: String },
}

impl Command {
    /// Classify a line. Variants are tried in a fixed order and the first match wins:
    /// exit, help, list, create, drop, meta, delete, select, unrecognized.
    ///
    /// Arguments are split on single spaces, so doubled spaces yield empty tokens and
    /// therefore an arity error.
    pub fn parse(line: &str) -> Command {
        let line = line.trim();

        if line == "q" || line == "exit" {
            return Command::Exit;
        }
        if line.is_empty() {
            return Command::Help;
        }
        if line == "ls" {
            return Command::List;
        }

        let tokens: Vec<&str> = line.split(' ').collect();
        match tokens[0] {
            "create" => single_name(&tokens)
                .map(|domain| Command::Create { domain })
                .unwrap_or(Command::Invalid(SyntaxError::NoName)),
            "drop" => single_name(&tokens)
                .map(|domain| Command::Drop { domain })
                .unwrap_or(Command::Invalid(SyntaxError::NoName)),
            "meta" => single_name(&tokens)
                .map(|domain| Command::Meta { domain })
                .unwrap_or(Command::Invalid(SyntaxError::NoName)),
            "delete" => match tokens.as_slice() {
                [_, domain, item] if !domain.is_empty() && !item.is_empty() => {
                    Command::DeleteItem {
                        domain: domain.to_string(),
                        item: item.to_string(),
                    }
                }
                _ => Command::Invalid(SyntaxError::NoName),
            },
            // A clause needs at least two tokens after the verb ("select * from d")
            "select" if tokens.len() > 2 => Command::Select {
                query: line.to_string(),
            },
            "select" => Command::Invalid(SyntaxError::InvalidExpression),
            _ => Command::Unrecognized {
                line: line.to_string(),
            },
        }
    }
}

fn single_name(tokens: &[&str]) -> Option<String> {
    match tokens {
        [_, name] if !name.is_empty() => Some(name.to_string()),
        _ => None,
    }
}
