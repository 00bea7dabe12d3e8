//! Select expression subset understood by `MemoryClient`.
//!
//! ```text
//! select <* | itemName() | count(*) | attr, ...> from <domain>
//!     [where itemName() <op> '<literal>']
//!     [order by itemName() [asc|desc]]
//!     [limit <n>]
//! ```
//!
//! Keywords and `itemName()` are case-insensitive. Names may be quoted with backticks,
//! literals use single quotes with `''` as the escaped quote.

use crate::error::StoreError;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

const SELECT_PATTERN: &str = r"(?is)^\s*select\s+(?P<output>.+?)\s+from\s+(?P<domain>`[^`]+`|[A-Za-z0-9_.\-]+)(?:\s+where\s+itemname\(\)\s*(?P<op>!=|>=|<=|=|>|<)\s*'(?P<literal>(?:[^']|'')*)')?(?:\s+(?P<order>order\s+by)\s+itemname\(\)(?:\s+(?P<dir>asc|desc))?)?(?:\s+limit\s+(?P<limit>\d+))?\s*$";

fn select_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SELECT_PATTERN).expect("select pattern compiles"))
}

/// What a select returns for each matching item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    AllAttributes,
    ItemNameOnly,
    Count,
    Attributes(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl CompareOp {
    fn parse(op: &str) -> Option<Self> {
        match op {
            "=" => Some(CompareOp::Eq),
            "!=" => Some(CompareOp::Ne),
            ">" => Some(CompareOp::Gt),
            ">=" => Some(CompareOp::Ge),
            "<" => Some(CompareOp::Lt),
            "<=" => Some(CompareOp::Le),
            _ => None,
        }
    }

    fn holds(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ne => ordering != Ordering::Equal,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Ge => ordering != Ordering::Less,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Le => ordering != Ordering::Greater,
        }
    }
}

/// Item-name predicate from the `where` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    pub op: CompareOp,
    pub literal: String,
}

impl NameFilter {
    /// Lexicographic comparison, as the store compares text.
    pub fn matches(&self, item_name: &str) -> bool {
        self.op.holds(item_name.cmp(self.literal.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// A parsed select expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    pub output: Output,
    pub domain: String,
    pub filter: Option<NameFilter>,
    pub order: Option<SortOrder>,
    pub limit: Option<usize>,
}

impl SelectQuery {
    pub fn parse(query: &str) -> Result<Self, StoreError> {
        let invalid = |message: &str| StoreError::InvalidQuery {
            message: message.to_string(),
            request: Some(query.to_string()),
        };

        let caps = select_regex()
            .captures(query)
            .ok_or_else(|| invalid("unsupported select expression"))?;

        let output = parse_output(&caps["output"]).ok_or_else(|| invalid("invalid output list"))?;
        let domain = unquote_name(&caps["domain"]);

        let filter = match (caps.name("op"), caps.name("literal")) {
            (Some(op), Some(literal)) => Some(NameFilter {
                op: CompareOp::parse(op.as_str()).ok_or_else(|| invalid("invalid comparison"))?,
                literal: literal.as_str().replace("''", "'"),
            }),
            _ => None,
        };

        let order = caps.name("order").map(|_| match caps.name("dir") {
            Some(dir) if dir.as_str().eq_ignore_ascii_case("desc") => SortOrder::Descending,
            _ => SortOrder::Ascending,
        });

        let limit = match caps.name("limit") {
            Some(m) => Some(
                m.as_str()
                    .parse::<usize>()
                    .map_err(|_| invalid("invalid limit"))?,
            ),
            None => None,
        };

        Ok(Self {
            output,
            domain,
            filter,
            order,
            limit,
        })
    }
}

fn parse_output(raw: &str) -> Option<Output> {
    let trimmed = raw.trim();
    if trimmed == "*" {
        return Some(Output::AllAttributes);
    }
    if trimmed.eq_ignore_ascii_case("itemname()") {
        return Some(Output::ItemNameOnly);
    }
    if trimmed.eq_ignore_ascii_case("count(*)") {
        return Some(Output::Count);
    }
    let names: Vec<String> = trimmed
        .split(',')
        .map(|n| unquote_name(n.trim()))
        .collect();
    if names.iter().any(|n| n.is_empty()) {
        return None;
    }
    Some(Output::Attributes(names))
}

fn unquote_name(raw: &str) -> String {
    raw.strip_prefix('`')
        .and_then(|s| s.strip_suffix('`'))
        .unwrap_or(raw)
        .to_string()
}
