//! CLI output: error mapping from store errors to console diagnostics.

use crate::error::StoreError;

/// One-line diagnostic for a failed store call: the structured `Code: Message` entries
/// joined by `; ` when the client supplied any, otherwise the error text.
pub fn map_error(e: &StoreError) -> String {
    e.to_string()
}

/// Diagnostic for a failed select: the one-line message, then the raw request and
/// response when the client kept them.
pub fn map_select_error(e: &StoreError) -> Vec<String> {
    let mut lines = vec![map_error(e)];
    if let Some(request) = e.raw_request() {
        lines.push(format!("request: {}", request));
    }
    if let Some(response) = e.raw_response() {
        lines.push(format!("response: {}", response));
    }
    lines
}
