//! CLI presentation: text formatters for store results.

use crate::render::{compute_columns, render_console};
use crate::store::{DomainMetadata, SelectResult};
use chrono::{Local, TimeZone};

pub const NO_DOMAINS: &str = "no domains found";
pub const DOMAIN_CREATED: &str = "domain created";
pub const DOMAIN_DELETED: &str = "domain deleted";
pub const ITEM_DELETED: &str = "item deleted";

pub fn format_domain_list(domains: &[String]) -> Vec<String> {
    if domains.is_empty() {
        vec![NO_DOMAINS.to_string()]
    } else {
        domains.to_vec()
    }
}

/// Unix seconds as local calendar date and time; the raw number if out of range.
pub fn format_local_timestamp(timestamp: i64) -> String {
    match Local.timestamp_opt(timestamp, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S %z").to_string(),
        None => timestamp.to_string(),
    }
}

pub fn format_metadata(domain: &str, meta: &DomainMetadata) -> Vec<String> {
    vec![
        format!(
            "Metadata for domain '{}' at {}",
            domain,
            format_local_timestamp(meta.timestamp)
        ),
        format!("   ItemCount = {}", meta.item_count),
        format!("   ItemNamesSizeBytes = {}", meta.item_names_size_bytes),
        format!("   AttributeNameCount = {}", meta.attribute_name_count),
        format!("   AttributeValueCount = {}", meta.attribute_value_count),
        format!(
            "   AttributeNamesSizeBytes = {}",
            meta.attribute_names_size_bytes
        ),
        format!(
            "   AttributeValuesSizeBytes = {}",
            meta.attribute_values_size_bytes
        ),
    ]
}

pub fn format_select_result(result: &SelectResult) -> Vec<String> {
    render_console(&result.items, &compute_columns(&result.items))
}
