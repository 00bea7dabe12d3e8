//! Attribute Store
//!
//! The record table model returned by the store and the `DatabaseClient` seam the
//! console and web viewer talk through. The remote transport lives behind the trait;
//! `MemoryClient` is the in-process implementation.

pub mod fixture;
pub mod memory;
pub mod query;

pub use memory::MemoryClient;

use crate::error::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A name/value pair attached to an item. Values are opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One record of a result set: the item name plus its attributes in store order.
///
/// Attribute lists are schema-less: two items of the same result set may carry
/// different counts and different names at the same position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl Item {
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }
}

/// Items returned by one select query, in the order the store returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectResult {
    pub items: Vec<Item>,
}

/// Size and count statistics for a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainMetadata {
    pub item_count: u64,
    pub item_names_size_bytes: u64,
    pub attribute_name_count: u64,
    pub attribute_value_count: u64,
    pub attribute_names_size_bytes: u64,
    pub attribute_values_size_bytes: u64,
    /// Unix seconds at which the statistics were computed
    pub timestamp: i64,
}

/// Operations the console and web viewer need from the attribute store.
///
/// Implementations must be safe for concurrent read-only use: the web viewer calls
/// through one shared handle from many requests at once.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    async fn list_domains(&self) -> Result<Vec<String>, StoreError>;

    async fn create_domain(&self, name: &str) -> Result<(), StoreError>;

    async fn drop_domain(&self, name: &str) -> Result<(), StoreError>;

    async fn domain_metadata(&self, name: &str) -> Result<DomainMetadata, StoreError>;

    async fn delete_item(&self, domain: &str, item: &str) -> Result<(), StoreError>;

    /// Run a select expression. The query text is sent verbatim.
    async fn select(&self, query: &str) -> Result<SelectResult, StoreError>;
}

/// Client handle constructed once at startup and passed to every consumer.
pub type SharedClient = Arc<dyn DatabaseClient>;
