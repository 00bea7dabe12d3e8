//! Shared test utilities for integration tests
//!
//! `RecordingClient` records every store call so tests can assert which calls a
//! command made (or that it made none).

use async_trait::async_trait;
use parking_lot::Mutex;
use sdbview::error::{ServiceErrorDetail, StoreError};
use sdbview::store::{Attribute, DatabaseClient, DomainMetadata, Item, SelectResult};

#[derive(Default)]
pub struct RecordingClient {
    calls: Mutex<Vec<String>>,
    pub domains: Vec<String>,
    pub items: Vec<Item>,
    pub fail_with: Option<String>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domains(domains: &[&str]) -> Self {
        Self {
            domains: domains.iter().map(|d| d.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Every call fails with a structured service error carrying this code.
    pub fn failing(code: &str) -> Self {
        Self {
            fail_with: Some(code.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: String) -> Result<(), StoreError> {
        self.calls.lock().push(call);
        match &self.fail_with {
            Some(code) => Err(StoreError::Service {
                errors: vec![ServiceErrorDetail {
                    code: code.clone(),
                    message: "request rejected".to_string(),
                }],
                request: Some("Action=Test".to_string()),
                response: None,
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DatabaseClient for RecordingClient {
    async fn list_domains(&self) -> Result<Vec<String>, StoreError> {
        self.record("list_domains".to_string())?;
        Ok(self.domains.clone())
    }

    async fn create_domain(&self, name: &str) -> Result<(), StoreError> {
        self.record(format!("create_domain({})", name))
    }

    async fn drop_domain(&self, name: &str) -> Result<(), StoreError> {
        self.record(format!("drop_domain({})", name))
    }

    async fn domain_metadata(&self, name: &str) -> Result<DomainMetadata, StoreError> {
        self.record(format!("domain_metadata({})", name))?;
        Ok(DomainMetadata {
            item_count: 1,
            item_names_size_bytes: 2,
            attribute_name_count: 3,
            attribute_value_count: 4,
            attribute_names_size_bytes: 5,
            attribute_values_size_bytes: 6,
            timestamp: 1_400_000_000,
        })
    }

    async fn delete_item(&self, domain: &str, item: &str) -> Result<(), StoreError> {
        self.record(format!("delete_item({}, {})", domain, item))
    }

    async fn select(&self, query: &str) -> Result<SelectResult, StoreError> {
        self.record(format!("select({})", query))?;
        Ok(SelectResult {
            items: self.items.clone(),
        })
    }
}

pub fn item(name: &str, attrs: &[(&str, &str)]) -> Item {
    Item::new(
        name,
        attrs.iter().map(|(n, v)| Attribute::new(*n, *v)).collect(),
    )
}
