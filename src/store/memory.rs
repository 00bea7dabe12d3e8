//! In-process `DatabaseClient` holding domains in memory.

use crate::error::StoreError;
use crate::store::fixture::Fixture;
use crate::store::query::{Output, SelectQuery, SortOrder};
use crate::store::{Attribute, DatabaseClient, DomainMetadata, Item, SelectResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Domains keyed by name; items keep insertion order.
#[derive(Default)]
pub struct MemoryClient {
    domains: RwLock<BTreeMap<String, Vec<Item>>>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixture(fixture: &Fixture) -> Self {
        let client = Self::new();
        {
            let mut domains = client.domains.write();
            for domain in &fixture.domains {
                let items = domains.entry(domain.name.clone()).or_default();
                for item in &domain.items {
                    upsert(items, item.to_item());
                }
            }
        }
        client
    }

    /// Add or replace an item. Creates the domain when missing.
    pub fn put_item(&self, domain: &str, item: Item) {
        let mut domains = self.domains.write();
        upsert(domains.entry(domain.to_string()).or_default(), item);
    }
}

fn upsert(items: &mut Vec<Item>, item: Item) {
    match items.iter_mut().find(|existing| existing.name == item.name) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

fn project(item: &Item, output: &Output) -> Item {
    match output {
        Output::AllAttributes => item.clone(),
        Output::ItemNameOnly => Item::new(item.name.clone(), Vec::new()),
        Output::Attributes(names) => Item::new(
            item.name.clone(),
            item.attributes
                .iter()
                .filter(|a| names.iter().any(|n| n == &a.name))
                .cloned()
                .collect(),
        ),
        // Counting is handled before projection
        Output::Count => item.clone(),
    }
}

fn byte_len(s: &str) -> u64 {
    s.len() as u64
}

#[async_trait]
impl DatabaseClient for MemoryClient {
    async fn list_domains(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.domains.read().keys().cloned().collect())
    }

    async fn create_domain(&self, name: &str) -> Result<(), StoreError> {
        debug!(domain = %name, "create domain");
        self.domains.write().entry(name.to_string()).or_default();
        Ok(())
    }

    async fn drop_domain(&self, name: &str) -> Result<(), StoreError> {
        debug!(domain = %name, "drop domain");
        self.domains.write().remove(name);
        Ok(())
    }

    async fn domain_metadata(&self, name: &str) -> Result<DomainMetadata, StoreError> {
        let domains = self.domains.read();
        let items = domains
            .get(name)
            .ok_or_else(|| StoreError::NoSuchDomain(name.to_string()))?;

        let mut attribute_names = HashSet::new();
        let mut meta = DomainMetadata {
            item_count: items.len() as u64,
            item_names_size_bytes: 0,
            attribute_name_count: 0,
            attribute_value_count: 0,
            attribute_names_size_bytes: 0,
            attribute_values_size_bytes: 0,
            timestamp: chrono::Utc::now().timestamp(),
        };
        for item in items {
            meta.item_names_size_bytes += byte_len(&item.name);
            for attr in &item.attributes {
                if attribute_names.insert(attr.name.as_str()) {
                    meta.attribute_names_size_bytes += byte_len(&attr.name);
                }
                meta.attribute_value_count += 1;
                meta.attribute_values_size_bytes += byte_len(&attr.value);
            }
        }
        meta.attribute_name_count = attribute_names.len() as u64;
        Ok(meta)
    }

    async fn delete_item(&self, domain: &str, item: &str) -> Result<(), StoreError> {
        let mut domains = self.domains.write();
        let items = domains
            .get_mut(domain)
            .ok_or_else(|| StoreError::NoSuchDomain(domain.to_string()))?;
        items.retain(|i| i.name != item);
        Ok(())
    }

    async fn select(&self, query: &str) -> Result<SelectResult, StoreError> {
        let parsed = SelectQuery::parse(query)?;
        debug!(domain = %parsed.domain, "select");

        let domains = self.domains.read();
        let items = domains
            .get(&parsed.domain)
            .ok_or_else(|| StoreError::NoSuchDomain(parsed.domain.clone()))?;

        let mut matched: Vec<&Item> = items
            .iter()
            .filter(|item| parsed.filter.as_ref().map_or(true, |f| f.matches(&item.name)))
            .collect();

        match parsed.order {
            Some(SortOrder::Ascending) => matched.sort_by(|a, b| a.name.cmp(&b.name)),
            Some(SortOrder::Descending) => matched.sort_by(|a, b| b.name.cmp(&a.name)),
            None => {}
        }
        if let Some(limit) = parsed.limit {
            matched.truncate(limit);
        }

        if parsed.output == Output::Count {
            return Ok(SelectResult {
                items: vec![Item::new(
                    "Domain",
                    vec![Attribute::new("Count", matched.len().to_string())],
                )],
            });
        }

        Ok(SelectResult {
            items: matched
                .into_iter()
                .map(|item| project(item, &parsed.output))
                .collect(),
        })
    }
}
