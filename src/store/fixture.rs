//! TOML fixture files used to seed a `MemoryClient`.
//!
//! ```toml
//! [[domains]]
//! name = "users"
//!
//! [[domains.items]]
//! name = "u1"
//! attributes = [["color", "red"], ["size", "M"]]
//! ```

use crate::error::AppError;
use crate::store::{Attribute, Item};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub domains: Vec<FixtureDomain>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureDomain {
    pub name: String,
    #[serde(default)]
    pub items: Vec<FixtureItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureItem {
    pub name: String,
    /// Ordered name/value pairs; order is kept as written
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
}

impl FixtureItem {
    pub fn to_item(&self) -> Item {
        Item::new(
            self.name.clone(),
            self.attributes
                .iter()
                .map(|(name, value)| Attribute::new(name.clone(), value.clone()))
                .collect(),
        )
    }
}

impl Fixture {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        toml::from_str(content).map_err(|e| AppError::FixtureError(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::FixtureError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }
}
