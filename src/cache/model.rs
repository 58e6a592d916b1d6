//! Cache data model
//!
//! The persisted structure is three levels of ordered maps:
//! category name, then table name, then key, ending in a locator.
//! BTreeMaps keep the rendered form deterministic, so equal caches
//! serialize to identical text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::registry::Category;

/// Table name for filename and extension keys
pub const EXTS: &str = "exts";

/// Table name for short-name keys
pub const NAMES: &str = "names";

/// Where a component lives: owning namespace and identifier within it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator(String, String);

impl Locator {
    pub fn new(namespace: impl Into<String>, ident: impl Into<String>) -> Self {
        Self(namespace.into(), ident.into())
    }

    /// Owning namespace
    pub fn namespace(&self) -> &str {
        &self.0
    }

    /// Identifier within the namespace
    pub fn ident(&self) -> &str {
        &self.1
    }
}

/// Key-to-locator table for one kind of key
pub type LookupMapping = BTreeMap<String, Locator>;

/// Tables belonging to one category, by table name
pub type CategoryCache = BTreeMap<String, LookupMapping>;

/// The full set of lookup tables, persisted as one unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cache {
    categories: BTreeMap<String, CategoryCache>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the tables discovered for a category
    pub fn insert_category(&mut self, category: Category, tables: CategoryCache) {
        self.categories.insert(category.as_str().to_string(), tables);
    }

    /// Look up a table, if the category and table exist
    pub fn table(&self, category: Category, table: &str) -> Option<&LookupMapping> {
        self.categories
            .get(category.as_str())
            .and_then(|tables| tables.get(table))
    }

    /// Fetch a table for insertion, creating category and table as needed
    pub fn table_mut(&mut self, category: Category, table: &str) -> &mut LookupMapping {
        self.categories
            .entry(category.as_str().to_string())
            .or_default()
            .entry(table.to_string())
            .or_default()
    }

    /// Iterate categories with their tables, in name order
    pub fn categories(&self) -> impl Iterator<Item = (&str, &CategoryCache)> {
        self.categories
            .iter()
            .map(|(name, tables)| (name.as_str(), tables))
    }

    /// Total number of keys across every table
    pub fn key_count(&self) -> usize {
        self.categories
            .values()
            .flat_map(|tables| tables.values())
            .map(|table| table.len())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
