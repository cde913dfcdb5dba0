//! Catalog index and search.

use std::collections::HashMap;
use tagweave_core::{CatalogTag, TagCatalog};

/// Flattened catalog in browse order.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    tags: Vec<CatalogTag>,
}

impl CatalogIndex {
    pub fn new(tags: Vec<CatalogTag>) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> &[CatalogTag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// First record that answers to `tag`.
    pub fn find(&self, tag: &str) -> Option<&CatalogTag> {
        self.tags.iter().find(|t| t.answers_to(tag))
    }

    pub fn search(&self, term: &str) -> Vec<&CatalogTag> {
        search(&self.tags, term)
    }
}

impl TagCatalog for CatalogIndex {
    fn display_name(&self, tag: &str) -> Option<String> {
        self.find(tag)
            .map(|t| t.name.clone())
            .filter(|name| !name.is_empty())
    }

    fn reference_order(&self) -> HashMap<String, usize> {
        let mut order = HashMap::new();
        for (i, tag) in self.tags.iter().enumerate() {
            for key in std::iter::once(&tag.name).chain(&tag.alias) {
                if !key.is_empty() {
                    order.entry(key.clone()).or_insert(i);
                }
            }
        }
        order
    }
}

/// Case-insensitive substring search over names and aliases.
/// An empty term matches everything.
pub fn search<'a>(tags: &'a [CatalogTag], term: &str) -> Vec<&'a CatalogTag> {
    let term = term.to_lowercase();
    tags.iter()
        .filter(|tag| {
            term.is_empty()
                || tag.name.to_lowercase().contains(&term)
                || tag.alias.iter().any(|a| a.to_lowercase().contains(&term))
        })
        .collect()
}
