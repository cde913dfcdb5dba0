//! Catalog lookups: the read-only view of known tags the session consults.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One tag record from the catalog.
///
/// `name` is the human label; `alias` holds the spellings that go into the
/// prompt text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogTag {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub alias: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, rename = "wikiURL", skip_serializing_if = "Option::is_none")]
    pub wiki_url: Option<String>,
}

impl CatalogTag {
    /// Whether `tag` is this record's name or one of its aliases.
    pub fn answers_to(&self, tag: &str) -> bool {
        self.name == tag || self.alias.iter().any(|a| a == tag)
    }
}

/// Read-only catalog lookups used by the editing session.
pub trait TagCatalog {
    /// The human label for a prompt tag or alias, if the catalog knows it.
    fn display_name(&self, tag: &str) -> Option<String>;

    /// Position of every known name and alias in browse order.
    fn reference_order(&self) -> HashMap<String, usize>;
}

/// A catalog that knows nothing. Used when no data directory is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl TagCatalog for EmptyCatalog {
    fn display_name(&self, _tag: &str) -> Option<String> {
        None
    }

    fn reference_order(&self) -> HashMap<String, usize> {
        HashMap::new()
    }
}
