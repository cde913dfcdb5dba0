//! # Tagweave Core
//!
//! Domain types, traits, and error definitions for the Tagweave prompt builder.
//! This crate has no framework dependencies. It defines the vocabulary the
//! expression parser, the selection store, the catalog, and the editing
//! session all share.
//!
//! ## Design Philosophy
//!
//! Every collaborator outside the core is defined as a trait here:
//! - [`PromptHost`] supplies and receives the raw prompt text
//! - [`TagCatalog`] resolves display names and browse order for tags
//!
//! Implementations live in their respective crates, so the parser and the
//! store can be tested without any host application around them.

pub mod catalog;
pub mod error;
pub mod host;
pub mod token;

// Re-export key types at crate root for ergonomics
pub use catalog::{CatalogTag, EmptyCatalog, TagCatalog};
pub use error::{Error, ErrorKind, Result};
pub use host::PromptHost;
pub use token::{
    DEFAULT_WEIGHT, LABEL_PRECISION, SelectedTag, TagKind, TagToken, TagValue, Weighted, WeightedTag,
};
