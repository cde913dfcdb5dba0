//! Tag catalog: the browsable library of known tags.
//!
//! A catalog is a data directory of YAML tag files, optionally nested into
//! folders:
//!
//! ```text
//! data/
//! ├── appearance/
//! │   ├── eyes.yaml
//! │   └── hair.yaml
//! └── style.yaml
//! ```
//!
//! [`CatalogTree`] mirrors the directory layout, [`TagLibrary`] reads and
//! caches individual files, and [`CatalogIndex`] answers the lookups an
//! editing session needs (display names and browse order).

mod file;
mod index;
mod library;
mod tree;

use std::path::PathBuf;

pub use file::decode_tag_file;
pub use index::{CatalogIndex, search};
pub use library::TagLibrary;
pub use tree::{CatalogEntry, CatalogTree, TAG_FILE_EXTENSION};

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Errors from the catalog subsystem.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog data directory not found: {0}")]
    MissingDataDir(PathBuf),

    #[error("invalid tag file path '{0}'")]
    InvalidPath(String),

    #[error("tag file not in catalog: {0}")]
    NotFound(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode tag file {path}: {reason}")]
    Decode { path: String, reason: String },
}
