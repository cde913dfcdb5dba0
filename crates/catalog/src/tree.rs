//! Directory tree of tag files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{CatalogError, CatalogResult};

/// Only files with this suffix are catalog files.
pub const TAG_FILE_EXTENSION: &str = ".yaml";

/// A node in the catalog tree. Paths are relative to the data directory and
/// always `/`-separated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogEntry {
    Directory {
        path: String,
        children: BTreeMap<String, CatalogEntry>,
    },
    File {
        path: String,
    },
}

impl CatalogEntry {
    pub fn is_directory(&self) -> bool {
        matches!(self, CatalogEntry::Directory { .. })
    }

    pub fn path(&self) -> &str {
        match self {
            CatalogEntry::Directory { path, .. } | CatalogEntry::File { path } => path,
        }
    }
}

/// The scanned layout of a catalog data directory.
#[derive(Debug, Clone)]
pub struct CatalogTree {
    root: PathBuf,
    children: BTreeMap<String, CatalogEntry>,
}

impl CatalogTree {
    /// Scan `root` recursively.
    ///
    /// Directories with no tag files anywhere below them are left out.
    /// Subdirectories that cannot be read are logged and treated as empty.
    pub fn scan(root: &Path) -> CatalogResult<Self> {
        if !root.is_dir() {
            return Err(CatalogError::MissingDataDir(root.to_path_buf()));
        }
        let children = scan_dir(root, "");
        debug!(root = %root.display(), entries = children.len(), "Catalog scanned");
        Ok(Self {
            root: root.to_path_buf(),
            children,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn children(&self) -> &BTreeMap<String, CatalogEntry> {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether `path` names a tag file in the tree.
    pub fn contains_file(&self, path: &str) -> bool {
        let mut level = &self.children;
        let mut parts = path.split('/').peekable();
        while let Some(part) = parts.next() {
            match level.get(part) {
                Some(CatalogEntry::Directory { children, .. }) if parts.peek().is_some() => {
                    level = children;
                }
                Some(CatalogEntry::File { .. }) => return parts.peek().is_none(),
                _ => return false,
            }
        }
        false
    }

    /// Every tag file path in browse order: at each level directories come
    /// before files, then names sort ascending.
    pub fn files(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_files(&self.children, &mut out);
        out
    }

    /// Indented outline of the tree, as shown by the file browser.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        write_outline(&self.children, 0, &mut out);
        out
    }
}

fn scan_dir(dir: &Path, rel: &str) -> BTreeMap<String, CatalogEntry> {
    let mut result = BTreeMap::new();
    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "Skipping unreadable catalog directory");
            return result;
        }
    };

    for entry in read_dir.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        let item_rel = if rel.is_empty() {
            name.clone()
        } else {
            format!("{rel}/{name}")
        };
        let full = entry.path();

        if full.is_dir() {
            let children = scan_dir(&full, &item_rel);
            if !children.is_empty() {
                result.insert(
                    name,
                    CatalogEntry::Directory {
                        path: item_rel,
                        children,
                    },
                );
            }
        } else if name.ends_with(TAG_FILE_EXTENSION) {
            result.insert(name, CatalogEntry::File { path: item_rel });
        }
    }
    result
}

/// Directories first, then files; the BTreeMap already orders by name.
fn browse_order(level: &BTreeMap<String, CatalogEntry>) -> impl Iterator<Item = (&String, &CatalogEntry)> {
    let dirs = level.iter().filter(|(_, e)| e.is_directory());
    let files = level.iter().filter(|(_, e)| !e.is_directory());
    dirs.chain(files)
}

fn collect_files(level: &BTreeMap<String, CatalogEntry>, out: &mut Vec<String>) {
    for (_, entry) in browse_order(level) {
        match entry {
            CatalogEntry::Directory { children, .. } => collect_files(children, out),
            CatalogEntry::File { path } => out.push(path.clone()),
        }
    }
}

fn write_outline(level: &BTreeMap<String, CatalogEntry>, depth: usize, out: &mut String) {
    for (name, entry) in browse_order(level) {
        let indent = "  ".repeat(depth);
        match entry {
            CatalogEntry::Directory { children, .. } => {
                out.push_str(&format!("{indent}{name}/\n"));
                write_outline(children, depth + 1, out);
            }
            CatalogEntry::File { .. } => {
                let label = name.strip_suffix(TAG_FILE_EXTENSION).unwrap_or(name);
                out.push_str(&format!("{indent}{label}\n"));
            }
        }
    }
}
