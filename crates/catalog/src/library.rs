//! Tag library: reads tag files on demand and keeps them for the session.

use std::collections::HashMap;
use std::path::{Component, Path};
use tagweave_core::CatalogTag;
use tracing::{debug, warn};

use crate::index::CatalogIndex;
use crate::tree::CatalogTree;
use crate::{CatalogError, CatalogResult, decode_tag_file};

/// A scanned catalog plus a cache of the files read so far.
#[derive(Debug)]
pub struct TagLibrary {
    tree: CatalogTree,
    cache: HashMap<String, Vec<CatalogTag>>,
}

impl TagLibrary {
    /// Scan the data directory. Files are read lazily.
    pub fn open(data_dir: &Path) -> CatalogResult<Self> {
        Ok(Self {
            tree: CatalogTree::scan(data_dir)?,
            cache: HashMap::new(),
        })
    }

    pub fn tree(&self) -> &CatalogTree {
        &self.tree
    }

    /// Tags of one file, by its catalog-relative path.
    ///
    /// The path must be relative, free of `..`, and present in the scanned
    /// tree. The first successful read is cached.
    pub fn tags(&mut self, path: &str) -> CatalogResult<&[CatalogTag]> {
        if !self.cache.contains_key(path) {
            let tags = self.read(path)?;
            self.cache.insert(path.to_string(), tags);
        }
        Ok(self.cache.get(path).map(Vec::as_slice).unwrap_or_default())
    }

    /// Every tag in browse order. Files that fail to load are logged and
    /// skipped.
    pub fn all_tags(&mut self) -> Vec<CatalogTag> {
        let mut all = Vec::new();
        for path in self.tree.files() {
            match self.tags(&path) {
                Ok(tags) => all.extend_from_slice(tags),
                Err(e) => warn!(path = %path, error = %e, "Skipping tag file"),
            }
        }
        all
    }

    /// Build the lookup index over the whole catalog.
    pub fn index(&mut self) -> CatalogIndex {
        CatalogIndex::new(self.all_tags())
    }

    fn read(&self, path: &str) -> CatalogResult<Vec<CatalogTag>> {
        validate_relative(path)?;
        if !self.tree.contains_file(path) {
            return Err(CatalogError::NotFound(path.to_string()));
        }

        let full = self.tree.root().join(path);
        let text = std::fs::read_to_string(&full).map_err(|source| CatalogError::Io {
            path: full.clone(),
            source,
        })?;
        let tags = decode_tag_file(path, &text)?;
        debug!(path, count = tags.len(), "Tag file loaded");
        Ok(tags)
    }
}

fn validate_relative(path: &str) -> CatalogResult<()> {
    let ok = !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if ok {
        Ok(())
    } else {
        Err(CatalogError::InvalidPath(path.to_string()))
    }
}
