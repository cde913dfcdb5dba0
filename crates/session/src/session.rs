//! The editing session: one picker window's worth of state.

use tagweave_core::{EmptyCatalog, Error, PromptHost, Result, TagCatalog};
use tagweave_expr::{parse_tokens, serialize};
use tagweave_selection::{Placement, SelectionStore};
use tracing::{debug, info, warn};

/// Behaviour switches for a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Sort the selection into catalog order before writing it back.
    pub sort_on_commit: bool,
}

/// A selection bound to (at most) one prompt host and a catalog.
pub struct EditSession {
    store: SelectionStore,
    host: Option<Box<dyn PromptHost>>,
    catalog: Box<dyn TagCatalog>,
    options: SessionOptions,
}

impl EditSession {
    /// Open a session on `host`, importing whatever prompt it holds.
    pub fn open(host: Box<dyn PromptHost>, catalog: Box<dyn TagCatalog>) -> Result<Self> {
        let text = host.read_text()?;
        let mut store = SelectionStore::new();
        store.bulk_import(&parse_tokens(&text));
        info!(host = %host.describe(), tags = store.len(), "Editing session opened");

        Ok(Self {
            store,
            host: Some(host),
            catalog,
            options: SessionOptions::default(),
        })
    }

    /// A session with nothing to load from or commit to.
    pub fn detached(catalog: Box<dyn TagCatalog>) -> Self {
        debug!("Detached editing session opened");
        Self {
            store: SelectionStore::new(),
            host: None,
            catalog,
            options: SessionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SelectionStore {
        &mut self.store
    }

    /// Select a tag, labelled with its catalog display name when known.
    pub fn add(&mut self, name: &str) -> bool {
        let display = self.catalog.display_name(name);
        self.store.add(name, display.as_deref())
    }

    /// Like/unlike an alias from the catalog. Returns whether it is
    /// selected afterwards.
    pub fn like(&mut self, alias: &str) -> bool {
        let display = self.catalog.display_name(alias);
        self.store.toggle(alias, display.as_deref())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.store.remove(name)
    }

    pub fn adjust_weight(&mut self, name: &str, increase: bool) -> Option<f64> {
        self.store.adjust_weight(name, increase)
    }

    pub fn reorder(&mut self, name: &str, placement: &Placement) -> bool {
        self.store.reorder(name, placement)
    }

    pub fn sort_by_catalog(&mut self) {
        self.store.sort_by_reference(&self.catalog.reference_order());
    }

    /// On-screen labels in selection order.
    pub fn labels(&self, precision: usize) -> Vec<String> {
        self.store
            .iter()
            .map(|entry| entry.label_with_precision(precision))
            .collect()
    }

    /// The selection serialized in its current order.
    pub fn preview(&self) -> String {
        serialize(&self.store.export())
    }

    /// Bring the selection into the order a commit writes (catalog order
    /// when `sort_on_commit` is set) and return that text without touching
    /// the host.
    pub fn stage(&mut self) -> String {
        if self.options.sort_on_commit {
            self.sort_by_catalog();
        }
        self.preview()
    }

    /// Write the selection back to the host and return the text written.
    pub fn commit(&mut self) -> Result<String> {
        if self.host.is_none() {
            warn!("Commit requested on a session with no host");
            return Err(Error::NoHostBinding);
        }

        let text = self.stage();
        if let Some(host) = self.host.as_mut() {
            host.write_text(&text)?;
            info!(host = %host.describe(), tags = self.store.len(), "Selection committed");
        }
        Ok(text)
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::detached(Box::new(EmptyCatalog))
    }
}
