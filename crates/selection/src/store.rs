//! Selection store: the tags a user has picked, in prompt order.
//!
//! Backed by an insertion-ordered map keyed by tag name, so uniqueness and
//! order come from the same structure. Every operation is a no-op when its
//! precondition fails (adding a present tag, adjusting an absent one); none
//! of them report errors.

use indexmap::IndexMap;
use std::collections::HashMap;
use tagweave_core::{SelectedTag, TagToken};
use tracing::debug;

/// Increment applied by a single weight adjustment.
pub const WEIGHT_STEP: f64 = 0.05;

/// Where to drop a moved entry relative to another one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    Before(String),
    After(String),
}

impl Placement {
    fn target(&self) -> &str {
        match self {
            Placement::Before(target) | Placement::After(target) => target,
        }
    }
}

/// Ordered, uniqueness-enforcing collection of selected tags.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    entries: IndexMap<String, SelectedTag>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` at the end with weight `1.0`.
    ///
    /// Returns `false` without touching the store when the name is already
    /// selected or is blank.
    pub fn add(&mut self, name: &str, display_name: Option<&str>) -> bool {
        let name = name.trim();
        if name.is_empty() || self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(
            name.to_string(),
            SelectedTag::new(name, display_name.map(str::to_string)),
        );
        debug!(tag = name, "Tag selected");
        true
    }

    /// Remove `name` if selected, otherwise add it. Returns whether the tag
    /// is selected afterwards.
    pub fn toggle(&mut self, name: &str, display_name: Option<&str>) -> bool {
        if self.remove(name) {
            false
        } else {
            self.add(name, display_name)
        }
    }

    /// Returns `true` if the tag was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.entries.shift_remove(name.trim()).is_some();
        if removed {
            debug!(tag = name, "Tag removed");
        }
        removed
    }

    /// Step the weight up or down by [`WEIGHT_STEP`]. No clamping.
    ///
    /// Returns the new weight, or `None` when the tag is not selected.
    pub fn adjust_weight(&mut self, name: &str, increase: bool) -> Option<f64> {
        let entry = self.entries.get_mut(name.trim())?;
        if increase {
            entry.weight += WEIGHT_STEP;
        } else {
            entry.weight -= WEIGHT_STEP;
        }
        Some(entry.weight)
    }

    /// Returns `false` when the tag is not selected.
    pub fn set_weight(&mut self, name: &str, weight: f64) -> bool {
        match self.entries.get_mut(name.trim()) {
            Some(entry) => {
                entry.weight = weight;
                true
            }
            None => false,
        }
    }

    /// Move `name` next to another selected tag, keeping every other entry's
    /// relative order.
    ///
    /// Returns `false` when either tag is missing or both are the same tag.
    pub fn reorder(&mut self, name: &str, placement: &Placement) -> bool {
        let (name, target) = (name.trim(), placement.target().trim());
        if name == target {
            return false;
        }
        let (Some(from), Some(anchor)) = (
            self.entries.get_index_of(name),
            self.entries.get_index_of(target),
        ) else {
            return false;
        };

        // Removing `from` shifts everything after it one slot left.
        let anchor_after_removal = if from < anchor { anchor - 1 } else { anchor };
        let to = match placement {
            Placement::Before(_) => anchor_after_removal,
            Placement::After(_) => anchor_after_removal + 1,
        };
        self.entries.move_index(from, to);
        debug!(tag = name, from, to, "Tag moved");
        true
    }

    /// Load parsed tokens without clearing: each tag is added if missing,
    /// then takes the token's weight. Later duplicates win on weight.
    pub fn bulk_import(&mut self, tokens: &[TagToken]) {
        for token in tokens {
            token.for_each_plain(&mut |name, weight| {
                self.add(name, None);
                self.set_weight(name, weight);
            });
        }
        debug!(count = self.entries.len(), "Selection imported");
    }

    /// Snapshot of the selection in order.
    pub fn export(&self) -> Vec<SelectedTag> {
        self.entries.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedTag> {
        self.entries.values()
    }

    pub fn get(&self, name: &str) -> Option<&SelectedTag> {
        self.entries.get(name.trim())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name.trim())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Stable sort by each tag's position in a reference ordering (usually
    /// the flattened catalog). Tags the reference does not know keep their
    /// relative order after all known ones.
    pub fn sort_by_reference(&mut self, reference: &HashMap<String, usize>) {
        self.entries.sort_by(|a, _, b, _| {
            let rank = |name: &String| reference.get(name).copied().unwrap_or(usize::MAX);
            rank(a).cmp(&rank(b))
        });
    }
}
