//! Tag records: what the parser produces and what the selection store holds.

use serde::{Deserialize, Serialize};

/// Weight a tag carries when the prompt text gives it none.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Decimal places shown in a selected tag's on-screen label.
pub const LABEL_PRECISION: usize = 3;

/// The result of parsing one leaf or one parenthesized group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagToken {
    pub value: TagValue,
    pub weight: f64,
}

/// Payload of a [`TagToken`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TagValue {
    /// Trimmed, non-empty tag text.
    Plain(String),
    /// Members of a group. The group's own weight has already been
    /// multiplied into every member, and nested groups are spliced in.
    Group(Vec<TagToken>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Plain,
    Group,
}

impl TagToken {
    pub fn plain(name: impl Into<String>, weight: f64) -> Self {
        Self {
            value: TagValue::Plain(name.into()),
            weight,
        }
    }

    pub fn group(members: Vec<TagToken>, weight: f64) -> Self {
        Self {
            value: TagValue::Group(members),
            weight,
        }
    }

    pub fn kind(&self) -> TagKind {
        match self.value {
            TagValue::Plain(_) => TagKind::Plain,
            TagValue::Group(_) => TagKind::Group,
        }
    }

    /// The tag text, or `None` for a group.
    pub fn name(&self) -> Option<&str> {
        match &self.value {
            TagValue::Plain(name) => Some(name),
            TagValue::Group(_) => None,
        }
    }

    /// Visit every plain token reachable from this one, in order.
    pub fn for_each_plain<'a>(&'a self, f: &mut impl FnMut(&'a str, f64)) {
        match &self.value {
            TagValue::Plain(name) => f(name, self.weight),
            TagValue::Group(members) => {
                for member in members {
                    member.for_each_plain(f);
                }
            }
        }
    }
}

/// Anything that can be written back into prompt text as `name[:weight]`.
pub trait Weighted {
    fn name(&self) -> &str;
    fn weight(&self) -> f64;
}

/// The `{name, weight}` pair exchanged with collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedTag {
    pub name: String,
    pub weight: f64,
}

impl WeightedTag {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

impl Weighted for WeightedTag {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

/// An entry in the selection store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedTag {
    /// Unique key; the text written into the prompt.
    pub name: String,

    /// Human label shown next to the name (usually the catalog tag's name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    pub weight: f64,
}

impl SelectedTag {
    pub fn new(name: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            name: name.into(),
            display_name,
            weight: DEFAULT_WEIGHT,
        }
    }

    /// On-screen label: `name - display ×1.050`.
    pub fn label(&self) -> String {
        self.label_with_precision(LABEL_PRECISION)
    }

    pub fn label_with_precision(&self, precision: usize) -> String {
        match &self.display_name {
            Some(display) => format!(
                "{} - {} ×{:.*}",
                self.name, display, precision, self.weight
            ),
            None => format!("{} ×{:.*}", self.name, precision, self.weight),
        }
    }
}

impl Weighted for SelectedTag {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}
