//! Tag file decoding.
//!
//! Three layouts are accepted:
//!
//! ```yaml
//! # 1. a plain list of records
//! - name: Smile
//!   alias: [smile, smiling]
//!
//! # 2. a list under `content` (other top-level keys are ignored)
//! name: Expressions
//! content:
//!   - name: Smile
//!     alias: [smile]
//!
//! # 3. a map of prompt tag -> record; the key becomes the first alias
//! content:
//!   smile:
//!     name: Smile
//!     alias: [smiling]
//! ```

use serde_yaml::Value;
use tagweave_core::CatalogTag;

use crate::{CatalogError, CatalogResult};

/// Decode the text of one tag file. `path` is only used in error messages.
pub fn decode_tag_file(path: &str, text: &str) -> CatalogResult<Vec<CatalogTag>> {
    let decode_err = |reason: String| CatalogError::Decode {
        path: path.to_string(),
        reason,
    };

    let document: Value = serde_yaml::from_str(text).map_err(|e| decode_err(e.to_string()))?;

    let content = match document {
        Value::Mapping(mut map) => match map.remove("content") {
            Some(content) => content,
            None => Value::Mapping(map),
        },
        other => other,
    };

    match content {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(_) => {
            serde_yaml::from_value(content).map_err(|e| decode_err(e.to_string()))
        }
        Value::Mapping(map) => map
            .into_iter()
            .map(|(key, record)| {
                let key = scalar_to_string(&key)
                    .ok_or_else(|| decode_err(format!("non-scalar tag key: {key:?}")))?;
                let mut tag: CatalogTag = match record {
                    Value::Null => CatalogTag::default(),
                    record => serde_yaml::from_value(record)
                        .map_err(|e| decode_err(format!("tag '{key}': {e}")))?,
                };
                tag.alias.insert(0, key);
                Ok(tag)
            })
            .collect(),
        other => Err(decode_err(format!(
            "expected a list or a map of tags, found {}",
            kind_of(&other)
        ))),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a map",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_list() {
        let yaml = r#"
- name: Smile
  alias: [smile, smiling]
  description: Corners of the mouth turned up
  wikiURL: https://example.org/smile
- name: Frown
"#;
        let tags = decode_tag_file("face.yaml", yaml).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "Smile");
        assert_eq!(tags[0].alias, vec!["smile", "smiling"]);
        assert_eq!(tags[0].wiki_url.as_deref(), Some("https://example.org/smile"));
        assert!(tags[1].alias.is_empty());
        assert_eq!(tags[1].description, None);
    }

    #[test]
    fn decodes_list_under_content() {
        let yaml = r#"
name: Expressions
description: ignored at file level
content:
  - name: Smile
    alias: [smile]
"#;
        let tags = decode_tag_file("face.yaml", yaml).unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].alias, vec!["smile"]);
    }

    #[test]
    fn map_keys_become_first_alias() {
        let yaml = r#"
content:
  smile:
    name: Smile
    alias: [smiling]
  blush:
    name: Blush
"#;
        let tags = decode_tag_file("face.yaml", yaml).unwrap();
        let smile = tags.iter().find(|t| t.name == "Smile").unwrap();
        assert_eq!(smile.alias, vec!["smile", "smiling"]);
        let blush = tags.iter().find(|t| t.name == "Blush").unwrap();
        assert_eq!(blush.alias, vec!["blush"]);
    }

    #[test]
    fn top_level_map_without_content() {
        let tags = decode_tag_file("x.yaml", "1girl:\n  name: One girl\n").unwrap();
        assert_eq!(tags[0].alias, vec!["1girl"]);
        assert_eq!(tags[0].name, "One girl");
    }

    #[test]
    fn numeric_keys_and_empty_records() {
        let tags = decode_tag_file("x.yaml", "content:\n  100:\n").unwrap();
        assert_eq!(tags[0].alias, vec!["100"]);
        assert_eq!(tags[0].name, "");
    }

    #[test]
    fn empty_file_is_empty_list() {
        assert!(decode_tag_file("x.yaml", "").unwrap().is_empty());
    }

    #[test]
    fn scalar_document_is_rejected() {
        let err = decode_tag_file("x.yaml", "just a string").unwrap_err();
        assert!(err.to_string().contains("x.yaml"));
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(matches!(
            decode_tag_file("x.yaml", "- [unclosed"),
            Err(CatalogError::Decode { .. })
        ));
    }
}
