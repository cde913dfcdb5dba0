//! `tagweave parse` / `tagweave format` — one-shot prompt conversion.

use tagweave_expr::{parse_tokens, serialize};
use tagweave_selection::SelectionStore;

use super::text_or_stdin;

pub fn parse(text: Option<String>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = text_or_stdin(text)?;
    let tags = tagweave_expr::parse(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    if tags.is_empty() {
        println!("(no tags)");
        return Ok(());
    }
    let width = tags.iter().map(|t| t.name.chars().count()).max().unwrap_or(0);
    for tag in &tags {
        println!("  {:<width$}  {:.2}", tag.name, tag.weight);
    }
    Ok(())
}

pub fn format(text: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let text = text_or_stdin(text)?;
    println!("{}", normalize(&text));
    Ok(())
}

/// Parse into a fresh store (dropping duplicates) and serialize back.
fn normalize(text: &str) -> String {
    let mut store = SelectionStore::new();
    store.bulk_import(&parse_tokens(text));
    serialize(&store.export())
}
