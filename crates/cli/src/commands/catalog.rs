//! `tagweave catalog` — browse the tag catalog.

use std::path::PathBuf;
use tagweave_catalog::TagLibrary;
use tagweave_core::CatalogTag;

use super::load_config;

fn open_library(data_dir: Option<PathBuf>) -> Result<TagLibrary, Box<dyn std::error::Error>> {
    let config = load_config(data_dir)?;
    Ok(TagLibrary::open(&config.data_dir())?)
}

pub fn tree(data_dir: Option<PathBuf>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let library = open_library(data_dir)?;
    let tree = library.tree();

    if json {
        println!("{}", serde_json::to_string_pretty(tree.children())?);
        return Ok(());
    }

    println!("📚 {}", tree.root().display());
    if tree.is_empty() {
        println!("   (no tag files)");
    } else {
        print!("{}", tree.outline());
    }
    Ok(())
}

pub fn tags(
    data_dir: Option<PathBuf>,
    file: &str,
    search: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut library = open_library(data_dir)?;
    let tags = library.tags(file)?;

    let shown: Vec<&CatalogTag> = match search {
        Some(term) => tagweave_catalog::search(tags, term),
        None => tags.iter().collect(),
    };
    println!("🏷  {file} ({} of {} tags)", shown.len(), tags.len());
    print_tags(&shown);
    Ok(())
}

pub fn search(data_dir: Option<PathBuf>, term: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut library = open_library(data_dir)?;
    let index = library.index();
    let hits = index.search(term);

    println!("🔍 '{term}': {} matches", hits.len());
    print_tags(&hits);
    Ok(())
}

fn print_tags(tags: &[&CatalogTag]) {
    for tag in tags {
        let aliases = tag.alias.join(", ");
        match &tag.description {
            Some(desc) if !desc.is_empty() => println!("   {} [{aliases}] {desc}", tag.name),
            _ => println!("   {} [{aliases}]", tag.name),
        }
    }
}
