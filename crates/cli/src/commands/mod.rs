//! Subcommand implementations.

pub mod catalog;
pub mod config_cmd;
pub mod edit;
pub mod prompt;

use std::io::Read;
use std::path::PathBuf;
use tagweave_catalog::TagLibrary;
use tagweave_config::AppConfig;
use tagweave_core::{EmptyCatalog, TagCatalog};

/// Load config and apply the `--data-dir` override.
pub fn load_config(data_dir: Option<PathBuf>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    if let Some(dir) = data_dir {
        config.catalog.data_dir = Some(dir);
    }
    Ok(config)
}

/// Open the configured catalog, or fall back to an empty one when the data
/// directory does not exist.
pub fn catalog_or_empty(config: &AppConfig) -> Box<dyn TagCatalog> {
    let dir = config.data_dir();
    match TagLibrary::open(&dir) {
        Ok(mut library) => Box::new(library.index()),
        Err(e) => {
            tracing::warn!(error = %e, "Catalog unavailable, display names disabled");
            Box::new(EmptyCatalog)
        }
    }
}

/// Use the argument if given, otherwise read all of stdin.
pub fn text_or_stdin(text: Option<String>) -> std::io::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
