//! Prompt host implementations.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tagweave_core::{PromptHost, Result};
use tracing::debug;

/// An in-process text field. Clones share the same text, so the caller can
/// keep a handle while the session owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    text: Rc<RefCell<String>>,
}

impl MemoryHost {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Rc::new(RefCell::new(text.into())),
        }
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl PromptHost for MemoryHost {
    fn describe(&self) -> String {
        "memory".into()
    }

    fn read_text(&self) -> Result<String> {
        Ok(self.text())
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        *self.text.borrow_mut() = text.to_string();
        Ok(())
    }
}

/// A prompt stored in a plain text file. A missing file reads as empty and
/// is created on the first write.
#[derive(Debug, Clone)]
pub struct FileHost {
    path: PathBuf,
}

impl FileHost {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PromptHost for FileHost {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_text(&self) -> Result<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Prompt file missing, starting empty");
                Ok(String::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}
