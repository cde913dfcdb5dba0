//! Prompt host trait: the text field the editing session reads and writes.
//!
//! In the node editor this is a multiline string widget; on the command line
//! it is a file. Either way the session only sees raw prompt text.

use crate::error::Result;

pub trait PromptHost {
    /// A short description of where the text lives (for logs).
    fn describe(&self) -> String;

    /// The host's current prompt text. Empty text is a normal state.
    fn read_text(&self) -> Result<String>;

    /// Replace the host's prompt text.
    fn write_text(&mut self, text: &str) -> Result<()>;
}
