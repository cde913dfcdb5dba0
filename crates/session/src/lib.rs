//! Editing sessions for Tagweave.
//!
//! A session owns one selection store for as long as the picker is open. It
//! is loaded from a [`PromptHost`](tagweave_core::PromptHost) when opened and
//! writes the serialized selection back on commit. Nothing outlives the
//! session.

pub mod host;
pub mod session;

pub use host::{FileHost, MemoryHost};
pub use session::{EditSession, SessionOptions};
