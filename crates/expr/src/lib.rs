//! Tag expressions: the weighted, comma-separated prompt format.
//!
//! Image-generation front ends accept prompts such as:
//!
//! ```text
//! masterpiece, 1girl:1.2, (smile, blush):1.1, ((red eyes:1.5)):0.8
//! ```
//!
//! Every tag may carry a `:weight` suffix, and a parenthesized group's weight
//! multiplies into each tag inside it. Parsing always yields a flat list of
//! plain tags with their effective weights:
//!
//! ```text
//! masterpiece      1.0
//! 1girl            1.2
//! smile            1.1
//! blush            1.1
//! red eyes         1.2   (1.5 × 0.8)
//! ```
//!
//! Serialization goes the other way and stays flat: groups are
//! never rebuilt, so `(a, b):2` comes back as `a:2.00, b:2.00`.
//!
//! The parser never fails. Unbalanced parentheses, junk weights, and stray
//! delimiters are normalized away so hand-edited prompts always load.

mod parser;
mod serializer;

pub use parser::{MAX_GROUP_DEPTH, parse, parse_tokens};
pub use serializer::{format_entry, serialize};
