//! Low-level SQL scanning.
//!
//! Condition building only needs to find existing placeholders inside raw
//! fragments, so this module carries a small state machine rather than a
//! full tokenizer.

mod scanner;

pub use scanner::{Placeholder, PlaceholderScanner, rewrite_placeholders};
