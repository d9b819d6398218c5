//! Parsing and rendering of member display names.
//!
//! This module splits a display name into its base and pronoun tags and
//! renders the pair back into a single name.

pub mod display_name;

// Re-export commonly used functions
pub use display_name::{decode, encode, ParsedName};
