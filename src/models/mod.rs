//! Data models for pronoun options and the option catalog.
//!
//! Models are independent of the chat platform and of the handlers that use them.

pub mod pronoun;

// Re-export all model types
pub use pronoun::{Catalog, PronounOption};
