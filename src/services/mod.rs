//! Service layer for business logic.
//!
//! This module contains the pure rules the handlers coordinate: the pronoun
//! toggle and the nickname privilege check.

pub mod permissions;
pub mod toggle;

// Re-export commonly used types and functions
pub use permissions::{can_rename, BotRank, MemberRank};
pub use toggle::toggle;
