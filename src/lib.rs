//! Pronoun Bot Library
//!
//! This library provides the core of the pronoun bot: the pronoun catalog,
//! display name parsing, the toggle rule, and platform-neutral event handlers.
//! The Discord connection lives in [`gateway`] behind the `gateway` feature.

// Module declarations
pub mod config;
pub mod constants;
#[cfg(feature = "gateway")]
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod services;
