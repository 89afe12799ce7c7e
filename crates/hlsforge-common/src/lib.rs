//! hlsforge-common: shared error type, configuration, and media vocabulary.
//!
//! This crate is the foundational dependency for the other hlsforge crates,
//! providing the unified [`Error`], the JSON-backed [`config::Config`], and
//! the small value types ([`AspectRatio`], [`EncoderProfile`]) that both the
//! planner and its consumers speak.

pub mod config;
pub mod error;
pub mod media;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use media::*;
