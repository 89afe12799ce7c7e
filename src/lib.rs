//! hlsforge - HLS ladder planning from ffprobe metadata
//!
//! This library crate exposes the CLI's input handling for integration
//! testing. The planning itself lives in `hlsforge-suggest`.

pub mod inputs;

pub use hlsforge_common::config::Config;
pub use hlsforge_suggest::{VariantPlanner, VideoVariant};
