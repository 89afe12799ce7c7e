//! hlsforge-media: consumers of a planned variant ladder.
//!
//! - [`MasterPlaylist`] renders the HLS master playlist announcing each
//!   variant.
//! - [`build_encode_args`] assembles the ffmpeg argument vector producing
//!   those variants. Nothing here runs ffmpeg.

pub mod ffmpeg;
pub mod hls;

pub use ffmpeg::{build_encode_args, SCALE_FILTER_WIDTH};
pub use hls::MasterPlaylist;
