//! # hlsforge-suggest
//!
//! Decides how each input's video should appear in an adaptive-bitrate HLS
//! ladder.
//!
//! ## Overview
//!
//! - [`select_master`] -- picks the video stream that represents an input.
//! - [`SourceCodec`] -- classifies the source codec (H.264, HEVC, other).
//! - [`RatioCalculator`] -- computes downscale targets under a height ceiling.
//! - [`VariantPlanner`] -- emits the ordered [`VideoVariant`] list.
//!
//! | Source codec | Variants emitted |
//! |--------------|------------------|
//! | `h264` | pass-through |
//! | `h265` / `hevc` | pass-through, then re-encode |
//! | anything else | re-encode |
//!
//! ## Example
//!
//! ```
//! use hlsforge_probe::{ProbeData, ProbeStream};
//! use hlsforge_suggest::suggest_video_variants;
//!
//! let input = ProbeData::from_streams(vec![ProbeStream {
//!     index: 0,
//!     codec_type: "video".into(),
//!     codec_name: "hevc".into(),
//!     width: 3840,
//!     height: 2160,
//!     display_aspect_ratio: "16:9".into(),
//!     bit_rate: "18000000".into(),
//! }]);
//!
//! let variants = suggest_video_variants(&[input]);
//! assert_eq!(variants.len(), 2);
//! assert_eq!(variants[0].codec(), "copy");
//! assert_eq!(variants[1].resolution().to_string(), "1920x1080");
//! ```

pub mod codec;
pub mod master;
pub mod planner;
pub mod ratio;
pub mod variant;

pub use codec::SourceCodec;
pub use master::select_master;
pub use planner::{parse_bandwidth, suggest_video_variants, VariantPlanner};
pub use ratio::{compute_target, RatioCalculator, Target};
pub use variant::{Reencode, StreamRef, VariantKind, VideoVariant, PASS_THROUGH_CODEC};
