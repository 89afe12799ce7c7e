//! # hlsforge-probe
//!
//! Stream metadata as reported by `ffprobe`, and the plumbing to obtain it.
//!
//! - [`ProbeStream`] / [`ProbeData`] mirror ffprobe's
//!   `-print_format json -show_format -show_streams` output.
//! - [`parse_ffprobe_json`] turns a recorded dump into [`ProbeData`].
//! - [`probe_with_ffprobe`] runs the tool against a media file.
//! - [`tools`] locates ffmpeg/ffprobe on the system.
//!
//! ## Example
//!
//! ```no_run
//! use hlsforge_probe::{probe_with_ffprobe, tools};
//! use std::path::Path;
//!
//! let ffprobe = tools::require_tool("ffprobe")?;
//! let data = probe_with_ffprobe(&ffprobe, Path::new("/path/to/video.mkv"))?;
//! for stream in data.video_streams() {
//!     println!("{} {}x{}", stream.codec_name, stream.width, stream.height);
//! }
//! # Ok::<(), hlsforge_common::Error>(())
//! ```

mod ffprobe;
pub mod tools;
mod types;

pub use ffprobe::{parse_ffprobe_json, probe_with_ffprobe};
pub use tools::{check_tool, check_tools, get_tool_path, require_tool, ToolInfo};
pub use types::{ProbeData, ProbeFormat, ProbeStream};
