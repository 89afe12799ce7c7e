//! Probe result types.
//!
//! Field names follow ffprobe's JSON output so a dump deserializes directly.
//! Every field defaults when absent; numeric-looking values that ffprobe
//! reports as strings (`bit_rate`, `duration`) stay strings and are parsed
//! defensively by whoever consumes them.

use serde::{Deserialize, Serialize};

/// Metadata for one stream of a media input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeStream {
    /// Ordinal position of the stream within its input.
    pub index: u32,
    /// Stream kind: `"video"`, `"audio"`, `"subtitle"`, ...
    pub codec_type: String,
    /// Codec identifier, e.g. `"h264"`, `"hevc"`.
    pub codec_name: String,
    pub width: u32,
    pub height: u32,
    /// Display aspect ratio as `"W:H"`.
    pub display_aspect_ratio: String,
    /// Bit rate in bits/sec. May be empty or unparseable.
    pub bit_rate: String,
}

impl ProbeStream {
    /// Whether this stream carries video.
    pub fn is_video(&self) -> bool {
        self.codec_type == "video"
    }
}

/// Container-level metadata (`-show_format`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeFormat {
    pub filename: String,
    pub format_name: String,
    pub duration: Option<String>,
    pub size: Option<String>,
    pub bit_rate: Option<String>,
}

/// Full probe result for one media input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeData {
    pub streams: Vec<ProbeStream>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ProbeFormat>,
}

impl ProbeData {
    /// Build probe data from streams alone.
    pub fn from_streams(streams: Vec<ProbeStream>) -> Self {
        Self {
            streams,
            format: None,
        }
    }

    /// Iterate over the video streams, in stream order.
    pub fn video_streams(&self) -> impl Iterator<Item = &ProbeStream> {
        self.streams.iter().filter(|s| s.is_video())
    }

    /// Duration in seconds, if the container reported a parseable one.
    pub fn duration_secs(&self) -> Option<f64> {
        self.format
            .as_ref()
            .and_then(|f| f.duration.as_deref())
            .and_then(|d| d.parse().ok())
    }
}
