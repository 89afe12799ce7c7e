//! Source codec classification.

use std::fmt;

/// How the planner treats a source stream's codec.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceCodec {
    /// H.264: universally decodable, passed through untouched.
    H264,
    /// H.265/HEVC: passed through, plus an H.264 fallback.
    Hevc,
    /// Anything else: re-encoded.
    Other(String),
}

impl SourceCodec {
    /// Classify an ffprobe `codec_name`. Matching is exact and case-sensitive.
    pub fn classify(codec_name: &str) -> Self {
        match codec_name {
            "h264" => Self::H264,
            "h265" | "hevc" => Self::Hevc,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether clients may be unable to decode this codec.
    pub fn is_high_efficiency(&self) -> bool {
        matches!(self, Self::Hevc)
    }
}

impl fmt::Display for SourceCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::H264 => write!(f, "h264"),
            Self::Hevc => write!(f, "hevc"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}
