//! Unified error type for hlsforge.
//!
//! All crates funnel their failures into [`Error`]. The planner itself never
//! propagates one out of a planning run; it absorbs them per input.

/// Unified error type covering all failure modes in hlsforge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input carries no stream of codec type `video`.
    #[error("could not find a video stream to use as master (scanned {streams} streams)")]
    NoVideoStream {
        /// Number of streams that were scanned.
        streams: usize,
    },

    /// Probe output could not be interpreted.
    #[error("Probe error: {0}")]
    Probe(String),

    /// A required external tool is not available.
    #[error("tool not found: {tool}")]
    ToolNotFound {
        /// Name of the missing tool.
        tool: String,
    },

    /// An external tool (ffprobe, ffmpeg) returned an error.
    #[error("Tool error [{tool}]: {message}")]
    Tool {
        /// Name of the tool that failed.
        tool: String,
        /// Human-readable error description.
        message: String,
    },

    /// Configuration or caller-supplied data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Convenience constructor for [`Error::NoVideoStream`].
    pub fn no_video_stream(streams: usize) -> Self {
        Error::NoVideoStream { streams }
    }

    /// Convenience constructor for [`Error::ToolNotFound`].
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Error::ToolNotFound { tool: tool.into() }
    }

    /// Convenience constructor for [`Error::Tool`].
    pub fn tool(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Tool {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Whether this is the recoverable "input has no video" condition.
    pub fn is_no_video_stream(&self) -> bool {
        matches!(self, Error::NoVideoStream { .. })
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
