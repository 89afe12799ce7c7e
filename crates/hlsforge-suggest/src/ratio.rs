//! Target dimensions for re-encoded variants.
//!
//! Sources taller than the ceiling are clamped to it, and the width is
//! recomputed from the display aspect ratio. A malformed ratio never fails the
//! computation: the configured default ratio is used and a warning is logged.

use hlsforge_common::config::PlannerConfig;
use hlsforge_common::{AspectRatio, ParseAspectRatioError, Resolution};
use hlsforge_probe::ProbeStream;

/// Dimensions a re-encode should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub resolution: Resolution,
    /// Whether the source had to be scaled down to reach `resolution`.
    pub downscaled: bool,
}

impl Target {
    /// The source dimensions, unchanged.
    pub const fn native(resolution: Resolution) -> Self {
        Self {
            resolution,
            downscaled: false,
        }
    }

    pub const fn downscaled(resolution: Resolution) -> Self {
        Self {
            resolution,
            downscaled: true,
        }
    }

    /// Height for the encode-time scale filter; `None` when no scaling applies.
    pub fn scale_height(&self) -> Option<u32> {
        self.downscaled.then_some(self.resolution.height)
    }
}

/// Computes downscale targets under a fixed height ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioCalculator {
    max_height: u32,
    default_ratio: AspectRatio,
}

impl Default for RatioCalculator {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}

impl RatioCalculator {
    pub fn new(max_height: u32, default_ratio: AspectRatio) -> Self {
        Self {
            max_height,
            default_ratio,
        }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.max_height, config.default_aspect_ratio)
    }

    /// Compute the target dimensions for `stream`.
    pub fn compute(&self, stream: &ProbeStream) -> Target {
        if stream.height <= self.max_height {
            return Target::native(Resolution::new(stream.width, stream.height));
        }

        let ratio = self.aspect_ratio(stream).value();
        let height = self.max_height;
        // Truncation toward zero, matching an integer cast.
        let width = (f64::from(height) * ratio) as u32;

        Target::downscaled(Resolution::new(width, height))
    }

    /// The stream's display aspect ratio, or the default if it is malformed.
    fn aspect_ratio(&self, stream: &ProbeStream) -> AspectRatio {
        match stream.display_aspect_ratio.parse::<AspectRatio>() {
            Ok(ratio) => ratio,
            Err(e) => {
                let reason = match e {
                    ParseAspectRatioError::Format(_) => "unexpected aspect ratio format",
                    ParseAspectRatioError::Value(_) => "cannot parse aspect ratio",
                };
                tracing::warn!(
                    stream = stream.index,
                    aspect_ratio = %stream.display_aspect_ratio,
                    "{reason} ({}), defaulting to {}",
                    stream.display_aspect_ratio,
                    self.default_ratio
                );
                self.default_ratio
            }
        }
    }
}

/// Compute the target for `stream` with the default 1080-line ceiling and
/// 16:9 fallback ratio.
pub fn compute_target(stream: &ProbeStream) -> Target {
    RatioCalculator::default().compute(stream)
}
