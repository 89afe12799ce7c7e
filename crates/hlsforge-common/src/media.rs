//! Media value types shared by the planner and its consumers.
//!
//! [`AspectRatio`] and [`Resolution`] serialize as their string forms
//! (`"16:9"`, `"1920x1080"`) so that configuration files and variant dumps
//! read the same way ffprobe and HLS manifests spell them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// AspectRatio
// ---------------------------------------------------------------------------

/// A display aspect ratio, `width:height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

impl AspectRatio {
    /// The 16:9 widescreen ratio.
    pub const WIDESCREEN: AspectRatio = AspectRatio {
        width: 16.0,
        height: 9.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The ratio as a single factor (`width / height`).
    pub fn value(&self) -> f64 {
        self.width / self.height
    }

    /// Whether the ratio can be used to derive a width (finite and positive).
    pub fn is_usable(&self) -> bool {
        let v = self.value();
        v.is_finite() && v > 0.0
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::WIDESCREEN
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Why an aspect-ratio string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAspectRatioError {
    /// The string does not have exactly two `:`-separated components.
    #[error("unexpected aspect ratio format ({0})")]
    Format(String),
    /// A component is not a number, or the ratio is not finite and positive.
    #[error("cannot parse aspect ratio ({0})")]
    Value(String),
}

impl FromStr for AspectRatio {
    type Err = ParseAspectRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [w, h] = parts.as_slice() else {
            return Err(ParseAspectRatioError::Format(s.to_string()));
        };

        match (w.parse::<f64>(), h.parse::<f64>()) {
            (Ok(width), Ok(height)) => {
                let ratio = AspectRatio { width, height };
                if ratio.is_usable() {
                    Ok(ratio)
                } else {
                    Err(ParseAspectRatioError::Value(s.to_string()))
                }
            }
            _ => Err(ParseAspectRatioError::Value(s.to_string())),
        }
    }
}

impl Serialize for AspectRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AspectRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Pixel dimensions of a rendition, rendered as `WxH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// EncoderProfile
// ---------------------------------------------------------------------------

/// Encoder profile together with its mandatory level (e.g. `high` / `4.1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncoderProfile {
    pub profile: String,
    pub level: String,
}

impl EncoderProfile {
    pub fn new(profile: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            level: level.into(),
        }
    }
}
