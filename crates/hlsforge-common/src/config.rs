//! Application configuration types.
//!
//! The top-level [`Config`] struct is deserialized from JSON and carries the
//! planner constants, HLS output layout, and tool paths. Every section
//! defaults sensibly so a completely empty `{}` file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::media::{AspectRatio, EncoderProfile};
use crate::Error;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub planner: PlannerConfig,
    pub hls: HlsConfig,
    pub tools: ToolsConfig,
}

impl Config {
    /// Deserialize a `Config` from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| Error::Validation(format!("config parse error: {e}")))
    }

    /// Load configuration from a file path, falling back to defaults if the
    /// path is `None` or the file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config file at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read config file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let planner = &self.planner;

        if planner.max_height == 0 {
            warnings.push("planner.max_height is 0; every re-encode would collapse".into());
        }
        if planner.crf > 51 {
            warnings.push(format!(
                "planner.crf {} is outside the usual 0-51 range",
                planner.crf
            ));
        }
        if planner.encoder.trim().is_empty() {
            warnings.push("planner.encoder is empty".into());
        }
        if !planner.default_aspect_ratio.is_usable() {
            warnings.push(format!(
                "planner.default_aspect_ratio {} is not a positive ratio",
                planner.default_aspect_ratio
            ));
        }
        if let Some(ref profile) = planner.encoder_profile {
            if profile.profile.trim().is_empty() {
                warnings.push("planner.encoder_profile.profile is empty".into());
            }
            if profile.level.trim().is_empty() {
                warnings.push("planner.encoder_profile.level is empty".into());
            }
        }
        if planner.fallback_bandwidth == 0 {
            warnings.push("planner.fallback_bandwidth is 0".into());
        }

        if self.hls.segment_duration_secs == 0 {
            warnings.push("hls.segment_duration_secs is 0".into());
        }
        if self.hls.playlist_name.is_empty() {
            warnings.push("hls.playlist_name is empty".into());
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Constants driving the variant planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Bandwidth declared when the source bit rate is absent or unparseable.
    pub fallback_bandwidth: u64,
    /// Constant rate factor for every re-encoded variant.
    pub crf: u32,
    /// Height ceiling for re-encoded variants.
    pub max_height: u32,
    /// Ratio used when the source display aspect ratio is malformed.
    pub default_aspect_ratio: AspectRatio,
    /// Encoder used for re-encoded variants.
    pub encoder: String,
    pub encoder_profile: Option<EncoderProfile>,
    /// Explicit bitrate for re-encoded variants (e.g. `"5M"`).
    pub bitrate: Option<String>,
}

fn default_fallback_bandwidth() -> u64 {
    7_000_000
}
fn default_crf() -> u32 {
    18
}
fn default_max_height() -> u32 {
    1080
}
fn default_encoder() -> String {
    "libx264".into()
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            fallback_bandwidth: default_fallback_bandwidth(),
            crf: default_crf(),
            max_height: default_max_height(),
            default_aspect_ratio: AspectRatio::WIDESCREEN,
            encoder: default_encoder(),
            encoder_profile: None,
            bitrate: None,
        }
    }
}

/// HLS output layout used by the playlist writer and ffmpeg argument builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HlsConfig {
    pub segment_duration_secs: u32,
    /// Media playlist file name inside each variant directory.
    pub playlist_name: String,
    pub master_playlist_name: String,
    /// ffmpeg segment file pattern inside each variant directory.
    pub segment_pattern: String,
    /// Variant directories are named `<prefix><n>`.
    pub variant_dir_prefix: String,
}

impl Default for HlsConfig {
    fn default() -> Self {
        Self {
            segment_duration_secs: 6,
            playlist_name: "index.m3u8".into(),
            master_playlist_name: "master.m3u8".into(),
            segment_pattern: "segment_%05d.ts".into(),
            variant_dir_prefix: "stream_".into(),
        }
    }
}

/// Paths to external CLI tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub ffmpeg_path: Option<PathBuf>,
    pub ffprobe_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert_eq!(cfg.planner.fallback_bandwidth, 7_000_000);
        assert_eq!(cfg.planner.crf, 18);
        assert_eq!(cfg.planner.max_height, 1080);
        assert_eq!(cfg.planner.default_aspect_ratio, AspectRatio::WIDESCREEN);
        assert_eq!(cfg.planner.encoder, "libx264");
        assert!(cfg.planner.encoder_profile.is_none());
        assert!(cfg.planner.bitrate.is_none());
        assert_eq!(cfg.hls.segment_duration_secs, 6);
        assert_eq!(cfg.hls.playlist_name, "index.m3u8");
    }

    #[test]
    fn default_config_no_warnings() {
        let cfg = Config::default();
        let warnings = cfg.validate();
        assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
    }

    #[test]
    fn parse_json_config() {
        let json = r#"{"planner": {"crf": 21, "default_aspect_ratio": "4:3"}}"#;
        let cfg = Config::from_json(json).unwrap();
        assert_eq!(cfg.planner.crf, 21);
        assert_eq!(cfg.planner.default_aspect_ratio, AspectRatio::new(4.0, 3.0));
        assert_eq!(cfg.planner.max_height, 1080);
    }

    #[test]
    fn parse_empty_json_uses_defaults() {
        let cfg = Config::from_json("{}").unwrap();
        assert_eq!(cfg.planner, PlannerConfig::default());
        assert_eq!(cfg.hls, HlsConfig::default());
    }

    #[test]
    fn encoder_profile_requires_level() {
        let json = r#"{"planner": {"encoder_profile": {"profile": "high"}}}"#;
        let err = Config::from_json(json).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let json = r#"{"planner": {"encoder_profile": {"profile": "high", "level": "4.1"}}}"#;
        let cfg = Config::from_json(json).unwrap();
        assert_eq!(
            cfg.planner.encoder_profile,
            Some(EncoderProfile::new("high", "4.1"))
        );
    }

    #[test]
    fn invalid_json_is_validation_error() {
        let err = Config::from_json("not json").unwrap_err();
        assert!(err.to_string().contains("config parse error"));
    }

    #[test]
    fn validate_flags_bad_planner_values() {
        let mut cfg = Config::default();
        cfg.planner.max_height = 0;
        cfg.planner.crf = 63;
        cfg.planner.encoder = "  ".into();
        cfg.planner.default_aspect_ratio = AspectRatio::new(0.0, 1.0);
        cfg.hls.segment_duration_secs = 0;
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.contains("max_height")));
        assert!(warnings.iter().any(|w| w.contains("crf")));
        assert!(warnings.iter().any(|w| w.contains("encoder is empty")));
        assert!(warnings.iter().any(|w| w.contains("default_aspect_ratio")));
        assert!(warnings.iter().any(|w| w.contains("segment_duration_secs")));
    }

    #[test]
    fn validate_flags_blank_profile_level() {
        let mut cfg = Config::default();
        cfg.planner.encoder_profile = Some(EncoderProfile::new("main", ""));
        let warnings = cfg.validate();
        assert_eq!(warnings, vec!["planner.encoder_profile.level is empty".to_string()]);
    }

    #[test]
    fn load_or_default_with_none() {
        let cfg = Config::load_or_default(None);
        assert_eq!(cfg.planner.crf, 18);
    }

    #[test]
    fn load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_or_default(Some(&dir.path().join("missing.json")));
        assert_eq!(cfg.planner.max_height, 1080);
    }

    #[test]
    fn load_or_default_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hlsforge.json");
        std::fs::write(&path, r#"{"planner": {"max_height": 720}}"#).unwrap();
        let cfg = Config::load_or_default(Some(&path));
        assert_eq!(cfg.planner.max_height, 720);
    }

    #[test]
    fn load_or_default_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ nope").unwrap();
        let cfg = Config::load_or_default(Some(&path));
        assert_eq!(cfg.planner, PlannerConfig::default());
    }
}
