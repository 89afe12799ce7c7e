//! Output variant descriptors.
//!
//! A [`VideoVariant`] is built through exactly one of two constructors,
//! [`VideoVariant::pass_through`] or [`VideoVariant::reencode`], so a CRF only
//! ever exists on re-encodes and a scale height only exists when the
//! [`Target`] was actually downscaled. Variants are immutable once built;
//! the manifest layer may attach group identifiers through the consuming
//! `with_*` methods.

use std::fmt;

use hlsforge_common::{EncoderProfile, Resolution};
use serde::{Serialize, Serializer};

use crate::ratio::Target;

/// Codec marker understood by ffmpeg as "copy the stream unchanged".
pub const PASS_THROUGH_CODEC: &str = "copy";

// ---------------------------------------------------------------------------
// StreamRef
// ---------------------------------------------------------------------------

/// Which input, and which stream within it, a variant is sourced from.
///
/// Renders as ffmpeg's `-map` syntax, `input:stream`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamRef {
    pub input: usize,
    pub stream: u32,
}

impl StreamRef {
    pub const fn new(input: usize, stream: u32) -> Self {
        Self { input, stream }
    }
}

impl fmt::Display for StreamRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.input, self.stream)
    }
}

impl Serialize for StreamRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// Re-encode settings
// ---------------------------------------------------------------------------

/// Encoder parameters for a re-encoded variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reencode {
    /// Encoder name as ffmpeg spells it, e.g. `libx264`.
    pub encoder: String,
    pub crf: u32,
    pub profile: Option<EncoderProfile>,
    /// Explicit bitrate, e.g. `"5M"`.
    pub bitrate: Option<String>,
}

impl Reencode {
    pub fn new(encoder: impl Into<String>, crf: u32) -> Self {
        Self {
            encoder: encoder.into(),
            crf,
            profile: None,
            bitrate: None,
        }
    }

    pub fn with_profile(mut self, profile: EncoderProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_bitrate(mut self, bitrate: impl Into<String>) -> Self {
        self.bitrate = Some(bitrate.into());
        self
    }
}

/// How a variant is produced from its source stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantKind {
    /// The source stream is copied unchanged.
    PassThrough,
    /// The source stream is transcoded.
    Reencode {
        settings: Reencode,
        /// Height for the encode-time scale filter, present only on downscale.
        scale_height: Option<u32>,
    },
}

// ---------------------------------------------------------------------------
// VideoVariant
// ---------------------------------------------------------------------------

/// One output rendition of the HLS ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoVariant {
    stream: StreamRef,
    kind: VariantKind,
    resolution: Resolution,
    bandwidth: u64,
    audio_group: Option<String>,
    subtitle_group: Option<String>,
}

impl VideoVariant {
    /// A variant copying the source stream at its native resolution.
    pub fn pass_through(stream: StreamRef, resolution: Resolution, bandwidth: u64) -> Self {
        Self {
            stream,
            kind: VariantKind::PassThrough,
            resolution,
            bandwidth,
            audio_group: None,
            subtitle_group: None,
        }
    }

    /// A variant transcoding the source stream to `target`.
    pub fn reencode(stream: StreamRef, settings: Reencode, target: Target, bandwidth: u64) -> Self {
        Self {
            stream,
            kind: VariantKind::Reencode {
                settings,
                scale_height: target.scale_height(),
            },
            resolution: target.resolution,
            bandwidth,
            audio_group: None,
            subtitle_group: None,
        }
    }

    pub fn with_audio_group(mut self, group: impl Into<String>) -> Self {
        self.audio_group = Some(group.into());
        self
    }

    pub fn with_subtitle_group(mut self, group: impl Into<String>) -> Self {
        self.subtitle_group = Some(group.into());
        self
    }

    pub fn stream(&self) -> StreamRef {
        self.stream
    }

    pub fn kind(&self) -> &VariantKind {
        &self.kind
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(self.kind, VariantKind::PassThrough)
    }

    /// The codec argument: [`PASS_THROUGH_CODEC`] or the encoder name.
    pub fn codec(&self) -> &str {
        match &self.kind {
            VariantKind::PassThrough => PASS_THROUGH_CODEC,
            VariantKind::Reencode { settings, .. } => &settings.encoder,
        }
    }

    fn reencode_settings(&self) -> Option<&Reencode> {
        match &self.kind {
            VariantKind::PassThrough => None,
            VariantKind::Reencode { settings, .. } => Some(settings),
        }
    }

    pub fn crf(&self) -> Option<u32> {
        self.reencode_settings().map(|s| s.crf)
    }

    pub fn profile(&self) -> Option<&EncoderProfile> {
        self.reencode_settings().and_then(|s| s.profile.as_ref())
    }

    pub fn bitrate(&self) -> Option<&str> {
        self.reencode_settings().and_then(|s| s.bitrate.as_deref())
    }

    /// Height to scale to at encode time, if the variant is a downscale.
    pub fn scale_height(&self) -> Option<u32> {
        match self.kind {
            VariantKind::PassThrough => None,
            VariantKind::Reencode { scale_height, .. } => scale_height,
        }
    }

    /// Emitted dimensions (post-downscale where applicable).
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Declared bandwidth in bits/sec.
    pub fn bandwidth(&self) -> u64 {
        self.bandwidth
    }

    pub fn audio_group(&self) -> Option<&str> {
        self.audio_group.as_deref()
    }

    pub fn subtitle_group(&self) -> Option<&str> {
        self.subtitle_group.as_deref()
    }
}

/// Flat serialized form, one field per manifest/encoder attribute.
#[derive(Serialize)]
struct VariantRecord<'a> {
    map: StreamRef,
    codec: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    crf: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bitrate: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    audio_group: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle_group: Option<&'a str>,
    resolution: Resolution,
    bandwidth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolution_height: Option<u32>,
}

impl Serialize for VideoVariant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let profile = self.profile();
        VariantRecord {
            map: self.stream,
            codec: self.codec(),
            crf: self.crf(),
            profile: profile.map(|p| p.profile.as_str()),
            level: profile.map(|p| p.level.as_str()),
            bitrate: self.bitrate(),
            audio_group: self.audio_group(),
            subtitle_group: self.subtitle_group(),
            resolution: self.resolution,
            bandwidth: self.bandwidth.to_string(),
            resolution_height: self.scale_height(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn downscaled() -> Target {
        Target::downscaled(Resolution::new(1920, 1080))
    }

    #[test]
    fn stream_ref_display_and_serde() {
        let r = StreamRef::new(2, 0);
        assert_eq!(r.to_string(), "2:0");
        assert_eq!(serde_json::to_value(r).unwrap(), "2:0");
    }

    #[test]
    fn pass_through_has_no_encoder_fields() {
        let v = VideoVariant::pass_through(
            StreamRef::new(0, 0),
            Resolution::new(1280, 720),
            3_000_000,
        );
        assert!(v.is_pass_through());
        assert_eq!(v.kind(), &VariantKind::PassThrough);
        assert_eq!(v.codec(), "copy");
        assert_eq!(v.crf(), None);
        assert_eq!(v.profile(), None);
        assert_eq!(v.bitrate(), None);
        assert_eq!(v.scale_height(), None);
        assert_eq!(v.resolution().to_string(), "1280x720");
    }

    #[test]
    fn reencode_carries_crf_and_scale_height() {
        let v = VideoVariant::reencode(
            StreamRef::new(1, 3),
            Reencode::new("libx264", 18),
            downscaled(),
            7_000_000,
        );
        assert!(!v.is_pass_through());
        assert!(matches!(
            v.kind(),
            VariantKind::Reencode {
                scale_height: Some(1080),
                ..
            }
        ));
        assert_eq!(v.codec(), "libx264");
        assert_eq!(v.crf(), Some(18));
        assert_eq!(v.scale_height(), Some(1080));
        assert_eq!(v.resolution(), Resolution::new(1920, 1080));
    }

    #[test]
    fn reencode_without_downscale_has_no_scale_height() {
        let v = VideoVariant::reencode(
            StreamRef::new(0, 0),
            Reencode::new("libx264", 18),
            Target::native(Resolution::new(640, 480)),
            1_000_000,
        );
        assert_eq!(v.crf(), Some(18));
        assert_eq!(v.scale_height(), None);
    }

    #[test]
    fn profile_always_comes_with_level() {
        let settings = Reencode::new("libx264", 20)
            .with_profile(EncoderProfile::new("high", "4.1"))
            .with_bitrate("5M");
        let v = VideoVariant::reencode(StreamRef::new(0, 0), settings, downscaled(), 1);
        let profile = v.profile().unwrap();
        assert_eq!(profile.profile, "high");
        assert_eq!(profile.level, "4.1");
        assert_eq!(v.bitrate(), Some("5M"));
    }

    #[test]
    fn groups_attach_after_construction() {
        let v = VideoVariant::pass_through(StreamRef::new(0, 0), Resolution::new(1, 1), 1)
            .with_audio_group("aud")
            .with_subtitle_group("subs");
        assert_eq!(v.audio_group(), Some("aud"));
        assert_eq!(v.subtitle_group(), Some("subs"));
    }

    #[test]
    fn serialize_pass_through() {
        let v = VideoVariant::pass_through(
            StreamRef::new(0, 1),
            Resolution::new(3840, 2160),
            18_000_000,
        );
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "map": "0:1",
                "codec": "copy",
                "resolution": "3840x2160",
                "bandwidth": "18000000"
            })
        );
    }

    #[test]
    fn serialize_reencode() {
        let settings =
            Reencode::new("libx264", 18).with_profile(EncoderProfile::new("high", "4.1"));
        let v = VideoVariant::reencode(StreamRef::new(0, 1), settings, downscaled(), 7_000_000);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "map": "0:1",
                "codec": "libx264",
                "crf": 18,
                "profile": "high",
                "level": "4.1",
                "resolution": "1920x1080",
                "bandwidth": "7000000",
                "resolution_height": 1080
            })
        );
    }
}
