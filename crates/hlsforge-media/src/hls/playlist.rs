//! HLS master playlist.

use hlsforge_common::config::HlsConfig;
use hlsforge_suggest::VideoVariant;
use std::fmt::Write;

/// Master playlist generator.
#[derive(Debug, Clone)]
pub struct MasterPlaylist {
    /// Variant directories are named `<prefix><n>`.
    pub variant_dir_prefix: String,
    /// Media playlist name inside each variant directory.
    pub playlist_name: String,
}

impl MasterPlaylist {
    pub fn new(config: &HlsConfig) -> Self {
        Self {
            variant_dir_prefix: config.variant_dir_prefix.clone(),
            playlist_name: config.playlist_name.clone(),
        }
    }

    /// URI of the media playlist for the variant at position `n`.
    pub fn variant_uri(&self, n: usize) -> String {
        format!("{}{}/{}", self.variant_dir_prefix, n, self.playlist_name)
    }

    /// Render the master playlist M3U8, one entry per variant in order.
    pub fn render(&self, variants: &[VideoVariant]) -> String {
        let mut playlist = String::new();

        writeln!(playlist, "#EXTM3U").unwrap();
        writeln!(playlist, "#EXT-X-VERSION:3").unwrap();
        writeln!(playlist, "#EXT-X-INDEPENDENT-SEGMENTS").unwrap();

        for (n, variant) in variants.iter().enumerate() {
            write!(
                playlist,
                "#EXT-X-STREAM-INF:BANDWIDTH={},RESOLUTION={}",
                variant.bandwidth(),
                variant.resolution()
            )
            .unwrap();
            if let Some(group) = variant.audio_group() {
                write!(playlist, ",AUDIO=\"{}\"", group).unwrap();
            }
            if let Some(group) = variant.subtitle_group() {
                write!(playlist, ",SUBTITLES=\"{}\"", group).unwrap();
            }
            writeln!(playlist).unwrap();
            writeln!(playlist, "{}", self.variant_uri(n)).unwrap();
        }

        playlist
    }
}
