//! ffmpeg arguments producing a planned HLS ladder.
//!
//! Each variant becomes one mapped output stream, in ladder order, and the
//! HLS muxer splits them into per-variant directories via `-var_stream_map`.

use std::path::{Path, PathBuf};

use hlsforge_common::config::HlsConfig;
use hlsforge_common::{Error, Result};
use hlsforge_suggest::VideoVariant;

/// Width expression for the scale filter: follow the display aspect ratio
/// and round down to an even number of pixels.
pub const SCALE_FILTER_WIDTH: &str = "trunc(oh*a/2)*2";

/// Build the ffmpeg argument vector (without the program name) that encodes
/// `variants` from `inputs` into HLS under `output_dir`.
///
/// # Errors
///
/// Returns [`Error::Validation`] if a variant references an input that is
/// not in `inputs`, or if there is nothing to encode.
pub fn build_encode_args(
    inputs: &[PathBuf],
    variants: &[VideoVariant],
    output_dir: &Path,
    hls: &HlsConfig,
) -> Result<Vec<String>> {
    if variants.is_empty() {
        return Err(Error::Validation("no variants to encode".into()));
    }
    if let Some(v) = variants.iter().find(|v| v.stream().input >= inputs.len()) {
        return Err(Error::Validation(format!(
            "variant maps {} but only {} inputs were given",
            v.stream(),
            inputs.len()
        )));
    }

    let mut args: Vec<String> = vec!["-y".into()];

    for input in inputs {
        args.push("-i".into());
        args.push(input.to_string_lossy().into_owned());
    }

    for variant in variants {
        args.push("-map".into());
        args.push(variant.stream().to_string());
    }

    for (n, variant) in variants.iter().enumerate() {
        args.push(format!("-c:v:{n}"));
        args.push(variant.codec().to_string());

        if let Some(crf) = variant.crf() {
            args.push(format!("-crf:v:{n}"));
            args.push(crf.to_string());
        }
        if let Some(profile) = variant.profile() {
            args.push(format!("-profile:v:{n}"));
            args.push(profile.profile.clone());
            args.push(format!("-level:v:{n}"));
            args.push(profile.level.clone());
        }
        if let Some(bitrate) = variant.bitrate() {
            args.push(format!("-b:v:{n}"));
            args.push(bitrate.to_string());
        }
        if let Some(height) = variant.scale_height() {
            args.push(format!("-filter:v:{n}"));
            args.push(format!("scale={SCALE_FILTER_WIDTH}:{height}"));
        }
    }

    let variant_dir = output_dir.join(format!("{}%v", hls.variant_dir_prefix));
    let stream_map = (0..variants.len())
        .map(|n| format!("v:{n}"))
        .collect::<Vec<_>>()
        .join(" ");

    args.extend([
        "-f".to_string(),
        "hls".to_string(),
        "-hls_time".to_string(),
        hls.segment_duration_secs.to_string(),
        "-hls_playlist_type".to_string(),
        "vod".to_string(),
        "-hls_segment_filename".to_string(),
        variant_dir
            .join(&hls.segment_pattern)
            .to_string_lossy()
            .into_owned(),
        "-master_pl_name".to_string(),
        hls.master_playlist_name.clone(),
        "-var_stream_map".to_string(),
        stream_map,
        variant_dir
            .join(&hls.playlist_name)
            .to_string_lossy()
            .into_owned(),
    ]);

    tracing::debug!(
        inputs = inputs.len(),
        variants = variants.len(),
        "Built ffmpeg HLS arguments"
    );

    Ok(args)
}
