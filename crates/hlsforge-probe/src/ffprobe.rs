//! FFprobe-based stream probing.

use std::path::Path;
use std::process::Command;

use hlsforge_common::{Error, Result};

use crate::types::ProbeData;

/// Parse a JSON dump produced by
/// `ffprobe -print_format json -show_format -show_streams`.
pub fn parse_ffprobe_json(json: &str) -> Result<ProbeData> {
    serde_json::from_str(json).map_err(|e| Error::Probe(format!("ffprobe JSON parse error: {e}")))
}

/// Probe a media file by running the ffprobe binary at `ffprobe`.
pub fn probe_with_ffprobe(ffprobe: &Path, input: &Path) -> Result<ProbeData> {
    if !input.exists() {
        return Err(Error::Probe(format!("file not found: {}", input.display())));
    }

    tracing::debug!(input = %input.display(), "Running ffprobe");

    let output = Command::new(ffprobe)
        .args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(input)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found("ffprobe")
            } else {
                Error::from(e)
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool(
            "ffprobe",
            format!("exited with status {}: {}", output.status, stderr.trim()),
        ));
    }

    let json_str = String::from_utf8(output.stdout)
        .map_err(|e| Error::Probe(format!("ffprobe output is not UTF-8: {e}")))?;

    let data = parse_ffprobe_json(&json_str)?;
    tracing::debug!(
        input = %input.display(),
        streams = data.streams.len(),
        "ffprobe finished"
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEVC_4K: &str = r#"{
        "streams": [
            {
                "index": 0,
                "codec_name": "hevc",
                "codec_type": "video",
                "width": 3840,
                "height": 2160,
                "display_aspect_ratio": "16:9",
                "bit_rate": "18000000",
                "r_frame_rate": "24000/1001"
            },
            {
                "index": 1,
                "codec_name": "eac3",
                "codec_type": "audio",
                "channels": 6,
                "bit_rate": "640000"
            }
        ],
        "format": {
            "filename": "movie.mkv",
            "format_name": "matroska,webm",
            "duration": "5400.042000",
            "size": "12345678901",
            "bit_rate": "18300000"
        }
    }"#;

    #[test]
    fn parse_streams_and_format() {
        let data = parse_ffprobe_json(HEVC_4K).unwrap();
        assert_eq!(data.streams.len(), 2);

        let video = &data.streams[0];
        assert!(video.is_video());
        assert_eq!(video.codec_name, "hevc");
        assert_eq!((video.width, video.height), (3840, 2160));
        assert_eq!(video.display_aspect_ratio, "16:9");
        assert_eq!(video.bit_rate, "18000000");

        let audio = &data.streams[1];
        assert_eq!(audio.codec_type, "audio");
        assert_eq!(audio.width, 0);

        let format = data.format.as_ref().unwrap();
        assert_eq!(format.format_name, "matroska,webm");
        assert_eq!(data.duration_secs(), Some(5400.042));
    }

    #[test]
    fn parse_without_format_section() {
        let data = parse_ffprobe_json(r#"{"streams": []}"#).unwrap();
        assert!(data.streams.is_empty());
        assert!(data.format.is_none());
    }

    #[test]
    fn parse_empty_object() {
        let data = parse_ffprobe_json("{}").unwrap();
        assert!(data.streams.is_empty());
    }

    #[test]
    fn parse_garbage_is_probe_error() {
        let err = parse_ffprobe_json("not json at all").unwrap_err();
        assert!(matches!(err, Error::Probe(_)));
    }

    #[test]
    fn probe_missing_input() {
        let err = probe_with_ffprobe(Path::new("ffprobe"), Path::new("/nonexistent/file.mkv"))
            .unwrap_err();
        assert!(matches!(err, Error::Probe(_)));
    }

    #[test]
    fn probe_with_missing_tool() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.mkv");
        std::fs::write(&input, b"").unwrap();
        let err = probe_with_ffprobe(Path::new("nonexistent_ffprobe_xyz_12345"), &input)
            .unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }
}
