//! Master video stream selection.

use hlsforge_common::{Error, Result};
use hlsforge_probe::ProbeStream;

/// Return the position of the stream to treat as an input's video track.
///
/// This is the first stream of codec type `video`; inputs carrying several
/// video streams are always represented by the first one.
///
/// # Errors
///
/// Returns [`Error::NoVideoStream`] when no stream is a video stream.
pub fn select_master(streams: &[ProbeStream]) -> Result<usize> {
    streams
        .iter()
        .position(ProbeStream::is_video)
        .ok_or_else(|| Error::no_video_stream(streams.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(index: u32, codec_type: &str) -> ProbeStream {
        ProbeStream {
            index,
            codec_type: codec_type.into(),
            ..Default::default()
        }
    }

    #[test]
    fn picks_first_video_stream() {
        let streams = vec![
            stream(0, "audio"),
            stream(1, "video"),
            stream(2, "video"),
        ];
        assert_eq!(select_master(&streams).unwrap(), 1);
    }

    #[test]
    fn video_first() {
        let streams = vec![stream(0, "video"), stream(1, "audio")];
        assert_eq!(select_master(&streams).unwrap(), 0);
    }

    #[test]
    fn no_video_stream() {
        let streams = vec![stream(0, "audio"), stream(1, "subtitle")];
        let err = select_master(&streams).unwrap_err();
        assert!(matches!(err, Error::NoVideoStream { streams: 2 }));
    }

    #[test]
    fn empty_input() {
        assert!(select_master(&[]).unwrap_err().is_no_video_stream());
    }
}
