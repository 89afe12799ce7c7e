//! HLS (HTTP Live Streaming) playlist generation.

mod playlist;

pub use playlist::MasterPlaylist;
