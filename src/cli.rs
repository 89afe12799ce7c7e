use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hlsforge")]
#[command(author, version, about = "Plan adaptive-bitrate HLS ladders from ffprobe metadata")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Media inputs shared by the planning commands.
#[derive(Args)]
pub struct InputArgs {
    /// Media files, in ffmpeg input order
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Treat inputs as recorded ffprobe JSON dumps instead of media files
    #[arg(long)]
    pub probe_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest the video variants for a set of inputs
    Suggest {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the HLS master playlist for the suggested variants
    Playlist {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Print the ffmpeg command that would encode the suggested variants
    Command {
        #[command(flatten)]
        inputs: InputArgs,

        /// Directory the HLS output would be written to
        #[arg(short, long, default_value = "hls")]
        output: PathBuf,
    },

    /// Probe a media file and display its streams
    Probe {
        /// File to probe
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that required external tools are available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
