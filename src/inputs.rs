//! Loading probe data for the CLI's inputs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hlsforge_common::config::ToolsConfig;
use hlsforge_probe::{get_tool_path, parse_ffprobe_json, probe_with_ffprobe, ProbeData};

/// Where probe data for an input comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeSource {
    /// Run ffprobe on the media file.
    Ffprobe,
    /// The input is a recorded ffprobe JSON dump.
    Json,
}

/// Load probe data for every input, in order.
///
/// Fails on the first input that cannot be probed so the ordinals of the
/// returned list always line up with `paths`.
pub fn load_inputs(
    paths: &[PathBuf],
    source: ProbeSource,
    tools: &ToolsConfig,
) -> Result<Vec<ProbeData>> {
    match source {
        ProbeSource::Json => paths.iter().map(|p| load_json(p)).collect(),
        ProbeSource::Ffprobe => {
            let ffprobe = get_tool_path("ffprobe", tools.ffprobe_path.as_deref())?;
            tracing::debug!("Using ffprobe at {}", ffprobe.display());
            paths
                .iter()
                .map(|p| {
                    probe_with_ffprobe(&ffprobe, p)
                        .with_context(|| format!("failed to probe {}", p.display()))
                })
                .collect()
        }
    }
}

fn load_json(path: &Path) -> Result<ProbeData> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_ffprobe_json(&contents).with_context(|| format!("invalid probe dump {}", path.display()))
}
