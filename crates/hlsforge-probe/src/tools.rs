//! Locating the ffmpeg-family binaries hlsforge drives.

use hlsforge_common::config::ToolsConfig;
use hlsforge_common::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// An ffmpeg-family binary and the release its `-version` banner reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    /// Resolved executable.
    pub path: Option<PathBuf>,
    /// Release from the `<tool> version <release> ...` banner, or the whole
    /// banner line if it has another shape.
    pub version: Option<String>,
}

impl ToolInfo {
    fn missing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: None,
            version: None,
        }
    }

    /// Whether the executable was found and answered `-version`.
    pub fn available(&self) -> bool {
        self.version.is_some()
    }
}

/// Look up `name` on `PATH` and ask it for its version.
///
/// # Example
///
/// ```no_run
/// use hlsforge_probe::check_tool;
///
/// let info = check_tool("ffprobe");
/// if info.available() {
///     println!("ffprobe {:?}", info.version);
/// }
/// ```
pub fn check_tool(name: &str) -> ToolInfo {
    match require_tool(name) {
        Ok(path) => inspect(name, path),
        Err(_) => ToolInfo::missing(name),
    }
}

/// Check ffmpeg and ffprobe, honouring configured paths.
pub fn check_tools(config: &ToolsConfig) -> Vec<ToolInfo> {
    [
        ("ffmpeg", config.ffmpeg_path.as_deref()),
        ("ffprobe", config.ffprobe_path.as_deref()),
    ]
    .into_iter()
    .map(|(name, configured)| match get_tool_path(name, configured) {
        Ok(path) => inspect(name, path),
        Err(_) => ToolInfo::missing(name),
    })
    .collect()
}

/// Require that a tool is on `PATH`, returning its path.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
pub fn get_tool_path(name: &str, configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = configured {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        tracing::warn!(
            "Configured {name} path {} does not exist; searching PATH",
            path.display()
        );
    }

    require_tool(name)
}

fn inspect(name: &str, path: PathBuf) -> ToolInfo {
    let version = version_banner(&path).map(|banner| {
        release_from_banner(&banner)
            .map(str::to_owned)
            .unwrap_or(banner)
    });
    if version.is_none() {
        tracing::debug!(tool = name, path = %path.display(), "-version did not succeed");
    }

    ToolInfo {
        name: name.to_string(),
        path: Some(path),
        version,
    }
}

/// First stdout line of `<program> -version`, if the program exits cleanly.
fn version_banner(program: &Path) -> Option<String> {
    let output = Command::new(program).arg("-version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(str::to_owned)
}

/// The word following `version` in an ffmpeg-family banner.
fn release_from_banner(banner: &str) -> Option<&str> {
    let mut words = banner.split_whitespace();
    words.find(|w| *w == "version")?;
    words.next()
}
