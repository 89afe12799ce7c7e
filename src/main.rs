mod cli;

use hlsforge::inputs::{load_inputs, ProbeSource};
use hlsforge_common::config::Config;
use hlsforge_media::{build_encode_args, MasterPlaylist};
use hlsforge_probe::{check_tools, get_tool_path, probe_with_ffprobe};
use hlsforge_suggest::{VariantKind, VariantPlanner, VideoVariant};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, InputArgs};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "hlsforge=trace,hlsforge_suggest=trace,hlsforge_media=debug,hlsforge_probe=debug,hlsforge_common=debug".to_string()
        } else {
            "hlsforge=info,hlsforge_suggest=info,hlsforge_media=info,hlsforge_probe=info,hlsforge_common=info".to_string()
        }
    });

    // Logs go to stderr so stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load_or_default(cli.config.as_deref());

    match cli.command {
        Commands::Suggest { inputs, json } => suggest(&config, &inputs, json),
        Commands::Playlist { inputs } => playlist(&config, &inputs),
        Commands::Command { inputs, output } => encode_command(&config, &inputs, &output),
        Commands::Probe { file, json } => probe_file(&config, &file, json),
        Commands::CheckTools => check_tools_cmd(&config),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("hlsforge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn plan(config: &Config, args: &InputArgs) -> Result<Vec<VideoVariant>> {
    let source = if args.probe_json {
        ProbeSource::Json
    } else {
        ProbeSource::Ffprobe
    };
    let probes = load_inputs(&args.inputs, source, &config.tools)?;

    let planner = VariantPlanner::new(config.planner.clone());
    let variants = planner.plan(&probes);
    tracing::info!(
        "Planned {} variants from {} inputs",
        variants.len(),
        probes.len()
    );
    Ok(variants)
}

fn suggest(config: &Config, args: &InputArgs, json: bool) -> Result<()> {
    let variants = plan(config, args)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&variants)?);
        return Ok(());
    }

    if variants.is_empty() {
        println!("No video variants: no input has a video stream.");
        return Ok(());
    }

    for (n, variant) in variants.iter().enumerate() {
        print!(
            "[{}] map={} codec={} resolution={} bandwidth={}",
            n,
            variant.stream(),
            variant.codec(),
            variant.resolution(),
            variant.bandwidth()
        );
        if let VariantKind::Reencode {
            settings,
            scale_height,
        } = variant.kind()
        {
            print!(" crf={}", settings.crf);
            if let Some(ref profile) = settings.profile {
                print!(" profile={} level={}", profile.profile, profile.level);
            }
            if let Some(ref bitrate) = settings.bitrate {
                print!(" bitrate={}", bitrate);
            }
            if let Some(height) = scale_height {
                print!(" scale_height={}", height);
            }
        }
        println!();
    }

    Ok(())
}

fn playlist(config: &Config, args: &InputArgs) -> Result<()> {
    let variants = plan(config, args)?;
    print!("{}", MasterPlaylist::new(&config.hls).render(&variants));
    Ok(())
}

fn encode_command(config: &Config, args: &InputArgs, output: &Path) -> Result<()> {
    let variants = plan(config, args)?;
    let ffmpeg_args = build_encode_args(&args.inputs, &variants, output, &config.hls)?;

    let ffmpeg = config
        .tools
        .ffmpeg_path
        .as_ref()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ffmpeg".to_string());

    let line = std::iter::once(ffmpeg)
        .chain(ffmpeg_args)
        .map(|a| shell_quote(&a))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", line);

    Ok(())
}

/// Quote an argument for display as part of a POSIX shell command line.
fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=%+,@".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

fn probe_file(config: &Config, file: &Path, json: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }

    let ffprobe = get_tool_path("ffprobe", config.tools.ffprobe_path.as_deref())?;
    let data = probe_with_ffprobe(&ffprobe, file)
        .with_context(|| format!("failed to probe {}", file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!("File: {}", file.display());
    if let Some(ref format) = data.format {
        println!("Container: {}", format.format_name);
    }
    if let Some(secs) = data.duration_secs() {
        let secs = secs as u64;
        println!("Duration: {:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60);
    }

    println!("\nStreams: {}", data.streams.len());
    for stream in &data.streams {
        print!("  [{}] {} {}", stream.index, stream.codec_type, stream.codec_name);
        if stream.is_video() {
            print!(" {}x{}", stream.width, stream.height);
            if !stream.display_aspect_ratio.is_empty() {
                print!(" ({})", stream.display_aspect_ratio);
            }
        }
        if !stream.bit_rate.is_empty() {
            print!(" {} b/s", stream.bit_rate);
        }
        println!();
    }

    Ok(())
}

fn check_tools_cmd(config: &Config) -> Result<()> {
    println!("Checking external tools...\n");

    let tools = check_tools(&config.tools);
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available() {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install them to probe media files directly.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let contents = std::fs::read_to_string(p)
                .with_context(|| format!("failed to read {}", p.display()))?;
            let config = Config::from_json(&contents)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            Config::default()
        }
    };

    println!("  Encoder: {} (crf {})", config.planner.encoder, config.planner.crf);
    println!("  Max height: {}", config.planner.max_height);
    println!("  Fallback bandwidth: {}", config.planner.fallback_bandwidth);
    println!("  Default aspect ratio: {}", config.planner.default_aspect_ratio);
    println!("  Segment duration: {}s", config.hls.segment_duration_secs);

    let warnings = config.validate();
    for warning in &warnings {
        println!("  ⚠ {}", warning);
    }

    Ok(())
}
