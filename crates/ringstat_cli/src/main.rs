//! ringstat CLI
//!
//! Render ring chart frames and simulate reveal animations from the command line.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ringstat_animation::AnimationScheduler;
use ringstat_chart::{
    parse_palette, ChartConfig, ChartGeometry, ChartRenderer, Dataset, LayoutMode, Palette,
    RingChart, ANIMATION_DURATION_MS,
};
use ringstat_core::{DrawCommand, RecordingContext, Size};

mod svg;

use svg::SvgContext;

#[derive(Parser)]
#[command(name = "ringstat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Animated ring chart renderer", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every chart command
#[derive(Args)]
struct ChartArgs {
    /// Comma separated fractions, e.g. 0.3,0.2,0.3734
    #[arg(short, long)]
    data: String,

    /// Layout mode (0 sequential, 1 cumulative, 2 symmetric, 3 cascade)
    #[arg(short, long)]
    mode: Option<u8>,

    /// Chart config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Surface width
    #[arg(long, default_value = "400")]
    width: f32,

    /// Surface height
    #[arg(long, default_value = "400")]
    height: f32,

    /// Segment colors overriding the config, e.g. "#FF5722,#03A9F4"
    #[arg(long)]
    palette: Option<String>,

    /// Seed for fallback colors
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single frame
    Render {
        #[command(flatten)]
        chart: ChartArgs,

        /// Reveal progress (0.0 to 1.0)
        #[arg(short, long, default_value = "1.0")]
        progress: f32,

        /// Output format (text, json, svg)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output path, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run one reveal animation and print a line per frame
    Animate {
        #[command(flatten)]
        chart: ChartArgs,

        /// Frames per second of the simulated clock
        #[arg(long, default_value = "60")]
        fps: u32,
    },

    /// Print the default chart config as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Render {
            chart,
            progress,
            format,
            output,
        } => cmd_render(&chart, progress, &format, output.as_deref()),

        Commands::Animate { chart, fps } => cmd_animate(&chart, fps),

        Commands::Config => cmd_config(),
    }
}

/// Resolve the chart config: file or defaults, then the `--mode` and
/// `--palette` overrides
fn load_config(args: &ChartArgs) -> Result<ChartConfig> {
    let mut config = match &args.config {
        Some(path) => ChartConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ChartConfig::default(),
    };

    if let Some(mode) = args.mode {
        config.layout_mode = LayoutMode::try_from(mode).context("Invalid --mode")?;
    }
    if let Some(palette) = &args.palette {
        config.palette = parse_palette(palette)
            .with_context(|| format!("Failed to parse --palette '{}'", palette))?;
    }

    Ok(config)
}

fn check_progress(progress: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&progress) {
        anyhow::bail!("Invalid progress {}, expected a value from 0.0 to 1.0", progress);
    }
    Ok(())
}

fn parse_dataset(data: &str) -> Result<Dataset> {
    data.parse::<Dataset>()
        .with_context(|| format!("Failed to parse --data '{}'", data))
}

fn surface_size(args: &ChartArgs) -> Result<Size> {
    if !(args.width.is_finite() && args.height.is_finite()) || args.width < 0.0 || args.height < 0.0
    {
        anyhow::bail!(
            "Invalid surface size {}x{}, expected non-negative values",
            args.width,
            args.height
        );
    }
    Ok(Size::new(args.width, args.height))
}

fn cmd_render(args: &ChartArgs, progress: f32, format: &str, output: Option<&Path>) -> Result<()> {
    let valid_formats = ["text", "json", "svg"];
    if !valid_formats.contains(&format) {
        anyhow::bail!(
            "Invalid format '{}'. Valid formats: {:?}",
            format,
            valid_formats
        );
    }
    check_progress(progress)?;

    let config = load_config(args)?;
    config.validate().context("Invalid chart config")?;
    let dataset = parse_dataset(&args.data)?;
    let size = surface_size(args)?;
    let geometry = ChartGeometry::new(size.width, size.height, config.stroke_width);

    let mut renderer = match args.seed {
        Some(seed) => ChartRenderer::with_palette(
            &config,
            Palette::with_seed(config.palette.clone(), config.fallback_colors, seed),
        ),
        None => ChartRenderer::new(&config),
    };

    info!(
        "Rendering {} segments at progress {:.3} ({:?})",
        dataset.len(),
        progress,
        config.layout_mode
    );

    let rendered = match format {
        "svg" => {
            let mut surface = SvgContext::new(size);
            renderer.render(&mut surface, &dataset, &geometry, progress);
            surface.finish()
        }
        _ => {
            let mut surface = RecordingContext::new(size);
            renderer.render(&mut surface, &dataset, &geometry, progress);
            debug!("Recorded {} arcs", surface.arc_count());
            if format == "json" {
                let mut json = serde_json::to_string_pretty(surface.commands())
                    .context("Failed to serialize draw commands")?;
                json.push('\n');
                json
            } else {
                surface.commands().iter().map(describe).collect()
            }
        }
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn cmd_animate(args: &ChartArgs, fps: u32) -> Result<()> {
    if fps == 0 {
        anyhow::bail!("Invalid fps 0, expected at least 1");
    }

    let config = load_config(args)?;
    let dataset = parse_dataset(&args.data)?;
    let size = surface_size(args)?;

    let scheduler = AnimationScheduler::new();
    let mut chart = match args.seed {
        Some(seed) => RingChart::with_seed(config, scheduler.handle(), seed),
        None => RingChart::new(config, scheduler.handle()),
    }
    .context("Invalid chart config")?;

    chart.on_resize(size.width, size.height);
    chart.set_dataset(dataset);

    let frame_ms = 1000.0 / fps as f32;
    info!(
        "Animating {} ms at {} fps ({:.2} ms per frame)",
        ANIMATION_DURATION_MS, fps, frame_ms
    );

    let mut surface = RecordingContext::new(size);
    let mut frame = 0u64;
    loop {
        let active = scheduler.tick_by(frame_ms);
        if chart.take_needs_redraw() {
            surface.clear();
            let arcs = chart.draw(&mut surface);
            println!(
                "frame {:>4}  progress {:.3}  arcs {}",
                frame,
                chart.progress(),
                arcs
            );
        }
        frame += 1;
        if !active {
            break;
        }
    }

    info!("Animation finished after {} frames", frame);
    Ok(())
}

fn cmd_config() -> Result<()> {
    let toml = ChartConfig::default()
        .to_toml()
        .context("Failed to serialize default config")?;
    print!("{}", toml);
    Ok(())
}

/// One line of text output per draw command
fn describe(command: &DrawCommand) -> String {
    match command {
        DrawCommand::StrokeArc {
            oval,
            start_angle,
            sweep_angle,
            stroke,
            color,
        } => format!(
            "arc   start {:>8.2}  sweep {:>8.2}  width {}  color {}  oval ({:.2}, {:.2}, {:.2}, {:.2})\n",
            start_angle,
            sweep_angle,
            stroke.width,
            color.to_hex_string(),
            oval.x(),
            oval.y(),
            oval.width(),
            oval.height()
        ),
        DrawCommand::DrawText {
            text,
            origin,
            style,
        } => format!(
            "label {:?} at ({:.2}, {:.2})  size {}  color {}\n",
            text,
            origin.x,
            origin.y,
            style.size,
            style.color.to_hex_string()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringstat_core::Color;

    fn chart_args(data: &str) -> ChartArgs {
        ChartArgs {
            data: data.to_string(),
            mode: None,
            config: None,
            width: 400.0,
            height: 400.0,
            palette: None,
            seed: None,
        }
    }

    #[test]
    fn test_progress_must_be_a_fraction() {
        assert!(check_progress(0.0).is_ok());
        assert!(check_progress(1.0).is_ok());
        assert!(check_progress(1.5).is_err());
        assert!(check_progress(-0.1).is_err());
        assert!(check_progress(f32::NAN).is_err());
    }

    #[test]
    fn test_render_rejects_out_of_range_progress() {
        let err = cmd_render(&chart_args("0.5,0.5"), 2.0, "text", None).unwrap_err();
        assert!(err.to_string().contains("Invalid progress 2"));
    }

    #[test]
    fn test_config_overrides() {
        let mut args = chart_args("0.5");
        args.mode = Some(2);
        args.palette = Some("#FF5722, #03A9F4".to_string());

        let config = load_config(&args).unwrap();
        assert_eq!(config.layout_mode, LayoutMode::Symmetric);
        assert_eq!(config.palette, vec![Color::from_hex(0xFF5722), Color::from_hex(0x03A9F4)]);
    }

    #[test]
    fn test_config_rejects_bad_overrides() {
        let mut args = chart_args("0.5");
        args.palette = Some("#FF5722,blue".to_string());
        assert!(load_config(&args).is_err());

        let mut args = chart_args("0.5");
        args.mode = Some(9);
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn test_describe_lines() {
        let mut surface = RecordingContext::new(Size::new(200.0, 200.0));
        let config = ChartConfig::default();
        let mut renderer = ChartRenderer::with_palette(
            &config,
            Palette::with_seed(vec![Color::from_hex(0x03A9F4)], config.fallback_colors, 1),
        );
        let geometry = ChartGeometry::new(200.0, 200.0, config.stroke_width);
        renderer.render(&mut surface, &Dataset::from(vec![0.5]), &geometry, 1.0);

        let lines: Vec<String> = surface.commands().iter().map(describe).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("arc"));
        assert!(lines[0].contains("sweep   180.00"));
        assert!(lines[1].starts_with("label \"50.00%\""));
    }
}
