//! FloodStag command line.
//!
//! Loads one image, runs the stack and queue fills on independent copies,
//! and writes `result_{policy}.png` plus the animation frames of each run.
//!
//! # Usage
//!
//! ```bash
//! floodstag maze.png --x 20 --y 20
//! floodstag maze.png --policy queue --queue-color '#00FF00' --interval 50
//! RUST_LOG=debug floodstag maze.png --no-frames
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use floodstag::fill::grid::parse_color;
use floodstag::fill::DEFAULT_SNAPSHOT_INTERVAL;
use floodstag::io::load_grid;
use floodstag::runner::{run_policies, RunConfig};
use floodstag::{Color, Coord, FillConfig, FillPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Stack,
    Queue,
    Both,
}

impl PolicyArg {
    fn policies(self) -> Vec<FillPolicy> {
        match self {
            PolicyArg::Stack => vec![FillPolicy::Stack],
            PolicyArg::Queue => vec![FillPolicy::Queue],
            PolicyArg::Both => FillPolicy::ALL.to_vec(),
        }
    }
}

/// Flood fill an image with a stack and a queue, recording animation frames.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source image (any format the decoder recognises)
    image: PathBuf,

    /// Seed column
    #[arg(long, default_value_t = 20)]
    x: i32,

    /// Seed row
    #[arg(long, default_value_t = 20)]
    y: i32,

    /// Fill colour for the stack run (#RRGGBB, #AARRGGBB, 0xAARRGGBB or a name)
    #[arg(long, value_parser = color_arg, default_value = "red")]
    stack_color: Color,

    /// Fill colour for the queue run
    #[arg(long, value_parser = color_arg, default_value = "blue")]
    queue_color: Color,

    /// Colour that is never painted over
    #[arg(long, value_parser = color_arg, default_value = "black")]
    boundary: Color,

    /// Painted pixels between animation frames
    #[arg(long, default_value_t = DEFAULT_SNAPSHOT_INTERVAL)]
    interval: usize,

    /// Which policies to run
    #[arg(long, value_enum, default_value_t = PolicyArg::Both)]
    policy: PolicyArg,

    /// Directory for result images
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Directory for animation frames
    #[arg(long, default_value = "animation")]
    animation_dir: PathBuf,

    /// Skip writing animation frames
    #[arg(long)]
    no_frames: bool,
}

fn color_arg(text: &str) -> std::result::Result<Color, String> {
    parse_color(text).map_err(|e| e.to_string())
}

impl Args {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            start: Coord::new(self.x, self.y),
            boundary: self.boundary,
            stack_color: self.stack_color,
            queue_color: self.queue_color,
            policies: self.policy.policies(),
            output_dir: self.output_dir.clone(),
            animation_dir: self.animation_dir.clone(),
            write_frames: !self.no_frames,
            fill: FillConfig::with_interval(self.interval),
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    let source = load_grid(&args.image)
        .with_context(|| format!("cannot read source image {}", args.image.display()))?;
    let (height, width) = source.dim();
    info!("loaded {} ({}x{})", args.image.display(), width, height);

    let config = args.run_config();
    let reports = run_policies(&source, &config);

    let mut all_ok = true;
    for report in &reports {
        match &report.outcome {
            Ok(stats) => {
                println!(
                    "{:<6} painted {:>8} px  removals {:>9}  peak frontier {:>8}  frames {:>5}  -> {}",
                    report.policy,
                    stats.pixels_painted,
                    stats.removals,
                    stats.peak_frontier,
                    stats.snapshots_emitted,
                    report.result_path.display()
                );
                if stats.snapshot_failures > 0 {
                    eprintln!(
                        "warning: {} of {} {} frames could not be written",
                        stats.snapshot_failures,
                        stats.snapshot_failures + stats.snapshots_emitted,
                        report.policy
                    );
                }
            }
            Err(err) => {
                eprintln!("error: {} run failed: {}", report.policy, err);
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("fatal: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floodstag::fill::grid::{BLACK, BLUE, RED};

    #[test]
    fn test_defaults_match_reference_run() {
        let args = Args::parse_from(["floodstag", "maze.png"]);
        let config = args.run_config();
        assert_eq!(config.start, Coord::new(20, 20));
        assert_eq!(config.stack_color, RED);
        assert_eq!(config.queue_color, BLUE);
        assert_eq!(config.boundary, BLACK);
        assert_eq!(config.fill.snapshot_interval, 25);
        assert_eq!(config.policies, FillPolicy::ALL.to_vec());
        assert!(config.write_frames);
    }

    #[test]
    fn test_single_policy_and_colors() {
        let args = Args::parse_from([
            "floodstag",
            "in.png",
            "--policy",
            "queue",
            "--queue-color",
            "#00FF00",
            "--no-frames",
        ]);
        let config = args.run_config();
        assert_eq!(config.policies, vec![FillPolicy::Queue]);
        assert_eq!(config.queue_color, 0xFF00_FF00);
        assert!(!config.write_frames);
    }

    #[test]
    fn test_bad_color_rejected() {
        let parsed = Args::try_parse_from(["floodstag", "in.png", "--boundary", "purple"]);
        assert!(parsed.is_err());
    }
}
