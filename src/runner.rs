//! Side-by-side stack and queue fills.
//!
//! The source grid is loaded once and shared read-only; each policy gets
//! its own engine, working copy and snapshot sink, so the runs never
//! observe each other and may execute on separate rayon workers.

use std::path::PathBuf;

use log::{debug, info};
use rayon::prelude::*;

use crate::error::Result;
use crate::fill::coord::Coord;
use crate::fill::engine::{
    DiscardSink, FillConfig, FillEngine, FillOutcome, FillRequest, FillStats, SnapshotSink,
};
use crate::fill::frontier::FillPolicy;
use crate::fill::grid::{Color, Grid, BLACK, BLUE, RED};
use crate::io::{save_grid, DiskSink};

/// Settings for a comparison run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub start: Coord,
    pub boundary: Color,
    pub stack_color: Color,
    pub queue_color: Color,
    /// Policies to run, in report order
    pub policies: Vec<FillPolicy>,
    /// Directory receiving `result_{policy}.png`
    pub output_dir: PathBuf,
    /// Directory receiving animation frames
    pub animation_dir: PathBuf,
    /// Write frames to `animation_dir`; otherwise they are discarded
    pub write_frames: bool,
    pub fill: FillConfig,
}

impl RunConfig {
    pub fn color_for(&self, policy: FillPolicy) -> Color {
        match policy {
            FillPolicy::Stack => self.stack_color,
            FillPolicy::Queue => self.queue_color,
        }
    }

    pub fn result_path(&self, policy: FillPolicy) -> PathBuf {
        self.output_dir.join(format!("result_{}.png", policy.name()))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start: Coord::new(20, 20),
            boundary: BLACK,
            stack_color: RED,
            queue_color: BLUE,
            policies: FillPolicy::ALL.to_vec(),
            output_dir: PathBuf::from("output"),
            animation_dir: PathBuf::from("animation"),
            write_frames: true,
            fill: FillConfig::default(),
        }
    }
}

/// What happened to one policy's run.
#[derive(Debug)]
pub struct PolicyReport {
    pub policy: FillPolicy,
    pub result_path: PathBuf,
    pub outcome: Result<FillStats>,
}

/// Run every configured policy on its own copy of `source`.
///
/// Failures are returned per policy and left to the caller to report; one
/// policy failing never stops another.
pub fn run_policies(source: &Grid, config: &RunConfig) -> Vec<PolicyReport> {
    config
        .policies
        .par_iter()
        .map(|&policy| PolicyReport {
            policy,
            result_path: config.result_path(policy),
            outcome: run_policy(source, config, policy),
        })
        .collect()
}

fn run_policy(source: &Grid, config: &RunConfig, policy: FillPolicy) -> Result<FillStats> {
    let mut engine = FillEngine::new(config.fill)?;
    let request = FillRequest::new(config.start, config.boundary, config.color_for(policy), policy);

    let outcome = if config.write_frames {
        let mut sink = DiskSink::new(&config.animation_dir);
        run_with_sink(&mut engine, source, &request, &mut sink)
    } else {
        run_with_sink(&mut engine, source, &request, &mut DiscardSink)
    };

    let (grid, stats) = outcome.inspect_err(|err| debug!("{} fill failed: {}", policy, err))?;

    let path = config.result_path(policy);
    save_grid(&grid, &path).inspect_err(|err| debug!("{} result not saved: {}", policy, err))?;
    info!(
        "{} fill painted {} pixels, result saved to {}",
        policy,
        stats.pixels_painted,
        path.display()
    );
    Ok(stats)
}

fn run_with_sink<S: SnapshotSink>(
    engine: &mut FillEngine,
    source: &Grid,
    request: &FillRequest,
    sink: &mut S,
) -> Result<(Grid, FillStats)> {
    let outcome = engine.fill_into(source.view(), request, sink)?;
    Ok((outcome.grid, outcome.stats))
}

/// Run every configured policy in memory, keeping each policy's snapshots.
/// Nothing is written to disk.
pub fn compare_in_memory(source: &Grid, config: &RunConfig) -> Vec<(FillPolicy, Result<FillOutcome>)> {
    config
        .policies
        .par_iter()
        .map(|&policy| {
            let request =
                FillRequest::new(config.start, config.boundary, config.color_for(policy), policy);
            let outcome = FillEngine::new(config.fill)
                .and_then(|mut engine| engine.fill(source.view(), &request));
            (policy, outcome)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FillError;
    use crate::fill::grid::{uniform, WHITE};
    use crate::io::{frame_path, load_grid};
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("floodstag-run-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn boxed_source() -> Grid {
        let mut g = uniform(8, 8, WHITE);
        for i in 0..8 {
            g[[0, i]] = BLACK;
            g[[7, i]] = BLACK;
            g[[i, 0]] = BLACK;
            g[[i, 7]] = BLACK;
        }
        g
    }

    #[test]
    fn test_both_policies_write_results_and_frames() {
        let dir = scratch_dir("both");
        let config = RunConfig {
            start: Coord::new(3, 3),
            output_dir: dir.join("output"),
            animation_dir: dir.join("animation"),
            fill: FillConfig::with_interval(10),
            ..RunConfig::default()
        };
        let source = boxed_source();

        let reports = run_policies(&source, &config);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].policy, FillPolicy::Stack);
        assert_eq!(reports[1].policy, FillPolicy::Queue);
        for report in &reports {
            let stats = report.outcome.as_ref().unwrap();
            assert_eq!(stats.pixels_painted, 36);
            let saved = load_grid(&report.result_path).unwrap();
            assert_eq!(saved[[3, 3]], config.color_for(report.policy));
            assert_eq!(saved[[0, 0]], BLACK);
            // 36 pixels at interval 10: three periodic frames plus the final one.
            assert!(frame_path(&config.animation_dir, report.policy, 4).exists());
            assert!(!frame_path(&config.animation_dir, report.policy, 5).exists());
        }
        // Source untouched by either run.
        assert_eq!(source, boxed_source());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failed_result_write_does_not_stop_other_policy() {
        let dir = scratch_dir("isolated");
        let output = dir.join("output");
        fs::create_dir_all(&output).unwrap();
        // A directory where the stack result file should go makes that save fail.
        fs::create_dir_all(output.join("result_stack.png")).unwrap();

        let config = RunConfig {
            start: Coord::new(3, 3),
            output_dir: output,
            animation_dir: dir.join("animation"),
            write_frames: false,
            ..RunConfig::default()
        };
        let reports = run_policies(&boxed_source(), &config);

        assert!(matches!(reports[0].outcome, Err(FillError::Write { .. })));
        let queue = reports[1].outcome.as_ref().unwrap();
        assert_eq!(queue.pixels_painted, 36);
        assert_eq!(queue.snapshots_emitted, 0);
        assert!(!config.animation_dir.exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_out_of_bounds_seed_reported_per_policy() {
        let dir = scratch_dir("oob");
        let config = RunConfig {
            start: Coord::new(20, 20),
            output_dir: dir.join("output"),
            write_frames: false,
            ..RunConfig::default()
        };
        let reports = run_policies(&boxed_source(), &config);
        assert!(reports
            .iter()
            .all(|r| matches!(r.outcome, Err(FillError::OutOfBounds { .. }))));
        assert!(!config.output_dir.exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_compare_in_memory_agrees_on_result() {
        let config = RunConfig {
            start: Coord::new(2, 5),
            stack_color: RED,
            queue_color: RED,
            fill: FillConfig::with_interval(7),
            ..RunConfig::default()
        };
        let results = compare_in_memory(&boxed_source(), &config);
        let stack = results[0].1.as_ref().unwrap();
        let queue = results[1].1.as_ref().unwrap();
        assert_eq!(stack.grid, queue.grid);
        assert_eq!(stack.snapshots.len(), queue.snapshots.len());
        assert_ne!(stack.stats.peak_frontier, 0);
    }
}
