//! Flood fill traversal engine.
//!
//! One engine drives both policies; the frontier container is the only
//! thing that changes between a depth-first (stack) and a breadth-first
//! (queue) fill.
//!
//! ## Algorithm
//!
//! 1. Copy the source grid and read the target colour at the seed.
//! 2. If the target is the replacement or the boundary colour, stop: the
//!    fill is a no-op.
//! 3. Seed the frontier, then repeatedly take the next coordinate. A
//!    coordinate that is out of bounds, already visited, or no longer the
//!    target colour is discarded *on removal*; neighbours are added
//!    unconditionally.
//! 4. Every `snapshot_interval` painted pixels, hand a copy of the grid to
//!    the snapshot sink. One final snapshot follows the loop.
//!
//! Visited markers and the frontier are rebuilt on every call, so an
//! engine can be reused without state leaking between fills.

use log::{debug, warn};
use ndarray::{Array2, ArrayView2};

use crate::error::{FillError, Result};
use crate::fill::coord::{Coord, NeighbourOrder};
use crate::fill::frontier::{FillPolicy, Frontier, Queue, Stack};
use crate::fill::grid::{dimensions, Color, Grid};

/// Default number of painted pixels between snapshots.
pub const DEFAULT_SNAPSHOT_INTERVAL: usize = 25;

/// Engine tuning. Variation between fill flavours lives here, not in types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillConfig {
    /// Painted pixels between periodic snapshots (must be non-zero)
    pub snapshot_interval: usize,
    /// Order in which neighbours are added to the frontier
    pub neighbour_order: NeighbourOrder,
}

impl FillConfig {
    pub fn with_interval(snapshot_interval: usize) -> Self {
        Self {
            snapshot_interval,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.snapshot_interval == 0 {
            return Err(FillError::InvalidConfig(
                "snapshot interval must be at least 1".into(),
            ));
        }
        if !self.neighbour_order.is_complete() {
            return Err(FillError::InvalidConfig(format!(
                "neighbour order {:?} must name each direction once",
                self.neighbour_order.0
            )));
        }
        Ok(())
    }
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            snapshot_interval: DEFAULT_SNAPSHOT_INTERVAL,
            neighbour_order: NeighbourOrder::default(),
        }
    }
}

/// Parameters of a single fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillRequest {
    pub start: Coord,
    /// Reserved colour that is never painted over
    pub boundary: Color,
    pub replacement: Color,
    pub policy: FillPolicy,
}

impl FillRequest {
    pub fn new(start: Coord, boundary: Color, replacement: Color, policy: FillPolicy) -> Self {
        Self {
            start,
            boundary,
            replacement,
            policy,
        }
    }
}

/// Counters collected during one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillStats {
    pub pixels_painted: usize,
    /// Total frontier removals (frontier churn)
    pub removals: usize,
    /// Removals that were out of bounds, visited, or off-colour
    pub discarded: usize,
    /// Largest frontier length observed
    pub peak_frontier: usize,
    pub snapshots_emitted: usize,
    pub snapshot_failures: usize,
}

/// A copy of the working grid at one point of a traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub policy: FillPolicy,
    /// 1-based, increasing by one per snapshot within a fill
    pub sequence: u32,
    pub grid: Grid,
}

/// Receives snapshots in increasing sequence order.
///
/// A sink error is logged and counted; it never stops the traversal.
pub trait SnapshotSink {
    fn accept(&mut self, snapshot: Snapshot) -> Result<()>;

    /// When false the engine skips copying the grid for this sink.
    fn wants_snapshots(&self) -> bool {
        true
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for &mut S {
    fn accept(&mut self, snapshot: Snapshot) -> Result<()> {
        (**self).accept(snapshot)
    }

    fn wants_snapshots(&self) -> bool {
        (**self).wants_snapshots()
    }
}

/// Sink for callers that only want the finished grid.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl SnapshotSink for DiscardSink {
    fn accept(&mut self, _snapshot: Snapshot) -> Result<()> {
        Ok(())
    }

    fn wants_snapshots(&self) -> bool {
        false
    }
}

/// Sink that keeps every snapshot in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    snapshots: Vec<Snapshot>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }
}

impl SnapshotSink for MemorySink {
    fn accept(&mut self, snapshot: Snapshot) -> Result<()> {
        self.snapshots.push(snapshot);
        Ok(())
    }
}

/// Result of a fill.
#[derive(Debug, Clone)]
pub struct FillOutcome {
    pub grid: Grid,
    pub stats: FillStats,
    /// Retained snapshots; empty when they were streamed to a sink
    pub snapshots: Vec<Snapshot>,
}

impl FillOutcome {
    pub fn pixels_painted(&self) -> usize {
        self.stats.pixels_painted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running,
    Complete,
}

/// Single-threaded flood fill engine.
#[derive(Debug)]
pub struct FillEngine {
    config: FillConfig,
    state: EngineState,
}

impl FillEngine {
    pub fn new(config: FillConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: EngineState::Idle,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Fill a copy of `source`, keeping every snapshot in the outcome.
    pub fn fill(&mut self, source: ArrayView2<Color>, request: &FillRequest) -> Result<FillOutcome> {
        let mut sink = MemorySink::new();
        let mut outcome = self.fill_into(source, request, &mut sink)?;
        outcome.snapshots = sink.into_snapshots();
        Ok(outcome)
    }

    /// Fill a copy of `source`, streaming snapshots to `sink`.
    ///
    /// # Errors
    /// `OutOfBounds` if the seed is outside the grid. The source is never
    /// modified.
    pub fn fill_into<S: SnapshotSink + ?Sized>(
        &mut self,
        source: ArrayView2<Color>,
        request: &FillRequest,
        sink: &mut S,
    ) -> Result<FillOutcome> {
        let (width, height) = dimensions(&source);
        let Some(seed) = request.start.to_index(width, height) else {
            self.state = EngineState::Idle;
            return Err(FillError::OutOfBounds {
                coord: request.start,
                width,
                height,
            });
        };

        self.state = EngineState::Running;
        let mut grid = source.to_owned();
        let target = grid[seed];

        if target == request.replacement || target == request.boundary {
            debug!(
                "{} fill at {} is a no-op (target {:#010X})",
                request.policy, request.start, target
            );
            self.state = EngineState::Complete;
            return Ok(FillOutcome {
                grid,
                stats: FillStats::default(),
                snapshots: Vec::new(),
            });
        }

        debug!(
            "{} fill at {} on {}x{}: {:#010X} -> {:#010X}",
            request.policy, request.start, width, height, target, request.replacement
        );

        let stats = match request.policy {
            FillPolicy::Stack => self.traverse(&mut grid, Stack::new(), target, request, sink),
            FillPolicy::Queue => self.traverse(&mut grid, Queue::new(), target, request, sink),
        };

        debug!(
            "{} fill painted {} pixels ({} removals, peak frontier {}, {} snapshots)",
            request.policy,
            stats.pixels_painted,
            stats.removals,
            stats.peak_frontier,
            stats.snapshots_emitted
        );

        self.state = EngineState::Complete;
        Ok(FillOutcome {
            grid,
            stats,
            snapshots: Vec::new(),
        })
    }

    fn traverse<F, S>(
        &self,
        grid: &mut Grid,
        mut frontier: F,
        target: Color,
        request: &FillRequest,
        sink: &mut S,
    ) -> FillStats
    where
        F: Frontier<Coord>,
        S: SnapshotSink + ?Sized,
    {
        let (height, width) = grid.dim();
        let mut visited = Array2::<bool>::from_elem((height, width), false);
        let mut stats = FillStats::default();
        let mut sequence = 0u32;

        frontier.add(request.start);
        stats.peak_frontier = frontier.len();

        while let Some(coord) = frontier.pop_next() {
            stats.removals += 1;

            let idx = match coord.to_index(width, height) {
                Some(idx) if !visited[idx] && grid[idx] == target => idx,
                _ => {
                    stats.discarded += 1;
                    continue;
                }
            };

            visited[idx] = true;
            grid[idx] = request.replacement;
            stats.pixels_painted += 1;

            if stats.pixels_painted % self.config.snapshot_interval == 0 {
                sequence += 1;
                emit(sink, request.policy, sequence, grid, &mut stats);
            }

            for neighbour in coord.neighbours(&self.config.neighbour_order) {
                frontier.add(neighbour);
            }
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        }

        sequence += 1;
        emit(sink, request.policy, sequence, grid, &mut stats);

        stats
    }
}

fn emit<S: SnapshotSink + ?Sized>(
    sink: &mut S,
    policy: FillPolicy,
    sequence: u32,
    grid: &Grid,
    stats: &mut FillStats,
) {
    if !sink.wants_snapshots() {
        return;
    }
    let snapshot = Snapshot {
        policy,
        sequence,
        grid: grid.clone(),
    };
    match sink.accept(snapshot) {
        Ok(()) => stats.snapshots_emitted += 1,
        Err(err) => {
            warn!("{} snapshot {} dropped: {}", policy, sequence, err);
            stats.snapshot_failures += 1;
        }
    }
}
