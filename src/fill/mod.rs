//! Flood fill core.
//!
//! - **coord**: signed grid coordinates and 4-connected neighbourhoods
//! - **grid**: packed `0xAARRGGBB` colour grids on `ndarray`
//! - **frontier**: stack (LIFO) and queue (FIFO) pending-work containers
//! - **engine**: the traversal loop, snapshot cadence and sinks
//!
//! The core never performs I/O; image files and frame persistence live in
//! [`crate::io`].

pub mod coord;
pub mod engine;
pub mod frontier;
pub mod grid;

pub use coord::{Coord, Direction, NeighbourOrder};
pub use engine::{
    DiscardSink, EngineState, FillConfig, FillEngine, FillOutcome, FillRequest, FillStats,
    MemorySink, Snapshot, SnapshotSink, DEFAULT_SNAPSHOT_INTERVAL,
};
pub use frontier::{FillPolicy, Frontier, Queue, Stack};
pub use grid::{Color, Grid};
