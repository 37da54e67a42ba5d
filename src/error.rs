//! Error taxonomy for flood fill runs.
//!
//! Every failure is terminal for the operation it affects and isolated
//! from unrelated operations: a snapshot failure never aborts a fill, and
//! a failed stack-policy fill never aborts the queue-policy fill.

use std::path::PathBuf;

use thiserror::Error;

use crate::fill::coord::Coord;

#[derive(Error, Debug)]
pub enum FillError {
    /// Source image unreadable or in an unrecognized format.
    #[error("failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Seed coordinate lies outside the grid.
    #[error("seed {coord} is outside the {width}x{height} grid")]
    OutOfBounds {
        coord: Coord,
        width: usize,
        height: usize,
    },
    /// Final image could not be persisted.
    #[error("failed to write image {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Intermediate frame could not be persisted. Recovered by the engine.
    #[error("failed to write snapshot {sequence} to {}: {source}", .path.display())]
    SnapshotWrite {
        path: PathBuf,
        sequence: u32,
        #[source]
        source: image::ImageError,
    },
    #[error("frontier is empty")]
    EmptyFrontier,
    #[error("invalid fill configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid color {0:?}: expected #RRGGBB, #AARRGGBB, 0xAARRGGBB or a color name")]
    InvalidColor(String),
    #[error("unknown fill policy {0:?}: expected \"stack\" or \"queue\"")]
    InvalidPolicy(String),
}

pub type Result<T> = std::result::Result<T, FillError>;
