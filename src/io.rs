//! Image files and frame persistence.
//!
//! Grids are decoded through the `image` crate (any format it recognises)
//! and always written back as PNG, which keeps every packed colour intact.
//!
//! Frames are written as `{dir}/{policy}_frame_{sequence:04}.png`, so a
//! directory listing sorted by name is the playback order of each policy.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageError, ImageFormat, ImageResult, Rgba, RgbaImage};
use log::debug;
use ndarray::{Array2, ArrayView2};

use crate::error::{FillError, Result};
use crate::fill::engine::{Snapshot, SnapshotSink};
use crate::fill::frontier::FillPolicy;
use crate::fill::grid::{dimensions, pack_argb, unpack_rgba, Color, Grid};

const OPAQUE: Color = 0xFF00_0000;

/// Decode an image file into a packed-colour grid with every pixel opaque.
///
/// The alpha channel is dropped on load, so a fully transparent black pixel
/// reads as [`BLACK`](crate::fill::grid::BLACK) and acts as a boundary.
///
/// # Errors
/// `Decode` if the file is unreadable or its format is not recognised.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let mut grid = load_grid_rgba(path)?;
    grid.mapv_inplace(|color| color | OPAQUE);
    Ok(grid)
}

/// Decode an image file, keeping each pixel's alpha byte.
///
/// # Errors
/// `Decode` if the file is unreadable or its format is not recognised.
pub fn load_grid_rgba(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| FillError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(grid_from_rgba(&image.to_rgba8()))
}

/// Write a grid as PNG, creating missing parent directories.
///
/// # Errors
/// `Write` on any I/O or encoding failure.
pub fn save_grid(grid: &Grid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_png(grid.view(), path).map_err(|source| FillError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn grid_from_rgba(image: &RgbaImage) -> Grid {
    let (width, height) = image.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        let [r, g, b, a] = image.get_pixel(x as u32, y as u32).0;
        pack_argb(a, r, g, b)
    })
}

pub fn grid_to_rgba(grid: ArrayView2<Color>) -> RgbaImage {
    let (width, height) = dimensions(&grid);
    RgbaImage::from_fn(width as u32, height as u32, |x, y| {
        Rgba(unpack_rgba(grid[[y as usize, x as usize]]))
    })
}

/// Path of one animation frame.
pub fn frame_path(dir: &Path, policy: FillPolicy, sequence: u32) -> PathBuf {
    dir.join(format!("{}_frame_{:04}.png", policy.name(), sequence))
}

fn write_png(grid: ArrayView2<Color>, path: &Path) -> ImageResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(ImageError::IoError)?;
        }
    }
    grid_to_rgba(grid).save_with_format(path, ImageFormat::Png)
}

/// Snapshot sink that writes every frame to a directory.
#[derive(Debug)]
pub struct DiskSink {
    dir: PathBuf,
    retain: bool,
    frames: Vec<PathBuf>,
    retained: Vec<Snapshot>,
}

impl DiskSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            retain: false,
            frames: Vec::new(),
            retained: Vec::new(),
        }
    }

    /// Like [`DiskSink::new`], but also keeps every snapshot in memory.
    pub fn retaining(dir: impl Into<PathBuf>) -> Self {
        Self {
            retain: true,
            ..Self::new(dir)
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in sequence order.
    pub fn frames(&self) -> &[PathBuf] {
        &self.frames
    }

    pub fn retained(&self) -> &[Snapshot] {
        &self.retained
    }
}

impl SnapshotSink for DiskSink {
    fn accept(&mut self, snapshot: Snapshot) -> Result<()> {
        let path = frame_path(&self.dir, snapshot.policy, snapshot.sequence);
        let written = write_png(snapshot.grid.view(), &path);

        let sequence = snapshot.sequence;
        if self.retain {
            self.retained.push(snapshot);
        }

        match written {
            Ok(()) => {
                self.frames.push(path);
                Ok(())
            }
            Err(source) => Err(FillError::SnapshotWrite {
                path,
                sequence,
                source,
            }),
        }
    }
}
