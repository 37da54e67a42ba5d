//! FloodStag
//!
//! Stack- and queue-driven flood fill over packed-colour raster grids,
//! with periodic snapshots for animation playback.
//!
//! ## Grid Format
//! Grids are `ndarray::Array2<u32>` with shape `(height, width)` and one
//! packed `0xAARRGGBB` colour per pixel. Colours are compared by equality
//! only: no tolerance, no blending.
//!
//! ## Policies
//! - **Stack** (LIFO): depth-first growth that snakes along one arm of the
//!   region before backtracking
//! - **Queue** (FIFO): breadth-first growth as a wavefront around the seed
//!
//! Both policies paint exactly the same pixels; they differ in the
//! intermediate frames and in how much frontier churn they generate.
//!
//! ## Layout
//! - [`fill`]: the traversal core (coordinates, grids, frontiers, engine)
//! - [`io`]: image decoding/encoding and the on-disk frame sink
//! - [`runner`]: side-by-side policy runs on independent copies
//!
//! Python bindings (PyO3) and WASM bindings are available behind the
//! `python` and `wasm` features.

pub mod error;
pub mod fill;
pub mod io;
pub mod runner;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{FillError, Result};
pub use fill::{
    Color, Coord, FillConfig, FillEngine, FillOutcome, FillPolicy, FillRequest, FillStats, Grid,
    Snapshot, SnapshotSink,
};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::FillError;
    use crate::fill::grid::parse_color;
    use crate::fill::{Coord, FillConfig, FillEngine, FillPolicy, FillRequest, DEFAULT_SNAPSHOT_INTERVAL};

    fn to_py_err(err: FillError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    /// Flood fill a uint32 ARGB image.
    ///
    /// # Arguments
    /// * `image` - 2D array (height, width) of packed 0xAARRGGBB colours
    /// * `x`, `y` - Seed column and row
    /// * `boundary` - Colour that is never painted over
    /// * `replacement` - Fill colour
    /// * `policy` - "stack" (depth-first) or "queue" (breadth-first)
    /// * `interval` - Painted pixels between snapshots
    ///
    /// # Returns
    /// `(filled, pixels_painted, snapshots)`; the input array is not modified.
    #[pyfunction]
    #[pyo3(signature = (image, x, y, boundary, replacement, policy="stack", interval=DEFAULT_SNAPSHOT_INTERVAL))]
    #[allow(clippy::too_many_arguments, clippy::type_complexity)]
    pub fn flood_fill<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u32>,
        x: i32,
        y: i32,
        boundary: u32,
        replacement: u32,
        policy: &str,
        interval: usize,
    ) -> PyResult<(Bound<'py, PyArray2<u32>>, usize, Vec<Bound<'py, PyArray2<u32>>>)> {
        let policy: FillPolicy = policy.parse().map_err(to_py_err)?;
        let mut engine = FillEngine::new(FillConfig::with_interval(interval)).map_err(to_py_err)?;
        let request = FillRequest::new(Coord::new(x, y), boundary, replacement, policy);

        let outcome = engine.fill(image.as_array(), &request).map_err(to_py_err)?;
        let painted = outcome.pixels_painted();
        let snapshots = outcome
            .snapshots
            .into_iter()
            .map(|snapshot| snapshot.grid.into_pyarray(py))
            .collect();

        Ok((outcome.grid.into_pyarray(py), painted, snapshots))
    }

    /// Parse "#RRGGBB", "#AARRGGBB", "0xAARRGGBB" or a colour name to a packed u32.
    #[pyfunction]
    pub fn color(text: &str) -> PyResult<u32> {
        parse_color(text).map_err(to_py_err)
    }

    #[pymodule]
    pub fn floodstag(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(flood_fill, m)?)?;
        m.add_function(wrap_pyfunction!(color, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::floodstag;
