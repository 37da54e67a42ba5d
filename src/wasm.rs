//! WebAssembly exports for FloodStag.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Pixels
//! travel as flat row-major `Uint32Array`s of packed 0xAARRGGBB colours
//! (length = width * height).

use ndarray::ArrayView2;
use wasm_bindgen::prelude::*;

use crate::error::FillError;
use crate::fill::{
    Coord, DiscardSink, FillConfig, FillEngine, FillOutcome, FillPolicy, FillRequest, MemorySink,
    SnapshotSink, DEFAULT_SNAPSHOT_INTERVAL,
};

fn to_js_err(err: FillError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[allow(clippy::too_many_arguments)]
fn run<S: SnapshotSink>(
    data: &[u32],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    boundary: u32,
    replacement: u32,
    policy: &str,
    interval: usize,
    sink: &mut S,
) -> Result<FillOutcome, JsValue> {
    let input = ArrayView2::from_shape((height, width), data)
        .map_err(|e| JsValue::from_str(&format!("Invalid dimensions: {}", e)))?;
    let policy: FillPolicy = policy.parse().map_err(to_js_err)?;
    let mut engine = FillEngine::new(FillConfig::with_interval(interval)).map_err(to_js_err)?;
    let request = FillRequest::new(Coord::new(x, y), boundary, replacement, policy);
    engine.fill_into(input, &request, sink).map_err(to_js_err)
}

// ============================================================================
// Flood Fill
// ============================================================================

/// Flood fill a packed ARGB image.
///
/// # Arguments
/// * `data` - Flat array of packed colours (length = width * height)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `x`, `y` - Seed position
/// * `boundary` - Colour that is never painted over
/// * `replacement` - Fill colour
/// * `policy` - "stack" or "queue"
///
/// # Returns
/// Flat array of packed colours with the region filled
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn flood_fill_wasm(
    data: &[u32],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    boundary: u32,
    replacement: u32,
    policy: &str,
) -> Result<Vec<u32>, JsValue> {
    let outcome = run(
        data,
        width,
        height,
        x,
        y,
        boundary,
        replacement,
        policy,
        DEFAULT_SNAPSHOT_INTERVAL,
        &mut DiscardSink,
    )?;
    Ok(outcome.grid.into_raw_vec_and_offset().0)
}

/// Flood fill and return every animation frame.
///
/// # Returns
/// All frames concatenated (frame count = length / (width * height)); the
/// last frame is the finished fill.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn flood_fill_frames_wasm(
    data: &[u32],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    boundary: u32,
    replacement: u32,
    policy: &str,
    interval: usize,
) -> Result<Vec<u32>, JsValue> {
    let mut sink = MemorySink::new();
    run(data, width, height, x, y, boundary, replacement, policy, interval, &mut sink)?;
    let snapshots = sink.into_snapshots();
    let mut frames = Vec::with_capacity(snapshots.len() * width * height);
    for snapshot in snapshots {
        frames.extend(snapshot.grid.into_raw_vec_and_offset().0);
    }
    Ok(frames)
}
