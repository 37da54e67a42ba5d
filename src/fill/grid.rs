//! Packed-colour grids.
//!
//! A grid is an `ndarray::Array2<Color>` with shape `(height, width)`,
//! indexed `[[row, col]]` like every other image buffer in this crate.
//! Colours are opaque `0xAARRGGBB` values compared by equality only.

use ndarray::{Array2, ArrayView2};

use crate::error::{FillError, Result};

/// Packed `0xAARRGGBB` colour.
pub type Color = u32;

/// Owned colour grid, shape `(height, width)`.
pub type Grid = Array2<Color>;

pub const BLACK: Color = 0xFF00_0000;
pub const WHITE: Color = 0xFFFF_FFFF;
pub const RED: Color = 0xFFFF_0000;
pub const GREEN: Color = 0xFF00_FF00;
pub const BLUE: Color = 0xFF00_00FF;

/// Width and height of a grid view.
#[inline]
pub fn dimensions(grid: &ArrayView2<Color>) -> (usize, usize) {
    let (height, width) = grid.dim();
    (width, height)
}

/// Grid of `width` x `height` pixels, all set to `color`.
pub fn uniform(width: usize, height: usize, color: Color) -> Grid {
    Array2::from_elem((height, width), color)
}

#[inline]
pub const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> Color {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Split a packed colour into `(r, g, b, a)` bytes.
#[inline]
pub const fn unpack_rgba(color: Color) -> [u8; 4] {
    [
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
        (color >> 24) as u8,
    ]
}

/// Parse a colour given as `#RRGGBB`, `#AARRGGBB`, `0xAARRGGBB` or a name.
///
/// Six-digit forms are opaque (alpha 0xFF).
pub fn parse_color(text: &str) -> Result<Color> {
    let trimmed = text.trim();
    let named = match trimmed.to_ascii_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        _ => None,
    };
    if let Some(color) = named {
        return Ok(color);
    }

    let digits = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or_else(|| FillError::InvalidColor(text.to_string()))?;

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FillError::InvalidColor(text.to_string()));
    }
    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| FillError::InvalidColor(text.to_string()))?;

    match digits.len() {
        6 => Ok(0xFF00_0000 | value),
        8 => Ok(value),
        _ => Err(FillError::InvalidColor(text.to_string())),
    }
}
