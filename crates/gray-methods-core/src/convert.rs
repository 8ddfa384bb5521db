//! The three classical grayscale conversion formulas.
//!
//! Each converter is an independent pure function from an interleaved RGB
//! grid to a single-plane intensity map. Nothing is rounded or clamped
//! here; quantization happens at render time.

use serde::{Deserialize, Serialize};

use crate::grid::{GrayMap, PixelGrid};

/// ITU-R BT.601-derived luma weight for red.
pub const BT601_RED: f64 = 0.2989;
/// ITU-R BT.601-derived luma weight for green.
pub const BT601_GREEN: f64 = 0.5870;
/// ITU-R BT.601-derived luma weight for blue.
pub const BT601_BLUE: f64 = 0.1140;

/// Grayscale conversion method.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Lightness,
    Average,
    Luminosity,
}

impl Method {
    /// Every method, in panel order.
    pub const ALL: [Method; 3] = [Method::Lightness, Method::Average, Method::Luminosity];

    /// Human-readable panel title.
    pub fn label(self) -> &'static str {
        match self {
            Method::Lightness => "Lightness",
            Method::Average => "Average",
            Method::Luminosity => "Luminosity",
        }
    }

    /// Apply this method to `grid`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(grid), fields(width = grid.width(), height = grid.height()))
    )]
    pub fn convert(self, grid: &PixelGrid) -> GrayMap {
        match self {
            Method::Lightness => lightness(grid),
            Method::Average => average(grid),
            Method::Luminosity => luminosity(grid),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Midpoint of the per-pixel channel extremes: `(min(R,G,B) + max(R,G,B)) / 2`.
pub fn lightness(grid: &PixelGrid) -> GrayMap {
    map_pixels(grid, |[r, g, b]| {
        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        (min + max) / 2.0
    })
}

/// Arithmetic mean of the three channels: `(R + G + B) / 3`.
pub fn average(grid: &PixelGrid) -> GrayMap {
    map_pixels(grid, |[r, g, b]| (r + g + b) / 3.0)
}

/// Perceptually weighted sum: `0.2989 R + 0.5870 G + 0.1140 B`.
///
/// The weights sum to 0.9999, so a pure white pixel lands at 254.9745
/// rather than 255 exactly.
pub fn luminosity(grid: &PixelGrid) -> GrayMap {
    map_pixels(grid, |[r, g, b]| {
        BT601_RED * r + BT601_GREEN * g + BT601_BLUE * b
    })
}

fn map_pixels(grid: &PixelGrid, f: impl Fn([f64; 3]) -> f64) -> GrayMap {
    let mut data = Vec::with_capacity(grid.width() * grid.height());
    for px in grid.data().chunks_exact(3) {
        data.push(f([px[0], px[1], px[2]]));
    }
    GrayMap::from_parts(grid.width(), grid.height(), data)
}
