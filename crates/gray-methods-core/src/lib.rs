//! Pixel grids and classical grayscale conversion formulas.
//!
//! This crate is intentionally small and purely numeric. It does *not*
//! depend on any concrete image decoder or output format: callers hand it
//! 8-bit RGB samples, it widens them to `f64` and applies the lightness,
//! average, and luminosity formulas.

mod convert;
mod grid;
mod logger;

pub use convert::{average, lightness, luminosity, Method, BT601_BLUE, BT601_GREEN, BT601_RED};
pub use grid::{Channel, GrayMap, GridError, PixelGrid};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, level_from_verbosity};
