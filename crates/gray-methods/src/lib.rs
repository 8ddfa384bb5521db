//! Compare classical grayscale conversion methods side by side.
//!
//! This crate provides:
//! - stable re-exports of the underlying grid and montage crates
//! - image loading into floating-point pixel grids
//! - end-to-end helpers that run every conversion method and compose the
//!   original plus the three grayscale maps into one labeled figure
//!
//! ## Quickstart
//!
//! ```no_run
//! use gray_methods::{compare, load_pixel_grid, render_figure};
//! use gray_methods_montage::MontageLayout;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let grid = load_pixel_grid("leaves.jpg")?;
//! let set = compare(&grid);
//! let figure = render_figure(
//!     &grid,
//!     &set,
//!     "RGB to grayscale conversion methods",
//!     &MontageLayout::default(),
//! )?;
//! gray_methods_montage::write_png("leaves.grayscale.png", &figure)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `gray_methods::core`: pixel grids, channel selection, the converters.
//! - `gray_methods::montage`: panel layout and PNG output.
//! - `gray_methods::io`: JSON config and run reports.

pub use gray_methods_core as core;
pub use gray_methods_montage as montage;

pub use gray_methods_core::{average, lightness, luminosity, Channel, GrayMap, Method, PixelGrid};

mod compare;
pub mod io;
mod load;

pub use compare::{compare, render_figure, GrayscaleSet};
pub use load::{load_pixel_grid, LoadError};
