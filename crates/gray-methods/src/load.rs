//! Image loading.

use std::path::Path;

use gray_methods_core::PixelGrid;
use image::ImageReader;

/// Errors produced while loading the input image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The input file does not exist. The only failure the binary reports
    /// with a friendly diagnostic; everything else propagates as-is.
    #[error("input image '{path}' was not found")]
    InputNotFound { path: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Grid(#[from] gray_methods_core::GridError),
}

/// Decode the image at `path` into a floating-point pixel grid.
///
/// The decode is forced to 8-bit RGB and widened to `f64`, so later channel
/// sums and halvings cannot wrap.
pub fn load_pixel_grid(path: impl AsRef<Path>) -> Result<PixelGrid, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::InputNotFound {
            path: path.display().to_string(),
        });
    }

    let rgb = ImageReader::open(path)?.decode()?.to_rgb8();
    let (width, height) = rgb.dimensions();
    log::debug!("decoded {} ({width}x{height})", path.display());

    Ok(PixelGrid::from_rgb8(
        width as usize,
        height as usize,
        rgb.as_raw(),
    )?)
}
