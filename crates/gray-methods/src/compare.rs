//! End-to-end helpers: run every conversion method, compose the figure.

use gray_methods_core::{GrayMap, Method, PixelGrid};
use gray_methods_montage::{compose, Figure, MontageError, MontageLayout, Panel};

/// The three grayscale renditions of one input image.
#[derive(Clone, Debug)]
pub struct GrayscaleSet {
    pub lightness: GrayMap,
    pub average: GrayMap,
    pub luminosity: GrayMap,
}

impl GrayscaleSet {
    /// Maps paired with their method, in panel order.
    pub fn maps(&self) -> [(Method, &GrayMap); 3] {
        [
            (Method::Lightness, &self.lightness),
            (Method::Average, &self.average),
            (Method::Luminosity, &self.luminosity),
        ]
    }
}

/// Run all three conversion methods on one input grid.
///
/// The maps are independent of each other; nothing is shared beyond the
/// input.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "info", skip(grid), fields(width = grid.width(), height = grid.height()))
)]
pub fn compare(grid: &PixelGrid) -> GrayscaleSet {
    GrayscaleSet {
        lightness: gray_methods_core::lightness(grid),
        average: gray_methods_core::average(grid),
        luminosity: gray_methods_core::luminosity(grid),
    }
}

/// Compose the 1x4 figure: the original followed by the three grayscale maps.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "info", skip(grid, set, layout))
)]
pub fn render_figure(
    grid: &PixelGrid,
    set: &GrayscaleSet,
    caption: &str,
    layout: &MontageLayout,
) -> Result<Figure, MontageError> {
    let (width, height) = grid.dimensions();

    let mut panels = Vec::with_capacity(4);
    panels.push(Panel::from_rgb8("RGB", width, height, grid.to_rgb8())?);
    for (method, map) in set.maps() {
        panels.push(Panel::from_luma8(method.label(), width, height, &map.to_luma8())?);
    }

    compose(caption, &panels, layout)
}
