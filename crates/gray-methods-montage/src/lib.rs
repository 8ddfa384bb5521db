//! Labeled panel-row composition.
//!
//! Takes a set of equally sized RGB panels, lays them out in a single row
//! with a title above each panel and an optional figure caption, and writes
//! the composed figure as a PNG. This is the headless stand-in for an
//! interactive plot window: one file, no display backend.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod font;

/// Errors produced while composing or writing a figure.
#[derive(Debug, Error)]
pub enum MontageError {
    #[error("montage needs at least one panel")]
    NoPanels,

    #[error("panel '{title}' is {got_width}x{got_height}, expected {width}x{height}")]
    PanelSizeMismatch {
        title: String,
        got_width: usize,
        got_height: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid panel buffer length for '{title}' (expected {expected} bytes, got {got})")]
    InvalidPanelBuffer {
        title: String,
        expected: usize,
        got: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("png encoding failed: {0}")]
    Png(#[from] png::EncodingError),
}

/// A single image panel: interleaved RGB8 pixels plus a title.
#[derive(Clone, Debug)]
pub struct Panel {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub rgb: Vec<u8>, // len = w*h*3
}

impl Panel {
    /// Build a panel from an interleaved RGB8 buffer.
    pub fn from_rgb8(
        title: impl Into<String>,
        width: usize,
        height: usize,
        rgb: Vec<u8>,
    ) -> Result<Self, MontageError> {
        let title = title.into();
        let expected = width * height * 3;
        if rgb.len() != expected {
            return Err(MontageError::InvalidPanelBuffer {
                title,
                expected,
                got: rgb.len(),
            });
        }
        Ok(Self {
            title,
            width,
            height,
            rgb,
        })
    }

    /// Build a panel from a single-plane 8-bit intensity buffer.
    pub fn from_luma8(
        title: impl Into<String>,
        width: usize,
        height: usize,
        luma: &[u8],
    ) -> Result<Self, MontageError> {
        let title = title.into();
        if luma.len() != width * height {
            return Err(MontageError::InvalidPanelBuffer {
                title,
                expected: width * height,
                got: luma.len(),
            });
        }
        let mut rgb = Vec::with_capacity(luma.len() * 3);
        for &v in luma {
            rgb.extend_from_slice(&[v, v, v]);
        }
        Ok(Self {
            title,
            width,
            height,
            rgb,
        })
    }
}

fn default_margin() -> usize {
    16
}
fn default_gutter() -> usize {
    12
}
fn default_title_strip() -> usize {
    24
}
fn default_caption_strip() -> usize {
    32
}
fn default_glyph_scale() -> usize {
    2
}
fn default_background() -> u8 {
    245
}
fn default_ink() -> u8 {
    20
}

/// Layout parameters for the composed figure, all in pixels.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MontageLayout {
    /// Outer margin around the whole figure.
    #[serde(default = "default_margin")]
    pub margin: usize,
    /// Horizontal gap between adjacent panels.
    #[serde(default = "default_gutter")]
    pub gutter: usize,
    /// Height reserved above each panel for its title.
    #[serde(default = "default_title_strip")]
    pub title_strip: usize,
    /// Height reserved at the top for the figure caption; 0 disables it.
    #[serde(default = "default_caption_strip")]
    pub caption_strip: usize,
    /// Integer scale applied to the 8x8 label glyphs.
    #[serde(default = "default_glyph_scale")]
    pub glyph_scale: usize,
    /// Background gray level.
    #[serde(default = "default_background")]
    pub background: u8,
    /// Text gray level.
    #[serde(default = "default_ink")]
    pub ink: u8,
}

impl Default for MontageLayout {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            gutter: default_gutter(),
            title_strip: default_title_strip(),
            caption_strip: default_caption_strip(),
            glyph_scale: default_glyph_scale(),
            background: default_background(),
            ink: default_ink(),
        }
    }
}

impl MontageLayout {
    /// Figure dimensions for `count` panels of `width` x `height` pixels.
    pub fn figure_size(&self, count: usize, width: usize, height: usize) -> (usize, usize) {
        let fw = 2 * self.margin + count * width + count.saturating_sub(1) * self.gutter;
        let fh = 2 * self.margin + self.caption_strip + self.title_strip + height;
        (fw, fh)
    }
}

/// A composed figure: one interleaved RGB8 buffer ready for encoding.
#[derive(Clone, Debug)]
pub struct Figure {
    pub width: usize,
    pub height: usize,
    pub rgb: Vec<u8>,
}

/// Lay the panels out in a single row under `caption`.
///
/// Every panel must have the same dimensions as the first one.
pub fn compose(
    caption: &str,
    panels: &[Panel],
    layout: &MontageLayout,
) -> Result<Figure, MontageError> {
    let Some(first) = panels.first() else {
        return Err(MontageError::NoPanels);
    };
    let (pw, ph) = (first.width, first.height);
    for panel in panels {
        if panel.width != pw || panel.height != ph {
            return Err(MontageError::PanelSizeMismatch {
                title: panel.title.clone(),
                got_width: panel.width,
                got_height: panel.height,
                width: pw,
                height: ph,
            });
        }
    }

    let (fw, fh) = layout.figure_size(panels.len(), pw, ph);
    let mut rgb = vec![layout.background; fw * fh * 3];

    if layout.caption_strip > 0 && !caption.is_empty() {
        let text_w = font::text_width(caption, layout.glyph_scale);
        let x = fw.saturating_sub(text_w) / 2;
        let y = layout.margin + centered(layout.caption_strip, layout.glyph_scale);
        font::draw_text(&mut rgb, fw, fh, (x, y), caption, layout.glyph_scale, layout.ink);
    }

    let titles_y = layout.margin + layout.caption_strip + centered(layout.title_strip, layout.glyph_scale);
    let panels_y = layout.margin + layout.caption_strip + layout.title_strip;

    for (i, panel) in panels.iter().enumerate() {
        let panel_x = layout.margin + i * (pw + layout.gutter);

        if layout.title_strip > 0 {
            let text_w = font::text_width(&panel.title, layout.glyph_scale);
            let x = panel_x + pw.saturating_sub(text_w) / 2;
            font::draw_text(
                &mut rgb,
                fw,
                fh,
                (x, titles_y),
                &panel.title,
                layout.glyph_scale,
                layout.ink,
            );
        }

        blit(&mut rgb, fw, (panel_x, panels_y), panel);
    }

    log::debug!("composed {}-panel figure ({fw}x{fh})", panels.len());
    Ok(Figure {
        width: fw,
        height: fh,
        rgb,
    })
}

/// Write the figure to `path` as an 8-bit RGB PNG.
pub fn write_png(path: impl AsRef<Path>, figure: &Figure) -> Result<(), MontageError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(
        BufWriter::new(file),
        figure.width as u32,
        figure.height as u32,
    );
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&figure.rgb)?;
    writer.finish()?;
    log::info!("wrote figure to {}", path.display());
    Ok(())
}

/// Vertical offset that centers an 8x8 glyph row inside a strip.
fn centered(strip: usize, scale: usize) -> usize {
    strip.saturating_sub(font::GLYPH_SIZE * scale) / 2
}

fn blit(frame: &mut [u8], frame_width: usize, origin: (usize, usize), panel: &Panel) {
    let row_bytes = panel.width * 3;
    for row in 0..panel.height {
        let src = row * row_bytes;
        let dst = ((origin.1 + row) * frame_width + origin.0) * 3;
        frame[dst..dst + row_bytes].copy_from_slice(&panel.rgb[src..src + row_bytes]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_panel(title: &str, width: usize, height: usize, value: u8) -> Panel {
        Panel::from_luma8(title, width, height, &vec![value; width * height]).expect("valid panel")
    }

    #[test]
    fn figure_dimensions_follow_the_layout() {
        let layout = MontageLayout::default();
        let panels = vec![
            flat_panel("A", 10, 8, 0),
            flat_panel("B", 10, 8, 128),
            flat_panel("C", 10, 8, 255),
        ];
        let figure = compose("caption", &panels, &layout).expect("compose");

        let (fw, fh) = layout.figure_size(3, 10, 8);
        assert_eq!((figure.width, figure.height), (fw, fh));
        assert_eq!(fw, 2 * 16 + 3 * 10 + 2 * 12);
        assert_eq!(fh, 2 * 16 + 32 + 24 + 8);
        assert_eq!(figure.rgb.len(), fw * fh * 3);
    }

    #[test]
    fn rejects_mismatched_panel_sizes() {
        let panels = vec![flat_panel("A", 10, 8, 0), flat_panel("B", 9, 8, 0)];
        let err = compose("", &panels, &MontageLayout::default()).unwrap_err();
        assert!(matches!(err, MontageError::PanelSizeMismatch { .. }));
    }

    #[test]
    fn rejects_empty_panel_list() {
        let err = compose("", &[], &MontageLayout::default()).unwrap_err();
        assert!(matches!(err, MontageError::NoPanels));
    }

    #[test]
    fn luma_panels_expand_to_gray_rgb() {
        let panel = flat_panel("gray", 2, 1, 42);
        assert_eq!(panel.rgb, vec![42, 42, 42, 42, 42, 42]);
    }

    #[test]
    fn rejects_wrong_buffer_length() {
        let err = Panel::from_rgb8("bad", 2, 2, vec![0u8; 10]).unwrap_err();
        assert!(matches!(
            err,
            MontageError::InvalidPanelBuffer {
                expected: 12,
                got: 10,
                ..
            }
        ));
    }

    #[test]
    fn panel_pixels_land_inside_the_figure() {
        let layout = MontageLayout::default();
        let panels = vec![flat_panel("left", 4, 4, 0), flat_panel("right", 4, 4, 200)];
        let figure = compose("", &panels, &layout).expect("compose");

        // Top-left pixel of the second panel.
        let x = layout.margin + 4 + layout.gutter;
        let y = layout.margin + layout.caption_strip + layout.title_strip;
        let idx = (y * figure.width + x) * 3;
        assert_eq!(&figure.rgb[idx..idx + 3], &[200, 200, 200]);

        // Margin stays background.
        assert_eq!(figure.rgb[0], layout.background);
    }

    #[test]
    fn titles_leave_ink_in_the_strip() {
        let layout = MontageLayout::default();
        let panels = vec![flat_panel("XX", 64, 8, 255)];
        let figure = compose("", &panels, &layout).expect("compose");

        let y0 = layout.margin + layout.caption_strip;
        let strip = &figure.rgb
            [(y0 * figure.width * 3)..((y0 + layout.title_strip) * figure.width * 3)];
        assert!(strip.iter().any(|&v| v == layout.ink));
    }

    #[test]
    fn writes_a_decodable_png() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("figure.png");

        let figure = compose(
            "check",
            &[flat_panel("only", 6, 5, 90)],
            &MontageLayout::default(),
        )
        .expect("compose");
        write_png(&path, &figure).expect("write png");

        let decoder =
            png::Decoder::new(std::io::BufReader::new(File::open(&path).expect("open png")));
        let reader = decoder.read_info().expect("read png header");
        let info = reader.info();
        assert_eq!(
            (info.width as usize, info.height as usize),
            (figure.width, figure.height)
        );
        assert_eq!(info.color_type, png::ColorType::Rgb);
    }
}
