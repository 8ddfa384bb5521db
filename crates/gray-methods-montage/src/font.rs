//! 8x8 bitmap glyph rendering for titles and captions.
//!
//! Glyphs come from the `font8x8` const tables and are scaled by integer
//! replication, so no font assets ship with the crate.

use font8x8::{UnicodeFonts, BASIC_FONTS};

pub(crate) const GLYPH_SIZE: usize = 8;

/// Width in pixels of `text` rendered at `scale`.
pub(crate) fn text_width(text: &str, scale: usize) -> usize {
    text.chars().count() * GLYPH_SIZE * scale
}

/// Draw `text` into an interleaved RGB8 frame, clipping at the borders.
///
/// Characters outside the basic table advance the pen without drawing.
pub(crate) fn draw_text(
    frame: &mut [u8],
    frame_width: usize,
    frame_height: usize,
    origin: (usize, usize),
    text: &str,
    scale: usize,
    ink: u8,
) {
    let mut pen_x = origin.0;
    for ch in text.chars() {
        if let Some(glyph) = BASIC_FONTS.get(ch) {
            draw_glyph(frame, frame_width, frame_height, (pen_x, origin.1), &glyph, scale, ink);
        }
        pen_x += GLYPH_SIZE * scale;
    }
}

fn draw_glyph(
    frame: &mut [u8],
    frame_width: usize,
    frame_height: usize,
    origin: (usize, usize),
    glyph: &[u8; GLYPH_SIZE],
    scale: usize,
    ink: u8,
) {
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..GLYPH_SIZE {
            if bits & (1 << col) == 0 {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    let x = origin.0 + col * scale + dx;
                    let y = origin.1 + row * scale + dy;
                    if x >= frame_width || y >= frame_height {
                        continue;
                    }
                    let idx = (y * frame_width + x) * 3;
                    frame[idx] = ink;
                    frame[idx + 1] = ink;
                    frame[idx + 2] = ink;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_width_counts_characters() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("RGB", 2), 3 * 16);
        assert_eq!(text_width("Average", 1), 7 * 8);
    }

    #[test]
    fn drawing_stays_inside_the_frame() {
        let mut frame = vec![0u8; 16 * 16 * 3];
        // Origin close to the edge: must clip, not panic.
        draw_text(&mut frame, 16, 16, (12, 12), "MM", 2, 255);
        assert!(frame.iter().any(|&v| v == 255));
    }

    #[test]
    fn space_leaves_no_ink() {
        let mut frame = vec![7u8; 32 * 16 * 3];
        draw_text(&mut frame, 32, 16, (0, 0), " ", 1, 200);
        assert!(frame.iter().all(|&v| v == 7));
    }
}
