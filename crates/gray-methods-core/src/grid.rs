//! Flat floating-point pixel grids.
//!
//! Both grid types store their samples in a single row-major `Vec<f64>`.
//! `PixelGrid` interleaves the three channels (`len = w*h*3`), `GrayMap`
//! holds one intensity per pixel (`len = w*h`).

use thiserror::Error;

/// Errors produced when building grids from raw buffers.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid pixel buffer length (expected {expected} samples, got {got})")]
    InvalidBufferLength { expected: usize, got: usize },

    #[error("invalid grid dimensions (width={width}, height={height})")]
    InvalidDimensions { width: usize, height: usize },
}

/// One of the three color components of a pixel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Offset of this channel along the interleaved axis.
    #[inline]
    pub fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// H×W×3 grid of floating-point samples, interleaved row-major.
///
/// Samples are widened from 8-bit on construction so channel sums and
/// halvings never wrap at 255.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<f64>, // len = w*h*3
}

impl PixelGrid {
    /// Widen an interleaved 8-bit RGB buffer into a floating-point grid.
    pub fn from_rgb8(width: usize, height: usize, samples: &[u8]) -> Result<Self, GridError> {
        let expected = checked_len(width, height)?
            .checked_mul(3)
            .ok_or(GridError::InvalidDimensions { width, height })?;
        if samples.len() != expected {
            return Err(GridError::InvalidBufferLength {
                expected,
                got: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data: samples.iter().map(|&v| f64::from(v)).collect(),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Interleaved samples, row-major.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// The three samples of the pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [f64; 3] {
        let base = (y * self.width + x) * 3;
        [self.data[base], self.data[base + 1], self.data[base + 2]]
    }

    /// Select one channel plane.
    pub fn channel(&self, channel: Channel) -> GrayMap {
        let mut data = Vec::with_capacity(self.width * self.height);
        data.extend(self.data.iter().skip(channel.offset()).step_by(3));
        GrayMap {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Quantize back to interleaved 8-bit RGB, clamping to [0, 255].
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| v.clamp(0.0, 255.0).round() as u8)
            .collect()
    }
}

/// H×W grid of floating-point intensities.
#[derive(Clone, Debug, PartialEq)]
pub struct GrayMap {
    width: usize,
    height: usize,
    data: Vec<f64>, // len = w*h
}

impl GrayMap {
    /// Build a map from a prepared intensity buffer.
    pub fn new(width: usize, height: usize, data: Vec<f64>) -> Result<Self, GridError> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(GridError::InvalidBufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Intensity at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }

    /// Minimum and maximum intensity over the map.
    pub fn intensity_range(&self) -> (f64, f64) {
        self.data.iter().fold((f64::MAX, f64::MIN), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
    }

    /// Quantize to 8-bit by clamping to [0, 255] and rounding.
    ///
    /// The converters never leave that range for 8-bit-derived input, so
    /// this is lossless apart from the rounding itself.
    pub fn to_luma8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| v.clamp(0.0, 255.0).round() as u8)
            .collect()
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(GridError::InvalidDimensions { width, height })
}
