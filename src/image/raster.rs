//! Owned color-index raster in row-major layout (stride == width).
//!
//! Every pixel holds a palette index in `0..num_colors`. The raster is
//! validated once on construction and treated as immutable afterwards.
use crate::error::{ChartError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    num_colors: usize,
    data: Vec<u16>,
}

impl Raster {
    /// Palette size of an 8-bit grayscale or indexed image.
    pub const DEFAULT_NUM_COLORS: usize = 256;
    /// Largest palette representable by the `u16` pixel storage.
    pub const MAX_NUM_COLORS: usize = u16::MAX as usize + 1;

    /// Validate and wrap a row-major buffer.
    pub fn new(width: usize, height: usize, num_colors: usize, data: Vec<u16>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ChartError::precondition(format!(
                "raster dimensions must be positive, got {width}x{height}"
            )));
        }
        if num_colors == 0 || num_colors > Self::MAX_NUM_COLORS {
            return Err(ChartError::precondition(format!(
                "palette size {num_colors} outside 1..={}",
                Self::MAX_NUM_COLORS
            )));
        }
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| ChartError::precondition("raster dimensions overflow"))?;
        if data.len() != expected {
            return Err(ChartError::precondition(format!(
                "raster buffer holds {} pixels, expected {width}x{height}={expected}",
                data.len()
            )));
        }
        if let Some(idx) = data.iter().position(|&v| v as usize >= num_colors) {
            return Err(ChartError::precondition(format!(
                "color {} at row {} col {} outside palette of {num_colors}",
                data[idx],
                idx / width,
                idx % width
            )));
        }
        Ok(Self {
            width,
            height,
            num_colors,
            data,
        })
    }

    /// Wrap an 8-bit grayscale buffer with the default 256-entry palette.
    pub fn from_gray_u8(width: usize, height: usize, data: &[u8]) -> Result<Self> {
        let data = data.iter().map(|&v| v as u16).collect();
        Self::new(width, height, Self::DEFAULT_NUM_COLORS, data)
    }

    /// Build a raster by evaluating `f(row, col)` for every pixel.
    pub fn from_fn<F>(width: usize, height: usize, num_colors: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> u16,
    {
        let mut data = Vec::with_capacity(width.saturating_mul(height));
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self::new(width, height, num_colors, data)
    }

    #[inline]
    pub fn num_colors(&self) -> usize {
        self.num_colors
    }

    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u16 {
        self.data[self.idx(row, col)]
    }

    pub fn data(&self) -> &[u16] {
        &self.data
    }
}

impl crate::image::traits::ImageView for Raster {
    type Pixel = u16;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width
    }
    #[inline]
    fn row(&self, y: usize) -> &[u16] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u16]> {
        Some(&self.data)
    }
}
