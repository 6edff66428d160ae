/// Canvas color of every synthetic chart.
pub const CANVAS: u8 = 255;
/// Color of the axis lines.
pub const AXIS_INK: u8 = 0;

/// Axis-aligned filled block; `bottom` and `right` are exclusive.
#[derive(Clone, Copy, Debug)]
pub struct Block {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
    pub color: u8,
}

impl Block {
    pub fn new(top: usize, left: usize, bottom: usize, right: usize, color: u8) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
            color,
        }
    }
}

/// Generates a white chart with an L-shaped pair of axes meeting at
/// `(axis_row, axis_col)`, then paints `blocks` on top.
///
/// The horizontal axis runs from `axis_col` to `width - 6`, the vertical
/// axis from row 5 down to `axis_row`.
pub fn bar_chart_u8(
    width: usize,
    height: usize,
    axis_row: usize,
    axis_col: usize,
    blocks: &[Block],
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(
        axis_row < height && axis_col + 6 < width,
        "axes must fit the image"
    );

    let mut img = vec![CANVAS; width * height];
    for x in axis_col..=width - 6 {
        img[axis_row * width + x] = AXIS_INK;
    }
    for y in 5..=axis_row {
        img[y * width + axis_col] = AXIS_INK;
    }
    for b in blocks {
        for y in b.top..b.bottom.min(height) {
            for x in b.left..b.right.min(width) {
                img[y * width + x] = b.color;
            }
        }
    }
    img
}

/// Paints a one-pixel-wide diagonal rising to the right, starting at
/// `(row, col)`.
pub fn rising_diagonal(
    img: &mut [u8],
    width: usize,
    row: usize,
    col: usize,
    len: usize,
    color: u8,
) {
    for i in 0..len {
        img[(row - i) * width + col + i] = color;
    }
}
