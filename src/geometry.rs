//! Reflections and rotation.
//!
//! Every transform computes, for each destination pixel, the source pixel it
//! copies from, so each runs as a single pass over the output buffer.

use crate::matrix::{Matrix, PixelMatrix};

/// Reverses row order.
pub fn reflect_vertical<P: Copy + Send + Sync>(matrix: &Matrix<P>) -> Matrix<P> {
    let (height, width) = (matrix.height(), matrix.width());
    matrix.remap(height, width, |row, col| (height - 1 - row, col))
}

/// Reverses pixel order inside every row.
pub fn reflect_horizontal<P: Copy + Send + Sync>(matrix: &Matrix<P>) -> Matrix<P> {
    let (height, width) = (matrix.height(), matrix.width());
    matrix.remap(height, width, |row, col| (row, width - 1 - col))
}

/// Rotates 90 degrees clockwise: transpose, then reverse each row.
///
/// An `R x C` input gives a `C x R` output whose row `i` is input column `i`
/// read bottom to top.
pub fn rotate_clockwise_90<P: Copy + Send + Sync>(matrix: &Matrix<P>) -> Matrix<P> {
    let height = matrix.height();
    matrix.remap(matrix.width(), height, |row, col| (height - 1 - col, row))
}

impl PixelMatrix {
    pub fn reflect_vertical(&self) -> PixelMatrix {
        match self {
            PixelMatrix::Rgb(m) => PixelMatrix::Rgb(reflect_vertical(m)),
            PixelMatrix::Luma(m) => PixelMatrix::Luma(reflect_vertical(m)),
        }
    }

    pub fn reflect_horizontal(&self) -> PixelMatrix {
        match self {
            PixelMatrix::Rgb(m) => PixelMatrix::Rgb(reflect_horizontal(m)),
            PixelMatrix::Luma(m) => PixelMatrix::Luma(reflect_horizontal(m)),
        }
    }

    pub fn rotate_clockwise_90(&self) -> PixelMatrix {
        match self {
            PixelMatrix::Rgb(m) => PixelMatrix::Rgb(rotate_clockwise_90(m)),
            PixelMatrix::Luma(m) => PixelMatrix::Luma(rotate_clockwise_90(m)),
        }
    }
}
