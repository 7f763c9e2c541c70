//! Rectangular pixel containers.
//!
//! `Matrix<P>` stores pixels row-major in a flat buffer. Its fields are
//! private and every constructor validates the shape, so a `Matrix` in hand
//! is always non-empty and rectangular. Transforms never mutate a matrix,
//! they build a new one.

use crate::conditional_parallel::prelude::*;
use crate::error::{Error, Result};
use crate::helpers::{flatten, unflatten};
use crate::pixels::{Luma, Rgb, SubPixel, CHANNELS_PER_PIXEL};

fn pixel_count(height: usize, width: usize) -> Result<usize> {
    height
        .checked_mul(width)
        .ok_or_else(|| Error::shape(format!("{height}x{width} overflows the pixel count")))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<P> {
    data: Vec<P>,
    height: usize,
    width: usize,
}

impl<P> Matrix<P> {
    /// Wraps a row-major buffer of `height * width` pixels.
    pub fn new(data: Vec<P>, height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::shape(format!("{height}x{width} matrix has no pixels")));
        }
        let len = pixel_count(height, width)?;
        if data.len() != len {
            return Err(Error::shape(format!(
                "buffer holds {} pixels, {height}x{width} needs {len}",
                data.len()
            )));
        }
        Ok(Matrix { data, height, width })
    }

    /// Builds a matrix from nested rows, rejecting empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<P>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(Error::shape(format!(
                "row {i} has {} pixels, row 0 has {width}",
                row.len()
            )));
        }
        let data = rows.into_iter().flatten().collect();
        Matrix::new(data, height, width)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&P> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data.get(flatten(row, col, self.width))
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, P> {
        self.data.chunks_exact(self.width)
    }

    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<P> {
        self.data
    }
}

impl<P: Clone> Matrix<P> {
    pub fn to_rows(&self) -> Vec<Vec<P>> {
        self.rows().map(<[P]>::to_vec).collect()
    }
}

impl<P: Copy + Send + Sync> Matrix<P> {
    /// Builds a `height x width` matrix by evaluating `f(row, col)` per pixel.
    pub fn from_fn<F>(height: usize, width: usize, f: F) -> Result<Self>
    where
        F: Fn(usize, usize) -> P + Sync + Send,
    {
        let data = (0..pixel_count(height, width)?)
            .into_par_iter()
            .map(|idx| {
                let (row, col) = unflatten(idx, width);
                f(row, col)
            })
            .collect();
        Matrix::new(data, height, width)
    }

    /// Builds a `height x width` matrix where destination `(row, col)` is
    /// copied from the source position returned by `source(row, col)`.
    pub(crate) fn remap<F>(&self, height: usize, width: usize, source: F) -> Self
    where
        F: Fn(usize, usize) -> (usize, usize) + Sync + Send,
    {
        let data = (0..height * width)
            .into_par_iter()
            .map(|idx| {
                let (row, col) = unflatten(idx, width);
                let (src_row, src_col) = source(row, col);
                self.data[flatten(src_row, src_col, self.width)]
            })
            .collect();
        Matrix { data, height, width }
    }

    /// Applies `f` to every pixel, keeping the shape.
    pub fn map<Q, F>(&self, f: F) -> Matrix<Q>
    where
        Q: Send,
        F: Fn(P) -> Q + Sync + Send,
    {
        let data = self.data.par_iter().map(|p| f(*p)).collect();
        Matrix {
            data,
            height: self.height,
            width: self.width,
        }
    }
}

/// A pixel matrix of either RGB or single-channel pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum PixelMatrix {
    Rgb(Matrix<Rgb>),
    Luma(Matrix<Luma>),
}

impl PixelMatrix {
    /// Builds a matrix from untyped rows of pixels of channel values.
    ///
    /// Shape is checked first, then every pixel must have the same arity,
    /// either 3 (RGB) or 1 (single channel).
    pub fn from_nested(rows: Vec<Vec<Vec<SubPixel>>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(Error::shape(format!("{height}x{width} matrix has no pixels")));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(Error::shape(format!(
                "row {i} has {} pixels, row 0 has {width}",
                row.len()
            )));
        }

        let arity = rows[0][0].len();
        if arity != CHANNELS_PER_PIXEL && arity != 1 {
            return Err(Error::arity(CHANNELS_PER_PIXEL, arity));
        }
        if let Some(pixel) = rows.iter().flatten().find(|pixel| pixel.len() != arity) {
            return Err(Error::arity(arity, pixel.len()));
        }

        let pixels = rows.into_iter().flatten();
        if arity == 1 {
            let data = pixels.map(|pixel| pixel[0]).collect();
            Ok(PixelMatrix::Luma(Matrix::new(data, height, width)?))
        } else {
            let data = pixels.map(|pixel| [pixel[0], pixel[1], pixel[2]]).collect();
            Ok(PixelMatrix::Rgb(Matrix::new(data, height, width)?))
        }
    }

    /// Channels per pixel: 3 for RGB, 1 for single channel.
    pub fn channels(&self) -> usize {
        match self {
            PixelMatrix::Rgb(_) => CHANNELS_PER_PIXEL,
            PixelMatrix::Luma(_) => 1,
        }
    }

    pub fn height(&self) -> usize {
        match self {
            PixelMatrix::Rgb(m) => m.height(),
            PixelMatrix::Luma(m) => m.height(),
        }
    }

    pub fn width(&self) -> usize {
        match self {
            PixelMatrix::Rgb(m) => m.width(),
            PixelMatrix::Luma(m) => m.width(),
        }
    }

    /// Borrows the RGB matrix, failing with `InvalidChannelArity` otherwise.
    pub fn as_rgb(&self) -> Result<&Matrix<Rgb>> {
        match self {
            PixelMatrix::Rgb(m) => Ok(m),
            PixelMatrix::Luma(_) => Err(Error::arity(CHANNELS_PER_PIXEL, 1)),
        }
    }

    pub fn as_luma(&self) -> Result<&Matrix<Luma>> {
        match self {
            PixelMatrix::Luma(m) => Ok(m),
            PixelMatrix::Rgb(_) => Err(Error::arity(1, CHANNELS_PER_PIXEL)),
        }
    }
}

impl From<Matrix<Rgb>> for PixelMatrix {
    fn from(m: Matrix<Rgb>) -> Self {
        PixelMatrix::Rgb(m)
    }
}

impl From<Matrix<Luma>> for PixelMatrix {
    fn from(m: Matrix<Luma>) -> Self {
        PixelMatrix::Luma(m)
    }
}
