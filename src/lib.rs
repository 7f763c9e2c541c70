//! Geometric and color transforms over rectangular pixel matrices.
//!
//! The core is eight pure operations grouped as statistics
//! ([`stats::dimensions`], [`stats::mean_intensities`]), geometry
//! ([`geometry::reflect_vertical`], [`geometry::reflect_horizontal`],
//! [`geometry::rotate_clockwise_90`]) and color ([`color::filter_channels`],
//! [`color::to_grayscale`], [`color::to_monochrome`]). Each takes a matrix by
//! reference and returns a new value.
//!
//! Around the core, [`io`] decodes and encodes image files and [`config`] /
//! [`pipeline`] chain transforms from a TOML file.

pub mod color;
pub mod conditional_parallel;
pub mod config;
pub mod error;
pub mod geometry;
pub mod helpers;
pub mod io;
pub mod matrix;
pub mod modules;
pub mod pipeline;
pub mod pixels;
pub mod stats;

pub use color::{
    filter_channels, to_grayscale, to_monochrome, Channel, Channels, DEFAULT_THRESHOLD,
};
pub use error::{Error, Result};
pub use geometry::{reflect_horizontal, reflect_vertical, rotate_clockwise_90};
pub use matrix::{Matrix, PixelMatrix};
pub use pixels::{Luma, Rgb, SubPixel};
pub use stats::{dimensions, mean_intensities};
