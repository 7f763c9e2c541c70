//! Error types for pixel matrix operations.

use thiserror::Error;

/// Errors produced by matrix construction, transforms and the I/O boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Matrix is empty, has ragged rows, or its buffer does not match its dimensions.
    #[error("invalid matrix shape: {reason}")]
    InvalidMatrixShape {
        /// What was wrong with the shape.
        reason: String,
    },

    /// Pixel arity does not match what the operation needs.
    #[error("invalid channel arity: expected {expected} channel(s), found {found}")]
    InvalidChannelArity {
        /// Channels per pixel the operation requires.
        expected: usize,
        /// Channels per pixel actually present.
        found: usize,
    },

    /// Channel label outside {R, G, B}.
    #[error("invalid channel label: {0:?}")]
    InvalidChannelLabel(String),

    #[error("unknown pipeline module: {0}")]
    UnknownModule(String),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl Error {
    #[must_use]
    pub fn shape(reason: impl Into<String>) -> Self {
        Self::InvalidMatrixShape {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn arity(expected: usize, found: usize) -> Self {
        Self::InvalidChannelArity { expected, found }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
