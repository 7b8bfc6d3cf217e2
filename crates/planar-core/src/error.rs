//! Error types for planar-core operations.
//!
//! Only shape problems are errors here. Out-of-range pixel coordinates are
//! never an error: reads replicate the nearest edge sample and writes are
//! dropped (see [`crate::image::PlanarImage::get`] and
//! [`crate::image::PlanarImage::set`]).
//!
//! # Usage
//!
//! ```rust
//! use planar_core::{Error, PlanarImage};
//!
//! let err = PlanarImage::from_data(2, 2, 3, vec![0.0; 4]).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or validating a [`crate::PlanarImage`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width, height or channel count is zero, or the backing store has the
    /// wrong number of samples.
    #[error("invalid dimensions: {width}x{height}x{channels} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Requested channel count
        channels: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// A channel index does not address a channel of the image.
    #[error("channel {channel} out of range for image with {channels} channels")]
    ChannelOutOfRange {
        /// Requested channel index
        channel: u32,
        /// Channel count of the image
        channels: u32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(
        width: u32,
        height: u32,
        channels: u32,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            channels,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::ChannelOutOfRange`] error.
    #[inline]
    pub fn channel_out_of_range(channel: u32, channels: u32) -> Self {
        Self::ChannelOutOfRange { channel, channels }
    }
}
