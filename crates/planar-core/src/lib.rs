//! # planar-core
//!
//! Planar image value, pixel addressing and whole-image traversal.
//!
//! - [`PlanarImage`] - Owned `f32` image stored one channel plane at a time
//! - [`Clamped`] - Result of clamping a coordinate into an image
//! - [`map_pixels`], [`map_channels`] - Visit every pixel or every sample
//! - [`Error`] - Shape and channel errors
//!
//! ## Addressing Rules
//!
//! Reads clamp, writes reject:
//!
//! ```rust
//! use planar_core::PlanarImage;
//!
//! let mut img = PlanarImage::from_data(2, 1, 1, vec![0.1, 0.9]).unwrap();
//! assert_eq!(img.get(-1, 0, 0), 0.1);
//! assert_eq!(img.get(2, 0, 0), 0.9);
//!
//! img.set(2, 0, 0, 0.5); // outside: dropped
//! assert_eq!(img.data(), &[0.1, 0.9]);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! planar-core (this crate)
//!    ^
//!    |
//!    +-- planar-ops (copy, grayscale, shift, scale, clamp, HSV)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod traverse;

pub use error::{Error, Result};
pub use image::{Clamped, PlanarImage, MAX_DIMENSION};
pub use traverse::{map_channels, map_channels_mut, map_pixels, map_pixels_mut};

/// Prelude module for convenient imports.
///
/// ```
/// use planar_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::{Clamped, PlanarImage, MAX_DIMENSION};
    pub use crate::traverse::{map_channels, map_channels_mut, map_pixels, map_pixels_mut};
}
