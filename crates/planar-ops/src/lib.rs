//! # planar-ops
//!
//! Per-pixel transforms for [`planar_core::PlanarImage`].
//!
//! # Modules
//!
//! - [`convert`] - Copy and RGB to grayscale (allocate a new image)
//! - [`adjust`] - Channel shift and scale, range clamp (in place)
//! - [`hsv`] - RGB <-> HSV (in place)
//! - [`op`] - In-place transforms as serializable data
//!
//! Every transform is a per-coordinate function driven by one of the
//! traversals in [`planar_core::traverse`].
//!
//! # Example
//!
//! ```rust
//! use planar_core::PlanarImage;
//! use planar_ops::{rgb_to_grayscale, rgb_to_hsv, shift_image, ChannelArgs};
//!
//! let mut img = PlanarImage::from_data(1, 1, 3, vec![1.0, 0.0, 0.0]).unwrap();
//! let gray = rgb_to_grayscale(&img)?;
//! assert_eq!(gray.channels(), 1);
//!
//! rgb_to_hsv(&mut img)?;
//! shift_image(&mut img, ChannelArgs::new(0, 1.0 / 3.0))?; // rotate hue to green
//! # Ok::<(), planar_ops::OpsError>(())
//! ```
//!
//! # Preconditions
//!
//! Grayscale and HSV conversions need exactly 3 channels; shift and scale
//! need an existing channel index. Violations return [`OpsError`] before
//! any sample is touched.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod adjust;
pub mod convert;
pub mod hsv;
pub mod op;

pub use adjust::{clamp_image, clamp_image_to, scale_image, shift_image, ChannelArgs, ValueRange};
pub use convert::{copy_image, rgb_to_grayscale, rgb_to_grayscale_with, LumaWeights};
pub use error::{OpsError, OpsResult};
pub use hsv::{hsv_to_rgb, hsv_to_rgb_pixel, rgb_to_hsv, rgb_to_hsv_pixel};
pub use op::{apply_all, PixelOp};
