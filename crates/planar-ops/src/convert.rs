//! Out-of-place conversions: copy and RGB to grayscale.
//!
//! Both functions allocate a new image and never touch their input.
//!
//! # Example
//!
//! ```rust
//! use planar_core::PlanarImage;
//! use planar_ops::convert::{copy_image, rgb_to_grayscale};
//!
//! let rgb = PlanarImage::from_data(1, 1, 3, vec![1.0, 1.0, 1.0]).unwrap();
//! let gray = rgb_to_grayscale(&rgb).unwrap();
//! assert_eq!(gray.channels(), 1);
//! assert!((gray.get(0, 0, 0) - 1.0).abs() < 1e-6);
//!
//! let dup = copy_image(&rgb);
//! assert_eq!(dup, rgb);
//! ```

use crate::error::{ensure_channels, OpsResult};
use planar_core::{map_channels, map_pixels, PlanarImage};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Luma weights applied to R, G and B when reducing to one channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LumaWeights {
    /// Red weight
    pub r: f32,
    /// Green weight
    pub g: f32,
    /// Blue weight
    pub b: f32,
}

impl LumaWeights {
    /// ITU-R BT.601 weights (0.299, 0.587, 0.114).
    pub const BT601: Self = Self {
        r: 0.299,
        g: 0.587,
        b: 0.114,
    };

    /// ITU-R BT.709 weights (0.2126, 0.7152, 0.0722).
    pub const REC709: Self = Self {
        r: 0.2126,
        g: 0.7152,
        b: 0.0722,
    };

    /// Weighted sum of one RGB triple.
    #[inline]
    pub fn luma(&self, r: f32, g: f32, b: f32) -> f32 {
        r * self.r + g * self.g + b * self.b
    }
}

impl Default for LumaWeights {
    fn default() -> Self {
        Self::BT601
    }
}

/// Returns an independent copy of `img`, written sample by sample.
pub fn copy_image(img: &PlanarImage) -> PlanarImage {
    let (width, height, channels) = img.dimensions();
    debug!(width, height, channels, "copy_image");
    let mut copy = PlanarImage::new(width, height, channels);
    map_channels(img, &mut copy, |src, dst, x, y, c| {
        dst.set(x, y, c, src.get(x, y, c));
    });
    copy
}

/// Converts a 3-channel RGB image to a new 1-channel image with BT.601 luma
/// weights.
///
/// # Errors
///
/// Returns [`crate::OpsError::ChannelCount`] if `img` does not have exactly
/// 3 channels.
pub fn rgb_to_grayscale(img: &PlanarImage) -> OpsResult<PlanarImage> {
    rgb_to_grayscale_with(img, LumaWeights::BT601)
}

/// Converts a 3-channel RGB image to a new 1-channel image with custom
/// weights.
///
/// # Errors
///
/// Returns [`crate::OpsError::ChannelCount`] if `img` does not have exactly
/// 3 channels.
pub fn rgb_to_grayscale_with(img: &PlanarImage, weights: LumaWeights) -> OpsResult<PlanarImage> {
    ensure_channels(img, "rgb_to_grayscale", 3)?;
    debug!(
        width = img.width(),
        height = img.height(),
        ?weights,
        "rgb_to_grayscale"
    );

    let mut gray = PlanarImage::new(img.width(), img.height(), 1);
    map_pixels(img, &mut gray, |src, dst, x, y| {
        let v = weights.luma(src.get(x, y, 0), src.get(x, y, 1), src.get(x, y, 2));
        dst.set(x, y, 0, v);
    });
    Ok(gray)
}
