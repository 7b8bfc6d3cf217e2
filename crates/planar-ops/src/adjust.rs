//! In-place intensity adjustments.
//!
//! - [`shift_image`] - Add a constant to one channel
//! - [`scale_image`] - Multiply one channel by a constant
//! - [`clamp_image`] / [`clamp_image_to`] - Clamp every sample into a range
//!
//! Shift and scale only touch the requested channel; other planes are left
//! bit-for-bit unchanged. Neither clamps its result, so follow with
//! [`clamp_image`] when values must stay in `[0, 1]`.
//!
//! # Example
//!
//! ```rust
//! use planar_core::PlanarImage;
//! use planar_ops::adjust::{clamp_image, shift_image, ChannelArgs};
//!
//! let mut img = PlanarImage::from_data(1, 1, 3, vec![0.5, 0.5, 0.5]).unwrap();
//! shift_image(&mut img, ChannelArgs::new(0, 0.75)).unwrap();
//! clamp_image(&mut img);
//! assert_eq!(img.data(), &[1.0, 0.5, 0.5]);
//! ```

use crate::error::{ensure_channel, OpsError, OpsResult};
use planar_core::{map_channels_mut, map_pixels_mut, PlanarImage};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Target channel and scalar for [`shift_image`] and [`scale_image`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelArgs {
    /// Channel to modify
    pub channel: u32,
    /// Amount to add or factor to multiply by
    pub value: f32,
}

impl ChannelArgs {
    /// Creates channel arguments.
    pub fn new(channel: u32, value: f32) -> Self {
        Self { channel, value }
    }
}

/// Inclusive value range used by [`clamp_image_to`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Lower bound
    pub min: f32,
    /// Upper bound
    pub max: f32,
}

impl ValueRange {
    /// The nominal color range `[0, 1]`.
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    /// Creates a range, rejecting `min > max` and NaN bounds.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] for an empty or NaN range.
    pub fn new(min: f32, max: f32) -> OpsResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Checks that the bounds form a non-empty range.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] for an empty or NaN range.
    pub fn validate(&self) -> OpsResult<()> {
        if self.min <= self.max {
            Ok(())
        } else {
            Err(OpsError::InvalidParameter(format!(
                "range min {} must not exceed max {}",
                self.min, self.max
            )))
        }
    }

    /// Clamps one value into the range.
    #[inline]
    pub fn apply(&self, v: f32) -> f32 {
        if v > self.max {
            self.max
        } else if v < self.min {
            self.min
        } else {
            v
        }
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Adds `args.value` to every sample of channel `args.channel`.
///
/// # Errors
///
/// Returns [`OpsError::InvalidChannel`] if the channel does not exist; the
/// image is not modified in that case.
pub fn shift_image(img: &mut PlanarImage, args: ChannelArgs) -> OpsResult<()> {
    ensure_channel(img, args.channel)?;
    debug!(channel = args.channel, value = args.value, "shift_image");

    let c = args.channel as i32;
    map_pixels_mut(img, |img, x, y| {
        let v = img.get(x, y, c);
        img.set(x, y, c, v + args.value);
    });
    Ok(())
}

/// Multiplies every sample of channel `args.channel` by `args.value`.
///
/// # Errors
///
/// Returns [`OpsError::InvalidChannel`] if the channel does not exist; the
/// image is not modified in that case.
pub fn scale_image(img: &mut PlanarImage, args: ChannelArgs) -> OpsResult<()> {
    ensure_channel(img, args.channel)?;
    debug!(channel = args.channel, value = args.value, "scale_image");

    let c = args.channel as i32;
    map_pixels_mut(img, |img, x, y| {
        let v = img.get(x, y, c);
        img.set(x, y, c, v * args.value);
    });
    Ok(())
}

/// Clamps every sample of every channel into `[0, 1]`.
pub fn clamp_image(img: &mut PlanarImage) {
    clamp_samples(img, ValueRange::UNIT);
}

/// Clamps every sample of every channel into `range`.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if `range.min > range.max`.
pub fn clamp_image_to(img: &mut PlanarImage, range: ValueRange) -> OpsResult<()> {
    range.validate()?;
    clamp_samples(img, range);
    Ok(())
}

fn clamp_samples(img: &mut PlanarImage, range: ValueRange) {
    debug!(min = range.min, max = range.max, "clamp_image");
    map_channels_mut(img, |img, x, y, c| {
        let v = img.get(x, y, c);
        img.set(x, y, c, range.apply(v));
    });
}
