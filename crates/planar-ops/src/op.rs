//! In-place transforms as data.
//!
//! [`PixelOp`] names one in-place transform together with its parameters,
//! so a chain of adjustments can be stored, serialized and replayed:
//!
//! ```rust
//! use planar_core::PlanarImage;
//! use planar_ops::{apply_all, ChannelArgs, PixelOp};
//!
//! let mut img = PlanarImage::from_data(1, 1, 3, vec![0.8, 0.2, 0.2]).unwrap();
//! let ops = [
//!     PixelOp::RgbToHsv,
//!     PixelOp::Scale(ChannelArgs::new(1, 0.5)), // halve saturation
//!     PixelOp::HsvToRgb,
//! ];
//! apply_all(&mut img, &ops).unwrap();
//! assert!((img.get(0, 0, 0) - 0.8).abs() < 1e-5);
//! assert!((img.get(0, 0, 1) - 0.5).abs() < 1e-5);
//! ```
//!
//! With serde, ops use an internal `op` tag:
//!
//! ```json
//! [{ "op": "shift", "channel": 0, "value": 0.1 }, { "op": "clamp", "min": 0.0, "max": 1.0 }]
//! ```

use crate::adjust::{clamp_image_to, scale_image, shift_image, ChannelArgs, ValueRange};
use crate::error::{ensure_channel, ensure_channels, OpsResult};
use crate::hsv::{hsv_to_rgb, rgb_to_hsv};
use planar_core::PlanarImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One in-place transform and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PixelOp {
    /// Add a constant to one channel.
    Shift(ChannelArgs),
    /// Multiply one channel by a constant.
    Scale(ChannelArgs),
    /// Clamp every sample into a range.
    Clamp(ValueRange),
    /// RGB to HSV, 3 channels only.
    RgbToHsv,
    /// HSV to RGB, 3 channels only.
    HsvToRgb,
}

impl Default for PixelOp {
    fn default() -> Self {
        Self::Clamp(ValueRange::UNIT)
    }
}

impl PixelOp {
    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shift(_) => "shift",
            Self::Scale(_) => "scale",
            Self::Clamp(_) => "clamp",
            Self::RgbToHsv => "rgb_to_hsv",
            Self::HsvToRgb => "hsv_to_rgb",
        }
    }

    /// Checks this op's preconditions against `img` without touching it.
    ///
    /// # Errors
    ///
    /// Returns the error [`apply`](Self::apply) would return.
    pub fn validate(&self, img: &PlanarImage) -> OpsResult<()> {
        match self {
            Self::Shift(args) | Self::Scale(args) => ensure_channel(img, args.channel),
            Self::Clamp(range) => range.validate(),
            Self::RgbToHsv | Self::HsvToRgb => ensure_channels(img, self.name(), 3),
        }
    }

    /// Applies this op to `img` in place.
    ///
    /// # Errors
    ///
    /// Fails before modifying `img` if its preconditions do not hold.
    pub fn apply(&self, img: &mut PlanarImage) -> OpsResult<()> {
        match *self {
            Self::Shift(args) => shift_image(img, args),
            Self::Scale(args) => scale_image(img, args),
            Self::Clamp(range) => clamp_image_to(img, range),
            Self::RgbToHsv => rgb_to_hsv(img),
            Self::HsvToRgb => hsv_to_rgb(img),
        }
    }
}

/// Applies `ops` in order.
///
/// Every op is validated first, so either all of them run or the image is
/// left untouched. In-place ops never change the channel count, so each is
/// checked against the input image.
///
/// # Errors
///
/// Returns the first precondition failure.
pub fn apply_all(img: &mut PlanarImage, ops: &[PixelOp]) -> OpsResult<()> {
    for op in ops {
        op.validate(img)?;
    }
    debug!(count = ops.len(), "apply_all");
    for op in ops {
        op.apply(img)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_apply_matches_direct_calls() {
        let data: Vec<f32> = (0..12).map(|i| i as f32 / 12.0).collect();
        let mut via_op = PlanarImage::from_data(2, 2, 3, data.clone()).unwrap();
        let mut direct = via_op.clone();

        PixelOp::Shift(ChannelArgs::new(2, 0.3)).apply(&mut via_op).unwrap();
        shift_image(&mut direct, ChannelArgs::new(2, 0.3)).unwrap();
        assert_eq!(via_op, direct);

        PixelOp::Clamp(ValueRange::UNIT).apply(&mut via_op).unwrap();
        crate::adjust::clamp_image(&mut direct);
        assert_eq!(via_op, direct);
    }

    #[test]
    fn test_apply_all_is_all_or_nothing() {
        let mut img = PlanarImage::from_data(1, 1, 1, vec![0.5]).unwrap();
        let ops = [
            PixelOp::Shift(ChannelArgs::new(0, 0.25)),
            PixelOp::RgbToHsv,
        ];
        assert_eq!(
            apply_all(&mut img, &ops),
            Err(OpsError::ChannelCount {
                op: "rgb_to_hsv",
                expected: 3,
                got: 1,
            })
        );
        assert_eq!(img.get(0, 0, 0), 0.5);
    }

    #[test]
    fn test_apply_all_runs_in_order() {
        let mut img = PlanarImage::from_data(1, 1, 1, vec![0.5]).unwrap();
        let ops = [
            PixelOp::Scale(ChannelArgs::new(0, 4.0)),
            PixelOp::Clamp(ValueRange::UNIT),
            PixelOp::Shift(ChannelArgs::new(0, -0.5)),
        ];
        apply_all(&mut img, &ops).unwrap();
        assert_abs_diff_eq!(img.get(0, 0, 0), 0.5);
    }

    #[test]
    fn test_validate() {
        let img = PlanarImage::new(2, 2, 4);
        assert!(PixelOp::Shift(ChannelArgs::new(3, 1.0)).validate(&img).is_ok());
        assert!(PixelOp::Scale(ChannelArgs::new(4, 1.0)).validate(&img).is_err());
        assert!(PixelOp::HsvToRgb.validate(&img).is_err());
        assert!(
            PixelOp::Clamp(ValueRange { min: 2.0, max: 1.0 })
                .validate(&img)
                .is_err()
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let ops = vec![
            PixelOp::Shift(ChannelArgs::new(0, 0.1)),
            PixelOp::Scale(ChannelArgs::new(1, 2.0)),
            PixelOp::Clamp(ValueRange::UNIT),
            PixelOp::RgbToHsv,
            PixelOp::HsvToRgb,
        ];
        let json = serde_json::to_string(&ops).unwrap();
        let back: Vec<PixelOp> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ops);
    }

    #[test]
    fn test_deserialize_config() {
        let json = r#"[
            { "op": "shift", "channel": 0, "value": 0.1 },
            { "op": "clamp", "min": 0.0, "max": 0.5 },
            { "op": "rgb_to_hsv" }
        ]"#;
        let ops: Vec<PixelOp> = serde_json::from_str(json).unwrap();
        assert_eq!(
            ops,
            vec![
                PixelOp::Shift(ChannelArgs::new(0, 0.1)),
                PixelOp::Clamp(ValueRange { min: 0.0, max: 0.5 }),
                PixelOp::RgbToHsv,
            ]
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(PixelOp::default().name(), "clamp");
        assert_eq!(PixelOp::HsvToRgb.name(), "hsv_to_rgb");
    }
}
