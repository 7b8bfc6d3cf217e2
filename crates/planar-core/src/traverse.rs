//! Whole-image traversal.
//!
//! Two visiting orders are provided, each in an out-of-place form (read one
//! image, write another) and an in-place form (read and write the same
//! image):
//!
//! | Function | Visits | Order |
//! |---|---|---|
//! | [`map_pixels`] / [`map_pixels_mut`] | every `(x, y)` | `y` outer, `x` inner |
//! | [`map_channels`] / [`map_channels_mut`] | every `(x, y, c)` | `c`, then `y`, then `x` |
//!
//! Every coordinate of the source image is visited exactly once, in the
//! order above. Per-call parameters are captured by the closure.
//!
//! ```rust
//! use planar_core::{map_channels_mut, PlanarImage};
//!
//! let mut img = PlanarImage::new(2, 2, 3);
//! let offset = 0.5;
//! map_channels_mut(&mut img, |img, x, y, c| {
//!     let v = img.get(x, y, c);
//!     img.set(x, y, c, v + offset);
//! });
//! assert!(img.data().iter().all(|&v| v == 0.5));
//! ```
//!
//! Dimensions never exceed [`crate::MAX_DIMENSION`], so every coordinate
//! fits the `i32` values passed to the callbacks.
//!
//! The out-of-place forms iterate over the **source** shape. Writes that
//! fall outside the destination are dropped by [`PlanarImage::set`].

use crate::PlanarImage;

/// Calls `f(src, dst, x, y)` for every pixel of `src`, row by row.
pub fn map_pixels<F>(src: &PlanarImage, dst: &mut PlanarImage, mut f: F)
where
    F: FnMut(&PlanarImage, &mut PlanarImage, i32, i32),
{
    for y in 0..src.height() as i32 {
        for x in 0..src.width() as i32 {
            f(src, dst, x, y);
        }
    }
}

/// Calls `f(img, x, y)` for every pixel of `img`, row by row.
pub fn map_pixels_mut<F>(img: &mut PlanarImage, mut f: F)
where
    F: FnMut(&mut PlanarImage, i32, i32),
{
    let (width, height, _) = img.dimensions();
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            f(img, x, y);
        }
    }
}

/// Calls `f(src, dst, x, y, c)` for every sample of `src`, one plane at a
/// time.
pub fn map_channels<F>(src: &PlanarImage, dst: &mut PlanarImage, mut f: F)
where
    F: FnMut(&PlanarImage, &mut PlanarImage, i32, i32, i32),
{
    for c in 0..src.channels() as i32 {
        for y in 0..src.height() as i32 {
            for x in 0..src.width() as i32 {
                f(src, dst, x, y, c);
            }
        }
    }
}

/// Calls `f(img, x, y, c)` for every sample of `img`, one plane at a time.
pub fn map_channels_mut<F>(img: &mut PlanarImage, mut f: F)
where
    F: FnMut(&mut PlanarImage, i32, i32, i32),
{
    let (width, height, channels) = img.dimensions();
    for c in 0..channels as i32 {
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                f(img, x, y, c);
            }
        }
    }
}
