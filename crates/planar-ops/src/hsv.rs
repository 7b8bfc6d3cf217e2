//! RGB <-> HSV conversion.
//!
//! Both directions work in place on 3-channel images: after [`rgb_to_hsv`]
//! planes 0, 1, 2 hold H, S, V; [`hsv_to_rgb`] turns them back into R, G, B.
//!
//! Hue is normalized to `[0, 1)` (a full turn is 1.0, not 360).
//!
//! # Degenerate Pixels
//!
//! - `V == 0` gives `S = 0`.
//! - Zero chroma (achromatic pixels, `R == G == B`) gives `H = 0`. The hue of
//!   a gray pixel is meaningless, so a round trip only restores it through
//!   `S = 0`.
//!
//! # Hue Outside `[0, 1)`
//!
//! [`hsv_to_rgb_pixel`] does not wrap or clamp hue. Any scaled hue that is not
//! in one of the first five sectors (including negative hue and hue >= 1)
//! falls into the last sector, magenta to red. Normalize hue first if the
//! source may produce such values.
//!
//! # Example
//!
//! ```rust
//! use planar_ops::hsv::{hsv_to_rgb_pixel, rgb_to_hsv_pixel};
//!
//! let hsv = rgb_to_hsv_pixel([1.0, 0.0, 0.0]);
//! assert_eq!(hsv, [0.0, 1.0, 1.0]);
//! assert_eq!(hsv_to_rgb_pixel(hsv), [1.0, 0.0, 0.0]);
//! ```

use crate::error::{ensure_channels, OpsResult};
use planar_core::{map_pixels_mut, PlanarImage};
use tracing::{debug, warn};

#[inline]
fn max3(a: f32, b: f32, c: f32) -> f32 {
    if a > b {
        if a > c { a } else { c }
    } else if b > c {
        b
    } else {
        c
    }
}

#[inline]
fn min3(a: f32, b: f32, c: f32) -> f32 {
    if a < b {
        if a < c { a } else { c }
    } else if b < c {
        b
    } else {
        c
    }
}

/// Converts one RGB triple to `[H, S, V]`.
///
/// Inputs need not be in `[0, 1]`. When several channels share the maximum,
/// red wins over green and green over blue when picking the hue formula.
#[inline]
pub fn rgb_to_hsv_pixel([r, g, b]: [f32; 3]) -> [f32; 3] {
    let v = max3(r, g, b);
    let chroma = v - min3(r, g, b);
    let s = if v == 0.0 { 0.0 } else { chroma / v };

    let h = if chroma == 0.0 {
        0.0
    } else if v == r {
        (g - b) / chroma
    } else if v == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    let h = if h < 0.0 {
        // A tiny negative raw hue rounds up to exactly 1.0; that is hue 0.
        let wrapped = h / 6.0 + 1.0;
        if wrapped >= 1.0 { 0.0 } else { wrapped }
    } else {
        h / 6.0
    };
    [h, s, v]
}

/// Converts one `[H, S, V]` triple back to RGB.
///
/// See the module docs for hue outside `[0, 1)`.
#[inline]
pub fn hsv_to_rgb_pixel([h, s, v]: [f32; 3]) -> [f32; 3] {
    let c = v * s;
    let sector = h * 360.0 / 60.0;
    // `%` keeps the sign of the dividend, like C's fmod.
    let x = c * (1.0 - ((sector % 2.0) - 1.0).abs());

    let (r, g, b) = if (0.0..1.0).contains(&sector) {
        (c, x, 0.0)
    } else if (1.0..2.0).contains(&sector) {
        (x, c, 0.0)
    } else if (2.0..3.0).contains(&sector) {
        (0.0, c, x)
    } else if (3.0..4.0).contains(&sector) {
        (0.0, x, c)
    } else if (4.0..5.0).contains(&sector) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = v - c;
    [r + m, g + m, b + m]
}

#[inline]
fn read3(img: &PlanarImage, x: i32, y: i32) -> [f32; 3] {
    [img.get(x, y, 0), img.get(x, y, 1), img.get(x, y, 2)]
}

#[inline]
fn write3(img: &mut PlanarImage, x: i32, y: i32, px: [f32; 3]) {
    for (c, v) in px.into_iter().enumerate() {
        img.set(x, y, c as i32, v);
    }
}

/// Converts a 3-channel RGB image to HSV in place.
///
/// # Errors
///
/// Returns [`crate::OpsError::ChannelCount`] unless the image has exactly 3
/// channels. Nothing is modified on error.
pub fn rgb_to_hsv(img: &mut PlanarImage) -> OpsResult<()> {
    ensure_channels(img, "rgb_to_hsv", 3)?;
    debug!(width = img.width(), height = img.height(), "rgb_to_hsv");

    map_pixels_mut(img, |img, x, y| {
        let hsv = rgb_to_hsv_pixel(read3(img, x, y));
        write3(img, x, y, hsv);
    });
    Ok(())
}

/// Converts a 3-channel HSV image back to RGB in place.
///
/// # Errors
///
/// Returns [`crate::OpsError::ChannelCount`] unless the image has exactly 3
/// channels. Nothing is modified on error.
pub fn hsv_to_rgb(img: &mut PlanarImage) -> OpsResult<()> {
    ensure_channels(img, "hsv_to_rgb", 3)?;
    debug!(width = img.width(), height = img.height(), "hsv_to_rgb");

    let mut unnormalized = 0usize;
    map_pixels_mut(img, |img, x, y| {
        let hsv = read3(img, x, y);
        if !(0.0..1.0).contains(&hsv[0]) {
            unnormalized += 1;
        }
        write3(img, x, y, hsv_to_rgb_pixel(hsv));
    });
    if unnormalized > 0 {
        warn!(pixels = unnormalized, "hsv_to_rgb: hue outside [0, 1)");
    }
    Ok(())
}
