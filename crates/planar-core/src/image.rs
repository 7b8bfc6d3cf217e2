//! Planar image buffer and pixel addressing.
//!
//! [`PlanarImage`] stores `f32` samples for a `width x height` image with an
//! arbitrary number of channels.
//!
//! # Memory Layout
//!
//! Samples are stored **planar**: every sample of channel 0 comes first,
//! then every sample of channel 1, and so on. Within a channel, rows are
//! stored top-to-bottom:
//!
//! ```text
//! Memory: [R R R ... R]  <- plane 0, row-major
//!         [G G G ... G]  <- plane 1, row-major
//!         [B B B ... B]  <- plane 2, row-major
//! ```
//!
//! so sample `(x, y, c)` lives at `c * w * h + y * w + x`. Code that computes
//! offsets by hand must use exactly this ordering; prefer
//! [`PlanarImage::offset`].
//!
//! # Addressing
//!
//! Coordinates are signed so callers can address neighbours past the edge
//! without special cases:
//!
//! - [`PlanarImage::get`] clamps each axis into range, so out-of-range reads
//!   return the nearest edge sample (edge-replicate padding).
//! - [`PlanarImage::set`] only writes when the coordinate was already in
//!   range. Out-of-range writes are dropped, never redirected to the edge.
//!
//! ```rust
//! use planar_core::PlanarImage;
//!
//! let mut img = PlanarImage::new(4, 3, 1);
//! img.set(0, 0, 0, 0.75);
//!
//! assert_eq!(img.get(-5, -1, 0), 0.75); // replicated from (0, 0)
//! assert!(!img.set(4, 0, 0, 1.0));      // dropped
//! ```
//!
//! Sample values are nominally in `[0, 1]` for color data, but nothing in
//! this module enforces that range.

use crate::{Error, Result};
use tracing::trace;

/// A coordinate after clamping into an image's bounds.
///
/// Returned by [`PlanarImage::clamp`]. `in_bounds` is `true` only when no
/// axis needed clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clamped {
    /// Clamped column
    pub x: u32,
    /// Clamped row
    pub y: u32,
    /// Clamped channel
    pub c: u32,
    /// `true` if the original coordinate was already inside the image
    pub in_bounds: bool,
}

/// Owned planar image with `f32` samples.
///
/// The backing store is exclusively owned; [`Clone`] duplicates it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarImage {
    width: u32,
    height: u32,
    channels: u32,
    data: Vec<f32>,
}

impl PlanarImage {
    /// Creates a new image with every sample set to zero.
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero or larger than [`MAX_DIMENSION`]. Use
    /// [`from_data`](Self::from_data) for fallible construction.
    ///
    /// # Example
    ///
    /// ```rust
    /// use planar_core::PlanarImage;
    ///
    /// let img = PlanarImage::new(640, 480, 3);
    /// assert_eq!(img.len(), 640 * 480 * 3);
    /// ```
    pub fn new(width: u32, height: u32, channels: u32) -> Self {
        if let Err(err) = check_dimensions(width, height, channels) {
            panic!("{err}");
        }
        let len = sample_count(width, height, channels);
        Self {
            width,
            height,
            channels,
            data: vec![0.0; len],
        }
    }

    /// Creates an image from existing planar sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if any dimension is zero or
    /// larger than [`MAX_DIMENSION`], or if
    /// `data.len() != width * height * channels`.
    pub fn from_data(width: u32, height: u32, channels: u32, data: Vec<f32>) -> Result<Self> {
        check_dimensions(width, height, channels)?;
        let expected = sample_count(width, height, channels);
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                channels,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of channels (planes).
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Returns `(width, height, channels)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.channels)
    }

    /// Total number of samples in the backing store.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the image holds no samples.
    ///
    /// Construction rejects zero dimensions, so this is `false` for every
    /// image built through [`new`](Self::new) or [`from_data`](Self::from_data).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw planar samples.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable raw planar samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the image and returns its backing store.
    #[inline]
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Returns the contiguous plane of channel `c`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelOutOfRange`] if `c >= channels`.
    pub fn channel_plane(&self, c: u32) -> Result<&[f32]> {
        if c >= self.channels {
            return Err(Error::channel_out_of_range(c, self.channels));
        }
        let plane = self.plane_len();
        let start = c as usize * plane;
        Ok(&self.data[start..start + plane])
    }

    #[inline]
    fn plane_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Clamps `(x, y, c)` into the image, axis by axis.
    ///
    /// Negative coordinates become 0 and coordinates at or past the extent
    /// become `extent - 1`.
    ///
    /// ```rust
    /// use planar_core::PlanarImage;
    ///
    /// let img = PlanarImage::new(4, 3, 2);
    /// let clamped = img.clamp(-1, 7, 1);
    /// assert_eq!((clamped.x, clamped.y, clamped.c), (0, 2, 1));
    /// assert!(!clamped.in_bounds);
    /// ```
    #[inline]
    pub fn clamp(&self, x: i32, y: i32, c: i32) -> Clamped {
        let (x, x_ok) = clamp_axis(x, self.width);
        let (y, y_ok) = clamp_axis(y, self.height);
        let (c, c_ok) = clamp_axis(c, self.channels);
        Clamped {
            x,
            y,
            c,
            in_bounds: x_ok && y_ok && c_ok,
        }
    }

    /// Flat offset of `(x, y, c)` in the backing store: `c*w*h + y*w + x`.
    ///
    /// No bounds checking is done; the caller must clamp or validate first.
    #[inline]
    pub fn offset(&self, x: u32, y: u32, c: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height && c < self.channels,
            "offset ({x}, {y}, {c}) out of bounds"
        );
        c as usize * self.plane_len() + y as usize * self.width as usize + x as usize
    }

    /// Reads the sample at `(x, y, c)`, replicating the nearest edge sample
    /// for out-of-range coordinates.
    #[inline]
    pub fn get(&self, x: i32, y: i32, c: i32) -> f32 {
        let p = self.clamp(x, y, c);
        self.data[self.offset(p.x, p.y, p.c)]
    }

    /// Writes `value` at `(x, y, c)` if the coordinate is inside the image.
    ///
    /// Out-of-range writes are dropped and the store is left untouched.
    /// Returns whether the write landed.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, c: i32, value: f32) -> bool {
        let p = self.clamp(x, y, c);
        if !p.in_bounds {
            trace!(x, y, c, "dropping out-of-bounds write");
            return false;
        }
        // In bounds, so the clamped coordinate is the original one.
        let idx = self.offset(p.x, p.y, p.c);
        self.data[idx] = value;
        true
    }
}

/// Largest width, height or channel count an image may have.
///
/// Every coordinate must be addressable by the signed `i32` coordinates of
/// [`PlanarImage::get`] and [`PlanarImage::set`].
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

fn check_dimensions(width: u32, height: u32, channels: u32) -> Result<()> {
    if width == 0 || height == 0 || channels == 0 {
        return Err(Error::invalid_dimensions(
            width,
            height,
            channels,
            "dimensions must be non-zero",
        ));
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION || channels > MAX_DIMENSION {
        return Err(Error::invalid_dimensions(
            width,
            height,
            channels,
            format!("dimensions must not exceed {MAX_DIMENSION}"),
        ));
    }
    Ok(())
}

#[inline]
fn sample_count(width: u32, height: u32, channels: u32) -> usize {
    width as usize * height as usize * channels as usize
}

#[inline]
fn clamp_axis(v: i32, extent: u32) -> (u32, bool) {
    if v < 0 {
        (0, false)
    } else if v as u32 >= extent {
        (extent - 1, false)
    } else {
        (v as u32, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(w: u32, h: u32, c: u32) -> PlanarImage {
        let data = (0..w * h * c).map(|i| i as f32).collect();
        PlanarImage::from_data(w, h, c, data).unwrap()
    }

    #[test]
    fn test_new_is_zeroed() {
        let img = PlanarImage::new(3, 2, 4);
        assert_eq!(img.dimensions(), (3, 2, 4));
        assert_eq!(img.len(), 24);
        assert!(img.data().iter().all(|&v| v == 0.0));
        assert!(!img.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_new_rejects_zero_width() {
        let _ = PlanarImage::new(0, 2, 1);
    }

    #[test]
    #[should_panic(expected = "must not exceed")]
    fn test_new_rejects_unaddressable_width() {
        let _ = PlanarImage::new(MAX_DIMENSION + 1, 1, 1);
    }

    #[test]
    fn test_from_data_rejects_unaddressable_dimensions() {
        for (w, h, c) in [
            (MAX_DIMENSION + 1, 1, 1),
            (1, u32::MAX, 1),
            (1, 1, MAX_DIMENSION + 1),
        ] {
            let err = PlanarImage::from_data(w, h, c, Vec::new()).unwrap_err();
            assert!(err.to_string().contains("must not exceed"), "{err}");
        }
    }

    #[test]
    fn test_from_data_validates_length() {
        let err = PlanarImage::from_data(2, 2, 3, vec![0.0; 11]).unwrap_err();
        assert!(err.to_string().contains("expected 12 samples, got 11"));

        let err = PlanarImage::from_data(2, 0, 3, Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_offset_is_planar() {
        let img = PlanarImage::new(5, 4, 3);
        assert_eq!(img.offset(0, 0, 0), 0);
        assert_eq!(img.offset(1, 0, 0), 1);
        assert_eq!(img.offset(0, 1, 0), 5);
        assert_eq!(img.offset(0, 0, 1), 20);
        assert_eq!(img.offset(4, 3, 2), 2 * 20 + 3 * 5 + 4);
    }

    #[test]
    fn test_clamp_in_range_is_identity() {
        let img = PlanarImage::new(4, 3, 2);
        for c in 0..2 {
            for y in 0..3 {
                for x in 0..4 {
                    let p = img.clamp(x, y, c);
                    assert_eq!((p.x as i32, p.y as i32, p.c as i32), (x, y, c));
                    assert!(p.in_bounds);
                }
            }
        }
    }

    #[test]
    fn test_clamp_each_axis() {
        let img = PlanarImage::new(4, 3, 2);
        assert_eq!(
            img.clamp(-3, 1, 0),
            Clamped { x: 0, y: 1, c: 0, in_bounds: false }
        );
        assert_eq!(
            img.clamp(2, 3, 1),
            Clamped { x: 2, y: 2, c: 1, in_bounds: false }
        );
        assert_eq!(
            img.clamp(1, 1, 9),
            Clamped { x: 1, y: 1, c: 1, in_bounds: false }
        );
        assert_eq!(
            img.clamp(i32::MIN, i32::MAX, -1),
            Clamped { x: 0, y: 2, c: 0, in_bounds: false }
        );
    }

    #[test]
    fn test_get_replicates_edges() {
        let img = ramp(4, 3, 2);
        for c in 0..2 {
            for y in 0..3 {
                assert_eq!(img.get(-1, y, c), img.get(0, y, c));
                assert_eq!(img.get(4, y, c), img.get(3, y, c));
            }
            for x in 0..4 {
                assert_eq!(img.get(x, -1, c), img.get(x, 0, c));
                assert_eq!(img.get(x, 3, c), img.get(x, 2, c));
            }
        }
        assert_eq!(img.get(1, 1, -1), img.get(1, 1, 0));
        assert_eq!(img.get(1, 1, 2), img.get(1, 1, 1));
        assert_eq!(img.get(100, 100, 100), img.get(3, 2, 1));
    }

    #[test]
    fn test_set_then_get() {
        let mut img = PlanarImage::new(3, 3, 2);
        assert!(img.set(2, 1, 1, 0.25));
        assert_eq!(img.get(2, 1, 1), 0.25);
        assert_eq!(img.data()[img.offset(2, 1, 1)], 0.25);
    }

    #[test]
    fn test_out_of_range_set_is_dropped() {
        let mut img = ramp(3, 2, 2);
        let before = img.clone();
        assert!(!img.set(-1, 0, 0, 99.0));
        assert!(!img.set(3, 0, 0, 99.0));
        assert!(!img.set(0, 2, 0, 99.0));
        assert!(!img.set(0, 0, 2, 99.0));
        assert_eq!(img, before);
    }

    #[test]
    fn test_channel_plane() {
        let img = ramp(2, 2, 3);
        assert_eq!(img.channel_plane(1).unwrap(), &[4.0, 5.0, 6.0, 7.0]);
        assert!(img.channel_plane(3).is_err());
    }

    #[test]
    fn test_clone_is_independent() {
        let img = ramp(2, 2, 1);
        let mut copy = img.clone();
        copy.set(0, 0, 0, -1.0);
        assert_eq!(img.get(0, 0, 0), 0.0);
        assert_eq!(copy.get(0, 0, 0), -1.0);
    }
}
