//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
///
/// Every variant is raised before any sample is read or written, so a
/// failed operation leaves its image untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// The operation needs a specific channel count.
    #[error("{op} requires {expected} channels, got {got}")]
    ChannelCount {
        /// Operation name
        op: &'static str,
        /// Required channel count
        expected: u32,
        /// Actual channel count
        got: u32,
    },

    /// A channel index does not exist in the image.
    #[error("channel {channel} out of range for image with {channels} channels")]
    InvalidChannel {
        /// Requested channel
        channel: u32,
        /// Channel count of the image
        channels: u32,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;

impl OpsError {
    pub(crate) fn channel_count(op: &'static str, expected: u32, got: u32) -> Self {
        Self::ChannelCount { op, expected, got }
    }
}

/// Fails with [`OpsError::ChannelCount`] unless `img` has `expected` channels.
pub(crate) fn ensure_channels(
    img: &planar_core::PlanarImage,
    op: &'static str,
    expected: u32,
) -> OpsResult<()> {
    if img.channels() == expected {
        Ok(())
    } else {
        Err(OpsError::channel_count(op, expected, img.channels()))
    }
}

/// Fails with [`OpsError::InvalidChannel`] unless `channel` exists in `img`.
pub(crate) fn ensure_channel(img: &planar_core::PlanarImage, channel: u32) -> OpsResult<()> {
    if channel < img.channels() {
        Ok(())
    } else {
        Err(OpsError::InvalidChannel {
            channel,
            channels: img.channels(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_core::PlanarImage;

    #[test]
    fn test_channel_count_message() {
        let err = OpsError::channel_count("rgb_to_hsv", 3, 4);
        assert_eq!(err.to_string(), "rgb_to_hsv requires 3 channels, got 4");
    }

    #[test]
    fn test_ensure_helpers() {
        let img = PlanarImage::new(2, 2, 3);
        assert!(ensure_channels(&img, "op", 3).is_ok());
        assert!(matches!(
            ensure_channels(&img, "op", 1),
            Err(OpsError::ChannelCount { expected: 1, got: 3, .. })
        ));
        assert!(ensure_channel(&img, 2).is_ok());
        assert_eq!(
            ensure_channel(&img, 3),
            Err(OpsError::InvalidChannel { channel: 3, channels: 3 })
        );
    }
}
