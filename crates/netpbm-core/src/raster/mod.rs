//! Raster - the decoded image container
//!
//! A [`Raster`] carries the header fields of a netpbm container
//! (encoding, comment block, dimensions, max-value text) together with
//! its sample planes.
//!
//! # Channel modes
//!
//! A raster is in exactly one mode at a time:
//!
//! - [`Channels::Color`] - red, green and blue planes (decoder output)
//! - [`Channels::Gray`] - one gray plane (grayscale/contrast output)
//!
//! # Ownership model
//!
//! Rasters are plain owned values. Filters take a `Raster` by value and
//! hand one back; neighbor-dependent filters build fresh planes and swap
//! them in with [`Raster::replace_rgb`], so the source planes are never
//! read and written at the same time.

mod plane;

pub use plane::{Plane, RgbPlanes};

use crate::encoding::{ChannelMode, Encoding};
use crate::error::{Error, Result};

/// The plane set held by a [`Raster`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Channels {
    /// Three same-shaped color planes
    Color(RgbPlanes),
    /// A single gray plane
    Gray(Plane),
}

impl Channels {
    /// The mode this plane set represents.
    pub fn mode(&self) -> ChannelMode {
        match self {
            Channels::Color(_) => ChannelMode::Color,
            Channels::Gray(_) => ChannelMode::Gray,
        }
    }
}

/// Decoded netpbm image.
///
/// # Examples
///
/// ```
/// use netpbm_core::{ChannelMode, Encoding, Raster};
///
/// let raster = Raster::new(Encoding::BinaryColor, 640, 480, "255").unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.channel_mode(), ChannelMode::Color);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    encoding: Encoding,
    comment: Option<String>,
    width: u32,
    height: u32,
    max_value: String,
    channels: Channels,
}

impl Raster {
    /// Create a raster with zeroed planes matching `encoding`'s channel mode.
    ///
    /// # Arguments
    ///
    /// * `encoding` - Container encoding the raster is tagged with
    /// * `width` - Columns (must be > 0)
    /// * `height` - Rows (must be > 0)
    /// * `max_value` - Max-value header text, carried through verbatim
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::AllocationFailed`] if the planes cannot be allocated. No
    /// raster is produced in either case.
    pub fn new(encoding: Encoding, width: u32, height: u32, max_value: &str) -> Result<Self> {
        let channels = match encoding.channel_mode() {
            ChannelMode::Color => Channels::Color(RgbPlanes::new(width, height)?),
            ChannelMode::Gray => Channels::Gray(Plane::new(width, height)?),
        };
        Ok(Raster {
            encoding,
            comment: None,
            width,
            height,
            max_value: max_value.to_string(),
            channels,
        })
    }

    /// Create a color raster from existing planes.
    pub fn from_rgb(encoding: Encoding, rgb: RgbPlanes, max_value: &str) -> Self {
        Raster {
            encoding: Encoding::from_parts(encoding.data_mode(), ChannelMode::Color),
            comment: None,
            width: rgb.width(),
            height: rgb.height(),
            max_value: max_value.to_string(),
            channels: Channels::Color(rgb),
        }
    }

    /// Create a gray raster from an existing plane.
    pub fn from_gray(encoding: Encoding, gray: Plane, max_value: &str) -> Self {
        Raster {
            encoding: Encoding::from_parts(encoding.data_mode(), ChannelMode::Gray),
            comment: None,
            width: gray.width(),
            height: gray.height(),
            max_value: max_value.to_string(),
            channels: Channels::Gray(gray),
        }
    }

    /// Attach a comment block (builder style).
    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.set_comment(comment);
        self
    }

    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Retag the raster. The channel mode of `encoding` must match the planes.
    pub fn set_encoding(&mut self, encoding: Encoding) -> Result<()> {
        if encoding.channel_mode() != self.channel_mode() {
            return Err(Error::UnsupportedChannels {
                expected: encoding.channel_mode(),
                actual: self.channel_mode(),
            });
        }
        self.encoding = encoding;
        Ok(())
    }

    /// The header comment block, including each line's `#` marker.
    #[inline]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Replace the comment block. An empty string clears it.
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment.filter(|c| !c.is_empty());
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Max-value header text.
    #[inline]
    pub fn max_value(&self) -> &str {
        &self.max_value
    }

    #[inline]
    pub fn channels(&self) -> &Channels {
        &self.channels
    }

    #[inline]
    pub fn channel_mode(&self) -> ChannelMode {
        self.channels.mode()
    }

    /// The color planes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannels`] for a gray raster.
    pub fn rgb(&self) -> Result<&RgbPlanes> {
        match &self.channels {
            Channels::Color(rgb) => Ok(rgb),
            Channels::Gray(_) => Err(self.expected(ChannelMode::Color)),
        }
    }

    pub fn rgb_mut(&mut self) -> Result<&mut RgbPlanes> {
        match &mut self.channels {
            Channels::Color(rgb) => Ok(rgb),
            Channels::Gray(_) => Err(Error::UnsupportedChannels {
                expected: ChannelMode::Color,
                actual: ChannelMode::Gray,
            }),
        }
    }

    /// The gray plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannels`] for a color raster.
    pub fn gray(&self) -> Result<&Plane> {
        match &self.channels {
            Channels::Gray(gray) => Ok(gray),
            Channels::Color(_) => Err(self.expected(ChannelMode::Gray)),
        }
    }

    pub fn gray_mut(&mut self) -> Result<&mut Plane> {
        match &mut self.channels {
            Channels::Gray(gray) => Ok(gray),
            Channels::Color(_) => Err(Error::UnsupportedChannels {
                expected: ChannelMode::Gray,
                actual: ChannelMode::Color,
            }),
        }
    }

    /// Swap in replacement color planes and return the previous ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the replacement has a
    /// different shape, or [`Error::UnsupportedChannels`] for a gray raster.
    pub fn replace_rgb(&mut self, rgb: RgbPlanes) -> Result<RgbPlanes> {
        self.check_shape(rgb.width(), rgb.height())?;
        let current = self.rgb_mut()?;
        Ok(std::mem::replace(current, rgb))
    }

    /// Switch the raster to gray mode, discarding any color planes.
    ///
    /// The encoding keeps its data mode and becomes the gray variant.
    pub fn set_gray(&mut self, gray: Plane) -> Result<()> {
        self.check_shape(gray.width(), gray.height())?;
        self.channels = Channels::Gray(gray);
        self.encoding = Encoding::from_parts(self.encoding.data_mode(), ChannelMode::Gray);
        Ok(())
    }

    /// Consume the raster, yielding its planes.
    pub fn into_channels(self) -> Channels {
        self.channels
    }

    fn check_shape(&self, width: u32, height: u32) -> Result<()> {
        if width != self.width || height != self.height {
            return Err(Error::DimensionMismatch {
                expected: (self.width, self.height),
                actual: (width, height),
            });
        }
        Ok(())
    }

    fn expected(&self, mode: ChannelMode) -> Error {
        Error::UnsupportedChannels {
            expected: mode,
            actual: self.channel_mode(),
        }
    }
}
