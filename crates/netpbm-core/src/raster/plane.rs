//! Sample planes
//!
//! A [`Plane`] is a dense, row-major grid of 8-bit samples. Color rasters
//! keep three of them in an [`RgbPlanes`] bundle; gray rasters keep one.

use crate::error::{Error, Result};

/// A single-channel grid of `height` rows by `width` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Plane {
    /// Create a zero-filled plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0 and
    /// [`Error::AllocationFailed`] if the sample buffer cannot be reserved.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, 0)
    }

    /// Create a plane with every sample set to `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::AllocationFailed(usize::MAX))?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed(len))?;
        data.resize(len, value);

        Ok(Plane {
            width,
            height,
            data,
        })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if data.len() != width as usize * height as usize {
            return Err(Error::DimensionMismatch {
                expected: (width, height),
                actual: (data.len() as u32, 1),
            });
        }
        Ok(Plane {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a sample, or `None` outside the plane.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.data[self.offset(x, y)])
        } else {
            None
        }
    }

    /// Get a sample without a bounds check on the coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset falls outside the buffer.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[self.offset(x, y)]
    }

    /// Set a sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the plane.
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let offset = self.offset(x, y);
        self.data[offset] = value;
        Ok(())
    }

    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: u8) {
        let offset = self.offset(x, y);
        self.data[offset] = value;
    }

    /// One row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// All samples in row-major order.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Smallest and largest sample.
    pub fn min_max(&self) -> (u8, u8) {
        self.data
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Red, green and blue planes of identical shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbPlanes {
    pub red: Plane,
    pub green: Plane,
    pub blue: Plane,
}

impl RgbPlanes {
    /// Create three zero-filled planes.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(RgbPlanes {
            red: Plane::new(width, height)?,
            green: Plane::new(width, height)?,
            blue: Plane::new(width, height)?,
        })
    }

    /// Bundle three planes, checking they share a shape.
    pub fn from_planes(red: Plane, green: Plane, blue: Plane) -> Result<Self> {
        for other in [&green, &blue] {
            if other.width() != red.width() || other.height() != red.height() {
                return Err(Error::DimensionMismatch {
                    expected: (red.width(), red.height()),
                    actual: (other.width(), other.height()),
                });
            }
        }
        Ok(RgbPlanes { red, green, blue })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.red.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.red.height()
    }

    /// Get the (red, green, blue) triple at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        Some((
            self.red.get(x, y)?,
            self.green.get(x, y)?,
            self.blue.get(x, y)?,
        ))
    }

    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8) {
        (
            self.red.get_unchecked(x, y),
            self.green.get_unchecked(x, y),
            self.blue.get_unchecked(x, y),
        )
    }

    /// Set the (red, green, blue) triple at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.red.set(x, y, r)?;
        self.green.set(x, y, g)?;
        self.blue.set(x, y, b)
    }

    #[inline]
    pub fn set_rgb_unchecked(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        self.red.set_unchecked(x, y, r);
        self.green.set_unchecked(x, y, g);
        self.blue.set_unchecked(x, y, b);
    }

    /// Mutable access to the three planes, in red/green/blue order.
    pub fn planes_mut(&mut self) -> [&mut Plane; 3] {
        [&mut self.red, &mut self.green, &mut self.blue]
    }
}
