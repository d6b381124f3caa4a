//! Container encodings
//!
//! A netpbm container is identified by a two-character signature that
//! fixes both the sample layout (ASCII tokens or raw bytes) and the
//! channel mode (three color planes or one gray plane).
//!
//! | Signature | Data   | Channels |
//! |-----------|--------|----------|
//! | `P2`      | ASCII  | gray     |
//! | `P3`      | ASCII  | color    |
//! | `P5`      | binary | gray     |
//! | `P6`      | binary | color    |

use std::fmt;

/// How samples are laid out after the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataMode {
    /// Whitespace-separated decimal tokens
    Ascii,
    /// One raw byte per sample
    Binary,
}

/// Which planes a raster carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelMode {
    /// Red, green and blue planes
    Color,
    /// A single gray plane
    Gray,
}

impl ChannelMode {
    /// Number of samples stored per pixel.
    pub fn samples_per_pixel(self) -> usize {
        match self {
            ChannelMode::Color => 3,
            ChannelMode::Gray => 1,
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelMode::Color => write!(f, "color"),
            ChannelMode::Gray => write!(f, "gray"),
        }
    }
}

/// Container encoding, tagging both input and output rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// `P2`
    AsciiGray,
    /// `P3`
    AsciiColor,
    /// `P5`
    BinaryGray,
    /// `P6`
    BinaryColor,
}

impl Encoding {
    /// Build an encoding from its data and channel modes.
    pub fn from_parts(data: DataMode, channels: ChannelMode) -> Self {
        match (data, channels) {
            (DataMode::Ascii, ChannelMode::Gray) => Encoding::AsciiGray,
            (DataMode::Ascii, ChannelMode::Color) => Encoding::AsciiColor,
            (DataMode::Binary, ChannelMode::Gray) => Encoding::BinaryGray,
            (DataMode::Binary, ChannelMode::Color) => Encoding::BinaryColor,
        }
    }

    /// Parse a signature token such as `"P6"`.
    ///
    /// Returns `None` for anything other than `P2`, `P3`, `P5` or `P6`.
    pub fn from_signature(sig: &str) -> Option<Self> {
        match sig {
            "P2" => Some(Encoding::AsciiGray),
            "P3" => Some(Encoding::AsciiColor),
            "P5" => Some(Encoding::BinaryGray),
            "P6" => Some(Encoding::BinaryColor),
            _ => None,
        }
    }

    /// The signature written on the first header line.
    pub fn signature(self) -> &'static str {
        match self {
            Encoding::AsciiGray => "P2",
            Encoding::AsciiColor => "P3",
            Encoding::BinaryGray => "P5",
            Encoding::BinaryColor => "P6",
        }
    }

    /// Sample layout of this encoding.
    pub fn data_mode(self) -> DataMode {
        match self {
            Encoding::AsciiGray | Encoding::AsciiColor => DataMode::Ascii,
            Encoding::BinaryGray | Encoding::BinaryColor => DataMode::Binary,
        }
    }

    /// Channel mode of this encoding.
    pub fn channel_mode(self) -> ChannelMode {
        match self {
            Encoding::AsciiGray | Encoding::BinaryGray => ChannelMode::Gray,
            Encoding::AsciiColor | Encoding::BinaryColor => ChannelMode::Color,
        }
    }

    /// Whether this encoding is accepted as decoder input.
    ///
    /// Only color containers (`P3`, `P6`) are read.
    pub fn is_readable(self) -> bool {
        self.channel_mode() == ChannelMode::Color
    }

    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self.channel_mode() {
            ChannelMode::Color => "ppm",
            ChannelMode::Gray => "pgm",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.signature())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_roundtrip() {
        for enc in [
            Encoding::AsciiGray,
            Encoding::AsciiColor,
            Encoding::BinaryGray,
            Encoding::BinaryColor,
        ] {
            assert_eq!(Encoding::from_signature(enc.signature()), Some(enc));
        }
    }

    #[test]
    fn test_unknown_signature() {
        assert_eq!(Encoding::from_signature("P1"), None);
        assert_eq!(Encoding::from_signature("P4"), None);
        assert_eq!(Encoding::from_signature("P7"), None);
        assert_eq!(Encoding::from_signature("p6"), None);
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(
            Encoding::from_parts(DataMode::Ascii, ChannelMode::Gray).signature(),
            "P2"
        );
        assert_eq!(
            Encoding::from_parts(DataMode::Binary, ChannelMode::Color).signature(),
            "P6"
        );
    }

    #[test]
    fn test_readable_and_extension() {
        assert!(Encoding::AsciiColor.is_readable());
        assert!(Encoding::BinaryColor.is_readable());
        assert!(!Encoding::AsciiGray.is_readable());
        assert!(!Encoding::BinaryGray.is_readable());
        assert_eq!(Encoding::BinaryGray.extension(), "pgm");
        assert_eq!(Encoding::AsciiColor.extension(), "ppm");
    }
}
