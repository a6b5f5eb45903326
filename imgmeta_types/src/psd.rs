//! Tags for the Photoshop (PSD) file header.
//!
//! A PSD file starts with a fixed 26-byte header describing the canvas. Its
//! fields are stored under the tags below.

/// A field of the PSD file header.
#[repr(i32)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum PsdHeaderTag {
    /// Number of channels, including alpha channels. Between 1 and 56.
    ChannelCount = 1,

    /// Canvas height, in pixels.
    ImageHeight = 2,

    /// Canvas width, in pixels.
    ImageWidth = 3,

    /// Bits per channel. One of 1, 8, 16, or 32.
    #[doc(alias = "depth")]
    BitsPerChannel = 4,

    /// The color mode, which [`ColorMode`] can describe.
    ColorMode = 5,
}

impl PsdHeaderTag {
    /// Every header tag, in the order the fields appear in the file.
    pub const ALL: [PsdHeaderTag; 5] = [
        PsdHeaderTag::ChannelCount,
        PsdHeaderTag::ImageHeight,
        PsdHeaderTag::ImageWidth,
        PsdHeaderTag::BitsPerChannel,
        PsdHeaderTag::ColorMode,
    ];

    /// The key this tag is stored under in a directory.
    ///
    /// ```
    /// use imgmeta_types::psd::PsdHeaderTag;
    ///
    /// assert_eq!(PsdHeaderTag::ImageWidth.id(), 3_i32);
    /// ```
    pub const fn id(self) -> i32 {
        self as i32
    }

    pub const fn name(self) -> &'static str {
        match self {
            PsdHeaderTag::ChannelCount => "Channel Count",
            PsdHeaderTag::ImageHeight => "Image Height",
            PsdHeaderTag::ImageWidth => "Image Width",
            PsdHeaderTag::BitsPerChannel => "Bits Per Channel",
            PsdHeaderTag::ColorMode => "Color Mode",
        }
    }
}

impl TryFrom<i32> for PsdHeaderTag {
    type Error = ();

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::ALL.into_iter().find(|t| t.id() == value).ok_or(())
    }
}

/// How a PSD file's channels should be interpreted.
#[repr(u16)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum ColorMode {
    Bitmap = 0,
    Grayscale = 1,
    Indexed = 2,
    Rgb = 3,
    Cmyk = 4,
    Multichannel = 7,
    Duotone = 8,
    Lab = 9,
}

impl ColorMode {
    pub const fn name(self) -> &'static str {
        match self {
            ColorMode::Bitmap => "Bitmap",
            ColorMode::Grayscale => "Grayscale",
            ColorMode::Indexed => "Indexed",
            ColorMode::Rgb => "RGB",
            ColorMode::Cmyk => "CMYK",
            ColorMode::Multichannel => "Multichannel",
            ColorMode::Duotone => "Duotone",
            ColorMode::Lab => "Lab",
        }
    }
}

impl TryFrom<u16> for ColorMode {
    type Error = ();

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Bitmap),
            1 => Ok(Self::Grayscale),
            2 => Ok(Self::Indexed),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Cmyk),
            7 => Ok(Self::Multichannel),
            8 => Ok(Self::Duotone),
            9 => Ok(Self::Lab),

            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorMode, PsdHeaderTag};

    #[test]
    fn tag_ids_round_trip() {
        for tag in PsdHeaderTag::ALL {
            assert_eq!(PsdHeaderTag::try_from(tag.id()), Ok(tag));
        }
        assert_eq!(PsdHeaderTag::try_from(0), Err(()));
        assert_eq!(PsdHeaderTag::try_from(6), Err(()));
    }

    #[test]
    fn color_modes_skip_five_and_six() {
        assert_eq!(ColorMode::try_from(4), Ok(ColorMode::Cmyk));
        assert_eq!(ColorMode::try_from(5), Err(()));
        assert_eq!(ColorMode::try_from(6), Err(()));
        assert_eq!(ColorMode::try_from(9).map(ColorMode::name), Ok("Lab"));
    }
}
