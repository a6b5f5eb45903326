//! Photoshop (PSD) files.
//!
//! Every PSD starts with a 26-byte, big-endian header describing the canvas:
//!
//! | Offset | Size | Field            |
//! |--------|------|------------------|
//! | 0      | 4    | signature `8BPS` |
//! | 4      | 2    | version, `1`     |
//! | 6      | 6    | reserved         |
//! | 12     | 2    | channel count    |
//! | 14     | 4    | height           |
//! | 18     | 4    | width            |
//! | 22     | 2    | bits per channel |
//! | 24     | 2    | color mode       |
//!
//! Version `2` marks a "large document" (PSB) file, which has a different
//! layout further in, so it isn't accepted here.

use imgmeta_types::{
    ByteOrder,
    psd::{ColorMode, PsdHeaderTag},
};

use crate::{
    cursor::ByteCursor,
    directory::{Directory, DirectoryKind},
    metadata::Metadata,
    reader::{DecodeError, FormatMismatch, FormatReader},
};

/// The decoded PSD file header.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct PsdHeader {
    pub channel_count: u16,
    pub height: u32,
    pub width: u32,
    pub bits_per_channel: u16,

    /// Raw color mode. See [`PsdHeader::color_mode`].
    pub color_mode: u16,
}

impl PsdHeader {
    pub const SIGNATURE: &'static [u8] = b"8BPS";
    pub const VERSION: u16 = 1;

    /// Size of the header, in bytes.
    pub const LEN: usize = 26;

    const RESERVED_LEN: usize = 6;

    /// Parses the header from the cursor's current position.
    pub fn parse(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        const BE: ByteOrder = ByteOrder::Big;

        log::trace!("Checking PSD signature...");

        // a short input is only truncated if what's there could still be
        // the start of the signature
        let prefix_len: usize = Self::SIGNATURE
            .len()
            .min(usize::try_from(cursor.remaining()).unwrap_or(usize::MAX));
        let prefix: &[u8] = cursor.peek_slice(prefix_len)?;
        if prefix != &Self::SIGNATURE[..prefix_len] {
            return Err(DecodeError::InvalidFormat(FormatMismatch::Signature {
                expected: Self::SIGNATURE,
                found: prefix.to_vec(),
            }));
        }
        cursor.skip(Self::SIGNATURE.len())?;

        let version: u16 = cursor.read_u16(BE)?;
        if version != Self::VERSION {
            return Err(DecodeError::InvalidFormat(FormatMismatch::Version {
                expected: Self::VERSION,
                found: version,
            }));
        }

        // nothing lives here
        cursor.skip(Self::RESERVED_LEN)?;

        let header = Self {
            channel_count: cursor.read_u16(BE)?,
            height: cursor.read_u32(BE)?,
            width: cursor.read_u32(BE)?,
            bits_per_channel: cursor.read_u16(BE)?,
            color_mode: cursor.read_u16(BE)?,
        };
        log::trace!("Parsed PSD header: {header:?}");

        Ok(header)
    }

    /// The color mode, if it's one Photoshop defines.
    pub fn color_mode(&self) -> Option<ColorMode> {
        ColorMode::try_from(self.color_mode).ok()
    }

    /// Stores each field under its [`PsdHeaderTag`].
    pub fn to_directory(&self) -> Directory {
        let mut directory = Directory::new(DirectoryKind::PsdHeader);

        directory.set(PsdHeaderTag::ChannelCount.id(), i32::from(self.channel_count));
        directory.set(PsdHeaderTag::ImageHeight.id(), self.height);
        directory.set(PsdHeaderTag::ImageWidth.id(), self.width);
        directory.set(
            PsdHeaderTag::BitsPerChannel.id(),
            i32::from(self.bits_per_channel),
        );
        directory.set(PsdHeaderTag::ColorMode.id(), i32::from(self.color_mode));

        if self.color_mode().is_none() {
            directory.add_error(format!("Unknown color mode: `{}`", self.color_mode));
        }

        directory
    }
}

/// Reads the PSD file header into a [`DirectoryKind::PsdHeader`] directory.
#[derive(Clone, Copy, Debug, Default)]
pub struct PsdReader;

impl FormatReader for PsdReader {
    fn extract(&self, cursor: &mut ByteCursor<'_>, sink: &mut Metadata) -> Result<(), DecodeError> {
        let header = PsdHeader::parse(cursor)
            .inspect_err(|e| log::error!("Failed to read PSD header! err: {e}"))?;

        sink.add_directory(header.to_directory());
        Ok(())
    }
}
