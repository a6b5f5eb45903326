//! # `imgmeta`
//!
//! Typed metadata directories, and the binary plumbing to fill them from
//! image files.
//!
//! ## How it fits together
//!
//! - a [`ByteCursor`] reads numbers out of a blob, bounds-checked and in
//!   either byte order
//! - a [`FormatReader`] pulls one structure (like a file header) through the
//!   cursor and turns it into a [`Directory`] of tags
//! - all directories from one run end up in a [`Metadata`]
//!
//! Once decoded, any tag can be read back as any of the usual types. The
//! directory converts on the way out, so callers don't need to care whether a
//! reader stored a width as a `u16` or a `u32`:
//!
//! ```
//! use imgmeta::{Metadata, directory::DirectoryKind, providers::psd::PsdReader};
//! use imgmeta_types::psd::PsdHeaderTag;
//!
//! let mut file = b"8BPS\x00\x01\x00\x00\x00\x00\x00\x00".to_vec();
//! file.extend_from_slice(&[0, 3, 0, 0, 0, 4, 0, 0, 0, 8, 0, 8, 0, 3]);
//!
//! let metadata: Metadata = imgmeta::read(&PsdReader, &file).unwrap();
//! let header = metadata.first_of_kind(DirectoryKind::PsdHeader).unwrap();
//!
//! assert_eq!(header.get_i32(PsdHeaderTag::ImageWidth.id()), Ok(8));
//! assert_eq!(header.get_string(PsdHeaderTag::ImageHeight.id()).as_deref(), Ok("4"));
//! ```
//!
//! ## License
//!
//! This project is dual-licensed under either the Apache License 2.0 or the MIT License at your option.

#![forbid(unsafe_code)]

pub use crate::{
    cursor::{ByteCursor, Eof},
    directory::{Directory, DirectoryKind, MetadataError},
    metadata::Metadata,
    reader::{DecodeError, FormatReader},
};

pub mod cursor;
pub mod directory;
pub mod metadata;
pub mod providers;
pub mod reader;

/// Runs `reader` over the start of `input` and returns what it found.
///
/// This throws away anything decoded before an error. To keep partial
/// results, call [`FormatReader::extract`] with your own [`Metadata`].
pub fn read<R: FormatReader>(reader: &R, input: &impl AsRef<[u8]>) -> Result<Metadata, DecodeError> {
    let mut cursor = ByteCursor::new(input.as_ref());
    let mut metadata = Metadata::new();

    reader.extract(&mut cursor, &mut metadata)?;
    Ok(metadata)
}

/// Internal utility methods.
pub(crate) mod util {
    /// Helper function to initialize the logger for testing.
    #[cfg(test)]
    pub fn logger() {
        _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::max())
            .format_file(true)
            .format_line_number(true)
            .try_init();
    }
}
