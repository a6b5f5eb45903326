//! The contract every format reader implements.

use crate::{cursor::ByteCursor, metadata::Metadata};

pub use self::error::{DecodeError, FormatMismatch};

pub mod error;

/// Decodes one structural unit of a file into directories.
///
/// Readers are stateless; everything they learn goes into `sink`. They may add
/// some directories and then fail. Those directories are left in place for the
/// caller to keep or throw away, so readers should only add a directory once
/// it's complete.
pub trait FormatReader: core::fmt::Debug + Send + Sync {
    /// Reads from `cursor`'s current position and adds the resulting
    /// directories to `sink`.
    ///
    /// # Errors
    ///
    /// Fails with [`DecodeError::InvalidFormat`] if the input isn't this
    /// reader's format, or [`DecodeError::Truncated`] if it ends too early.
    fn extract(&self, cursor: &mut ByteCursor<'_>, sink: &mut Metadata) -> Result<(), DecodeError>;
}
