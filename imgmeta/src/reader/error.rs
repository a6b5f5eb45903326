use crate::cursor::Eof;

/// A reader couldn't decode its structural unit.
///
/// Directories the reader already added to the [`Metadata`](crate::Metadata)
/// stay there.
#[derive(Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum DecodeError {
    /// The bytes aren't the structure this reader decodes.
    ///
    /// Another reader might have better luck.
    InvalidFormat(FormatMismatch),

    /// The source ended partway through the structure.
    Truncated(Eof),
}

/// Which structural marker didn't match.
#[derive(Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum FormatMismatch {
    /// The leading magic bytes were wrong.
    Signature {
        expected: &'static [u8],
        found: Vec<u8>,
    },

    /// The format version isn't one we can read.
    Version { expected: u16, found: u16 },
}

impl From<Eof> for DecodeError {
    fn from(value: Eof) -> Self {
        DecodeError::Truncated(value)
    }
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeError::InvalidFormat(mismatch) => {
                write!(f, "Input isn't in the expected format. {mismatch}")
            }
            DecodeError::Truncated(eof) => {
                write!(f, "Input ended before the structure was complete. err: {eof}")
            }
        }
    }
}

impl core::fmt::Display for FormatMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatMismatch::Signature { expected, found } => write!(
                f,
                "Signature mismatch! expected: `{}`, got: `{}`",
                expected.escape_ascii(),
                found.escape_ascii()
            ),
            FormatMismatch::Version { expected, found } => {
                write!(f, "Unsupported version! expected: `{expected}`, got: `{found}`")
            }
        }
    }
}

impl core::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            DecodeError::Truncated(eof) => Some(eof),
            DecodeError::InvalidFormat(_) => None,
        }
    }
}

impl core::error::Error for FormatMismatch {}
