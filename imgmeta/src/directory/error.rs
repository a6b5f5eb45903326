/// Asking a [`Directory`](super::Directory) for a tag went wrong.
///
/// Both cases are recoverable: the `try_get_*` methods turn them into `None`.
#[derive(Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum MetadataError {
    /// Nothing was ever stored under the tag.
    TagNotFound {
        tag: i32,

        /// Name of the directory that was asked.
        directory: &'static str,
    },

    /// The stored value can't be turned into the requested type.
    ConversionFailed {
        tag: i32,

        /// Name of the directory that was asked.
        directory: &'static str,

        /// The stored variant, like `Text` or `Array`.
        from: &'static str,

        /// The requested type, like `i32`.
        to: &'static str,
    },
}

impl core::fmt::Display for MetadataError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MetadataError::TagNotFound { tag, directory } => {
                write!(f, "Tag `{tag:#06x}` isn't set on the `{directory}` directory.")
            }
            MetadataError::ConversionFailed {
                tag,
                directory,
                from,
                to,
            } => write!(
                f,
                "Tag `{tag:#06x}` on the `{directory}` directory holds a value of type `{from}`, \
                which can't be converted to `{to}`."
            ),
        }
    }
}

impl core::error::Error for MetadataError {}
