//! Error types shared by the point cloud model and the 3CPF codec.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced when building, transforming, saving or loading point frames.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-supplied value has the wrong shape (position counts, axis order).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not allowed in the current state of the container.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The bytes are not a 3CPF file.
    #[error("invalid 3CPF format: {0}")]
    InvalidFormat(String),

    /// The file declares a format version this crate cannot decode.
    #[error("unsupported 3CPF version: {0}")]
    UnsupportedVersion(u32),

    /// The payload checksum does not match the one stored in the header.
    #[error("data corruption detected: checksum {actual:#010x} does not match stored {expected:#010x}")]
    DataCorruption { expected: u32, actual: u32 },

    /// A point or frame index is past the end of the container.
    #[error("{axis} index {index} out of range (len {len})")]
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        len: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_corruption_message_shows_both_checksums() {
        let err = Error::DataCorruption {
            expected: 0x025b_bab3,
            actual: 0x1,
        };
        let msg = err.to_string();
        assert!(msg.contains("0x025bbab3"));
        assert!(msg.contains("0x00000001"));
    }
}
