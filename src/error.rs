use thiserror::Error;

/// Errors reported by hashers and their configuration types.
///
/// A call that returns an error leaves the hasher untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested input range does not lie inside the source buffer.
    #[error("input range of {length} bytes at offset {offset} exceeds buffer of {size} bytes")]
    InputOutOfBounds {
        /// Start of the requested range.
        offset: usize,
        /// Length of the requested range.
        length: usize,
        /// Size of the source buffer.
        size: usize,
    },

    /// The output buffer cannot hold the digest at the requested offset.
    #[error("{digest_len}-byte digest at offset {offset} does not fit in buffer of {size} bytes")]
    OutputTooSmall {
        /// Requested write offset.
        offset: usize,
        /// Digest length of the hasher.
        digest_len: usize,
        /// Size of the output buffer.
        size: usize,
    },

    /// The algorithm has no variant with this digest size.
    #[error("{algorithm} does not support a digest size of {size} bytes")]
    UnsupportedDigestSize {
        /// Algorithm family name.
        algorithm: &'static str,
        /// Rejected size in bytes.
        size: usize,
    },

    /// The key is longer than the algorithm accepts.
    #[error("{algorithm} keys are at most {max} bytes, got {size}")]
    InvalidKeySize {
        /// Algorithm family name.
        algorithm: &'static str,
        /// Rejected key length in bytes.
        size: usize,
        /// Largest accepted key length.
        max: usize,
    },

    /// No algorithm goes by the given name.
    #[error("unknown digest algorithm name")]
    UnknownAlgorithm,
}

/// Broad classes of [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A malformed buffer, offset or length was passed to `input`/`digest`.
    InvalidArgument,
    /// Construction parameters fall outside the algorithm's defined ranges.
    InvalidConfiguration,
}

impl Error {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InputOutOfBounds { .. } | Self::OutputTooSmall { .. } => ErrorKind::InvalidArgument,
            Self::UnsupportedDigestSize { .. } | Self::InvalidKeySize { .. } | Self::UnknownAlgorithm => {
                ErrorKind::InvalidConfiguration
            }
        }
    }
}

/// Result type for hasher operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        let err = Error::InputOutOfBounds { offset: 4, length: 8, size: 10 };
        assert_eq!(err.to_string(), "input range of 8 bytes at offset 4 exceeds buffer of 10 bytes");

        let err = Error::OutputTooSmall { offset: 1, digest_len: 32, size: 32 };
        assert_eq!(err.to_string(), "32-byte digest at offset 1 does not fit in buffer of 32 bytes");

        let err = Error::InvalidKeySize { algorithm: "BLAKE2b", size: 65, max: 64 };
        assert_eq!(err.to_string(), "BLAKE2b keys are at most 64 bytes, got 65");
    }

    #[test]
    fn kinds() {
        assert_eq!(Error::OutputTooSmall { offset: 0, digest_len: 1, size: 0 }.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            Error::UnsupportedDigestSize { algorithm: "SHA-3", size: 20 }.kind(),
            ErrorKind::InvalidConfiguration
        );
        assert_eq!(Error::UnknownAlgorithm.kind(), ErrorKind::InvalidConfiguration);
    }
}
