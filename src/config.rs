//! Construction-time parameter sets for the families with several sizes.

use crate::{Error, Result};
use keccak_f1600::STATE_BYTES;

/// Digest size of the SHA-256 family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sha256DigestSize {
    /// SHA-224.
    Bits224,
    /// SHA-256.
    #[default]
    Bits256,
}

impl Sha256DigestSize {
    /// Digest length in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Bits224 => 28,
            Self::Bits256 => 32,
        }
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Self::Bits224 => "SHA-224",
            Self::Bits256 => "SHA-256",
        }
    }
}

/// Digest size of the SHA-512 family. 224 and 256 select the SHA-512/t
/// variants with their own IVs, not truncated SHA-512.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sha512DigestSize {
    /// SHA-512/224.
    Bits224,
    /// SHA-512/256.
    Bits256,
    /// SHA-384.
    Bits384,
    /// SHA-512.
    #[default]
    Bits512,
}

impl Sha512DigestSize {
    /// Digest length in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Bits224 => 28,
            Self::Bits256 => 32,
            Self::Bits384 => 48,
            Self::Bits512 => 64,
        }
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Self::Bits224 => "SHA-512/224",
            Self::Bits256 => "SHA-512/256",
            Self::Bits384 => "SHA-384",
            Self::Bits512 => "SHA-512",
        }
    }
}

/// Digest size of SHA-3 and legacy Keccak.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sha3DigestSize {
    /// 28-byte digest, 144-byte rate.
    Bits224,
    /// 32-byte digest, 136-byte rate.
    #[default]
    Bits256,
    /// 48-byte digest, 104-byte rate.
    Bits384,
    /// 64-byte digest, 72-byte rate.
    Bits512,
}

impl Sha3DigestSize {
    /// Digest length in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Bits224 => 28,
            Self::Bits256 => 32,
            Self::Bits384 => 48,
            Self::Bits512 => 64,
        }
    }

    /// Sponge rate in bytes; the capacity is twice the digest length.
    pub const fn rate(self) -> usize {
        STATE_BYTES - 2 * self.digest_len()
    }

    pub(crate) const fn sha3_name(self) -> &'static str {
        match self {
            Self::Bits224 => "SHA3-224",
            Self::Bits256 => "SHA3-256",
            Self::Bits384 => "SHA3-384",
            Self::Bits512 => "SHA3-512",
        }
    }

    pub(crate) const fn keccak_name(self) -> &'static str {
        match self {
            Self::Bits224 => "Keccak-224",
            Self::Bits256 => "Keccak-256",
            Self::Bits384 => "Keccak-384",
            Self::Bits512 => "Keccak-512",
        }
    }
}

fn unsupported(algorithm: &'static str, size: usize) -> Error {
    tracing::debug!(algorithm, size, "unsupported digest size");
    Error::UnsupportedDigestSize { algorithm, size }
}

impl TryFrom<usize> for Sha256DigestSize {
    type Error = Error;

    /// Selects a size from a digest length in bytes.
    fn try_from(bytes: usize) -> Result<Self> {
        match bytes {
            28 => Ok(Self::Bits224),
            32 => Ok(Self::Bits256),
            _ => Err(unsupported("SHA-256", bytes)),
        }
    }
}

impl TryFrom<usize> for Sha512DigestSize {
    type Error = Error;

    /// Selects a size from a digest length in bytes.
    fn try_from(bytes: usize) -> Result<Self> {
        match bytes {
            28 => Ok(Self::Bits224),
            32 => Ok(Self::Bits256),
            48 => Ok(Self::Bits384),
            64 => Ok(Self::Bits512),
            _ => Err(unsupported("SHA-512", bytes)),
        }
    }
}

impl TryFrom<usize> for Sha3DigestSize {
    type Error = Error;

    /// Selects a size from a digest length in bytes.
    fn try_from(bytes: usize) -> Result<Self> {
        match bytes {
            28 => Ok(Self::Bits224),
            32 => Ok(Self::Bits256),
            48 => Ok(Self::Bits384),
            64 => Ok(Self::Bits512),
            _ => Err(unsupported("SHA-3", bytes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_round_trip_through_bytes() {
        for size in [Sha3DigestSize::Bits224, Sha3DigestSize::Bits256, Sha3DigestSize::Bits384, Sha3DigestSize::Bits512]
        {
            assert_eq!(Sha3DigestSize::try_from(size.digest_len()), Ok(size));
        }
        assert_eq!(Sha256DigestSize::try_from(28), Ok(Sha256DigestSize::Bits224));
        assert_eq!(Sha512DigestSize::try_from(48), Ok(Sha512DigestSize::Bits384));
    }

    #[test]
    fn rejects_other_sizes() {
        assert_eq!(
            Sha256DigestSize::try_from(48),
            Err(Error::UnsupportedDigestSize { algorithm: "SHA-256", size: 48 })
        );
        assert!(Sha512DigestSize::try_from(20).is_err());
        assert!(Sha3DigestSize::try_from(0).is_err());
    }

    #[test]
    fn rates_follow_capacity() {
        assert_eq!(Sha3DigestSize::Bits224.rate(), 144);
        assert_eq!(Sha3DigestSize::Bits256.rate(), 136);
        assert_eq!(Sha3DigestSize::Bits384.rate(), 104);
        assert_eq!(Sha3DigestSize::Bits512.rate(), 72);
    }

    #[test]
    fn defaults() {
        assert_eq!(Sha256DigestSize::default().digest_len(), 32);
        assert_eq!(Sha512DigestSize::default().digest_len(), 64);
        assert_eq!(Sha3DigestSize::default().digest_len(), 32);
    }
}
