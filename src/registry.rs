//! Runtime algorithm selection by name.

use crate::{
    blake2::{Blake2bCore, Blake2sCore},
    engine::{BufferKind, DigestCore, Hasher},
    md::{
        Md2Core, Md4Compress, Md5Compress, MerkleDamgard, Ripemd128Compress, Ripemd160Compress, Sha1Compress,
        Sha256Compress, Sha512Compress,
    },
    sponge::KeccakCore,
    Error, Result, Sha256DigestSize, Sha3DigestSize, Sha512DigestSize,
};
use core::{fmt, str::FromStr};

/// Default SHAKE128 output length in bytes.
pub const SHAKE128_DEFAULT_LEN: usize = 32;
/// Default SHAKE256 output length in bytes.
pub const SHAKE256_DEFAULT_LEN: usize = 64;

/// Any supported core, for hashers whose algorithm is picked at runtime.
#[derive(Clone)]
#[allow(missing_docs)]
pub enum AnyCore {
    Md2(Md2Core),
    Md4(MerkleDamgard<Md4Compress>),
    Md5(MerkleDamgard<Md5Compress>),
    Sha1(MerkleDamgard<Sha1Compress>),
    Sha256(MerkleDamgard<Sha256Compress>),
    Sha512(MerkleDamgard<Sha512Compress>),
    Ripemd128(MerkleDamgard<Ripemd128Compress>),
    Ripemd160(MerkleDamgard<Ripemd160Compress>),
    Keccak(KeccakCore),
    Blake2b(Blake2bCore),
    Blake2s(Blake2sCore),
}

macro_rules! impl_from_core {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for AnyCore {
                #[inline]
                fn from(core: $ty) -> Self {
                    Self::$variant(core)
                }
            }
        )*
    };
}

impl_from_core! {
    Md2(Md2Core),
    Md4(MerkleDamgard<Md4Compress>),
    Md5(MerkleDamgard<Md5Compress>),
    Sha1(MerkleDamgard<Sha1Compress>),
    Sha256(MerkleDamgard<Sha256Compress>),
    Sha512(MerkleDamgard<Sha512Compress>),
    Ripemd128(MerkleDamgard<Ripemd128Compress>),
    Ripemd160(MerkleDamgard<Ripemd160Compress>),
    Keccak(KeccakCore),
    Blake2b(Blake2bCore),
    Blake2s(Blake2sCore),
}

macro_rules! dispatch {
    ($this:expr, $core:ident => $e:expr) => {
        match $this {
            AnyCore::Md2($core) => $e,
            AnyCore::Md4($core) => $e,
            AnyCore::Md5($core) => $e,
            AnyCore::Sha1($core) => $e,
            AnyCore::Sha256($core) => $e,
            AnyCore::Sha512($core) => $e,
            AnyCore::Ripemd128($core) => $e,
            AnyCore::Ripemd160($core) => $e,
            AnyCore::Keccak($core) => $e,
            AnyCore::Blake2b($core) => $e,
            AnyCore::Blake2s($core) => $e,
        }
    };
}

impl DigestCore for AnyCore {
    #[inline]
    fn name(&self) -> &'static str {
        dispatch!(self, core => core.name())
    }

    #[inline]
    fn block_len(&self) -> usize {
        dispatch!(self, core => core.block_len())
    }

    #[inline]
    fn digest_len(&self) -> usize {
        dispatch!(self, core => core.digest_len())
    }

    #[inline]
    fn buffer_kind(&self) -> BufferKind {
        dispatch!(self, core => core.buffer_kind())
    }

    #[inline]
    fn transform_block(&mut self, block: &[u8]) {
        dispatch!(self, core => core.transform_block(block))
    }

    #[inline]
    fn transform_final(&mut self, remaining: &mut [u8], remaining_len: usize, output: &mut [u8]) {
        dispatch!(self, core => core.transform_final(remaining, remaining_len, output))
    }

    #[inline]
    fn reset_state(&mut self) {
        dispatch!(self, core => core.reset_state())
    }

    #[cfg(feature = "zeroize")]
    fn wipe(&mut self) {
        dispatch!(self, core => core.wipe())
    }

    #[inline]
    fn prefix_block(&self) -> Option<&[u8]> {
        dispatch!(self, core => core.prefix_block())
    }
}

/// Every fixed-parameter algorithm, by its conventional name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[allow(missing_docs)]
pub enum Algorithm {
    Md2,
    Md4,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Keccak224,
    Keccak256,
    Keccak384,
    Keccak512,
    Shake128,
    Shake256,
    Ripemd128,
    Ripemd160,
    Blake2b512,
    Blake2s256,
}

impl Algorithm {
    /// All variants, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Md2,
        Self::Md4,
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha512_224,
        Self::Sha512_256,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Keccak224,
        Self::Keccak256,
        Self::Keccak384,
        Self::Keccak512,
        Self::Shake128,
        Self::Shake256,
        Self::Ripemd128,
        Self::Ripemd160,
        Self::Blake2b512,
        Self::Blake2s256,
    ];

    /// Conventional name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md2 => "MD2",
            Self::Md4 => "MD4",
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Sha512_224 => "SHA-512/224",
            Self::Sha512_256 => "SHA-512/256",
            Self::Sha3_224 => "SHA3-224",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
            Self::Keccak224 => "Keccak-224",
            Self::Keccak256 => "Keccak-256",
            Self::Keccak384 => "Keccak-384",
            Self::Keccak512 => "Keccak-512",
            Self::Shake128 => "SHAKE128",
            Self::Shake256 => "SHAKE256",
            Self::Ripemd128 => "RIPEMD-128",
            Self::Ripemd160 => "RIPEMD-160",
            Self::Blake2b512 => "BLAKE2b-512",
            Self::Blake2s256 => "BLAKE2s-256",
        }
    }

    /// Whether the output length is a free parameter.
    pub const fn is_xof(self) -> bool {
        matches!(self, Self::Shake128 | Self::Shake256)
    }

    /// A fresh core for this algorithm. SHAKE uses its default output length.
    pub fn core(self) -> AnyCore {
        match self {
            Self::Md2 => Md2Core::new().into(),
            Self::Md4 => MerkleDamgard::md4().into(),
            Self::Md5 => MerkleDamgard::md5().into(),
            Self::Sha1 => MerkleDamgard::sha1().into(),
            Self::Sha224 => MerkleDamgard::sha256(Sha256DigestSize::Bits224).into(),
            Self::Sha256 => MerkleDamgard::sha256(Sha256DigestSize::Bits256).into(),
            Self::Sha384 => MerkleDamgard::sha512(Sha512DigestSize::Bits384).into(),
            Self::Sha512 => MerkleDamgard::sha512(Sha512DigestSize::Bits512).into(),
            Self::Sha512_224 => MerkleDamgard::sha512(Sha512DigestSize::Bits224).into(),
            Self::Sha512_256 => MerkleDamgard::sha512(Sha512DigestSize::Bits256).into(),
            Self::Sha3_224 => KeccakCore::sha3(Sha3DigestSize::Bits224).into(),
            Self::Sha3_256 => KeccakCore::sha3(Sha3DigestSize::Bits256).into(),
            Self::Sha3_384 => KeccakCore::sha3(Sha3DigestSize::Bits384).into(),
            Self::Sha3_512 => KeccakCore::sha3(Sha3DigestSize::Bits512).into(),
            Self::Keccak224 => KeccakCore::keccak(Sha3DigestSize::Bits224).into(),
            Self::Keccak256 => KeccakCore::keccak(Sha3DigestSize::Bits256).into(),
            Self::Keccak384 => KeccakCore::keccak(Sha3DigestSize::Bits384).into(),
            Self::Keccak512 => KeccakCore::keccak(Sha3DigestSize::Bits512).into(),
            Self::Shake128 => KeccakCore::shake128(SHAKE128_DEFAULT_LEN).into(),
            Self::Shake256 => KeccakCore::shake256(SHAKE256_DEFAULT_LEN).into(),
            Self::Ripemd128 => MerkleDamgard::ripemd128().into(),
            Self::Ripemd160 => MerkleDamgard::ripemd160().into(),
            Self::Blake2b512 => Blake2bCore::default().into(),
            Self::Blake2s256 => Blake2sCore::default().into(),
        }
    }

    /// A fresh streaming hasher for this algorithm.
    pub fn hasher(self) -> Hasher<AnyCore> {
        Hasher::from_core(self.core())
    }

    /// A hasher producing `output_len` bytes.
    ///
    /// Any length is accepted for SHAKE; other algorithms only accept their
    /// own digest length.
    pub fn xof_hasher(self, output_len: usize) -> Result<Hasher<AnyCore>> {
        let core: AnyCore = match self {
            Self::Shake128 => KeccakCore::shake128(output_len).into(),
            Self::Shake256 => KeccakCore::shake256(output_len).into(),
            _ if output_len == self.digest_len() => self.core(),
            _ => {
                tracing::debug!(algorithm = self.name(), output_len, "fixed-output algorithm");
                return Err(Error::UnsupportedDigestSize { algorithm: self.name(), size: output_len });
            }
        };
        Ok(Hasher::from_core(core))
    }

    /// Digest length in bytes (the default length for SHAKE).
    pub fn digest_len(self) -> usize {
        self.core().digest_len()
    }

    /// Block size (sponge rate) in bytes.
    pub fn block_len(self) -> usize {
        self.core().block_len()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Parses a conventional name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.iter().copied().find(|alg| alg.name().eq_ignore_ascii_case(s)).ok_or_else(|| {
            tracing::debug!(name = s, "unknown digest algorithm");
            Error::UnknownAlgorithm
        })
    }
}
