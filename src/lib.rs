//! Streaming MD2/MD4/MD5, SHA-1, SHA-2, SHA-3/SHAKE/Keccak, RIPEMD and
//! BLAKE2 digests, all driven by one block-buffering [`Hasher`].
//!
//! The fixed-size types ([`Sha256`], [`Sha3_256`], [`Blake2b512`], ...)
//! implement the [`digest`] traits:
//!
//! ```
//! use polydigest::{Digest, Sha3_256};
//!
//! let hash = Sha3_256::digest(b"");
//! assert_eq!(hash[..4], [0xa7, 0xff, 0xc6, 0xf8]);
//! ```
//!
//! Hashers configured at runtime expose the engine directly. Every digest
//! resets the hasher, so it can be reused for the next message:
//!
//! ```
//! use polydigest::{Algorithm, KeccakHasher};
//!
//! let mut shake = KeccakHasher::shake128(64);
//! shake.input(b"xabc", 1, 3)?;
//! assert_eq!(shake.digest().len(), 64);
//!
//! let mut md5 = "MD5".parse::<Algorithm>()?.hasher();
//! let mut buf = [0u8; 20];
//! let hash = md5.digest_into(&mut buf, 4)?;
//! assert_eq!(hash[..4], [0xd4, 0x1d, 0x8c, 0xd9]);
//! assert_eq!(buf[..4], [0; 4]);
//! # Ok::<(), polydigest::Error>(())
//! ```

#![no_std]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

mod blake2;
pub mod bytes;
mod config;
mod engine;
mod error;
pub mod md;
mod registry;
mod sponge;

pub use blake2::{Blake2bCore, Blake2bHasher, Blake2sCore, Blake2sHasher};
pub use config::{Sha256DigestSize, Sha3DigestSize, Sha512DigestSize};
pub use digest::{self, Digest};
pub use engine::{BufferKind, DigestCore, Hasher, MAX_BLOCK_LEN};
pub use error::{Error, ErrorKind, Result};
pub use md::{
    Md2Hasher, Md4Hasher, Md5Hasher, MerkleDamgard, Ripemd128Hasher, Ripemd160Hasher, Sha1Hasher, Sha256Hasher,
    Sha512Hasher,
};
pub use registry::{Algorithm, AnyCore, SHAKE128_DEFAULT_LEN, SHAKE256_DEFAULT_LEN};
pub use sponge::{Domain, KeccakCore, KeccakHasher, Sha3XofReader, SHAKE128_RATE, SHAKE256_RATE};

use core::fmt;
use digest::{
    block_buffer::{Eager, Lazy},
    consts::{U104, U128, U136, U144, U16, U168, U20, U28, U32, U48, U64, U72},
    core_api::{AlgorithmName, BlockSizeUser, BufferKindUser},
    typenum::Unsigned,
    ExtendableOutput, ExtendableOutputReset, FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser,
    Reset, Update,
};
use md::{
    Md2Core, Md4Compress, Md5Compress, Ripemd128Compress, Ripemd160Compress, Sha1Compress, Sha256Compress,
    Sha512Compress,
};

#[cfg(feature = "oid")]
use digest::const_oid::{AssociatedOid, ObjectIdentifier};

impl_digest!(Md2, Md2Core, Md2Core::new(), U16, U16, Eager, "MD2", "1.2.840.113549.2.2");
impl_digest!(Md4, MerkleDamgard<Md4Compress>, MerkleDamgard::md4(), U16, U64, Eager, "MD4", "1.2.840.113549.2.4");
impl_digest!(Md5, MerkleDamgard<Md5Compress>, MerkleDamgard::md5(), U16, U64, Eager, "MD5", "1.2.840.113549.2.5");
impl_digest!(Sha1, MerkleDamgard<Sha1Compress>, MerkleDamgard::sha1(), U20, U64, Eager, "SHA-1", "1.3.14.3.2.26");

impl_digest!(
    Sha224,
    MerkleDamgard<Sha256Compress>,
    MerkleDamgard::sha256(Sha256DigestSize::Bits224),
    U28,
    U64,
    Eager,
    "SHA-224",
    "2.16.840.1.101.3.4.2.4",
);
impl_digest!(
    Sha256,
    MerkleDamgard<Sha256Compress>,
    MerkleDamgard::sha256(Sha256DigestSize::Bits256),
    U32,
    U64,
    Eager,
    "SHA-256",
    "2.16.840.1.101.3.4.2.1",
);
impl_digest!(
    Sha384,
    MerkleDamgard<Sha512Compress>,
    MerkleDamgard::sha512(Sha512DigestSize::Bits384),
    U48,
    U128,
    Eager,
    "SHA-384",
    "2.16.840.1.101.3.4.2.2",
);
impl_digest!(
    Sha512,
    MerkleDamgard<Sha512Compress>,
    MerkleDamgard::sha512(Sha512DigestSize::Bits512),
    U64,
    U128,
    Eager,
    "SHA-512",
    "2.16.840.1.101.3.4.2.3",
);
impl_digest!(
    Sha512_224,
    MerkleDamgard<Sha512Compress>,
    MerkleDamgard::sha512(Sha512DigestSize::Bits224),
    U28,
    U128,
    Eager,
    "SHA-512/224",
    "2.16.840.1.101.3.4.2.5",
);
impl_digest!(
    Sha512_256,
    MerkleDamgard<Sha512Compress>,
    MerkleDamgard::sha512(Sha512DigestSize::Bits256),
    U32,
    U128,
    Eager,
    "SHA-512/256",
    "2.16.840.1.101.3.4.2.6",
);

impl_digest!(
    Sha3_224,
    KeccakCore,
    KeccakCore::sha3(Sha3DigestSize::Bits224),
    U28,
    U144,
    Eager,
    "SHA3-224",
    "2.16.840.1.101.3.4.2.7",
);
impl_digest!(
    Sha3_256,
    KeccakCore,
    KeccakCore::sha3(Sha3DigestSize::Bits256),
    U32,
    U136,
    Eager,
    "SHA3-256",
    "2.16.840.1.101.3.4.2.8",
);
impl_digest!(
    Sha3_384,
    KeccakCore,
    KeccakCore::sha3(Sha3DigestSize::Bits384),
    U48,
    U104,
    Eager,
    "SHA3-384",
    "2.16.840.1.101.3.4.2.9",
);
impl_digest!(
    Sha3_512,
    KeccakCore,
    KeccakCore::sha3(Sha3DigestSize::Bits512),
    U64,
    U72,
    Eager,
    "SHA3-512",
    "2.16.840.1.101.3.4.2.10",
);

impl_digest!(Keccak224, KeccakCore, KeccakCore::keccak(Sha3DigestSize::Bits224), U28, U144, Eager, "Keccak-224");
impl_digest!(Keccak256, KeccakCore, KeccakCore::keccak(Sha3DigestSize::Bits256), U32, U136, Eager, "Keccak-256");
impl_digest!(Keccak384, KeccakCore, KeccakCore::keccak(Sha3DigestSize::Bits384), U48, U104, Eager, "Keccak-384");
impl_digest!(Keccak512, KeccakCore, KeccakCore::keccak(Sha3DigestSize::Bits512), U64, U72, Eager, "Keccak-512");

impl_shake!(Shake128, KeccakCore::shake128(SHAKE128_DEFAULT_LEN), U168, "SHAKE128", "2.16.840.1.101.3.4.2.11");
impl_shake!(Shake256, KeccakCore::shake256(SHAKE256_DEFAULT_LEN), U136, "SHAKE256", "2.16.840.1.101.3.4.2.12");

impl_digest!(
    Ripemd128,
    MerkleDamgard<Ripemd128Compress>,
    MerkleDamgard::ripemd128(),
    U16,
    U64,
    Eager,
    "RIPEMD-128",
    "1.3.36.3.2.2",
);
impl_digest!(
    Ripemd160,
    MerkleDamgard<Ripemd160Compress>,
    MerkleDamgard::ripemd160(),
    U20,
    U64,
    Eager,
    "RIPEMD-160",
    "1.3.36.3.2.1",
);

impl_digest!(
    Blake2b512,
    Blake2bCore,
    Blake2bCore::default(),
    U64,
    U128,
    Lazy,
    "BLAKE2b-512",
    "1.3.6.1.4.1.1722.12.2.1.16",
);
impl_digest!(
    Blake2s256,
    Blake2sCore,
    Blake2sCore::default(),
    U32,
    U64,
    Lazy,
    "BLAKE2s-256",
    "1.3.6.1.4.1.1722.12.2.2.8",
);
