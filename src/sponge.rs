//! SHA-3, SHAKE and legacy Keccak on top of the Keccak-f[1600] sponge.
//!
//! All variants share one core; they differ only in rate, output length and
//! the domain separation suffix placed in front of the `pad10*1` padding.

use crate::{
    engine::{DigestCore, Hasher},
    Sha3DigestSize,
};
use core::{cmp, fmt};
use digest::XofReader;
use keccak_f1600::{extract_bytes, keccak_f1600, sha3_absorb, sha3_squeeze, Buffer, STATE_BYTES};

/// Rate of SHAKE128 in bytes.
pub const SHAKE128_RATE: usize = 168;
/// Rate of SHAKE256 in bytes.
pub const SHAKE256_RATE: usize = 136;

/// Domain separation between sponge variants sharing a permutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Pre-standard Keccak submission padding (suffix `0x01`).
    Keccak,
    /// FIPS 202 SHA-3 (suffix `0x06`).
    Sha3,
    /// FIPS 202 SHAKE extendable output (suffix `0x1f`).
    Shake,
}

impl Domain {
    /// First padding byte, before the final `0x80` bit is merged in.
    #[inline]
    pub const fn suffix(self) -> u8 {
        match self {
            Self::Keccak => 0x01,
            Self::Sha3 => 0x06,
            Self::Shake => 0x1f,
        }
    }
}

/// Sponge state plus the parameters selecting a variant.
#[derive(Clone)]
pub struct KeccakCore {
    state: Buffer,
    rate: usize,
    digest_len: usize,
    domain: Domain,
    name: &'static str,
}

/// Streaming SHA-3, SHAKE or Keccak.
pub type KeccakHasher = Hasher<KeccakCore>;

impl KeccakCore {
    fn with_rate(name: &'static str, domain: Domain, rate: usize, digest_len: usize) -> Self {
        Self { state: [0; 25], rate, digest_len, domain, name }
    }

    /// SHA3-224, SHA3-256, SHA3-384 or SHA3-512.
    pub fn sha3(size: Sha3DigestSize) -> Self {
        Self::with_rate(size.sha3_name(), Domain::Sha3, size.rate(), size.digest_len())
    }

    /// The pre-standard Keccak submission with the same parameters as [`sha3`](Self::sha3).
    pub fn keccak(size: Sha3DigestSize) -> Self {
        Self::with_rate(size.keccak_name(), Domain::Keccak, size.rate(), size.digest_len())
    }

    /// SHAKE128 producing `output_len` bytes per digest.
    pub fn shake128(output_len: usize) -> Self {
        Self::with_rate("SHAKE128", Domain::Shake, SHAKE128_RATE, output_len)
    }

    /// SHAKE256 producing `output_len` bytes per digest.
    pub fn shake256(output_len: usize) -> Self {
        Self::with_rate("SHAKE256", Domain::Shake, SHAKE256_RATE, output_len)
    }

    /// Bytes absorbed or squeezed per permutation.
    #[inline]
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// State bytes never exposed to input or output.
    #[inline]
    pub fn capacity(&self) -> usize {
        STATE_BYTES - self.rate
    }

    /// Padding domain of this variant.
    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Pads the tail, absorbs it, and leaves the state ready to squeeze.
    fn absorb_final(&mut self, remaining: &mut [u8], remaining_len: usize) {
        let rate = self.rate;
        assert!(remaining_len < rate, "{} buffer overflow", self.name);

        let suffix = self.domain.suffix();
        if remaining_len == rate - 1 {
            remaining[remaining_len] = suffix | 0x80;
        } else {
            remaining[remaining_len] = suffix;
            remaining[remaining_len + 1..rate - 1].fill(0);
            remaining[rate - 1] = 0x80;
        }

        let left = sha3_absorb(&mut self.state, &remaining[..rate], rate);
        debug_assert_eq!(left, 0);
    }

    fn into_reader(&mut self, remaining: &mut [u8], remaining_len: usize) -> Sha3XofReader {
        self.absorb_final(remaining, remaining_len);
        Sha3XofReader { state: self.state, rate: self.rate, pos: 0 }
    }
}

impl DigestCore for KeccakCore {
    #[inline]
    fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    fn block_len(&self) -> usize {
        self.rate
    }

    #[inline]
    fn digest_len(&self) -> usize {
        self.digest_len
    }

    #[inline]
    fn transform_block(&mut self, block: &[u8]) {
        sha3_absorb(&mut self.state, block, self.rate);
    }

    fn transform_final(&mut self, remaining: &mut [u8], remaining_len: usize, output: &mut [u8]) {
        self.absorb_final(remaining, remaining_len);
        sha3_squeeze(&mut self.state, output, self.rate);
    }

    #[inline]
    fn reset_state(&mut self) {
        self.state = [0; 25];
    }

    #[cfg(feature = "zeroize")]
    fn wipe(&mut self) {
        use zeroize::Zeroize;
        self.state.zeroize();
    }
}

impl KeccakHasher {
    /// A fresh SHA-3 hasher.
    pub fn sha3(size: Sha3DigestSize) -> Self {
        Self::from_core(KeccakCore::sha3(size))
    }

    /// A fresh legacy Keccak hasher.
    pub fn keccak(size: Sha3DigestSize) -> Self {
        Self::from_core(KeccakCore::keccak(size))
    }

    /// A fresh SHAKE128 hasher whose digests are `output_len` bytes.
    pub fn shake128(output_len: usize) -> Self {
        Self::from_core(KeccakCore::shake128(output_len))
    }

    /// A fresh SHAKE256 hasher whose digests are `output_len` bytes.
    pub fn shake256(output_len: usize) -> Self {
        Self::from_core(KeccakCore::shake256(output_len))
    }

    /// Finalizes into an unbounded output stream and resets.
    ///
    /// The first `digest_len` bytes read equal what [`digest`](Hasher::digest)
    /// would have returned.
    pub fn finalize_xof(&mut self) -> Sha3XofReader {
        let reader = self.finalize_with(KeccakCore::into_reader);
        tracing::trace!(algorithm = self.name(), "squeezing extendable output");
        reader
    }
}

/// Squeezes the output stream of a finalized sponge.
#[derive(Clone)]
pub struct Sha3XofReader {
    state: Buffer,
    rate: usize,
    pos: usize,
}

impl XofReader for Sha3XofReader {
    fn read(&mut self, mut buffer: &mut [u8]) {
        while !buffer.is_empty() {
            if self.pos == self.rate {
                keccak_f1600(&mut self.state);
                self.pos = 0;
            }
            let take = cmp::min(self.rate - self.pos, buffer.len());
            let (head, tail) = core::mem::take(&mut buffer).split_at_mut(take);
            extract_bytes(&self.state, self.pos, head);
            self.pos += take;
            buffer = tail;
        }
    }
}

impl fmt::Debug for Sha3XofReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sha3XofReader { ... }")
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Sha3XofReader {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        self.state.zeroize();
        self.pos.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::ZeroizeOnDrop for Sha3XofReader {}
