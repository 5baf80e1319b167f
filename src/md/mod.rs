//! Merkle–Damgård constructions: MD2, MD4, MD5, SHA-1, SHA-2 and RIPEMD.
//!
//! Everything except MD2 shares the same finalization: a `0x80` byte, zero
//! fill, and the message length in bits in the last 8 (or 16) bytes of the
//! final block. [`MerkleDamgard`] implements that once, over a
//! [`Compression`] function.

use crate::{
    bytes::{store_words, ByteOrder, Word},
    engine::DigestCore,
};

mod md2;
mod md4;
mod md5;
mod ripemd;
mod sha1;
mod sha256;
mod sha512;

pub use md2::{Md2Core, Md2Hasher};
pub use md4::{Md4Compress, Md4Hasher};
pub use md5::{Md5Compress, Md5Hasher};
pub use ripemd::{Ripemd128Compress, Ripemd128Hasher, Ripemd160Compress, Ripemd160Hasher};
pub use sha1::{Sha1Compress, Sha1Hasher};
pub use sha256::{Sha256Compress, Sha256Hasher};
pub use sha512::{Sha512Compress, Sha512Hasher};

// BLAKE2 reuses these as its IVs.
pub(crate) use sha256::IV_256;
pub(crate) use sha512::IV_512;

/// A block compression function with its register layout.
pub trait Compression: Clone {
    /// Register word type.
    type Word: Word;
    /// Byte order of message words, length field and digest.
    type Order: ByteOrder;
    /// Chaining registers.
    type State: Copy + AsRef<[Self::Word]> + AsMut<[Self::Word]>;

    /// Block size in bytes.
    const BLOCK_LEN: usize;
    /// Width of the trailing bit-length field: 8, or 16 for SHA-384/512.
    const LENGTH_LEN: usize;

    /// Mixes one `BLOCK_LEN`-byte block into `state`.
    fn compress(state: &mut Self::State, block: &[u8]);
}

/// Length-padded iteration of a [`Compression`] function.
///
/// Truncated variants (SHA-224, SHA-512/256, ...) are the same construction
/// with a different IV and a shorter `digest_len`.
#[derive(Clone)]
pub struct MerkleDamgard<C: Compression> {
    name: &'static str,
    iv: C::State,
    state: C::State,
    bit_len: u128,
    digest_len: usize,
}

impl<C: Compression> MerkleDamgard<C> {
    pub(crate) fn new(name: &'static str, iv: C::State, digest_len: usize) -> Self {
        debug_assert!(digest_len <= iv.as_ref().len() * C::Word::BYTES);
        Self { name, iv, state: iv, bit_len: 0, digest_len }
    }

    /// Message bits absorbed so far in whole blocks.
    #[inline]
    pub fn bit_len(&self) -> u128 {
        self.bit_len
    }
}

impl<C: Compression> DigestCore for MerkleDamgard<C> {
    #[inline]
    fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    fn block_len(&self) -> usize {
        C::BLOCK_LEN
    }

    #[inline]
    fn digest_len(&self) -> usize {
        self.digest_len
    }

    fn transform_block(&mut self, block: &[u8]) {
        C::compress(&mut self.state, block);
        self.bit_len = self.bit_len.wrapping_add(C::BLOCK_LEN as u128 * 8);
    }

    fn transform_final(&mut self, remaining: &mut [u8], remaining_len: usize, output: &mut [u8]) {
        assert!(remaining_len < C::BLOCK_LEN, "{} buffer overflow", self.name);
        let bit_len = self.bit_len.wrapping_add(remaining_len as u128 * 8);

        remaining[remaining_len] = 0x80;
        remaining[remaining_len + 1..].fill(0);

        let length_at = C::BLOCK_LEN - C::LENGTH_LEN;
        if remaining_len >= length_at {
            // No room left for the length field.
            C::compress(&mut self.state, remaining);
            remaining.fill(0);
        }

        let field = &mut remaining[length_at..];
        if C::LENGTH_LEN == 16 {
            C::Order::write_u128(field, bit_len);
        } else {
            C::Order::write_u64(field, bit_len as u64);
        }
        C::compress(&mut self.state, remaining);

        store_words::<C::Word, C::Order>(self.state.as_ref(), output);
    }

    fn reset_state(&mut self) {
        self.state = self.iv;
        self.bit_len = 0;
    }

    #[cfg(feature = "zeroize")]
    fn wipe(&mut self) {
        use zeroize::Zeroize;
        self.state.as_mut().zeroize();
        self.bit_len.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine::Hasher, Sha256DigestSize};
    use hex_literal::hex;

    #[test]
    fn length_field_spills_into_extra_block() {
        // 55 bytes still fit padding and length in one block; 56 do not.
        let mut hasher = Sha256Hasher::new(Sha256DigestSize::Bits256);
        hasher.update(&[b'a'; 55]);
        assert_eq!(hasher.digest(), hex!("9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318"));

        hasher.update(&[b'a'; 56]);
        assert_eq!(hasher.digest(), hex!("b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a"));
    }

    #[test]
    fn bit_len_counts_whole_blocks() {
        let mut hasher = Hasher::from_core(MerkleDamgard::<Sha1Compress>::sha1());
        hasher.update(&[0; 130]);
        assert_eq!(hasher.core().bit_len(), 2 * 512);
        hasher.reset();
        assert_eq!(hasher.core().bit_len(), 0);
    }

    #[cfg(feature = "zeroize")]
    #[test]
    fn wipe_zeroes_registers_not_iv() {
        let mut core = MerkleDamgard::<Sha512Compress>::sha512(crate::Sha512DigestSize::Bits512);
        core.transform_block(&[0x5a; 128]);
        core.wipe();
        assert_eq!(core.state, [0; 8]);
        assert_eq!(core.bit_len(), 0);
        assert_eq!(core.iv, IV_512);

        // A wiped core is usable again after a reset.
        core.reset_state();
        assert_eq!(core.state, IV_512);
    }
}
