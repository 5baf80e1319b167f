//! BLAKE2b and BLAKE2s (RFC 7693), keyed or unkeyed, with any digest size
//! up to the word-state width.
//!
//! Both are lazy cores: the final block must be compressed with the
//! finalization flag set, so a full buffer is only compressed once more
//! input shows it was not the last one.

use crate::{
    bytes::{load_words, store_words, LittleEndian},
    engine::{BufferKind, DigestCore, Hasher},
    md::{IV_256, IV_512},
    Error, Result,
};
use digest::{InvalidBufferSize, InvalidOutputSize, VariableOutput, VariableOutputReset};

/// Message word schedule; rounds past the tenth wrap around.
#[rustfmt::skip]
const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

macro_rules! blake2_core {
    (
        $(#[$attr:meta])*
        $core:ident, $hasher:ident, $alg:literal,
        word: $word:ty,
        block: $block_len:literal,
        max: $max_len:literal,
        rounds: $rounds:literal,
        iv: $iv:expr,
        rotations: [$r1:literal, $r2:literal, $r3:literal, $r4:literal] $(,)?
    ) => {
        $(#[$attr])*
        #[derive(Clone)]
        pub struct $core {
            h: [$word; 8],
            t: [$word; 2],
            digest_len: usize,
            key_len: usize,
            key_block: [u8; $block_len],
        }

        #[doc = concat!("Streaming ", $alg, ".")]
        pub type $hasher = Hasher<$core>;

        impl $core {
            /// Block size in bytes.
            pub const BLOCK_LEN: usize = $block_len;
            /// Largest digest size in bytes.
            pub const MAX_DIGEST_LEN: usize = $max_len;
            /// Largest key size in bytes.
            pub const MAX_KEY_LEN: usize = $max_len;

            /// Configures a digest of `digest_len` bytes, keyed when `key`
            /// is non-empty.
            pub fn new(digest_len: usize, key: &[u8]) -> Result<Self> {
                if digest_len == 0 || digest_len > $max_len {
                    tracing::debug!(algorithm = $alg, digest_len, "unsupported digest size");
                    return Err(Error::UnsupportedDigestSize { algorithm: $alg, size: digest_len });
                }
                if key.len() > $max_len {
                    tracing::debug!(algorithm = $alg, key_len = key.len(), "key too long");
                    return Err(Error::InvalidKeySize { algorithm: $alg, size: key.len(), max: $max_len });
                }

                let mut key_block = [0u8; $block_len];
                key_block[..key.len()].copy_from_slice(key);
                let mut core = Self { h: [0; 8], t: [0; 2], digest_len, key_len: key.len(), key_block };
                core.reset_state();
                Ok(core)
            }

            /// Whether a key block is absorbed ahead of the message.
            #[inline]
            pub fn is_keyed(&self) -> bool {
                self.key_len != 0
            }

            #[inline(always)]
            fn g(v: &mut [$word; 16], a: usize, b: usize, c: usize, d: usize, x: $word, y: $word) {
                v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
                v[d] = (v[d] ^ v[a]).rotate_right($r1);
                v[c] = v[c].wrapping_add(v[d]);
                v[b] = (v[b] ^ v[c]).rotate_right($r2);
                v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
                v[d] = (v[d] ^ v[a]).rotate_right($r3);
                v[c] = v[c].wrapping_add(v[d]);
                v[b] = (v[b] ^ v[c]).rotate_right($r4);
            }

            fn increment_counter(&mut self, bytes: usize) {
                let (t0, carry) = self.t[0].overflowing_add(bytes as $word);
                self.t[0] = t0;
                self.t[1] = self.t[1].wrapping_add(<$word>::from(carry));
            }

            fn compress(&mut self, block: &[u8], last: bool) {
                let mut m: [$word; 16] = [0; 16];
                load_words::<$word, LittleEndian>(block, &mut m);

                let mut v: [$word; 16] = [0; 16];
                v[..8].copy_from_slice(&self.h);
                v[8..].copy_from_slice(&$iv);
                v[12] ^= self.t[0];
                v[13] ^= self.t[1];
                if last {
                    v[14] = !v[14];
                }

                for round in 0..$rounds {
                    let s = &SIGMA[round % 10];
                    Self::g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
                    Self::g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
                    Self::g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
                    Self::g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);
                    Self::g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
                    Self::g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
                    Self::g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
                    Self::g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
                }

                for (i, h) in self.h.iter_mut().enumerate() {
                    *h ^= v[i] ^ v[i + 8];
                }
            }
        }

        impl Default for $core {
            /// Unkeyed, full-width digest.
            fn default() -> Self {
                let mut core = Self {
                    h: [0; 8],
                    t: [0; 2],
                    digest_len: $max_len,
                    key_len: 0,
                    key_block: [0; $block_len],
                };
                core.reset_state();
                core
            }
        }

        impl DigestCore for $core {
            #[inline]
            fn name(&self) -> &'static str {
                $alg
            }

            #[inline]
            fn block_len(&self) -> usize {
                $block_len
            }

            #[inline]
            fn digest_len(&self) -> usize {
                self.digest_len
            }

            #[inline]
            fn buffer_kind(&self) -> BufferKind {
                BufferKind::Lazy
            }

            fn transform_block(&mut self, block: &[u8]) {
                self.increment_counter($block_len);
                self.compress(block, false);
            }

            fn transform_final(&mut self, remaining: &mut [u8], remaining_len: usize, output: &mut [u8]) {
                assert!(remaining_len <= $block_len, "{} buffer overflow", $alg);
                remaining[remaining_len..].fill(0);
                self.increment_counter(remaining_len);
                self.compress(remaining, true);
                store_words::<$word, LittleEndian>(&self.h, output);
            }

            fn reset_state(&mut self) {
                self.h = $iv;
                // Parameter block word 0: digest length, key length, fanout 1, depth 1.
                self.h[0] ^= 0x0101_0000 ^ ((self.key_len as $word) << 8) ^ (self.digest_len as $word);
                self.t = [0; 2];
            }

            fn prefix_block(&self) -> Option<&[u8]> {
                self.is_keyed().then_some(&self.key_block[..])
            }

            #[cfg(feature = "zeroize")]
            fn wipe(&mut self) {
                use zeroize::Zeroize;

                self.h.zeroize();
                self.t.zeroize();
                self.key_block.zeroize();
            }
        }

        #[cfg(feature = "zeroize")]
        impl Drop for $core {
            fn drop(&mut self) {
                self.wipe();
            }
        }

        impl $hasher {
            /// An unkeyed hasher producing `digest_len` bytes.
            pub fn new(digest_len: usize) -> Result<Self> {
                Ok(Self::from_core($core::new(digest_len, &[])?))
            }

            /// A keyed hasher producing `digest_len` bytes.
            pub fn keyed(digest_len: usize, key: &[u8]) -> Result<Self> {
                Ok(Self::from_core($core::new(digest_len, key)?))
            }
        }

        impl VariableOutput for $hasher {
            const MAX_OUTPUT_SIZE: usize = $max_len;

            fn new(output_size: usize) -> core::result::Result<Self, InvalidOutputSize> {
                $core::new(output_size, &[]).map(Self::from_core).map_err(|_| InvalidOutputSize)
            }

            fn output_size(&self) -> usize {
                self.digest_len()
            }

            fn finalize_variable(mut self, out: &mut [u8]) -> core::result::Result<(), InvalidBufferSize> {
                self.finalize_variable_reset(out)
            }
        }

        impl VariableOutputReset for $hasher {
            fn finalize_variable_reset(&mut self, out: &mut [u8]) -> core::result::Result<(), InvalidBufferSize> {
                if out.len() != self.digest_len() {
                    return Err(InvalidBufferSize);
                }
                self.finalize_into(out);
                Ok(())
            }
        }
    };
}

blake2_core! {
    /// BLAKE2b: 64-bit words, 128-byte blocks, 12 rounds, digests up to 64 bytes.
    Blake2bCore, Blake2bHasher, "BLAKE2b",
    word: u64,
    block: 128,
    max: 64,
    rounds: 12,
    iv: IV_512,
    rotations: [32, 24, 16, 63],
}

blake2_core! {
    /// BLAKE2s: 32-bit words, 64-byte blocks, 10 rounds, digests up to 32 bytes.
    Blake2sCore, Blake2sHasher, "BLAKE2s",
    word: u32,
    block: 64,
    max: 32,
    rounds: 10,
    iv: IV_256,
    rotations: [16, 12, 8, 7],
}
