use super::{Compression, MerkleDamgard};
use crate::{
    bytes::{load_words, BigEndian},
    engine::Hasher,
};

const IV: [u32; 5] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

/// SHA-1 compression (FIPS 180-4).
#[derive(Clone, Copy, Debug)]
pub struct Sha1Compress;

/// Streaming SHA-1.
pub type Sha1Hasher = Hasher<MerkleDamgard<Sha1Compress>>;

impl Compression for Sha1Compress {
    type Word = u32;
    type Order = BigEndian;
    type State = [u32; 5];

    const BLOCK_LEN: usize = 64;
    const LENGTH_LEN: usize = 8;

    fn compress(state: &mut [u32; 5], block: &[u8]) {
        let mut w = [0u32; 80];
        load_words::<u32, BigEndian>(block, &mut w[..16]);
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = *state;
        for (i, &wi) in w.iter().enumerate() {
            let (f, k) = match i / 20 {
                0 => ((b & c) | (!b & d), 0x5a82_7999),
                1 => (b ^ c ^ d, 0x6ed9_eba1),
                2 => ((b & c) | (b & d) | (c & d), 0x8f1b_bcdc),
                _ => (b ^ c ^ d, 0xca62_c1d6),
            };
            let t = a.rotate_left(5).wrapping_add(f).wrapping_add(e).wrapping_add(k).wrapping_add(wi);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = t;
        }

        for (s, v) in state.iter_mut().zip([a, b, c, d, e]) {
            *s = s.wrapping_add(v);
        }
    }
}

impl MerkleDamgard<Sha1Compress> {
    /// SHA-1 with its standard IV.
    pub fn sha1() -> Self {
        Self::new("SHA-1", IV, 20)
    }
}

impl Default for MerkleDamgard<Sha1Compress> {
    fn default() -> Self {
        Self::sha1()
    }
}

impl Sha1Hasher {
    /// A fresh SHA-1 hasher.
    pub fn new() -> Self {
        Self::from_core(MerkleDamgard::sha1())
    }
}
