use super::{Compression, MerkleDamgard};
use crate::{
    bytes::{load_words, LittleEndian},
    engine::Hasher,
};

const IV: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

/// Message word order per step.
const ORDER: [usize; 48] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, //
    0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15, //
    0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15,
];

const SHIFT: [[u32; 4]; 3] = [[3, 7, 11, 19], [3, 5, 9, 13], [3, 9, 11, 15]];

/// MD4 compression (RFC 1320).
#[derive(Clone, Copy, Debug)]
pub struct Md4Compress;

/// Streaming MD4.
pub type Md4Hasher = Hasher<MerkleDamgard<Md4Compress>>;

impl Compression for Md4Compress {
    type Word = u32;
    type Order = LittleEndian;
    type State = [u32; 4];

    const BLOCK_LEN: usize = 64;
    const LENGTH_LEN: usize = 8;

    fn compress(state: &mut [u32; 4], block: &[u8]) {
        let mut x = [0u32; 16];
        load_words::<u32, LittleEndian>(block, &mut x);

        let [mut a, mut b, mut c, mut d] = *state;
        for (i, &word) in ORDER.iter().enumerate() {
            let (f, k) = match i / 16 {
                0 => ((b & c) | (!b & d), 0),
                1 => ((b & c) | (b & d) | (c & d), 0x5a82_7999),
                _ => (b ^ c ^ d, 0x6ed9_eba1),
            };
            let t = a.wrapping_add(f).wrapping_add(x[word]).wrapping_add(k).rotate_left(SHIFT[i / 16][i % 4]);
            a = d;
            d = c;
            c = b;
            b = t;
        }

        for (s, v) in state.iter_mut().zip([a, b, c, d]) {
            *s = s.wrapping_add(v);
        }
    }
}

impl MerkleDamgard<Md4Compress> {
    /// MD4 with its standard IV.
    pub fn md4() -> Self {
        Self::new("MD4", IV, 16)
    }
}

impl Default for MerkleDamgard<Md4Compress> {
    fn default() -> Self {
        Self::md4()
    }
}

impl Md4Hasher {
    /// A fresh MD4 hasher.
    pub fn new() -> Self {
        Self::from_core(MerkleDamgard::md4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn rfc1320_vectors() {
        let cases: [(&[u8], [u8; 16]); 4] = [
            (b"", hex!("31d6cfe0d16ae931b73c59d7e0c089c0")),
            (b"a", hex!("bde52cb31de33e46245e05fbdbd6fb24")),
            (b"abc", hex!("a448017aaf21d8525fc10ae87aa6729d")),
            (b"message digest", hex!("d9130a8164549fe818874806e1c7014b")),
        ];
        let mut hasher = Md4Hasher::new();
        for (input, expected) in cases {
            hasher.update(input);
            assert_eq!(hasher.digest(), expected);
        }
    }

    #[test]
    fn eighty_digits() {
        let mut hasher = Md4Hasher::new();
        for _ in 0..8 {
            hasher.update(b"1234567890");
        }
        assert_eq!(hasher.digest(), hex!("e33b4ddc9c38f2199c3e7b164fcc0536"));
    }
}
