use super::{Compression, MerkleDamgard};
use crate::{
    bytes::{load_words, LittleEndian},
    engine::Hasher,
};

const IV: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

/// `floor(abs(sin(i + 1)) * 2^32)`.
const K: [u32; 64] = [
    0xd76a_a478, 0xe8c7_b756, 0x2420_70db, 0xc1bd_ceee, 0xf57c_0faf, 0x4787_c62a, 0xa830_4613, 0xfd46_9501,
    0x6980_98d8, 0x8b44_f7af, 0xffff_5bb1, 0x895c_d7be, 0x6b90_1122, 0xfd98_7193, 0xa679_438e, 0x49b4_0821,
    0xf61e_2562, 0xc040_b340, 0x265e_5a51, 0xe9b6_c7aa, 0xd62f_105d, 0x0244_1453, 0xd8a1_e681, 0xe7d3_fbc8,
    0x21e1_cde6, 0xc337_07d6, 0xf4d5_0d87, 0x455a_14ed, 0xa9e3_e905, 0xfcef_a3f8, 0x676f_02d9, 0x8d2a_4c8a,
    0xfffa_3942, 0x8771_f681, 0x6d9d_6122, 0xfde5_380c, 0xa4be_ea44, 0x4bde_cfa9, 0xf6bb_4b60, 0xbebf_bc70,
    0x289b_7ec6, 0xeaa1_27fa, 0xd4ef_3085, 0x0488_1d05, 0xd9d4_d039, 0xe6db_99e5, 0x1fa2_7cf8, 0xc4ac_5665,
    0xf429_2244, 0x432a_ff97, 0xab94_23a7, 0xfc93_a039, 0x655b_59c3, 0x8f0c_cc92, 0xffef_f47d, 0x8584_5dd1,
    0x6fa8_7e4f, 0xfe2c_e6e0, 0xa301_4314, 0x4e08_11a1, 0xf753_7e82, 0xbd3a_f235, 0x2ad7_d2bb, 0xeb86_d391,
];

const SHIFT: [[u32; 4]; 4] = [[7, 12, 17, 22], [5, 9, 14, 20], [4, 11, 16, 23], [6, 10, 15, 21]];

/// MD5 compression (RFC 1321).
#[derive(Clone, Copy, Debug)]
pub struct Md5Compress;

/// Streaming MD5.
pub type Md5Hasher = Hasher<MerkleDamgard<Md5Compress>>;

impl Compression for Md5Compress {
    type Word = u32;
    type Order = LittleEndian;
    type State = [u32; 4];

    const BLOCK_LEN: usize = 64;
    const LENGTH_LEN: usize = 8;

    fn compress(state: &mut [u32; 4], block: &[u8]) {
        let mut x = [0u32; 16];
        load_words::<u32, LittleEndian>(block, &mut x);

        let [mut a, mut b, mut c, mut d] = *state;
        for (i, &k) in K.iter().enumerate() {
            let (f, g) = match i / 16 {
                0 => ((b & c) | (!b & d), i),
                1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
                2 => (b ^ c ^ d, (3 * i + 5) % 16),
                _ => (c ^ (b | !d), (7 * i) % 16),
            };
            let t = a.wrapping_add(f).wrapping_add(k).wrapping_add(x[g]).rotate_left(SHIFT[i / 16][i % 4]);
            a = d;
            d = c;
            c = b;
            b = b.wrapping_add(t);
        }

        for (s, v) in state.iter_mut().zip([a, b, c, d]) {
            *s = s.wrapping_add(v);
        }
    }
}

impl MerkleDamgard<Md5Compress> {
    /// MD5 with its standard IV.
    pub fn md5() -> Self {
        Self::new("MD5", IV, 16)
    }
}

impl Default for MerkleDamgard<Md5Compress> {
    fn default() -> Self {
        Self::md5()
    }
}

impl Md5Hasher {
    /// A fresh MD5 hasher.
    pub fn new() -> Self {
        Self::from_core(MerkleDamgard::md5())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn rfc1321_vectors() {
        let cases: [(&[u8], [u8; 16]); 6] = [
            (b"", hex!("d41d8cd98f00b204e9800998ecf8427e")),
            (b"a", hex!("0cc175b9c0f1b6a831c399e269772661")),
            (b"abc", hex!("900150983cd24fb0d6963f7d28e17f72")),
            (b"message digest", hex!("f96b697d7cb7938d525a2f31aaf161d0")),
            (b"abcdefghijklmnopqrstuvwxyz", hex!("c3fcd3d76192e4007dfb496cca67e13b")),
            (
                b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
                hex!("d174ab98d277d9f5a5611c2c9f419d9f"),
            ),
        ];
        let mut hasher = Md5Hasher::new();
        for (input, expected) in cases {
            hasher.update(input);
            assert_eq!(hasher.digest(), expected);
        }
    }
}
