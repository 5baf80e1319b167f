//! RIPEMD-128 and RIPEMD-160: two parallel lines of rounds over the same
//! message block, recombined crosswise into the chaining state.

use super::{Compression, MerkleDamgard};
use crate::{
    bytes::{load_words, LittleEndian},
    engine::Hasher,
};

const IV_128: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];
const IV_160: [u32; 5] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

#[rustfmt::skip]
const R_LEFT: [usize; 80] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8,
    3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12,
    1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2,
    4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,
];

#[rustfmt::skip]
const R_RIGHT: [usize; 80] = [
    5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12,
    6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2,
    15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13,
    8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14,
    12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
];

#[rustfmt::skip]
const S_LEFT: [u32; 80] = [
    11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8,
    7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12,
    11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5,
    11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12,
    9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,
];

#[rustfmt::skip]
const S_RIGHT: [u32; 80] = [
    8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6,
    9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11,
    9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5,
    15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8,
    8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
];

const K_LEFT: [u32; 5] = [0, 0x5a82_7999, 0x6ed9_eba1, 0x8f1b_bcdc, 0xa953_fd4e];
const K_RIGHT_128: [u32; 4] = [0x50a2_8be6, 0x5c4d_d124, 0x6d70_3ef3, 0];
const K_RIGHT_160: [u32; 5] = [0x50a2_8be6, 0x5c4d_d124, 0x6d70_3ef3, 0x7a6d_76e9, 0];

/// The five boolean functions, selected by round.
#[inline(always)]
fn f(round: usize, x: u32, y: u32, z: u32) -> u32 {
    match round {
        0 => x ^ y ^ z,
        1 => (x & y) | (!x & z),
        2 => (x | !y) ^ z,
        3 => (x & z) | (y & !z),
        _ => x ^ (y | !z),
    }
}

/// RIPEMD-128 compression.
#[derive(Clone, Copy, Debug)]
pub struct Ripemd128Compress;

/// Streaming RIPEMD-128.
pub type Ripemd128Hasher = Hasher<MerkleDamgard<Ripemd128Compress>>;

impl Compression for Ripemd128Compress {
    type Word = u32;
    type Order = LittleEndian;
    type State = [u32; 4];

    const BLOCK_LEN: usize = 64;
    const LENGTH_LEN: usize = 8;

    fn compress(state: &mut [u32; 4], block: &[u8]) {
        let mut x = [0u32; 16];
        load_words::<u32, LittleEndian>(block, &mut x);

        let [mut al, mut bl, mut cl, mut dl] = *state;
        let [mut ar, mut br, mut cr, mut dr] = *state;
        for i in 0..64 {
            let round = i / 16;

            let t = al
                .wrapping_add(f(round, bl, cl, dl))
                .wrapping_add(x[R_LEFT[i]])
                .wrapping_add(K_LEFT[round])
                .rotate_left(S_LEFT[i]);
            al = dl;
            dl = cl;
            cl = bl;
            bl = t;

            let t = ar
                .wrapping_add(f(3 - round, br, cr, dr))
                .wrapping_add(x[R_RIGHT[i]])
                .wrapping_add(K_RIGHT_128[round])
                .rotate_left(S_RIGHT[i]);
            ar = dr;
            dr = cr;
            cr = br;
            br = t;
        }

        let t = state[1].wrapping_add(cl).wrapping_add(dr);
        state[1] = state[2].wrapping_add(dl).wrapping_add(ar);
        state[2] = state[3].wrapping_add(al).wrapping_add(br);
        state[3] = state[0].wrapping_add(bl).wrapping_add(cr);
        state[0] = t;
    }
}

/// RIPEMD-160 compression.
#[derive(Clone, Copy, Debug)]
pub struct Ripemd160Compress;

/// Streaming RIPEMD-160.
pub type Ripemd160Hasher = Hasher<MerkleDamgard<Ripemd160Compress>>;

impl Compression for Ripemd160Compress {
    type Word = u32;
    type Order = LittleEndian;
    type State = [u32; 5];

    const BLOCK_LEN: usize = 64;
    const LENGTH_LEN: usize = 8;

    fn compress(state: &mut [u32; 5], block: &[u8]) {
        let mut x = [0u32; 16];
        load_words::<u32, LittleEndian>(block, &mut x);

        let [mut al, mut bl, mut cl, mut dl, mut el] = *state;
        let [mut ar, mut br, mut cr, mut dr, mut er] = *state;
        for i in 0..80 {
            let round = i / 16;

            let t = al
                .wrapping_add(f(round, bl, cl, dl))
                .wrapping_add(x[R_LEFT[i]])
                .wrapping_add(K_LEFT[round])
                .rotate_left(S_LEFT[i])
                .wrapping_add(el);
            al = el;
            el = dl;
            dl = cl.rotate_left(10);
            cl = bl;
            bl = t;

            let t = ar
                .wrapping_add(f(4 - round, br, cr, dr))
                .wrapping_add(x[R_RIGHT[i]])
                .wrapping_add(K_RIGHT_160[round])
                .rotate_left(S_RIGHT[i])
                .wrapping_add(er);
            ar = er;
            er = dr;
            dr = cr.rotate_left(10);
            cr = br;
            br = t;
        }

        let t = state[1].wrapping_add(cl).wrapping_add(dr);
        state[1] = state[2].wrapping_add(dl).wrapping_add(er);
        state[2] = state[3].wrapping_add(el).wrapping_add(ar);
        state[3] = state[4].wrapping_add(al).wrapping_add(br);
        state[4] = state[0].wrapping_add(bl).wrapping_add(cr);
        state[0] = t;
    }
}

impl MerkleDamgard<Ripemd128Compress> {
    /// RIPEMD-128 with its standard IV.
    pub fn ripemd128() -> Self {
        Self::new("RIPEMD-128", IV_128, 16)
    }
}

impl Default for MerkleDamgard<Ripemd128Compress> {
    fn default() -> Self {
        Self::ripemd128()
    }
}

impl MerkleDamgard<Ripemd160Compress> {
    /// RIPEMD-160 with its standard IV.
    pub fn ripemd160() -> Self {
        Self::new("RIPEMD-160", IV_160, 20)
    }
}

impl Default for MerkleDamgard<Ripemd160Compress> {
    fn default() -> Self {
        Self::ripemd160()
    }
}

impl Ripemd128Hasher {
    /// A fresh RIPEMD-128 hasher.
    pub fn new() -> Self {
        Self::from_core(MerkleDamgard::ripemd128())
    }
}

impl Ripemd160Hasher {
    /// A fresh RIPEMD-160 hasher.
    pub fn new() -> Self {
        Self::from_core(MerkleDamgard::ripemd160())
    }
}
