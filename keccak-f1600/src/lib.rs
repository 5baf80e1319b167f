//! Portable Keccak-f[1600] permutation and raw sponge helpers.
//!
//! This crate only knows about the 1600-bit state and its 24-round
//! permutation. Padding, domain separation and buffering live in the
//! `polydigest` crate on top of it.
//!
//! The state is a [`Buffer`] of 25 lanes, lane `(x, y)` stored at index
//! `x + 5 * y`. Bytes map onto lanes little-endian.

#![no_std]
#![warn(missing_docs, rust_2018_idioms)]

use cfg_if::cfg_if;

/// Keccak-f[1600] state buffer.
pub type Buffer = [u64; 25];

/// Number of rounds of Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// Width of the state in bytes.
pub const STATE_BYTES: usize = 200;

/// Iota round constants.
pub const RC: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rho rotation offsets, indexed by `x + 5 * y`.
pub const RHO: [u32; 25] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

#[inline(always)]
const fn index(x: usize, y: usize) -> usize {
    (x % 5) + 5 * (y % 5)
}

/// Keccak-f[1600] written step by step over the lane array.
///
/// This is the reference form: every step mirrors its definition in
/// FIPS 202 section 3.2.
pub fn keccak_f1600_indexed(a: &mut Buffer) {
    let mut c = [0u64; 5];
    let mut b = [0u64; 25];

    for rc in RC {
        // theta
        for x in 0..5 {
            c[x] = a[index(x, 0)] ^ a[index(x, 1)] ^ a[index(x, 2)] ^ a[index(x, 3)] ^ a[index(x, 4)];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                a[index(x, y)] ^= d;
            }
        }

        // rho and pi
        for y in 0..5 {
            for x in 0..5 {
                b[index(y, 2 * x + 3 * y)] = a[index(x, y)].rotate_left(RHO[index(x, y)]);
            }
        }

        // chi
        for y in 0..5 {
            for x in 0..5 {
                a[index(x, y)] = b[index(x, y)] ^ (!b[index(x + 1, y)] & b[index(x + 2, y)]);
            }
        }

        // iota
        a[0] ^= rc;
    }
}

/// Keccak-f[1600] with every lane held in a local variable.
///
/// Functionally identical to [`keccak_f1600_indexed`].
pub fn keccak_f1600_unrolled(a: &mut Buffer) {
    let [
        mut aba, mut abe, mut abi, mut abo, mut abu,
        mut aga, mut age, mut agi, mut ago, mut agu,
        mut aka, mut ake, mut aki, mut ako, mut aku,
        mut ama, mut ame, mut ami, mut amo, mut amu,
        mut asa, mut ase, mut asi, mut aso, mut asu,
    ] = *a;

    for rc in RC {
        let ca = aba ^ aga ^ aka ^ ama ^ asa;
        let ce = abe ^ age ^ ake ^ ame ^ ase;
        let ci = abi ^ agi ^ aki ^ ami ^ asi;
        let co = abo ^ ago ^ ako ^ amo ^ aso;
        let cu = abu ^ agu ^ aku ^ amu ^ asu;

        let ta = cu ^ ce.rotate_left(1);
        let te = ca ^ ci.rotate_left(1);
        let ti = ce ^ co.rotate_left(1);
        let to = ci ^ cu.rotate_left(1);
        let tu = co ^ ca.rotate_left(1);

        let bba = aba ^ ta;
        let bbe = (age ^ te).rotate_left(44);
        let bbi = (aki ^ ti).rotate_left(43);
        let bbo = (amo ^ to).rotate_left(21);
        let bbu = (asu ^ tu).rotate_left(14);
        let bga = (abo ^ to).rotate_left(28);
        let bge = (agu ^ tu).rotate_left(20);
        let bgi = (aka ^ ta).rotate_left(3);
        let bgo = (ame ^ te).rotate_left(45);
        let bgu = (asi ^ ti).rotate_left(61);
        let bka = (abe ^ te).rotate_left(1);
        let bke = (agi ^ ti).rotate_left(6);
        let bki = (ako ^ to).rotate_left(25);
        let bko = (amu ^ tu).rotate_left(8);
        let bku = (asa ^ ta).rotate_left(18);
        let bma = (abu ^ tu).rotate_left(27);
        let bme = (aga ^ ta).rotate_left(36);
        let bmi = (ake ^ te).rotate_left(10);
        let bmo = (ami ^ ti).rotate_left(15);
        let bmu = (aso ^ to).rotate_left(56);
        let bsa = (abi ^ ti).rotate_left(62);
        let bse = (ago ^ to).rotate_left(55);
        let bsi = (aku ^ tu).rotate_left(39);
        let bso = (ama ^ ta).rotate_left(41);
        let bsu = (ase ^ te).rotate_left(2);

        aba = bba ^ (!bbe & bbi);
        abe = bbe ^ (!bbi & bbo);
        abi = bbi ^ (!bbo & bbu);
        abo = bbo ^ (!bbu & bba);
        abu = bbu ^ (!bba & bbe);
        aga = bga ^ (!bge & bgi);
        age = bge ^ (!bgi & bgo);
        agi = bgi ^ (!bgo & bgu);
        ago = bgo ^ (!bgu & bga);
        agu = bgu ^ (!bga & bge);
        aka = bka ^ (!bke & bki);
        ake = bke ^ (!bki & bko);
        aki = bki ^ (!bko & bku);
        ako = bko ^ (!bku & bka);
        aku = bku ^ (!bka & bke);
        ama = bma ^ (!bme & bmi);
        ame = bme ^ (!bmi & bmo);
        ami = bmi ^ (!bmo & bmu);
        amo = bmo ^ (!bmu & bma);
        amu = bmu ^ (!bma & bme);
        asa = bsa ^ (!bse & bsi);
        ase = bse ^ (!bsi & bso);
        asi = bsi ^ (!bso & bsu);
        aso = bso ^ (!bsu & bsa);
        asu = bsu ^ (!bsa & bse);

        aba ^= rc;
    }

    *a = [
        aba, abe, abi, abo, abu, aga, age, agi, ago, agu, aka, ake, aki, ako, aku, ama, ame, ami,
        amo, amu, asa, ase, asi, aso, asu,
    ];
}

cfg_if! {
    if #[cfg(feature = "unroll")] {
        /// Keccak-f[1600], backed by [`keccak_f1600_unrolled`].
        #[inline(always)]
        pub fn keccak_f1600(a: &mut Buffer) {
            keccak_f1600_unrolled(a)
        }
    } else {
        /// Keccak-f[1600], backed by [`keccak_f1600_indexed`].
        #[inline(always)]
        pub fn keccak_f1600(a: &mut Buffer) {
            keccak_f1600_indexed(a)
        }
    }
}

/// XORs `bytes` into the state starting at byte 0, little-endian per lane.
///
/// # Panics
///
/// Panics if `bytes` is longer than the 200-byte state.
#[inline]
pub fn xor_bytes(a: &mut Buffer, bytes: &[u8]) {
    assert!(bytes.len() <= STATE_BYTES, "input wider than the Keccak state");
    let mut lanes = bytes.chunks_exact(8);
    for (lane, chunk) in a.iter_mut().zip(&mut lanes) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *lane ^= u64::from_le_bytes(word);
    }
    let tail = lanes.remainder();
    let lane = bytes.len() / 8;
    for (i, &byte) in tail.iter().enumerate() {
        a[lane] ^= u64::from(byte) << (8 * i);
    }
}

/// Copies state bytes `[offset, offset + out.len())` into `out`.
///
/// # Panics
///
/// Panics if the range extends past the 200-byte state.
#[inline]
pub fn extract_bytes(a: &Buffer, offset: usize, out: &mut [u8]) {
    assert!(offset + out.len() <= STATE_BYTES, "range wider than the Keccak state");
    for (i, byte) in out.iter_mut().enumerate() {
        let pos = offset + i;
        *byte = (a[pos / 8] >> (8 * (pos % 8))) as u8;
    }
}

#[inline(always)]
fn check_rate(r: usize) {
    assert!(r > 0 && r < STATE_BYTES && r % 8 == 0, "invalid sponge rate: {r}");
}

/// Absorbs every full `r`-byte block of `inp`, permuting after each one.
///
/// `r` is the rate (block size) of the function in bytes. Returns the number
/// of trailing bytes that did not fill a block and were left unabsorbed.
pub fn sha3_absorb(a: &mut Buffer, inp: &[u8], r: usize) -> usize {
    check_rate(r);
    let mut blocks = inp.chunks_exact(r);
    for block in &mut blocks {
        xor_bytes(a, block);
        keccak_f1600(a);
    }
    blocks.remainder().len()
}

/// Squeezes `out.len()` bytes, permuting between every `r`-byte block.
///
/// The first block is read from the state as is; callers absorb their final
/// padded block with [`sha3_absorb`] first.
pub fn sha3_squeeze(a: &mut Buffer, out: &mut [u8], r: usize) {
    check_rate(r);
    for (i, chunk) in out.chunks_mut(r).enumerate() {
        if i != 0 {
            keccak_f1600(a);
        }
        extract_bytes(a, 0, chunk);
    }
}

/// One-shot sponge over a fresh state.
///
/// `suffix` is the domain separation byte (`0x01` Keccak, `0x06` SHA-3,
/// `0x1f` SHAKE). One-shot variants look as follows:
///
/// ```text
/// SHA3_224     sha3_sponge(inp, &mut out[..28], (1600 - 448) / 8, 0x06)
/// SHA3_256     sha3_sponge(inp, &mut out[..32], (1600 - 512) / 8, 0x06)
/// SHA3_384     sha3_sponge(inp, &mut out[..48], (1600 - 768) / 8, 0x06)
/// SHA3_512     sha3_sponge(inp, &mut out[..64], (1600 - 1024) / 8, 0x06)
/// SHAKE_128    sha3_sponge(inp, &mut out[..d], (1600 - 256) / 8, 0x1f)
/// SHAKE_256    sha3_sponge(inp, &mut out[..d], (1600 - 512) / 8, 0x1f)
/// ```
pub fn sha3_sponge(inp: &[u8], out: &mut [u8], r: usize, suffix: u8) {
    let mut a: Buffer = [0; 25];
    let rem = sha3_absorb(&mut a, inp, r);
    let tail = inp.len() - rem;

    // pad10*1 applied directly to the lanes; both bytes may land on the
    // same position when `rem == r - 1`.
    xor_bytes(&mut a, &inp[tail..]);
    a[rem / 8] ^= u64::from(suffix) << (8 * (rem % 8));
    a[(r - 1) / 8] ^= 0x80u64 << (8 * ((r - 1) % 8));
    keccak_f1600(&mut a);

    sha3_squeeze(&mut a, out, r);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keccakf1600_zero_state() {
        let mut a: Buffer = [0; 25];
        keccak_f1600_indexed(&mut a);
        assert_eq!(a[0], 0xf125_8f79_40e1_dde7);
        assert_eq!(a[1], 0x84d5_ccf9_33c0_478a);
    }

    #[test]
    fn unrolled_matches_indexed() {
        let mut indexed: Buffer = core::array::from_fn(|i| (i as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15));
        let mut unrolled = indexed;
        for _ in 0..3 {
            keccak_f1600_indexed(&mut indexed);
            keccak_f1600_unrolled(&mut unrolled);
            assert_eq!(indexed, unrolled);
        }
    }

    #[test]
    fn permutation_changes_state() {
        let mut buffer: Buffer = core::array::from_fn(|i| [1, 2, 3, 4, 5][i % 5]);
        let cpy = buffer;
        keccak_f1600(&mut buffer);
        assert_ne!(buffer, cpy);
    }

    #[test]
    fn xor_then_extract_is_identity_on_zero_state() {
        let mut a: Buffer = [0; 25];
        let bytes: [u8; 13] = core::array::from_fn(|i| i as u8 + 1);
        xor_bytes(&mut a, &bytes);
        assert_eq!(a[0], 0x0807_0605_0403_0201);

        let mut out = [0u8; 13];
        extract_bytes(&a, 0, &mut out);
        assert_eq!(out, bytes);

        let mut shifted = [0u8; 4];
        extract_bytes(&a, 9, &mut shifted);
        assert_eq!(shifted, [10, 11, 12, 13]);
    }

    #[test]
    fn absorb_reports_leftover() {
        let mut a: Buffer = [0; 25];
        assert_eq!(sha3_absorb(&mut a, &[0u8; 300], 136), 28);
        assert_eq!(sha3_absorb(&mut a, &[], 136), 0);
    }

    #[test]
    fn sponge_sha3_256_empty() {
        let mut out = [0u8; 32];
        sha3_sponge(b"", &mut out, 136, 0x06);
        assert_eq!(
            out,
            [
                0xa7, 0xff, 0xc6, 0xf8, 0xbf, 0x1e, 0xd7, 0x66, 0x51, 0xc1, 0x47, 0x56, 0xa0, 0x61,
                0xd6, 0x62, 0xf5, 0x80, 0xff, 0x4d, 0xe4, 0x3b, 0x49, 0xfa, 0x82, 0xd8, 0x0a, 0x4b,
                0x80, 0xf8, 0x43, 0x4a,
            ]
        );
    }

    #[test]
    fn sponge_shake128_squeezes_past_rate() {
        let mut long = [0u8; 400];
        sha3_sponge(b"", &mut long, 168, 0x1f);
        let mut short = [0u8; 32];
        sha3_sponge(b"", &mut short, 168, 0x1f);
        assert_eq!(&long[..32], &short);
        assert_eq!(
            short[..8],
            [0x7f, 0x9c, 0x2b, 0xa4, 0xe8, 0x8f, 0x82, 0x7d]
        );
    }
}
