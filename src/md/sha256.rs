use super::{Compression, MerkleDamgard};
use crate::{
    bytes::{load_words, BigEndian},
    engine::Hasher,
    Sha256DigestSize,
};

const IV_224: [u32; 8] =
    [0xc105_9ed8, 0x367c_d507, 0x3070_dd17, 0xf70e_5939, 0xffc0_0b31, 0x6858_1511, 0x64f9_8fa7, 0xbefa_4fa4];

pub(crate) const IV_256: [u32; 8] =
    [0x6a09_e667, 0xbb67_ae85, 0x3c6e_f372, 0xa54f_f53a, 0x510e_527f, 0x9b05_688c, 0x1f83_d9ab, 0x5be0_cd19];

const K: [u32; 64] = [
    0x428a_2f98, 0x7137_4491, 0xb5c0_fbcf, 0xe9b5_dba5, 0x3956_c25b, 0x59f1_11f1, 0x923f_82a4, 0xab1c_5ed5,
    0xd807_aa98, 0x1283_5b01, 0x2431_85be, 0x550c_7dc3, 0x72be_5d74, 0x80de_b1fe, 0x9bdc_06a7, 0xc19b_f174,
    0xe49b_69c1, 0xefbe_4786, 0x0fc1_9dc6, 0x240c_a1cc, 0x2de9_2c6f, 0x4a74_84aa, 0x5cb0_a9dc, 0x76f9_88da,
    0x983e_5152, 0xa831_c66d, 0xb003_27c8, 0xbf59_7fc7, 0xc6e0_0bf3, 0xd5a7_9147, 0x06ca_6351, 0x1429_2967,
    0x27b7_0a85, 0x2e1b_2138, 0x4d2c_6dfc, 0x5338_0d13, 0x650a_7354, 0x766a_0abb, 0x81c2_c92e, 0x9272_2c85,
    0xa2bf_e8a1, 0xa81a_664b, 0xc24b_8b70, 0xc76c_51a3, 0xd192_e819, 0xd699_0624, 0xf40e_3585, 0x106a_a070,
    0x19a4_c116, 0x1e37_6c08, 0x2748_774c, 0x34b0_bcb5, 0x391c_0cb3, 0x4ed8_aa4a, 0x5b9c_ca4f, 0x682e_6ff3,
    0x748f_82ee, 0x78a5_636f, 0x84c8_7814, 0x8cc7_0208, 0x90be_fffa, 0xa450_6ceb, 0xbef9_a3f7, 0xc671_78f2,
];

/// SHA-256 compression, shared by SHA-224 (FIPS 180-4).
#[derive(Clone, Copy, Debug)]
pub struct Sha256Compress;

/// Streaming SHA-224/SHA-256.
pub type Sha256Hasher = Hasher<MerkleDamgard<Sha256Compress>>;

impl Compression for Sha256Compress {
    type Word = u32;
    type Order = BigEndian;
    type State = [u32; 8];

    const BLOCK_LEN: usize = 64;
    const LENGTH_LEN: usize = 8;

    fn compress(state: &mut [u32; 8], block: &[u8]) {
        let mut w = [0u32; 64];
        load_words::<u32, BigEndian>(block, &mut w[..16]);
        for i in 16..64 {
            let s0 = w[i - 15].rotate_right(7) ^ w[i - 15].rotate_right(18) ^ (w[i - 15] >> 3);
            let s1 = w[i - 2].rotate_right(17) ^ w[i - 2].rotate_right(19) ^ (w[i - 2] >> 10);
            w[i] = w[i - 16].wrapping_add(s0).wrapping_add(w[i - 7]).wrapping_add(s1);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
        for (&k, &wi) in K.iter().zip(&w) {
            let s1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
            let ch = (e & f) ^ (!e & g);
            let t1 = h.wrapping_add(s1).wrapping_add(ch).wrapping_add(k).wrapping_add(wi);
            let s0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
            let maj = (a & b) ^ (a & c) ^ (b & c);
            let t2 = s0.wrapping_add(maj);

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
            *s = s.wrapping_add(v);
        }
    }
}

impl MerkleDamgard<Sha256Compress> {
    /// SHA-224 or SHA-256.
    pub fn sha256(size: Sha256DigestSize) -> Self {
        let iv = match size {
            Sha256DigestSize::Bits224 => IV_224,
            Sha256DigestSize::Bits256 => IV_256,
        };
        Self::new(size.name(), iv, size.digest_len())
    }
}

impl Default for MerkleDamgard<Sha256Compress> {
    fn default() -> Self {
        Self::sha256(Sha256DigestSize::default())
    }
}

impl Sha256Hasher {
    /// A fresh SHA-224 or SHA-256 hasher.
    pub fn new(size: Sha256DigestSize) -> Self {
        Self::from_core(MerkleDamgard::sha256(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn sha256_vectors() {
        let mut hasher = Sha256Hasher::new(Sha256DigestSize::Bits256);
        assert_eq!(hasher.digest(), hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"));

        hasher.update(b"abc");
        assert_eq!(hasher.digest(), hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"));

        hasher.update(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq");
        assert_eq!(hasher.digest(), hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"));
    }

    #[test]
    fn sha224_vectors() {
        let mut hasher = Sha256Hasher::new(Sha256DigestSize::Bits224);
        assert_eq!(hasher.digest_len(), 28);
        assert_eq!(hasher.name(), "SHA-224");
        assert_eq!(hasher.digest(), hex!("d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"));

        hasher.update(b"abc");
        assert_eq!(hasher.digest(), hex!("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"));
    }
}
