//! Fixed-width word loads and stores, parameterized by byte order.

/// Byte order of an algorithm's words and length field.
pub trait ByteOrder {
    /// Reads a 32-bit word from the first 4 bytes of `bytes`.
    fn read_u32(bytes: &[u8]) -> u32;
    /// Reads a 64-bit word from the first 8 bytes of `bytes`.
    fn read_u64(bytes: &[u8]) -> u64;
    /// Writes `value` into the first 4 bytes of `out`.
    fn write_u32(out: &mut [u8], value: u32);
    /// Writes `value` into the first 8 bytes of `out`.
    fn write_u64(out: &mut [u8], value: u64);
    /// Writes `value` into the first 16 bytes of `out`.
    fn write_u128(out: &mut [u8], value: u128);
}

/// Most significant byte first (SHA-1, SHA-2).
#[derive(Clone, Copy, Debug)]
pub enum BigEndian {}

/// Least significant byte first (MD4, MD5, RIPEMD, BLAKE2, Keccak).
#[derive(Clone, Copy, Debug)]
pub enum LittleEndian {}

#[inline(always)]
fn array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    out
}

impl ByteOrder for BigEndian {
    #[inline(always)]
    fn read_u32(bytes: &[u8]) -> u32 {
        u32::from_be_bytes(array(bytes))
    }

    #[inline(always)]
    fn read_u64(bytes: &[u8]) -> u64 {
        u64::from_be_bytes(array(bytes))
    }

    #[inline(always)]
    fn write_u32(out: &mut [u8], value: u32) {
        out[..4].copy_from_slice(&value.to_be_bytes());
    }

    #[inline(always)]
    fn write_u64(out: &mut [u8], value: u64) {
        out[..8].copy_from_slice(&value.to_be_bytes());
    }

    #[inline(always)]
    fn write_u128(out: &mut [u8], value: u128) {
        out[..16].copy_from_slice(&value.to_be_bytes());
    }
}

impl ByteOrder for LittleEndian {
    #[inline(always)]
    fn read_u32(bytes: &[u8]) -> u32 {
        u32::from_le_bytes(array(bytes))
    }

    #[inline(always)]
    fn read_u64(bytes: &[u8]) -> u64 {
        u64::from_le_bytes(array(bytes))
    }

    #[inline(always)]
    fn write_u32(out: &mut [u8], value: u32) {
        out[..4].copy_from_slice(&value.to_le_bytes());
    }

    #[inline(always)]
    fn write_u64(out: &mut [u8], value: u64) {
        out[..8].copy_from_slice(&value.to_le_bytes());
    }

    #[inline(always)]
    fn write_u128(out: &mut [u8], value: u128) {
        out[..16].copy_from_slice(&value.to_le_bytes());
    }
}

/// Words that `zeroize` can clear.
#[cfg(feature = "zeroize")]
pub trait Wipe: zeroize::DefaultIsZeroes {}
#[cfg(feature = "zeroize")]
impl<T: zeroize::DefaultIsZeroes> Wipe for T {}

/// Words that `zeroize` can clear.
#[cfg(not(feature = "zeroize"))]
pub trait Wipe {}
#[cfg(not(feature = "zeroize"))]
impl<T> Wipe for T {}

/// A register word that can be serialized in either byte order.
pub trait Word: Copy + Wipe {
    /// Width in bytes.
    const BYTES: usize;
    /// Reads one word.
    fn read<O: ByteOrder>(bytes: &[u8]) -> Self;
    /// Writes one word.
    fn write<O: ByteOrder>(self, out: &mut [u8]);
}

impl Word for u32 {
    const BYTES: usize = 4;

    #[inline(always)]
    fn read<O: ByteOrder>(bytes: &[u8]) -> Self {
        O::read_u32(bytes)
    }

    #[inline(always)]
    fn write<O: ByteOrder>(self, out: &mut [u8]) {
        O::write_u32(out, self)
    }
}

impl Word for u64 {
    const BYTES: usize = 8;

    #[inline(always)]
    fn read<O: ByteOrder>(bytes: &[u8]) -> Self {
        O::read_u64(bytes)
    }

    #[inline(always)]
    fn write<O: ByteOrder>(self, out: &mut [u8]) {
        O::write_u64(out, self)
    }
}

/// Fills `words` from consecutive words of `block`.
#[inline(always)]
pub(crate) fn load_words<W: Word, O: ByteOrder>(block: &[u8], words: &mut [W]) {
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(W::BYTES)) {
        *word = W::read::<O>(chunk);
    }
}

/// Serializes `words` into `out`, stopping once `out` is full.
///
/// `out` may end in the middle of a word; that word is truncated.
pub(crate) fn store_words<W: Word, O: ByteOrder>(words: &[W], out: &mut [u8]) {
    let mut scratch = [0u8; 8];
    for (word, chunk) in words.iter().zip(out.chunks_mut(W::BYTES)) {
        word.write::<O>(&mut scratch);
        chunk.copy_from_slice(&scratch[..chunk.len()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_follow_byte_order() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(BigEndian::read_u32(&bytes), 0x0102_0304);
        assert_eq!(LittleEndian::read_u32(&bytes), 0x0403_0201);
        assert_eq!(BigEndian::read_u64(&bytes), 0x0102_0304_0506_0708);
        assert_eq!(LittleEndian::read_u64(&bytes), 0x0807_0605_0403_0201);
    }

    #[test]
    fn writes_follow_byte_order() {
        let mut out = [0u8; 8];
        BigEndian::write_u64(&mut out, 0x0102_0304_0506_0708);
        assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8]);
        LittleEndian::write_u32(&mut out, 0x0a0b_0c0d);
        assert_eq!(out, [0x0d, 0x0c, 0x0b, 0x0a, 5, 6, 7, 8]);
    }

    #[test]
    fn store_truncates_mid_word() {
        let words: [u64; 2] = [0x1122_3344_5566_7788, 0x99aa_bbcc_ddee_ff00];
        let mut out = [0u8; 12];
        store_words::<u64, BigEndian>(&words, &mut out);
        assert_eq!(out, [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc]);
    }

    #[test]
    fn load_reads_whole_block() {
        let block: [u8; 8] = [1, 0, 0, 0, 2, 0, 0, 0];
        let mut words = [0u32; 2];
        load_words::<u32, LittleEndian>(&block, &mut words);
        assert_eq!(words, [1, 2]);
    }
}
