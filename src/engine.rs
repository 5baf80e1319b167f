//! Block buffering shared by every algorithm.
//!
//! A [`DigestCore`] only ever sees whole blocks plus one final call carrying
//! the trailing partial block; [`Hasher`] turns arbitrarily chunked input
//! into that shape and handles the digest/reset lifecycle.

use crate::{Error, Result};
use alloc::{vec, vec::Vec};
use core::{cmp, fmt};
use digest::{HashMarker, Reset, Update};

/// Largest block (rate) of any supported algorithm: SHAKE128's 168 bytes.
pub const MAX_BLOCK_LEN: usize = 168;

/// When a full block buffer is handed to [`DigestCore::transform_block`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// Transform as soon as the buffer fills.
    Eager,
    /// Hold a full buffer back until more input arrives, so the last block
    /// always reaches [`DigestCore::transform_final`]. The buffer offset may
    /// then equal the block length.
    ///
    /// BLAKE2 needs this: its final compression sets a finalization flag, so
    /// a message that ends on a block boundary must not have that block
    /// compressed early. `transform_final` may therefore receive
    /// `remaining_len == block_len`.
    Lazy,
}

/// Per-algorithm hooks driven by [`Hasher`].
pub trait DigestCore: Clone {
    /// Conventional algorithm name, e.g. `"SHA3-256"`.
    fn name(&self) -> &'static str;

    /// Bytes consumed per [`transform_block`](Self::transform_block) call.
    ///
    /// Never exceeds [`MAX_BLOCK_LEN`].
    fn block_len(&self) -> usize;

    /// Bytes written by [`transform_final`](Self::transform_final).
    fn digest_len(&self) -> usize;

    /// Buffering policy; eager unless overridden.
    fn buffer_kind(&self) -> BufferKind {
        BufferKind::Eager
    }

    /// Absorbs exactly one full block.
    fn transform_block(&mut self, block: &[u8]);

    /// Pads and finalizes.
    ///
    /// `remaining` is a scratch block of [`block_len`](Self::block_len)
    /// bytes whose first `remaining_len` bytes are unprocessed input; the
    /// core may overwrite all of it. `output` is exactly
    /// [`digest_len`](Self::digest_len) bytes long.
    fn transform_final(&mut self, remaining: &mut [u8], remaining_len: usize, output: &mut [u8]);

    /// Restores the registers to their construction-time values.
    fn reset_state(&mut self);

    /// Overwrites chaining state, counters and key material with zeros.
    ///
    /// Called when a [`Hasher`] is dropped. The core is not usable again
    /// until [`reset_state`](Self::reset_state) runs.
    #[cfg(feature = "zeroize")]
    fn wipe(&mut self);

    /// A block to place in the buffer after every reset, as if it were the
    /// first input. Only lazy cores may return one, and it must be exactly
    /// one block long.
    fn prefix_block(&self) -> Option<&[u8]> {
        None
    }
}

/// Streaming hasher binding one [`DigestCore`] to a block buffer.
///
/// After a digest is produced the hasher is reset and ready for the next
/// message, with the same configuration.
#[derive(Clone)]
pub struct Hasher<C: DigestCore> {
    core: C,
    buffer: [u8; MAX_BLOCK_LEN],
    offset: usize,
}

impl<C: DigestCore> Hasher<C> {
    /// Wraps `core`, starting from its initial state.
    ///
    /// # Panics
    ///
    /// Panics if the core reports a block longer than [`MAX_BLOCK_LEN`].
    pub fn from_core(core: C) -> Self {
        assert!(core.block_len() <= MAX_BLOCK_LEN, "{} block exceeds the engine buffer", core.name());
        let mut hasher = Self { core, buffer: [0; MAX_BLOCK_LEN], offset: 0 };
        hasher.reset();
        hasher
    }

    /// The algorithm driving this hasher.
    #[inline]
    pub fn core(&self) -> &C {
        &self.core
    }

    /// Conventional algorithm name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.core.name()
    }

    /// Block size in bytes.
    #[inline]
    pub fn block_len(&self) -> usize {
        self.core.block_len()
    }

    /// Digest size in bytes.
    #[inline]
    pub fn digest_len(&self) -> usize {
        self.core.digest_len()
    }

    /// Absorbs `buffer[offset..offset + length]`.
    ///
    /// Fails without absorbing anything if the range does not lie inside
    /// `buffer`.
    pub fn input(&mut self, buffer: &[u8], offset: usize, length: usize) -> Result<()> {
        let end = offset.checked_add(length).filter(|&end| end <= buffer.len());
        let Some(end) = end else {
            tracing::debug!(algorithm = self.name(), offset, length, size = buffer.len(), "rejected input range");
            return Err(Error::InputOutOfBounds { offset, length, size: buffer.len() });
        };
        self.update(&buffer[offset..end]);
        Ok(())
    }

    /// Absorbs all of `data`.
    pub fn update(&mut self, mut data: &[u8]) {
        let block_len = self.core.block_len();
        let lazy = self.core.buffer_kind() == BufferKind::Lazy;

        while !data.is_empty() {
            if self.offset == block_len {
                // A parked lazy block, and there is more input behind it.
                self.core.transform_block(&self.buffer[..block_len]);
                self.offset = 0;
            }

            if self.offset == 0 {
                while data.len() > block_len || (!lazy && data.len() == block_len) {
                    let (block, rest) = data.split_at(block_len);
                    self.core.transform_block(block);
                    data = rest;
                }
            }

            let take = cmp::min(block_len - self.offset, data.len());
            self.buffer[self.offset..self.offset + take].copy_from_slice(&data[..take]);
            self.offset += take;
            data = &data[take..];

            if self.offset == block_len && !lazy {
                self.core.transform_block(&self.buffer[..block_len]);
                self.offset = 0;
            }
        }
    }

    /// Writes the digest to `output[offset..offset + digest_len]` and resets.
    ///
    /// Returns the written window. Bytes of `output` outside it are left
    /// untouched. Fails without changing any state if the range does not fit.
    pub fn digest_into<'a>(&mut self, output: &'a mut [u8], offset: usize) -> Result<&'a mut [u8]> {
        let digest_len = self.digest_len();
        let end = offset.checked_add(digest_len).filter(|&end| end <= output.len());
        let Some(end) = end else {
            tracing::debug!(algorithm = self.name(), offset, digest_len, size = output.len(), "rejected output buffer");
            return Err(Error::OutputTooSmall { offset, digest_len, size: output.len() });
        };
        let window = &mut output[offset..end];
        self.finalize_into(window);
        Ok(window)
    }

    /// Returns the digest in a freshly allocated buffer and resets.
    pub fn digest(&mut self) -> Vec<u8> {
        let mut out = vec![0; self.digest_len()];
        self.finalize_into(&mut out);
        out
    }

    /// Discards buffered input and restores the initial state.
    pub fn reset(&mut self) {
        self.buffer = [0; MAX_BLOCK_LEN];
        self.offset = 0;
        self.core.reset_state();
        if let Some(prefix) = self.core.prefix_block() {
            debug_assert_eq!(self.core.buffer_kind(), BufferKind::Lazy);
            debug_assert_eq!(prefix.len(), self.core.block_len());
            self.buffer[..prefix.len()].copy_from_slice(prefix);
            self.offset = prefix.len();
        }
    }

    /// `out` must be exactly `digest_len` bytes.
    pub(crate) fn finalize_into(&mut self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.digest_len());
        self.finalize_with(|core, remaining, remaining_len| core.transform_final(remaining, remaining_len, out));
        tracing::trace!(algorithm = self.name(), digest_len = out.len(), "digest finalized");
    }

    /// Hands the buffered tail to `f`, then resets.
    pub(crate) fn finalize_with<R>(&mut self, f: impl FnOnce(&mut C, &mut [u8], usize) -> R) -> R {
        let block_len = self.core.block_len();
        let result = f(&mut self.core, &mut self.buffer[..block_len], self.offset);
        self.reset();
        result
    }
}

impl<C: DigestCore + Default> Default for Hasher<C> {
    #[inline]
    fn default() -> Self {
        Self::from_core(C::default())
    }
}

impl<C: DigestCore> Update for Hasher<C> {
    #[inline]
    fn update(&mut self, data: &[u8]) {
        Hasher::update(self, data);
    }
}

impl<C: DigestCore> Reset for Hasher<C> {
    #[inline]
    fn reset(&mut self) {
        Hasher::reset(self);
    }
}

impl<C: DigestCore> HashMarker for Hasher<C> {}

impl<C: DigestCore> fmt::Debug for Hasher<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hasher<{}> {{ ... }}", self.name())
    }
}

#[cfg(feature = "zeroize")]
impl<C: DigestCore> Drop for Hasher<C> {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        self.buffer.zeroize();
        self.offset.zeroize();
        self.core.wipe();
    }
}

#[cfg(feature = "zeroize")]
impl<C: DigestCore> zeroize::ZeroizeOnDrop for Hasher<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    /// Records every block it sees; the digest is a running byte sum and
    /// the count of transformed blocks.
    #[derive(Clone, Default)]
    struct Recorder {
        lazy: bool,
        blocks: usize,
        sum: u64,
        prefix: Option<[u8; 4]>,
        #[cfg(feature = "zeroize")]
        wiped: alloc::rc::Rc<core::cell::Cell<usize>>,
    }

    impl DigestCore for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn block_len(&self) -> usize {
            4
        }

        fn digest_len(&self) -> usize {
            3
        }

        fn buffer_kind(&self) -> BufferKind {
            if self.lazy {
                BufferKind::Lazy
            } else {
                BufferKind::Eager
            }
        }

        fn transform_block(&mut self, block: &[u8]) {
            assert_eq!(block.len(), 4);
            self.blocks += 1;
            self.sum += block.iter().map(|&b| u64::from(b)).sum::<u64>();
        }

        fn transform_final(&mut self, remaining: &mut [u8], remaining_len: usize, output: &mut [u8]) {
            assert_eq!(remaining.len(), 4);
            let tail: u64 = remaining[..remaining_len].iter().map(|&b| u64::from(b)).sum();
            output[0] = self.blocks as u8;
            output[1] = remaining_len as u8;
            output[2] = (self.sum + tail) as u8;
        }

        fn reset_state(&mut self) {
            self.blocks = 0;
            self.sum = 0;
        }

        #[cfg(feature = "zeroize")]
        fn wipe(&mut self) {
            self.blocks = 0;
            self.sum = 0;
            self.wiped.set(self.wiped.get() + 1);
        }

        fn prefix_block(&self) -> Option<&[u8]> {
            self.prefix.as_ref().map(|p| &p[..])
        }
    }

    #[test]
    fn eager_transforms_full_blocks() {
        let mut hasher = Hasher::from_core(Recorder::default());
        hasher.update(&[1; 8]);
        assert_eq!(hasher.digest(), [2, 0, 8]);

        hasher.update(&[1; 9]);
        assert_eq!(hasher.digest(), [2, 1, 9]);
    }

    #[test]
    fn lazy_holds_back_last_block() {
        let mut hasher = Hasher::from_core(Recorder { lazy: true, ..Default::default() });
        hasher.update(&[1; 8]);
        assert_eq!(hasher.digest(), [1, 4, 8]);

        hasher.update(&[1; 4]);
        hasher.update(&[1; 4]);
        assert_eq!(hasher.digest(), [1, 4, 8]);

        hasher.update(&[]);
        assert_eq!(hasher.digest(), [0, 0, 0]);
    }

    #[test]
    fn prefix_is_restored_after_digest() {
        let core = Recorder { lazy: true, prefix: Some([5; 4]), ..Default::default() };
        let mut hasher = Hasher::from_core(core);
        assert_eq!(hasher.digest(), [0, 4, 20]);

        hasher.update(&[1]);
        assert_eq!(hasher.digest(), [1, 1, 21]);
        assert_eq!(hasher.digest(), [0, 4, 20]);
    }

    #[test]
    fn chunking_is_transparent() {
        let data: Vec<u8> = (0..=40).collect();
        for lazy in [false, true] {
            let mut whole = Hasher::from_core(Recorder { lazy, ..Default::default() });
            whole.update(&data);
            let expected = whole.digest();

            for split in 0..data.len() {
                let mut parts = Hasher::from_core(Recorder { lazy, ..Default::default() });
                parts.update(&data[..split]);
                parts.update(&data[split..]);
                assert_eq!(parts.digest(), expected, "lazy={lazy} split={split}");
            }
        }
    }

    #[test]
    fn input_checks_range() {
        let mut hasher = Hasher::from_core(Recorder::default());
        let buffer = [1u8; 10];

        hasher.input(&buffer, 2, 5).unwrap();
        hasher.input(&buffer, 10, 0).unwrap();

        let err = hasher.input(&buffer, 6, 5).unwrap_err();
        assert_eq!(err, Error::InputOutOfBounds { offset: 6, length: 5, size: 10 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(hasher.input(&buffer, usize::MAX, 2).is_err());

        // The rejected calls absorbed nothing.
        assert_eq!(hasher.digest(), [1, 1, 5]);
    }

    #[test]
    fn digest_into_checks_and_isolates() {
        let mut hasher = Hasher::from_core(Recorder::default());
        hasher.update(&[2, 2]);

        let mut small = [0u8; 4];
        let err = hasher.digest_into(&mut small, 2).unwrap_err();
        assert_eq!(err, Error::OutputTooSmall { offset: 2, digest_len: 3, size: 4 });

        // Still holds the two buffered bytes.
        let mut out = [0xaa; 8];
        let window = hasher.digest_into(&mut out, 3).unwrap();
        assert_eq!(window, [0, 2, 4]);
        window[0] = 7;
        assert_eq!(out, [0xaa, 0xaa, 0xaa, 7, 2, 4, 0xaa, 0xaa]);

        let mut exact = [0u8; 3];
        assert_eq!(hasher.digest_into(&mut exact, 0).unwrap().len(), 3);
    }

    #[cfg(feature = "zeroize")]
    #[test]
    fn drop_wipes_core_once() {
        let core = Recorder::default();
        let wiped = core.wiped.clone();

        let mut hasher = Hasher::from_core(core);
        hasher.update(&[9; 6]);
        let copy = hasher.clone();
        assert_eq!(hasher.digest(), [1, 2, 54]);
        assert_eq!(wiped.get(), 0);

        drop(hasher);
        assert_eq!(wiped.get(), 1);
        drop(copy);
        assert_eq!(wiped.get(), 2);
    }

    #[test]
    fn debug_hides_state() {
        let hasher = Hasher::from_core(Recorder::default());
        assert_eq!(alloc::format!("{hasher:?}"), "Hasher<recorder> { ... }");
    }
}
