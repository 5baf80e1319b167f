/// Stamps a fixed-output `digest` type over a [`Hasher`](crate::Hasher).
macro_rules! impl_digest {
    (
        $name:ident, $core:ty, $init:expr, $output_size:ident, $block_size:ident, $kind:ident, $alg_name:expr $(,)?
    ) => {
        #[doc = concat!($alg_name, " hasher state.")]
        #[derive(Clone)]
        pub struct $name {
            inner: Hasher<$core>,
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self { inner: Hasher::from_core($init) }
            }
        }

        impl $name {
            /// Output length.
            pub const OUT: usize = <$output_size as Unsigned>::USIZE;
            /// Block size.
            pub const BSZ: usize = <$block_size as Unsigned>::USIZE;

            /// The streaming hasher behind this type.
            #[inline]
            pub fn as_hasher(&self) -> &Hasher<$core> {
                &self.inner
            }

            /// Unwraps into the streaming hasher, keeping absorbed input.
            #[inline]
            pub fn into_hasher(self) -> Hasher<$core> {
                self.inner
            }
        }

        impl Reset for $name {
            #[inline]
            fn reset(&mut self) {
                self.inner.reset();
            }
        }

        impl AlgorithmName for $name {
            #[inline]
            fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl fmt::Debug for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($name), " { ... }"))
            }
        }

        impl HashMarker for $name {}

        impl BlockSizeUser for $name {
            type BlockSize = $block_size;
        }

        impl BufferKindUser for $name {
            type BufferKind = $kind;
        }

        impl OutputSizeUser for $name {
            type OutputSize = $output_size;
        }

        impl Update for $name {
            #[inline]
            fn update(&mut self, data: &[u8]) {
                self.inner.update(data);
            }
        }

        impl FixedOutput for $name {
            #[inline]
            fn finalize_into(mut self, out: &mut Output<Self>) {
                self.inner.finalize_into(out);
            }
        }

        impl FixedOutputReset for $name {
            #[inline]
            fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
                // Finalizing already leaves the hasher reset.
                self.inner.finalize_into(out);
            }
        }
    };

    (
        $name:ident, $core:ty, $init:expr, $output_size:ident, $block_size:ident, $kind:ident, $alg_name:expr,
        $oid:literal $(,)?
    ) => {
        impl_digest!($name, $core, $init, $output_size, $block_size, $kind, $alg_name);

        #[cfg(feature = "oid")]
        #[cfg_attr(docsrs, doc(cfg(feature = "oid")))]
        impl AssociatedOid for $name {
            const OID: ObjectIdentifier = ObjectIdentifier::new_unwrap($oid);
        }
    };
}

/// Stamps an extendable-output `digest` type over a SHAKE [`KeccakHasher`](crate::KeccakHasher).
macro_rules! impl_shake {
    ($name:ident, $init:expr, $block_size:ident, $alg_name:expr, $oid:literal $(,)?) => {
        #[doc = concat!($alg_name, " hasher state.")]
        #[derive(Clone)]
        pub struct $name {
            inner: KeccakHasher,
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self { inner: Hasher::from_core($init) }
            }
        }

        impl $name {
            /// Block size.
            pub const BSZ: usize = <$block_size as Unsigned>::USIZE;
        }

        impl Reset for $name {
            #[inline]
            fn reset(&mut self) {
                self.inner.reset();
            }
        }

        impl AlgorithmName for $name {
            #[inline]
            fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl fmt::Debug for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($name), " { ... }"))
            }
        }

        impl HashMarker for $name {}

        impl BlockSizeUser for $name {
            type BlockSize = $block_size;
        }

        impl BufferKindUser for $name {
            type BufferKind = Eager;
        }

        impl Update for $name {
            #[inline]
            fn update(&mut self, data: &[u8]) {
                self.inner.update(data);
            }
        }

        impl ExtendableOutput for $name {
            type Reader = Sha3XofReader;

            #[inline]
            fn finalize_xof(mut self) -> Self::Reader {
                self.inner.finalize_xof()
            }
        }

        impl ExtendableOutputReset for $name {
            #[inline]
            fn finalize_xof_reset(&mut self) -> Self::Reader {
                self.inner.finalize_xof()
            }
        }

        #[cfg(feature = "oid")]
        #[cfg_attr(docsrs, doc(cfg(feature = "oid")))]
        impl AssociatedOid for $name {
            const OID: ObjectIdentifier = ObjectIdentifier::new_unwrap($oid);
        }
    };
}
