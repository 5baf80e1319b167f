//! Invariants that hold for every algorithm and every input.

use polydigest::{Algorithm, Blake2bHasher, Digest, Error, KeccakHasher, Sha256, Sha3_512};
use proptest::prelude::*;

fn arb_algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL)
}

fn arb_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..1024)
}

fn arb_splits() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..1024usize, 0..8).prop_map(|mut splits| {
        splits.sort_unstable();
        splits
    })
}

fn one_shot(alg: Algorithm, data: &[u8]) -> Vec<u8> {
    let mut hasher = alg.hasher();
    hasher.update(data);
    hasher.digest()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn chunking_does_not_change_digest(alg in arb_algorithm(), data in arb_data(), splits in arb_splits()) {
        let mut hasher = alg.hasher();
        let mut prev = 0;
        for split in splits {
            let split = split.min(data.len());
            hasher.update(&data[prev.min(split)..split]);
            prev = prev.max(split);
        }
        hasher.update(&data[prev..]);

        prop_assert_eq!(hex::encode(hasher.digest()), hex::encode(one_shot(alg, &data)), "{}", alg);
    }

    #[test]
    fn hasher_is_reusable_after_digest(alg in arb_algorithm(), first in arb_data(), second in arb_data()) {
        let mut hasher = alg.hasher();
        hasher.update(&first);
        let a = hasher.digest();
        hasher.update(&second);
        let b = hasher.digest();

        prop_assert_eq!(a, one_shot(alg, &first));
        prop_assert_eq!(b, one_shot(alg, &second));
    }

    #[test]
    fn reset_discards_input(alg in arb_algorithm(), junk in arb_data(), data in arb_data()) {
        let mut hasher = alg.hasher();
        hasher.update(&junk);
        hasher.reset();
        hasher.update(&data);
        prop_assert_eq!(hasher.digest(), one_shot(alg, &data));
    }

    #[test]
    fn input_reads_only_its_range(alg in arb_algorithm(), data in arb_data(), a in 0..1024usize, b in 0..1024usize) {
        let start = a.min(data.len());
        let end = b.min(data.len()).max(start);

        let mut hasher = alg.hasher();
        hasher.input(&data, start, end - start).unwrap();
        prop_assert_eq!(hasher.digest(), one_shot(alg, &data[start..end]));
    }

    #[test]
    fn input_out_of_range_is_rejected(alg in arb_algorithm(), data in arb_data(), extra in 1..64usize) {
        let mut hasher = alg.hasher();
        hasher.update(b"kept");
        let length = data.len() + extra;
        prop_assert_eq!(
            hasher.input(&data, 0, length),
            Err(Error::InputOutOfBounds { offset: 0, length, size: data.len() })
        );
        prop_assert_eq!(
            hasher.input(&data, usize::MAX, 1),
            Err(Error::InputOutOfBounds { offset: usize::MAX, length: 1, size: data.len() })
        );
        // A rejected call leaves absorbed input in place.
        prop_assert_eq!(hasher.digest(), one_shot(alg, b"kept"));
    }

    #[test]
    fn digest_into_writes_only_its_window(alg in arb_algorithm(), data in arb_data(), offset in 0..32usize, pad in 0..16usize) {
        let expected = one_shot(alg, &data);
        let mut out = vec![0xa5; offset + expected.len() + pad];

        let mut hasher = alg.hasher();
        hasher.update(&data);
        let window = hasher.digest_into(&mut out, offset).unwrap();
        prop_assert_eq!(&window[..], &expected[..]);

        prop_assert!(out[..offset].iter().all(|&b| b == 0xa5));
        prop_assert_eq!(&out[offset..offset + expected.len()], &expected[..]);
        prop_assert!(out[offset + expected.len()..].iter().all(|&b| b == 0xa5));
    }

    #[test]
    fn digest_into_short_buffer_is_rejected(alg in arb_algorithm(), data in arb_data(), offset in 0..32usize) {
        let mut hasher = alg.hasher();
        hasher.update(&data);
        let digest_len = hasher.digest_len();
        let mut out = vec![0u8; offset + digest_len - 1];
        let size = out.len();

        prop_assert_eq!(
            hasher.digest_into(&mut out, offset).map(|window| window.len()),
            Err(Error::OutputTooSmall { offset, digest_len, size })
        );
        prop_assert!(out.iter().all(|&b| b == 0));
        prop_assert_eq!(hasher.digest(), one_shot(alg, &data));
    }

    #[test]
    fn shake_output_extends_shorter_output(data in arb_data(), short in 1..200usize, extra in 0..400usize) {
        for (mut a, mut b) in [
            (KeccakHasher::shake128(short), KeccakHasher::shake128(short + extra)),
            (KeccakHasher::shake256(short), KeccakHasher::shake256(short + extra)),
        ] {
            a.update(&data);
            b.update(&data);
            let long = b.digest();
            prop_assert_eq!(long.len(), short + extra);
            prop_assert_eq!(a.digest(), &long[..short]);
        }
    }

    #[test]
    fn digest_types_match_runtime_hashers(data in arb_data()) {
        prop_assert_eq!(Sha256::digest(&data).to_vec(), one_shot(Algorithm::Sha256, &data));
        prop_assert_eq!(Sha3_512::digest(&data).to_vec(), one_shot(Algorithm::Sha3_512, &data));
    }

    #[test]
    fn blake2b_keys_separate_outputs(data in arb_data(), key in prop::collection::vec(any::<u8>(), 1..=64)) {
        let mut keyed = Blake2bHasher::keyed(64, &key).unwrap();
        keyed.update(&data);
        let mac = keyed.digest();

        let mut again = Blake2bHasher::keyed(64, &key).unwrap();
        again.update(&data);
        prop_assert_eq!(&mac, &again.digest());
        prop_assert_ne!(mac, one_shot(Algorithm::Blake2b512, &data));
    }
}
