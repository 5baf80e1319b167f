#![no_main]

use libfuzzer_sys::fuzz_target;
use polydigest::{Digest, Keccak256, KeccakHasher, Sha3_256};
use tiny_keccak::{Hasher, Keccak, Sha3, Shake};

fuzz_target!(|data: &[u8]| {
    // Keccak-256
    let mut reference = Keccak::v256();
    reference.update(data);
    let mut expected = [0u8; 32];
    reference.finalize(&mut expected);
    let actual = Keccak256::digest(data);
    assert_eq!(&actual[..], &expected, "Keccak-256 mismatch! Input: {data:x?}");

    // SHA3-256, fed in uneven chunks
    let mut reference = Sha3::v256();
    reference.update(data);
    let mut expected = [0u8; 32];
    reference.finalize(&mut expected);
    let mut hasher = Sha3_256::new();
    for chunk in data.chunks(data.first().map_or(1, |&b| b as usize + 1)) {
        hasher.update(chunk);
    }
    let actual = hasher.finalize();
    assert_eq!(&actual[..], &expected, "SHA3-256 mismatch! Input: {data:x?}");

    // SHAKE128 squeezing past the rate
    let mut reference = Shake::v128();
    reference.update(data);
    let mut expected = [0u8; 300];
    reference.finalize(&mut expected);
    let mut hasher = KeccakHasher::shake128(expected.len());
    hasher.update(data);
    let actual = hasher.digest();
    assert_eq!(&actual[..], &expected[..], "SHAKE128 mismatch! Input: {data:x?}");
});
