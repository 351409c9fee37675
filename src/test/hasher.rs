//! Behavior of the public facade: the documented lifecycle of the input
//! stream and output cache, variant parsing, and the published "abc"
//! vectors for all seven variants.

use crate::{variant::exceeds_length_field, Algorithm, Error, Hasher};

/// FIPS 180-4 "abc" digests for every variant, end to end through the
/// facade.
#[test]
fn abc_vectors() {
    for (algorithm, digest) in [
        (Algorithm::Sha1, "a9993e364706816aba3e25717850c26c9cd0d89d"),
        (
            Algorithm::Sha224,
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
        ),
        (
            Algorithm::Sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ),
        (
            Algorithm::Sha384,
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7",
        ),
        (
            Algorithm::Sha512,
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        ),
        (
            Algorithm::Sha512_224,
            "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa",
        ),
        (
            Algorithm::Sha512_256,
            "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23",
        ),
    ] {
        let mut hasher = algorithm.hasher();
        hasher.update(b"abc");
        assert_eq!(hasher.digest().unwrap(), digest, "{algorithm}");
    }
}

/// The output cache is only valid between a successful digest and the next
/// invalidating update or reset.
#[test]
fn output_cache_lifecycle() {
    let mut hasher = Hasher::new(Algorithm::Sha256);
    assert_eq!(hasher.current_output(), Err(Error::OutputUnavailable));

    hasher.update(b"abc");
    assert_eq!(hasher.current_output(), Err(Error::OutputUnavailable));

    let digest = hasher.digest().unwrap();
    assert_eq!(hasher.current_output(), Ok(digest.as_str()));

    hasher.update(b"def");
    assert_eq!(hasher.current_output(), Err(Error::OutputUnavailable));

    hasher.digest().unwrap();
    hasher.reset();
    assert_eq!(hasher.current_output(), Err(Error::OutputUnavailable));
}

#[test]
fn current_input_accumulates() {
    let mut hasher = Hasher::new(Algorithm::Sha1);
    assert!(hasher.current_input().is_empty());
    hasher.update(b"foo");
    hasher.update(b"bar");
    assert_eq!(hasher.current_input(), b"foobar");
    hasher.reset();
    assert!(hasher.current_input().is_empty());
}

/// A reset hasher behaves like a freshly constructed one.
#[test]
fn reset_reuse() {
    let mut hasher = Hasher::new(Algorithm::Sha256);
    hasher.update(b"some earlier message");
    hasher.digest().unwrap();
    hasher.reset();
    hasher.update(b"abc");
    assert_eq!(
        hasher.digest().unwrap(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

/// Both the command-line spellings and the display names parse.
#[test]
fn parse_names() {
    for (name, algorithm) in [
        ("1", Algorithm::Sha1),
        ("224", Algorithm::Sha224),
        ("256", Algorithm::Sha256),
        ("384", Algorithm::Sha384),
        ("512", Algorithm::Sha512),
        ("512224", Algorithm::Sha512_224),
        ("512256", Algorithm::Sha512_256),
        ("SHA-1", Algorithm::Sha1),
        ("sha256", Algorithm::Sha256),
        ("sha-512/224", Algorithm::Sha512_224),
        ("SHA-512/256", Algorithm::Sha512_256),
    ] {
        assert_eq!(name.parse(), Ok(algorithm), "{name}");
    }

    assert_eq!(
        "999".parse::<Algorithm>(),
        Err(Error::InvalidVariant("999".to_string()))
    );
    assert_eq!(
        "md5".parse::<Algorithm>(),
        Err(Error::InvalidVariant("md5".to_string()))
    );
}

/// The scalar descriptors are mutually consistent and round-trip through
/// the display name.
#[test]
fn descriptors() {
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.block_bits(), 16 * algorithm.word_bits());
        assert_eq!(algorithm.length_bits(), 2 * algorithm.word_bits());
        assert!(
            8 * algorithm.digest_len() as u32
                <= algorithm.state_words() * algorithm.word_bits()
        );
        assert_eq!(algorithm.to_string().parse(), Ok(algorithm));
    }
    assert_eq!(Algorithm::Sha1.rounds(), 80);
    assert_eq!(Algorithm::Sha256.rounds(), 64);
    assert_eq!(Algorithm::Sha512.rounds(), 80);
}

/// Messages longer than the length field admits have no defined hash.
#[test]
fn length_field_overflow() {
    assert!(!exceeds_length_field(0, 64));
    assert!(!exceeds_length_field(u128::from(u64::MAX), 64));
    assert!(exceeds_length_field(u128::from(u64::MAX) + 1, 64));
    assert!(exceeds_length_field(1 << 100, 64));
    assert!(!exceeds_length_field(u128::MAX, 128));
}
