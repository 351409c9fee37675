use {
    super::test,
    crate::{Hash, Sha1},
};

/// SHA-1 test vectors.
#[test]
fn sha1() {
    let hash = &mut Sha1::default();

    test(hash, b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709");

    test(hash, b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d");

    test(
        hash,
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    );

    test(
        hash,
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnop",
        "47b172810795699fe739197d1a1f5960700242f1",
    );
}

/// The NIST long-message vector: one million repetitions of 'a', absorbed
/// in chunks that straddle block boundaries.
#[test]
fn sha1_million_a() {
    let mut hash = Sha1::default();
    for _ in 0..20_000 {
        hash.update(&[b'a'; 50]);
    }
    assert_eq!(
        hex::encode(hash.digest()),
        "34aa973cd4c4daa4f61eeb2bdbad27316534016f"
    );
}
