use {
    super::test,
    crate::{Hash, Sha224, Sha256},
};

/// SHA-256 test vectors.
#[test]
fn sha256() {
    let hash = &mut Sha256::default();

    test(
        hash,
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );

    test(
        hash,
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );

    test(
        hash,
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );

    test(
        hash,
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnop",
        "aa353e009edbaebfc6e494c8d847696896cb8b398e0173a4b5c1b636292d87c7",
    );
}

/// SHA-224 test vectors.
#[test]
fn sha224() {
    let hash = &mut Sha224::default();

    test(
        hash,
        b"",
        "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f",
    );

    test(
        hash,
        b"abc",
        "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
    );

    test(
        hash,
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525",
    );

    test(
        hash,
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnop",
        "7a027d88e394d289ed7a10a918b93d1f210b4741d44534ce64275ab9",
    );
}

/// The NIST long-message vector: one million repetitions of 'a'.
#[test]
fn sha256_million_a() {
    let mut hash = Sha256::default();
    for _ in 0..20_000 {
        hash.update(&[b'a'; 50]);
    }
    assert_eq!(
        hex::encode(hash.digest()),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}
