use {
    super::test,
    crate::{
        sha512::{self, Sha512State},
        Hash,
        Sha384,
        Sha512,
        Sha512_224,
        Sha512_256,
    },
};

/// SHA-512 test vectors.
#[test]
fn sha512() {
    let hash = &mut Sha512::default();

    test(
        hash,
        b"",
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    );

    test(
        hash,
        b"abc",
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    );

    test(
        hash,
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
          ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018\
         501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909",
    );
}

/// SHA-384 test vectors.
#[test]
fn sha384() {
    let hash = &mut Sha384::default();

    test(
        hash,
        b"",
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da\
         274edebfe76f65fbd51ad2f14898b95b",
    );

    test(
        hash,
        b"abc",
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
         8086072ba1e7cc2358baeca134c825a7",
    );

    test(
        hash,
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
          ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712\
         fcc7c71a557e2db966c3e9fa91746039",
    );
}

/// SHA-512/224 test vectors.
#[test]
fn sha512_224() {
    let hash = &mut Sha512_224::default();

    test(
        hash,
        b"",
        "6ed0dd02806fa89e25de060c19d3ac86cabb87d6a0ddd05c333b84f4",
    );

    test(
        hash,
        b"abc",
        "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa",
    );

    test(
        hash,
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
          ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "23fec5bb94d60b23308192640b0c453335d664734fe40e7268674af9",
    );
}

/// SHA-512/256 test vectors.
#[test]
fn sha512_256() {
    let hash = &mut Sha512_256::default();

    test(
        hash,
        b"",
        "c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a",
    );

    test(
        hash,
        b"abc",
        "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23",
    );

    test(
        hash,
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
          ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "3928e184fb8690f840da3988121d31be65cb9d3ef83ee6146feac861e19b563a",
    );
}

/// The NIST long-message vector: one million repetitions of 'a'.
#[test]
fn sha512_million_a() {
    let mut hash = Sha512::default();
    for _ in 0..20_000 {
        hash.update(&[b'a'; 50]);
    }
    assert_eq!(
        hex::encode(hash.digest()),
        "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973eb\
         de0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b"
    );
}

/// FIPS 180-4 §5.3.6: the SHA-512/t initial chaining values are themselves
/// SHA-512 outputs, computed with the initial value XORed with
/// `0xa5a5a5a5a5a5a5a5` over the ASCII name of the variant. Re-deriving
/// them must reproduce the hard-coded values the variants are built on.
#[test]
fn sha512_t_iv_derivation() {
    assert_eq!(
        derive_iv(b"SHA-512/224"),
        [
            0x8c3d37c819544da2,
            0x73e1996689dcd4d6,
            0x1dfab7ae32ff9c82,
            0x679dd514582f9fcf,
            0x0f6d2b697bd44da8,
            0x77e36f7304c48942,
            0x3f9d85a86a1d36c8,
            0x1112e6ad91d692a1,
        ]
    );
    assert_eq!(
        derive_iv(b"SHA-512/256"),
        [
            0x22312194fc2bf72c,
            0x9f555fa3c84c64c2,
            0x2393b86b6f53b151,
            0x963877195940eabd,
            0x96283ee2a88effe3,
            0xbe5e1e2553863992,
            0x2b0199fc2c85b8aa,
            0x0eb72ddc81c52ca2,
        ]
    );
}

fn derive_iv(name: &[u8]) -> Sha512State {
    const SHA512_IV: Sha512State = [
        0x6a09e667f3bcc908,
        0xbb67ae8584caa73b,
        0x3c6ef372fe94f82b,
        0xa54ff53a5f1d36f1,
        0x510e527fade682d1,
        0x9b05688c2b3e6c1f,
        0x1f83d9abfb41bd6b,
        0x5be0cd19137e2179,
    ];
    let mut md = sha512::core(SHA512_IV.map(|h| h ^ 0xa5a5a5a5a5a5a5a5));
    md.absorb(name);
    md.finalize()
}
