//! SHA-384, SHA-512, SHA-512/224 and SHA-512/256, the 64-bit half of the
//! SHA-2 family specified by [FIPS
//! 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf).
//!
//! Structurally this is [SHA-256](crate::sha256) widened to 64-bit words:
//! 1024-bit blocks, 80 rounds instead of 64, different rotation amounts in
//! the Σ and σ helpers, and a 128-bit length field in the
//! [padding](crate::LengthPadding). The four variants differ only in their
//! initial chaining values and in how much of the final state becomes the
//! digest.
//!
//! The SHA-512/224 and SHA-512/256 initial values are themselves hashes:
//! FIPS 180-4 §5.3.6 derives them by running SHA-512 with its initial value
//! XORed with `0xa5a5a5a5a5a5a5a5` over the ASCII name of the variant
//! (`"SHA-512/224"` or `"SHA-512/256"`). The well-known results are
//! hard-coded here.

use {
    crate::{
        DaviesMeyer,
        DaviesMeyerCipher,
        Hash,
        LengthPadding,
        MerkleDamgard,
        ModularAddition,
    },
    docext::docext,
};

/// The $K_t^{512}$ constants for the 64-bit SHA-2 variants: the first 64
/// bits of the fractional parts of the cube roots of the first 80 primes.
#[docext]
pub const KT_512: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

/// Block size in bytes.
pub const BLOCK_BYTES: usize = 128;

/// A preimage block.
pub type Block = [u8; BLOCK_BYTES];

/// The internal state of the 64-bit SHA-2 variants.
pub type Sha512State = [u64; 8];

/// The streaming core shared by the four 64-bit variants.
type Core = MerkleDamgard<
    Sha512State,
    DaviesMeyer<Shacal512, ModularAddition<Sha512State>>,
    LengthPadding<BLOCK_BYTES, 16>,
    BLOCK_BYTES,
>;

pub(crate) fn core(iv: Sha512State) -> Core {
    MerkleDamgard::new(
        DaviesMeyer::new(Shacal512(()), ModularAddition(Default::default())),
        LengthPadding(()),
        iv,
    )
}

/// SHA-512 hash specified by [FIPS
/// 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf).
///
/// SHA-512 is vulnerable to [length-extension
/// attacks](crate::MerkleDamgard#length-extension-attacks).
///
/// For more details, see the [module documentation](self).
#[derive(Debug)]
pub struct Sha512(Core);

impl Default for Sha512 {
    fn default() -> Self {
        Self(core([
            0x6a09e667f3bcc908,
            0xbb67ae8584caa73b,
            0x3c6ef372fe94f82b,
            0xa54ff53a5f1d36f1,
            0x510e527fade682d1,
            0x9b05688c2b3e6c1f,
            0x1f83d9abfb41bd6b,
            0x5be0cd19137e2179,
        ]))
    }
}

impl Hash for Sha512 {
    type Digest = [u8; 64];

    fn update(&mut self, preimage: &[u8]) {
        self.0.absorb(preimage)
    }

    fn digest(&self) -> Self::Digest {
        let mut result = [0; 64];
        serialize(self.0.finalize(), &mut result);
        result
    }

    fn reset(&mut self) {
        self.0.reset()
    }
}

/// SHA-384 hash specified by [FIPS
/// 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf).
///
/// SHA-384 is SHA-512 with a different initial chaining value and the
/// digest truncated to the first six state words.
///
/// For more details, see the [module documentation](self).
#[derive(Debug)]
pub struct Sha384(Core);

impl Default for Sha384 {
    fn default() -> Self {
        Self(core([
            0xcbbb9d5dc1059ed8,
            0x629a292a367cd507,
            0x9159015a3070dd17,
            0x152fecd8f70e5939,
            0x67332667ffc00b31,
            0x8eb44a8768581511,
            0xdb0c2e0d64f98fa7,
            0x47b5481dbefa4fa4,
        ]))
    }
}

impl Hash for Sha384 {
    type Digest = [u8; 48];

    fn update(&mut self, preimage: &[u8]) {
        self.0.absorb(preimage)
    }

    fn digest(&self) -> Self::Digest {
        let mut result = [0; 48];
        serialize(self.0.finalize(), &mut result);
        result
    }

    fn reset(&mut self) {
        self.0.reset()
    }
}

/// SHA-512/224 hash specified by [FIPS
/// 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf).
///
/// SHA-512 with the §5.3.6-derived initial chaining value and the digest
/// truncated to 224 bits. See the [module documentation](self) for how the
/// initial value is derived.
#[derive(Debug)]
pub struct Sha512_224(Core);

impl Default for Sha512_224 {
    fn default() -> Self {
        Self(core([
            0x8c3d37c819544da2,
            0x73e1996689dcd4d6,
            0x1dfab7ae32ff9c82,
            0x679dd514582f9fcf,
            0x0f6d2b697bd44da8,
            0x77e36f7304c48942,
            0x3f9d85a86a1d36c8,
            0x1112e6ad91d692a1,
        ]))
    }
}

impl Hash for Sha512_224 {
    type Digest = [u8; 28];

    fn update(&mut self, preimage: &[u8]) {
        self.0.absorb(preimage)
    }

    fn digest(&self) -> Self::Digest {
        let mut result = [0; 28];
        serialize(self.0.finalize(), &mut result);
        result
    }

    fn reset(&mut self) {
        self.0.reset()
    }
}

/// SHA-512/256 hash specified by [FIPS
/// 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf).
///
/// SHA-512 with the §5.3.6-derived initial chaining value and the digest
/// truncated to 256 bits. See the [module documentation](self) for how the
/// initial value is derived.
#[derive(Debug)]
pub struct Sha512_256(Core);

impl Default for Sha512_256 {
    fn default() -> Self {
        Self(core([
            0x22312194fc2bf72c,
            0x9f555fa3c84c64c2,
            0x2393b86b6f53b151,
            0x963877195940eabd,
            0x96283ee2a88effe3,
            0xbe5e1e2553863992,
            0x2b0199fc2c85b8aa,
            0x0eb72ddc81c52ca2,
        ]))
    }
}

impl Hash for Sha512_256 {
    type Digest = [u8; 32];

    fn update(&mut self, preimage: &[u8]) {
        self.0.absorb(preimage)
    }

    fn digest(&self) -> Self::Digest {
        let mut result = [0; 32];
        serialize(self.0.finalize(), &mut result);
        result
    }

    fn reset(&mut self) {
        self.0.reset()
    }
}

/// Serialize the state big-endian into `result`, truncating to its length.
fn serialize(state: Sha512State, result: &mut [u8]) {
    state
        .into_iter()
        .flat_map(u64::to_be_bytes)
        .zip(result.iter_mut())
        .for_each(|(b, r)| *r = b);
}

/// The block cipher at the core of the 64-bit SHA-2 variants.
///
/// The same permutation as [SHACAL-2](crate::sha256::Shacal2) widened to
/// 64-bit words: a 128-byte block expands into an 80-word message schedule,
/// and the 80 rounds use the [$K_t^{512}$](KT_512) constants together with
/// the wide [$\Sigma$](uppercase_sigma_0) and [$\sigma$](lowercase_sigma_0)
/// rotation amounts.
#[docext]
#[derive(Debug)]
pub struct Shacal512(());

impl DaviesMeyerCipher for Shacal512 {
    type Block = Block;
    type State = Sha512State;

    fn encrypt(&self, state: Self::State, block: Self::Block) -> Self::State {
        // Expand the block into the full message schedule up front.
        let mut w = [0u64; 80];
        for (word, bytes) in w.iter_mut().zip(block.chunks_exact(8)) {
            *word = u64::from_be_bytes(bytes.try_into().unwrap());
        }
        for i in 16..80 {
            w[i] = lowercase_sigma_1(w[i - 2])
                .wrapping_add(w[i - 7])
                .wrapping_add(lowercase_sigma_0(w[i - 15]))
                .wrapping_add(w[i - 16]);
        }

        // One stir of the working variables per schedule word. The tuple on
        // the right is built entirely from the pre-round values.
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state;
        for (&k, &wt) in KT_512.iter().zip(&w) {
            let t1 = h
                .wrapping_add(uppercase_sigma_1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(k)
                .wrapping_add(wt);
            let t2 = uppercase_sigma_0(a).wrapping_add(maj(a, b, c));
            (a, b, c, d, e, f, g, h) =
                (t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g);
        }

        [a, b, c, d, e, f, g, h]
    }
}

/// The choice function $Ch(x, y, z) = (x \land y) \oplus (\neg x \land z)$:
/// each bit of $x$ selects the corresponding bit of either $y$ or $z$.
#[docext]
pub fn ch(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ ((!x) & z)
}

/// The majority function $Maj(x, y, z) = (x \land y) \oplus (x \land z)
/// \oplus (y \land z)$: each output bit takes the value shared by at least
/// two of the inputs.
#[docext]
pub fn maj(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Round mixing function $\Sigma_0^{512}(x) = \mathrm{ROTR}(x, 28) \oplus
/// \mathrm{ROTR}(x, 34) \oplus \mathrm{ROTR}(x, 39)$, where $\mathrm{ROTR}$
/// is bitwise right rotation.
#[docext]
pub fn uppercase_sigma_0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

/// Round mixing function $\Sigma_1^{512}(x) = \mathrm{ROTR}(x, 14) \oplus
/// \mathrm{ROTR}(x, 18) \oplus \mathrm{ROTR}(x, 41)$, where $\mathrm{ROTR}$
/// is bitwise right rotation.
#[docext]
pub fn uppercase_sigma_1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

/// Schedule mixing function $\sigma_0^{512}(x) = \mathrm{ROTR}(x, 1) \oplus
/// \mathrm{ROTR}(x, 8) \oplus (x \gg 7)$, where $\mathrm{ROTR}$ is bitwise
/// right rotation and $\gg$ is a plain right shift.
#[docext]
pub fn lowercase_sigma_0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

/// Schedule mixing function $\sigma_1^{512}(x) = \mathrm{ROTR}(x, 19)
/// \oplus \mathrm{ROTR}(x, 61) \oplus (x \gg 6)$, where $\mathrm{ROTR}$ is
/// bitwise right rotation and $\gg$ is a plain right shift.
#[docext]
pub fn lowercase_sigma_1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}
