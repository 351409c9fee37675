//! SHA-224 and SHA-256, the 32-bit half of the SHA-2 family specified by
//! [FIPS 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf).
//!
//! Like [SHA-1](crate::sha1), both are based on the
//! [Merkle-Damgard](crate::MerkleDamgard) and
//! [Davies-Meyer](crate::DaviesMeyer) constructions over a dedicated block
//! cipher, here [SHACAL-2](Shacal2). SHA-224 is SHA-256 with a different
//! initial chaining value and the digest truncated to 224 bits; the
//! truncation makes it immune to [length-extension
//! attacks](crate::MerkleDamgard#length-extension-attacks), unlike SHA-256.
//!
//! The [64-bit half of the family](crate::sha512) repeats the same
//! structure over 64-bit words.

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

/// The $K_t^{256}$ constants for [SHA-256](Sha256) and [SHA-224](Sha224):
/// the first 32 bits of the fractional parts of the cube roots of the first
/// 64 primes.
#[docext]
pub const KT_256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Block size in bytes.
pub const BLOCK_BYTES: usize = 64;

/// A preimage block.
pub type Block = [u8; BLOCK_BYTES];

/// The internal state of [SHA-256](Sha256) and [SHA-224](Sha224).
pub type Sha2State = [u32; 8];

/// SHA-256 hash specified by [FIPS
/// 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf).
///
/// The digest is the entire final chaining value, which leaves SHA-256 open
/// to [length-extension
/// attacks](crate::MerkleDamgard#length-extension-attacks). For more
/// details, see the [module documentation](self).
#[derive(Debug)]
pub struct Sha256(
    MerkleDamgard<
        Sha2State,
        DaviesMeyer<Shacal2, ModularAddition<Sha2State>>,
        LengthPadding<BLOCK_BYTES, 8>,
        BLOCK_BYTES,
    >,
);

/// SHA-224 hash specified by [FIPS
/// 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf).
///
/// [SHA-256](Sha256) with a different initial chaining value and the digest
/// cut to 224 bits; the truncation closes the length-extension hole. For
/// more details, see the [module documentation](self).
#[derive(Debug)]
pub struct Sha224(
    MerkleDamgard<
        Sha2State,
        DaviesMeyer<Shacal2, ModularAddition<Sha2State>>,
        LengthPadding<BLOCK_BYTES, 8>,
        BLOCK_BYTES,
    >,
);

impl Default for Sha256 {
    fn default() -> Self {
        Self(MerkleDamgard::new(
            DaviesMeyer::new(Shacal2(()), ModularAddition(Default::default())),
            LengthPadding(()),
            [
                0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab,
                0x5be0cd19,
            ],
        ))
    }
}

impl Hash for Sha256 {
    type Digest = [u8; 32];

    fn update(&mut self, preimage: &[u8]) {
        self.0.absorb(preimage)
    }

    fn digest(&self) -> Self::Digest {
        let mut result = [0; 32];
        self.0
            .finalize()
            .into_iter()
            .flat_map(u32::to_be_bytes)
            .zip(result.iter_mut())
            .for_each(|(b, r)| *r = b);
        result
    }

    fn reset(&mut self) {
        self.0.reset()
    }
}

impl Default for Sha224 {
    fn default() -> Self {
        Self(MerkleDamgard::new(
            DaviesMeyer::new(Shacal2(()), ModularAddition(Default::default())),
            LengthPadding(()),
            [
                0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7,
                0xbefa4fa4,
            ],
        ))
    }
}

impl Hash for Sha224 {
    type Digest = [u8; 28];

    fn update(&mut self, preimage: &[u8]) {
        self.0.absorb(preimage)
    }

    fn digest(&self) -> Self::Digest {
        let mut result = [0; 28];
        self.0
            .finalize()
            .into_iter()
            .flat_map(u32::to_be_bytes)
            .zip(result.iter_mut())
            .for_each(|(b, r)| *r = b);
        result
    }

    fn reset(&mut self) {
        self.0.reset()
    }
}

/// The block cipher at the core of [SHA-256](Sha256) and [SHA-224](Sha224),
/// known as SHACAL-2.
///
/// A 64-byte block is first expanded into the 64-word message schedule $W$:
/// the block itself provides $W_0$ through $W_{15}$, and every later word
/// mixes four earlier ones through the
/// [$\sigma^{256}$](lowercase_sigma_0) functions,
///
/// $$
/// W_i = \sigma_1^{256}(W_{i-2}) + W_{i-7} + \sigma_0^{256}(W_{i-15}) +
/// W_{i-16} \pmod{2^{32}}.
/// $$
///
/// The chaining value then seeds eight 32-bit working variables
/// $(a, \dots, h)$. Each of the 64 rounds derives two temporaries from the
/// [$\Sigma^{256}$](uppercase_sigma_0), [$Ch$](ch) and [$Maj$](maj)
/// functions and the round constant [$K_t^{256}$](KT_256),
///
/// $$
/// T_1 = h + \Sigma_1^{256}(e) + Ch(e, f, g) + K_t^{256} + W_t
/// \pmod{2^{32}}\\
/// T_2 = \Sigma_0^{256}(a) + Maj(a, b, c) \pmod{2^{32}},
/// $$
///
/// and rotates them through the working variables:
///
/// $$
/// (a, b, c, d, e, f, g, h) \gets (T_1 + T_2,\ a,\ b,\ c,\ d + T_1,\ e,\
/// f,\ g).
/// $$
#[docext]
#[derive(Debug)]
pub struct Shacal2(());

impl DaviesMeyerCipher for Shacal2 {
    type Block = Block;
    type State = Sha2State;

    fn encrypt(&self, state: Self::State, block: Self::Block) -> Self::State {
        // Expand the block into the full message schedule up front.
        let mut w = [0u32; 64];
        for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_be_bytes(bytes.try_into().unwrap());
        }
        for i in 16..64 {
            w[i] = lowercase_sigma_1(w[i - 2])
                .wrapping_add(w[i - 7])
                .wrapping_add(lowercase_sigma_0(w[i - 15]))
                .wrapping_add(w[i - 16]);
        }

        // One stir of the working variables per schedule word. The tuple on
        // the right is built entirely from the pre-round values.
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state;
        for (&k, &wt) in KT_256.iter().zip(&w) {
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
pub fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ ((!x) & z)
}

/// The majority function $Maj(x, y, z) = (x \land y) \oplus (x \land z)
/// \oplus (y \land z)$: each output bit takes the value shared by at least
/// two of the inputs.
#[docext]
pub fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Round mixing function $\Sigma_0^{256}(x) = \mathrm{ROTR}(x, 2) \oplus
/// \mathrm{ROTR}(x, 13) \oplus \mathrm{ROTR}(x, 22)$, where $\mathrm{ROTR}$
/// is bitwise right rotation.
#[docext]
pub fn uppercase_sigma_0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Round mixing function $\Sigma_1^{256}(x) = \mathrm{ROTR}(x, 6) \oplus
/// \mathrm{ROTR}(x, 11) \oplus \mathrm{ROTR}(x, 25)$, where $\mathrm{ROTR}$
/// is bitwise right rotation.
#[docext]
pub fn uppercase_sigma_1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// Schedule mixing function $\sigma_0^{256}(x) = \mathrm{ROTR}(x, 7) \oplus
/// \mathrm{ROTR}(x, 18) \oplus (x \gg 3)$, where $\mathrm{ROTR}$ is bitwise
/// right rotation and $\gg$ is a plain right shift.
#[docext]
pub fn lowercase_sigma_0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// Schedule mixing function $\sigma_1^{256}(x) = \mathrm{ROTR}(x, 17)
/// \oplus \mathrm{ROTR}(x, 19) \oplus (x \gg 10)$, where $\mathrm{ROTR}$ is
/// bitwise right rotation and $\gg$ is a plain right shift.
#[docext]
pub fn lowercase_sigma_1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}
