//! SHA-1 is a hash function specified by [FIPS
//! 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf),
//! built from the [SHACAL-1](Shacal1) block cipher via the
//! [Merkle-Damgard](crate::MerkleDamgard) and
//! [Davies-Meyer](crate::DaviesMeyer) constructions.
//!
//! SHA-1 is cryptographically broken: practical collisions have been
//! demonstrated, and it remains in this crate only for interoperability
//! with systems that still speak it. New designs should use the
//! [SHA-2 family](crate::sha256) instead.

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

/// Block size in bytes.
pub const BLOCK_BYTES: usize = 64;

/// A preimage block.
pub type Block = [u8; BLOCK_BYTES];

/// The internal state of [SHA-1](Sha1).
pub type Sha1State = [u32; 5];

/// SHA-1 hash specified by [FIPS
/// 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf).
///
/// Broken for collision resistance and kept for interoperability only; see
/// the [module documentation](self). Like every untruncated Merkle-Damgard
/// hash it is also open to [length-extension
/// attacks](crate::MerkleDamgard#length-extension-attacks).
#[derive(Debug)]
pub struct Sha1(
    MerkleDamgard<
        Sha1State,
        DaviesMeyer<Shacal1, ModularAddition<Sha1State>>,
        LengthPadding<BLOCK_BYTES, 8>,
        BLOCK_BYTES,
    >,
);

impl Default for Sha1 {
    fn default() -> Self {
        Self(MerkleDamgard::new(
            DaviesMeyer::new(Shacal1(()), ModularAddition(Default::default())),
            LengthPadding(()),
            [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0],
        ))
    }
}

impl Hash for Sha1 {
    type Digest = [u8; 20];

    fn update(&mut self, preimage: &[u8]) {
        self.0.absorb(preimage)
    }

    fn digest(&self) -> Self::Digest {
        let mut result = [0; 20];
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

/// The block cipher at the core of [SHA-1](Sha1), known as SHACAL-1.
///
/// A 64-byte block is first expanded into the 80-word message schedule $W$:
/// the block itself provides $W_0$ through $W_{15}$, and every later word
/// mixes four earlier ones,
///
/// $$
/// W_i = \mathrm{ROTL}(W_{i-3} \oplus W_{i-8} \oplus W_{i-14} \oplus
/// W_{i-16}, 1).
/// $$
///
/// The chaining value then seeds five 32-bit working variables
/// $(a, b, c, d, e)$, stirred once per schedule word,
///
/// $$
/// (a, b, c, d, e) \gets \big(\mathrm{ROTL}(a, 5) + f_t(b, c, d) + e + K_t
/// + W_t,\ a,\ \mathrm{ROTL}(b, 30),\ c,\ d\big) \pmod{2^{32}},
/// $$
///
/// with the round function [$f_t$](ft) and constant [$K_t$](kt) switching
/// every twenty rounds.
#[docext]
#[derive(Debug)]
pub struct Shacal1(());

impl DaviesMeyerCipher for Shacal1 {
    type Block = Block;
    type State = Sha1State;

    fn encrypt(&self, state: Self::State, block: Self::Block) -> Self::State {
        // Expand the block into the full message schedule up front.
        let mut w = [0u32; 80];
        for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_be_bytes(bytes.try_into().unwrap());
        }
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        // One stir of the working variables per schedule word. The tuple on
        // the right is built entirely from the pre-round values.
        let [mut a, mut b, mut c, mut d, mut e] = state;
        for (t, &wt) in w.iter().enumerate() {
            (a, b, c, d, e) = (
                a.rotate_left(5)
                    .wrapping_add(ft(t as u32, b, c, d))
                    .wrapping_add(e)
                    .wrapping_add(kt(t as u32))
                    .wrapping_add(wt),
                a,
                b.rotate_left(30),
                c,
                d,
            );
        }

        [a, b, c, d, e]
    }
}

/// The round function $f_t$ of [SHA-1](Sha1), switching every twenty
/// rounds:
///
/// $$
/// f_t(x, y, z) =
/// \begin{cases}
/// Ch(x, y, z) & 0 \le t < 20\\
/// Maj(x, y, z) & 40 \le t < 60\\
/// Parity(x, y, z) & \text{otherwise}
/// \end{cases}
/// $$
#[docext]
pub fn ft(t: u32, x: u32, y: u32, z: u32) -> u32 {
    match t {
        0..=19 => ch(x, y, z),
        40..=59 => maj(x, y, z),
        _ => parity(x, y, z),
    }
}

/// The round constant $K_t$ of [SHA-1](Sha1), one of four fixed words
/// switching every twenty rounds.
#[docext]
pub fn kt(t: u32) -> u32 {
    match t {
        0..=19 => 0x5a827999,
        20..=39 => 0x6ed9eba1,
        40..=59 => 0x8f1bbcdc,
        _ => 0xca62c1d6,
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

/// The parity function $Parity(x, y, z) = x \oplus y \oplus z$.
#[docext]
pub fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}
