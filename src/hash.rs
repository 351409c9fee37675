mod merkledamgard;

pub mod sha1;
pub mod sha256;
pub mod sha512;

use std::fmt;

pub use {
    merkledamgard::{
        CompressionFn,
        DaviesMeyer,
        DaviesMeyerCipher,
        DaviesMeyerStep,
        LengthPadding,
        MerkleDamgard,
        MerkleDamgardPad,
        ModularAddition,
    },
    sha1::Sha1,
    sha256::{Sha224, Sha256},
    sha512::{Sha384, Sha512, Sha512_224, Sha512_256},
};

/// A cryptographic hash function over a stream of input bytes.
///
/// The digest is a function of the concatenation of all
/// [updates](Self::update) since construction or the last
/// [`reset`](Self::reset), independent of how the caller segmented them.
/// [`digest`](Self::digest) does not consume the stream: updating afterwards
/// behaves as if it was never called.
pub trait Hash {
    /// The fixed-size digest output.
    type Digest: AsRef<[u8]> + Copy + fmt::Debug;

    /// Append `preimage` to the input stream.
    fn update(&mut self, preimage: &[u8]);

    /// The digest of everything absorbed so far.
    fn digest(&self) -> Self::Digest;

    /// Discard all absorbed input, restoring the freshly constructed state.
    fn reset(&mut self);

    /// One-shot convenience: the digest of `preimage` alone, leaving the
    /// hasher reset.
    fn hash(&mut self, preimage: &[u8]) -> Self::Digest {
        self.reset();
        self.update(preimage);
        let digest = self.digest();
        self.reset();
        digest
    }
}
