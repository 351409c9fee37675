//! The Merkle-Damgard construction builds a hash function for messages of
//! arbitrary length out of a [compression function](CompressionFn) for
//! messages of fixed length. The message is padded into a whole number of
//! fixed-size blocks, and the compression function is applied repeatedly: it
//! mixes each block into a running internal state (the _chaining value_),
//! which is seeded with a fixed initial value and, after the final block,
//! becomes the hash digest.
//!
//! As long as the [padding](MerkleDamgardPad) is injective and encodes the
//! message length, the construction preserves the collision resistance of
//! the underlying compression function.
//!
//! # Length-extension attacks
//!
//! Because the digest _is_ the final chaining value, anyone who knows
//! `hash(m)` can resume the construction and compute `hash(m ‖ pad ‖ s)` for
//! a suffix `s` of their choosing without knowing `m`. Hash functions built
//! this way (SHA-1, SHA-256, SHA-512) should not be used as naive MACs.
//! Variants which truncate the final chaining value (SHA-224, SHA-384,
//! SHA-512/224, SHA-512/256) do not expose the full state and are not
//! affected.

mod daviesmeyer;

use {
    log::{debug, trace},
    std::iter,
};

pub use daviesmeyer::{DaviesMeyer, DaviesMeyerCipher, DaviesMeyerStep, ModularAddition};

/// Compression function used by the Merkle-Damgard construction.
///
/// Deterministically maps a chaining value and a single message block to a
/// new chaining value.
pub trait CompressionFn {
    type State;
    type Block;

    fn compress(&self, state: Self::State, block: Self::Block) -> Self::State;
}

/// Merkle-Damgard compliant padding.
///
/// Expands the final, possibly empty, partial block of a message into one or
/// more full blocks. The padding must be injective: two distinct messages
/// may never pad to the same block sequence, which in practice means the
/// message length is encoded into the padding.
pub trait MerkleDamgardPad {
    type Block;

    /// Pad the final partial block of a message. `tail` holds the pending
    /// bytes, strictly fewer than one block, and `bits` is the bit length of
    /// the entire message.
    fn pad(&self, tail: &[u8], bits: u128) -> impl Iterator<Item = Self::Block>;
}

/// SHA-style length padding into blocks of `B` bytes.
///
/// The message is padded by appending a single 1 bit, followed by as many
/// zero bits as needed, followed by the _bit length_ of the message encoded
/// as an unsigned big-endian integer of `L` bytes. The zero fill is the
/// smallest that makes the total length a whole number of blocks, so the
/// pending tail expands into either one or two blocks.
///
/// SHA-1 and the 32-bit SHA-2 variants use `B = 64, L = 8`; the 64-bit
/// variants use `B = 128, L = 16`. Bit lengths beyond `2^(8·L)` wrap, per
/// the standard such messages have no defined hash.
#[derive(Debug)]
pub struct LengthPadding<const B: usize, const L: usize>(pub(crate) ());

impl<const B: usize, const L: usize> MerkleDamgardPad for LengthPadding<B, L> {
    type Block = [u8; B];

    fn pad(&self, tail: &[u8], bits: u128) -> impl Iterator<Item = Self::Block> {
        let mut first = [0u8; B];
        first[..tail.len()].copy_from_slice(tail);
        first[tail.len()] = 0x80;

        // The length field goes at the end of the first block, unless the
        // tail plus the 1 bit leave too little room, in which case a second
        // block is needed.
        let split = tail.len() + 1 + L > B;
        let mut second = [0u8; B];
        let length = bits.to_be_bytes();
        let last = if split { &mut second } else { &mut first };
        last[B - L..].copy_from_slice(&length[length.len() - L..]);

        iter::once(first).chain(split.then_some(second))
    }
}

/// A streaming Merkle-Damgard hash state.
///
/// Input is [absorbed](Self::absorb) incrementally: bytes are buffered until
/// a whole `B`-byte block accumulates, and each whole block is immediately
/// compressed into the chaining value, so at most `B - 1` bytes are ever
/// buffered between calls. [`finalize`](Self::finalize) pads a copy of the
/// pending tail and returns the resulting chaining value without disturbing
/// the streaming state, so absorbing may continue afterwards as if
/// finalization never happened.
#[derive(Debug)]
pub struct MerkleDamgard<State, Cf, Pad, const B: usize> {
    cf: Cf,
    pad: Pad,
    /// The initial chaining value. Never mutated; `reset` restores the
    /// running state from a fresh copy of it.
    iv: State,
    state: State,
    buf: [u8; B],
    /// Number of pending bytes in `buf`, always less than `B`.
    pending: usize,
    /// Bit length of the message absorbed so far.
    bits: u128,
}

impl<State, Cf, Pad, const B: usize> MerkleDamgard<State, Cf, Pad, B>
where
    State: Clone,
    Cf: CompressionFn<State = State, Block = [u8; B]>,
    Pad: MerkleDamgardPad<Block = [u8; B]>,
{
    pub fn new(cf: Cf, pad: Pad, iv: State) -> Self {
        Self {
            cf,
            pad,
            state: iv.clone(),
            iv,
            buf: [0; B],
            pending: 0,
            bits: 0,
        }
    }

    /// Absorb `preimage` into the hash state, compressing any whole blocks
    /// that accumulate.
    pub fn absorb(&mut self, preimage: &[u8]) {
        self.bits = self.bits.wrapping_add(8 * preimage.len() as u128);

        let mut rest = preimage;
        if self.pending > 0 {
            let take = (B - self.pending).min(rest.len());
            self.buf[self.pending..self.pending + take].copy_from_slice(&rest[..take]);
            self.pending += take;
            rest = &rest[take..];
            if self.pending < B {
                return;
            }
            self.state = self.cf.compress(self.state.clone(), self.buf);
            self.pending = 0;
        }

        let mut blocks = rest.chunks_exact(B);
        for block in &mut blocks {
            // The slice is exactly B bytes, the conversion cannot fail.
            self.state = self.cf.compress(self.state.clone(), block.try_into().unwrap());
        }
        trace!(
            "absorbed {} bytes, {} bits total",
            preimage.len(),
            self.bits
        );

        let tail = blocks.remainder();
        self.buf[..tail.len()].copy_from_slice(tail);
        self.pending = tail.len();
    }

    /// Pad and compress the pending tail, returning the final chaining
    /// value. The streaming state itself is left untouched.
    pub fn finalize(&self) -> State {
        debug!(
            "finalizing {}-bit message, {} pending bytes",
            self.bits, self.pending
        );
        let mut state = self.state.clone();
        for block in self.pad.pad(&self.buf[..self.pending], self.bits) {
            state = self.cf.compress(state, block);
        }
        state
    }

    /// Restore the initial chaining value and discard all absorbed input.
    pub fn reset(&mut self) {
        self.state = self.iv.clone();
        self.pending = 0;
        self.bits = 0;
    }
}
