use {
    crate::{CompressionFn, Word},
    std::marker::PhantomData,
};

/// The Davies-Meyer construction builds a one-way [compression
/// function](CompressionFn) out of a [block cipher](DaviesMeyerCipher): the
/// message block is used as the encryption key, the chaining value as the
/// plaintext, and the ciphertext is [combined](DaviesMeyerStep) with the
/// previous chaining value to produce the new one. Without that final step
/// the function would be invertible by anyone holding the message block,
/// and therefore useless as a hash.
#[derive(Debug)]
pub struct DaviesMeyer<Cip, Step> {
    cip: Cip,
    step: Step,
}

impl<Cip, Step> DaviesMeyer<Cip, Step> {
    pub fn new(cip: Cip, step: Step) -> Self {
        Self { cip, step }
    }
}

/// The block cipher underlying a [Davies-Meyer](DaviesMeyer) compression
/// function.
///
/// Unlike a general-purpose cipher this one is never used for encryption,
/// only for mixing, so it needs no decryption direction and no key schedule
/// agility; SHACAL-1 and SHACAL-2 exist purely to serve SHA-1 and SHA-2.
pub trait DaviesMeyerCipher {
    type Block;
    type State;

    fn encrypt(&self, state: Self::State, block: Self::Block) -> Self::State;
}

/// A step in the Davies-Meyer construction.
///
/// Defines how the previous hash state should be combined with the new hash
/// state. Often this is just XOR.
pub trait DaviesMeyerStep {
    type State;

    fn step(&self, prev: Self::State, new: Self::State) -> Self::State;
}

/// Because the new state is derived by adding the "working variables" to the
/// current state, the [Davies-Meyer step](DaviesMeyerStep) in SHA-1 and
/// SHA-2 is modular addition, word by word.
#[derive(Debug)]
pub struct ModularAddition<State>(pub(crate) PhantomData<State>);

impl<W: Word, const N: usize> DaviesMeyerStep for ModularAddition<[W; N]> {
    type State = [W; N];

    fn step(&self, prev: Self::State, mut new: Self::State) -> Self::State {
        new.iter_mut()
            .zip(prev.iter())
            .for_each(|(n, p)| *n = n.add_mod(*p));
        new
    }
}

impl<Cip: DaviesMeyerCipher, Step: DaviesMeyerStep<State = Cip::State>> CompressionFn
    for DaviesMeyer<Cip, Step>
where
    Cip::State: Clone,
{
    type Block = Cip::Block;
    type State = Cip::State;

    fn compress(&self, state: Self::State, block: Self::Block) -> Self::State {
        self.step
            .step(state.clone(), self.cip.encrypt(state, block))
    }
}
