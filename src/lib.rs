
mod error;
mod hash;
mod hasher;
mod variant;
mod word;

pub use {
    error::Error,
    hash::{
        sha1,
        sha256,
        sha512,
        CompressionFn,
        DaviesMeyer,
        DaviesMeyerCipher,
        DaviesMeyerStep,
        Hash,
        LengthPadding,
        MerkleDamgard,
        MerkleDamgardPad,
        ModularAddition,
        Sha1,
        Sha224,
        Sha256,
        Sha384,
        Sha512,
        Sha512_224,
        Sha512_256,
    },
    hasher::Hasher,
    variant::Algorithm,
    word::Word,
};
