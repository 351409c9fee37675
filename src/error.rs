use thiserror::Error;

/// Errors surfaced at the [hasher](crate::Hasher) boundary.
///
/// The compression engines and the framing layer are infallible once a
/// hasher has been constructed; everything here originates from the public
/// facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// [`current_output`](crate::Hasher::current_output) was called before a
    /// successful [`digest`](crate::Hasher::digest), or after the cached
    /// output was invalidated by `update` or `reset`.
    #[error("no cached output, call digest() first")]
    OutputUnavailable,

    /// The accumulated message does not fit the variant's length field, so
    /// its hash is undefined by the standard.
    #[error("message of {bits} bits exceeds the {field_bits}-bit length field")]
    InputTooLong { bits: u128, field_bits: u32 },

    /// The algorithm name is not one of the seven SHA variants.
    #[error("unknown SHA variant {0:?}")]
    InvalidVariant(String),
}
