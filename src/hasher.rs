use {
    crate::{
        variant::exceeds_length_field,
        Algorithm,
        Error,
        Hash,
        Sha1,
        Sha224,
        Sha256,
        Sha384,
        Sha512,
        Sha512_224,
        Sha512_256,
    },
    log::{debug, info},
};

/// A streaming hasher for any [`Algorithm`], producing lowercase hex
/// digests.
///
/// This is the variant-dispatched facade over the typed hashers
/// ([`Sha1`](crate::Sha1), [`Sha256`](crate::Sha256), ...). Beyond
/// streaming, it keeps the full input around for
/// [`current_input`](Self::current_input) and caches the latest digest for
/// [`current_output`](Self::current_output), so its memory use grows with
/// the total input; callers that only need digests of large streams should
/// use the typed hashers, which buffer at most one block.
///
/// ```
/// use shs::{Algorithm, Hasher};
///
/// let mut hasher = Hasher::new(Algorithm::Sha256);
/// hasher.update(b"abc");
/// assert_eq!(
///     hasher.digest().unwrap(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
/// );
/// ```
#[derive(Debug)]
pub struct Hasher {
    algorithm: Algorithm,
    engine: Engine,
    input: Vec<u8>,
    output: Option<String>,
}

#[derive(Debug)]
enum Engine {
    Sha1(Sha1),
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
    Sha512_224(Sha512_224),
    Sha512_256(Sha512_256),
}

impl Engine {
    fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Sha1 => Engine::Sha1(Sha1::default()),
            Algorithm::Sha224 => Engine::Sha224(Sha224::default()),
            Algorithm::Sha256 => Engine::Sha256(Sha256::default()),
            Algorithm::Sha384 => Engine::Sha384(Sha384::default()),
            Algorithm::Sha512 => Engine::Sha512(Sha512::default()),
            Algorithm::Sha512_224 => Engine::Sha512_224(Sha512_224::default()),
            Algorithm::Sha512_256 => Engine::Sha512_256(Sha512_256::default()),
        }
    }

    fn update(&mut self, preimage: &[u8]) {
        match self {
            Engine::Sha1(h) => h.update(preimage),
            Engine::Sha224(h) => h.update(preimage),
            Engine::Sha256(h) => h.update(preimage),
            Engine::Sha384(h) => h.update(preimage),
            Engine::Sha512(h) => h.update(preimage),
            Engine::Sha512_224(h) => h.update(preimage),
            Engine::Sha512_256(h) => h.update(preimage),
        }
    }

    fn digest_hex(&self) -> String {
        match self {
            Engine::Sha1(h) => hex::encode(h.digest()),
            Engine::Sha224(h) => hex::encode(h.digest()),
            Engine::Sha256(h) => hex::encode(h.digest()),
            Engine::Sha384(h) => hex::encode(h.digest()),
            Engine::Sha512(h) => hex::encode(h.digest()),
            Engine::Sha512_224(h) => hex::encode(h.digest()),
            Engine::Sha512_256(h) => hex::encode(h.digest()),
        }
    }

    fn reset(&mut self) {
        match self {
            Engine::Sha1(h) => h.reset(),
            Engine::Sha224(h) => h.reset(),
            Engine::Sha256(h) => h.reset(),
            Engine::Sha384(h) => h.reset(),
            Engine::Sha512(h) => h.reset(),
            Engine::Sha512_224(h) => h.reset(),
            Engine::Sha512_256(h) => h.reset(),
        }
    }
}

impl Hasher {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            engine: Engine::new(algorithm),
            input: Vec::new(),
            output: None,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Append `preimage` to the input stream. Whole blocks are compressed
    /// immediately; any cached output is invalidated.
    pub fn update(&mut self, preimage: &[u8]) {
        debug!("{}: absorbing {} bytes", self.algorithm, preimage.len());
        self.engine.update(preimage);
        self.input.extend_from_slice(preimage);
        self.output = None;
    }

    /// Compute the digest of everything absorbed so far, as a lowercase hex
    /// string of twice [`Algorithm::digest_len`] characters.
    ///
    /// The stream itself is unaffected: updating afterwards behaves as if
    /// `digest` was never called. The result is cached for
    /// [`current_output`](Self::current_output).
    ///
    /// Fails with [`Error::InputTooLong`] if the accumulated message does
    /// not fit the variant's length field.
    pub fn digest(&mut self) -> Result<String, Error> {
        let bits = 8 * self.input.len() as u128;
        let field_bits = self.algorithm.length_bits();
        if exceeds_length_field(bits, field_bits) {
            return Err(Error::InputTooLong { bits, field_bits });
        }
        let digest = self.engine.digest_hex();
        info!("{} digest: {}", self.algorithm, digest);
        self.output = Some(digest.clone());
        Ok(digest)
    }

    /// The full input absorbed since construction or the last
    /// [`reset`](Self::reset). Keeping it costs memory proportional to the
    /// total input.
    pub fn current_input(&self) -> &[u8] {
        &self.input
    }

    /// The cached result of the last [`digest`](Self::digest).
    ///
    /// Fails with [`Error::OutputUnavailable`] if `digest` has not been
    /// called, or if `update` or `reset` invalidated the cache since.
    pub fn current_output(&self) -> Result<&str, Error> {
        self.output.as_deref().ok_or(Error::OutputUnavailable)
    }

    /// Discard all absorbed input and any cached output, restoring the
    /// freshly constructed state.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.input.clear();
        self.output = None;
    }
}
