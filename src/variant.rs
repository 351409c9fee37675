use {
    crate::{Error, Hasher},
    std::{fmt, str::FromStr},
};

/// The seven named parameterizations of the Secure Hash Standard.
///
/// An `Algorithm` is the immutable descriptor of a variant: word width,
/// block size, round count, digest length, length-field width. The round
/// constants and initial chaining values live with the engines that consume
/// them ([`sha1`](crate::sha1), [`sha256`](crate::sha256),
/// [`sha512`](crate::sha512)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Sha512_224,
        Algorithm::Sha512_256,
    ];

    /// Construct a streaming [`Hasher`] for this variant.
    pub fn hasher(self) -> Hasher {
        Hasher::new(self)
    }

    /// Word width in bits: 32 or 64.
    pub fn word_bits(self) -> u32 {
        match self {
            Algorithm::Sha1 | Algorithm::Sha224 | Algorithm::Sha256 => 32,
            _ => 64,
        }
    }

    /// Block size in bits, sixteen words per block.
    pub fn block_bits(self) -> u32 {
        16 * self.word_bits()
    }

    /// Number of compression rounds per block.
    pub fn rounds(self) -> u32 {
        match self {
            Algorithm::Sha224 | Algorithm::Sha256 => 64,
            _ => 80,
        }
    }

    /// Chaining value length in words.
    pub fn state_words(self) -> u32 {
        match self {
            Algorithm::Sha1 => 5,
            _ => 8,
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha224 | Algorithm::Sha512_224 => 28,
            Algorithm::Sha256 | Algorithm::Sha512_256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
        }
    }

    /// Width in bits of the big-endian message-length field appended during
    /// padding: 64 for the 32-bit variants, 128 for the 64-bit ones. A
    /// message whose bit length does not fit this field has no defined hash.
    pub fn length_bits(self) -> u32 {
        match self.word_bits() {
            32 => 64,
            _ => 128,
        }
    }
}

/// Whether a message of `bits` bits overflows a length field of
/// `field_bits` bits.
pub(crate) fn exceeds_length_field(bits: u128, field_bits: u32) -> bool {
    field_bits < 128 && bits >> field_bits != 0
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha224 => "SHA-224",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha384 => "SHA-384",
            Algorithm::Sha512 => "SHA-512",
            Algorithm::Sha512_224 => "SHA-512/224",
            Algorithm::Sha512_256 => "SHA-512/256",
        })
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts the bare numeric spellings used by the command line (`"1"`,
    /// `"224"`, `"256"`, `"384"`, `"512"`, `"512224"`, `"512256"`) as well
    /// as the display names (`"SHA-512/224"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut name = s.to_ascii_lowercase();
        name.retain(|c| c != '/' && c != '-');
        match name.strip_prefix("sha").unwrap_or(&name) {
            "1" => Ok(Algorithm::Sha1),
            "224" => Ok(Algorithm::Sha224),
            "256" => Ok(Algorithm::Sha256),
            "384" => Ok(Algorithm::Sha384),
            "512" => Ok(Algorithm::Sha512),
            "512224" => Ok(Algorithm::Sha512_224),
            "512256" => Ok(Algorithm::Sha512_256),
            _ => Err(Error::InvalidVariant(s.to_string())),
        }
    }
}
