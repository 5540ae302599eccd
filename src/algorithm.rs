//! Hash algorithm selection and one-shot digest computation.
//!
//! [`HashAlgorithm`] is a closed enumeration of the supported one-shot
//! hash functions. Each variant knows its fixed digest size and which
//! external primitive backs it; computing a digest is a pure function
//! of (algorithm, input).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest as _, Sha224, Sha256, Sha384, Sha512};

use crate::digest::Digest;
use crate::error::{DigestError, DigestResult};

/// Supported hash algorithms.
///
/// MD5 and friends are deliberately absent: every variant here has a
/// collision resistance story good enough for checksums and better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Every supported algorithm, in ascending digest-size order.
    pub const ALL: [HashAlgorithm; 5] = [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    /// Canonical lowercase name of the algorithm.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Digest size in bytes.
    #[must_use]
    pub fn digest_size(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha224 => 28,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Compute the digest of the given byte buffer in a single call.
    ///
    /// The whole input is hashed as-is; there is no chunking and no
    /// failure mode. The returned [`Digest`] always holds exactly
    /// [`digest_size`](Self::digest_size) bytes.
    #[must_use]
    pub fn digest(&self, message: &[u8]) -> Digest {
        log::trace!(
            "computing {} digest over {} bytes",
            self.as_str(),
            message.len()
        );

        let bytes = match self {
            HashAlgorithm::Sha1 => Sha1::digest(message).to_vec(),
            HashAlgorithm::Sha224 => Sha224::digest(message).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(message).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(message).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(message).to_vec(),
        };

        Digest::new(bytes)
    }

    /// Compute the digest of the UTF-8 bytes of the given string.
    ///
    /// String-to-bytes conversion is total: a `&str` is valid UTF-8 by
    /// construction, so this can never reject its input. Callers with
    /// non-UTF-8 text should convert lossily themselves and hash the
    /// resulting bytes via [`digest`](Self::digest).
    #[must_use]
    pub fn digest_str(&self, message: &str) -> Digest {
        self.digest(message.as_bytes())
    }

    /// Parse a lowercase-hex rendering of a digest produced by this
    /// algorithm.
    ///
    /// # Errors
    /// Returns [`DigestError::InvalidHex`] for malformed hex and
    /// [`DigestError::LengthMismatch`] when the decoded bytes do not
    /// match [`digest_size`](Self::digest_size).
    pub fn parse_digest(&self, hex_digest: &str) -> DigestResult<Digest> {
        let digest = Digest::from_hex(hex_digest)?;
        if digest.len() != self.digest_size() {
            return Err(DigestError::LengthMismatch {
                expected: self.digest_size(),
                actual: digest.len(),
            });
        }
        Ok(digest)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = DigestError;

    /// Accepts the canonical names case-insensitively, with or without
    /// an interior dash (`"sha256"`, `"SHA-256"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha224" => Ok(HashAlgorithm::Sha224),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(DigestError::UnknownAlgorithm(s.to_string())),
        }
    }
}
