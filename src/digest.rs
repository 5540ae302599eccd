//! Digest value type.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DigestError, DigestResult};

/// The output of a one-shot digest computation.
///
/// A plain owned byte sequence; equality and hashing consider the bytes
/// alone, so digests of identical input under the same algorithm compare
/// equal and can serve as map or set keys. Renders as two lowercase hex
/// characters per byte, in byte order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: Box<[u8]>,
}

impl Digest {
    /// Wrap raw digest bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into_boxed_slice(),
        }
    }

    /// Parse a hex rendering back into a digest.
    ///
    /// Accepts what [`to_hex`](Self::to_hex) produces (uppercase hex is
    /// tolerated). No length is implied here; use
    /// [`HashAlgorithm::parse_digest`](crate::HashAlgorithm::parse_digest)
    /// to also enforce the size of a specific algorithm.
    ///
    /// # Errors
    /// Returns [`DigestError::InvalidHex`] for non-hex characters or an
    /// odd-length string.
    pub fn from_hex(hex_digest: &str) -> DigestResult<Self> {
        Ok(Self::new(hex::decode(hex_digest)?))
    }

    /// The raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the digest, returning its bytes.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes.into()
    }

    /// Digest length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercase hexadecimal rendering, two characters per byte.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.into_vec()
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Hex string in human-readable formats, raw bytes otherwise.

impl Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            serializer.serialize_bytes(&self.bytes)
        }
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DigestVisitor;

        impl<'de> Visitor<'de> for DigestVisitor {
            type Value = Digest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hex string or raw digest bytes")
            }

            fn visit_str<E>(self, v: &str) -> Result<Digest, E>
            where
                E: de::Error,
            {
                Digest::from_hex(v).map_err(E::custom)
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Digest, E>
            where
                E: de::Error,
            {
                Ok(Digest::new(v.to_vec()))
            }

            fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Digest, E>
            where
                E: de::Error,
            {
                Ok(Digest::new(v))
            }

            // Some binary formats encode `serialize_bytes` as a sequence.
            fn visit_seq<A>(self, mut seq: A) -> Result<Digest, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(byte) = seq.next_element::<u8>()? {
                    bytes.push(byte);
                }
                Ok(Digest::new(bytes))
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(DigestVisitor)
        } else {
            deserializer.deserialize_bytes(DigestVisitor)
        }
    }
}
