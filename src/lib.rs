//! One-Shot Digest Library
//!
//! A thin, typed wrapper over one-shot SHA-1 and SHA-2 hashing.
//! Pick a [`HashAlgorithm`], hand it bytes or a string, and get back a
//! [`Digest`] value that compares by content and renders as lowercase
//! hexadecimal.
//!
//! ```
//! use hashkit::HashAlgorithm;
//!
//! let digest = HashAlgorithm::Sha256.digest_str("hello");
//! assert_eq!(digest.len(), 32);
//! assert_eq!(
//!     digest.to_hex(),
//!     "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
//! );
//! ```

pub mod algorithm;
pub mod digest;
pub mod error;

pub use algorithm::HashAlgorithm;
pub use digest::Digest;
pub use error::{DigestError, DigestResult};
