//! Error types for the digest parsing surface.
//!
//! Computing a digest never fails; errors only arise when turning
//! external text back into domain values (algorithm names, hex digests).

use thiserror::Error;

/// Result type for digest parsing operations.
pub type DigestResult<T> = Result<T, DigestError>;

/// Errors from parsing algorithm names and hex digest renderings.
#[derive(Error, Debug, Clone, PartialEq, miette::Diagnostic)]
pub enum DigestError {
    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("digest length mismatch (expected {expected}, actual {actual})")]
    LengthMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DigestError::UnknownAlgorithm("md5".to_string());
        assert_eq!(error.to_string(), "unknown hash algorithm: md5");

        let error = DigestError::LengthMismatch {
            expected: 32,
            actual: 20,
        };
        assert_eq!(
            error.to_string(),
            "digest length mismatch (expected 32, actual 20)"
        );
    }

    #[test]
    fn test_hex_error_conversion() {
        let hex_err = hex::decode("xyz").unwrap_err();
        let error = DigestError::from(hex_err);
        assert!(matches!(error, DigestError::InvalidHex(_)));
    }
}
