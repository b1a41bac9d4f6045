//! Decode failures
//!
//! Every stage of the row decoder fails fast with one of three kinds. The
//! `&'static str` payload only names the stage that gave up; it never changes
//! how the error compares through [`DecodeError::kind`].

use thiserror::Error;

/// Convenience alias used by every decoding stage
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Typed failure of a single-row decode
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// No structurally plausible pattern (guard, digit, quiet zone) was found
    #[error("no barcode pattern found: {0}")]
    NotFound(&'static str),
    /// A pattern was found but breaks a structural rule (non-digit, wrong length)
    #[error("malformed barcode: {0}")]
    Format(&'static str),
    /// The digit string is well formed but its check digit does not match
    #[error("checksum mismatch: {0}")]
    Checksum(&'static str),
}

/// Error category without the diagnostic context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`DecodeError::NotFound`]
    NotFound,
    /// See [`DecodeError::Format`]
    Format,
    /// See [`DecodeError::Checksum`]
    Checksum,
}

impl DecodeError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::NotFound(_) => ErrorKind::NotFound,
            DecodeError::Format(_) => ErrorKind::Format,
            DecodeError::Checksum(_) => ErrorKind::Checksum,
        }
    }

    /// True for [`DecodeError::NotFound`]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
