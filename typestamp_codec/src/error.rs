use crate::hasher::Fingerprint;
use std::string::FromUtf8Error;

pub type Result<T, E = CodecError> = std::result::Result<T, E>;

/// Every way an encode or a decode call can fail.
///
/// None of these are transient. A caller that receives one must treat its output slots
/// as not populated, except that slots decoded before the failing field keep their new values.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The record does not fit in the configured capacity, or the input is larger than it.
    #[error("capacity exceeded: {needed} bytes needed, capacity is {capacity} bytes")]
    CapacityExceeded { needed: usize, capacity: usize },

    /// The input is too short to even hold the schema fingerprint.
    #[error("truncated input: {len} bytes given, at least {needed} bytes needed")]
    TruncatedInput { len: usize, needed: usize },

    /// The input was encoded for a different set of field types.
    #[error("schema mismatch: expected fingerprint {expected}, found {found}")]
    SchemaMismatch {
        expected: Fingerprint,
        found: Fingerprint,
    },

    /// A field needs more bytes than remain in the input.
    #[error("size underrun: field needs {needed} bytes, {remaining} bytes remain")]
    SizeUnderrun { needed: usize, remaining: usize },

    /// A string, byte blob or array is too long for its 2-byte prefix.
    #[error("length {len} does not fit a 2-byte prefix")]
    LengthOverflow { len: usize },

    /// A decoded 2-byte prefix is negative.
    #[error("invalid length prefix {0}")]
    InvalidLength(i16),

    /// A decoded element count differs from the static length of the output array.
    #[error("array length mismatch: output holds {expected} elements, input holds {found}")]
    ArrayLenMismatch { expected: usize, found: usize },

    #[error(transparent)]
    InvalidUtf8(#[from] FromUtf8Error),

    /// A composite field rejected its own bytes.
    #[error("malformed composite field: {0}")]
    Malformed(String),
}
