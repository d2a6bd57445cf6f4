//! # Serialization format
//!
//! A record is an ordered, fixed-arity sequence of [`Field`]s.
//! Its serialized representation starts with the record's schema fingerprint
//! (see [`crate::hasher`]), followed by each field, back to back, with no separators.
//!
//! All integers, including the fingerprint and the prefixes, are in native byte order.
//! Encoder and decoder are assumed to share one memory layout.
//!
//! Trivial fields have fixed body lengths; these lengths are not encoded.
//! Strings, byte blobs and arrays have their length or element count encoded
//! in a 2-byte signed prefix, so the range is `0..=32767`.
//! A composite field is whatever its own [`Composite`] capability writes;
//! it must be self-delimiting, or be the last field of the record.
//!
//! ```text
//! struct Record {
//!     fingerprint:    u64,
//!     field_0:        Field,
//!     field_1:        Field,
//!     ...
//! }
//!
//! struct Field::Trivial {
//!     body:           [u8; size_of::<T>()],
//! }
//!
//! struct Field::Text or Field::Bytes {
//!     body_len:       i16,
//!     body:           [u8; body_len],
//! }
//!
//! struct Field::TrivialArray {
//!     elem_count:     i16,
//!     body:           [u8; elem_count * size_of::<T>()],
//! }
//!
//! struct Field::CompositeArray {
//!     elem_count:     i16,
//!     elem_0:         Field,
//!     elem_1:         Field,
//!     ...
//! }
//!
//! struct Field::Composite {
//!     body:           [u8; decided by the type itself],
//! }
//! ```

mod cursor;
mod field;
mod lengths;

pub use cursor::*;
pub use field::*;
pub use lengths::*;
