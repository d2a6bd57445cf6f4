//! A compact binary encoding for ordered, fixed-arity records of heterogeneous fields.
//!
//! ```text
//! let bytes = typestamp_codec::encode((&age, &name))?;
//!
//! let (mut age, mut name) = (0u32, String::new());
//! typestamp_codec::decode(&bytes, (&mut age, &mut name))?;
//! ```
//!
//! Every record carries a fingerprint of its field types; decoding into a differently
//! typed set of slots is refused. See [`hasher`] for what the fingerprint can and cannot tell apart,
//! and [`serde`] for the byte layout.

mod codec;
mod error;
pub mod hasher;
mod record;
pub mod serde;

pub use codec::*;
pub use error::*;
pub use hasher::{
    Fingerprint, OrderedFold, Schema, TypeHasher, TypeIdentity, XorFold, FINGERPRINT_LEN,
};
pub use record::*;
pub use serde::{Composite, Contiguous, Delegated, Field, FieldKind};
