//! Schema fingerprints.
//!
//! A record's fingerprint is derived from the *types* of its fields, never from their values.
//! Each type contributes a [`TypeIdentity`]; a [`TypeHasher`] folds the identities of a
//! record's field types, in declaration order, into one [`Fingerprint`].
//!
//! The default [`XorFold`] is commutative and self-canceling:
//! - `(A, B)` and `(B, A)` share a fingerprint;
//! - `(A, A)` has the same fingerprint as `()`.
//!
//! The fingerprint is therefore a type-set checksum rather than a strict schema identity.
//! [`OrderedFold`] closes both gaps, at the cost of producing different bytes.
//! Encoder and decoder must agree on the hasher.

use crate::error::Result;
use crate::serde::{FieldReader, FieldWriter, ReadLen, WriteLen};
use derive_more::{Deref, Display, From};
use foldhash::fast::FixedState;
use std::any::TypeId;
use std::hash::BuildHasher;
use std::mem;


pub const FINGERPRINT_LEN: usize = mem::size_of::<u64>();

const TYPE_IDENTITY_STATE: FixedState = FixedState::with_seed(0x3C6E_F372_FE94_F82B);

/// An identifier of a type, consistent for the lifetime of the process.
#[derive(From, Deref, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TypeIdentity(u64);
impl TypeIdentity {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self(TYPE_IDENTITY_STATE.hash_one(TypeId::of::<T>()))
    }
}

#[derive(From, Deref, Display, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[display(fmt = "{:#018x}", _0)]
pub struct Fingerprint(u64);
impl Fingerprint {
    /// The fingerprint of the record with no fields.
    pub const EMPTY: Self = Self(0);

    pub fn ser(self, w: &mut FieldWriter<'_>) -> Result<WriteLen> {
        w.put(&self.0.to_ne_bytes())
    }
    pub fn deser(r: &mut FieldReader<'_>) -> Result<(ReadLen, Self)> {
        let buf = r.take_array::<FINGERPRINT_LEN>()?;
        let int = u64::from_ne_bytes(buf);
        Ok((ReadLen::new_manual(buf.len()), Self(int)))
    }
}

/// Folds the identities of a record's field types into a fingerprint.
pub trait TypeHasher {
    fn fold(ids: &[TypeIdentity]) -> Fingerprint;
}

/// `acc = acc ^ id`, starting from zero.
#[derive(Clone, Copy, Default, Debug)]
pub struct XorFold;
impl TypeHasher for XorFold {
    fn fold(ids: &[TypeIdentity]) -> Fingerprint {
        let acc = ids.iter().fold(0u64, |acc, id| acc ^ **id);
        Fingerprint(acc)
    }
}

/// `acc = acc * M + id`, starting from zero. Sensitive to order and to repeats.
#[derive(Clone, Copy, Default, Debug)]
pub struct OrderedFold;
impl OrderedFold {
    const MULTIPLIER: u64 = 0x0000_0100_0000_01B3;
}
impl TypeHasher for OrderedFold {
    fn fold(ids: &[TypeIdentity]) -> Fingerprint {
        let acc = ids
            .iter()
            .fold(0u64, |acc, id| acc.wrapping_mul(Self::MULTIPLIER).wrapping_add(**id));
        Fingerprint(acc)
    }
}

/// An ordered list of field types, e.g. `(u32, String)`.
///
/// Implemented for tuples of [`crate::serde::Field`] types of arity 0 through 12.
pub trait Schema {
    const ARITY: usize;

    fn fingerprint<H: TypeHasher>() -> Fingerprint;
}
