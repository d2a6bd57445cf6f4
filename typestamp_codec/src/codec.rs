//! Record encoder and decoder.
//!
//! Both are parameterized by the [`TypeHasher`] that computes the schema fingerprint
//! and by the capacity, in bytes, of one encoded record.
//!
//! ```text
//! let bytes = Serialize::<XorFold, 16384>::apply((&age, &name))?;
//! Unserialize::<XorFold, 16384>::apply(&bytes, (&mut age, &mut name))?;
//! ```
//!
//! [`encode`] and [`decode`] are shorthands for the default parameters.

use crate::error::{CodecError, Result};
use crate::hasher::{Fingerprint, Schema, TypeHasher, XorFold, FINGERPRINT_LEN};
use crate::record::{OwnedRecord, Record, RecordSlots};
use crate::serde::{FieldReader, FieldWriter, ReadLen};
use std::any;
use std::marker::PhantomData;


pub const DEFAULT_CAPACITY: usize = 16384;

pub struct Serialize<H = XorFold, const CAPACITY: usize = DEFAULT_CAPACITY> {
    _phant: PhantomData<H>,
}

impl<H: TypeHasher, const CAPACITY: usize> Serialize<H, CAPACITY> {
    /// Returns `[fingerprint][field_0]..[field_n-1]`.
    ///
    /// Either the whole record is returned, or nothing is.
    pub fn apply<R: Record>(record: R) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(CAPACITY);
        let mut w = FieldWriter::new(&mut buf, CAPACITY);

        let fingerprint = <R::Schema as Schema>::fingerprint::<H>();
        fingerprint.ser(&mut w)?;
        record.ser_fields(&mut w)?;

        log::trace!(
            "Encoded {} ({} fields) into {} of {} bytes.",
            any::type_name::<R::Schema>(),
            <R::Schema as Schema>::ARITY,
            w.position(),
            w.capacity()
        );
        Ok(buf)
    }
}

pub struct Unserialize<H = XorFold, const CAPACITY: usize = DEFAULT_CAPACITY> {
    _phant: PhantomData<H>,
}

impl<H: TypeHasher, const CAPACITY: usize> Unserialize<H, CAPACITY> {
    /// Decodes `bytes` into the caller's slots, in declaration order.
    ///
    /// No slot is written unless `bytes` passes the capacity, length and fingerprint gates.
    /// If a field fails, the slots before it stay populated.
    ///
    /// Returns the count of bytes consumed, fingerprint included.
    /// Bytes after the last field are not an error.
    pub fn apply<S: RecordSlots>(bytes: &[u8], slots: S) -> Result<ReadLen> {
        let (mut r, mut r_len) = Self::open::<S::Schema>(bytes)?;
        r_len += *slots.deser_fields(&mut r)?;

        log::trace!(
            "Decoded {} from {} of {} bytes.",
            any::type_name::<S::Schema>(),
            r_len,
            bytes.len()
        );
        Ok(ReadLen::new_manual(r_len))
    }

    /// Decodes `bytes` into freshly default-constructed fields.
    pub fn apply_owned<O: OwnedRecord>(bytes: &[u8]) -> Result<O> {
        let (mut r, _) = Self::open::<O>(bytes)?;
        let (_, record) = O::deser_owned(&mut r)?;
        Ok(record)
    }

    /// Whether `bytes` was encoded for a schema with the same fingerprint as `S`.
    /// Fails on inputs that do not pass the capacity and length gates.
    pub fn check_type<S: Schema>(bytes: &[u8]) -> Result<bool> {
        let found = Self::read_fingerprint(bytes)?;
        Ok(found == S::fingerprint::<H>())
    }

    fn open<S: Schema>(bytes: &[u8]) -> Result<(FieldReader<'_>, usize)> {
        let found = Self::read_fingerprint(bytes)?;
        let expected = S::fingerprint::<H>();
        if found != expected {
            log::debug!(
                "Rejected input for {}: fingerprint {found} != {expected}.",
                any::type_name::<S>()
            );
            return Err(CodecError::SchemaMismatch { expected, found });
        }

        let mut r = FieldReader::new(bytes);
        let (r_len, _) = Fingerprint::deser(&mut r)?;
        Ok((r, *r_len))
    }

    fn read_fingerprint(bytes: &[u8]) -> Result<Fingerprint> {
        if bytes.len() > CAPACITY {
            log::debug!(
                "Rejected input of {} bytes: capacity is {CAPACITY}.",
                bytes.len()
            );
            return Err(CodecError::CapacityExceeded {
                needed: bytes.len(),
                capacity: CAPACITY,
            });
        }
        peek_fingerprint(bytes)
    }
}

/// Reads the fingerprint at the front of an encoded record.
pub fn peek_fingerprint(bytes: &[u8]) -> Result<Fingerprint> {
    if bytes.len() < FINGERPRINT_LEN {
        log::debug!(
            "Rejected input of {} bytes: shorter than a fingerprint.",
            bytes.len()
        );
        return Err(CodecError::TruncatedInput {
            len: bytes.len(),
            needed: FINGERPRINT_LEN,
        });
    }
    let mut r = FieldReader::new(bytes);
    let (_, fingerprint) = Fingerprint::deser(&mut r)?;
    Ok(fingerprint)
}

pub fn encode<R: Record>(record: R) -> Result<Vec<u8>> {
    <Serialize>::apply(record)
}

pub fn decode<S: RecordSlots>(bytes: &[u8], slots: S) -> Result<ReadLen> {
    <Unserialize>::apply(bytes, slots)
}

pub fn decode_owned<O: OwnedRecord>(bytes: &[u8]) -> Result<O> {
    <Unserialize>::apply_owned(bytes)
}
