//! Records are tuples of fields.
//!
//! A record to encode is a tuple of shared references, `(&a, &b, ..)`.
//! A record to decode into is a tuple of exclusive references, `(&mut a, &mut b, ..)`,
//! i.e. caller-owned output slots.
//! Its [`Schema`] is the tuple of the referenced types, `(A, B, ..)`.

use crate::error::Result;
use crate::hasher::Schema;
use crate::serde::{FieldReader, FieldWriter, ReadLen, WriteLen};

mod tuples;

pub trait Record {
    type Schema: Schema;

    /// Writes every field in declaration order.
    fn ser_fields(self, w: &mut FieldWriter<'_>) -> Result<WriteLen>;
}

pub trait RecordSlots {
    type Schema: Schema;

    /// Reads every field in declaration order. Stops at the first failing field;
    /// slots before it stay populated, slots from it on are untouched or partial.
    fn deser_fields(self, r: &mut FieldReader<'_>) -> Result<ReadLen>;
}

/// A schema whose fields can all be default-constructed and then decoded into.
pub trait OwnedRecord: Schema + Sized {
    fn deser_owned(r: &mut FieldReader<'_>) -> Result<(ReadLen, Self)>;
}

/// Encodes the fields of a record without a fingerprint.
///
/// Meant for [`crate::serde::Composite`] implementations that are made of other fields.
/// The output is not bounded here; the enclosing record's capacity applies once
/// the composite's bytes are written into it.
pub fn pack_fields<R: Record>(record: R) -> Result<Vec<u8>> {
    let mut buf = vec![];
    let mut w = FieldWriter::unbounded(&mut buf);
    record.ser_fields(&mut w)?;
    Ok(buf)
}

/// Decodes fields written by [`pack_fields`] from the front of `buf`.
/// Returns the count of bytes consumed.
pub fn unpack_fields<S: RecordSlots>(buf: &[u8], slots: S) -> Result<ReadLen> {
    let mut r = FieldReader::new(buf);
    slots.deser_fields(&mut r)
}
