use crate::error::Result;
use crate::serde::{FieldCodec, FieldKind, FieldReader, FieldWriter, ReadLen, WriteLen};

/// The encode/decode capability of a type that cannot be copied bit for bit.
///
/// The engine does not frame a composite's bytes. Either [`Composite::encode`]
/// produces a self-delimiting span, or the composite is the last field of its record.
/// [`crate::pack_fields`] and [`crate::unpack_fields`] build such spans from other fields.
pub trait Composite {
    fn encode(&self) -> Result<Vec<u8>>;

    /// Reconstructs `self` from the front of `buf`, which holds every byte remaining
    /// in the record, and returns how many bytes were consumed.
    fn decode(&mut self, buf: &[u8]) -> Result<usize>;
}

/// Defers to the field's own [`Composite`] capability.
#[derive(Clone, Copy, Debug)]
pub struct Delegated;

impl<T: Composite> FieldCodec<T> for Delegated {
    const KIND: FieldKind = FieldKind::Composite;
    const FIXED_WIDTH: Option<usize> = None;

    fn ser(field: &T, w: &mut FieldWriter<'_>) -> Result<WriteLen> {
        let body = field.encode()?;
        w.put(&body)
    }

    fn deser_into(field: &mut T, r: &mut FieldReader<'_>) -> Result<ReadLen> {
        let consumed = field.decode(r.rest())?;
        r.skip(consumed)
    }
}
