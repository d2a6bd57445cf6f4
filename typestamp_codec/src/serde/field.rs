use crate::error::Result;
use crate::serde::{FieldReader, FieldWriter, ReadLen, WriteLen};

mod contiguous;
mod delegated;
mod fixed_array;
mod length_prefixed;
pub use contiguous::*;
pub use delegated::*;
pub use fixed_array::*;
pub use length_prefixed::*;

/// The closed set of encode/decode strategies a field can be routed to.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum FieldKind {
    /// Bit-for-bit copyable scalar.
    Trivial,
    /// Length-prefixed string or byte blob.
    Text,
    /// Fixed array of trivial elements, copied as one run.
    TrivialArray,
    /// Fixed array whose elements are each framed by their own codec.
    CompositeArray,
    /// Scalar that brings its own [`Composite`] capability.
    Composite,
}

/// A value that can be a member of a record.
///
/// The strategy is picked at build time through [`Field::Codec`]:
///
/// ```text
/// impl Field for MyPodStruct {
///     type Codec = Contiguous;
/// }
/// impl Field for MyObject {
///     type Codec = Delegated;
/// }
/// ```
pub trait Field: Sized + 'static {
    type Codec: FieldCodec<Self>;
}

/// An encode/decode strategy for the field type `F`.
pub trait FieldCodec<F> {
    const KIND: FieldKind;

    /// `Some(n)` iff every value of `F` encodes to exactly `n` bytes.
    const FIXED_WIDTH: Option<usize>;

    fn ser(field: &F, w: &mut FieldWriter<'_>) -> Result<WriteLen>;

    /// Decodes in place. On error, `field` may be partially overwritten.
    fn deser_into(field: &mut F, r: &mut FieldReader<'_>) -> Result<ReadLen>;

    fn ser_all(fields: &[F], w: &mut FieldWriter<'_>) -> Result<WriteLen> {
        let mut w_len = 0;
        for field in fields {
            w_len += *Self::ser(field, w)?;
        }
        Ok(WriteLen::new_manual(w_len))
    }

    fn deser_all_into(fields: &mut [F], r: &mut FieldReader<'_>) -> Result<ReadLen> {
        let mut r_len = 0;
        for field in fields {
            r_len += *Self::deser_into(field, r)?;
        }
        Ok(ReadLen::new_manual(r_len))
    }
}

pub const fn kind_of<F: Field>() -> FieldKind {
    <F::Codec as FieldCodec<F>>::KIND
}

pub const fn fixed_width_of<F: Field>() -> Option<usize> {
    <F::Codec as FieldCodec<F>>::FIXED_WIDTH
}

/// Routes a field to the encoder of its kind.
pub struct TypeSerializer;
impl TypeSerializer {
    #[inline]
    pub fn apply<F: Field>(field: &F, w: &mut FieldWriter<'_>) -> Result<WriteLen> {
        <F::Codec as FieldCodec<F>>::ser(field, w)
    }
}

/// Routes a field to the decoder of its kind.
pub struct TypeUnserializer;
impl TypeUnserializer {
    #[inline]
    pub fn apply<F: Field>(field: &mut F, r: &mut FieldReader<'_>) -> Result<ReadLen> {
        <F::Codec as FieldCodec<F>>::deser_into(field, r)
    }
}
