use crate::error::Result;
use crate::serde::{Field, FieldCodec, FieldKind, FieldReader, FieldWriter, ReadLen, WriteLen};
use std::mem;
use zerocopy::{FromBytes, Immutable, IntoBytes};

/// Raw copy of `size_of::<T>()` bytes, in native layout.
///
/// Applicable to any `T` for which every byte pattern is a valid value,
/// i.e. integers, floats, and `#[repr(C)]` structs of those without padding.
/// A run of such values (the body of a fixed array) is copied in one go.
#[derive(Clone, Copy, Debug)]
pub struct Contiguous;

impl<T> FieldCodec<T> for Contiguous
where
    T: FromBytes + IntoBytes + Immutable,
{
    const KIND: FieldKind = FieldKind::Trivial;
    const FIXED_WIDTH: Option<usize> = Some(mem::size_of::<T>());

    fn ser(field: &T, w: &mut FieldWriter<'_>) -> Result<WriteLen> {
        w.put(IntoBytes::as_bytes(field))
    }

    fn deser_into(field: &mut T, r: &mut FieldReader<'_>) -> Result<ReadLen> {
        let bytes = r.take(mem::size_of::<T>())?;
        IntoBytes::as_mut_bytes(field).copy_from_slice(bytes);
        Ok(ReadLen::new_manual(bytes.len()))
    }

    fn ser_all(fields: &[T], w: &mut FieldWriter<'_>) -> Result<WriteLen> {
        w.put(IntoBytes::as_bytes(fields))
    }

    fn deser_all_into(fields: &mut [T], r: &mut FieldReader<'_>) -> Result<ReadLen> {
        let bytes = r.take(mem::size_of_val(fields))?;
        IntoBytes::as_mut_bytes(fields).copy_from_slice(bytes);
        Ok(ReadLen::new_manual(bytes.len()))
    }
}

macro_rules! impl_contiguous_field {
    ($($t:ty),* $(,)?) => {
        $(
            impl Field for $t {
                type Codec = Contiguous;
            }
        )*
    };
}

impl_contiguous_field!(u8, u16, u32, u64, u128, usize);
impl_contiguous_field!(i8, i16, i32, i64, i128, isize);
impl_contiguous_field!(f32, f64);
