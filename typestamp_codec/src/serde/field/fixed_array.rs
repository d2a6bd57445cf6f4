use crate::error::{CodecError, Result};
use crate::serde::{
    ElemCount, Field, FieldCodec, FieldKind, FieldReader, FieldWriter, ReadLen, WriteLen,
    LEN_PREFIX_LEN,
};

/// A 2-byte element count followed by each element, encoded per the element's own codec.
///
/// Trivial elements are copied as one contiguous run. For any fixed-width elements,
/// nested arrays of trivials included, the declared count is checked against the
/// remaining input before any element is touched.
#[derive(Clone, Copy, Debug)]
pub struct FixedArray;

impl<T: Field, const N: usize> Field for [T; N] {
    type Codec = FixedArray;
}

impl<T: Field, const N: usize> FieldCodec<[T; N]> for FixedArray {
    const KIND: FieldKind = match <T::Codec as FieldCodec<T>>::KIND {
        FieldKind::Trivial => FieldKind::TrivialArray,
        _ => FieldKind::CompositeArray,
    };
    const FIXED_WIDTH: Option<usize> = match <T::Codec as FieldCodec<T>>::FIXED_WIDTH {
        Some(elem_width) => Some(LEN_PREFIX_LEN + N * elem_width),
        None => None,
    };

    fn ser(field: &[T; N], w: &mut FieldWriter<'_>) -> Result<WriteLen> {
        let elem_ct = ElemCount::from_len(N)?;

        let mut w_len = 0;
        w_len += *elem_ct.ser(w)?;
        w_len += *<T::Codec as FieldCodec<T>>::ser_all(field, w)?;
        Ok(WriteLen::new_manual(w_len))
    }

    fn deser_into(field: &mut [T; N], r: &mut FieldReader<'_>) -> Result<ReadLen> {
        /* elem_count */
        let (r_len, elem_ct) = ElemCount::deser(r)?;
        if let Some(elem_width) = <T::Codec as FieldCodec<T>>::FIXED_WIDTH {
            r.ensure(elem_ct.saturating_mul(elem_width))?;
        }
        if *elem_ct != N {
            return Err(CodecError::ArrayLenMismatch {
                expected: N,
                found: *elem_ct,
            });
        }

        /* elems */
        let body_r_len = <T::Codec as FieldCodec<T>>::deser_all_into(field, r)?;

        Ok(ReadLen::new_manual(*r_len + *body_r_len))
    }
}
