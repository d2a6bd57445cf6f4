use crate::error::{CodecError, Result};
use crate::serde::{FieldReader, FieldWriter, ReadLen, WriteLen};
use derive_more::Deref;
use num_traits::ToPrimitive;
use std::mem;

pub const LEN_PREFIX_LEN: usize = mem::size_of::<i16>();
pub const MAX_PREFIXED_LEN: usize = i16::MAX as usize;

/// The byte length of a string's or a byte blob's body.
#[derive(Deref, Clone, Copy, Debug)]
pub struct BodyLen(usize);
impl BodyLen {
    pub fn from_body(buf: &[u8]) -> Result<Self> {
        check_prefixable(buf.len()).map(Self)
    }
    pub fn ser(self, w: &mut FieldWriter<'_>) -> Result<WriteLen> {
        ser_prefix(self.0, w)
    }
    pub fn deser(r: &mut FieldReader<'_>) -> Result<(ReadLen, Self)> {
        let (r_len, len) = deser_prefix(r)?;
        Ok((r_len, Self(len)))
    }
}

/// The count of elements in an array.
#[derive(Deref, Clone, Copy, Debug)]
pub struct ElemCount(usize);
impl ElemCount {
    pub fn from_len(len: usize) -> Result<Self> {
        check_prefixable(len).map(Self)
    }
    pub fn ser(self, w: &mut FieldWriter<'_>) -> Result<WriteLen> {
        ser_prefix(self.0, w)
    }
    pub fn deser(r: &mut FieldReader<'_>) -> Result<(ReadLen, Self)> {
        let (r_len, len) = deser_prefix(r)?;
        Ok((r_len, Self(len)))
    }
}

fn check_prefixable(len: usize) -> Result<usize> {
    if len > MAX_PREFIXED_LEN {
        return Err(CodecError::LengthOverflow { len });
    }
    Ok(len)
}

fn ser_prefix(len: usize, w: &mut FieldWriter<'_>) -> Result<WriteLen> {
    let int = len.to_i16().ok_or(CodecError::LengthOverflow { len })?;
    w.put(&int.to_ne_bytes())
}

fn deser_prefix(r: &mut FieldReader<'_>) -> Result<(ReadLen, usize)> {
    let buf = r.take_array::<LEN_PREFIX_LEN>()?;
    let int = i16::from_ne_bytes(buf);
    let len = int.to_usize().ok_or(CodecError::InvalidLength(int))?;
    Ok((ReadLen::new_manual(buf.len()), len))
}
