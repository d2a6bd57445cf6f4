use crate::error::Result;
use crate::serde::{
    BodyLen, Field, FieldCodec, FieldKind, FieldReader, FieldWriter, ReadLen, WriteLen,
};

/// A 2-byte body length followed by the body bytes.
#[derive(Clone, Copy, Debug)]
pub struct LengthPrefixed;

impl Field for String {
    type Codec = LengthPrefixed;
}
impl FieldCodec<String> for LengthPrefixed {
    const KIND: FieldKind = FieldKind::Text;
    const FIXED_WIDTH: Option<usize> = None;

    fn ser(field: &String, w: &mut FieldWriter<'_>) -> Result<WriteLen> {
        ser_body(field.as_bytes(), w)
    }

    fn deser_into(field: &mut String, r: &mut FieldReader<'_>) -> Result<ReadLen> {
        let (r_len, body) = deser_body(r)?;
        *field = String::from_utf8(body.to_vec())?;
        Ok(r_len)
    }
}

impl Field for Vec<u8> {
    type Codec = LengthPrefixed;
}
impl FieldCodec<Vec<u8>> for LengthPrefixed {
    const KIND: FieldKind = FieldKind::Text;
    const FIXED_WIDTH: Option<usize> = None;

    fn ser(field: &Vec<u8>, w: &mut FieldWriter<'_>) -> Result<WriteLen> {
        ser_body(field, w)
    }

    fn deser_into(field: &mut Vec<u8>, r: &mut FieldReader<'_>) -> Result<ReadLen> {
        let (r_len, body) = deser_body(r)?;
        field.clear();
        field.extend_from_slice(body);
        Ok(r_len)
    }
}

fn ser_body(body: &[u8], w: &mut FieldWriter<'_>) -> Result<WriteLen> {
    let body_len = BodyLen::from_body(body)?;

    let mut w_len = 0;
    w_len += *body_len.ser(w)?;
    w_len += *w.put(body)?;
    Ok(WriteLen::new_manual(w_len))
}

fn deser_body<'b>(r: &mut FieldReader<'b>) -> Result<(ReadLen, &'b [u8])> {
    /* body_len */
    let (r_len, body_len) = BodyLen::deser(r)?;

    /* body */
    let body = r.take(*body_len)?;

    Ok((ReadLen::new_manual(*r_len + body.len()), body))
}
