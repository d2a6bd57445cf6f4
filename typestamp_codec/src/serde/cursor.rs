use crate::error::{CodecError, Result};
use crate::serde::{Field, TypeSerializer, TypeUnserializer};
use derive_more::Deref;

#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);
impl WriteLen {
    pub fn new_manual(i: usize) -> Self {
        Self(i)
    }
}

#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct ReadLen(usize);
impl ReadLen {
    pub fn new_manual(i: usize) -> Self {
        Self(i)
    }
}

/// Appends fields to a byte vector, up to a capacity.
///
/// The capacity bounds the bytes written through this writer, not the vector's length.
/// A write that would exceed it fails with [`CodecError::CapacityExceeded`]
/// and leaves the vector as it was.
pub struct FieldWriter<'b> {
    buf: &'b mut Vec<u8>,
    start: usize,
    capacity: usize,
}

impl<'b> FieldWriter<'b> {
    pub fn new(buf: &'b mut Vec<u8>, capacity: usize) -> Self {
        let start = buf.len();
        Self {
            buf,
            start,
            capacity,
        }
    }

    /// A writer bounded only by the 2-byte prefixes of the fields themselves.
    pub fn unbounded(buf: &'b mut Vec<u8>) -> Self {
        Self::new(buf, usize::MAX)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn position(&self) -> usize {
        self.buf.len() - self.start
    }
    pub fn remaining(&self) -> usize {
        self.capacity - self.position()
    }

    pub fn put(&mut self, bytes: &[u8]) -> Result<WriteLen> {
        let end = self.position().saturating_add(bytes.len());
        if end > self.capacity() {
            return Err(CodecError::CapacityExceeded {
                needed: end,
                capacity: self.capacity(),
            });
        }
        self.buf.extend_from_slice(bytes);
        Ok(WriteLen(bytes.len()))
    }

    pub fn put_field<F: Field>(&mut self, field: &F) -> Result<WriteLen> {
        TypeSerializer::apply(field, self)
    }

    /// The bytes written through this writer.
    pub fn written(&self) -> &[u8] {
        &self.buf[self.start..]
    }
}

/// Reads fields sequentially out of a byte slice.
///
/// No read ever goes past the end of the slice; one that would fails with
/// [`CodecError::SizeUnderrun`] and leaves the cursor where it was.
pub struct FieldReader<'b> {
    buf: &'b [u8],
    pos: usize,
}

impl<'b> FieldReader<'b> {
    pub fn new(buf: &'b [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Every byte not yet consumed.
    pub fn rest(&self) -> &'b [u8] {
        &self.buf[self.pos..]
    }

    pub fn ensure(&self, needed: usize) -> Result<()> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(CodecError::SizeUnderrun { needed, remaining });
        }
        Ok(())
    }

    pub fn take(&mut self, len: usize) -> Result<&'b [u8]> {
        self.ensure(len)?;
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn take_array<const LEN: usize>(&mut self) -> Result<[u8; LEN]> {
        let bytes = self.take(LEN)?;
        let mut buf = [0u8; LEN];
        buf.copy_from_slice(bytes);
        Ok(buf)
    }

    pub fn skip(&mut self, len: usize) -> Result<ReadLen> {
        self.take(len).map(|bytes| ReadLen(bytes.len()))
    }

    pub fn take_field<F: Field>(&mut self, field: &mut F) -> Result<ReadLen> {
        TypeUnserializer::apply(field, self)
    }
}
