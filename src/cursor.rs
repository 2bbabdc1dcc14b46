#![doc = r#"
Sequential, bounds-checked reads over an in-memory buffer.

Every decoder in this crate works through a [`Cursor`]: an immutable
byte slice plus a read position. Each read consumes exactly as many
bytes as the value it returns, and a read that would run past the end
of the slice fails with [`DecodeErrorKind::OutOfBounds`] instead of
producing garbage.

Cursors are never shared between decoders. The chunk framer hands each
chunk decoder a fresh cursor over that chunk's payload slice, so an
inner decoder can neither see nor disturb the outer framing.

[`DecodeErrorKind::OutOfBounds`]: crate::error::DecodeErrorKind::OutOfBounds
"#]

use crate::error::{DecodeError, DecodeResult};
use alloc::string::String;

/// A read position over a borrowed byte buffer.
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `buf`.
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// The current read position.
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the read position and the end of the buffer.
    pub const fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// True once the read position has reached the end of the buffer.
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Reposition the cursor to an arbitrary offset.
    ///
    /// Seeking past the end is allowed; every subsequent read will
    /// fail with an out of bounds error until the cursor is moved back.
    pub const fn seek(&mut self, offset: usize) {
        self.pos = offset;
    }

    /// Read exactly `length` bytes as a subslice of the underlying buffer.
    pub fn read_bytes(&mut self, length: usize) -> DecodeResult<&'a [u8]> {
        let end = self
            .pos
            .checked_add(length)
            .ok_or_else(|| DecodeError::oob(self.pos))?;
        if end > self.buf.len() {
            return Err(DecodeError::oob(self.pos));
        }
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let slice = self.read_bytes(N)?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(slice);
        Ok(bytes)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        let [byte] = self.read_array()?;
        Ok(byte)
    }

    /// Read a single signed byte.
    pub fn read_i8(&mut self) -> DecodeResult<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Read a little-endian u16.
    pub fn read_u16_le(&mut self) -> DecodeResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    /// Read a big-endian u16.
    pub fn read_u16_be(&mut self) -> DecodeResult<u16> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Read a little-endian i16.
    pub fn read_i16_le(&mut self) -> DecodeResult<i16> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }

    /// Read a big-endian i16.
    pub fn read_i16_be(&mut self) -> DecodeResult<i16> {
        Ok(i16::from_be_bytes(self.read_array()?))
    }

    /// Read a little-endian u32.
    pub fn read_u32_le(&mut self) -> DecodeResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Read a big-endian u32.
    pub fn read_u32_be(&mut self) -> DecodeResult<u32> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    /// Read a little-endian i32.
    pub fn read_i32_le(&mut self) -> DecodeResult<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    /// Read a big-endian i32.
    pub fn read_i32_be(&mut self) -> DecodeResult<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    /// Read a little-endian IEEE-754 f32.
    pub fn read_f32_le(&mut self) -> DecodeResult<f32> {
        Ok(f32::from_le_bytes(self.read_array()?))
    }

    /// Read a big-endian IEEE-754 f32.
    pub fn read_f32_be(&mut self) -> DecodeResult<f32> {
        Ok(f32::from_be_bytes(self.read_array()?))
    }

    /// Read a little-endian IEEE-754 f64.
    pub fn read_f64_le(&mut self) -> DecodeResult<f64> {
        Ok(f64::from_le_bytes(self.read_array()?))
    }

    /// Read a big-endian IEEE-754 f64.
    pub fn read_f64_be(&mut self) -> DecodeResult<f64> {
        Ok(f64::from_be_bytes(self.read_array()?))
    }

    /// Read bytes up to (and consuming) a NUL terminator, decoded as
    /// UTF-8 text. The terminator is not part of the returned string.
    pub fn read_string(&mut self) -> DecodeResult<String> {
        let start = self.pos;
        loop {
            let byte = self.read_u8()?;
            if byte == 0 {
                let contents = &self.buf[start..self.pos - 1];
                return Ok(String::from_utf8_lossy(contents).into_owned());
            }
        }
    }

    /// Read exactly `length` bytes decoded as UTF-8 text.
    pub fn read_chars(&mut self, length: usize) -> DecodeResult<String> {
        let bytes = self.read_bytes(length)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}
