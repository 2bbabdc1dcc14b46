//! MIDI's variable-length quantity encoding.
//!
//! Delta-times, meta-event lengths, and system-exclusive lengths are
//! stored as base-128 integers: the high bit of each byte is a
//! continuation flag and the low seven bits are payload, with the first
//! byte holding the most significant group. Values fit in 28 bits, so
//! an encoding never spans more than four bytes.

use crate::{
    cursor::Cursor,
    error::{DecodeError, DecodeErrorKind, DecodeResult},
};

/// Largest number of bytes a well-formed quantity may span.
const MAX_VLQ_BYTES: u32 = 4;

/// Decode one variable-length quantity at the cursor.
///
/// Fails with [`DecodeErrorKind::VlqOverflow`] if a fifth continuation
/// byte appears, and with an out of bounds error if the buffer ends
/// mid-quantity.
pub fn read_vlq(cursor: &mut Cursor<'_>) -> DecodeResult<u32> {
    let start = cursor.position();
    let mut value = 0u32;
    for _ in 0..MAX_VLQ_BYTES {
        let byte = cursor.read_u8()?;
        value = (value << 7) | u32::from(byte & 0x7F);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(DecodeError::new(start, DecodeErrorKind::VlqOverflow))
}
