#![doc = r#"
The outer chunk framing of a Standard MIDI File.

A file is a bare sequence of chunks. Each chunk opens with a 4-character
ASCII tag, then a big-endian u32 payload length, then exactly that many
payload bytes:

```text
file  := chunk*
chunk := tag(4) length(u32 BE) payload(length)
```

[`decode_chunks`] walks that sequence and dispatches every payload to
the decoder registered for its tag. Unregistered tags go to the
[`DecodeOptions::on_unknown_chunk`] fallback, or fail the decode when no
fallback was supplied. After a chunk is handled, the framer always
resumes at `payload start + length`: an inner decoder that consumed
too little or too much of its payload affects only its own output,
never the framing of the chunks that follow.
"#]

use crate::{
    cursor::Cursor,
    error::{DecodeError, DecodeErrorKind, DecodeResult},
};
use alloc::vec::Vec;
use core::fmt;

/// A 4-character chunk tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkTag([u8; 4]);

impl ChunkTag {
    /// The header chunk tag, `MThd`.
    pub const MTHD: Self = Self(*b"MThd");
    /// The track chunk tag, `MTrk`.
    pub const MTRK: Self = Self(*b"MTrk");

    /// Create a tag from its raw bytes.
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// The raw tag bytes.
    pub const fn bytes(&self) -> [u8; 4] {
        self.0
    }

    pub(crate) fn read(cursor: &mut Cursor<'_>) -> DecodeResult<Self> {
        let slice = cursor.read_bytes(4)?;
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_ascii())
    }
}

/// A decoder for the payload of one registered chunk tag.
///
/// The payload arrives as a fresh, independent slice bounded by the
/// chunk's declared length; the decoder owns its own cursor over it.
pub type ChunkDecodeFn<'a, C> = fn(&'a [u8]) -> DecodeResult<C>;

/// The tag-to-decoder mapping consulted for every framed chunk.
///
/// Lookup is an exact match on the 4 tag bytes, first entry wins.
pub type ChunkRegistry<'a, C> = [(ChunkTag, ChunkDecodeFn<'a, C>)];

/// A fallback invoked with the tag and raw payload of every chunk whose
/// tag is not in the registry. Returning `Err` aborts the decode;
/// returning `Ok(())` skips the chunk and continues with the next one.
pub type UnknownChunkHandler<'h> = &'h mut dyn FnMut(ChunkTag, &[u8]) -> DecodeResult<()>;

/// Configuration for [`decode_chunks`].
#[derive(Default)]
pub struct DecodeOptions<'h> {
    on_unknown_chunk: Option<UnknownChunkHandler<'h>>,
}

impl<'h> DecodeOptions<'h> {
    /// Options with default behavior: an unregistered chunk tag fails
    /// the whole decode with [`DecodeErrorKind::UnknownChunk`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a fallback for unregistered chunk tags.
    pub fn on_unknown_chunk(mut self, handler: UnknownChunkHandler<'h>) -> Self {
        self.on_unknown_chunk = Some(handler);
        self
    }
}

/// Decode the chunk sequence spanning `bytes`.
///
/// Runs until the cursor reaches the end of the buffer. Fails out of
/// bounds if a declared payload length runs past the end, and with
/// [`DecodeErrorKind::UnknownChunk`] on an unregistered tag unless
/// `options` carries a fallback.
pub fn decode_chunks<'a, C>(
    bytes: &'a [u8],
    registry: &ChunkRegistry<'a, C>,
    options: &mut DecodeOptions<'_>,
) -> DecodeResult<Vec<C>> {
    let mut cursor = Cursor::new(bytes);
    let mut chunks = Vec::new();

    while !cursor.is_at_end() {
        let chunk_start = cursor.position();
        let tag = ChunkTag::read(&mut cursor)?;
        let length = cursor.read_u32_be()? as usize;
        // slices the payload and lands the cursor at its declared end
        let payload = cursor.read_bytes(length)?;
        log::trace!("chunk `{tag}` at offset {chunk_start}, {length} byte payload");

        match registry.iter().find(|(known, _)| *known == tag) {
            Some((_, decode)) => chunks.push(decode(payload)?),
            None => match options.on_unknown_chunk.as_mut() {
                Some(handler) => {
                    log::debug!("unknown chunk `{tag}` handed to fallback");
                    handler(tag, payload)?;
                }
                None => {
                    return Err(DecodeError::new(
                        chunk_start,
                        DecodeErrorKind::UnknownChunk(tag),
                    ));
                }
            },
        }
    }

    Ok(chunks)
}
