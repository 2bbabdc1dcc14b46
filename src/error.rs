//! The failures a decode can produce.
//!
//! Every failure is fatal to the decode that raised it and propagates
//! unchanged to the top-level entry point; nothing is caught and
//! retried internally.

use crate::chunk::ChunkTag;
use thiserror::Error;

#[doc = r#"
An error raised while decoding a buffer into the midi representation.

The position is an offset into the buffer that the failing decoder was
handed. Each chunk payload is decoded through its own buffer, so a
failure inside a track reports an offset into that track's payload, not
into the whole file.
"#]
#[derive(Debug, Error, PartialEq, Eq)]
#[error("decode failed at byte {position}: {kind}")]
pub struct DecodeError {
    position: usize,
    kind: DecodeErrorKind,
}

/// The kind of failure behind a [`DecodeError`].
///
/// Every kind aborts the decode that produced it. The only recoverable
/// case is an unknown top-level chunk, and only when the caller supplied
/// an [`on_unknown_chunk`](crate::chunk::DecodeOptions::on_unknown_chunk)
/// handler, in which case no error is raised at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// A read would have run past the end of the buffer.
    #[error("read out of bounds")]
    OutOfBounds,
    /// The header declared a format other than 1.
    ///
    /// Formats 0 and 2 are out of scope by design: only format 1's
    /// multi-track, shared-timing layout fits the track collection
    /// this crate produces.
    #[error("unsupported format {0}")]
    UnsupportedFormat(u16),
    /// The header payload held more than its three 16-bit fields.
    #[error("{remaining} trailing bytes after header fields")]
    TrailingData {
        /// Bytes left over once the declared fields were read.
        remaining: usize,
    },
    /// A top-level chunk tag matched no registered decoder and no
    /// fallback handler was supplied.
    #[error("unknown chunk type `{0}`")]
    UnknownChunk(ChunkTag),
    /// A status byte whose upper nibble names no message variant
    /// (and is not the 0xFF meta marker).
    #[error("unknown message type 0x{0:02X}")]
    UnknownMessageType(u8),
    /// No `MThd` chunk anywhere in the file.
    #[error("no MThd chunk found")]
    MissingHeader,
    /// A variable-length quantity ran past its 4-byte maximum.
    #[error("variable-length quantity exceeds 4 bytes")]
    VlqOverflow,
}

impl DecodeError {
    /// Create a decode error from a position and kind.
    pub const fn new(position: usize, kind: DecodeErrorKind) -> Self {
        Self { position, kind }
    }

    /// Create a new out of bounds error.
    pub const fn oob(position: usize) -> Self {
        Self {
            position,
            kind: DecodeErrorKind::OutOfBounds,
        }
    }

    /// Returns the offset at which decoding failed, relative to the
    /// buffer handed to the failing decoder.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the kind of failure.
    pub const fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// True if the failure was a read past the end of the buffer.
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::OutOfBounds)
    }
}

/// The decode result type (see [`DecodeError`]).
pub type DecodeResult<T> = Result<T, DecodeError>;
