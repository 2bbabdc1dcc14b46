#![doc = r#"
The assembled representation of a Standard MIDI File.

[`StandardMidiFile::decode`] registers the `MThd` and `MTrk` decoders
with the chunk framer, walks the file's chunk sequence, and partitions
the results into one header plus the tracks in file order.
"#]

mod header;
pub use header::*;

mod track;
pub use track::*;

use crate::{
    chunk::{ChunkDecodeFn, ChunkTag, DecodeOptions, decode_chunks},
    error::{DecodeError, DecodeErrorKind, DecodeResult},
};
use alloc::vec::Vec;

/// A chunk decoded from one of the two registered SMF tags.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileChunk<'a> {
    /// An `MThd` chunk.
    Header(MidiHeader),
    /// An `MTrk` chunk.
    Track(MidiTrack<'a>),
}

fn header_chunk(payload: &[u8]) -> DecodeResult<FileChunk<'_>> {
    MidiHeader::decode(payload).map(FileChunk::Header)
}

fn track_chunk(payload: &[u8]) -> DecodeResult<FileChunk<'_>> {
    MidiTrack::decode(payload).map(FileChunk::Track)
}

/// A fully decoded file: the header and every track, in file order.
///
/// The result borrows the input buffer (meta and system exclusive
/// payloads are subslices of it) and is immutable once built; decoding
/// the same buffer twice yields two independent values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardMidiFile<'a> {
    header: MidiHeader,
    tracks: Vec<MidiTrack<'a>>,
}

impl<'a> StandardMidiFile<'a> {
    /// Decode a complete file from a byte buffer.
    ///
    /// Any chunk tag other than `MThd`/`MTrk` fails the decode; use
    /// [`decode_with_options`](Self::decode_with_options) to skip or
    /// record foreign chunks instead.
    pub fn decode(bytes: &'a [u8]) -> DecodeResult<Self> {
        Self::decode_with_options(bytes, &mut DecodeOptions::new())
    }

    /// Decode a complete file, with a caller-configured response to
    /// unknown top-level chunks.
    pub fn decode_with_options(
        bytes: &'a [u8],
        options: &mut DecodeOptions<'_>,
    ) -> DecodeResult<Self> {
        let registry: &[(ChunkTag, ChunkDecodeFn<'a, FileChunk<'a>>)] = &[
            (ChunkTag::MTHD, header_chunk),
            (ChunkTag::MTRK, track_chunk),
        ];
        let chunks = decode_chunks(bytes, registry, options)?;

        let mut header = None;
        let mut tracks = Vec::new();
        for chunk in chunks {
            match chunk {
                // first header wins; later ones are not an error
                FileChunk::Header(h) => {
                    if header.is_none() {
                        header = Some(h);
                    }
                }
                FileChunk::Track(t) => tracks.push(t),
            }
        }

        let Some(header) = header else {
            return Err(DecodeError::new(
                bytes.len(),
                DecodeErrorKind::MissingHeader,
            ));
        };

        Ok(Self { header, tracks })
    }

    /// The file's header.
    pub const fn header(&self) -> &MidiHeader {
        &self.header
    }

    /// The tracks, in file order.
    pub fn tracks(&self) -> &[MidiTrack<'a>] {
        &self.tracks
    }

    /// Take the header and tracks apart.
    pub fn into_parts(self) -> (MidiHeader, Vec<MidiTrack<'a>>) {
        (self.header, self.tracks)
    }
}
