//! Re-exports of the whole public surface.
//!
//! ```rust
//! use smfparse::prelude::*;
//! ```

pub use crate::{
    chunk::{
        ChunkDecodeFn, ChunkRegistry, ChunkTag, DecodeOptions, UnknownChunkHandler, decode_chunks,
    },
    cursor::Cursor,
    error::{DecodeError, DecodeErrorKind, DecodeResult},
    file::{FileChunk, MidiHeader, MidiTrack, StandardMidiFile, TimeDivision},
    message::{
        Channel, ChannelModeFunction, ControlChange, ControllerFunction, MessageKind, MetaEvent,
        MetaType, MidiMessage,
    },
    vlq::read_vlq,
};
