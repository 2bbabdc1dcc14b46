use crate::{cursor::Cursor, error::DecodeResult, message::MidiMessage, vlq::read_vlq};
use alloc::vec::Vec;
use core::slice;

/// The decoded `MTrk` chunk: messages in file order.
///
/// Each event's delta-time is folded into a running tick accumulator as
/// it is read, so iteration order, file order, and chronological order
/// coincide and absolute times never decrease across a track.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiTrack<'a> {
    messages: Vec<MidiMessage<'a>>,
}

impl<'a> MidiTrack<'a> {
    /// Decode a track from an `MTrk` chunk payload.
    ///
    /// Runs until the payload's declared end. There is no end-of-track
    /// sentinel handling: a well-formed `FF 2F 00` comes out as an
    /// ordinary meta message at the tail of the sequence.
    pub fn decode(payload: &'a [u8]) -> DecodeResult<Self> {
        let mut cursor = Cursor::new(payload);
        let mut absolute_time = 0u64;
        let mut messages = Vec::new();

        while !cursor.is_at_end() {
            let delta = read_vlq(&mut cursor)?;
            absolute_time += u64::from(delta);
            messages.push(MidiMessage::decode(&mut cursor, absolute_time)?);
        }

        log::trace!("track decoded, {} messages", messages.len());
        Ok(Self { messages })
    }

    /// The messages, in file order.
    pub fn messages(&self) -> &[MidiMessage<'a>] {
        &self.messages
    }

    /// The number of messages in the track.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True for a track with no events at all.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over the messages in file order.
    pub fn iter(&self) -> slice::Iter<'_, MidiMessage<'a>> {
        self.messages.iter()
    }
}

impl<'a, 't> IntoIterator for &'t MidiTrack<'a> {
    type Item = &'t MidiMessage<'a>;
    type IntoIter = slice::Iter<'t, MidiMessage<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
