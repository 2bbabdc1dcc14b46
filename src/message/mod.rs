#![doc = r#"
The typed MIDI messages a track decodes into.

Every track event is a delta-time followed by a status byte. The upper
nibble of the status byte selects the message variant and the lower
nibble names the channel; status `0xFF` escapes into a meta event that
carries its own type byte and length-prefixed payload.

```text
event  := delta-time(VLQ) status payload
status := 0x8n..0xEn channel voice/mode  (n = channel)
        | 0xFn       system exclusive
        | 0xFF       meta event
```
"#]

use crate::{
    cursor::Cursor,
    error::{DecodeError, DecodeErrorKind, DecodeResult},
    vlq::read_vlq,
};
use core::fmt;
use num_enum::TryFromPrimitive;

/// Status byte introducing a meta event.
const META_STATUS: u8 = 0xFF;

/// A channel number, 0-15, taken from the lower nibble of a status byte.
///
/// Recorded for every message, including [`MessageKind::Meta`] and
/// [`MessageKind::SystemExclusive`] where the nibble carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel(u8);

impl Channel {
    pub(crate) const fn from_status(status: u8) -> Self {
        Self(status & 0x0F)
    }

    /// The channel number, 0-15.
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One decoded track event: a message variant stamped with its channel
/// and the absolute tick count at which it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiMessage<'a> {
    channel: Channel,
    absolute_time: u64,
    kind: MessageKind<'a>,
}

impl<'a> MidiMessage<'a> {
    /// Decode one status byte plus variant payload at the cursor,
    /// stamping the message with `absolute_time`.
    pub(crate) fn decode(cursor: &mut Cursor<'a>, absolute_time: u64) -> DecodeResult<Self> {
        let status_at = cursor.position();
        let status = cursor.read_u8()?;
        let channel = Channel::from_status(status);
        let kind = MessageKind::decode(status, status_at, cursor)?;
        Ok(Self {
            channel,
            absolute_time,
            kind,
        })
    }

    /// The channel from the status byte's lower nibble.
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Ticks elapsed since the start of the track.
    pub const fn absolute_time(&self) -> u64 {
        self.absolute_time
    }

    /// The message variant and its payload.
    pub const fn kind(&self) -> &MessageKind<'a> {
        &self.kind
    }
}

/// The message variants, keyed by the status byte's upper nibble.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind<'a> {
    /// `0x8n`: a key released.
    NoteOff {
        /// The key, 0-127.
        key: u8,
        /// Release velocity.
        velocity: u8,
    },
    /// `0x9n`: a key pressed.
    NoteOn {
        /// The key, 0-127.
        key: u8,
        /// Attack velocity. Zero conventionally doubles as a note off.
        velocity: u8,
    },
    /// `0xAn`: per-key aftertouch.
    PolyphonicKeyPressure {
        /// The key, 0-127.
        key: u8,
        /// Pressure amount.
        pressure: u8,
    },
    /// `0xBn`: a controller moved (or a channel mode change, see
    /// [`ControlChange::function`]).
    ControlChange(ControlChange),
    /// `0xCn`: a program (patch) selected.
    ProgramChange {
        /// The program number.
        program: u8,
        /// Trailing data byte.
        value: u8,
    },
    /// `0xDn`: whole-channel aftertouch.
    ChannelPressure {
        /// Pressure amount.
        pressure: u8,
        /// Trailing data byte.
        value: u8,
    },
    /// `0xEn`: pitch bend, one big-endian 16-bit value.
    PitchBend {
        /// The bend amount as stored on the wire.
        value: u16,
    },
    /// `0xFn` (except `0xFF`): a system exclusive payload, stored as a
    /// byte count in VLQ form followed by that many raw bytes.
    SystemExclusive {
        /// The raw payload, excluding the length prefix.
        data: &'a [u8],
    },
    /// `0xFF`: a meta event.
    Meta(MetaEvent<'a>),
}

impl<'a> MessageKind<'a> {
    fn decode(status: u8, status_at: usize, cursor: &mut Cursor<'a>) -> DecodeResult<Self> {
        if status == META_STATUS {
            return Ok(Self::Meta(MetaEvent::decode(cursor)?));
        }
        let kind = match status & 0xF0 {
            0x80 => {
                let key = cursor.read_u8()?;
                let velocity = cursor.read_u8()?;
                Self::NoteOff { key, velocity }
            }
            0x90 => {
                let key = cursor.read_u8()?;
                let velocity = cursor.read_u8()?;
                Self::NoteOn { key, velocity }
            }
            0xA0 => {
                let key = cursor.read_u8()?;
                let pressure = cursor.read_u8()?;
                Self::PolyphonicKeyPressure { key, pressure }
            }
            0xB0 => {
                let controller = cursor.read_u8()?;
                let value = cursor.read_u8()?;
                Self::ControlChange(ControlChange { controller, value })
            }
            0xC0 => {
                let program = cursor.read_u8()?;
                let value = cursor.read_u8()?;
                Self::ProgramChange { program, value }
            }
            0xD0 => {
                let pressure = cursor.read_u8()?;
                let value = cursor.read_u8()?;
                Self::ChannelPressure { pressure, value }
            }
            0xE0 => Self::PitchBend {
                value: cursor.read_u16_be()?,
            },
            0xF0 => {
                let length = read_vlq(cursor)? as usize;
                let data = cursor.read_bytes(length)?;
                Self::SystemExclusive { data }
            }
            _ => {
                return Err(DecodeError::new(
                    status_at,
                    DecodeErrorKind::UnknownMessageType(status),
                ));
            }
        };
        Ok(kind)
    }
}

/// A control change: controller number plus new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlChange {
    /// The controller number, 0-127.
    pub controller: u8,
    /// The controller value.
    pub value: u8,
}

impl ControlChange {
    /// Classify the controller number.
    ///
    /// Controllers `0x78`-`0x7F` are the channel mode functions; every
    /// other number reports as a plain numbered controller.
    pub fn function(&self) -> ControllerFunction {
        match ChannelModeFunction::try_from(self.controller) {
            Ok(mode) => ControllerFunction::Mode(mode),
            Err(_) => ControllerFunction::Numbered(self.controller),
        }
    }
}

/// What a [`ControlChange`]'s controller number means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControllerFunction {
    /// One of the reserved channel mode functions.
    Mode(ChannelModeFunction),
    /// An ordinary numbered controller.
    Numbered(u8),
}

impl fmt::Display for ControllerFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mode(mode) => write!(f, "{mode}"),
            Self::Numbered(n) => write!(f, "controller {n}"),
        }
    }
}

/// The channel mode functions occupying controller numbers `0x78`-`0x7F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ChannelModeFunction {
    /// `0x78`: silence all sounding notes immediately.
    AllSoundOff = 0x78,
    /// `0x79`: reset all controllers to their defaults.
    ResetAllControllers = 0x79,
    /// `0x7A`: connect or disconnect local keyboard control.
    LocalControl = 0x7A,
    /// `0x7B`: release all sounding notes.
    AllNotesOff = 0x7B,
    /// `0x7C`: respond to all channels.
    OmniModeOff = 0x7C,
    /// `0x7D`: respond only to this channel.
    OmniModeOn = 0x7D,
    /// `0x7E`: one voice per channel.
    MonoModeOn = 0x7E,
    /// `0x7F`: normal polyphonic operation.
    PolyModeOn = 0x7F,
}

impl fmt::Display for ChannelModeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AllSoundOff => "all sound off",
            Self::ResetAllControllers => "reset all controllers",
            Self::LocalControl => "local control",
            Self::AllNotesOff => "all notes off",
            Self::OmniModeOff => "omni mode off",
            Self::OmniModeOn => "omni mode on",
            Self::MonoModeOn => "mono mode on",
            Self::PolyModeOn => "poly mode on",
        };
        f.write_str(name)
    }
}

/// A meta event: a type byte and an opaque, length-prefixed payload.
///
/// The payload is never interpreted here; [`MetaEvent::known_type`]
/// only classifies the type byte. An end-of-track marker (`FF 2F 00`)
/// is an ordinary meta event with an empty payload, not a sentinel the
/// track decoder treats specially.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetaEvent<'a> {
    /// The raw type byte.
    pub meta_type: u8,
    /// The payload, excluding the length prefix.
    pub data: &'a [u8],
}

impl<'a> MetaEvent<'a> {
    fn decode(cursor: &mut Cursor<'a>) -> DecodeResult<Self> {
        let meta_type = cursor.read_u8()?;
        let length = read_vlq(cursor)? as usize;
        let data = cursor.read_bytes(length)?;
        Ok(Self { meta_type, data })
    }

    /// Classify the type byte against the standard assignments, if any.
    pub fn known_type(&self) -> Option<MetaType> {
        MetaType::try_from(self.meta_type).ok()
    }

    /// True for the end-of-track marker, meta type `0x2F`.
    pub fn is_end_of_track(&self) -> bool {
        self.known_type() == Some(MetaType::EndOfTrack)
    }
}

/// The standard meta event type byte assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MetaType {
    /// `0x00`: sequence number.
    SequenceNumber = 0x00,
    /// `0x01`: arbitrary text.
    Text = 0x01,
    /// `0x02`: copyright notice.
    Copyright = 0x02,
    /// `0x03`: track name.
    TrackName = 0x03,
    /// `0x04`: instrument name.
    InstrumentName = 0x04,
    /// `0x05`: lyric.
    Lyric = 0x05,
    /// `0x06`: marker.
    Marker = 0x06,
    /// `0x07`: cue point.
    CuePoint = 0x07,
    /// `0x20`: MIDI channel prefix.
    ChannelPrefix = 0x20,
    /// `0x2F`: end of track.
    EndOfTrack = 0x2F,
    /// `0x51`: tempo in microseconds per quarter note.
    SetTempo = 0x51,
    /// `0x54`: SMPTE offset.
    SmpteOffset = 0x54,
    /// `0x58`: time signature.
    TimeSignature = 0x58,
    /// `0x59`: key signature.
    KeySignature = 0x59,
    /// `0x7F`: sequencer-specific data.
    SequencerSpecific = 0x7F,
}
