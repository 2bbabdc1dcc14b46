use crate::{
    cursor::Cursor,
    error::{DecodeError, DecodeErrorKind, DecodeResult},
};

#[doc = r#"
The decoded `MThd` chunk.

The header payload is exactly three big-endian 16-bit fields:

```text
MThd payload := format(u16) track_count(u16) time_division(u16)
```

Only format 1 (simultaneous tracks over shared timing) is accepted; a
payload longer than the three fields fails with trailing data.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiHeader {
    format: u16,
    track_count: u16,
    time_division: TimeDivision,
}

impl MidiHeader {
    /// Decode a header from an `MThd` chunk payload.
    pub fn decode(payload: &[u8]) -> DecodeResult<Self> {
        let mut cursor = Cursor::new(payload);
        let format = cursor.read_u16_be()?;
        let track_count = cursor.read_u16_be()?;
        let time_division = TimeDivision::new(cursor.read_u16_be()?);

        if format != 1 {
            return Err(DecodeError::new(
                0,
                DecodeErrorKind::UnsupportedFormat(format),
            ));
        }
        if !cursor.is_at_end() {
            return Err(DecodeError::new(
                cursor.position(),
                DecodeErrorKind::TrailingData {
                    remaining: cursor.remaining(),
                },
            ));
        }

        Ok(Self {
            format,
            track_count,
            time_division,
        })
    }

    /// The declared format. Always 1 for a successfully decoded header.
    pub const fn format(&self) -> u16 {
        self.format
    }

    /// The number of tracks the file declares.
    ///
    /// Purely informational: the assembler collects however many `MTrk`
    /// chunks the file actually contains.
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// How delta-time ticks are to be interpreted.
    pub const fn time_division(&self) -> TimeDivision {
        self.time_division
    }
}

/// The header's time division word.
///
/// The raw value is kept as stored. With the high bit clear it counts
/// ticks per quarter note; with the high bit set it encodes an SMPTE
/// frame rate (a negative fps in the high byte) and ticks per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeDivision(u16);

impl TimeDivision {
    /// Wrap a raw time division word.
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// The word exactly as stored in the file.
    pub const fn raw(&self) -> u16 {
        self.0
    }

    /// Ticks per quarter note, if the word is metrical.
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        if self.0 & 0x8000 == 0 {
            Some(self.0)
        } else {
            None
        }
    }

    /// The SMPTE encoding, if present: the frame rate as a negative
    /// two's-complement value (-24, -25, -29, or -30) and the ticks
    /// per frame.
    pub const fn smpte(&self) -> Option<(i8, u8)> {
        if self.0 & 0x8000 == 0 {
            None
        } else {
            Some(((self.0 >> 8) as u8 as i8, (self.0 & 0x00FF) as u8))
        }
    }
}
