#![doc = r#"
Strict, zero-copy Standard MIDI File decoding.

A Standard MIDI File is a sequence of tagged, length-prefixed chunks:
one `MThd` header and the `MTrk` tracks, each track a run of
delta-timed, status-byte-tagged messages. This crate decodes such a
buffer into a typed, immutable value in a single synchronous pass,
borrowing the input slice instead of copying payloads.

# Example

```rust
use smfparse::prelude::*;

let bytes = [
    0x4D, 0x54, 0x68, 0x64, // MThd
    0x00, 0x00, 0x00, 0x06, // length 6
    0x00, 0x01, 0x00, 0x01, 0x00, 0x60, // format 1, 1 track, 96 tpqn
    0x4D, 0x54, 0x72, 0x6B, // MTrk
    0x00, 0x00, 0x00, 0x04, // length 4
    0x00, 0x90, 0x3C, 0x40, // NoteOn, middle C
];

let file = StandardMidiFile::decode(&bytes)?;
assert_eq!(file.header().track_count(), 1);
assert_eq!(file.tracks()[0].len(), 1);
# Ok::<(), smfparse::error::DecodeError>(())
```

Decoding is strict: every validation failure aborts the whole decode
with a single [`DecodeError`](crate::error::DecodeError). The one
recoverable case is a chunk with an unregistered tag, which a
caller-supplied [`DecodeOptions`](crate::chunk::DecodeOptions) handler
may record and skip. The generic framer,
[`decode_chunks`](crate::chunk::decode_chunks), is public for callers
framing their own chunked formats.

No I/O lives here: obtain the bytes however you like and hand in the
slice. There is no encoder, no streaming mode, and no timing
interpretation beyond accumulating each track's delta-time ticks.
"#]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod chunk;
pub mod cursor;
pub mod error;
pub mod file;
pub mod message;
pub mod prelude;
pub mod vlq;
