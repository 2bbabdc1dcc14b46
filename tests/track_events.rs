use pretty_assertions::assert_eq;
use smfparse::prelude::*;

/// Wrap raw event bytes in a minimal one-track file.
fn file_with_track(events: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"MThd");
    bytes.extend_from_slice(&6u32.to_be_bytes());
    bytes.extend_from_slice(&[0x00, 0x01, 0x00, 0x01, 0x00, 0x60]);
    bytes.extend_from_slice(b"MTrk");
    bytes.extend_from_slice(&(events.len() as u32).to_be_bytes());
    bytes.extend_from_slice(events);
    bytes
}

#[test]
fn note_pair_and_end_of_track_all_at_time_zero() {
    let bytes = file_with_track(&[
        0x00, 0x90, 0x3C, 0x40, // NoteOn
        0x00, 0x80, 0x3C, 0x40, // NoteOff
        0x00, 0xFF, 0x2F, 0x00, // end of track
    ]);
    let file = StandardMidiFile::decode(&bytes).unwrap();
    let track = &file.tracks()[0];
    assert_eq!(track.len(), 3);

    let on = &track.messages()[0];
    assert_eq!(on.absolute_time(), 0);
    assert_eq!(on.channel().value(), 0);
    assert_eq!(
        *on.kind(),
        MessageKind::NoteOn {
            key: 0x3C,
            velocity: 0x40
        }
    );

    let off = &track.messages()[1];
    assert_eq!(off.absolute_time(), 0);
    assert_eq!(
        *off.kind(),
        MessageKind::NoteOff {
            key: 0x3C,
            velocity: 0x40
        }
    );

    let end = &track.messages()[2];
    assert_eq!(end.absolute_time(), 0);
    let MessageKind::Meta(meta) = end.kind() else {
        panic!("expected the end-of-track meta event");
    };
    assert_eq!(meta.meta_type, 0x2F);
    assert_eq!(meta.data, &[] as &[u8]);
    assert!(meta.is_end_of_track());
}

#[test]
fn absolute_times_never_decrease() {
    let bytes = file_with_track(&[
        0x00, 0x90, 0x3C, 0x40, // at 0
        0x81, 0x48, 0x80, 0x3C, 0x40, // delta 200, at 200
        0x00, 0x90, 0x40, 0x40, // at 200
        0x7F, 0x80, 0x40, 0x40, // delta 127, at 327
        0x00, 0xFF, 0x2F, 0x00, // at 327
    ]);
    let file = StandardMidiFile::decode(&bytes).unwrap();
    let times: Vec<u64> = file.tracks()[0]
        .iter()
        .map(|m| m.absolute_time())
        .collect();
    assert_eq!(times, vec![0, 200, 200, 327, 327]);
    assert!(times.is_sorted());
}

#[test]
fn every_channel_voice_variant_round_trips_from_the_wire() {
    let bytes = file_with_track(&[
        0x00, 0x81, 0x30, 0x20, // NoteOff, channel 1
        0x00, 0x92, 0x31, 0x21, // NoteOn, channel 2
        0x00, 0xA3, 0x32, 0x22, // PolyphonicKeyPressure, channel 3
        0x00, 0xB4, 0x33, 0x23, // ControlChange, channel 4
        0x00, 0xC5, 0x34, 0x24, // ProgramChange, channel 5
        0x00, 0xD6, 0x35, 0x25, // ChannelPressure, channel 6
        0x00, 0xE7, 0x12, 0x34, // PitchBend, channel 7
    ]);
    let file = StandardMidiFile::decode(&bytes).unwrap();
    let track = &file.tracks()[0];

    let channels: Vec<u8> = track.iter().map(|m| m.channel().value()).collect();
    assert_eq!(channels, vec![1, 2, 3, 4, 5, 6, 7]);

    assert_eq!(
        *track.messages()[0].kind(),
        MessageKind::NoteOff {
            key: 0x30,
            velocity: 0x20
        }
    );
    assert_eq!(
        *track.messages()[2].kind(),
        MessageKind::PolyphonicKeyPressure {
            key: 0x32,
            pressure: 0x22
        }
    );
    assert_eq!(
        *track.messages()[3].kind(),
        MessageKind::ControlChange(ControlChange {
            controller: 0x33,
            value: 0x23
        })
    );
    assert_eq!(
        *track.messages()[4].kind(),
        MessageKind::ProgramChange {
            program: 0x34,
            value: 0x24
        }
    );
    assert_eq!(
        *track.messages()[5].kind(),
        MessageKind::ChannelPressure {
            pressure: 0x35,
            value: 0x25
        }
    );
    assert_eq!(
        *track.messages()[6].kind(),
        MessageKind::PitchBend { value: 0x1234 }
    );
}

// System exclusive payloads are stored with a VLQ byte count after the
// status byte, like meta event payloads.
#[test]
fn system_exclusive_payload_length_is_a_vlq() {
    let bytes = file_with_track(&[
        0x00, 0xF0, 0x05, 0x7E, 0x00, 0x09, 0x01, 0xF7, // 5 byte payload
        0x10, 0x90, 0x3C, 0x40, // a later event still decodes
    ]);
    let file = StandardMidiFile::decode(&bytes).unwrap();
    let track = &file.tracks()[0];
    assert_eq!(track.len(), 2);

    assert_eq!(
        *track.messages()[0].kind(),
        MessageKind::SystemExclusive {
            data: &[0x7E, 0x00, 0x09, 0x01, 0xF7]
        }
    );
    assert_eq!(track.messages()[1].absolute_time(), 0x10);
}

#[test]
fn channel_mode_controllers_have_names_and_others_are_numbered() {
    let bytes = file_with_track(&[
        0x00, 0xB0, 0x78, 0x00, // all sound off
        0x00, 0xB0, 0x7B, 0x00, // all notes off
        0x00, 0xB0, 0x01, 0x44, // modulation wheel: plain controller 1
    ]);
    let file = StandardMidiFile::decode(&bytes).unwrap();
    let track = &file.tracks()[0];

    let functions: Vec<ControllerFunction> = track
        .iter()
        .map(|m| match m.kind() {
            MessageKind::ControlChange(cc) => cc.function(),
            other => panic!("expected a control change, got {other:?}"),
        })
        .collect();
    assert_eq!(
        functions,
        vec![
            ControllerFunction::Mode(ChannelModeFunction::AllSoundOff),
            ControllerFunction::Mode(ChannelModeFunction::AllNotesOff),
            ControllerFunction::Numbered(1),
        ]
    );
    assert_eq!(functions[0].to_string(), "all sound off");
    assert_eq!(functions[2].to_string(), "controller 1");
}

#[test]
fn meta_events_classify_known_types_and_keep_payloads_raw() {
    let bytes = file_with_track(&[
        0x00, 0xFF, 0x03, 0x05, b'p', b'i', b'a', b'n', b'o', // track name
        0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20, // tempo 500000
        0x00, 0xFF, 0x2F, 0x00, // end of track
    ]);
    let file = StandardMidiFile::decode(&bytes).unwrap();
    let track = &file.tracks()[0];

    let metas: Vec<&MetaEvent<'_>> = track
        .iter()
        .map(|m| match m.kind() {
            MessageKind::Meta(meta) => meta,
            other => panic!("expected a meta event, got {other:?}"),
        })
        .collect();

    assert_eq!(metas[0].known_type(), Some(MetaType::TrackName));
    assert_eq!(metas[0].data, b"piano");
    assert_eq!(metas[1].known_type(), Some(MetaType::SetTempo));
    assert_eq!(metas[1].data, &[0x07, 0xA1, 0x20]);
    assert_eq!(metas[2].known_type(), Some(MetaType::EndOfTrack));
}

#[test]
fn a_data_byte_where_a_status_byte_belongs_fails_the_decode() {
    let bytes = file_with_track(&[
        0x00, 0x90, 0x3C, 0x40, // fine
        0x00, 0x3C, 0x40, // running status is not supported
    ]);
    let err = StandardMidiFile::decode(&bytes).unwrap_err();
    assert_eq!(*err.kind(), DecodeErrorKind::UnknownMessageType(0x3C));
}

#[test]
fn an_event_cut_off_by_the_declared_track_end_fails() {
    let bytes = file_with_track(&[0x00, 0x90, 0x3C]); // velocity missing
    let err = StandardMidiFile::decode(&bytes).unwrap_err();
    assert!(err.is_out_of_bounds());
}

#[test]
fn delta_time_overflow_is_rejected() {
    let bytes = file_with_track(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0x90, 0x3C, 0x40]);
    let err = StandardMidiFile::decode(&bytes).unwrap_err();
    assert_eq!(*err.kind(), DecodeErrorKind::VlqOverflow);
}
