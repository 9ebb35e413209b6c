#![allow(unused_crate_dependencies)]
use std::thread;

use bin_text::*;

/// Sends `message` bit by bit and receives it on the other end, the way a
/// light-signal link would.
fn transmit(width: Width, message: &str) -> String {
    let codec = Codec::new(width);
    let units = codec.decompose(message).expect("message must fit the width");

    let mut receiver = UnitAssembler::new(width);
    for unit in &units {
        receiver.extend(unit.chars().map(|c| c == '1'));
    }

    receiver.finish().expect("no partial word may be left")
}

#[test]
fn ascii_link() {
    assert_eq!(transmit(Width::ASCII, "SOS at 12:00"), "SOS at 12:00");
}

#[test]
fn byte_link() {
    assert_eq!(transmit(Width::BYTE, "Olá, señor"), "Olá, señor");
}

#[test]
fn unicode_link() {
    assert_eq!(transmit(Width::UNICODE, "ライト 💡"), "ライト 💡");
}

#[test]
fn sender_rejects_wide_chars() {
    let err = Codec::new(Width::ASCII)
        .decompose("naïve")
        .expect_err("ï does not fit 7 bits");

    assert!(
        matches!(err, Error::EncodingOverflow { index: 2, ch: 'ï', width: 7 }),
        "unexpected error: {err}"
    );
}

#[test]
fn error_messages() {
    let err = compose(["0000000X"]).expect_err("X is not binary");
    assert_eq!(
        err.to_string(),
        "unit at index 0 is malformed: invalid binary digit 'X' at offset 7"
    );

    let err = compose(["1", "101"]).expect_err("units are too short");
    assert_eq!(
        err.to_string(),
        "unit at index 0 is malformed: expected 8 digits, found 1"
    );

    let err = decompose("€").expect_err("euro sign needs 14 bits");
    assert_eq!(
        err.to_string(),
        "char '€' at index 0 does not fit into 8 bits"
    );
}

#[test]
fn codec_is_shareable() {
    let codec = Codec::new(Width::UTF16);
    let handles: Vec<_> = ["first", "second", "third", "fourth"]
        .into_iter()
        .map(|text| thread::spawn(move || codec.compose(codec.decompose(text)?)))
        .collect();

    for (handle, text) in handles.into_iter().zip(["first", "second", "third", "fourth"]) {
        let back = handle
            .join()
            .expect("thread must not panic")
            .expect("round trip must work");
        assert_eq!(back, text);
    }
}
