use crate::hex::codec::{hex_encode, hex_string_to_bytes};

#[test]
fn test_hex_encode() {
    assert_eq!(hex_encode(&[]), "");
    assert_eq!(hex_encode(&[0x00]), "00");
    assert_eq!(hex_encode(&[0x41, 0x42]), "4142");
    assert_eq!(hex_encode(&[0xDE, 0xAD, 0xBE, 0xEF]), "DEADBEEF");
    assert_eq!(hex_encode(&[0x0F, 0xF0]), "0FF0");
}

#[test]
fn test_hex_encode_length_and_case() {
    let input = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
    let encoded = hex_encode(&input);
    assert_eq!(encoded.len(), input.len() * 2);
    assert!(encoded
        .bytes()
        .all(|c| c.is_ascii_digit() || (b'A'..=b'F').contains(&c)));
}

#[test]
fn test_decode_valid() {
    let mut out = Vec::new();
    assert!(hex_string_to_bytes("4142", &mut out));
    assert_eq!(out, [0x41, 0x42]);

    let mut out = Vec::new();
    assert!(hex_string_to_bytes("", &mut out));
    assert!(out.is_empty());
}

#[test]
fn test_decode_case_insensitive() {
    let mut lower = Vec::new();
    assert!(hex_string_to_bytes("deadBEEF", &mut lower));
    let mut upper = Vec::new();
    assert!(hex_string_to_bytes("DEADbeef", &mut upper));
    assert_eq!(lower, upper);
    assert_eq!(lower, [0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn test_decode_partial_on_invalid() {
    // Invalid trailing char on an odd tail: the two full pairs survive.
    let mut out = Vec::new();
    assert!(!hex_string_to_bytes("4142G", &mut out));
    assert_eq!(out, [0x41, 0x42]);

    // Invalid first char of a pair.
    let mut out = Vec::new();
    assert!(!hex_string_to_bytes("41G2", &mut out));
    assert_eq!(out, [0x41]);

    // Invalid second char of a pair contributes nothing.
    let mut out = Vec::new();
    assert!(!hex_string_to_bytes("4G42", &mut out));
    assert!(out.is_empty());
}

#[test]
fn test_decode_odd_length() {
    let mut out = Vec::new();
    assert!(!hex_string_to_bytes("414", &mut out));
    assert_eq!(out, [0x41]);

    let mut out = Vec::new();
    assert!(!hex_string_to_bytes("4", &mut out));
    assert!(out.is_empty());
}

#[test]
fn test_decode_rejects_0x_prefix() {
    let mut out = Vec::new();
    assert!(!hex_string_to_bytes("0x41", &mut out));
    assert!(out.is_empty());
}

#[test]
fn test_decode_appends() {
    let mut out = vec![0xFF];
    assert!(hex_string_to_bytes("00", &mut out));
    assert_eq!(out, [0xFF, 0x00]);
}

#[test]
fn test_round_trip() {
    let original = [
        0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54, 0x32,
        0x10, 0xFF, 0x00, 0x80, 0x42,
    ];
    let encoded = hex_encode(&original);
    let mut decoded = Vec::new();
    assert!(hex_string_to_bytes(&encoded, &mut decoded));
    assert_eq!(decoded, original);
}
