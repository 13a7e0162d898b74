// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use xlsqif::config::{OutputEncoding, Unmappable};
use xlsqif::encoding::encode;
use xlsqif::error::ConvertError;

#[test]
fn utf8_is_passthrough() {
    let bytes = encode("Devolución €", OutputEncoding::Utf8, Unmappable::Fail).unwrap();
    assert_eq!(bytes, "Devolución €".as_bytes());
}

#[test]
fn cp1252_covers_spanish_text_and_euro() {
    let bytes = encode("ñÓ€", OutputEncoding::Windows1252, Unmappable::Fail).unwrap();
    assert_eq!(bytes, vec![0xF1, 0xD3, 0x80]);
}

#[test]
fn latin1_maps_code_points_directly() {
    let bytes = encode("Categoría", OutputEncoding::Latin1, Unmappable::Fail).unwrap();
    assert_eq!(bytes, b"Categor\xEDa".to_vec());
}

#[test]
fn unmappable_character_fails_by_default() {
    let err = encode("5 €", OutputEncoding::Latin1, Unmappable::Fail).unwrap_err();
    match err {
        ConvertError::Encoding { encoding, ch } => {
            assert_eq!(encoding, "iso-8859-1");
            assert_eq!(ch, '€');
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(encode("日本", OutputEncoding::Windows1252, Unmappable::Fail).is_err());
}

#[test]
fn unmappable_character_can_be_replaced() {
    let bytes = encode("a€b", OutputEncoding::Latin1, Unmappable::Replace).unwrap();
    assert_eq!(bytes, b"a?b".to_vec());
    let bytes = encode("x日y", OutputEncoding::Windows1252, Unmappable::Replace).unwrap();
    assert_eq!(bytes, b"x?y".to_vec());
}

#[test]
fn encoding_labels_parse() {
    assert_eq!("UTF-8".parse::<OutputEncoding>().unwrap(), OutputEncoding::Utf8);
    assert_eq!("cp1252".parse::<OutputEncoding>().unwrap(), OutputEncoding::Windows1252);
    assert_eq!("iso-8859-1".parse::<OutputEncoding>().unwrap(), OutputEncoding::Latin1);
    assert!("ebcdic".parse::<OutputEncoding>().is_err());
}
