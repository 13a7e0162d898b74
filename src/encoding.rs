// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{OutputEncoding, Unmappable};
use crate::error::{ConvertError, Result};
use encoding_rs::WINDOWS_1252;

const REPLACEMENT: u8 = b'?';

/// Encode the rendered document in the chosen output encoding.
pub fn encode(text: &str, encoding: OutputEncoding, on_unmappable: Unmappable) -> Result<Vec<u8>> {
    match encoding {
        OutputEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        OutputEncoding::Windows1252 => {
            let (bytes, _, had_errors) = WINDOWS_1252.encode(text);
            if !had_errors {
                return Ok(bytes.into_owned());
            }
            encode_per_char(text, encoding, on_unmappable, encode_cp1252_char)
        }
        OutputEncoding::Latin1 => encode_per_char(text, encoding, on_unmappable, encode_latin1_char),
    }
}

fn encode_cp1252_char(c: char, out: &mut Vec<u8>) -> bool {
    let mut buf = [0u8; 4];
    let (bytes, _, had_errors) = WINDOWS_1252.encode(c.encode_utf8(&mut buf));
    if had_errors {
        return false;
    }
    out.extend_from_slice(&bytes);
    true
}

// ISO-8859-1 is the first 256 code points, one byte each.
fn encode_latin1_char(c: char, out: &mut Vec<u8>) -> bool {
    match u8::try_from(u32::from(c)) {
        Ok(b) => {
            out.push(b);
            true
        }
        Err(_) => false,
    }
}

fn encode_per_char(
    text: &str,
    encoding: OutputEncoding,
    on_unmappable: Unmappable,
    encode_char: fn(char, &mut Vec<u8>) -> bool,
) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        if encode_char(c, &mut out) {
            continue;
        }
        match on_unmappable {
            Unmappable::Fail => {
                return Err(ConvertError::Encoding {
                    encoding: encoding.label(),
                    ch: c,
                });
            }
            Unmappable::Replace => out.push(REPLACEMENT),
        }
    }
    Ok(out)
}
