// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Payee/memo extraction from bank descriptions.
//!
//! Descriptions look like `Pago en CARREFOUR MADRID` or
//! `Bizum recibido de Juan Pérez`: an optional leading phrase naming the kind
//! of movement, followed by the counterparty, which the bank usually prints in
//! capitals.

use crate::config::CapsRule;
use crate::models::{ExtractedText, TypeKeyword};
use crate::utils::squash_spaces;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Ordered prefix table. Order matters: the first matching rule wins.
static PREFIX_RULES: Lazy<Vec<(Regex, TypeKeyword)>> = Lazy::new(|| {
    [
        (r"(?i)^pago\s+en\s+", TypeKeyword::Payment),
        (r"(?i)^bizum\s+recibido(?:\s+de)?\s+", TypeKeyword::BizumReceived),
        (r"(?i)^bizum\s+enviado(?:\s+a)?\s+", TypeKeyword::BizumSent),
        (
            r"(?i)^transferencia\s+(?:recibida(?:\s+de)?|internacional\s+emitida\s+[a-z]\d+)\s+",
            TypeKeyword::Transfer,
        ),
        (r"(?i)^devolución\s+tarjeta\s+", TypeKeyword::Refund),
        (r"(?i)^recibo\s+", TypeKeyword::Other),
    ]
    .into_iter()
    .map(|(pat, kw)| (Regex::new(pat).expect("static prefix pattern"), kw))
    .collect()
});

/// Strip the first matching known prefix, returning the rest and its keyword.
pub fn strip_prefix(description: &str) -> (&str, Option<TypeKeyword>) {
    for (re, kw) in PREFIX_RULES.iter() {
        if let Some(m) = re.find(description) {
            debug!(prefix = m.as_str(), keyword = ?kw, "prefix matched");
            return (description[m.end()..].trim(), Some(*kw));
        }
    }
    (description.trim(), None)
}

fn is_caps_char(c: char) -> bool {
    c.is_ascii_uppercase()
        || c.is_ascii_digit()
        || matches!(c, 'Á' | 'É' | 'Í' | 'Ó' | 'Ú' | 'Ü' | 'Ñ' | '.' | '*' | '/' | '&' | '-')
}

fn is_caps_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_caps_char)
}

fn letter_count(tokens: &[&str]) -> usize {
    tokens
        .iter()
        .flat_map(|t| t.chars())
        .filter(|c| c.is_alphabetic())
        .count()
}

/// Leftmost run of consecutive all-caps tokens holding at least
/// `rule.min_letters` letters.
pub fn find_caps_run(text: &str, rule: &CapsRule) -> Option<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if rule.whole_remainder {
        return (!tokens.is_empty() && tokens.iter().all(|t| is_caps_token(t)))
            .then(|| tokens.join(" "));
    }

    let mut start = 0;
    while start < tokens.len() {
        if !is_caps_token(tokens[start]) {
            start += 1;
            continue;
        }
        let end = tokens[start..]
            .iter()
            .position(|t| !is_caps_token(t))
            .map_or(tokens.len(), |n| start + n);
        let run = &tokens[start..end];
        if letter_count(run) >= rule.min_letters {
            return Some(run.join(" "));
        }
        start = end;
    }
    None
}

/// Derive the payee/memo text and transaction keyword from a raw description.
pub fn extract(description: &str, rule: &CapsRule) -> ExtractedText {
    let (remainder, keyword) = strip_prefix(description);
    let text = match find_caps_run(remainder, rule) {
        Some(run) => {
            debug!(run = %run, "uppercase run");
            run
        }
        None => {
            debug!(remainder, "no uppercase run, using remainder");
            squash_spaces(remainder)
        }
    };
    ExtractedText {
        memo_or_payee: text,
        keyword,
    }
}
