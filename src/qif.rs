// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::ExtractionMode;
use crate::models::{ExtractedText, OutputRecord, ParsedTransaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt::Write;

pub const TYPE_HEADER: &str = "!Type:Bank";
pub const RECORD_END: &str = "^";
const MEMO_SEPARATOR: &str = " // ";

/// `Category:Subcategory`; a subcategory without a category is dropped.
pub fn join_category(category: &str, subcategory: &str) -> String {
    match (category.is_empty(), subcategory.is_empty()) {
        (true, _) => String::new(),
        (false, true) => category.to_string(),
        (false, false) => format!("{}:{}", category, subcategory),
    }
}

pub fn build_record(
    tx: &ParsedTransaction,
    extracted: &ExtractedText,
    mode: ExtractionMode,
) -> OutputRecord {
    let (payee, memo) = match mode {
        ExtractionMode::MemoOnly => (String::new(), extracted.memo_or_payee.clone()),
        ExtractionMode::PayeePlusTypeMemo => {
            let tipo = extracted.keyword.map(|k| format!("Tipo: {}", k.label()));
            let memo = [Some(tx.comment.clone()), tipo]
                .into_iter()
                .flatten()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(MEMO_SEPARATOR);
            (extracted.memo_or_payee.clone(), memo)
        }
    };
    OutputRecord {
        date: tx.date,
        amount: tx.amount,
        payee,
        category: join_category(&tx.category, &tx.subcategory),
        memo,
    }
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%m/%d/%Y").to_string()
}

/// Two decimal places with a point separator; sign is kept.
pub fn format_amount(amount: Decimal) -> String {
    let mut a = amount.round_dp(2);
    a.rescale(2);
    a.to_string()
}

/// Serialize records into a `!Type:Bank` QIF document.
pub fn render(records: &[OutputRecord]) -> String {
    let mut out = String::new();
    out.push_str(TYPE_HEADER);
    out.push('\n');
    for r in records {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "D{}", format_date(r.date));
        let _ = writeln!(out, "T{}", format_amount(r.amount));
        if !r.payee.is_empty() {
            let _ = writeln!(out, "P{}", r.payee);
        }
        if !r.category.is_empty() {
            let _ = writeln!(out, "L{}", r.category);
        }
        if !r.memo.is_empty() {
            let _ = writeln!(out, "M{}", r.memo);
        }
        out.push_str(RECORD_END);
        out.push('\n');
    }
    out
}
