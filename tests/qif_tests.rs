// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use xlsqif::config::ExtractionMode;
use xlsqif::models::{ExtractedText, OutputRecord, ParsedTransaction, TypeKeyword};
use xlsqif::qif::{build_record, format_amount, format_date, join_category, render};

fn tx(category: &str, subcategory: &str, comment: &str) -> ParsedTransaction {
    ParsedTransaction {
        row_number: 2,
        date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
        amount: Decimal::from_str("-3.5").unwrap(),
        category: category.into(),
        subcategory: subcategory.into(),
        raw_description: "Pago en CARREFOUR MADRID".into(),
        comment: comment.into(),
    }
}

fn extracted() -> ExtractedText {
    ExtractedText {
        memo_or_payee: "CARREFOUR MADRID".into(),
        keyword: Some(TypeKeyword::Payment),
    }
}

#[test]
fn dates_and_amounts_are_reformatted() {
    assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()), "12/25/2024");
    assert_eq!(format_amount(Decimal::from_str("1234.56").unwrap()), "1234.56");
    assert_eq!(format_amount(Decimal::from_str("-3.5").unwrap()), "-3.50");
    assert_eq!(format_amount(Decimal::from_str("10").unwrap()), "10.00");
    assert_eq!(format_amount(Decimal::from_str("0.005").unwrap()), "0.00");
}

#[test]
fn category_join() {
    assert_eq!(
        join_category("Alimentación", "Supermercados"),
        "Alimentación:Supermercados"
    );
    assert_eq!(join_category("Alimentación", ""), "Alimentación");
    assert_eq!(join_category("", ""), "");
    assert_eq!(join_category("", "Supermercados"), "");
}

#[test]
fn payee_mode_folds_comment_and_type_into_memo() {
    let r = build_record(
        &tx("Alimentación", "Supermercados", "cena navidad"),
        &extracted(),
        ExtractionMode::PayeePlusTypeMemo,
    );
    assert_eq!(r.payee, "CARREFOUR MADRID");
    assert_eq!(r.memo, "cena navidad // Tipo: Pago");
    assert_eq!(r.category, "Alimentación:Supermercados");

    let no_comment = build_record(&tx("", "", ""), &extracted(), ExtractionMode::PayeePlusTypeMemo);
    assert_eq!(no_comment.memo, "Tipo: Pago");

    let plain = ExtractedText {
        memo_or_payee: "Juan Pérez envío".into(),
        keyword: None,
    };
    let r = build_record(&tx("", "", ""), &plain, ExtractionMode::PayeePlusTypeMemo);
    assert_eq!(r.memo, "");
}

#[test]
fn memo_mode_leaves_payee_empty() {
    let r = build_record(
        &tx("Alimentación", "", "ignored"),
        &extracted(),
        ExtractionMode::MemoOnly,
    );
    assert_eq!(r.payee, "");
    assert_eq!(r.memo, "CARREFOUR MADRID");
    assert_eq!(r.category, "Alimentación");
}

#[test]
fn render_writes_tagged_blocks() {
    let records = vec![
        OutputRecord {
            date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
            amount: Decimal::from_str("-3.5").unwrap(),
            payee: "CARREFOUR MADRID".into(),
            category: "Alimentación:Supermercados".into(),
            memo: "Tipo: Pago".into(),
        },
        OutputRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            amount: Decimal::from_str("1234.56").unwrap(),
            payee: String::new(),
            category: String::new(),
            memo: "Nómina".into(),
        },
    ];
    let expected = "!Type:Bank\n\
D12/25/2024\n\
T-3.50\n\
PCARREFOUR MADRID\n\
LAlimentación:Supermercados\n\
MTipo: Pago\n\
^\n\
D01/02/2024\n\
T1234.56\n\
MNómina\n\
^\n";
    assert_eq!(render(&records), expected);
    assert_eq!(render(&records), render(&records));
}

#[test]
fn render_with_no_records_is_just_the_header() {
    assert_eq!(render(&[]), "!Type:Bank\n");
}
