// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Days, NaiveDate};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Date layouts accepted in text cells, most specific to the export first.
const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%Y/%m/%d"];

/// Parse a day/month/year date. Any time part after the first space is ignored.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let token = s.split_whitespace().next()?;
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
}

pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    // Excel epoch is 1899-12-30 (accounts for the 1900 leap year bug)
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    base.checked_add_days(Days::new(serial.trunc() as u64))
}

/// Parse an amount written the Spanish way: `1.234,56 €`, `-3,50`, `12,00 EUR`.
///
/// When a comma is present, dots are thousands separators. Without a comma the
/// string is read as a plain decimal. Only `€` and an `EUR` code are recognised
/// as currency markers.
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let mut cleaned: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '€' && *c != '\u{a0}')
        .collect();
    cleaned = strip_currency_code(&cleaned).to_string();
    if cleaned.contains(',') {
        cleaned = cleaned.replace('.', "").replace(',', ".");
    }
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

fn strip_currency_code(s: &str) -> &str {
    let upper = s.to_ascii_uppercase();
    if upper.ends_with("EUR") {
        &s[..s.len() - 3]
    } else if upper.starts_with("EUR") {
        &s[3..]
    } else {
        s
    }
}

/// Decimal from a numeric spreadsheet cell, via its shortest text form.
pub fn decimal_from_f64(n: f64) -> Option<Decimal> {
    if !n.is_finite() {
        return None;
    }
    Decimal::from_str(&n.to_string())
        .or_else(|_| Decimal::from_scientific(&format!("{:e}", n)))
        .ok()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(json_flag: bool, v: &T) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    Ok(false)
}

/// Collapse internal whitespace runs to one space and trim the ends.
pub fn squash_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
