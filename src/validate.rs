// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::ConverterConfig;
use crate::error::RowError;
use crate::header::ColumnIndex;
use crate::models::{CellValue, ParsedTransaction, RawRow, SkippedRow};
use crate::utils::{decimal_from_f64, excel_serial_to_date, parse_date, parse_decimal};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

/// Turn one data row into a transaction, or say why it cannot be used.
pub fn validate_row(
    row: &RawRow,
    cols: &ColumnIndex,
    config: &ConverterConfig,
) -> Result<ParsedTransaction, RowError> {
    let date_cell = row.cell(cols.date);
    if date_cell.is_blank() {
        return Err(RowError::MissingField("date"));
    }
    let description = row.text(cols.description).trim().to_string();
    if description.is_empty() {
        return Err(RowError::MissingField("description"));
    }
    let amount_cell = row.cell(cols.amount);
    if amount_cell.is_blank() {
        return Err(RowError::MissingField("amount"));
    }

    let date = date_from_cell(date_cell)?;
    if !config.date_range.contains(date) {
        return Err(RowError::DateOutOfRange(date));
    }
    let amount = amount_from_cell(amount_cell)?;

    let optional = |idx: Option<usize>| {
        idx.map(|i| row.text(i).trim().to_string())
            .unwrap_or_default()
    };

    Ok(ParsedTransaction {
        row_number: row.row_number,
        date,
        amount,
        category: optional(cols.category),
        subcategory: optional(cols.subcategory),
        raw_description: description,
        comment: optional(cols.comment),
    })
}

fn date_from_cell(cell: &CellValue) -> Result<NaiveDate, RowError> {
    let parsed = match cell {
        CellValue::Date(d) => Some(*d),
        CellValue::Number(n) => excel_serial_to_date(*n),
        CellValue::Text(s) => parse_date(s),
        _ => None,
    };
    parsed.ok_or_else(|| RowError::InvalidDate(cell.to_string()))
}

fn amount_from_cell(cell: &CellValue) -> Result<Decimal, RowError> {
    let parsed = match cell {
        CellValue::Number(n) => decimal_from_f64(*n),
        CellValue::Text(s) => parse_decimal(s),
        _ => None,
    };
    parsed.ok_or_else(|| RowError::InvalidAmount(cell.to_string()))
}

/// Validate every data row, keeping input order.
///
/// Each rejected row is logged and returned as a [`SkippedRow`]; nothing here
/// aborts the batch.
pub fn validate_rows(
    rows: &[RawRow],
    cols: &ColumnIndex,
    config: &ConverterConfig,
) -> (Vec<ParsedTransaction>, Vec<SkippedRow>) {
    let mut ok = Vec::with_capacity(rows.len());
    let mut skipped = Vec::new();
    for row in rows {
        match validate_row(row, cols, config) {
            Ok(t) => ok.push(t),
            Err(e) => {
                warn!(row = row.row_number, reason = %e, "skipping row");
                skipped.push(SkippedRow {
                    row_number: row.row_number,
                    reason: e.to_string(),
                });
            }
        }
    }
    (ok, skipped)
}
