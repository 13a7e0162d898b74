// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use xlsqif::config::EXPECTED_HEADER;
use xlsqif::models::{CellValue, RawRow};

pub fn header_row(row_number: usize) -> RawRow {
    RawRow::new(
        row_number,
        EXPECTED_HEADER.iter().map(|h| CellValue::from(*h)).collect(),
    )
}

/// Data row in export column order: date, category, subcategory, description,
/// comment, image, amount, balance.
pub fn data_row(
    row_number: usize,
    date: &str,
    category: &str,
    subcategory: &str,
    description: &str,
    comment: &str,
    amount: &str,
) -> RawRow {
    RawRow::new(
        row_number,
        [date, category, subcategory, description, comment, "", amount, "100,00"]
            .into_iter()
            .map(CellValue::from)
            .collect(),
    )
}

pub fn blank_row(row_number: usize) -> RawRow {
    RawRow::new(row_number, Vec::new())
}

/// Metadata rows, a header at `header_idx`, then the given data rows.
pub fn sheet(header_idx: usize, data: Vec<RawRow>) -> Vec<RawRow> {
    let mut rows: Vec<RawRow> = (0..header_idx).map(|i| blank_row(i + 1)).collect();
    rows.push(header_row(header_idx + 1));
    rows.extend(data);
    rows
}
