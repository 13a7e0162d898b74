// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{ConvertError, Result};
use crate::models::{CellValue, RawRow};
use crate::utils::excel_serial_to_date;
use calamine::{Data, Reader, open_workbook_auto};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, info};

/// Read every row of the first worksheet (`.xls` or `.xlsx`).
///
/// Rows and columns before the sheet's used range are filled with empty cells,
/// so indexes and row numbers match what a spreadsheet app shows.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ConvertError::EmptyWorkbook)??;

    let (first_row, first_col) = range.start().unwrap_or((0, 0));
    let mut rows: Vec<RawRow> = (0..first_row as usize)
        .map(|i| RawRow::new(i + 1, Vec::new()))
        .collect();

    for (i, row) in range.rows().enumerate() {
        let mut cells = vec![CellValue::Empty; first_col as usize];
        cells.extend(row.iter().map(cell_value));
        rows.push(RawRow::new(first_row as usize + i + 1, cells));
    }
    info!(path = %path.display(), rows = rows.len(), "worksheet loaded");
    Ok(rows)
}

pub fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64())
            .map(CellValue::Date)
            .unwrap_or(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) => s
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => {
            debug!(error = ?e, "cell error treated as empty");
            CellValue::Empty
        }
    }
}
