// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{ColumnNames, ConverterConfig};
use crate::error::{ConvertError, Result};
use crate::models::{RawRow, StatementMetadata};
use tracing::{debug, info};

/// Find the zero-based index of the column header row.
///
/// Only the first `header_scan_rows` rows are considered. Cells are compared
/// verbatim so that any change to the bank's layout fails loudly instead of
/// shifting columns.
pub fn locate(rows: &[RawRow], config: &ConverterConfig) -> Result<usize> {
    let window = config.header_scan_rows;
    let expected = &config.expected_header;
    for (idx, row) in rows.iter().take(window).enumerate() {
        if row.cells.len() < expected.len() {
            continue;
        }
        let matches = expected
            .iter()
            .enumerate()
            .all(|(col, name)| row.text(col) == *name);
        if matches {
            info!(index = idx, row = row.row_number, "header row found");
            return Ok(idx);
        }
    }
    Err(ConvertError::HeaderNotFound { scanned: window })
}

/// Column positions for each logical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub date: usize,
    pub description: usize,
    pub amount: usize,
    pub category: Option<usize>,
    pub subcategory: Option<usize>,
    pub comment: Option<usize>,
}

impl ColumnIndex {
    pub fn resolve(header: &RawRow, names: &ColumnNames) -> Result<Self> {
        let find = |name: &str| header.cells.iter().position(|c| c.to_string() == name);

        let mut missing = Vec::new();
        let mut required = |name: &str| {
            let pos = find(name);
            if pos.is_none() {
                missing.push(name.to_string());
            }
            pos.unwrap_or_default()
        };
        let date = required(&names.date);
        let description = required(&names.description);
        let amount = required(&names.amount);
        if !missing.is_empty() {
            return Err(ConvertError::MissingRequiredColumn(missing));
        }

        let idx = ColumnIndex {
            date,
            description,
            amount,
            category: find(&names.category),
            subcategory: find(&names.subcategory),
            comment: find(&names.comment),
        };
        debug!(?idx, "columns resolved");
        Ok(idx)
    }
}

/// Pull account details out of the rows printed above the header.
pub fn read_metadata(rows: &[RawRow]) -> StatementMetadata {
    let mut meta = StatementMetadata::default();
    for row in rows {
        if row.cells.len() < 4 {
            continue;
        }
        let label = row.text(2);
        let value = row.text(3).trim().to_string();
        if label.contains("Número de cuenta:") {
            meta.account_number = Some(value);
        } else if label.contains("Titular:") {
            meta.holder_name = Some(value);
        } else if label.contains("Fecha exportación:") {
            meta.export_date = Some(value);
        }
    }
    meta
}
