// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{ConverterConfig, OutputEncoding, Unmappable};
use crate::encoding::encode;
use crate::error::Result;
use crate::extract::extract;
use crate::header::{ColumnIndex, locate, read_metadata};
use crate::models::{ConversionReport, OutputRecord, RawRow};
use crate::qif::{build_record, render};
use crate::validate::validate_rows;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Conversion {
    pub records: Vec<OutputRecord>,
    pub report: ConversionReport,
}

impl Conversion {
    pub fn to_qif(&self) -> String {
        render(&self.records)
    }
}

/// Run header location, validation and extraction over in-memory rows.
///
/// Fails only when the header or a required column is missing. Bad data rows
/// end up in `report.skips`; zero surviving rows is left for the caller to
/// judge.
pub fn convert_rows(rows: &[RawRow], config: &ConverterConfig) -> Result<Conversion> {
    let header_idx = locate(rows, config)?;
    let cols = ColumnIndex::resolve(&rows[header_idx], &config.columns)?;
    let metadata = read_metadata(&rows[..header_idx]);
    debug!(?metadata, "statement metadata");

    let data_rows = &rows[header_idx + 1..];
    let (transactions, skips) = validate_rows(data_rows, &cols, config);

    let mut records: Vec<OutputRecord> = transactions
        .iter()
        .map(|tx| {
            let extracted = extract(&tx.raw_description, &config.caps);
            debug!(
                row = tx.row_number,
                description = %tx.raw_description,
                extracted = %extracted.memo_or_payee,
                keyword = ?extracted.keyword,
                "row extracted"
            );
            build_record(tx, &extracted, config.mode)
        })
        .collect();
    if config.sort_by_date {
        // stable: same-day rows keep their input order
        records.sort_by_key(|r| r.date);
    }

    let report = ConversionReport {
        rows_total: data_rows.len(),
        written: records.len(),
        skipped: skips.len(),
        skips,
        metadata,
    };
    info!(
        written = report.written,
        skipped = report.skipped,
        "conversion finished"
    );
    Ok(Conversion { records, report })
}

/// Encode and write the QIF document in one go.
///
/// Encoding happens before the file is created, so an unrepresentable
/// character never leaves a partial file behind.
pub fn write_qif(
    path: &Path,
    conversion: &Conversion,
    encoding: OutputEncoding,
    on_unmappable: Unmappable,
) -> Result<()> {
    let bytes = encode(&conversion.to_qif(), encoding, on_unmappable)?;
    fs::write(path, bytes)?;
    info!(path = %path.display(), encoding = encoding.label(), "QIF written");
    Ok(())
}
