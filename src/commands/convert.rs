// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{CapsRule, ConverterConfig, ExtractionMode, OutputEncoding, Unmappable};
use crate::error::ConvertError;
use crate::models::ConversionReport;
use crate::pipeline::{convert_rows, write_qif};
use crate::spreadsheet::read_rows;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let input = PathBuf::from(m.get_one::<String>("input").unwrap().trim());
    let output = m
        .get_one::<String>("output")
        .map(|s| PathBuf::from(s.trim()))
        .unwrap_or_else(|| default_output_path(&input));
    let encoding: OutputEncoding = m.get_one::<String>("encoding").unwrap().parse()?;
    let mode: ExtractionMode = m.get_one::<String>("mode").unwrap().parse()?;
    let on_unmappable = if m.get_flag("replace_unmappable") {
        Unmappable::Replace
    } else {
        Unmappable::Fail
    };
    let caps = CapsRule {
        whole_remainder: m.get_flag("strict_caps"),
        ..CapsRule::default()
    };
    let config = ConverterConfig::default()
        .with_mode(mode)
        .with_caps(caps)
        .with_sort_by_date(m.get_flag("sort_by_date"));

    let rows = read_rows(&input).with_context(|| format!("Read {}", input.display()))?;
    let conversion = convert_rows(&rows, &config)?;

    let json = m.get_flag("json");
    if !maybe_print_json(json, &conversion.report)? {
        print_summary(&conversion.report);
    }
    if conversion.report.written == 0 {
        return Err(ConvertError::NoTransactions {
            skipped: conversion.report.skipped,
        }
        .into());
    }

    write_qif(&output, &conversion, encoding, on_unmappable)
        .with_context(|| format!("Write {}", output.display()))?;
    if json {
        return Ok(());
    }
    println!(
        "Wrote {} transactions to {} ({})",
        conversion.report.written,
        output.display(),
        encoding.label()
    );
    Ok(())
}

/// `extracto.xlsx` -> `extracto.qif`; other names get `.qif` appended.
pub fn default_output_path(input: &Path) -> PathBuf {
    let is_sheet = input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xls") || e.eq_ignore_ascii_case("xlsx"));
    if is_sheet {
        input.with_extension("qif")
    } else {
        let mut s = input.as_os_str().to_owned();
        s.push(".qif");
        PathBuf::from(s)
    }
}

fn print_summary(report: &ConversionReport) {
    let meta = &report.metadata;
    if let Some(acct) = &meta.account_number {
        println!("Account: {}", acct);
    }
    if let Some(holder) = &meta.holder_name {
        println!("Holder: {}", holder);
    }
    println!(
        "Rows: {}  written: {}  skipped: {}",
        report.rows_total, report.written, report.skipped
    );
    if !report.skips.is_empty() {
        let rows = report
            .skips
            .iter()
            .map(|s| vec![s.row_number.to_string(), s.reason.clone()])
            .collect();
        println!("{}", pretty_table(&["Row", "Reason"], rows));
    }
}
