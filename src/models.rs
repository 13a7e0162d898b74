// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A single spreadsheet cell, reduced to the shapes the converter cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Bool(bool),
}

impl CellValue {
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Date(d) => write!(f, "{}", d.format("%d/%m/%Y")),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }
}

/// One spreadsheet row. `row_number` is 1-based, as shown by spreadsheet apps.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub row_number: usize,
    pub cells: Vec<CellValue>,
}

impl RawRow {
    pub fn new(row_number: usize, cells: Vec<CellValue>) -> Self {
        Self { row_number, cells }
    }

    pub fn cell(&self, idx: usize) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.cells.get(idx).unwrap_or(&EMPTY)
    }

    pub fn text(&self, idx: usize) -> String {
        self.cell(idx).to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTransaction {
    pub row_number: usize,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub subcategory: String,
    pub raw_description: String,
    pub comment: String,
}

/// Transaction type inferred from the leading phrase of a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKeyword {
    Payment,
    BizumReceived,
    BizumSent,
    Transfer,
    Refund,
    Other,
}

impl TypeKeyword {
    /// Label written in the `Tipo:` memo annotation.
    pub fn label(&self) -> &'static str {
        match self {
            TypeKeyword::Payment => "Pago",
            TypeKeyword::BizumReceived | TypeKeyword::BizumSent => "Bizum",
            TypeKeyword::Transfer => "Transferencia",
            TypeKeyword::Refund => "Devolución",
            TypeKeyword::Other => "Recibo",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pub memo_or_payee: String,
    pub keyword: Option<TypeKeyword>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub payee: String,
    pub category: String,
    pub memo: String,
}

/// Account details printed by the bank above the column header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatementMetadata {
    pub account_number: Option<String>,
    pub holder_name: Option<String>,
    pub export_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub row_number: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionReport {
    pub rows_total: usize,
    pub written: usize,
    pub skipped: usize,
    pub skips: Vec<SkippedRow>,
    pub metadata: StatementMetadata,
}
