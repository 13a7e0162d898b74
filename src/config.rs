// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::{Days, Local, NaiveDate};
use std::str::FromStr;

pub const EXPECTED_HEADER: [&str; 8] = [
    "F. VALOR",
    "CATEGORÍA",
    "SUBCATEGORÍA",
    "DESCRIPCIÓN",
    "COMENTARIO",
    "IMAGEN",
    "IMPORTE (€)",
    "SALDO (€)",
];

pub const HEADER_SCAN_ROWS: usize = 15;

/// Days accepted past today (five years).
const FUTURE_DAYS: u64 = 5 * 365;

/// Header names backing each logical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub date: String,
    pub category: String,
    pub subcategory: String,
    pub description: String,
    pub comment: String,
    pub amount: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            date: "F. VALOR".into(),
            category: "CATEGORÍA".into(),
            subcategory: "SUBCATEGORÍA".into(),
            description: "DESCRIPCIÓN".into(),
            comment: "COMENTARIO".into(),
            amount: "IMPORTE (€)".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }
}

impl Default for DateRange {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            start: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or(NaiveDate::MIN),
            end: today.checked_add_days(Days::new(FUTURE_DAYS)).unwrap_or(NaiveDate::MAX),
        }
    }
}

/// Where the extracted description ends up in the QIF record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Extracted text goes to the memo, payee stays empty.
    MemoOnly,
    /// Extracted text goes to the payee; memo carries the comment and `Tipo: <keyword>`.
    #[default]
    PayeePlusTypeMemo,
}

impl FromStr for ExtractionMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memo" | "memo-only" => Ok(ExtractionMode::MemoOnly),
            "payee" | "payee-plus-type-memo" => Ok(ExtractionMode::PayeePlusTypeMemo),
            other => Err(anyhow!("Unknown extraction mode '{}' (use payee|memo)", other)),
        }
    }
}

/// Tuning for the uppercase-run heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapsRule {
    /// Minimum number of uppercase letters a run needs to count as a name.
    pub min_letters: usize,
    /// Only accept a run that covers the whole remaining text.
    pub whole_remainder: bool,
}

impl Default for CapsRule {
    fn default() -> Self {
        Self {
            min_letters: 3,
            whole_remainder: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputEncoding {
    #[default]
    Utf8,
    Windows1252,
    Latin1,
}

impl OutputEncoding {
    pub fn label(&self) -> &'static str {
        match self {
            OutputEncoding::Utf8 => "utf-8",
            OutputEncoding::Windows1252 => "cp1252",
            OutputEncoding::Latin1 => "iso-8859-1",
        }
    }
}

impl FromStr for OutputEncoding {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(OutputEncoding::Utf8),
            "cp1252" | "windows-1252" => Ok(OutputEncoding::Windows1252),
            "iso-8859-1" | "latin1" | "latin-1" => Ok(OutputEncoding::Latin1),
            other => Err(anyhow!(
                "Unknown encoding '{}' (use utf-8|cp1252|iso-8859-1)",
                other
            )),
        }
    }
}

/// What to do with characters the output encoding cannot represent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unmappable {
    #[default]
    Fail,
    Replace,
}

/// Conversion settings, built once and shared read-only by every stage.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub expected_header: Vec<String>,
    pub columns: ColumnNames,
    pub header_scan_rows: usize,
    pub date_range: DateRange,
    pub mode: ExtractionMode,
    pub caps: CapsRule,
    pub sort_by_date: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            expected_header: EXPECTED_HEADER.iter().map(|s| s.to_string()).collect(),
            columns: ColumnNames::default(),
            header_scan_rows: HEADER_SCAN_ROWS,
            date_range: DateRange::default(),
            mode: ExtractionMode::default(),
            caps: CapsRule::default(),
            sort_by_date: false,
        }
    }
}

impl ConverterConfig {
    pub fn with_mode(mut self, mode: ExtractionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_caps(mut self, caps: CapsRule) -> Self {
        self.caps = caps;
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn with_sort_by_date(mut self, sort_by_date: bool) -> Self {
        self.sort_by_date = sort_by_date;
        self
    }
}
