// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use thiserror::Error;

/// Fatal errors. Any of these aborts the conversion before output is written.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Header row not found in the first {scanned} rows")]
    HeaderNotFound { scanned: usize },

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingRequiredColumn(Vec<String>),

    #[error("Character '{ch}' cannot be represented in {encoding}")]
    Encoding { encoding: &'static str, ch: char },

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Workbook has no worksheets")]
    EmptyWorkbook,

    #[error("No transactions written ({skipped} rows skipped)")]
    NoTransactions { skipped: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-row problems. The row is skipped and the batch continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("invalid date '{0}'")]
    InvalidDate(String),

    #[error("date {0} outside accepted range")]
    DateOutOfRange(NaiveDate),

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
