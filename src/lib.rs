// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod encoding;
pub mod error;
pub mod extract;
pub mod header;
pub mod models;
pub mod pipeline;
pub mod qif;
pub mod spreadsheet;
pub mod utils;
pub mod validate;
