// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

pub fn build_cli() -> Command {
    Command::new("xlsqif")
        .version(crate_version!())
        .about("Convert Spanish bank spreadsheet exports (.xls/.xlsx) into QIF")
        .after_help("Example: xlsqif movimientos.xlsx -o salida.qif --encoding cp1252 -v")
        .arg(
            Arg::new("input")
                .help("Spreadsheet exported by the bank")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("QIF output path (default: input path with a .qif extension)"),
        )
        .arg(
            Arg::new("encoding")
                .long("encoding")
                .default_value("utf-8")
                .value_parser(["utf-8", "cp1252", "iso-8859-1"])
                .help("Character encoding of the QIF file"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .default_value("payee")
                .value_parser(["payee", "memo"])
                .help("payee: name to P, comment and type to M; memo: name to M, no payee"),
        )
        .arg(
            Arg::new("strict_caps")
                .long("strict-caps")
                .action(ArgAction::SetTrue)
                .help("Only use an uppercase name when it spans the whole description"),
        )
        .arg(
            Arg::new("sort_by_date")
                .long("sort-by-date")
                .action(ArgAction::SetTrue)
                .help("Write transactions in date order instead of sheet order"),
        )
        .arg(
            Arg::new("replace_unmappable")
                .long("replace-unmappable")
                .action(ArgAction::SetTrue)
                .help("Write '?' for characters the encoding cannot represent instead of failing"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the conversion report as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log per-row details"),
        )
}
