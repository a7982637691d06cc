//! # Octopus CLI Output Formatting
//!
//! File: cli/src/common/output/mod.rs
//!
//! ## Overview
//!
//! List commands render their records in one of three formats, chosen with
//! `--output-format` (or `OCTOPUS_FORMAT`, or the config file):
//!
//! - `table` (default): a `tabled` table with one row per record
//! - `json`: the records as pretty-printed JSON
//! - `basic`: one name per line, for piping into other tools
//!
//! Each record type implements `Listable` to say what its table row, JSON
//! form and basic line look like.
//!
use crate::core::error::Result;
use clap::ValueEnum;
use console::style;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tabled::{settings::Style, Table, Tabled};

#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Basic,
}

/// A record that list commands can print.
pub trait Listable {
    type Row: Tabled;
    type Json: Serialize;

    fn row(&self) -> Self::Row;
    fn json(&self) -> Self::Json;
    fn basic(&self) -> String;
}

/// Writes `items` to `out` in `format`. `empty` is printed instead of an
/// empty table.
pub fn print_list<T: Listable>(
    out: &mut dyn Write,
    format: OutputFormat,
    items: &[T],
    empty: &str,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let records: Vec<T::Json> = items.iter().map(Listable::json).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        }
        OutputFormat::Basic => {
            for item in items {
                writeln!(out, "{}", item.basic())?;
            }
        }
        OutputFormat::Table => {
            if items.is_empty() {
                writeln!(out, "{empty}")?;
            } else {
                let rows: Vec<T::Row> = items.iter().map(Listable::row).collect();
                writeln!(out, "{}", Table::new(rows).with(Style::rounded()))?;
            }
        }
    }
    Ok(())
}

/// Dimmed text, used for IDs next to names.
pub fn dim(text: impl std::fmt::Display) -> String {
    style(text.to_string()).dim().to_string()
}

/// Renders an optional description for table cells.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
