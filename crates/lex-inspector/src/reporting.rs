//! Console rendering of check results.
//!
//! Every function writes plain text to any [`Write`] sink. The inspector
//! passes a locked stdout; tests pass a `Vec<u8>`.

use indexmap::IndexMap;
use polars::prelude::{DataFrame, DataType};
use std::fmt::Display;
use std::io::{self, Write};

pub(crate) const SUMMARY_START: &str = "Performing data quality checks...";
pub(crate) const SUMMARY_DONE: &str = "Data quality checks completed.";

/// Write one `name  value` line per entry, names left-aligned to a shared width.
fn write_table<W, V>(out: &mut W, entries: &IndexMap<String, V>) -> io::Result<()>
where
    W: Write + ?Sized,
    V: Display,
{
    let width = entries.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    for (name, value) in entries {
        writeln!(out, "{:<width$}    {}", name, value, width = width)?;
    }
    Ok(())
}

pub fn write_missing_values<W: Write + ?Sized>(
    out: &mut W,
    missing: &IndexMap<String, usize>,
) -> io::Result<()> {
    writeln!(out, "Missing Values in each column:")?;
    write_table(out, missing)
}

pub fn write_duplicates<W: Write + ?Sized>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "Number of duplicate rows: {}", count)
}

pub fn write_data_types<W: Write + ?Sized>(
    out: &mut W,
    types: &IndexMap<String, DataType>,
) -> io::Result<()> {
    writeln!(out, "Data types of each column:")?;
    write_table(out, types)
}

/// Write the outlier rows of `column` using polars' table formatting.
pub fn write_outliers<W: Write + ?Sized>(
    out: &mut W,
    column: &str,
    outliers: &DataFrame,
) -> io::Result<()> {
    writeln!(out, "Outliers in column {}:", column)?;
    writeln!(out, "{}", outliers)
}

pub fn write_summary_start<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", SUMMARY_START)
}

pub fn write_summary_done<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", SUMMARY_DONE)
}
