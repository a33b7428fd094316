//! Building datasets from untyped input.
//!
//! A typed [`DataFrame`] is always a valid dataset. Everything here exists for
//! input that is *not* typed yet: JSON values, files on disk, and the built-in
//! sample. Anything that cannot be read as a table fails with
//! [`InspectionError::TypeConstraint`].

use crate::error::{InspectionError, Result, ResultExt};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Rows used for CSV schema inference.
const CSV_INFER_SCHEMA_ROWS: usize = 100;

/// Build the reference sample: five employees, one with a missing name.
pub fn sample() -> Result<DataFrame> {
    let df = df!(
        "name" => [Some("Alice"), Some("Bob"), Some("Charlie"), Some("David"), None],
        "age" => [25i64, 30, 35, 40, 25],
        "salary" => [50000i64, 60000, 70000, 80000, 50000],
        "department" => ["HR", "Finance", "IT", "Marketing", "HR"],
    )?;
    Ok(df)
}

/// Short description of a JSON value's kind, for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Convert a column-oriented JSON object into a DataFrame.
///
/// The input must look like `{"col": [v, ...], ...}`. Column order follows the
/// object's key order. Each column becomes:
///
/// - `Int64` if every present value is an integer
/// - `Float64` if every present value is a number and at least one is not an integer
/// - `String` / `Boolean` for all-string / all-bool columns
/// - `Null` if every value is `null`
///
/// `null` cells become missing values.
pub fn from_json(value: &Value) -> Result<DataFrame> {
    let Value::Object(map) = value else {
        return Err(InspectionError::TypeConstraint(format!(
            "expected an object of columns, got {}",
            json_kind(value)
        )));
    };

    let mut height: Option<usize> = None;
    let mut columns = Vec::with_capacity(map.len());

    for (name, cells) in map {
        let Value::Array(cells) = cells else {
            return Err(InspectionError::TypeConstraint(format!(
                "column '{}' must be an array, got {}",
                name,
                json_kind(cells)
            )));
        };

        match height {
            Some(h) if h != cells.len() => {
                return Err(InspectionError::TypeConstraint(format!(
                    "column '{}' has {} rows, expected {}",
                    name,
                    cells.len(),
                    h
                )));
            }
            _ => height = Some(cells.len()),
        }

        columns.push(Column::from(json_column(name, cells)?));
    }

    debug!(
        "Built dataset from JSON: {} columns x {} rows",
        columns.len(),
        height.unwrap_or(0)
    );
    Ok(DataFrame::new(columns)?)
}

fn json_column(name: &str, cells: &[Value]) -> Result<Series> {
    let present: Vec<&Value> = cells.iter().filter(|v| !v.is_null()).collect();

    if present.is_empty() {
        return Ok(Series::new_null(name.into(), cells.len()));
    }

    if present.iter().all(|v| v.is_i64()) {
        let values: Vec<Option<i64>> = cells.iter().map(Value::as_i64).collect();
        Ok(Series::new(name.into(), values))
    } else if present.iter().all(|v| v.is_number()) {
        let values: Vec<Option<f64>> = cells.iter().map(Value::as_f64).collect();
        Ok(Series::new(name.into(), values))
    } else if present.iter().all(|v| v.is_string()) {
        let values: Vec<Option<&str>> = cells.iter().map(Value::as_str).collect();
        Ok(Series::new(name.into(), values))
    } else if present.iter().all(|v| v.is_boolean()) {
        let values: Vec<Option<bool>> = cells.iter().map(Value::as_bool).collect();
        Ok(Series::new(name.into(), values))
    } else {
        Err(InspectionError::TypeConstraint(format!(
            "column '{}' mixes value types",
            name
        )))
    }
}

/// Load a dataset from a `.csv` or `.json` file.
pub fn load(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    info!("Loading dataset from: {}", path.display());

    let df = match extension.as_deref() {
        Some("csv") => load_csv(path)?,
        Some("json") => {
            let content = std::fs::read_to_string(path)?;
            let value: Value = serde_json::from_str(&content)?;
            from_json(&value).context(format!("Reading {}", path.display()))?
        }
        _ => {
            return Err(InspectionError::TypeConstraint(format!(
                "unsupported file '{}' (expected .csv or .json)",
                path.display()
            )));
        }
    };

    info!("Dataset loaded successfully: {:?}", df.shape());
    Ok(df)
}

fn load_csv(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} does not exist", path.display()),
        )
        .into());
    }

    CsvReadOptions::default()
        .with_infer_schema_length(Some(CSV_INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .context(format!("Reading {}", path.display()))
}
