//! Shared data type helpers.

use polars::prelude::*;
use serde::Serialize;
use std::fmt;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Coarse kind of a column's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Integer or floating point numbers
    Numeric,
    /// Free text
    Textual,
    /// Categorical or enum columns
    Categorical,
    /// Boolean type
    Boolean,
    /// Date, datetime or time types
    Temporal,
    /// Other/unknown types (including all-null columns)
    Other,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Numeric => "numeric",
            Self::Textual => "textual",
            Self::Categorical => "categorical",
            Self::Boolean => "boolean",
            Self::Temporal => "temporal",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType is a date/time type.
#[inline]
pub fn is_temporal_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Datetime(_, _) | DataType::Date | DataType::Time
    )
}

/// Get the kind of a DataType.
pub fn column_kind(dtype: &DataType) -> ColumnKind {
    if is_numeric_dtype(dtype) {
        ColumnKind::Numeric
    } else if is_temporal_dtype(dtype) {
        ColumnKind::Temporal
    } else {
        match dtype {
            DataType::Boolean => ColumnKind::Boolean,
            DataType::String => ColumnKind::Textual,
            DataType::Categorical(..) | DataType::Enum(..) => ColumnKind::Categorical,
            _ => ColumnKind::Other,
        }
    }
}
