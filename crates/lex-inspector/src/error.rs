//! Custom error types for data quality inspection.
//!
//! This module provides the error hierarchy using `thiserror`. The three
//! domain errors (type constraint, missing column, non-numeric column) are
//! caller-input mistakes and are never retried.
//!
//! Errors are serializable as `{ code, message }` so callers can surface them
//! without matching on the enum.

use crate::config::ConfigValidationError;
use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for the inspector.
#[derive(Error, Debug)]
pub enum InspectionError {
    /// The value handed to the inspector is not a tabular dataset.
    #[error("Input must be a tabular dataset: {0}")]
    TypeConstraint(String),

    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// Outlier detection requested on a column that does not hold numbers.
    #[error("Outlier detection requires a numeric column, but '{column}' is {dtype}")]
    NonNumericColumn { column: String, dtype: String },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<InspectionError>,
    },
}

impl InspectionError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        InspectionError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Stable error code, independent of the message text.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::TypeConstraint(_) => "TYPE_CONSTRAINT",
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::NonNumericColumn { .. } => "NON_NUMERIC_COLUMN",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error was caused by the caller's input rather than by
    /// the environment or the data library.
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::TypeConstraint(_)
            | Self::ColumnNotFound(_)
            | Self::NonNumericColumn { .. }
            | Self::InvalidConfig(_) => true,
            Self::WithContext { source, .. } => source.is_input_error(),
            _ => false,
        }
    }
}

impl Serialize for InspectionError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("InspectionError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for inspection operations.
pub type Result<T> = std::result::Result<T, InspectionError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| InspectionError::Polars(e).with_context(context))
    }
}
