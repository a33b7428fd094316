//! Data Quality Inspection Library
//!
//! Quick data quality checks over a single in-memory Polars [`DataFrame`](polars::prelude::DataFrame).
//!
//! # Overview
//!
//! An [`Inspector`] wraps one dataset and provides:
//!
//! - **Missing values**: null count per column, in column order
//! - **Duplicate rows**: rows that exactly repeat an earlier row
//! - **Data types**: declared type per column, in column order
//! - **Outliers**: rows outside the IQR fences of a numeric column
//! - **Summary**: the first three checks printed in order
//!
//! Every check has a pure form returning its result and a `check_*` form that
//! also prints it to stdout (or to any writer via the `*_to` variants).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lex_inspector::{Inspector, InspectorConfig};
//! use polars::prelude::*;
//!
//! let df = df!(
//!     "name" => [Some("Alice"), Some("Bob"), None],
//!     "salary" => [50000i64, 60000, 1_000_000],
//! )?;
//!
//! let inspector = Inspector::new(df);
//! inspector.summary()?;
//!
//! let outliers = inspector.check_outliers("salary")?;
//! println!("{} outlier rows", outliers.height());
//!
//! // Wider fences, and missing cells compared as equal for duplicates
//! let config = InspectorConfig::builder()
//!     .iqr_multiplier(3.0)
//!     .nulls_equal(true)
//!     .build()?;
//! let strict = Inspector::with_config(inspector.dataset().clone(), config);
//! ```
//!
//! # Untyped input
//!
//! A `DataFrame` is always a valid dataset. Untyped input goes through
//! [`Inspector::from_json`] (or `TryFrom<serde_json::Value>`), which fails with
//! [`InspectionError::TypeConstraint`] for anything that is not a
//! column-oriented JSON object.

pub mod config;
pub mod dataset;
pub mod error;
pub mod inspector;
pub mod reporting;
pub mod statistics;
pub mod utils;

// Re-exports for convenient access
pub use config::{ConfigValidationError, InspectorConfig, InspectorConfigBuilder};
pub use error::{InspectionError, Result as InspectionResult, ResultExt};
pub use inspector::Inspector;
pub use statistics::{OutlierBounds, linear_quantile};
pub use utils::{ColumnKind, column_kind, is_numeric_dtype};
