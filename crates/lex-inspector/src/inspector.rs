//! The data quality inspector.
//!
//! [`Inspector`] wraps one dataset and answers four independent questions
//! about it: how many cells are missing per column, how many rows repeat an
//! earlier row, what type each column declares, and which rows hold IQR
//! outliers in a given numeric column.
//!
//! Each question has a pure method returning the answer (`missing_values`,
//! `duplicate_rows`, `data_types`, `outliers`) and a `check_*` counterpart that
//! also prints it. [`Inspector::summary`] runs the first three checks in order.

use crate::config::InspectorConfig;
use crate::dataset;
use crate::error::{InspectionError, Result};
use crate::reporting;
use crate::statistics::{OutlierBounds, iqr_bounds};
use crate::utils::{ColumnKind, column_kind};
use indexmap::IndexMap;
use polars::prelude::*;
use serde_json::Value;
use std::io::{self, Write};
use tracing::{debug, info, warn};

/// Data quality inspector over one dataset.
///
/// The dataset is fixed at construction and never modified.
#[derive(Debug, Clone)]
pub struct Inspector {
    df: DataFrame,
    config: InspectorConfig,
}

impl Inspector {
    /// Create an inspector with the default configuration.
    pub fn new(df: DataFrame) -> Self {
        Self::with_config(df, InspectorConfig::default())
    }

    /// Create an inspector with an explicit configuration.
    pub fn with_config(df: DataFrame, config: InspectorConfig) -> Self {
        debug!(
            "Inspector created over {} rows x {} columns",
            df.height(),
            df.width()
        );
        Self { df, config }
    }

    /// Create an inspector from untyped JSON input.
    ///
    /// Fails with [`InspectionError::TypeConstraint`] unless `value` is a
    /// column-oriented object, see [`dataset::from_json`].
    pub fn from_json(value: &Value) -> Result<Self> {
        Ok(Self::new(dataset::from_json(value)?))
    }

    /// The inspected dataset.
    pub fn dataset(&self) -> &DataFrame {
        &self.df
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    // =========================================================================
    // Pure checks
    // =========================================================================

    /// Missing-cell count per column, in column order.
    pub fn missing_values(&self) -> IndexMap<String, usize> {
        self.df
            .get_columns()
            .iter()
            .map(|col| (col.name().to_string(), col.null_count()))
            .collect()
    }

    /// Number of rows that exactly repeat an earlier row across all columns.
    ///
    /// With the default configuration missing cells never compare equal, so a
    /// row holding any missing cell is never counted. Set
    /// [`InspectorConfig::nulls_equal`] to compare them as equal values.
    pub fn duplicate_rows(&self) -> Result<usize> {
        if self.df.width() == 0 || self.df.height() == 0 {
            return Ok(0);
        }

        let candidates = if self.config.nulls_equal {
            self.df.clone()
        } else {
            self.complete_rows()?
        };

        let unique = candidates.unique::<&str, &str>(None, UniqueKeepStrategy::First, None)?;
        let duplicates = candidates.height() - unique.height();

        debug!(
            "{} duplicate rows among {} candidate rows (nulls_equal = {})",
            duplicates,
            candidates.height(),
            self.config.nulls_equal
        );
        Ok(duplicates)
    }

    /// Rows without any missing cell.
    fn complete_rows(&self) -> Result<DataFrame> {
        let mut keep = BooleanChunked::full("keep".into(), true, self.df.height());
        for col in self.df.get_columns() {
            keep = &keep & &col.as_materialized_series().is_not_null();
        }
        Ok(self.df.filter(&keep)?)
    }

    /// Declared type per column, in column order.
    pub fn data_types(&self) -> IndexMap<String, DataType> {
        self.df
            .get_columns()
            .iter()
            .map(|col| (col.name().to_string(), col.dtype().clone()))
            .collect()
    }

    /// Look up a column and require that it holds numbers.
    fn numeric_column(&self, column: &str) -> Result<&Series> {
        let idx = self
            .df
            .get_column_index(column)
            .ok_or_else(|| InspectionError::ColumnNotFound(column.to_string()))?;
        let col = &self.df.get_columns()[idx];

        if column_kind(col.dtype()) != ColumnKind::Numeric {
            return Err(InspectionError::NonNumericColumn {
                column: column.to_string(),
                dtype: col.dtype().to_string(),
            });
        }

        Ok(col.as_materialized_series())
    }

    /// IQR fences of a numeric column.
    ///
    /// `None` if the column has no usable (non-missing, non-NaN) value.
    pub fn outlier_bounds(&self, column: &str) -> Result<Option<OutlierBounds>> {
        let series = self.numeric_column(column)?;
        iqr_bounds(series, self.config.iqr_multiplier)
    }

    /// Rows whose value in `column` falls outside the IQR fences.
    ///
    /// Rows with a missing value (or NaN) in `column` are never returned.
    /// Row order is preserved.
    pub fn outliers(&self, column: &str) -> Result<DataFrame> {
        let series = self.numeric_column(column)?;

        let Some(bounds) = iqr_bounds(series, self.config.iqr_multiplier)? else {
            warn!("Column '{}' has no usable values, no outliers", column);
            return Ok(self.df.head(Some(0)));
        };
        debug!(
            "Column '{}': Q1 = {}, Q3 = {}, IQR = {}, fences = [{}, {}]",
            column, bounds.q1, bounds.q3, bounds.iqr, bounds.lower, bounds.upper
        );

        let values = series.cast(&DataType::Float64)?;
        let mask: BooleanChunked = values
            .f64()?
            .into_iter()
            .map(|v| v.is_some_and(|val| bounds.is_outlier(val)))
            .collect();

        let outliers = self.df.filter(&mask)?;
        debug!("Column '{}': {} outlier rows", column, outliers.height());
        Ok(outliers)
    }

    // =========================================================================
    // Checks with console output
    // =========================================================================

    /// Compute [`missing_values`](Self::missing_values) and print it to stdout.
    pub fn check_missing_values(&self) -> Result<IndexMap<String, usize>> {
        self.check_missing_values_to(&mut io::stdout().lock())
    }

    pub fn check_missing_values_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> Result<IndexMap<String, usize>> {
        info!("Checking missing values");
        let missing = self.missing_values();
        reporting::write_missing_values(out, &missing)?;
        Ok(missing)
    }

    /// Compute [`duplicate_rows`](Self::duplicate_rows) and print it to stdout.
    pub fn check_duplicates(&self) -> Result<usize> {
        self.check_duplicates_to(&mut io::stdout().lock())
    }

    pub fn check_duplicates_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<usize> {
        info!("Checking duplicate rows");
        let count = self.duplicate_rows()?;
        reporting::write_duplicates(out, count)?;
        Ok(count)
    }

    /// Compute [`data_types`](Self::data_types) and print it to stdout.
    pub fn check_data_types(&self) -> Result<IndexMap<String, DataType>> {
        self.check_data_types_to(&mut io::stdout().lock())
    }

    pub fn check_data_types_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> Result<IndexMap<String, DataType>> {
        info!("Checking data types");
        let types = self.data_types();
        reporting::write_data_types(out, &types)?;
        Ok(types)
    }

    /// Compute [`outliers`](Self::outliers) and print them to stdout.
    pub fn check_outliers(&self, column: &str) -> Result<DataFrame> {
        self.check_outliers_to(column, &mut io::stdout().lock())
    }

    pub fn check_outliers_to<W: Write + ?Sized>(
        &self,
        column: &str,
        out: &mut W,
    ) -> Result<DataFrame> {
        info!("Checking outliers in column '{}'", column);
        let outliers = self.outliers(column)?;
        reporting::write_outliers(out, column, &outliers)?;
        Ok(outliers)
    }

    /// Run the missing value, duplicate and data type checks in that order,
    /// printing each to stdout between a start and a completion line.
    pub fn summary(&self) -> Result<()> {
        self.summary_to(&mut io::stdout().lock())
    }

    pub fn summary_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        reporting::write_summary_start(out)?;
        self.check_missing_values_to(out)?;
        self.check_duplicates_to(out)?;
        self.check_data_types_to(out)?;
        reporting::write_summary_done(out)?;
        info!("Data quality summary completed");
        Ok(())
    }
}

impl From<DataFrame> for Inspector {
    fn from(df: DataFrame) -> Self {
        Self::new(df)
    }
}

impl TryFrom<&Value> for Inspector {
    type Error = InspectionError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_json(value)
    }
}

impl TryFrom<Value> for Inspector {
    type Error = InspectionError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json(&value)
    }
}
