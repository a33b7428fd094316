//! Integration tests for the data quality inspector.
//!
//! These tests drive the public API end to end over the built-in sample and
//! the CSV/JSON fixtures.

use lex_inspector::{InspectionError, Inspector, InspectorConfig, dataset};
use polars::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture(filename: &str) -> DataFrame {
    dataset::load(fixtures_path().join(filename)).expect("Failed to load fixture")
}

fn render(f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut buf = Vec::new();
    f(&mut buf);
    String::from_utf8(buf).expect("Report should be UTF-8")
}

fn names_in(df: &DataFrame) -> Vec<Option<String>> {
    df.column("name")
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect()
}

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_reference_scenario() {
    let inspector = Inspector::new(dataset::sample().unwrap());

    let missing = inspector.missing_values();
    let with_missing: Vec<(&String, &usize)> = missing.iter().filter(|(_, n)| **n > 0).collect();
    assert_eq!(with_missing, vec![(&"name".to_string(), &1)]);

    assert_eq!(inspector.duplicate_rows().unwrap(), 0);

    let outliers = inspector.outliers("salary").unwrap();
    assert_eq!(outliers.height(), 0);
}

#[test]
fn test_reference_scenario_console_output() {
    let inspector = Inspector::new(dataset::sample().unwrap());

    let text = render(|out| {
        inspector.summary_to(out).unwrap();
        inspector.check_outliers_to("salary", out).unwrap();
    });

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Performing data quality checks...");
    assert_eq!(lines[1], "Missing Values in each column:");
    assert!(lines[2].starts_with("name") && lines[2].ends_with('1'));
    assert!(text.contains("Number of duplicate rows: 0"));
    assert!(text.contains("Data types of each column:"));
    assert!(text.contains("Data quality checks completed."));
    assert!(text.contains("Outliers in column salary:"));
}

#[test]
fn test_json_fixture_matches_sample() {
    let from_file = load_fixture("employees.json");
    let sample = dataset::sample().unwrap();

    assert!(from_file.equals_missing(&sample));
}

// ============================================================================
// CSV Fixture
// ============================================================================

#[test]
fn test_csv_fixture_checks() {
    let inspector = Inspector::new(load_fixture("employees.csv"));

    assert_eq!(inspector.dataset().shape(), (9, 4));
    assert_eq!(inspector.missing_values()["name"], 1);
    assert_eq!(inspector.duplicate_rows().unwrap(), 1);

    let salary_outliers = inspector.outliers("salary").unwrap();
    assert_eq!(names_in(&salary_outliers), vec![Some("Grace".to_string())]);

    let age_outliers = inspector.outliers("age").unwrap();
    assert_eq!(names_in(&age_outliers), vec![Some("Frank".to_string())]);
}

#[test]
fn test_csv_fixture_data_types() {
    let inspector = Inspector::new(load_fixture("employees.csv"));
    let types = inspector.data_types();

    let columns: Vec<&str> = types.keys().map(String::as_str).collect();
    assert_eq!(columns, vec!["name", "age", "salary", "department"]);
    assert_eq!(types["name"], DataType::String);
    assert!(lex_inspector::is_numeric_dtype(&types["age"]));
    assert!(lex_inspector::is_numeric_dtype(&types["salary"]));
}

#[test]
fn test_wider_fences_drop_moderate_outliers() {
    let config = InspectorConfig::builder()
        .iqr_multiplier(3.0)
        .build()
        .unwrap();
    let inspector = Inspector::with_config(load_fixture("employees.csv"), config);

    // Age fences widen to [11, 53]; salary's 950000 stays extreme.
    assert_eq!(inspector.outliers("age").unwrap().height(), 0);
    assert_eq!(inspector.outliers("salary").unwrap().height(), 1);
}

// ============================================================================
// Error Taxonomy
// ============================================================================

#[test]
fn test_records_json_is_not_a_dataset() {
    let err = dataset::load(fixtures_path().join("records.json")).unwrap_err();
    assert_eq!(err.error_code(), "TYPE_CONSTRAINT");
}

#[test]
fn test_non_dataset_values_rejected() {
    for value in [json!([[1, 2], [3, 4]]), json!(7), json!(true)] {
        let result = Inspector::try_from(value);
        assert!(matches!(result, Err(InspectionError::TypeConstraint(_))));
    }
}

#[test]
fn test_outlier_errors_independent_of_content() {
    let datasets = [
        dataset::sample().unwrap(),
        load_fixture("employees.csv"),
        df!("name" => Vec::<String>::new(), "salary" => Vec::<i64>::new()).unwrap(),
    ];

    for df in datasets {
        let inspector = Inspector::new(df);
        assert!(matches!(
            inspector.outliers("missing_column"),
            Err(InspectionError::ColumnNotFound(_))
        ));
        assert!(matches!(
            inspector.outliers("name"),
            Err(InspectionError::NonNumericColumn { .. })
        ));
    }
}

#[test]
fn test_empty_numeric_column_has_no_outliers() {
    let df = df!("name" => Vec::<String>::new(), "salary" => Vec::<i64>::new()).unwrap();
    let inspector = Inspector::new(df);

    assert_eq!(inspector.outliers("salary").unwrap().height(), 0);
    assert_eq!(inspector.duplicate_rows().unwrap(), 0);
}

#[test]
fn test_completed_checks_keep_their_output_on_failure() {
    let inspector = Inspector::new(dataset::sample().unwrap());
    let mut buf = Vec::new();

    inspector.summary_to(&mut buf).unwrap();
    let err = inspector.check_outliers_to("department", &mut buf).unwrap_err();

    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("Data quality checks completed."));
    assert!(!text.contains("Outliers in column"));
    assert_eq!(err.error_code(), "NON_NUMERIC_COLUMN");
}
