#![expect(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::config::CleaningConfig;
use crate::error::CleanError;
use crate::report::Reporter;
use anyhow::Result;
use polars::prelude::*;
use std::path::Path;

const SAMPLE_CSV: &str = "\
id,name,gender,email,age
1,Alice,Female,alice@gmail.com,30
1,Alice,Female,alice@gmail.com,30
2,Bob,M,bob@gmail.com,32
3,Cara,Other,x@yahoo.com,31
4,Dan,Male,dan@gmail.com,29
5,Eve,Female,eve@gmail.com,33
6,Finn,Male,finn@gmail.com,400
7,Gus,Unknown,gus@gmail.com,28
";

fn sample_frame() -> PolarsResult<DataFrame> {
    df!(
        "id" => &[1i64, 1, 2, 3, 4, 5, 6, 7],
        "name" => &["Alice", "Alice", "Bob", "Cara", "Dan", "Eve", "Finn", "Gus"],
        "gender" => &["Female", "Female", "M", "Other", "Male", "Female", "Male", "Unknown"],
        "email" => &[
            "alice@gmail.com",
            "alice@gmail.com",
            "bob@gmail.com",
            "x@yahoo.com",
            "dan@gmail.com",
            "eve@gmail.com",
            "finn@gmail.com",
            "gus@gmail.com",
        ],
        "age" => &[30i64, 30, 32, 31, 29, 33, 400, 28]
    )
}

fn capturing_pipeline(verbose: bool) -> Pipeline {
    let config = CleaningConfig {
        verbose,
        ..Default::default()
    };
    Pipeline::with_reporter(config, Reporter::capturing(verbose)).expect("default config is valid")
}

fn column_strings(df: &DataFrame, name: &str) -> Vec<String> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .cast(&DataType::String)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap_or_default().to_owned())
        .collect()
}

#[test]
fn test_end_to_end_in_memory() -> Result<()> {
    let pipeline = capturing_pipeline(false);
    let (table, report) = pipeline.run(sample_frame()?)?;

    // duplicate Alice removed, yahoo row dropped
    assert_eq!(table.height(), 6);
    assert_eq!(report.rows_before, 8);
    assert_eq!(report.rows_after, 6);

    // id pruned
    let names: Vec<String> = table
        .get_column_names()
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(names, ["name", "gender", "email", "age"]);
    assert_eq!(report.columns_after, report.columns_before - 1);

    assert_eq!(
        column_strings(&table, "gender"),
        ["Female", "Unknown", "Male", "Female", "Male", "Unknown"]
    );
    assert!(
        column_strings(&table, "email")
            .iter()
            .all(|e| e.ends_with("@gmail.com"))
    );

    // 400 replaced by the median of [28, 29, 30, 32, 33, 400]
    assert_eq!(
        column_strings(&table, "age"),
        ["30", "32", "29", "33", "31", "28"]
    );

    assert_eq!(report.stages_applied, Stage::ALL.len());
    assert!(report.warnings.is_empty());
    assert!(report.saved_to.is_none());
    Ok(())
}

#[test]
fn test_status_lines_follow_stage_order() -> Result<()> {
    let pipeline = capturing_pipeline(false);
    pipeline.run(sample_frame()?)?;

    let lines = pipeline.reporter().captured();
    let position = |needle: &str| {
        lines
            .iter()
            .position(|l| l.contains(needle))
            .unwrap_or_else(|| panic!("missing line containing {needle:?}: {lines:?}"))
    };

    assert!(position("No rows with null values.") < position("There are duplicate rows."));
    assert!(position("There are duplicate rows.") < position("Missing data in each column:"));
    assert!(position("Removed 1 rows with an invalid email") < position("Dropped columns: id"));
    assert!(
        position("Outliers detected in column 'age'.") < position("Outlier handling completed.")
    );
    Ok(())
}

#[test]
fn test_missing_columns_skip_stages_but_run_continues() -> Result<()> {
    let pipeline = capturing_pipeline(false);
    let df = df!(
        "name" => &["a", "a", "b"],
        "score" => &[1.0, 1.0, 2.0]
    )?;

    let (table, report) = pipeline.run(df)?;
    assert_eq!(table.height(), 2);
    assert_eq!(report.stages_applied, Stage::ALL.len() - 3);
    assert_eq!(report.warnings.len(), 3);
    assert!(report.warnings[0].contains("gender"));
    assert!(report.warnings[2].contains("'id'"));

    let lines = pipeline.reporter().captured();
    assert!(lines.contains(&"Column 'gender' does not exist in the table.".to_owned()));
    assert!(lines.contains(&"Column 'email' does not exist in the table.".to_owned()));
    Ok(())
}

#[test]
fn test_quiet_run_prints_no_row_dumps() -> Result<()> {
    let quiet = capturing_pipeline(false);
    quiet.run(sample_frame()?)?;

    let verbose = capturing_pipeline(true);
    verbose.run(sample_frame()?)?;

    let quiet_lines = quiet.reporter().captured();
    let verbose_lines = verbose.reporter().captured();
    assert!(verbose_lines.len() > quiet_lines.len());
    assert!(quiet_lines.iter().all(|l| verbose_lines.contains(l)));
    Ok(())
}

#[test]
fn test_run_file_writes_cleaned_csv() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("Asm2_Data.csv");
    let output = dir.path().join("Asm2_Cleaned_Data.csv");
    std::fs::write(&input, SAMPLE_CSV)?;

    let pipeline = capturing_pipeline(false);
    let report = pipeline.run_file(&input, &output)?;
    assert_eq!(report.saved_to.as_deref(), Some(output.as_path()));

    let written = std::fs::read_to_string(&output)?;
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.first(), Some(&"name,gender,email,age"));
    assert_eq!(lines.len(), 7);
    assert!(lines.contains(&"Bob,Unknown,bob@gmail.com,32"));
    assert!(lines.contains(&"Finn,Male,finn@gmail.com,31"));
    assert!(!written.contains("yahoo"));

    let captured = pipeline.reporter().captured();
    assert!(
        captured
            .last()
            .unwrap()
            .starts_with("Data processing completed.")
    );
    Ok(())
}

#[test]
fn test_missing_input_aborts_without_output() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("out.csv");

    let pipeline = capturing_pipeline(false);
    let err = pipeline
        .run_file(&dir.path().join("nope.csv"), &output)
        .unwrap_err();
    assert!(matches!(err, CleanError::NotFound(_)));
    assert!(err.is_load_failure());
    assert!(!output.exists());
    assert!(pipeline.reporter().captured().is_empty());
    Ok(())
}

#[test]
fn test_single_surviving_row_is_saved() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    let only_eve = SAMPLE_CSV
        .lines()
        .map(|line| {
            if line.contains("eve@") {
                line.to_owned()
            } else {
                line.replace("@gmail.com", "@yahoo.com")
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(&input, only_eve)?;

    let pipeline = capturing_pipeline(false);
    let report = pipeline.run_file(&input, &output)?;
    assert_eq!(report.rows_after, 1);
    assert_eq!(report.saved_to.as_deref(), Some(output.as_path()));

    let written = std::fs::read_to_string(&output)?;
    assert_eq!(written, "name,gender,email,age\nEve,Female,eve@gmail.com,33\n");
    Ok(())
}

#[test]
fn test_malformed_input_aborts_without_output() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("out.csv");

    for (file, contents) in [("empty.csv", ""), ("ragged.csv", "a,b\n1,2\n3,4,5\n")] {
        let input = dir.path().join(file);
        std::fs::write(&input, contents)?;

        let pipeline = capturing_pipeline(false);
        let err = pipeline.run_file(&input, &output).unwrap_err();
        assert!(matches!(err, CleanError::Parse(_)), "{file}: {err}");
        assert!(!output.exists(), "{file}");
        assert!(pipeline.reporter().captured().is_empty());
    }
    Ok(())
}

#[test]
fn test_write_failure_is_reported_not_raised() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("in.csv");
    std::fs::write(&input, SAMPLE_CSV)?;
    let output = dir.path().join("missing_dir").join("out.csv");

    let pipeline = capturing_pipeline(false);
    let report = pipeline.run_file(&input, &output)?;
    assert!(report.saved_to.is_none());
    assert!(!Path::new(&output).exists());

    let captured = pipeline.reporter().captured();
    assert!(
        captured
            .last()
            .unwrap()
            .starts_with("Error saving processed data:")
    );
    Ok(())
}

#[test]
fn test_custom_config_changes_behaviour() -> Result<()> {
    let config = CleaningConfig {
        verbose: false,
        delimiter: ';',
        drop_columns: vec!["id".to_owned(), "name".to_owned()],
        email_pattern: r"^[a-z]+@yahoo\.com$".to_owned(),
        ..Default::default()
    };
    let pipeline = Pipeline::with_reporter(config, Reporter::capturing(false))?;

    let dir = tempfile::tempdir()?;
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    std::fs::write(&input, SAMPLE_CSV.replace(',', ";"))?;

    let report = pipeline.run_file(&input, &output)?;
    assert_eq!(report.rows_after, 1);
    assert_eq!(report.columns_after, 3);

    let written = std::fs::read_to_string(&output)?;
    assert!(written.starts_with("gender;email;age\n"));
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = CleaningConfig {
        gender_fallback: "Nope".to_owned(),
        ..Default::default()
    };
    assert!(matches!(
        Pipeline::with_reporter(config, Reporter::capturing(false)),
        Err(CleanError::Config(_))
    ));
}

#[test]
fn test_summary_mentions_row_counts() -> Result<()> {
    let pipeline = capturing_pipeline(false);
    let (_, report) = pipeline.run(sample_frame()?)?;
    let summary = report.summary();
    assert!(summary.contains("rows 8 → 6"), "{summary}");
    assert!(summary.contains("8 of 8 stages"), "{summary}");
    Ok(())
}
