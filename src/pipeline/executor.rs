//! Pipeline execution engine.
//!
//! Runs every [`Stage`] in order over one table, printing status lines and debug
//! dumps through the pipeline's [`Reporter`], and produces a [`RunReport`].

use super::stage::Stage;
use crate::config::CleaningConfig;
use crate::error::Result;
use crate::passes::{self, PassOutcome, SkipReason};
use crate::report::Reporter;
use crate::table::{CsvOptions, load_table, save_table};
use polars::prelude::DataFrame;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Report generated after a pipeline run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub rows_before: usize,
    pub columns_before: usize,
    pub rows_after: usize,
    pub columns_after: usize,

    /// Number of stages that ran to completion
    pub stages_applied: usize,

    /// One entry per skipped stage
    pub warnings: Vec<String>,

    /// Where the cleaned table was written, if saving succeeded
    pub saved_to: Option<PathBuf>,

    pub duration: Duration,
}

impl RunReport {
    pub fn summary(&self) -> String {
        format!(
            "Pipeline completed: rows {} → {}, columns {} → {}, {} of {} stages applied, {:.2}s",
            self.rows_before,
            self.rows_after,
            self.columns_before,
            self.columns_after,
            self.stages_applied,
            Stage::ALL.len(),
            self.duration.as_secs_f64()
        )
    }
}

enum StageStatus {
    Applied,
    Skipped(SkipReason),
}

/// A configured cleaning pipeline.
#[derive(Debug)]
pub struct Pipeline {
    config: CleaningConfig,
    email_pattern: Regex,
    reporter: Reporter,
}

impl Pipeline {
    /// Pipeline printing to stdout, verbose according to `config.verbose`.
    pub fn new(config: CleaningConfig) -> Result<Self> {
        let reporter = Reporter::stdout(config.verbose);
        Self::with_reporter(config, reporter)
    }

    /// # Errors
    ///
    /// Returns [`crate::error::CleanError::Config`] when `config` does not validate.
    pub fn with_reporter(config: CleaningConfig, reporter: Reporter) -> Result<Self> {
        config.validate()?;
        let email_pattern = config.email_regex()?;
        Ok(Self {
            config,
            email_pattern,
            reporter,
        })
    }

    pub fn config(&self) -> &CleaningConfig {
        &self.config
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Load `input`, clean it and write the result to `output`.
    ///
    /// # Errors
    ///
    /// Load failures abort the run before any stage executes. A failure to write
    /// `output` is not an error: it is reported and `saved_to` stays `None`.
    pub fn run_file(&self, input: &Path, output: &Path) -> Result<RunReport> {
        let options = CsvOptions {
            delimiter: self.config.delimiter_byte()?,
        };

        let table = load_table(input, options)?;
        self.reporter.debug(|| "Data read successfully.");

        let (mut table, mut report) = self.run(table)?;

        match save_table(&mut table, output, options) {
            Ok(()) => {
                self.reporter.status(format!(
                    "Data processing completed. The data has been saved to the file {}.",
                    output.display()
                ));
                self.reporter.debug(|| &table);
                report.saved_to = Some(output.to_path_buf());
            }
            Err(e) => {
                log::error!("Saving {} failed: {e}", output.display());
                self.reporter
                    .status(format!("Error saving processed data: {e}"));
            }
        }

        Ok(report)
    }

    /// Run every stage over `table` and return the cleaned table.
    pub fn run(&self, table: DataFrame) -> Result<(DataFrame, RunReport)> {
        let start = Instant::now();
        let rows_before = table.height();
        let columns_before = table.width();

        let mut table = table;
        let mut stages_applied = 0;
        let mut warnings = Vec::new();

        for (idx, stage) in Stage::ALL.into_iter().enumerate() {
            let rows = table.height();
            let shape = table.shape();

            let (next, status) = self.apply_stage(stage, table)?;

            debug_assert!(next.height() <= rows, "{stage} added rows");
            debug_assert!(
                stage.mutates() || next.shape() == shape,
                "{stage} changed a table it should only inspect"
            );

            match status {
                StageStatus::Applied => stages_applied += 1,
                StageStatus::Skipped(reason) => {
                    log::warn!("Stage {} ({stage}) skipped: {reason}", idx + 1);
                    warnings.push(format!("Step {}: {stage}: {reason} (skipped)", idx + 1));
                }
            }
            log::debug!(
                "After {stage}: {} rows, {} columns",
                next.height(),
                next.width()
            );
            table = next;
        }

        let report = RunReport {
            rows_before,
            columns_before,
            rows_after: table.height(),
            columns_after: table.width(),
            stages_applied,
            warnings,
            saved_to: None,
            duration: start.elapsed(),
        };
        Ok((table, report))
    }

    /// Apply a single stage
    fn apply_stage(&self, stage: Stage, table: DataFrame) -> Result<(DataFrame, StageStatus)> {
        let reporter = &self.reporter;
        let config = &self.config;

        match stage {
            Stage::NullCheck => {
                let rows = passes::find_null_rows(&table)?;
                if rows.height() > 0 {
                    reporter.status("There are rows with null values.");
                    reporter.debug(|| &rows);
                } else {
                    reporter.status("No rows with null values.");
                }
                Ok((table, StageStatus::Applied))
            }

            Stage::EmptyCheck => {
                let rows = passes::find_empty_rows(&table)?;
                if rows.height() > 0 {
                    reporter.status("There are empty rows.");
                    reporter.debug(|| &rows);
                } else {
                    reporter.status("No empty rows.");
                }
                Ok((table, StageStatus::Applied))
            }

            Stage::Dedupe => {
                let result = passes::remove_duplicates(table)?;
                if result.duplicates.height() > 0 {
                    reporter.status("There are duplicate rows. Removing duplicate rows...");
                    reporter.debug(|| &result.duplicates);
                } else {
                    reporter.status("No duplicate rows.");
                }
                Ok((result.table, StageStatus::Applied))
            }

            Stage::MissingSummary => {
                let summary = passes::summarize_missing(&table)?;
                reporter.status("Missing data in each column:");
                reporter.status(&summary);
                Ok((table, StageStatus::Applied))
            }

            Stage::NormaliseGender => {
                let outcome = passes::normalise_categories(
                    table,
                    &config.gender_column,
                    &config.allowed_genders,
                    &config.gender_fallback,
                )?;
                Ok(self.settle(outcome, |_, counts| reporter.status(counts)))
            }

            Stage::ValidateEmail => {
                let outcome = passes::retain_valid_emails(
                    table,
                    &config.email_column,
                    &self.email_pattern,
                )?;
                Ok(self.settle(outcome, |_, report| {
                    reporter.status(format!(
                        "Removed {} rows with an invalid email; {} remain.",
                        report.dropped.height(),
                        report.kept()
                    ));
                    reporter.debug(|| &report.dropped);
                    reporter.debug(|| &report.retained);
                }))
            }

            Stage::DropColumns => {
                let outcome = passes::drop_columns(table, &config.drop_columns)?;
                Ok(self.settle(outcome, |table, dropped| {
                    reporter.status(format!("Dropped columns: {}", dropped.join(", ")));
                    reporter.debug(|| table);
                }))
            }

            Stage::Outliers => {
                let result = passes::suppress_outliers(table, config.iqr_multiplier)?;
                for column in &result.columns {
                    if column.count() > 0 {
                        reporter.status(format!(
                            "Outliers detected in column '{}'. Handling outliers...",
                            column.column
                        ));
                        reporter.debug(|| &column.rows);
                    } else {
                        reporter.status(format!(
                            "No outliers detected in column '{}'.",
                            column.column
                        ));
                    }
                }
                reporter.status("Outlier handling completed.");
                Ok((result.table, StageStatus::Applied))
            }
        }
    }

    /// Report a pass outcome and unwrap it into the table and stage status.
    fn settle<R>(
        &self,
        outcome: PassOutcome<R>,
        on_applied: impl FnOnce(&DataFrame, &R),
    ) -> (DataFrame, StageStatus) {
        match outcome {
            PassOutcome::Applied { table, report } => {
                on_applied(&table, &report);
                (table, StageStatus::Applied)
            }
            PassOutcome::Skipped { table, reason } => {
                self.reporter.status(&reason);
                (table, StageStatus::Skipped(reason))
            }
        }
    }
}
