use super::outcome::PassOutcome;
use crate::error::Result;
use crate::table::{has_column, row_mask, text_column};
use polars::prelude::*;
use regex::Regex;

#[derive(Debug, Clone)]
pub struct EmailReport {
    /// Rows removed for a missing or non-matching address
    pub dropped: DataFrame,

    /// The address column of the rows that survived
    pub retained: Series,
}

impl EmailReport {
    pub fn kept(&self) -> usize {
        self.retained.len()
    }
}

/// Keep only the rows whose `column` matches `pattern`.
///
/// Rows are removed, not repaired: a missing or malformed address drops the row.
pub fn retain_valid_emails(
    df: DataFrame,
    column: &str,
    pattern: &Regex,
) -> Result<PassOutcome<EmailReport>> {
    if !has_column(&df, column) {
        return Ok(PassOutcome::column_missing(df, column));
    }

    let values = text_column(&df, column)?;
    let valid: Vec<bool> = values
        .into_iter()
        .map(|value| value.is_some_and(|v| pattern.is_match(v)))
        .collect();
    let invalid: Vec<bool> = valid.iter().map(|v| !v).collect();

    let dropped = df.filter(&row_mask("invalid_email", &invalid))?;
    let table = df.filter(&row_mask("valid_email", &valid))?;
    let retained = table.column(column)?.as_materialized_series().clone();

    Ok(PassOutcome::Applied {
        table,
        report: EmailReport { dropped, retained },
    })
}
