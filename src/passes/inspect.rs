//! Read-only checks: nulls, blank rows and per-column missing counts.

use crate::error::Result;
use crate::table::{missing_mask, row_mask};
use polars::prelude::*;
use std::fmt;

/// Rows with at least one missing field.
pub fn find_null_rows(df: &DataFrame) -> Result<DataFrame> {
    let mut flags = vec![false; df.height()];
    for column in df.get_columns() {
        let missing = missing_mask(column.as_materialized_series())?;
        for (flag, is_missing) in flags.iter_mut().zip(missing) {
            *flag |= is_missing;
        }
    }
    Ok(df.filter(&row_mask("has_null", &flags))?)
}

/// Rows whose textual fields are all present and blank.
///
/// Only string columns are considered. A table without any has no blank rows.
pub fn find_empty_rows(df: &DataFrame) -> Result<DataFrame> {
    let text_columns: Vec<&Series> = df
        .get_columns()
        .iter()
        .map(Column::as_materialized_series)
        .filter(|s| s.dtype() == &DataType::String)
        .collect();

    let mut flags = vec![!text_columns.is_empty(); df.height()];
    for series in text_columns {
        for (flag, value) in flags.iter_mut().zip(series.str()?) {
            *flag &= value.is_some_and(|v| v.trim().is_empty());
        }
    }
    Ok(df.filter(&row_mask("is_empty", &flags))?)
}

/// Missing-value count for every column, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingSummary {
    pub columns: Vec<(String, usize)>,
}

impl MissingSummary {
    pub fn get(&self, column: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, count)| *count)
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(|(_, count)| count).sum()
    }

    pub fn columns_with_missing(&self) -> impl Iterator<Item = &(String, usize)> {
        self.columns.iter().filter(|(_, count)| *count > 0)
    }
}

impl fmt::Display for MissingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .columns
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        for (idx, (name, count)) in self.columns.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{name:<width$}  {count}")?;
        }
        Ok(())
    }
}

pub fn summarize_missing(df: &DataFrame) -> Result<MissingSummary> {
    let columns = df
        .get_columns()
        .iter()
        .map(|column| {
            let series = column.as_materialized_series();
            let count = missing_mask(series)?.into_iter().filter(|m| *m).count();
            Ok((series.name().to_string(), count))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(MissingSummary { columns })
}
