use super::outcome::PassOutcome;
use crate::error::Result;
use crate::table::{has_column, text_column};
use polars::prelude::*;
use std::collections::HashMap;
use std::fmt;

/// Frequency of each category, most common first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts(pub Vec<(String, usize)>);

impl CategoryCounts {
    fn tally<'a>(values: impl Iterator<Item = &'a str>) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for value in values {
            *counts.entry(value).or_default() += 1;
        }
        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(value, count)| (value.to_owned(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Self(counts)
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, count)| *count)
    }
}

impl fmt::Display for CategoryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.0.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (idx, (name, count)) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{name:<width$}  {count}")?;
        }
        Ok(())
    }
}

/// Rewrite every value of `column` outside `allowed` to `fallback`.
///
/// Matching is exact and case-sensitive. Missing values become `fallback` too.
/// The column ends up as a string column whatever its original type.
pub fn normalise_categories(
    df: DataFrame,
    column: &str,
    allowed: &[String],
    fallback: &str,
) -> Result<PassOutcome<CategoryCounts>> {
    if !has_column(&df, column) {
        return Ok(PassOutcome::column_missing(df, column));
    }

    let values = text_column(&df, column)?;
    let normalised: StringChunked = values
        .into_iter()
        .map(|value| match value {
            Some(v) if allowed.iter().any(|a| a == v) => Some(v),
            _ => Some(fallback),
        })
        .collect();
    let report = CategoryCounts::tally(normalised.into_iter().flatten());

    let mut table = df;
    table.with_column(normalised.with_name(column.into()).into_series())?;

    Ok(PassOutcome::Applied { table, report })
}
