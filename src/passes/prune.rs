use super::outcome::PassOutcome;
use crate::error::Result;
use crate::table::has_column;
use polars::prelude::*;

/// Remove every column in `names`.
///
/// All or nothing: when any of them is absent the table is returned untouched and
/// the outcome names the first missing column.
pub fn drop_columns(df: DataFrame, names: &[String]) -> Result<PassOutcome<Vec<String>>> {
    if let Some(missing) = names.iter().find(|name| !has_column(&df, name)) {
        return Ok(PassOutcome::column_missing(df, missing));
    }

    let mut table = df;
    let mut dropped = Vec::with_capacity(names.len());
    for name in names {
        if has_column(&table, name) {
            table = table.drop(name)?;
            dropped.push(name.clone());
        }
    }

    Ok(PassOutcome::Applied {
        table,
        report: dropped,
    })
}
