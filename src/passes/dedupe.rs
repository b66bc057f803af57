use crate::error::Result;
use crate::table::row_mask;
use polars::prelude::*;

/// Temporary column tying each distinct row back to its position.
const ROW_INDEX: &str = "__dedupe_row";

#[derive(Debug, Clone)]
pub struct Deduplicated {
    /// First occurrence of every distinct row, original order kept
    pub table: DataFrame,

    /// Rows that repeated an earlier row
    pub duplicates: DataFrame,
}

/// Drop rows whose fields all equal those of an earlier row.
///
/// Missing values compare equal to each other.
pub fn remove_duplicates(df: DataFrame) -> Result<Deduplicated> {
    if df.width() == 0 {
        let duplicates = df.head(Some(0));
        return Ok(Deduplicated { table: df, duplicates });
    }

    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|c| c.to_string())
        .collect();

    let kept = df
        .with_row_index(ROW_INDEX.into(), None)?
        .unique_stable(Some(columns.as_slice()), UniqueKeepStrategy::First, None)?;

    let mut first_seen = vec![false; df.height()];
    for idx in kept
        .column(ROW_INDEX)?
        .as_materialized_series()
        .idx()?
        .into_no_null_iter()
    {
        if let Some(flag) = first_seen.get_mut(idx as usize) {
            *flag = true;
        }
    }

    let repeated: Vec<bool> = first_seen.iter().map(|first| !first).collect();
    let duplicates = df.filter(&row_mask("is_duplicate", &repeated))?;
    let table = df.filter(&row_mask("first_occurrence", &first_seen))?;

    Ok(Deduplicated { table, duplicates })
}
