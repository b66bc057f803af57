//! Loading, persisting and inspecting tables.
//!
//! The table itself is a Polars [`DataFrame`]. This module holds the load/save
//! collaborators around the pipeline plus the small column helpers every pass shares.

use crate::error::{CleanError, Result};
use polars::prelude::*;
use std::path::Path;

/// Rows sampled when inferring column types from a CSV file.
const INFER_SCHEMA_ROWS: usize = 10_000;

/// Delimited-text settings shared by the loader and the persister.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Read a delimited file with a header row.
///
/// # Errors
///
/// [`CleanError::NotFound`] when `path` does not exist, [`CleanError::Parse`] when
/// the file cannot be read as a table.
pub fn load_table(path: &Path, options: CsvOptions) -> Result<DataFrame> {
    if !path.exists() {
        return Err(CleanError::NotFound(path.to_path_buf()));
    }

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .with_separator(options.delimiter)
        .finish()
        .and_then(LazyFrame::collect)
        .map_err(|e| CleanError::Parse(format!("{}: {e}", path.display())))?;

    log::debug!(
        "Loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df)
}

/// Write `df` as delimited text with a header row and no index column.
///
/// # Errors
///
/// [`CleanError::Write`] when the file cannot be created or written.
pub fn save_table(df: &mut DataFrame, path: &Path, options: CsvOptions) -> Result<()> {
    *df = contiguous(df)?;

    let file = std::fs::File::create(path)
        .map_err(|e| CleanError::Write(format!("{}: {e}", path.display())))?;

    CsvWriter::new(file)
        .include_header(true)
        .with_separator(options.delimiter)
        .finish(df)
        .map_err(|e| CleanError::Write(format!("{}: {e}", path.display())))?;

    log::debug!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}

/// Materialize every column into a single chunk.
///
/// Filtering can leave scalar columns spread over several chunks, which the CSV
/// serializer cannot write.
fn contiguous(df: &DataFrame) -> Result<DataFrame> {
    let columns = df
        .get_columns()
        .iter()
        .map(|c| c.as_materialized_series().rechunk().into_column())
        .collect();
    Ok(DataFrame::new(columns)?)
}

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}

/// A column rendered as text. Non-string columns are cast.
pub(crate) fn text_column(df: &DataFrame, name: &str) -> Result<StringChunked> {
    if !has_column(df, name) {
        return Err(CleanError::ColumnNotFound(name.to_owned()));
    }
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    Ok(series.str()?.clone())
}

/// Per-row missing flags. NaN counts as missing in float columns.
pub(crate) fn missing_mask(series: &Series) -> Result<Vec<bool>> {
    if series.dtype().is_float() {
        let values = series.cast(&DataType::Float64)?;
        Ok(values
            .f64()?
            .into_iter()
            .map(|v| v.is_none_or(f64::is_nan))
            .collect())
    } else {
        Ok(series
            .is_null()
            .into_iter()
            .map(|v| v.unwrap_or(false))
            .collect())
    }
}

pub(crate) fn row_mask(name: &str, flags: &[bool]) -> BooleanChunked {
    BooleanChunked::from_slice(name.into(), flags)
}
