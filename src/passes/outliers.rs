//! IQR-based outlier suppression.
//!
//! For each numeric column the quartiles are taken by linear interpolation between
//! closest ranks. Values outside `[Q1 - k*IQR, Q3 + k*IQR]` are replaced with the
//! column median, computed once from the values as they were before replacement.
//! Values inside the fences are never touched.

use crate::error::Result;
use polars::prelude::*;

/// Quartile fences and median for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fences {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
    pub median: f64,
}

impl Fences {
    /// Fences over the present values of `values`. Nulls and NaN are ignored.
    ///
    /// `None` when no value is present.
    pub fn compute(values: &Float64Chunked, multiplier: f64) -> Result<Option<Self>> {
        let nan = values.is_nan().fill_null_with_values(false)?;
        let present = values.set(&nan, None)?;

        let q1 = present.quantile(0.25, QuantileMethod::Linear)?;
        let q3 = present.quantile(0.75, QuantileMethod::Linear)?;
        let median = present.median();

        let (Some(q1), Some(q3), Some(median)) = (q1, q3, median) else {
            return Ok(None);
        };
        let iqr = q3 - q1;
        Ok(Some(Self {
            q1,
            q3,
            lower: q1 - multiplier * iqr,
            upper: q3 + multiplier * iqr,
            median,
        }))
    }

    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }

    /// Per-row outlier flags. Missing values and NaN are never outliers.
    fn mask(&self, values: &Float64Chunked) -> Result<BooleanChunked> {
        let flagged = values.lt(self.lower) | values.gt(self.upper);
        Ok(flagged.fill_null_with_values(false)?)
    }
}

#[derive(Debug, Clone)]
pub struct ColumnOutliers {
    pub column: String,

    /// `None` when the column had no usable values
    pub fences: Option<Fences>,

    /// Offending rows as they were before replacement
    pub rows: DataFrame,
}

impl ColumnOutliers {
    pub fn count(&self) -> usize {
        self.rows.height()
    }
}

#[derive(Debug, Clone)]
pub struct Suppressed {
    pub table: DataFrame,
    pub columns: Vec<ColumnOutliers>,
}

/// Replace outliers in every numeric column with that column's median.
pub fn suppress_outliers(df: DataFrame, multiplier: f64) -> Result<Suppressed> {
    let numeric: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|c| c.dtype().is_primitive_numeric())
        .map(|c| c.name().to_string())
        .collect();

    let mut table = df;
    let mut columns = Vec::with_capacity(numeric.len());
    for name in numeric {
        let (next, report) = suppress_column(table, name, multiplier)?;
        table = next;
        columns.push(report);
    }

    Ok(Suppressed { table, columns })
}

fn suppress_column(
    mut table: DataFrame,
    column: String,
    multiplier: f64,
) -> Result<(DataFrame, ColumnOutliers)> {
    let series = table.column(&column)?.as_materialized_series().clone();
    let values = series.cast(&DataType::Float64)?;
    let values = values.f64()?;

    let Some(fences) = Fences::compute(values, multiplier)? else {
        let rows = table.head(Some(0));
        return Ok((table, ColumnOutliers { column, fences: None, rows }));
    };

    let mask = fences.mask(values)?;
    let rows = table.filter(&mask)?;

    if rows.height() > 0 {
        table.with_column(replace_flagged(&series, &mask, fences.median)?)?;
    }

    Ok((
        table,
        ColumnOutliers {
            column,
            fences: Some(fences),
            rows,
        },
    ))
}

/// Put `median` at the flagged positions of `series`, leaving every other value as is.
///
/// Float columns keep their dtype. Integer columns keep theirs unless the median
/// has a fractional part, in which case the column becomes `Float64`.
fn replace_flagged(series: &Series, mask: &BooleanChunked, median: f64) -> Result<Series> {
    let dtype = series.dtype();
    let target = if dtype.is_float() || median.fract() == 0.0 {
        dtype.clone()
    } else {
        DataType::Float64
    };

    let kept = series.cast(&target)?;
    let fill = Float64Chunked::full(series.name().clone(), median, series.len())
        .into_series()
        .cast(&target)?;
    Ok(fill.zip_with(mask, &kept)?)
}
