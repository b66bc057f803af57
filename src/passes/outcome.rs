use polars::prelude::DataFrame;
use std::fmt;

/// Why a pass left the table untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    ColumnNotFound(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnNotFound(name) => {
                write!(f, "Column '{name}' does not exist in the table.")
            }
        }
    }
}

/// Result of a pass that may need a column the table does not have.
///
/// Both variants hand the table back, so the caller always keeps ownership of it.
#[derive(Debug)]
pub enum PassOutcome<R> {
    Applied { table: DataFrame, report: R },
    Skipped { table: DataFrame, reason: SkipReason },
}

impl<R> PassOutcome<R> {
    pub(crate) fn column_missing(table: DataFrame, name: &str) -> Self {
        Self::Skipped {
            table,
            reason: SkipReason::ColumnNotFound(name.to_owned()),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    pub fn table(&self) -> &DataFrame {
        match self {
            Self::Applied { table, .. } | Self::Skipped { table, .. } => table,
        }
    }

    pub fn report(&self) -> Option<&R> {
        match self {
            Self::Applied { report, .. } => Some(report),
            Self::Skipped { .. } => None,
        }
    }

    pub fn into_table(self) -> DataFrame {
        match self {
            Self::Applied { table, .. } | Self::Skipped { table, .. } => table,
        }
    }
}
