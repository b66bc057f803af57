//! The individual data-quality passes.
//!
//! Read-only passes borrow the table and return a report. Passes that change the
//! table take it by value and hand back the new one, either directly or inside a
//! [`PassOutcome`] when the pass depends on a column that may be absent.

pub mod categorical;
pub mod dedupe;
pub mod email;
pub mod inspect;
pub mod outcome;
pub mod outliers;
pub mod prune;

pub use categorical::{CategoryCounts, normalise_categories};
pub use dedupe::{Deduplicated, remove_duplicates};
pub use email::{EmailReport, retain_valid_emails};
pub use inspect::{MissingSummary, find_empty_rows, find_null_rows, summarize_missing};
pub use outcome::{PassOutcome, SkipReason};
pub use outliers::{ColumnOutliers, Fences, Suppressed, suppress_outliers};
pub use prune::drop_columns;
