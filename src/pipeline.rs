//! The sequential cleaning pipeline.
//!
//! A run threads one table through a fixed list of stages. Each stage sees the
//! table exactly as the previous stage left it:
//!
//! 1. **null check** and **empty row check** report, without changing anything
//! 2. **duplicate removal** keeps the first copy of every row
//! 3. **missing value summary** prints per-column missing counts
//! 4. **gender normalisation** folds unexpected categories into a fallback
//! 5. **email validation** drops rows whose address does not match the pattern
//! 6. **column pruning** removes identifier columns
//! 7. **outlier handling** replaces IQR outliers in numeric columns by the median
//!
//! ```no_run
//! use datascrub::config::CleaningConfig;
//! use datascrub::pipeline::Pipeline;
//! use std::path::Path;
//!
//! let pipeline = Pipeline::new(CleaningConfig::default())?;
//! let report = pipeline.run_file(Path::new("Asm2_Data.csv"), Path::new("out.csv"))?;
//! println!("{}", report.summary());
//! # Ok::<(), datascrub::error::CleanError>(())
//! ```

pub mod executor;
pub mod stage;

pub use executor::{Pipeline, RunReport};
pub use stage::Stage;

#[cfg(test)]
mod tests;
