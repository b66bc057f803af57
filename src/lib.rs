//! # Datascrub - sequential data-quality pipeline
//!
//! Datascrub loads a delimited file into a Polars `DataFrame`, runs it through a
//! fixed sequence of cleaning stages and writes the result back out in the same
//! format.
//!
//! ## Quick Start
//!
//! ```no_run
//! use datascrub::config::CleaningConfig;
//! use datascrub::pipeline::Pipeline;
//! use std::path::Path;
//!
//! let pipeline = Pipeline::new(CleaningConfig::default())?;
//! let report = pipeline.run_file(Path::new("data.csv"), Path::new("cleaned.csv"))?;
//! println!("{}", report.summary());
//! # Ok::<(), datascrub::error::CleanError>(())
//! ```
//!
//! ## Core Modules
//!
//! - [`pipeline`]: stage ordering, execution and the run report
//! - [`passes`]: the individual checks and transformations
//! - [`table`]: CSV load/save and shared column helpers
//! - [`config`]: cleaning parameters, loadable from JSON
//! - [`report`]: status and debug output channels
//! - [`error`]: error types
//! - [`logging`]: diagnostic logger setup
//!
//! ## Ownership
//!
//! Every pass that changes the table takes it by value and returns the new one.
//! A pass that needs a column the table lacks returns
//! [`passes::PassOutcome::Skipped`] together with the untouched table, and the run
//! carries on.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod logging;
pub mod passes;
pub mod pipeline;
pub mod report;
pub mod table;
