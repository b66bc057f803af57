//! Console output for the pipeline.
//!
//! Two channels share one contract across every stage:
//!
//! - **status**: short summary lines, always emitted
//! - **debug**: full dumps of offending rows, emitted only when verbose
//!
//! The verbosity is carried by the [`Reporter`] value handed to the pipeline, so two
//! pipelines in the same process can disagree about it.

use std::cell::RefCell;
use std::fmt::Display;

#[derive(Debug)]
enum Sink {
    Stdout,
    Capture(RefCell<Vec<String>>),
}

#[derive(Debug)]
pub struct Reporter {
    verbose: bool,
    sink: Sink,
}

impl Reporter {
    /// Reporter that prints to standard output.
    pub fn stdout(verbose: bool) -> Self {
        Self {
            verbose,
            sink: Sink::Stdout,
        }
    }

    /// Reporter that keeps every emitted line in memory.
    pub fn capturing(verbose: bool) -> Self {
        Self {
            verbose,
            sink: Sink::Capture(RefCell::new(Vec::new())),
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn status(&self, message: impl Display) {
        self.emit(message.to_string());
    }

    /// Emitted only in verbose mode. The closure is not evaluated otherwise.
    pub fn debug<D: Display>(&self, message: impl FnOnce() -> D) {
        if self.verbose {
            self.emit(message().to_string());
        }
    }

    /// Lines captured so far. Always empty for a stdout reporter.
    pub fn captured(&self) -> Vec<String> {
        match &self.sink {
            Sink::Stdout => Vec::new(),
            Sink::Capture(lines) => lines.borrow().clone(),
        }
    }

    #[expect(clippy::print_stdout)]
    fn emit(&self, line: String) {
        match &self.sink {
            Sink::Stdout => println!("{line}"),
            Sink::Capture(lines) => lines.borrow_mut().push(line),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::stdout(true)
    }
}
