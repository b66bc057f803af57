use anyhow::{Context as _, Result};
use clap::Parser;
use datascrub::config::CleaningConfig;
use datascrub::pipeline::Pipeline;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "Asm2_Data.csv";
pub const DEFAULT_OUTPUT: &str = "Asm2_Cleaned_Data.csv";

#[derive(Parser, Debug)]
#[command(
    name = "datascrub",
    version,
    about = "Clean a delimited dataset through a fixed sequence of data-quality passes"
)]
pub struct Cli {
    /// Path to the delimited input file
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the cleaned file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Path to a JSON cleaning configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print status lines only, without row dumps
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    fn cleaning_config(&self) -> Result<CleaningConfig> {
        let mut config = match &self.config {
            Some(path) => CleaningConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => CleaningConfig::default(),
        };
        if self.quiet {
            config.verbose = false;
        }
        Ok(config)
    }
}

/// Run the pipeline described by `cli`.
///
/// A file that cannot be loaded ends the run early without an error exit.
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.cleaning_config()?;
    let pipeline = Pipeline::new(config).context("Invalid cleaning configuration")?;

    match pipeline.run_file(&cli.input, &cli.output) {
        Ok(report) => {
            for warning in &report.warnings {
                log::warn!("{warning}");
            }
            log::info!("{}", report.summary());
            Ok(())
        }
        Err(err) if err.is_load_failure() => {
            pipeline.reporter().debug(|| &err);
            pipeline
                .reporter()
                .status("Error reading data. Exiting program.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
