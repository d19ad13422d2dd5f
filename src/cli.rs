use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use crate::analytics::{
    AnalysisConfig, LeadTimeMode, ReleaseAnalyzer, DEFAULT_INTERMEDIATE_ENV,
    DEFAULT_SUCCESS_STATE, DEFAULT_TERMINAL_ENV,
};
use crate::dataset::Dataset;
use crate::output::{self, OutputFormat};

const DEFAULT_CSV_DIR: &str = "output";

#[derive(Parser)]
#[command(name = "deploylens")]
#[command(author, version, about = "Release Deployment Analytics Tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output path: directory for CSV (defaults to ./output), file for JSON (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Pretty print JSON output
    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build deployment frequency, lead time and stalled release reports
    Report {
        /// Projects dataset (JSON)
        #[arg(short, long, env = "DEPLOYLENS_INPUT", default_value = "projects.json")]
        input: PathBuf,

        /// Environment a release is first deployed to
        #[arg(long, env = "DEPLOYLENS_INTERMEDIATE_ENV", default_value = DEFAULT_INTERMEDIATE_ENV)]
        intermediate_env: String,

        /// Production-facing environment
        #[arg(long, env = "DEPLOYLENS_TERMINAL_ENV", default_value = DEFAULT_TERMINAL_ENV)]
        terminal_env: String,

        /// Deployment state that counts as a success
        #[arg(long, env = "DEPLOYLENS_SUCCESS_STATE", default_value = DEFAULT_SUCCESS_STATE)]
        success_state: String,

        /// How lead times are measured
        #[arg(long, env = "DEPLOYLENS_LEAD_TIME_MODE", value_enum, default_value_t = LeadTimeMode::Elapsed)]
        lead_time_mode: LeadTimeMode,

        /// Fail when a release version appears more than once
        #[arg(long, env = "DEPLOYLENS_STRICT_VERSIONS", default_value_t = false)]
        strict_versions: bool,
    },
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Report {
                input,
                intermediate_env,
                terminal_env,
                success_state,
                lead_time_mode,
                strict_versions,
            } => {
                info!("Analyzing release deployments from: {}", input.display());

                let config = AnalysisConfig {
                    intermediate_env: intermediate_env.clone(),
                    terminal_env: terminal_env.clone(),
                    success_state: success_state.clone(),
                    lead_time_mode: *lead_time_mode,
                    strict_versions: *strict_versions,
                };

                let analyzer = ReleaseAnalyzer::new(config)?;
                let dataset = Dataset::load(input)?;
                let reports = analyzer.analyze(&dataset)?;

                match self.format {
                    OutputFormat::Csv => {
                        let dir = self
                            .output
                            .clone()
                            .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_DIR));
                        output::write_csv_reports(&reports, &dir)?;
                    }
                    OutputFormat::Json => {
                        output::write_json_report(&reports, self.output.as_deref(), self.pretty)?;
                    }
                }

                Ok(())
            }
        }
    }
}
