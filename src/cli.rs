use crate::report::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mathtalent",
    version,
    about = "Mathematical talent signals from repository metadata and resumes"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a saved repository listing and print the profile report
    Analyze(AnalyzeCommand),
    /// Parse a single resume (.txt or .pdf)
    Resume(ResumeCommand),
    /// Parse every resume in a directory
    Batch(BatchCommand),
    /// List the active dictionary terms
    Terms,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// JSON array of repositories, as returned by the API
    pub repos: PathBuf,
    /// JSON object describing the user profile
    #[arg(long)]
    pub profile: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Add the recruiter summary
    #[arg(long)]
    pub recruiter: bool,
}

#[derive(Args)]
pub struct ResumeCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ResumeFormat,
}

#[derive(Args)]
pub struct BatchCommand {
    pub dir: PathBuf,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ResumeFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Text,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ResumeFormat {
    Json,
    Md,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Md => OutputFormat::Md,
            ReportFormat::Text => OutputFormat::Text,
        }
    }
}

impl From<ResumeFormat> for OutputFormat {
    fn from(format: ResumeFormat) -> Self {
        match format {
            ResumeFormat::Json => OutputFormat::Json,
            ResumeFormat::Md => OutputFormat::Md,
        }
    }
}
