mod analyze;
mod cli;
mod config;
mod error;
mod report;
mod resume;
mod signals;
mod source;
mod types;

use crate::error::TalentError;
use crate::report::OutputFormat;
use crate::signals::Dictionaries;
use crate::types::config::TalentConfig;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)));
    // stdout carries the report
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn report_warnings(warnings: &[String]) -> i32 {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
    if warnings.is_empty() {
        exit_code::SUCCESS
    } else {
        exit_code::WARNINGS
    }
}

fn load_settings() -> Result<TalentConfig, TalentError> {
    let cwd = std::env::current_dir()?;
    Ok(config::load_config(&cwd)?.unwrap_or_default())
}

/// Built-ins are shared; configured extras compile into `custom`.
fn active_dictionaries<'a>(
    settings: &TalentConfig,
    custom: &'a mut Option<Dictionaries>,
) -> Result<&'a Dictionaries, TalentError> {
    if settings.dictionaries.is_empty() {
        return Dictionaries::builtin();
    }
    Ok(custom.insert(Dictionaries::with_extras(&settings.dictionaries)?))
}

fn run() -> Result<i32, TalentError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    info!("mathtalent v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let settings = load_settings()?;
            let mut custom = None;
            let dictionaries = active_dictionaries(&settings, &mut custom)?;
            let source = source::JsonFileSource::new(cmd.repos, cmd.profile);
            let snapshot = source::load(&source);
            let talent_report = analyze::analyze(&snapshot.repos, snapshot.profile, dictionaries);

            let format = cmd
                .format
                .map(OutputFormat::from)
                .or_else(|| settings.report.output_format())
                .unwrap_or(OutputFormat::Md);
            let recruiter = cmd.recruiter || settings.report.recruiter;
            let rendered = report::render(&talent_report, format, recruiter)?;
            println!("{rendered}");

            Ok(report_warnings(&snapshot.warnings))
        }
        cli::Commands::Resume(cmd) => {
            let parsed = resume::batch::parse_file(&cmd.path)?;
            let rendered = report::render_resumes(&[parsed], cmd.format.into())?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            let outcome = resume::batch::batch_parse(&cmd.dir)?;
            if outcome.resumes.is_empty() && outcome.skipped.is_empty() {
                warn!("no resumes found in {}", cmd.dir.display());
            }
            let rendered = report::render_resumes(&outcome.resumes, cmd.format.into())?;
            println!("{rendered}");
            Ok(report_warnings(&outcome.skipped))
        }
        cli::Commands::Terms => {
            let settings = load_settings()?;
            let mut custom = None;
            let dictionaries = active_dictionaries(&settings, &mut custom)?;
            for (category, terms) in [
                ("library", dictionaries.libraries.terms()),
                ("complexity", dictionaries.complexity.terms()),
                ("documentation", dictionaries.documentation.terms()),
            ] {
                println!("{category}: {}", terms.join(", "));
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
