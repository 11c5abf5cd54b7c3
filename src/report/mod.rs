pub mod json;
pub mod md;
pub mod text;

use crate::error::TalentError;
use crate::types::report::TalentReport;
use crate::types::resume::ParsedResume;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
    Text,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "md" | "markdown" => Some(OutputFormat::Md),
            "text" | "txt" => Some(OutputFormat::Text),
            _ => None,
        }
    }
}

pub fn render(
    report: &TalentReport,
    format: OutputFormat,
    recruiter: bool,
) -> Result<String, TalentError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(TalentError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, recruiter)),
        OutputFormat::Text if recruiter => Ok(text::recruiter_summary(report)),
        OutputFormat::Text => Ok(text::profile_summary(&report.summary)),
    }
}

/// Resumes have no plain-text layout of their own; text falls back to markdown.
pub fn render_resumes(
    resumes: &[ParsedResume],
    format: OutputFormat,
) -> Result<String, TalentError> {
    match format {
        OutputFormat::Json => json::to_json(resumes).map_err(TalentError::Json),
        OutputFormat::Md | OutputFormat::Text => Ok(md::resumes_to_markdown(resumes)),
    }
}
