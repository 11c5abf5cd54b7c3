use crate::error::TalentError;
use crate::report::OutputFormat;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TalentConfig {
    #[serde(default)]
    pub dictionaries: DictionaryConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Terms appended to the built-in dictionaries at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionaryConfig {
    #[serde(default)]
    pub extra_libraries: Vec<String>,
    #[serde(default)]
    pub extra_complexity: Vec<String>,
    #[serde(default)]
    pub extra_documentation: Vec<String>,
}

impl DictionaryConfig {
    pub fn is_empty(&self) -> bool {
        self.extra_libraries.is_empty()
            && self.extra_complexity.is_empty()
            && self.extra_documentation.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
    #[serde(default)]
    pub recruiter: bool,
}

impl ReportConfig {
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(OutputFormat::from_name)
    }
}

impl TalentConfig {
    pub fn validate(&self) -> Result<(), TalentError> {
        let dictionaries = &self.dictionaries;
        for term in &dictionaries.extra_libraries {
            let term = term.trim();
            let edges_are_word_chars = term.chars().next().is_some_and(char::is_alphanumeric)
                && term.chars().last().is_some_and(char::is_alphanumeric);
            if !edges_are_word_chars {
                return Err(TalentError::ConfigParse(format!(
                    "dictionaries.extra_libraries term must start and end with a letter or digit: {:?}",
                    term
                )));
            }
        }

        for term in &dictionaries.extra_complexity {
            let lowered = term.trim().to_lowercase();
            if lowered.is_empty()
                || !lowered
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ')
            {
                return Err(TalentError::ConfigParse(format!(
                    "dictionaries.extra_complexity terms may only contain [a-z0-9 ]: {:?}",
                    term
                )));
            }
        }

        if dictionaries
            .extra_documentation
            .iter()
            .any(|term| term.trim().is_empty())
        {
            return Err(TalentError::ConfigParse(
                "dictionaries.extra_documentation cannot contain empty terms".to_string(),
            ));
        }

        if let Some(format) = &self.report.format {
            if OutputFormat::from_name(format).is_none() {
                return Err(TalentError::ConfigParse(format!(
                    "unsupported report.format: {} (expected md, json or text)",
                    format
                )));
            }
        }

        Ok(())
    }
}
