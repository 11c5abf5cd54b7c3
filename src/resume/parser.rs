use super::sections::{extract_section, EDUCATION, EXPERIENCE, SKILLS};
use crate::types::resume::ParsedResume;

pub fn parse_resume(text: &str) -> ParsedResume {
    ParsedResume {
        name: extract_name(text),
        education: extract_education(text),
        experience: extract_experience(text),
        skills: extract_skills(text),
        raw_text: text.to_string(),
        filename: None,
    }
}

/// First non-empty line of the whole text.
pub fn extract_name(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

pub fn extract_education(text: &str) -> Vec<String> {
    extract_section(text, &EDUCATION)
}

pub fn extract_experience(text: &str) -> Vec<String> {
    extract_section(text, &EXPERIENCE)
}

/// Skills section split on commas and flattened.
pub fn extract_skills(text: &str) -> Vec<String> {
    extract_section(text, &SKILLS)
        .iter()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}
