use super::parser::parse_resume;
use crate::error::{Result, TalentError};
use crate::types::resume::ParsedResume;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;
        let failed = |reason: String| TalentError::PdfExtraction {
            path: path.display().to_string(),
            reason,
        };
        // pdf-extract panics on some structurally valid but incomplete documents
        match panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(&bytes)
        })) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(failed(e.to_string())),
            Err(payload) => Err(failed(panic_reason(payload.as_ref()))),
        }
    }
}

fn panic_reason(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| message.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "extractor panicked".to_string())
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Picks an extractor from the file extension (case-insensitive).
pub fn extractor_for(path: &Path) -> Option<&'static dyn TextExtractor> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "pdf" => Some(&PdfExtractor),
        "txt" => Some(&PlainTextExtractor),
        _ => None,
    }
}

/// Supported resume files directly inside `dir`, sorted by file name.
pub fn resume_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(TalentError::PathNotFound(dir.display().to_string()));
    }
    Ok(WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| extractor_for(path).is_some())
        .collect())
}

pub fn parse_file(path: &Path) -> Result<ParsedResume> {
    if !path.exists() {
        return Err(TalentError::PathNotFound(path.display().to_string()));
    }
    let extractor = extractor_for(path).unwrap_or(&PlainTextExtractor);
    let text = extractor.extract(path)?;
    let mut parsed = parse_resume(&text);
    parsed.filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    Ok(parsed)
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub resumes: Vec<ParsedResume>,
    pub skipped: Vec<String>,
}

/// Parses every resume in `dir`. Files whose text cannot be extracted are
/// skipped and reported in [`BatchOutcome::skipped`].
pub fn batch_parse(dir: &Path) -> Result<BatchOutcome> {
    let mut outcome = BatchOutcome::default();
    for path in resume_files(dir)? {
        match parse_file(&path) {
            Ok(parsed) => outcome.resumes.push(parsed),
            Err(e) => {
                warn!(path = %path.display(), "skipping resume: {e}");
                outcome.skipped.push(format!("{}: {}", path.display(), e));
            }
        }
    }
    info!(
        parsed = outcome.resumes.len(),
        skipped = outcome.skipped.len(),
        "batch parse finished"
    );
    Ok(outcome)
}
