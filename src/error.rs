use thiserror::Error;

#[derive(Error, Debug)]
pub enum TalentError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("unexpected input shape in {path}: expected {expected}")]
    UnexpectedShape { path: String, expected: &'static str },

    #[error("failed to build {category} matcher: {reason}")]
    DictionaryBuild {
        category: &'static str,
        reason: String,
    },

    #[error("pdf extraction failed for {path}: {reason}")]
    PdfExtraction { path: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TalentError>;
