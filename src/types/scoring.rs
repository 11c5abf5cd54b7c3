use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LibraryUsage {
    pub count: usize,
    pub repos: Vec<String>,
}

pub type LibraryScores = BTreeMap<String, LibraryUsage>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityEntry {
    #[serde(rename = "complexity_signals")]
    pub signals: Vec<String>,
    pub score: usize,
}

impl ComplexityEntry {
    pub fn level(&self) -> ComplexityLevel {
        ComplexityLevel::from_score(self.score)
    }
}

pub type ComplexityScores = BTreeMap<String, ComplexityEntry>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentationEntry {
    pub score: u32,
    pub notes: String,
}

pub type DocumentationScores = BTreeMap<String, DocumentationEntry>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ComplexityLevel {
    None,
    Basic,
    Advanced,
    #[serde(rename = "Research-level")]
    ResearchLevel,
}

impl ComplexityLevel {
    pub const ALL: [ComplexityLevel; 4] = [
        ComplexityLevel::None,
        ComplexityLevel::Basic,
        ComplexityLevel::Advanced,
        ComplexityLevel::ResearchLevel,
    ];

    pub fn from_score(score: usize) -> Self {
        match score {
            0 => ComplexityLevel::None,
            1 => ComplexityLevel::Basic,
            2 | 3 => ComplexityLevel::Advanced,
            _ => ComplexityLevel::ResearchLevel,
        }
    }

    pub fn value(self) -> u8 {
        match self {
            ComplexityLevel::None => 0,
            ComplexityLevel::Basic => 1,
            ComplexityLevel::Advanced => 2,
            ComplexityLevel::ResearchLevel => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComplexityLevel::None => "None",
            ComplexityLevel::Basic => "Basic",
            ComplexityLevel::Advanced => "Advanced",
            ComplexityLevel::ResearchLevel => "Research-level",
        }
    }
}

/// Documentation score bucket, capped at 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum DocumentationBucket {
    None,
    Minimal,
    #[serde(rename = "Some usage/examples")]
    SomeUsage,
    Detailed,
    Exceptional,
}

impl DocumentationBucket {
    pub const ALL: [DocumentationBucket; 5] = [
        DocumentationBucket::None,
        DocumentationBucket::Minimal,
        DocumentationBucket::SomeUsage,
        DocumentationBucket::Detailed,
        DocumentationBucket::Exceptional,
    ];

    pub fn from_score(score: u32) -> Self {
        match score {
            0 => DocumentationBucket::None,
            1 => DocumentationBucket::Minimal,
            2 => DocumentationBucket::SomeUsage,
            3 => DocumentationBucket::Detailed,
            _ => DocumentationBucket::Exceptional,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentationBucket::None => "None",
            DocumentationBucket::Minimal => "Minimal",
            DocumentationBucket::SomeUsage => "Some usage/examples",
            DocumentationBucket::Detailed => "Detailed",
            DocumentationBucket::Exceptional => "Exceptional",
        }
    }
}
