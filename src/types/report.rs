use crate::types::entity::Profile;
use crate::types::scoring::{
    ComplexityLevel, ComplexityScores, DocumentationBucket, DocumentationScores, LibraryScores,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LibraryDiversity {
    Strong,
    Some,
    Limited,
}

impl LibraryDiversity {
    pub fn from_unique(unique_libraries: usize) -> Self {
        if unique_libraries >= 5 {
            LibraryDiversity::Strong
        } else if unique_libraries >= 2 {
            LibraryDiversity::Some
        } else {
            LibraryDiversity::Limited
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            LibraryDiversity::Strong => "Strong math library diversity",
            LibraryDiversity::Some => "Some math/science library experience",
            LibraryDiversity::Limited => "Limited advanced math library usage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplexityRating {
    #[serde(rename = "Research-level")]
    ResearchLevel,
    Advanced,
    Some,
    None,
}

impl ComplexityRating {
    pub fn from_average(average_level: f64) -> Self {
        if average_level >= 2.5 {
            ComplexityRating::ResearchLevel
        } else if average_level >= 1.5 {
            ComplexityRating::Advanced
        } else if average_level >= 0.5 {
            ComplexityRating::Some
        } else {
            ComplexityRating::None
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            ComplexityRating::ResearchLevel => "Research-level code complexity",
            ComplexityRating::Advanced => "Advanced code complexity",
            ComplexityRating::Some => "Some algorithmic sophistication",
            ComplexityRating::None => "No advanced code complexity detected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentationRating {
    Exceptional,
    Detailed,
    #[serde(rename = "Some usage")]
    SomeUsage,
    Minimal,
    None,
}

impl DocumentationRating {
    pub fn from_average(average_score: f64) -> Self {
        if average_score >= 3.5 {
            DocumentationRating::Exceptional
        } else if average_score >= 2.5 {
            DocumentationRating::Detailed
        } else if average_score >= 1.5 {
            DocumentationRating::SomeUsage
        } else if average_score >= 0.5 {
            DocumentationRating::Minimal
        } else {
            DocumentationRating::None
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            DocumentationRating::Exceptional => "Exceptional documentation",
            DocumentationRating::Detailed => "Detailed documentation",
            DocumentationRating::SomeUsage => "Some usage/examples",
            DocumentationRating::Minimal => "Minimal documentation",
            DocumentationRating::None => "No documentation found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub unique_libraries: usize,
    pub avg_complexity_level: f64,
    pub avg_documentation_score: f64,
    pub library_diversity: LibraryDiversity,
    pub complexity: ComplexityRating,
    pub documentation: DocumentationRating,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePoint {
    pub repository: String,
    pub created_at: DateTime<Utc>,
    pub total_score: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelCount<L> {
    pub level: L,
    pub repositories: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distributions {
    pub complexity: Vec<LevelCount<ComplexityLevel>>,
    pub documentation: Vec<LevelCount<DocumentationBucket>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TalentReport {
    pub profile: Profile,
    pub repository_count: usize,
    pub libraries: LibraryScores,
    pub complexity: ComplexityScores,
    pub documentation: DocumentationScores,
    pub summary: ProfileSummary,
    pub distributions: Distributions,
    pub timeline: Vec<TimelinePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_diversity_thresholds_are_inclusive() {
        assert_eq!(LibraryDiversity::from_unique(5), LibraryDiversity::Strong);
        assert_eq!(LibraryDiversity::from_unique(4), LibraryDiversity::Some);
        assert_eq!(LibraryDiversity::from_unique(2), LibraryDiversity::Some);
        assert_eq!(LibraryDiversity::from_unique(1), LibraryDiversity::Limited);
        assert_eq!(LibraryDiversity::from_unique(0), LibraryDiversity::Limited);
    }

    #[test]
    fn complexity_rating_thresholds_are_inclusive() {
        assert_eq!(ComplexityRating::from_average(2.5), ComplexityRating::ResearchLevel);
        assert_eq!(ComplexityRating::from_average(2.49), ComplexityRating::Advanced);
        assert_eq!(ComplexityRating::from_average(1.5), ComplexityRating::Advanced);
        assert_eq!(ComplexityRating::from_average(0.5), ComplexityRating::Some);
        assert_eq!(ComplexityRating::from_average(0.49), ComplexityRating::None);
    }

    #[test]
    fn documentation_rating_thresholds_are_inclusive() {
        assert_eq!(DocumentationRating::from_average(3.5), DocumentationRating::Exceptional);
        assert_eq!(DocumentationRating::from_average(2.5), DocumentationRating::Detailed);
        assert_eq!(DocumentationRating::from_average(1.5), DocumentationRating::SomeUsage);
        assert_eq!(DocumentationRating::from_average(0.5), DocumentationRating::Minimal);
        assert_eq!(DocumentationRating::from_average(0.0), DocumentationRating::None);
    }
}
