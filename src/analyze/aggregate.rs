use crate::types::report::{
    ComplexityRating, Distributions, DocumentationRating, LevelCount, LibraryDiversity,
    ProfileSummary,
};
use crate::types::scoring::{
    ComplexityLevel, ComplexityScores, DocumentationBucket, DocumentationScores, LibraryScores,
};

pub fn unique_libraries(libraries: &LibraryScores) -> usize {
    libraries.values().filter(|usage| usage.count > 0).count()
}

/// Mean bucket value (0-3) over scored repositories; 0 when none scored.
pub fn average_complexity_level(complexity: &ComplexityScores) -> f64 {
    if complexity.is_empty() {
        return 0.0;
    }
    let total: u32 = complexity
        .values()
        .map(|entry| u32::from(entry.level().value()))
        .sum();
    f64::from(total) / complexity.len() as f64
}

pub fn average_documentation_score(documentation: &DocumentationScores) -> f64 {
    let total: u32 = documentation.values().map(|entry| entry.score).sum();
    f64::from(total) / documentation.len().max(1) as f64
}

pub fn summarize(
    libraries: &LibraryScores,
    complexity: &ComplexityScores,
    documentation: &DocumentationScores,
) -> ProfileSummary {
    let unique_libraries = unique_libraries(libraries);
    let avg_complexity_level = average_complexity_level(complexity);
    let avg_documentation_score = average_documentation_score(documentation);

    let mut strengths = Vec::new();
    if unique_libraries >= 5 {
        strengths.push("Strong library diversity".to_string());
    }
    if avg_complexity_level >= 1.5 {
        strengths.push("Advanced or research-level code complexity".to_string());
    }
    if avg_documentation_score >= 2.5 {
        strengths.push("Exceptional or detailed documentation".to_string());
    }

    let mut improvements = Vec::new();
    if unique_libraries < 2 {
        improvements.push("Limited advanced library usage".to_string());
    }
    if avg_complexity_level < 0.5 {
        improvements.push("No advanced code complexity detected".to_string());
    }
    if avg_documentation_score < 1.5 {
        improvements.push("Minimal or no documentation".to_string());
    }

    ProfileSummary {
        unique_libraries,
        avg_complexity_level,
        avg_documentation_score,
        library_diversity: LibraryDiversity::from_unique(unique_libraries),
        complexity: ComplexityRating::from_average(avg_complexity_level),
        documentation: DocumentationRating::from_average(avg_documentation_score),
        strengths,
        improvements,
    }
}

pub fn distributions(
    complexity: &ComplexityScores,
    documentation: &DocumentationScores,
) -> Distributions {
    let complexity = ComplexityLevel::ALL
        .iter()
        .map(|&level| LevelCount {
            level,
            repositories: complexity
                .values()
                .filter(|entry| entry.level() == level)
                .count(),
        })
        .collect();
    let documentation = DocumentationBucket::ALL
        .iter()
        .map(|&level| LevelCount {
            level,
            repositories: documentation
                .values()
                .filter(|entry| DocumentationBucket::from_score(entry.score) == level)
                .count(),
        })
        .collect();
    Distributions {
        complexity,
        documentation,
    }
}
