use crate::types::report::{ProfileSummary, TalentReport};

pub fn plain_summary(summary: &ProfileSummary) -> String {
    format!(
        "This candidate demonstrates {}, {}, and {}.",
        summary.library_diversity.describe().to_lowercase(),
        summary.complexity.describe().to_lowercase(),
        summary.documentation.describe().to_lowercase()
    )
}

pub fn profile_summary(summary: &ProfileSummary) -> String {
    let mut lines = vec![
        "Math Talent Analysis Summary".to_string(),
        String::new(),
        format!("Math Libraries: {}", summary.library_diversity.describe()),
        format!("Code Complexity: {}", summary.complexity.describe()),
        format!("Documentation: {}", summary.documentation.describe()),
        String::new(),
        "Strengths:".to_string(),
    ];
    lines.extend(summary.strengths.iter().map(|item| format!("- {item}")));
    lines.push(String::new());
    lines.push("Areas for Improvement:".to_string());
    lines.extend(summary.improvements.iter().map(|item| format!("- {item}")));
    lines.join("\n")
}

/// Short-form summary addressed to a recruiter.
pub fn recruiter_summary(report: &TalentReport) -> String {
    let summary = &report.summary;
    let mut lines = vec![
        format!("Recruiter Summary for {}", report.profile.display_name()),
        String::new(),
        format!(
            "- Math Library Experience: {}",
            summary.library_diversity.describe()
        ),
        format!("- Code Complexity: {}", summary.complexity.describe()),
        format!("- Documentation: {}", summary.documentation.describe()),
        String::new(),
        "Key Strengths:".to_string(),
    ];
    lines.extend(strength_badges(summary).iter().map(|badge| format!("- {badge}")));
    lines.push("Areas for Growth:".to_string());
    lines.extend(red_flags(summary).iter().map(|flag| format!("- {flag}")));
    lines.join("\n")
}

pub fn strength_badges(summary: &ProfileSummary) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if summary.unique_libraries >= 5 {
        badges.push("Strong library diversity");
    }
    if summary.avg_complexity_level >= 1.5 {
        badges.push("Advanced/research-level code");
    }
    if summary.avg_documentation_score >= 2.5 {
        badges.push("Exceptional/detailed docs");
    }
    badges
}

pub fn red_flags(summary: &ProfileSummary) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if summary.unique_libraries < 2 {
        flags.push("Limited advanced library usage");
    }
    if summary.avg_complexity_level < 0.5 {
        flags.push("No advanced code complexity");
    }
    if summary.avg_documentation_score < 1.5 {
        flags.push("Minimal/no documentation");
    }
    flags
}
