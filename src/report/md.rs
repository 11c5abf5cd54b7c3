use super::text::{plain_summary, red_flags, strength_badges};
use crate::types::report::TalentReport;
use crate::types::resume::ParsedResume;

pub fn to_markdown(report: &TalentReport, recruiter: bool) -> String {
    let mut output = String::new();
    output.push_str("# Math Talent Report\n\n");
    push_profile(&mut output, report);

    let summary = &report.summary;
    output.push_str("## Summary\n\n");
    output.push_str(&format!(
        "- Math Libraries: {} ({} unique)\n- Code Complexity: {} (average level {:.2})\n- Documentation: {} (average score {:.2})\n\n",
        summary.library_diversity.describe(),
        summary.unique_libraries,
        summary.complexity.describe(),
        summary.avg_complexity_level,
        summary.documentation.describe(),
        summary.avg_documentation_score
    ));
    output.push_str("### Strengths\n\n");
    push_list(&mut output, &summary.strengths);
    output.push_str("### Areas for Improvement\n\n");
    push_list(&mut output, &summary.improvements);

    if recruiter {
        output.push_str("## Why Consider This Candidate?\n\n");
        output.push_str(&plain_summary(summary));
        output.push_str("\n\n");
        output.push_str(&format!(
            "- Strengths: {}\n- Red flags: {}\n\n",
            joined_or_none(&strength_badges(summary)),
            joined_or_none(&red_flags(summary))
        ));
    }

    output.push_str("## Math Libraries\n\n");
    if report.libraries.is_empty() {
        output.push_str("No mathematical libraries detected in public repositories.\n\n");
    } else {
        output.push_str("| Library | Count | Repos |\n|---|---|---|\n");
        for (library, usage) in &report.libraries {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                cell(library),
                usage.count,
                cell(&usage.repos.join(", "))
            ));
        }
        output.push('\n');
    }

    output.push_str("## Code Complexity\n\n");
    if report.complexity.is_empty() {
        output.push_str("No advanced complexity signals detected.\n\n");
    } else {
        output.push_str("| Repository | Signals | Score | Complexity Level |\n|---|---|---|---|\n");
        for (repository, entry) in &report.complexity {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                cell(repository),
                cell(&entry.signals.join(", ")),
                entry.score,
                entry.level().label()
            ));
        }
        output.push('\n');
    }

    output.push_str("## Documentation Quality\n\n");
    if report.documentation.is_empty() {
        output.push_str("No documentation quality signals detected.\n\n");
    } else {
        output.push_str("| Repository | Score | Notes |\n|---|---|---|\n");
        for (repository, entry) in &report.documentation {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                cell(repository),
                entry.score,
                cell(&entry.notes)
            ));
        }
        output.push('\n');
    }

    output.push_str("## Distributions\n\n");
    let complexity = report
        .distributions
        .complexity
        .iter()
        .map(|count| format!("{} {}", count.level.label(), count.repositories))
        .collect::<Vec<_>>();
    let documentation = report
        .distributions
        .documentation
        .iter()
        .map(|count| format!("{} {}", count.level.label(), count.repositories))
        .collect::<Vec<_>>();
    output.push_str(&format!(
        "- complexity: {}\n- documentation: {}\n\n",
        complexity.join(", "),
        documentation.join(", ")
    ));

    output.push_str("## Score Timeline\n\n");
    if report.timeline.is_empty() {
        output.push_str("No repository creation dates available for trend analysis.\n");
    } else {
        output.push_str("| Created | Repository | Total Score |\n|---|---|---|\n");
        for point in &report.timeline {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                point.created_at.format("%Y-%m-%d"),
                cell(&point.repository),
                point.total_score
            ));
        }
    }

    output
}

fn push_profile(output: &mut String, report: &TalentReport) {
    let profile = &report.profile;
    output.push_str(&format!("Candidate: {}", profile.display_name()));
    if let Some(login) = &profile.login {
        output.push_str(&format!(" (@{login})"));
    }
    output.push_str("\n\n");

    let details = [
        ("Bio", profile.bio.clone()),
        ("Location", profile.location.clone()),
        ("Public repos", profile.public_repos.map(|n| n.to_string())),
        ("Followers", profile.followers.map(|n| n.to_string())),
        ("Profile", profile.html_url.clone()),
    ];
    let mut any = false;
    for (label, value) in details {
        if let Some(value) = value {
            output.push_str(&format!("- {label}: {value}\n"));
            any = true;
        }
    }
    if any {
        output.push('\n');
    }
    output.push_str(&format!(
        "Repositories analyzed: {}\n\n",
        report.repository_count
    ));
}

fn push_list(output: &mut String, items: &[String]) {
    if items.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    for item in items {
        output.push_str(&format!("- {item}\n"));
    }
    output.push('\n');
}

fn joined_or_none(items: &[&str]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

pub fn resumes_to_markdown(resumes: &[ParsedResume]) -> String {
    let mut output = String::new();
    output.push_str("# Parsed Resumes\n\n");
    if resumes.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for resume in resumes {
        let heading = if resume.name.is_empty() {
            "(unnamed)"
        } else {
            resume.name.as_str()
        };
        output.push_str(&format!("## {heading}\n\n"));
        if let Some(filename) = &resume.filename {
            output.push_str(&format!("File: {filename}\n\n"));
        }
        for (title, lines) in [
            ("Education", &resume.education),
            ("Experience", &resume.experience),
            ("Skills", &resume.skills),
        ] {
            output.push_str(&format!("### {title}\n\n"));
            push_list(&mut output, lines);
        }
    }
    output
}
