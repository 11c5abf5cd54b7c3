pub mod aggregate;
pub mod complexity;
pub mod documentation;
pub mod libraries;
pub mod timeline;

use crate::signals::Dictionaries;
use crate::types::entity::{Profile, Repository};
use crate::types::report::TalentReport;
use tracing::info;

pub fn analyze(repos: &[Repository], profile: Profile, dictionaries: &Dictionaries) -> TalentReport {
    let libraries = libraries::library_usage(repos, &dictionaries.libraries);
    let complexity = complexity::complexity_scores(repos, &dictionaries.complexity);
    let documentation = documentation::documentation_scores(repos, &dictionaries.documentation);

    let summary = aggregate::summarize(&libraries, &complexity, &documentation);
    let distributions = aggregate::distributions(&complexity, &documentation);
    let timeline =
        timeline::score_timeline(repos, &dictionaries.libraries, &complexity, &documentation);

    info!(
        repos = repos.len(),
        libraries = summary.unique_libraries,
        complexity = summary.avg_complexity_level,
        documentation = summary.avg_documentation_score,
        "profile analyzed"
    );

    TalentReport {
        profile,
        repository_count: repos.len(),
        libraries,
        complexity,
        documentation,
        summary,
        distributions,
        timeline,
    }
}
