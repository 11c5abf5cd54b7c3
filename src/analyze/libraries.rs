use crate::signals::matcher::WordMatcher;
use crate::signals::normalize;
use crate::types::entity::Repository;
use crate::types::scoring::LibraryScores;
use tracing::{debug, trace};

/// Counts, per library, the repositories whose topics, description or
/// language mention it. A repository counts once per library no matter how
/// many fields mention it.
#[tracing::instrument(skip_all, fields(repos = repos.len()))]
pub fn library_usage(repos: &[Repository], libraries: &WordMatcher) -> LibraryScores {
    let mut scores = LibraryScores::new();
    for repo in repos {
        let text = normalize::library_text(repo);
        for signal in libraries.scan(repo.display_name(), &text) {
            trace!(
                repo = signal.entity,
                term = signal.term,
                category = signal.category.as_str(),
                "signal matched"
            );
            let usage = scores.entry(signal.term.to_string()).or_default();
            usage.count += 1;
            usage.repos.push(signal.entity.to_string());
        }
    }
    debug!(libraries = scores.len(), "library usage scored");
    scores
}
