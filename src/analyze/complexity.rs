use crate::signals::matcher::WordMatcher;
use crate::signals::normalize;
use crate::types::entity::Repository;
use crate::types::scoring::{ComplexityEntry, ComplexityScores};
use tracing::debug;

#[tracing::instrument(skip_all, fields(repos = repos.len()))]
pub fn complexity_scores(repos: &[Repository], complexity: &WordMatcher) -> ComplexityScores {
    let mut scores = ComplexityScores::new();
    for repo in repos {
        let text = normalize::complexity_text(repo);
        let signals: Vec<String> = complexity
            .matched_terms(&text)
            .into_iter()
            .map(str::to_string)
            .collect();
        if signals.is_empty() {
            continue;
        }
        debug!(repo = repo.key(), score = signals.len(), "complexity signals found");
        scores.insert(
            repo.key().to_string(),
            ComplexityEntry {
                score: signals.len(),
                signals,
            },
        );
    }
    scores
}
