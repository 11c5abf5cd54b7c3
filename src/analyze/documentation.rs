use crate::signals::matcher::SubstringMatcher;
use crate::types::entity::Repository;
use crate::types::scoring::{DocumentationEntry, DocumentationScores};
use tracing::debug;

pub const LONG_DESCRIPTION_CHARS: usize = 40;

#[tracing::instrument(skip_all, fields(repos = repos.len()))]
pub fn documentation_scores(
    repos: &[Repository],
    documentation: &SubstringMatcher,
) -> DocumentationScores {
    let mut scores = DocumentationScores::new();
    for repo in repos {
        if let Some(entry) = score_repository(repo, documentation) {
            debug!(repo = repo.key(), score = entry.score, "documentation scored");
            scores.insert(repo.key().to_string(), entry);
        }
    }
    scores
}

fn score_repository(repo: &Repository, documentation: &SubstringMatcher) -> Option<DocumentationEntry> {
    let mut score = 0u32;
    let mut notes = Vec::new();

    let description = repo.description.as_deref().unwrap_or_default();
    if description.chars().count() > LONG_DESCRIPTION_CHARS {
        score += 1;
        notes.push("Long description".to_string());
    }

    // Substring containment, unlike the whole-word complexity matcher.
    let lowered = description.to_lowercase();
    let keywords = documentation.matched_terms(&lowered);
    if !keywords.is_empty() {
        score += keywords.len() as u32;
        notes.push(format!("Keywords: {}", keywords.join(", ")));
    }

    if repo.has_wiki {
        score += 1;
        notes.push("Wiki enabled".to_string());
    }
    if repo.has_pages {
        score += 1;
        notes.push("Pages enabled".to_string());
    }
    if repo.has_readme {
        score += 2;
        notes.push("README detected".to_string());
    }

    (score > 0).then(|| DocumentationEntry {
        score,
        notes: notes.join("; "),
    })
}
