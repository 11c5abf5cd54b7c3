use crate::signals::matcher::WordMatcher;
use crate::signals::normalize;
use crate::types::entity::Repository;
use crate::types::report::TimelinePoint;
use crate::types::scoring::{ComplexityScores, DocumentationScores};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Total score per repository ordered by creation time. Repositories without
/// a parseable RFC 3339 `created_at` are left out. Library hits are counted
/// from each repository's own text, so nameless or same-named repositories
/// never share them.
pub fn score_timeline(
    repos: &[Repository],
    libraries: &WordMatcher,
    complexity: &ComplexityScores,
    documentation: &DocumentationScores,
) -> Vec<TimelinePoint> {
    let mut points: Vec<TimelinePoint> = repos
        .iter()
        .filter_map(|repo| {
            let raw = repo.created_at.as_deref()?;
            let created_at = match DateTime::parse_from_rfc3339(raw) {
                Ok(parsed) => parsed.with_timezone(&Utc),
                Err(e) => {
                    debug!(repo = repo.key(), created_at = raw, "unparseable timestamp: {e}");
                    return None;
                }
            };

            let key = repo.key();
            let complexity_score = complexity.get(key).map_or(0, |entry| entry.score);
            let documentation_score = documentation
                .get(key)
                .map_or(0, |entry| entry.score as usize);
            let library_score = libraries
                .matched_terms(&normalize::library_text(repo))
                .len();

            Some(TimelinePoint {
                repository: key.to_string(),
                created_at,
                total_score: complexity_score + documentation_score + library_score,
            })
        })
        .collect();
    points.sort_by_key(|point| point.created_at);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::{complexity, documentation};
    use crate::signals::Dictionaries;

    fn created(repo: Repository, at: &str) -> Repository {
        Repository {
            created_at: Some(at.to_string()),
            ..repo
        }
    }

    #[test]
    fn timeline_sums_scores_and_sorts_by_creation() {
        let dictionaries = Dictionaries::builtin().expect("builtins should compile");
        let repos = vec![
            created(
                Repository::named("later").with_description("numpy graph"),
                "2021-06-01T00:00:00Z",
            ),
            created(
                Repository {
                    has_readme: true,
                    ..Repository::named("earlier")
                },
                "2019-01-26T19:01:12Z",
            ),
            created(Repository::named("broken"), "last tuesday"),
            Repository::named("undated").with_description("scipy"),
        ];

        let complexity = complexity::complexity_scores(&repos, &dictionaries.complexity);
        let documentation =
            documentation::documentation_scores(&repos, &dictionaries.documentation);

        let points =
            score_timeline(&repos, &dictionaries.libraries, &complexity, &documentation);
        let summary: Vec<(&str, usize)> = points
            .iter()
            .map(|point| (point.repository.as_str(), point.total_score))
            .collect();
        // earlier: README (2); later: graph (1) + numpy (1)
        assert_eq!(summary, vec![("earlier", 2), ("later", 2)]);
    }

    #[test]
    fn nameless_repositories_do_not_share_library_hits() {
        let dictionaries = Dictionaries::builtin().expect("builtins should compile");
        let repos = vec![
            Repository {
                description: Some("numpy scipy sympy".to_string()),
                ..Repository::default()
            },
            created(Repository::default(), "2022-02-02T00:00:00Z"),
            created(
                Repository::named("twin").with_description("pandas"),
                "2021-01-01T00:00:00Z",
            ),
            Repository::named("twin").with_description("jax numba"),
        ];
        let complexity = complexity::complexity_scores(&repos, &dictionaries.complexity);
        let documentation =
            documentation::documentation_scores(&repos, &dictionaries.documentation);

        let points =
            score_timeline(&repos, &dictionaries.libraries, &complexity, &documentation);
        let summary: Vec<(&str, usize)> = points
            .iter()
            .map(|point| (point.repository.as_str(), point.total_score))
            .collect();
        assert_eq!(summary, vec![("twin", 1), ("unknown", 0)]);
    }
}
