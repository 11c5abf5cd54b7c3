use super::ProfileSource;
use crate::error::{Result, TalentError};
use crate::types::entity::{Profile, Repository};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads API responses saved to disk: a repository array and, optionally, a
/// user profile object.
pub struct JsonFileSource {
    repos_path: PathBuf,
    profile_path: Option<PathBuf>,
}

impl JsonFileSource {
    pub fn new(repos_path: PathBuf, profile_path: Option<PathBuf>) -> Self {
        Self {
            repos_path,
            profile_path,
        }
    }
}

impl ProfileSource for JsonFileSource {
    fn fetch_profile(&self) -> Result<Profile> {
        let Some(path) = &self.profile_path else {
            return Ok(Profile::default());
        };
        match read_json(path)? {
            value @ Value::Object(_) => Ok(Profile::from(value)),
            _ => Err(TalentError::UnexpectedShape {
                path: path.display().to_string(),
                expected: "a JSON object describing the profile",
            }),
        }
    }

    fn fetch_repos(&self) -> Result<Vec<Repository>> {
        match read_json(&self.repos_path)? {
            Value::Array(items) => {
                debug!(count = items.len(), path = %self.repos_path.display(), "repositories loaded");
                Ok(items.into_iter().map(Repository::from).collect())
            }
            _ => Err(TalentError::UnexpectedShape {
                path: self.repos_path.display().to_string(),
                expected: "a JSON array of repositories",
            }),
        }
    }
}

fn read_json(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(TalentError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_repositories_and_profile() {
        let dir = TempDir::new().expect("temp dir should be created");
        let repos_path = dir.path().join("repos.json");
        let profile_path = dir.path().join("profile.json");
        fs::write(
            &repos_path,
            r#"[{"name": "solver", "topics": ["convex"], "has_wiki": true}, {"name": "misc"}]"#,
        )
        .expect("repos should write");
        fs::write(&profile_path, r#"{"login": "ada", "followers": 12}"#)
            .expect("profile should write");

        let source = JsonFileSource::new(repos_path, Some(profile_path));
        let repos = source.fetch_repos().expect("repos should load");
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].topics, vec!["convex"]);
        assert!(repos[0].has_wiki);

        let profile = source.fetch_profile().expect("profile should load");
        assert_eq!(profile.login.as_deref(), Some("ada"));
        assert_eq!(profile.followers, Some(12));
    }

    #[test]
    fn api_error_objects_are_rejected_as_repository_lists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let repos_path = dir.path().join("repos.json");
        fs::write(&repos_path, r#"{"message": "Not Found"}"#).expect("repos should write");

        let err = JsonFileSource::new(repos_path, None)
            .fetch_repos()
            .expect_err("object is not a repository list");
        assert!(matches!(err, TalentError::UnexpectedShape { .. }));
    }

    #[test]
    fn missing_profile_path_yields_default_profile() {
        let source = JsonFileSource::new(PathBuf::from("unused.json"), None);
        assert_eq!(source.fetch_profile().expect("no profile is fine"), Profile::default());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let repos_path = dir.path().join("repos.json");
        fs::write(&repos_path, "[{").expect("repos should write");
        let err = JsonFileSource::new(repos_path, None)
            .fetch_repos()
            .expect_err("truncated json should fail");
        assert!(matches!(err, TalentError::Json(_)));
    }
}
