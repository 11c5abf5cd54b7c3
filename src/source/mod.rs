pub mod json_file;

use crate::error::Result;
use crate::types::entity::{Profile, Repository};
use tracing::warn;

pub use json_file::JsonFileSource;

/// Fallible access to saved profile data. [`load`] degrades failures to
/// empty defaults plus warnings.
pub trait ProfileSource {
    fn fetch_profile(&self) -> Result<Profile>;
    fn fetch_repos(&self) -> Result<Vec<Repository>>;
}

#[derive(Debug, Default)]
pub struct Snapshot {
    pub profile: Profile,
    pub repos: Vec<Repository>,
    pub warnings: Vec<String>,
}

pub fn load(source: &dyn ProfileSource) -> Snapshot {
    let mut warnings = Vec::new();
    let profile = degrade("profile", source.fetch_profile(), &mut warnings);
    let repos = degrade("repositories", source.fetch_repos(), &mut warnings);
    Snapshot {
        profile,
        repos,
        warnings,
    }
}

fn degrade<T: Default>(what: &str, result: Result<T>, warnings: &mut Vec<String>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!("could not load {what}: {e}");
            warnings.push(format!("could not load {what}: {e}"));
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TalentError;

    struct Failing;

    impl ProfileSource for Failing {
        fn fetch_profile(&self) -> Result<Profile> {
            Err(TalentError::PathNotFound("profile.json".to_string()))
        }

        fn fetch_repos(&self) -> Result<Vec<Repository>> {
            Err(TalentError::UnexpectedShape {
                path: "repos.json".to_string(),
                expected: "a JSON array of repositories",
            })
        }
    }

    #[test]
    fn failures_degrade_to_empty_data_with_warnings() {
        let snapshot = load(&Failing);
        assert_eq!(snapshot.profile, Profile::default());
        assert!(snapshot.repos.is_empty());
        assert_eq!(snapshot.warnings.len(), 2);
        assert!(snapshot.warnings[0].starts_with("could not load profile"));
        assert!(snapshot.warnings[1].contains("expected a JSON array"));
    }
}
