use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Repository metadata as returned by the code-hosting API.
///
/// Built leniently: a field holding the wrong JSON type is treated as absent,
/// so one malformed record never aborts an analysis.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Repository {
    pub name: Option<String>,
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub language: Option<String>,
    pub has_wiki: bool,
    pub has_pages: bool,
    pub has_readme: bool,
    pub created_at: Option<String>,
}

impl Repository {
    /// Key used by per-repository score mappings.
    pub fn key(&self) -> &str {
        self.name.as_deref().unwrap_or("unknown")
    }

    /// Name recorded in library usage lists.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl From<Value> for Repository {
    fn from(value: Value) -> Self {
        let topics = value
            .get("topics")
            .and_then(Value::as_array)
            .map(|topics| {
                topics
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: string_field(&value, "name"),
            description: string_field(&value, "description"),
            topics,
            language: string_field(&value, "language"),
            has_wiki: flag(&value, "has_wiki"),
            has_pages: flag(&value, "has_pages"),
            has_readme: flag(&value, "has_readme"),
            created_at: string_field(&value, "created_at"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Profile {
    pub login: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub public_repos: Option<u64>,
    pub followers: Option<u64>,
    pub html_url: Option<String>,
}

impl Profile {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.login.as_deref())
            .unwrap_or("Candidate")
    }
}

impl From<Value> for Profile {
    fn from(value: Value) -> Self {
        Self {
            login: string_field(&value, "login"),
            name: string_field(&value, "name"),
            bio: string_field(&value, "bio"),
            location: string_field(&value, "location"),
            public_repos: value.get("public_repos").and_then(Value::as_u64),
            followers: value.get("followers").and_then(Value::as_u64),
            html_url: string_field(&value, "html_url"),
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn flag(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}

#[cfg(test)]
impl Repository {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_topics(mut self, topics: &[&str]) -> Self {
        self.topics = topics.iter().map(|topic| topic.to_string()).collect();
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repository_treats_wrong_typed_fields_as_absent() {
        let repo: Repository = serde_json::from_value(json!({
            "name": "solver",
            "description": 42,
            "topics": "not-a-list",
            "language": null,
            "has_wiki": "yes",
            "has_readme": true
        }))
        .expect("any json value should convert");

        assert_eq!(repo.name.as_deref(), Some("solver"));
        assert!(repo.description.is_none());
        assert!(repo.topics.is_empty());
        assert!(repo.language.is_none());
        assert!(!repo.has_wiki);
        assert!(repo.has_readme);
    }

    #[test]
    fn repository_keeps_only_string_topics() {
        let repo = Repository::from(json!({ "topics": ["graph", 7, "convex"] }));
        assert_eq!(repo.topics, vec!["graph", "convex"]);
        assert_eq!(repo.key(), "unknown");
        assert_eq!(repo.display_name(), "");
    }

    #[test]
    fn profile_display_name_falls_back_to_login_then_candidate() {
        let named = Profile::from(json!({ "name": "Ada", "login": "ada" }));
        let login_only = Profile::from(json!({ "login": "ada", "name": null }));
        assert_eq!(named.display_name(), "Ada");
        assert_eq!(login_only.display_name(), "ada");
        assert_eq!(Profile::default().display_name(), "Candidate");
    }
}
