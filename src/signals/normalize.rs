use crate::types::entity::Repository;

/// Lowercases each present, non-empty field and appends a space after it so
/// adjacent fields never fuse into one word.
pub fn field_blob<'a>(fields: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let mut blob = String::new();
    for field in fields.into_iter().flatten() {
        if field.is_empty() {
            continue;
        }
        blob.push_str(&field.to_lowercase());
        blob.push(' ');
    }
    blob
}

/// Replaces every character outside `[a-z0-9 ]` with a space.
pub fn strip_to_alphanumeric(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ' {
                c
            } else {
                ' '
            }
        })
        .collect()
}

fn joined_topics(repo: &Repository) -> String {
    repo.topics.join(" ")
}

/// Topics, description, language.
pub fn library_text(repo: &Repository) -> String {
    let topics = joined_topics(repo);
    field_blob([
        Some(topics.as_str()),
        repo.description.as_deref(),
        repo.language.as_deref(),
    ])
}

/// Topics, description, name; punctuation neutralized.
pub fn complexity_text(repo: &Repository) -> String {
    let topics = joined_topics(repo);
    strip_to_alphanumeric(&field_blob([
        Some(topics.as_str()),
        repo.description.as_deref(),
        repo.name.as_deref(),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_blob_skips_missing_and_empty_fields() {
        assert_eq!(field_blob([Some("NumPy"), None, Some(""), Some("Python")]), "numpy python ");
        assert_eq!(field_blob([None, None]), "");
    }

    #[test]
    fn library_text_keeps_punctuation() {
        let repo = Repository::named("combo")
            .with_topics(&["NumPy", "scipy"])
            .with_description("Uses numpy, scipy.")
            .with_language("Python");
        assert_eq!(library_text(&repo), "numpy scipy uses numpy, scipy. python ");
    }

    #[test]
    fn complexity_text_splits_on_punctuation_and_includes_name() {
        let repo = Repository::named("Graph-Theory")
            .with_description("Convex\noptimization!");
        assert_eq!(complexity_text(&repo), "convex optimization  graph theory ");
    }

    #[test]
    fn strip_to_alphanumeric_blanks_non_ascii() {
        assert_eq!(strip_to_alphanumeric("café_42"), "caf  42");
    }
}
