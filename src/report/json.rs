use serde::Serialize;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;
    use crate::signals::Dictionaries;
    use crate::types::entity::{Profile, Repository};
    use crate::types::resume::ParsedResume;

    #[test]
    fn json_report_uses_export_field_names() {
        let dictionaries = Dictionaries::builtin().expect("builtins should compile");
        let repos = [Repository::named("solver").with_description("convex optimization with cvxpy")];
        let report = analyze(&repos, Profile::default(), dictionaries);

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"complexity_signals\""));
        assert!(rendered.contains("\"avg_complexity_level\": 2.0"));
        assert!(rendered.contains("\"level\": \"Advanced\""));
        assert!(rendered.contains("\"cvxpy\""));
    }

    #[test]
    fn json_resume_omits_missing_filename() {
        let resume = ParsedResume {
            name: "Ada".to_string(),
            ..ParsedResume::default()
        };
        let rendered = to_json(&[resume]).expect("json should serialize");
        assert!(rendered.contains("\"raw_text\""));
        assert!(!rendered.contains("\"filename\""));
    }
}
