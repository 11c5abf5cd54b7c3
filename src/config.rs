use crate::error::{Result, TalentError};
use crate::types::config::TalentConfig;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "mathtalent.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".mathtalent/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/mathtalent/config.toml";

/// Loads `mathtalent.toml` from `root`, layered over the per-user file and
/// under `.mathtalent/local.toml`. Returns `None` when the project has no
/// config file.
pub fn load_config(root: &Path) -> Result<Option<TalentConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<TalentConfig>> {
    let project_path = root.join(DEFAULT_CONFIG_FILE);
    if !project_path.is_file() {
        return Ok(None);
    }

    // lowest precedence first
    let local_path = root.join(DEFAULT_LOCAL_FILE);
    let layers = global_path
        .into_iter()
        .chain([project_path.as_path(), local_path.as_path()])
        .filter(|path| path.is_file());

    let mut merged = Table::new();
    for path in layers {
        debug!(path = %path.display(), "config layer");
        overlay(&mut merged, parse_layer(path)?);
    }

    let cfg: TalentConfig = Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| TalentError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn parse_layer(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    content
        .parse::<Table>()
        .map_err(|e| TalentError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Nested tables merge key by key; any other value in `top` replaces the
/// one in `base`, arrays included.
fn overlay(base: &mut Table, top: Table) {
    for (key, value) in top {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(inner)), Value::Table(top_inner)) => overlay(inner, top_inner),
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_project_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[dictionaries]
extra_libraries = ["polars"]

[report]
format = "json"
recruiter = true
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[dictionaries]
extra_complexity = ["topology"]

[report]
format = "text"
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".mathtalent")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[report]
recruiter = false
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.dictionaries.extra_libraries, vec!["polars"]);
        assert_eq!(cfg.dictionaries.extra_complexity, vec!["topology"]);
        assert_eq!(cfg.report.output_format(), Some(OutputFormat::Text));
        assert!(!cfg.report.recruiter);
    }

    #[test]
    fn load_config_rejects_invalid_terms() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[dictionaries]
extra_complexity = ["monte-carlo"]
"#,
        )
        .expect("project config should write");

        let err = load_config_with_global(root.path(), None).expect_err("invalid term should fail");
        assert!(matches!(err, TalentError::ConfigParse(_)));
    }

    #[test]
    fn overlay_merges_tables_and_replaces_arrays() {
        let mut base: Table = r#"
[dictionaries]
extra_libraries = ["polars", "jaxlib"]
extra_complexity = ["topology"]
"#
        .parse()
        .expect("base should parse");
        let top: Table = r#"
[dictionaries]
extra_libraries = ["arrow"]
"#
        .parse()
        .expect("top should parse");

        overlay(&mut base, top);
        let dictionaries = base["dictionaries"].as_table().expect("table survives");
        assert_eq!(
            dictionaries["extra_libraries"].as_array().map(Vec::len),
            Some(1)
        );
        assert!(dictionaries.contains_key("extra_complexity"));
    }

    #[test]
    fn malformed_layer_names_the_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[report\n").expect("config should write");
        let err = load_config_with_global(root.path(), None).expect_err("bad toml should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
