//! JSON project script loader.
//!
//! A script is a JSON array processed in order:
//!
//! ```json
//! [
//!   { "projectname": "burger", "kind": "library", "sourcefolders": ["source"] },
//!   "vs2010",
//!   { "platform": "macosx" },
//!   "xcode3"
//! ]
//! ```
//!
//! Objects update settings, strings request targets. List settings accept a
//! single string as shorthand for a one-element list.

use std::path::Path;

use ideforge_core::{
    application::{ApplicationError, ports::ScriptSource},
    domain::{DomainError, Ide, ProjectScript, ScriptStep, SettingValue, SettingsPatch},
    error::ForgeResult,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

/// A list setting as it may appear in a script.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Loads `projects.json`-style scripts from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonScriptLoader;

impl JsonScriptLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse script text. `origin` is only used in error messages.
    pub fn parse(text: &str, origin: &Path) -> ForgeResult<ProjectScript> {
        let script_error = |reason: String| ApplicationError::ScriptLoad {
            path: origin.to_path_buf(),
            reason,
        };

        let value: Value = serde_json::from_str(text).map_err(|e| script_error(e.to_string()))?;
        let Value::Array(items) = value else {
            return Err(script_error("top level must be a JSON array".into()).into());
        };

        let mut steps = Vec::with_capacity(items.len());
        for item in items {
            steps.push(match item {
                Value::Object(map) => ScriptStep::Configure(parse_settings(map)?),
                Value::String(name) => match name.parse::<Ide>() {
                    Ok(ide) => ScriptStep::Generate(ide),
                    Err(_) => ScriptStep::Unrecognized(name),
                },
                other => ScriptStep::Unrecognized(other.to_string()),
            });
        }
        Ok(ProjectScript::new(steps))
    }
}

impl ScriptSource for JsonScriptLoader {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn load(&self, path: &Path) -> ForgeResult<ProjectScript> {
        let text = std::fs::read_to_string(path).map_err(|e| ApplicationError::ScriptLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let script = Self::parse(&text, path)?;
        debug!(steps = script.steps.len(), "Parsed project script");
        Ok(script)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

fn parse_settings(map: Map<String, Value>) -> Result<SettingsPatch, DomainError> {
    let mut patch = SettingsPatch::default();
    for (key, value) in map {
        let value = match serde_json::from_value::<OneOrMany>(value) {
            Ok(OneOrMany::One(s)) => SettingValue::Text(s),
            Ok(OneOrMany::Many(v)) => SettingValue::List(v),
            Err(_) => {
                return Err(DomainError::InvalidSettingValue {
                    key,
                    expected: "a string or an array of strings",
                });
            }
        };
        patch.set(&key, value)?;
    }
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideforge_core::domain::{Platform, ProjectKind};
    use ideforge_core::error::ForgeError;
    use tempfile::TempDir;

    fn parse(text: &str) -> ForgeResult<ProjectScript> {
        JsonScriptLoader::parse(text, Path::new("projects.json"))
    }

    #[test]
    fn mixed_script_parses_in_order() {
        let script = parse(
            r#"[
                {"projectname": "burger", "kind": "library", "defines": "FOO"},
                "vs2010",
                "eclipse",
                42,
                {"platform": "macosx"},
                "xcode3"
            ]"#,
        )
        .unwrap();

        assert_eq!(script.steps.len(), 6);
        let ScriptStep::Configure(first) = &script.steps[0] else {
            panic!("expected settings");
        };
        assert_eq!(first.project_name.as_deref(), Some("burger"));
        assert_eq!(first.kind, Some(ProjectKind::Library));
        assert_eq!(first.defines, Some(vec!["FOO".to_string()]));
        assert_eq!(script.steps[1], ScriptStep::Generate(Ide::Vs2010));
        assert_eq!(script.steps[2], ScriptStep::Unrecognized("eclipse".into()));
        assert_eq!(script.steps[3], ScriptStep::Unrecognized("42".into()));
        let ScriptStep::Configure(platform) = &script.steps[4] else {
            panic!("expected settings");
        };
        assert_eq!(platform.platform, Some(Platform::MacOsx));
        assert_eq!(script.steps[5], ScriptStep::Generate(Ide::Xcode3));
    }

    #[test]
    fn unsupported_ide_names_still_parse_as_targets() {
        let script = parse(r#"["codeblocks", "vs2013"]"#).unwrap();
        assert_eq!(
            script.steps,
            vec![
                ScriptStep::Generate(Ide::CodeBlocks),
                ScriptStep::Generate(Ide::Vs2013)
            ]
        );
    }

    #[test]
    fn non_array_top_level_is_rejected() {
        let err = parse(r#"{"projectname": "x"}"#).unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::ScriptLoad { .. })
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            parse("[\"vs2010\",").unwrap_err(),
            ForgeError::Application(ApplicationError::ScriptLoad { .. })
        ));
    }

    #[test]
    fn unknown_setting_is_a_domain_error() {
        let err = parse(r#"[{"optimise": "yes"}]"#).unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Domain(DomainError::UnknownSetting { .. })
        ));
    }

    #[test]
    fn non_string_setting_value_is_rejected() {
        let err = parse(r#"[{"defines": [1, 2]}]"#).unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Domain(DomainError::InvalidSettingValue { .. })
        ));
    }

    #[test]
    fn load_reads_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("projects.json");
        std::fs::write(&path, r#"[{"projectname": "disk"}, "vs2008"]"#).unwrap();

        let loader = JsonScriptLoader::new();
        assert!(loader.exists(&path));
        let script = loader.load(&path).unwrap();
        assert_eq!(script.steps.len(), 2);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let tmp = TempDir::new().unwrap();
        let loader = JsonScriptLoader::new();
        let path = tmp.path().join("projects.json");
        assert!(!loader.exists(&path));
        assert!(matches!(
            loader.load(&path).unwrap_err(),
            ForgeError::Application(ApplicationError::ScriptLoad { .. })
        ));
    }
}
