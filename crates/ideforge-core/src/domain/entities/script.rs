//! Project scripts: an ordered list of settings updates and target requests.
//!
//! A script is data only. Parsing lives in the adapters crate; folding it
//! into concrete per-target configurations lives here in [`ProjectScript::plan`].

use serde::Serialize;

use crate::domain::{
    entities::project::ProjectConfiguration,
    error::DomainError,
    value_objects::{Ide, Platform, ProjectKind},
};

/// A value as it appears in a script, before it is bound to a setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Text(String),
    List(Vec<String>),
}

impl SettingValue {
    fn into_text(self, key: &str) -> Result<String, DomainError> {
        match self {
            Self::Text(s) => Ok(s),
            Self::List(_) => Err(DomainError::InvalidSettingValue {
                key: key.to_string(),
                expected: "a string",
            }),
        }
    }

    /// A single string is promoted to a one-element list.
    fn into_list(self) -> Vec<String> {
        match self {
            Self::Text(s) => vec![s],
            Self::List(v) => v,
        }
    }
}

/// A partial update to a [`ProjectConfiguration`]. Every present field
/// replaces the previous value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SettingsPatch {
    pub kind: Option<ProjectKind>,
    pub project_name: Option<String>,
    pub platform: Option<Platform>,
    pub final_folder: Option<String>,
    pub configurations: Option<Vec<String>>,
    pub source_folders: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub defines: Option<Vec<String>>,
    pub include_folders: Option<Vec<String>>,
}

impl SettingsPatch {
    /// Bind one script key. Keys match case-insensitively.
    pub fn set(&mut self, key: &str, value: SettingValue) -> Result<(), DomainError> {
        match key.to_ascii_lowercase().as_str() {
            "kind" => self.kind = Some(value.into_text(key)?.parse()?),
            "projectname" => self.project_name = Some(value.into_text(key)?),
            "platform" => self.platform = Some(value.into_text(key)?.parse()?),
            "finalfolder" => self.final_folder = Some(value.into_text(key)?),
            "configurations" => self.configurations = Some(value.into_list()),
            "sourcefolders" => self.source_folders = Some(value.into_list()),
            "exclude" => self.exclude = Some(value.into_list()),
            "defines" => self.defines = Some(value.into_list()),
            "includefolders" => self.include_folders = Some(value.into_list()),
            _ => {
                return Err(DomainError::UnknownSetting {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One item of a script, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Configure(SettingsPatch),
    Generate(Ide),
    /// Anything that is neither a settings object nor a known IDE name.
    Unrecognized(String),
}

/// A target to generate, with the configuration in force at that point of
/// the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTarget {
    pub ide: Ide,
    pub configuration: ProjectConfiguration,
}

/// The outcome of folding a script: targets in order, plus the items that
/// were skipped as unrecognized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub targets: Vec<PlannedTarget>,
    pub unrecognized: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectScript {
    pub steps: Vec<ScriptStep>,
}

impl ProjectScript {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps }
    }

    /// Fold the settings patches over `base` and snapshot the configuration
    /// at every target request.
    ///
    /// `base` is never modified; each patch yields a new configuration.
    pub fn plan(&self, base: &ProjectConfiguration) -> Result<Plan, DomainError> {
        let mut current = base.clone();
        let mut plan = Plan::default();

        for step in &self.steps {
            match step {
                ScriptStep::Configure(patch) => current = current.apply(patch)?,
                ScriptStep::Generate(ide) => plan.targets.push(PlannedTarget {
                    ide: *ide,
                    configuration: current.clone(),
                }),
                ScriptStep::Unrecognized(item) => plan.unrecognized.push(item.clone()),
            }
        }

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> SettingValue {
        SettingValue::Text(s.to_string())
    }

    #[test]
    fn scalar_and_list_keys_bind() {
        let mut p = SettingsPatch::default();
        p.set("kind", text("library")).unwrap();
        p.set("projectname", text("burger")).unwrap();
        p.set("platform", text("macosx")).unwrap();
        p.set("defines", text("FOO")).unwrap();
        p.set(
            "sourcefolders",
            SettingValue::List(vec!["src".into(), "src/core".into()]),
        )
        .unwrap();

        assert_eq!(p.kind, Some(ProjectKind::Library));
        assert_eq!(p.project_name.as_deref(), Some("burger"));
        assert_eq!(p.platform, Some(Platform::MacOsx));
        assert_eq!(p.defines, Some(vec!["FOO".to_string()]));
        assert_eq!(p.source_folders.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut p = SettingsPatch::default();
        assert_eq!(
            p.set("optimize", text("yes")),
            Err(DomainError::UnknownSetting {
                key: "optimize".into()
            })
        );
    }

    #[test]
    fn scalar_key_rejects_list() {
        let mut p = SettingsPatch::default();
        assert!(matches!(
            p.set("projectname", SettingValue::List(vec![])),
            Err(DomainError::InvalidSettingValue { .. })
        ));
    }

    #[test]
    fn bad_enum_value_is_rejected() {
        let mut p = SettingsPatch::default();
        assert!(matches!(
            p.set("platform", text("amiga")),
            Err(DomainError::UnknownPlatform { .. })
        ));
    }

    #[test]
    fn plan_snapshots_configuration_per_target() {
        let mut first = SettingsPatch::default();
        first.set("projectname", text("alpha")).unwrap();
        let mut second = SettingsPatch::default();
        second.set("projectname", text("beta")).unwrap();

        let script = ProjectScript::new(vec![
            ScriptStep::Configure(first),
            ScriptStep::Generate(Ide::Vs2010),
            ScriptStep::Unrecognized("eclipse".into()),
            ScriptStep::Configure(second),
            ScriptStep::Generate(Ide::Xcode3),
        ]);
        let base = ProjectConfiguration::default();
        let plan = script.plan(&base).unwrap();

        assert_eq!(plan.targets.len(), 2);
        assert_eq!(plan.targets[0].configuration.name(), "alpha");
        assert_eq!(plan.targets[1].configuration.name(), "beta");
        assert_eq!(plan.unrecognized, vec!["eclipse".to_string()]);
        assert_eq!(base.name(), "project");
    }

    #[test]
    fn later_lists_replace_earlier_ones() {
        let mut a = SettingsPatch::default();
        a.set("defines", SettingValue::List(vec!["A".into(), "B".into()]))
            .unwrap();
        let mut b = SettingsPatch::default();
        b.set("defines", text("C")).unwrap();

        let script = ProjectScript::new(vec![
            ScriptStep::Configure(a),
            ScriptStep::Configure(b),
            ScriptStep::Generate(Ide::Vs2008),
        ]);
        let plan = script.plan(&ProjectConfiguration::default()).unwrap();
        assert_eq!(plan.targets[0].configuration.defines(), &["C".to_string()]);
    }
}
