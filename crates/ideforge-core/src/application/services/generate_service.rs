//! Generate Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Resolve a plan (scripts, or the scriptless default)
//! 2. For each planned target: discover, build the model, emit, write
//! 3. Collect a report of generated, skipped and failed targets
//!
//! Emitters build everything in memory; nothing is written for a target
//! until its emitter has returned successfully.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Artifact, EmitRequest, ProjectWriter, ScriptSource, TargetEmitter},
        services::DiscoveryService,
    },
    domain::{
        DomainValidator as validator, IdMode, IdentifiedEntry, Identifier, IdentifierResolver, Ide,
        Plan, PlannedTarget, ProjectConfiguration, ProjectModel, ProjectScript, SemanticKey,
        capabilities,
    },
    error::{ForgeError, ForgeResult},
};

/// Folder appended to the scriptless default when it exists.
const DEFAULT_EXTRA_SOURCE_FOLDER: &str = "source";

// ── Policy & report ──────────────────────────────────────────────────────────

/// What to do when one target of a batch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatchPolicy {
    /// Record the failure and carry on with the next target.
    #[default]
    ContinueOnError,
    /// Stop at the first failure.
    FailFast,
}

#[derive(Debug, Clone)]
pub struct GeneratedTarget {
    pub ide: Ide,
    pub project: String,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct SkippedTarget {
    pub ide: Ide,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct FailedTarget {
    pub ide: Ide,
    pub project: String,
    pub error: ForgeError,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub generated: Vec<GeneratedTarget>,
    pub skipped: Vec<SkippedTarget>,
    pub failed: Vec<FailedTarget>,
    /// Script items that were neither settings nor a known IDE name.
    pub unrecognized: Vec<String>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.generated.len() + self.skipped.len() + self.failed.len()
    }
}

/// How to find the plan for a run.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// Explicit scripts, relative to the root. Run in order, sharing settings.
    pub scripts: Vec<PathBuf>,
    /// Script picked up automatically when `scripts` is empty.
    pub default_script: PathBuf,
    /// Targets for the scriptless default.
    pub targets: Vec<Ide>,
}

/// The model plus identifiers, for display without writing anything.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub configuration: ProjectConfiguration,
    pub mode: IdMode,
    pub model: ProjectModel,
    pub entries: Vec<IdentifiedEntry>,
    pub groups: Vec<(String, Identifier)>,
}

// ── Service ──────────────────────────────────────────────────────────────────

/// Main generation service.
pub struct GenerateService {
    discovery: DiscoveryService,
    writer: Box<dyn ProjectWriter>,
    scripts: Box<dyn ScriptSource>,
    emitters: Vec<Box<dyn TargetEmitter>>,
    policy: BatchPolicy,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use ideforge_core::application::{DiscoveryService, GenerateService};
    ///
    /// let service = GenerateService::new(
    ///     DiscoveryService::new(tree), // impl SourceTree
    ///     writer,                      // impl ProjectWriter
    ///     scripts,                     // impl ScriptSource
    ///     emitters,                    // Vec<Box<dyn TargetEmitter>>
    /// );
    /// ```
    pub fn new(
        discovery: DiscoveryService,
        writer: Box<dyn ProjectWriter>,
        scripts: Box<dyn ScriptSource>,
        emitters: Vec<Box<dyn TargetEmitter>>,
    ) -> Self {
        Self {
            discovery,
            writer,
            scripts,
            emitters,
            policy: BatchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: BatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> BatchPolicy {
        self.policy
    }

    /// Whether any registered emitter handles `ide`.
    pub fn supports(&self, ide: Ide) -> bool {
        self.emitter_for(ide).is_some()
    }

    // -------------------------------------------------------------------------
    // Planning
    // -------------------------------------------------------------------------

    /// Work out what to generate.
    ///
    /// Explicit scripts win; otherwise the default script if it exists;
    /// otherwise the scriptless default built from `request.targets`.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn resolve_plan(&self, root: &Path, request: &PlanRequest) -> ForgeResult<Plan> {
        if !request.scripts.is_empty() {
            return self.plan_scripts(root, &request.scripts);
        }

        let default_script = root.join(&request.default_script);
        if self.scripts.exists(&default_script) {
            info!(script = %request.default_script.display(), "Using default project script");
            return self.plan_scripts(root, std::slice::from_ref(&request.default_script));
        }

        self.default_plan(root, &request.targets)
    }

    /// Load every script and fold them in order over one shared configuration.
    pub fn plan_scripts(&self, root: &Path, scripts: &[PathBuf]) -> ForgeResult<Plan> {
        let mut steps = Vec::new();
        for script in scripts {
            let path = root.join(script);
            let loaded = self.scripts.load(&path)?;
            debug!(script = %path.display(), steps = loaded.steps.len(), "Script loaded");
            steps.extend(loaded.steps);
        }
        Ok(ProjectScript::new(steps).plan(&ProjectConfiguration::default())?)
    }

    /// The plan used when no script exists.
    pub fn default_plan(&self, root: &Path, targets: &[Ide]) -> ForgeResult<Plan> {
        if targets.is_empty() {
            return Err(ApplicationError::NoTargetsRequested.into());
        }

        let configuration = self.default_configuration(root, targets)?;
        Ok(Plan {
            targets: targets
                .iter()
                .map(|ide| PlannedTarget {
                    ide: *ide,
                    configuration: configuration.clone(),
                })
                .collect(),
            unrecognized: Vec::new(),
        })
    }

    /// Settings for the scriptless default, before any target is known.
    pub fn default_configuration(
        &self,
        root: &Path,
        targets: &[Ide],
    ) -> ForgeResult<ProjectConfiguration> {
        let configuration = ProjectConfiguration::default_for_directory(root, targets)?;
        if self
            .discovery
            .is_dir(&root.join(DEFAULT_EXTRA_SOURCE_FOLDER))
        {
            return Ok(configuration.with_source_folder(DEFAULT_EXTRA_SOURCE_FOLDER));
        }
        Ok(configuration)
    }

    /// The configuration a read-only inspection shows: the first target a
    /// script plans, or the scriptless default when there is no script.
    pub fn resolve_configuration(
        &self,
        root: &Path,
        request: &PlanRequest,
    ) -> ForgeResult<ProjectConfiguration> {
        let scripted = !request.scripts.is_empty()
            || self.scripts.exists(&root.join(&request.default_script));
        if scripted {
            let plan = self.resolve_plan(root, request)?;
            if let Some(target) = plan.targets.into_iter().next() {
                return Ok(target.configuration);
            }
        }
        self.default_configuration(root, &request.targets)
    }

    // -------------------------------------------------------------------------
    // Generation
    // -------------------------------------------------------------------------

    /// Generate every target in `plan`, honoring the batch policy.
    ///
    /// Unsupported targets are skipped with a warning. Discovery failures
    /// abort the run under either policy.
    #[instrument(skip_all, fields(root = %root.display(), targets = plan.targets.len()))]
    pub fn run(&self, root: &Path, plan: &Plan) -> ForgeResult<GenerationReport> {
        let mut report = GenerationReport::default();
        let mut models: Vec<(&ProjectConfiguration, Arc<ProjectModel>)> = Vec::new();

        for item in &plan.unrecognized {
            warn!(item = %item, "Unrecognized script item, skipping");
            report.unrecognized.push(item.clone());
        }

        for target in &plan.targets {
            let config = &target.configuration;
            let Some(emitter) = self.emitter_for(target.ide) else {
                warn!(ide = %target.ide, "Target not supported, skipping");
                report.skipped.push(SkippedTarget {
                    ide: target.ide,
                    reason: ApplicationError::UnsupportedTarget { ide: target.ide }.to_string(),
                });
                continue;
            };

            // Same scan inputs, same model.
            let cached = models
                .iter()
                .find(|(c, _)| same_scan_inputs(c, config))
                .map(|(_, m)| Arc::clone(m));
            let model = match cached {
                Some(model) => model,
                None => {
                    let model = Arc::new(self.build_model(root, config)?);
                    models.push((config, Arc::clone(&model)));
                    model
                }
            };

            match self.emit_and_write(root, emitter, target.ide, config, &model) {
                Ok(files) => {
                    info!(ide = %target.ide, project = %config.name(), files = files.len(), "Generated");
                    report.generated.push(GeneratedTarget {
                        ide: target.ide,
                        project: config.name().to_string(),
                        files,
                    });
                }
                Err(e) if self.policy == BatchPolicy::FailFast => return Err(e),
                Err(e) => {
                    warn!(ide = %target.ide, error = %e, "Target failed, continuing");
                    report.failed.push(FailedTarget {
                        ide: target.ide,
                        project: config.name().to_string(),
                        error: e,
                    });
                }
            }
        }

        Ok(report)
    }

    /// Generate one target and return the paths written.
    #[instrument(skip_all, fields(ide = %target.ide, project = %target.configuration.name()))]
    pub fn generate(&self, root: &Path, target: &PlannedTarget) -> ForgeResult<Vec<PathBuf>> {
        let emitter = self
            .emitter_for(target.ide)
            .ok_or(ApplicationError::UnsupportedTarget { ide: target.ide })?;
        let model = self.build_model(root, &target.configuration)?;
        self.emit_and_write(root, emitter, target.ide, &target.configuration, &model)
    }

    /// Discover and model without writing; identifiers resolved in `mode`.
    #[instrument(skip_all, fields(project = %config.name(), mode = %mode))]
    pub fn inspect(
        &self,
        root: &Path,
        config: &ProjectConfiguration,
        mode: IdMode,
    ) -> ForgeResult<Inspection> {
        let model = self.build_model(root, config)?;
        let resolver = IdentifierResolver::new(mode);
        let entries = model
            .catalog
            .entries()
            .iter()
            .map(|e| resolver.annotate(e, |_| None))
            .collect();
        let groups = model
            .tree
            .nodes()
            .into_iter()
            .map(|node| {
                let id = resolver.resolve(&SemanticKey::group("", &node.path));
                (node.path.clone(), id)
            })
            .collect();

        Ok(Inspection {
            configuration: config.clone(),
            mode,
            model,
            entries,
            groups,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn emitter_for(&self, ide: Ide) -> Option<&dyn TargetEmitter> {
        self.emitters
            .iter()
            .find(|e| e.handles(ide))
            .map(|e| &**e)
    }

    fn build_model(&self, root: &Path, config: &ProjectConfiguration) -> ForgeResult<ProjectModel> {
        validator::validate_configuration(config)?;
        let catalog = self.discovery.discover(root, config)?;
        Ok(ProjectModel::build(catalog))
    }

    fn emit_and_write(
        &self,
        root: &Path,
        emitter: &dyn TargetEmitter,
        ide: Ide,
        config: &ProjectConfiguration,
        model: &ProjectModel,
    ) -> ForgeResult<Vec<PathBuf>> {
        validator::validate_platform(ide, config.platform())?;

        let stem = capabilities::project_stem(config.name(), ide, config.platform());
        debug!(emitter = emitter.name(), stem = %stem, "Emitting");

        let artifacts = emitter.emit(&EmitRequest {
            ide,
            configuration: config,
            model,
        })?;
        self.write_artifacts(root, &artifacts)
    }

    /// Directories are created up front so a target either fails before its
    /// first write or reports exactly which of its files made it to disk.
    fn write_artifacts(&self, root: &Path, artifacts: &[Artifact]) -> ForgeResult<Vec<PathBuf>> {
        for artifact in artifacts {
            if let Artifact::Write { path, .. } = artifact {
                if let Some(parent) = root.join(path).parent() {
                    self.writer.create_dir_all(parent)?;
                }
            }
        }

        let total = artifacts
            .iter()
            .filter(|a| matches!(a, Artifact::Write { .. }))
            .count();
        let mut written = Vec::new();
        for artifact in artifacts {
            let path = root.join(artifact.path());
            match artifact {
                Artifact::Write { contents, .. } => {
                    if let Err(err) = self.writer.write_file(&path, contents) {
                        if written.is_empty() {
                            return Err(err);
                        }
                        warn!(
                            path = %path.display(),
                            written = written.len(),
                            "Write failed after earlier files of this target were written"
                        );
                        return Err(ApplicationError::PartialWrite {
                            path,
                            written,
                            total,
                            reason: err.to_string(),
                        }
                        .into());
                    }
                    debug!(path = %path.display(), bytes = contents.len(), "Wrote");
                    written.push(path);
                }
                Artifact::Remove { .. } => {
                    if self.writer.exists(&path) {
                        self.writer.remove_file(&path)?;
                        debug!(path = %path.display(), "Removed stale file");
                    }
                }
            }
        }
        Ok(written)
    }
}

fn same_scan_inputs(a: &ProjectConfiguration, b: &ProjectConfiguration) -> bool {
    a.source_folders() == b.source_folders() && a.exclude() == b.exclude()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{DirEntry, MockProjectWriter, MockSourceTree};
    use crate::domain::{DomainError, FileCategory, Platform, ScriptStep};
    use std::sync::Mutex;

    // ========================================================================
    // Test doubles
    // ========================================================================

    struct StubScripts {
        script: Option<ProjectScript>,
    }

    impl ScriptSource for StubScripts {
        fn load(&self, path: &Path) -> ForgeResult<ProjectScript> {
            self.script.clone().ok_or_else(|| {
                ApplicationError::ScriptLoad {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
        }

        fn exists(&self, _path: &Path) -> bool {
            self.script.is_some()
        }
    }

    /// Writes one file named after the stem; fails for projects named "boom"
    /// and adds a second file for projects named "pair".
    struct StubEmitter;

    impl TargetEmitter for StubEmitter {
        fn name(&self) -> &'static str {
            "stub"
        }
        fn handles(&self, ide: Ide) -> bool {
            matches!(ide, Ide::Vs2010 | Ide::Xcode3)
        }
        fn id_mode(&self) -> IdMode {
            IdMode::NamespaceHash
        }
        fn role_for(&self, _category: FileCategory) -> Option<&'static str> {
            None
        }
        fn emit(&self, request: &EmitRequest<'_>) -> ForgeResult<Vec<Artifact>> {
            let config = request.configuration;
            if config.name() == "boom" {
                return Err(ApplicationError::EmissionFailed {
                    ide: request.ide,
                    reason: "stub failure".into(),
                }
                .into());
            }
            let stem = capabilities::project_stem(config.name(), request.ide, config.platform());
            let mut artifacts = vec![
                Artifact::write(format!("{stem}.proj"), request.model.catalog.len().to_string()),
                Artifact::remove(format!("{stem}.stale")),
            ];
            if config.name() == "pair" {
                artifacts.push(Artifact::write(format!("{stem}.filters"), "filters"));
            }
            Ok(artifacts)
        }
    }

    fn tree_with(files: &'static [&'static str]) -> MockSourceTree {
        let mut tree = MockSourceTree::new();
        tree.expect_is_dir()
            .returning(|p| p == Path::new("/p"));
        tree.expect_list_dir()
            .returning(move |_| Ok(files.iter().map(|f| DirEntry::file(*f)).collect()));
        tree
    }

    fn recording_writer(log: Arc<Mutex<Vec<PathBuf>>>) -> MockProjectWriter {
        let mut writer = MockProjectWriter::new();
        writer.expect_create_dir_all().returning(|_| Ok(()));
        writer.expect_write_file().returning(move |p, _| {
            log.lock().unwrap().push(p.to_path_buf());
            Ok(())
        });
        writer.expect_exists().return_const(false);
        writer.expect_remove_file().never();
        writer
    }

    fn service(tree: MockSourceTree, writer: MockProjectWriter, script: Option<ProjectScript>) -> GenerateService {
        GenerateService::new(
            DiscoveryService::new(Box::new(tree)),
            Box::new(writer),
            Box::new(StubScripts { script }),
            vec![Box::new(StubEmitter)],
        )
    }

    fn target(ide: Ide, name: &str) -> PlannedTarget {
        PlannedTarget {
            ide,
            configuration: ProjectConfiguration::builder().name(name).build().unwrap(),
        }
    }

    // ========================================================================
    // Planning
    // ========================================================================

    #[test]
    fn default_plan_requires_targets() {
        let svc = service(tree_with(&[]), MockProjectWriter::new(), None);
        let err = svc.default_plan(Path::new("/p"), &[]).unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::NoTargetsRequested)
        ));
    }

    #[test]
    fn default_plan_names_project_after_root() {
        let svc = service(tree_with(&[]), MockProjectWriter::new(), None);
        let plan = svc
            .default_plan(Path::new("/work/burger"), &[Ide::Vs2010, Ide::Vs2008])
            .unwrap();
        assert_eq!(plan.targets.len(), 2);
        assert_eq!(plan.targets[0].configuration.name(), "burger");
        assert_eq!(plan.targets[0].configuration.platform(), Platform::Windows);
        // /work/burger/source does not exist in the mock tree
        assert_eq!(plan.targets[0].configuration.source_folders(), &["."]);
    }

    #[test]
    fn default_plan_appends_existing_source_folder() {
        let mut tree = MockSourceTree::new();
        tree.expect_is_dir().return_const(true);
        let svc = service(tree, MockProjectWriter::new(), None);
        let plan = svc.default_plan(Path::new("/work/burger"), &[Ide::Xcode3]).unwrap();
        let config = &plan.targets[0].configuration;
        assert_eq!(config.source_folders(), &[".", "source"]);
        assert_eq!(config.platform(), Platform::MacOsx);
    }

    #[test]
    fn default_script_wins_over_flags() {
        let script = ProjectScript::new(vec![ScriptStep::Generate(Ide::Xcode3)]);
        let svc = service(tree_with(&[]), MockProjectWriter::new(), Some(script));
        let plan = svc
            .resolve_plan(
                Path::new("/p"),
                &PlanRequest {
                    default_script: "projects.json".into(),
                    targets: vec![Ide::Vs2010],
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(plan.targets.len(), 1);
        assert_eq!(plan.targets[0].ide, Ide::Xcode3);
    }

    #[test]
    fn missing_explicit_script_is_an_input_error() {
        let svc = service(tree_with(&[]), MockProjectWriter::new(), None);
        let err = svc
            .resolve_plan(
                Path::new("/p"),
                &PlanRequest {
                    scripts: vec!["other.json".into()],
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn resolve_configuration_uses_first_scripted_target() {
        let script = ProjectScript::new(vec![
            ScriptStep::Configure(crate::domain::SettingsPatch {
                project_name: Some("alpha".into()),
                ..Default::default()
            }),
            ScriptStep::Generate(Ide::Vs2010),
        ]);
        let svc = service(tree_with(&[]), MockProjectWriter::new(), Some(script));
        let config = svc
            .resolve_configuration(
                Path::new("/work/burger"),
                &PlanRequest {
                    default_script: "projects.json".into(),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(config.name(), "alpha");
    }

    #[test]
    fn resolve_configuration_without_script_needs_no_targets() {
        let svc = service(tree_with(&[]), MockProjectWriter::new(), None);
        let config = svc
            .resolve_configuration(
                Path::new("/work/burger"),
                &PlanRequest {
                    default_script: "projects.json".into(),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(config.name(), "burger");
        assert_eq!(config.platform(), Platform::Windows);
    }

    // ========================================================================
    // Generation
    // ========================================================================

    #[test]
    fn generates_and_skips_unsupported() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let svc = service(tree_with(&["a.cpp", "b.h"]), recording_writer(Arc::clone(&log)), None);

        let plan = Plan {
            targets: vec![target(Ide::Vs2010, "demo"), target(Ide::CodeBlocks, "demo")],
            unrecognized: vec!["eclipse".into()],
        };
        let report = svc.run(Path::new("/p"), &plan).unwrap();

        assert_eq!(report.generated.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].ide, Ide::CodeBlocks);
        assert_eq!(report.unrecognized, vec!["eclipse".to_string()]);
        assert!(report.is_success());
        assert_eq!(*log.lock().unwrap(), vec![PathBuf::from("/p/demov10win.proj")]);
    }

    #[test]
    fn continue_on_error_records_failure() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let svc = service(tree_with(&["a.cpp"]), recording_writer(Arc::clone(&log)), None);
        let plan = Plan {
            targets: vec![target(Ide::Vs2010, "boom"), target(Ide::Vs2010, "fine")],
            unrecognized: vec![],
        };
        let report = svc.run(Path::new("/p"), &plan).unwrap();
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.generated.len(), 1);
        assert!(!report.is_success());
        assert_eq!(report.total(), 2);
    }

    #[test]
    fn fail_fast_aborts() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let svc = service(tree_with(&["a.cpp"]), recording_writer(Arc::clone(&log)), None)
            .with_policy(BatchPolicy::FailFast);
        let plan = Plan {
            targets: vec![target(Ide::Vs2010, "boom"), target(Ide::Vs2010, "fine")],
            unrecognized: vec![],
        };
        assert!(svc.run(Path::new("/p"), &plan).is_err());
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn incompatible_platform_is_a_target_failure() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let svc = service(tree_with(&["a.cpp"]), recording_writer(Arc::clone(&log)), None);
        let mut t = target(Ide::Vs2010, "demo");
        t.configuration = ProjectConfiguration::builder()
            .name("demo")
            .platform(Platform::Linux)
            .build()
            .unwrap();
        let report = svc
            .run(Path::new("/p"), &Plan { targets: vec![t], unrecognized: vec![] })
            .unwrap();
        assert!(matches!(
            report.failed[0].error,
            ForgeError::Domain(DomainError::IncompatiblePlatform { .. })
        ));
    }

    #[test]
    fn generate_single_target_reports_unsupported() {
        let svc = service(tree_with(&[]), MockProjectWriter::new(), None);
        let err = svc
            .generate(Path::new("/p"), &target(Ide::Watcom, "demo"))
            .unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::UnsupportedTarget { ide: Ide::Watcom })
        ));
    }

    #[test]
    fn stale_files_are_removed_when_present() {
        let mut writer = MockProjectWriter::new();
        writer.expect_create_dir_all().returning(|_| Ok(()));
        writer.expect_write_file().returning(|_, _| Ok(()));
        writer.expect_exists().return_const(true);
        writer
            .expect_remove_file()
            .withf(|p| p == Path::new("/p/demov10win.stale"))
            .times(1)
            .returning(|_| Ok(()));
        let svc = service(tree_with(&["a.cpp"]), writer, None);
        svc.generate(Path::new("/p"), &target(Ide::Vs2010, "demo")).unwrap();
    }

    #[test]
    fn failed_second_write_reports_files_already_on_disk() {
        let mut writer = MockProjectWriter::new();
        writer.expect_create_dir_all().times(2).returning(|_| Ok(()));
        writer.expect_exists().return_const(false);
        writer.expect_write_file().returning(|p, _| {
            if p.extension().is_some_and(|e| e == "filters") {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });
        let svc = service(tree_with(&["a.cpp"]), writer, None);

        let err = svc
            .generate(Path::new("/p"), &target(Ide::Vs2010, "pair"))
            .unwrap_err();
        match err {
            ForgeError::Application(ApplicationError::PartialWrite {
                path,
                written,
                total,
                reason,
            }) => {
                assert_eq!(path, PathBuf::from("/p/pairv10win.filters"));
                assert_eq!(written, vec![PathBuf::from("/p/pairv10win.proj")]);
                assert_eq!(total, 2);
                assert!(reason.contains("disk full"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn failed_first_write_keeps_original_error() {
        let mut writer = MockProjectWriter::new();
        writer.expect_create_dir_all().returning(|_| Ok(()));
        writer.expect_exists().return_const(false);
        writer.expect_write_file().returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });
        let svc = service(tree_with(&["a.cpp"]), writer, None);

        let err = svc
            .generate(Path::new("/p"), &target(Ide::Vs2010, "pair"))
            .unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn inspect_resolves_identifiers_without_writing() {
        let svc = service(tree_with(&["x.cpp"]), MockProjectWriter::new(), None);
        let config = ProjectConfiguration::builder().name("demo").build().unwrap();
        let inspection = svc
            .inspect(Path::new("/p"), &config, IdMode::TruncatedContentHash)
            .unwrap();
        assert_eq!(inspection.entries.len(), 1);
        assert_eq!(
            inspection.entries[0].identifier,
            Identifier::derive("x.cpp", IdMode::TruncatedContentHash)
        );
        assert!(inspection.groups.is_empty());
    }
}
