//! Visual Studio 2005, 2008 and 2010.
//!
//! Every target gets a `.sln`. 2005 and 2008 pair it with a `.vcproj`; 2010
//! with a `.vcxproj` and, when the project has subfolders, a
//! `.vcxproj.filters`.
//!
//! All GUIDs are namespace hashes: the project GUID hashes the file stem and
//! each filter GUID hashes the stem followed by the backslash group path.

mod solution;
mod vcproj;
mod vcxproj;

use ideforge_core::{
    application::{ApplicationError, Artifact, EmitRequest, TargetEmitter},
    domain::{
        FileCategory, IdMode, Ide, Identifier, IdentifierResolver, Platform,
        ProjectConfiguration, ProjectModel, SemanticKey, capabilities, paths,
    },
    error::ForgeResult,
};
use tracing::{debug, instrument};

use super::{emission_failed, windows_categories};

/// The file format generation a target uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VsVersion {
    Vs2005,
    Vs2008,
    Vs2010,
}

impl VsVersion {
    fn from_ide(ide: Ide) -> Option<Self> {
        match ide {
            Ide::Vs2005 => Some(Self::Vs2005),
            Ide::Vs2008 => Some(Self::Vs2008),
            Ide::Vs2010 => Some(Self::Vs2010),
            _ => None,
        }
    }

    const fn format_version(self) -> &'static str {
        match self {
            Self::Vs2005 => "9.00",
            Self::Vs2008 => "10.00",
            Self::Vs2010 => "11.00",
        }
    }

    const fn year(self) -> &'static str {
        match self {
            Self::Vs2005 => "2005",
            Self::Vs2008 => "2008",
            Self::Vs2010 => "2010",
        }
    }

    const fn project_extension(self) -> &'static str {
        match self {
            Self::Vs2005 | Self::Vs2008 => "vcproj",
            Self::Vs2010 => "vcxproj",
        }
    }
}

/// Everything the individual writers share for one target.
struct VsProject<'a> {
    version: VsVersion,
    ide: Ide,
    config: &'a ProjectConfiguration,
    model: &'a ProjectModel,
    stem: String,
    guid: Identifier,
    resolver: IdentifierResolver,
    vs_platforms: &'static [&'static str],
}

impl<'a> VsProject<'a> {
    fn new(version: VsVersion, request: &EmitRequest<'a>) -> Self {
        let config = request.configuration;
        let stem = capabilities::project_stem(config.name(), request.ide, config.platform());
        let resolver = IdentifierResolver::new(IdMode::NamespaceHash);
        let guid = resolver.resolve(&SemanticKey::literal(stem.as_str()));
        Self {
            version,
            ide: request.ide,
            config,
            model: request.model,
            stem,
            guid,
            resolver,
            vs_platforms: capabilities::vs_platforms(config.platform()),
        }
    }

    fn is_windows(&self) -> bool {
        self.config.platform() == Platform::Windows
    }

    fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.stem, extension)
    }

    /// Per configuration and VS platform: name + ide code + platform code +
    /// configuration code. Windows uses `w32`/`w64` in place of `win`.
    fn intermediate_name(&self, configuration: &str, vs_platform: &str) -> String {
        let platform_code = match vs_platform {
            "x64" => "w64",
            "Win32" => "w32",
            _ => capabilities::platform_code(self.config.platform()),
        };
        format!(
            "{}{}{}{}",
            self.config.name(),
            capabilities::ide_code(self.ide, self.config.platform()),
            platform_code,
            capabilities::configuration_code(configuration)
        )
    }

    /// `configuration|platform` pairs in solution order.
    fn configuration_pairs(&self) -> impl Iterator<Item = (&str, &'static str)> + '_ {
        self.config.configurations().iter().flat_map(move |c| {
            self.vs_platforms
                .iter()
                .map(move |p| (c.as_str(), *p))
        })
    }

    /// Include directories found by discovery followed by the configured
    /// include folders, backslashed.
    fn include_directories(&self) -> Vec<String> {
        self.model
            .include_directories()
            .iter()
            .chain(self.config.include_folders())
            .map(|d| paths::to_back_slash(d))
            .collect()
    }

    fn has_listed_file(&self, categories: &[FileCategory]) -> bool {
        self.model.catalog.by_category(categories).next().is_some()
    }

    fn listed_categories(&self) -> &'static [FileCategory] {
        windows_categories(self.config.platform())
    }
}

/// Emitter for the Visual Studio family.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualStudioEmitter;

impl VisualStudioEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl TargetEmitter for VisualStudioEmitter {
    fn name(&self) -> &'static str {
        "visual-studio"
    }

    fn handles(&self, ide: Ide) -> bool {
        VsVersion::from_ide(ide).is_some()
    }

    fn id_mode(&self) -> IdMode {
        IdMode::NamespaceHash
    }

    fn role_for(&self, _category: FileCategory) -> Option<&'static str> {
        None
    }

    #[instrument(skip_all, fields(ide = %request.ide, project = %request.configuration.name()))]
    fn emit(&self, request: &EmitRequest<'_>) -> ForgeResult<Vec<Artifact>> {
        let Some(version) = VsVersion::from_ide(request.ide) else {
            return Err(ApplicationError::UnsupportedTarget { ide: request.ide }.into());
        };
        let project = VsProject::new(version, request);
        let failed = emission_failed(request.ide);

        let mut artifacts = vec![Artifact::write(
            project.file_name("sln"),
            solution::render(&project).map_err(&failed)?,
        )];

        match version {
            VsVersion::Vs2005 | VsVersion::Vs2008 => {
                artifacts.push(Artifact::write(
                    project.file_name("vcproj"),
                    vcproj::render(&project).map_err(&failed)?,
                ));
            }
            VsVersion::Vs2010 => {
                artifacts.push(Artifact::write(
                    project.file_name("vcxproj"),
                    vcxproj::render_project(&project).map_err(&failed)?,
                ));
                let filters = project.file_name("vcxproj.filters");
                artifacts.push(match vcxproj::render_filters(&project).map_err(&failed)? {
                    Some(text) => Artifact::write(filters, text),
                    None => Artifact::remove(filters),
                });
            }
        }

        debug!(stem = %project.stem, artifacts = artifacts.len(), "Rendered Visual Studio project");
        Ok(artifacts)
    }
}
