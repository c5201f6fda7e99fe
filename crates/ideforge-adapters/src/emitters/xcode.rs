//! Xcode 3, 4 and 5 (`<stem>.xcodeproj/project.pbxproj`).
//!
//! Object identifiers are 96-bit truncated MD5 hashes. File objects hash the
//! relative path, so the same file gets the same identifier in every project
//! that lists it. Project-level objects hash a role plus the project stem or
//! name so they differ between projects.
//!
//! Sections are written in the order Xcode itself uses, and objects inside
//! a section are sorted by identifier.

use std::borrow::Cow;
use std::fmt::{self, Write};

use ideforge_core::{
    application::{ApplicationError, Artifact, EmitRequest, TargetEmitter},
    domain::{
        FileCategory, GroupNode, IdMode, IdentifiedEntry, Identifier, IdentifierResolver, Ide,
        ProjectConfiguration, ProjectModel, SemanticKey, SourceEntry, capabilities, paths,
    },
    error::ForgeResult,
};
use tracing::{debug, instrument};

use super::{emission_failed, subtree_contains};

/// Xcode 3.1 archive format; later IDEs read it unchanged.
const OBJECT_VERSION: u32 = 45;

const SOURCES: &str = "Sources";
const HEADERS: &str = "Headers";
const FRAMEWORKS: &str = "Frameworks";

fn role(category: FileCategory) -> Option<&'static str> {
    match category {
        FileCategory::TranslationUnit => Some(SOURCES),
        FileCategory::Header => Some(HEADERS),
        _ => None,
    }
}

/// Quote a value unless it only uses characters plist text allows bare.
fn pbx(value: &str) -> Cow<'_, str> {
    let bare = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '/' | ':' | '.' | '-'));
    if bare {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!(
            "\"{}\"",
            value.replace('\\', "\\\\").replace('"', "\\\"")
        ))
    }
}

/// The on-disk directory a group stands for: the parent of its first file,
/// relative prefixes included. Groups holding only subgroups use `<group>`.
fn group_directory(node: &GroupNode) -> String {
    match node.entries.first() {
        Some(entry) => paths::to_forward_slash(paths::parent_group_key(entry.relative_path())),
        None => "<group>".to_string(),
    }
}

/// One object in a sorted section.
struct Object {
    id: Identifier,
    text: String,
}

/// A file the project references but did not discover.
struct Reference {
    id: Identifier,
    build_id: Option<Identifier>,
    name: String,
}

struct XcodeProject<'a> {
    ide: Ide,
    config: &'a ProjectConfiguration,
    model: &'a ProjectModel,
    resolver: IdentifierResolver,
    stem: String,
    files: Vec<IdentifiedEntry>,
    frameworks: Vec<Reference>,
    config_file: Reference,
    product: Reference,
}

impl<'a> XcodeProject<'a> {
    fn new(request: &EmitRequest<'a>) -> Self {
        let config = request.configuration;
        let resolver = IdentifierResolver::new(IdMode::TruncatedContentHash);
        let stem = capabilities::project_stem(config.name(), request.ide, config.platform());
        let is_library = config.kind().is_library();

        let files = request
            .model
            .catalog
            .entries()
            .iter()
            .filter(|e| role(e.category()).is_some())
            .map(|e| resolver.annotate(e, role))
            .collect();

        let frameworks = if is_library {
            Vec::new()
        } else {
            vec![Reference {
                id: resolver.resolve(&SemanticKey::file("AppKit.framework")),
                build_id: Some(
                    resolver.resolve(&SemanticKey::file_role("AppKit.framework", FRAMEWORKS)),
                ),
                name: "AppKit.framework".to_string(),
            }]
        };

        let config_name = if is_library {
            "burger.libxcoosx.xcconfig"
        } else {
            "burger.toolxcoosx.xcconfig"
        };
        let config_file = Reference {
            id: resolver.resolve(&SemanticKey::literal(config_name)),
            build_id: None,
            name: config_name.to_string(),
        };

        let product_name = if is_library {
            format!(
                "lib{}{}{}.a",
                config.name(),
                capabilities::ide_code(request.ide, config.platform()),
                capabilities::platform_code(config.platform())
            )
        } else {
            config.name().to_string()
        };
        let product = Reference {
            id: resolver.resolve(&SemanticKey::file_role(&product_name, &stem)),
            build_id: None,
            name: product_name,
        };

        Self {
            ide: request.ide,
            config,
            model: request.model,
            resolver,
            stem,
            files,
            frameworks,
            config_file,
            product,
        }
    }

    /// Identifier for a project-level object, scoped to this project's stem.
    fn synthetic(&self, role: &str) -> Identifier {
        self.resolver.resolve(&SemanticKey::synthetic(role, &self.stem))
    }

    fn group_id(&self, path: &str) -> Identifier {
        self.resolver.resolve(&SemanticKey::group("PBXGroup!", path))
    }

    fn main_group_id(&self) -> Identifier {
        self.resolver.resolve(&SemanticKey::literal(self.config.name()))
    }

    fn products_id(&self) -> Identifier {
        self.resolver
            .resolve(&SemanticKey::synthetic("Products", self.config.name()))
    }

    fn has_role(entry: &SourceEntry) -> bool {
        role(entry.category()).is_some()
    }

    fn file(&self, entry: &SourceEntry) -> Option<&IdentifiedEntry> {
        self.files
            .iter()
            .find(|f| f.entry.relative_path() == entry.relative_path())
    }

    /// Files in one role, ordered by file name.
    fn phase_files(&self, role_name: &str) -> Vec<&IdentifiedEntry> {
        let mut files: Vec<_> = self
            .files
            .iter()
            .filter(|f| role(f.entry.category()) == Some(role_name))
            .collect();
        files.sort_by(|a, b| {
            a.entry
                .file_name()
                .cmp(b.entry.file_name())
                .then_with(|| a.category_identifier.cmp(&b.category_identifier))
        });
        files
    }

    fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        out.push_str("// !$*UTF8*$!\n{\n");
        out.push_str("\tarchiveVersion = 1;\n");
        out.push_str("\tclasses = {\n\t};\n");
        writeln!(out, "\tobjectVersion = {OBJECT_VERSION};")?;
        out.push_str("\tobjects = {\n\n");

        self.write_build_files(&mut out)?;
        self.write_file_references(&mut out)?;
        self.write_frameworks_phase(&mut out)?;
        self.write_groups(&mut out)?;
        self.write_phase(&mut out, "PBXHeadersBuildPhase", HEADERS)?;
        self.write_native_target(&mut out)?;
        self.write_project(&mut out)?;
        if self.config.final_folder().is_some() {
            self.write_shell_script(&mut out)?;
        }
        self.write_phase(&mut out, "PBXSourcesBuildPhase", SOURCES)?;
        self.write_build_configurations(&mut out)?;
        self.write_configuration_lists(&mut out)?;

        out.push_str("\t};\n");
        writeln!(
            out,
            "\trootObject = {} /* Project object */;",
            self.synthetic("PBXProjectRoot")
        )?;
        out.push_str("}\n");
        Ok(out)
    }

    fn write_build_files(&self, out: &mut String) -> fmt::Result {
        let mut rows: Vec<(&Identifier, &str, &str, &Identifier)> = Vec::new();
        for file in &self.files {
            if let (Some(build_id), Some(role_name)) =
                (&file.category_identifier, role(file.entry.category()))
            {
                rows.push((build_id, file.entry.file_name(), role_name, &file.identifier));
            }
        }
        for framework in &self.frameworks {
            if let Some(build_id) = &framework.build_id {
                rows.push((build_id, framework.name.as_str(), FRAMEWORKS, &framework.id));
            }
        }
        rows.sort_by(|a, b| a.0.cmp(b.0));

        out.push_str("/* Begin PBXBuildFile section */\n");
        for (build_id, name, role_name, file_id) in rows {
            writeln!(
                out,
                "\t\t{build_id} /* {name} in {role_name} */ = {{isa = PBXBuildFile; fileRef = {file_id} /* {name} */; }};"
            )?;
        }
        out.push_str("/* End PBXBuildFile section */\n\n");
        Ok(())
    }

    fn write_file_references(&self, out: &mut String) -> fmt::Result {
        let mut objects = Vec::new();
        for file in &self.files {
            let name = file.entry.file_name();
            let file_type = match file.entry.category() {
                FileCategory::TranslationUnit => "sourcecode.cpp.cpp",
                _ => "sourcecode.c.h",
            };
            objects.push(Object {
                id: file.identifier.clone(),
                text: format!(
                    "\t\t{} /* {name} */ = {{isa = PBXFileReference; fileEncoding = 4; lastKnownFileType = {file_type}; name = {}; path = {}; sourceTree = SOURCE_ROOT; }};\n",
                    file.identifier,
                    pbx(name),
                    pbx(file.entry.relative_path()),
                ),
            });
        }
        for framework in &self.frameworks {
            let name = &framework.name;
            objects.push(Object {
                id: framework.id.clone(),
                text: format!(
                    "\t\t{} /* {name} */ = {{isa = PBXFileReference; lastKnownFileType = wrapper.framework; name = {}; path = {}; sourceTree = SDKROOT; }};\n",
                    framework.id,
                    pbx(name),
                    pbx(&format!("System/Library/Frameworks/{name}")),
                ),
            });
        }
        let config_name = &self.config_file.name;
        objects.push(Object {
            id: self.config_file.id.clone(),
            text: format!(
                "\t\t{} /* {config_name} */ = {{isa = PBXFileReference; fileEncoding = 4; lastKnownFileType = text.xcconfig; name = {}; path = {}; sourceTree = SDKS; }};\n",
                self.config_file.id,
                pbx(config_name),
                pbx(&format!("xcode/{config_name}")),
            ),
        });
        let product = &self.product.name;
        let product_type = if self.config.kind().is_library() {
            "archive.ar"
        } else {
            "\"compiled.mach-o.executable\""
        };
        objects.push(Object {
            id: self.product.id.clone(),
            text: format!(
                "\t\t{} /* {product} */ = {{isa = PBXFileReference; explicitFileType = {product_type}; includeInIndex = 0; path = {}; sourceTree = BUILT_PRODUCTS_DIR; }};\n",
                self.product.id,
                pbx(product),
            ),
        });

        write_section(out, "PBXFileReference", objects);
        Ok(())
    }

    fn write_frameworks_phase(&self, out: &mut String) -> fmt::Result {
        out.push_str("/* Begin PBXFrameworksBuildPhase section */\n");
        writeln!(out, "\t\t{} /* Frameworks */ = {{", self.synthetic("PBXFrameworksBuildPhase"))?;
        out.push_str("\t\t\tisa = PBXFrameworksBuildPhase;\n");
        out.push_str("\t\t\tbuildActionMask = 2147483647;\n");
        out.push_str("\t\t\tfiles = (\n");
        for framework in &self.frameworks {
            if let Some(build_id) = &framework.build_id {
                writeln!(out, "\t\t\t\t{build_id} /* {} in Frameworks */,", framework.name)?;
            }
        }
        out.push_str("\t\t\t);\n");
        out.push_str("\t\t\trunOnlyForDeploymentPostprocessing = 0;\n");
        out.push_str("\t\t};\n");
        out.push_str("/* End PBXFrameworksBuildPhase section */\n\n");
        Ok(())
    }

    fn write_groups(&self, out: &mut String) -> Result<(), fmt::Error> {
        let mut objects = Vec::new();
        let keep = |e: &SourceEntry| Self::has_role(e);

        let products_id = self.products_id();
        let product = &self.product;
        objects.push(Object {
            id: products_id.clone(),
            text: format!(
                "\t\t{products_id} /* Products */ = {{\n\
                 \t\t\tisa = PBXGroup;\n\
                 \t\t\tchildren = (\n\
                 \t\t\t\t{} /* {} */,\n\
                 \t\t\t);\n\
                 \t\t\tname = Products;\n\
                 \t\t\tsourceTree = \"<group>\";\n\
                 \t\t}};\n",
                product.id, product.name
            ),
        });

        let roots: Vec<&GroupNode> = self
            .model
            .tree
            .roots()
            .filter(|n| subtree_contains(n, &keep))
            .collect();
        for root in &roots {
            self.collect_group(root, &keep, &mut objects)?;
        }

        let name = self.config.name();
        let main_id = self.main_group_id();
        let mut text = String::new();
        writeln!(text, "\t\t{main_id} /* {name} */ = {{")?;
        text.push_str("\t\t\tisa = PBXGroup;\n");
        text.push_str("\t\t\tchildren = (\n");
        for root in &roots {
            writeln!(text, "\t\t\t\t{} /* {} */,", self.group_id(&root.path), root.name)?;
        }
        for entry in self.model.groups.root_entries() {
            if let Some(file) = self.file(entry) {
                writeln!(text, "\t\t\t\t{} /* {} */,", file.identifier, entry.file_name())?;
            }
        }
        writeln!(text, "\t\t\t\t{products_id} /* Products */,")?;
        text.push_str("\t\t\t);\n");
        writeln!(text, "\t\t\tname = {};", pbx(name))?;
        text.push_str("\t\t\tsourceTree = \"<group>\";\n");
        text.push_str("\t\t};\n");
        objects.push(Object { id: main_id, text });

        write_section(out, "PBXGroup", objects);
        Ok(())
    }

    fn collect_group<F>(
        &self,
        node: &GroupNode,
        keep: &F,
        objects: &mut Vec<Object>,
    ) -> Result<(), fmt::Error>
    where
        F: Fn(&SourceEntry) -> bool,
    {
        let children: Vec<&GroupNode> = node
            .children()
            .filter(|c| subtree_contains(c, keep))
            .collect();

        let id = self.group_id(&node.path);
        let mut text = String::new();
        writeln!(text, "\t\t{id} /* {} */ = {{", node.name)?;
        text.push_str("\t\t\tisa = PBXGroup;\n");
        text.push_str("\t\t\tchildren = (\n");
        for child in &children {
            writeln!(text, "\t\t\t\t{} /* {} */,", self.group_id(&child.path), child.name)?;
        }
        for entry in &node.entries {
            if let Some(file) = self.file(entry) {
                writeln!(text, "\t\t\t\t{} /* {} */,", file.identifier, entry.file_name())?;
            }
        }
        text.push_str("\t\t\t);\n");
        writeln!(text, "\t\t\tname = {};", pbx(&node.name))?;
        writeln!(text, "\t\t\tpath = {};", pbx(&group_directory(node)))?;
        text.push_str("\t\t\tsourceTree = SOURCE_ROOT;\n");
        text.push_str("\t\t};\n");
        objects.push(Object { id, text });

        for child in children {
            self.collect_group(child, keep, objects)?;
        }
        Ok(())
    }

    fn write_phase(&self, out: &mut String, isa: &str, role_name: &str) -> fmt::Result {
        writeln!(out, "/* Begin {isa} section */")?;
        writeln!(out, "\t\t{} /* {role_name} */ = {{", self.synthetic(isa))?;
        writeln!(out, "\t\t\tisa = {isa};")?;
        out.push_str("\t\t\tbuildActionMask = 2147483647;\n");
        out.push_str("\t\t\tfiles = (\n");
        for file in self.phase_files(role_name) {
            if let Some(build_id) = &file.category_identifier {
                writeln!(
                    out,
                    "\t\t\t\t{build_id} /* {} in {role_name} */,",
                    file.entry.file_name()
                )?;
            }
        }
        out.push_str("\t\t\t);\n");
        out.push_str("\t\t\trunOnlyForDeploymentPostprocessing = 0;\n");
        out.push_str("\t\t};\n");
        writeln!(out, "/* End {isa} section */\n")?;
        Ok(())
    }

    fn write_native_target(&self, out: &mut String) -> fmt::Result {
        let stem = &self.stem;
        let name = self.config.name();
        let is_library = self.config.kind().is_library();

        out.push_str("/* Begin PBXNativeTarget section */\n");
        writeln!(out, "\t\t{} /* {stem} */ = {{", self.synthetic("ToPBXNativeTarget"))?;
        out.push_str("\t\t\tisa = PBXNativeTarget;\n");
        writeln!(
            out,
            "\t\t\tbuildConfigurationList = {} /* Build configuration list for PBXNativeTarget \"{stem}\" */;",
            self.synthetic("PBXNativeTarget")
        )?;
        out.push_str("\t\t\tbuildPhases = (\n");
        writeln!(out, "\t\t\t\t{} /* Headers */,", self.synthetic("PBXHeadersBuildPhase"))?;
        writeln!(out, "\t\t\t\t{} /* Sources */,", self.synthetic("PBXSourcesBuildPhase"))?;
        writeln!(out, "\t\t\t\t{} /* Frameworks */,", self.synthetic("PBXFrameworksBuildPhase"))?;
        if self.config.final_folder().is_some() {
            writeln!(out, "\t\t\t\t{} /* ShellScript */,", self.synthetic("PBXShellScriptBuildPhase"))?;
        }
        out.push_str("\t\t\t);\n");
        out.push_str("\t\t\tbuildRules = (\n\t\t\t);\n");
        out.push_str("\t\t\tdependencies = (\n\t\t\t);\n");
        writeln!(out, "\t\t\tname = {};", pbx(if is_library { stem.as_str() } else { name }))?;
        writeln!(out, "\t\t\tproductName = {};", pbx(name))?;
        writeln!(
            out,
            "\t\t\tproductReference = {} /* {} */;",
            self.product.id, self.product.name
        )?;
        writeln!(
            out,
            "\t\t\tproductType = \"{}\";",
            if is_library {
                "com.apple.product-type.library.static"
            } else {
                "com.apple.product-type.tool"
            }
        )?;
        out.push_str("\t\t};\n");
        out.push_str("/* End PBXNativeTarget section */\n\n");
        Ok(())
    }

    fn write_project(&self, out: &mut String) -> fmt::Result {
        let stem = &self.stem;
        out.push_str("/* Begin PBXProject section */\n");
        writeln!(out, "\t\t{} /* Project object */ = {{", self.synthetic("PBXProjectRoot"))?;
        out.push_str("\t\t\tisa = PBXProject;\n");
        out.push_str("\t\t\tattributes = {\n");
        out.push_str("\t\t\t\tBuildIndependentTargetsInParallel = YES;\n");
        out.push_str("\t\t\t};\n");
        writeln!(
            out,
            "\t\t\tbuildConfigurationList = {} /* Build configuration list for PBXProject \"{stem}\" */;",
            self.synthetic("PBXProject")
        )?;
        out.push_str("\t\t\tcompatibilityVersion = \"Xcode 3.1\";\n");
        if self.ide != Ide::Xcode3 {
            out.push_str("\t\t\tdevelopmentRegion = English;\n");
        }
        out.push_str("\t\t\thasScannedForEncodings = 1;\n");
        out.push_str("\t\t\tknownRegions = (\n\t\t\t\ten,\n\t\t\t);\n");
        writeln!(
            out,
            "\t\t\tmainGroup = {} /* {} */;",
            self.main_group_id(),
            self.config.name()
        )?;
        out.push_str("\t\t\tprojectDirPath = \"\";\n");
        out.push_str("\t\t\tprojectRoot = \"\";\n");
        out.push_str("\t\t\ttargets = (\n");
        writeln!(out, "\t\t\t\t{} /* {stem} */,", self.synthetic("ToPBXNativeTarget"))?;
        out.push_str("\t\t\t);\n");
        out.push_str("\t\t};\n");
        out.push_str("/* End PBXProject section */\n\n");
        Ok(())
    }

    fn write_shell_script(&self, out: &mut String) -> fmt::Result {
        let Some(final_folder) = self.config.final_folder() else {
            return Ok(());
        };
        let is_library = self.config.kind().is_library();
        let output = if is_library { "${FINAL_OUTPUT}" } else { "${PRODUCT_NAME}" };
        // Shell variables use braces where the project file uses parentheses.
        let shell_folder = final_folder.replace('(', "{").replace(')', "}");

        out.push_str("/* Begin PBXShellScriptBuildPhase section */\n");
        writeln!(out, "\t\t{} /* ShellScript */ = {{", self.synthetic("PBXShellScriptBuildPhase"))?;
        out.push_str("\t\t\tisa = PBXShellScriptBuildPhase;\n");
        out.push_str("\t\t\tbuildActionMask = 2147483647;\n");
        out.push_str("\t\t\tfiles = (\n\t\t\t);\n");
        out.push_str("\t\t\tinputPaths = (\n");
        out.push_str("\t\t\t\t\"$(CONFIGURATION_BUILD_DIR)/${EXECUTABLE_NAME}\",\n");
        out.push_str("\t\t\t);\n");
        out.push_str("\t\t\toutputPaths = (\n");
        writeln!(out, "\t\t\t\t\"{final_folder}{output}\",")?;
        out.push_str("\t\t\t);\n");
        out.push_str("\t\t\trunOnlyForDeploymentPostprocessing = 0;\n");
        out.push_str("\t\t\tshellPath = /bin/sh;\n");
        if is_library {
            writeln!(
                out,
                "\t\t\tshellScript = \"${{SDKS}}/macosx/bin/p4 edit {shell_folder}{output}\\n${{CP}} ${{CONFIGURATION_BUILD_DIR}}/${{EXECUTABLE_NAME}} {shell_folder}{output}\\n\\n\";"
            )?;
        } else {
            writeln!(
                out,
                "\t\t\tshellScript = \"if [ \\\"${{CONFIGURATION}}\\\" == \\\"Release\\\" ]; then\\n${{SDKS}}/macosx/bin/p4 edit {shell_folder}{output}\\n${{CP}} ${{CONFIGURATION_BUILD_DIR}}/${{EXECUTABLE_NAME}} {shell_folder}{output}\\nfi\\n\";"
            )?;
        }
        out.push_str("\t\t\tshowEnvVarsInLog = 0;\n");
        out.push_str("\t\t};\n");
        out.push_str("/* End PBXShellScriptBuildPhase section */\n\n");
        Ok(())
    }

    fn write_build_configurations(&self, out: &mut String) -> fmt::Result {
        let mut objects = Vec::new();
        for configuration in self.config.configurations() {
            let id = self.configuration_id("PBXNativeTarget", configuration);
            objects.push(Object {
                text: format!(
                    "\t\t{id} /* {configuration} */ = {{\n\
                     \t\t\tisa = XCBuildConfiguration;\n\
                     \t\t\tbuildSettings = {{\n\
                     \t\t\t}};\n\
                     \t\t\tname = {};\n\
                     \t\t}};\n",
                    pbx(configuration)
                ),
                id,
            });
        }
        for configuration in self.config.configurations() {
            let id = self.configuration_id("PBXProject", configuration);
            objects.push(Object {
                text: format!(
                    "\t\t{id} /* {configuration} */ = {{\n\
                     \t\t\tisa = XCBuildConfiguration;\n\
                     \t\t\tbaseConfigurationReference = {} /* {} */;\n\
                     \t\t\tbuildSettings = {{\n\
                     \t\t\t}};\n\
                     \t\t\tname = {};\n\
                     \t\t}};\n",
                    self.config_file.id,
                    self.config_file.name,
                    pbx(configuration)
                ),
                id,
            });
        }
        write_section(out, "XCBuildConfiguration", objects);
        Ok(())
    }

    fn configuration_id(&self, owner: &str, configuration: &str) -> Identifier {
        self.resolver
            .resolve(&SemanticKey::synthetic(owner, configuration))
    }

    fn write_configuration_lists(&self, out: &mut String) -> fmt::Result {
        let stem = &self.stem;
        let default = self.config.default_configuration().unwrap_or_default();

        out.push_str("/* Begin XCConfigurationList section */\n");
        for owner in ["PBXNativeTarget", "PBXProject"] {
            writeln!(
                out,
                "\t\t{} /* Build configuration list for {owner} \"{stem}\" */ = {{",
                self.synthetic(owner)
            )?;
            out.push_str("\t\t\tisa = XCConfigurationList;\n");
            out.push_str("\t\t\tbuildConfigurations = (\n");
            for configuration in self.config.configurations() {
                writeln!(
                    out,
                    "\t\t\t\t{} /* {configuration} */,",
                    self.configuration_id(owner, configuration)
                )?;
            }
            out.push_str("\t\t\t);\n");
            out.push_str("\t\t\tdefaultConfigurationIsVisible = 0;\n");
            writeln!(out, "\t\t\tdefaultConfigurationName = {};", pbx(default))?;
            out.push_str("\t\t};\n");
        }
        out.push_str("/* End XCConfigurationList section */\n");
        Ok(())
    }
}

fn write_section(out: &mut String, isa: &str, mut objects: Vec<Object>) {
    objects.sort_by(|a, b| a.id.cmp(&b.id));
    out.push_str("/* Begin ");
    out.push_str(isa);
    out.push_str(" section */\n");
    for object in objects {
        out.push_str(&object.text);
    }
    out.push_str("/* End ");
    out.push_str(isa);
    out.push_str(" section */\n\n");
}

/// Emitter for Xcode 3, 4 and 5.
#[derive(Debug, Clone, Copy, Default)]
pub struct XcodeEmitter;

impl XcodeEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl TargetEmitter for XcodeEmitter {
    fn name(&self) -> &'static str {
        "xcode"
    }

    fn handles(&self, ide: Ide) -> bool {
        ide.is_xcode()
    }

    fn id_mode(&self) -> IdMode {
        IdMode::TruncatedContentHash
    }

    fn role_for(&self, category: FileCategory) -> Option<&'static str> {
        role(category)
    }

    #[instrument(skip_all, fields(ide = %request.ide, project = %request.configuration.name()))]
    fn emit(&self, request: &EmitRequest<'_>) -> ForgeResult<Vec<Artifact>> {
        if !self.handles(request.ide) {
            return Err(ApplicationError::UnsupportedTarget { ide: request.ide }.into());
        }
        let project = XcodeProject::new(request);
        let text = project.render().map_err(emission_failed(request.ide))?;
        let path = format!("{}.xcodeproj/project.pbxproj", project.stem);
        debug!(path = %path, files = project.files.len(), "Rendered Xcode project");
        Ok(vec![Artifact::write(path, text)])
    }
}
