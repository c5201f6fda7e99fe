//! CodeWarrior 9 XML export (`<stem>.mcp.xml`).
//!
//! CodeWarrior imports this XML and converts it into a binary `.mcp`. One
//! "Everything" target builds every per-configuration target.

use std::fmt::{self, Write};

use ideforge_core::{
    application::{ApplicationError, Artifact, EmitRequest, TargetEmitter},
    domain::{
        FileCategory, GroupNode, IdMode, Ide, Platform, ProjectConfiguration, ProjectModel,
        SourceEntry, capabilities, paths,
    },
    error::ForgeResult,
};
use tracing::{debug, instrument};

use super::{emission_failed, subtree_contains, tabs, windows_categories, xml_escape};

/// Libraries every application target links.
const SYSTEM_LIBRARIES: [&str; 2] = ["user32.lib", "kernel32.lib"];
const RUNTIME_RELEASE: &str = "MSL_All_x86.lib";
const RUNTIME_DEBUG: &str = "MSL_All_x86_D.lib";

const SDK_SEARCH_PATHS: [&str; 3] = [
    "windows\\perforce",
    "windows\\opengl",
    "windows\\directx9",
];
const CODEWARRIOR_SEARCH_PATHS: [&str; 2] = ["MSL", "Win32-x86 Support"];

const FRONT_END: &[(&str, &str)] = &[
    ("MWFrontEnd_C_cplusplus", "1"),
    ("MWFrontEnd_C_templateparser", "0"),
    ("MWFrontEnd_C_instance_manager", "0"),
    ("MWFrontEnd_C_enableexceptions", "0"),
    ("MWFrontEnd_C_useRTTI", "0"),
    ("MWFrontEnd_C_booltruefalse", "0"),
    ("MWFrontEnd_C_wchar_type", "0"),
    ("MWFrontEnd_C_ecplusplus", "0"),
    ("MWFrontEnd_C_dontinline", "0"),
    ("MWFrontEnd_C_inlinelevel", "0"),
    ("MWFrontEnd_C_autoinline", "1"),
    ("MWFrontEnd_C_defer_codegen", "0"),
    ("MWFrontEnd_C_bottomupinline", "1"),
    ("MWFrontEnd_C_ansistrict", "0"),
    ("MWFrontEnd_C_onlystdkeywords", "0"),
    ("MWFrontEnd_C_trigraphs", "0"),
    ("MWFrontEnd_C_arm", "0"),
    ("MWFrontEnd_C_checkprotos", "1"),
    ("MWFrontEnd_C_c99", "0"),
    ("MWFrontEnd_C_gcc_extensions", "0"),
    ("MWFrontEnd_C_enumsalwaysint", "1"),
    ("MWFrontEnd_C_unsignedchars", "0"),
    ("MWFrontEnd_C_poolstrings", "1"),
    ("MWFrontEnd_C_dontreusestrings", "0"),
];

const PREPROCESSOR: &[(&str, &str)] = &[
    ("C_CPP_Preprocessor_MultiByteEncoding", "encASCII_Unicode"),
    ("C_CPP_Preprocessor_PCHUsesPrefixText", "false"),
    ("C_CPP_Preprocessor_EmitPragmas", "true"),
    ("C_CPP_Preprocessor_KeepWhiteSpace", "false"),
    ("C_CPP_Preprocessor_EmitFullPath", "false"),
    ("C_CPP_Preprocessor_KeepComments", "false"),
    ("C_CPP_Preprocessor_EmitFile", "true"),
    ("C_CPP_Preprocessor_EmitLine", "false"),
];

const WARNINGS: &[(&str, &str)] = &[
    ("MWWarning_C_warn_illpragma", "1"),
    ("MWWarning_C_warn_possunwant", "1"),
    ("MWWarning_C_pedantic", "1"),
    ("MWWarning_C_warn_illtokenpasting", "0"),
    ("MWWarning_C_warn_hidevirtual", "1"),
    ("MWWarning_C_warn_implicitconv", "1"),
    ("MWWarning_C_warn_impl_f2i_conv", "1"),
    ("MWWarning_C_warn_impl_s2u_conv", "1"),
    ("MWWarning_C_warn_impl_i2f_conv", "1"),
    ("MWWarning_C_warn_ptrintconv", "1"),
    ("MWWarning_C_warn_unusedvar", "1"),
    ("MWWarning_C_warn_unusedarg", "1"),
    ("MWWarning_C_warn_resultnotused", "0"),
    ("MWWarning_C_warn_missingreturn", "1"),
    ("MWWarning_C_warn_no_side_effect", "1"),
    ("MWWarning_C_warn_extracomma", "1"),
    ("MWWarning_C_warn_structclass", "1"),
    ("MWWarning_C_warn_emptydecl", "1"),
    ("MWWarning_C_warn_filenamecaps", "0"),
    ("MWWarning_C_warn_filenamecapssystem", "0"),
    ("MWWarning_C_warn_padding", "0"),
    ("MWWarning_C_warn_undefmacro", "0"),
    ("MWWarning_C_warn_notinlined", "0"),
    ("MWWarning_C_warningerrors", "0"),
];

const CODE_GEN: &[(&str, &str)] = &[
    ("MWLinker_X86_runtime", "Custom"),
    ("MWCodeGen_X86_processor", "PentiumIV"),
    ("MWCodeGen_X86_use_extinst", "1"),
    ("MWCodeGen_X86_extinst_mmx", "0"),
    ("MWCodeGen_X86_extinst_3dnow", "0"),
    ("MWCodeGen_X86_extinst_cmov", "1"),
    ("MWCodeGen_X86_extinst_sse", "0"),
    ("MWCodeGen_X86_extinst_sse2", "0"),
    ("MWCodeGen_X86_use_mmx_3dnow_convention", "0"),
    ("MWCodeGen_X86_vectorize", "0"),
    ("MWCodeGen_X86_profile", "0"),
    ("MWCodeGen_X86_readonlystrings", "1"),
    ("MWCodeGen_X86_alignment", "bytes8"),
    ("MWCodeGen_X86_intrinsics", "1"),
];

const CODE_GEN_TAIL: &[(&str, &str)] = &[
    ("MWCodeGen_X86_relaxieee", "1"),
    ("MWCodeGen_X86_exceptions", "ZeroOverhead"),
    ("MWCodeGen_X86_name_mangling", "MWWin32"),
];

const DISASSEMBLER: &[(&str, &str)] = &[
    ("PDisasmX86_showHeaders", "true"),
    ("PDisasmX86_showSectHeaders", "true"),
    ("PDisasmX86_showSymTab", "true"),
    ("PDisasmX86_showCode", "true"),
    ("PDisasmX86_showData", "true"),
    ("PDisasmX86_showDebug", "false"),
    ("PDisasmX86_showExceptions", "false"),
    ("PDisasmX86_showRelocation", "true"),
    ("PDisasmX86_showRaw", "false"),
    ("PDisasmX86_showAllRaw", "false"),
    ("PDisasmX86_showSource", "false"),
    ("PDisasmX86_showHex", "true"),
    ("PDisasmX86_showComments", "false"),
    ("PDisasmX86_resolveLocals", "false"),
    ("PDisasmX86_resolveRelocs", "true"),
    ("PDisasmX86_showSymDefs", "true"),
    ("PDisasmX86_unmangle", "false"),
    ("PDisasmX86_verbose", "false"),
];

const LINKER: &[(&str, &str)] = &[
    ("MWLinker_X86_linksym", "0"),
    ("MWLinker_X86_linkCV", "1"),
    ("MWLinker_X86_symfullpath", "false"),
    ("MWLinker_X86_linkdebug", "true"),
    ("MWLinker_X86_debuginline", "true"),
    ("MWLinker_X86_subsystem", "Unknown"),
    ("MWLinker_X86_entrypointusage", "Default"),
    ("MWLinker_X86_entrypoint", ""),
    ("MWLinker_X86_codefolding", "Any"),
    ("MWLinker_X86_usedefaultlibs", "false"),
    ("MWLinker_X86_adddefaultlibs", "false"),
    ("MWLinker_X86_mergedata", "true"),
    ("MWLinker_X86_zero_init_bss", "false"),
    ("MWLinker_X86_generatemap", "0"),
    ("MWLinker_X86_checksum", "false"),
    ("MWLinker_X86_linkformem", "false"),
    ("MWLinker_X86_nowarnings", "false"),
    ("MWLinker_X86_verbose", "false"),
    ("MWLinker_X86_commandfile", ""),
];

struct CodeWarriorProject<'a> {
    ide: Ide,
    config: &'a ProjectConfiguration,
    model: &'a ProjectModel,
    stem: String,
    categories: &'static [FileCategory],
}

impl<'a> CodeWarriorProject<'a> {
    fn new(request: &EmitRequest<'a>) -> Self {
        let config = request.configuration;
        Self {
            ide: request.ide,
            config,
            model: request.model,
            stem: capabilities::project_stem(config.name(), request.ide, config.platform()),
            categories: windows_categories(config.platform()),
        }
    }

    /// Prefix of every target name.
    fn label(&self) -> &'static str {
        match self.config.platform() {
            Platform::Windows => "Win32",
            other => other.as_str(),
        }
    }

    fn target_name(&self, configuration: &str) -> String {
        format!("{} {}", self.label(), configuration)
    }

    fn is_application(&self) -> bool {
        !self.config.kind().is_library()
    }

    fn is_listed(&self, entry: &SourceEntry) -> bool {
        self.categories.contains(&entry.category())
    }

    fn output_file(&self, configuration: &str) -> String {
        let platform = match self.config.platform() {
            Platform::Windows => "w32",
            other => other.as_str(),
        };
        format!(
            "{}{}{}{}.{}",
            self.config.name(),
            capabilities::ide_code(self.ide, self.config.platform()),
            platform,
            capabilities::configuration_code(configuration),
            if self.is_application() { "exe" } else { "lib" }
        )
    }

    /// Basenames of every listed file, sorted.
    fn file_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .model
            .catalog
            .by_category(self.categories)
            .map(|e| e.file_name())
            .collect();
        names.sort_unstable();
        names
    }

    fn libraries(configuration: &str) -> [&'static str; 3] {
        let runtime = if configuration == "Debug" {
            RUNTIME_DEBUG
        } else {
            RUNTIME_RELEASE
        };
        [SYSTEM_LIBRARIES[0], SYSTEM_LIBRARIES[1], runtime]
    }

    fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\" ?>\n");
        out.push_str("<?codewarrior exportversion=\"1.0.1\" ideversion=\"5.0\" ?>\n");
        out.push_str("<PROJECT>\n");

        out.push_str("\t<TARGETLIST>\n");
        self.write_everything(&mut out)?;
        for configuration in self.config.configurations() {
            self.write_target(&mut out, configuration)?;
        }
        out.push_str("\t</TARGETLIST>\n");

        out.push_str("\t<TARGETORDER>\n");
        out.push_str("\t\t<ORDEREDTARGET><NAME>Everything</NAME></ORDEREDTARGET>\n");
        for configuration in self.config.configurations() {
            writeln!(
                out,
                "\t\t<ORDEREDTARGET><NAME>{}</NAME></ORDEREDTARGET>",
                xml_escape(&self.target_name(configuration))
            )?;
        }
        out.push_str("\t</TARGETORDER>\n");

        self.write_groups(&mut out)?;
        out.push_str("</PROJECT>\n");
        Ok(out)
    }

    fn write_everything(&self, out: &mut String) -> fmt::Result {
        out.push_str("\t\t<TARGET>\n");
        out.push_str("\t\t\t<NAME>Everything</NAME>\n");
        out.push_str("\t\t\t<SETTINGLIST>\n");
        setting(out, 4, "Linker", "None")?;
        setting(out, 4, "Targetname", "Everything")?;
        out.push_str("\t\t\t</SETTINGLIST>\n");
        out.push_str("\t\t\t<FILELIST>\n\t\t\t</FILELIST>\n");
        out.push_str("\t\t\t<LINKORDER>\n\t\t\t</LINKORDER>\n");
        if !self.config.configurations().is_empty() {
            out.push_str("\t\t\t<SUBTARGETLIST>\n");
            for configuration in self.config.configurations() {
                out.push_str("\t\t\t\t<SUBTARGET>\n");
                writeln!(
                    out,
                    "\t\t\t\t\t<TARGETNAME>{}</TARGETNAME>",
                    xml_escape(&self.target_name(configuration))
                )?;
                out.push_str("\t\t\t\t</SUBTARGET>\n");
            }
            out.push_str("\t\t\t</SUBTARGETLIST>\n");
        }
        out.push_str("\t\t</TARGET>\n");
        Ok(())
    }

    fn write_target(&self, out: &mut String, configuration: &str) -> fmt::Result {
        let target_name = self.target_name(configuration);
        let debug = configuration == "Debug";
        let release = configuration == "Release";

        out.push_str("\t\t<TARGET>\n");
        writeln!(out, "\t\t\t<NAME>{}</NAME>", xml_escape(&target_name))?;
        out.push_str("\t\t\t<SETTINGLIST>\n");

        setting(out, 4, "Linker", "Win32 x86 Linker")?;
        setting(out, 4, "Targetname", &target_name)?;
        out.push_str("\t\t\t\t<SETTING><NAME>OutputDirectory</NAME>\n");
        setting(out, 5, "Path", "bin")?;
        setting(out, 5, "PathFormat", "Windows")?;
        setting(out, 5, "PathRoot", "Project")?;
        out.push_str("\t\t\t\t</SETTING>\n");

        let includes: Vec<String> = self
            .model
            .include_directories()
            .iter()
            .chain(self.config.include_folders())
            .map(|d| paths::to_back_slash(d))
            .collect();
        if !includes.is_empty() {
            out.push_str("\t\t\t\t<SETTING><NAME>UserSearchPaths</NAME>\n");
            for dir in &includes {
                search_path(out, dir, "Project", false)?;
            }
            out.push_str("\t\t\t\t</SETTING>\n");
        }

        out.push_str("\t\t\t\t<SETTING><NAME>SystemSearchPaths</NAME>\n");
        for dir in SDK_SEARCH_PATHS {
            search_path(out, dir, "SDKS", false)?;
        }
        for dir in CODEWARRIOR_SEARCH_PATHS {
            search_path(out, dir, "CodeWarrior", true)?;
        }
        out.push_str("\t\t\t\t</SETTING>\n");

        let project_type = if self.is_application() {
            "Application"
        } else {
            "Library"
        };
        setting(out, 4, "MWProject_X86_type", project_type)?;
        setting(out, 4, "MWProject_X86_outfile", &self.output_file(configuration))?;

        settings(out, FRONT_END)?;

        let mut prefix = String::from(if release {
            "#define NDEBUG\n"
        } else {
            "#define _DEBUG\n"
        });
        if self.config.platform() == Platform::Windows {
            prefix.push_str("#define WIN32_LEAN_AND_MEAN\n#define WIN32\n");
        }
        for define in self.config.defines() {
            writeln!(prefix, "#define {define}")?;
        }
        setting(out, 4, "C_CPP_Preprocessor_PrefixText", &prefix)?;
        settings(out, PREPROCESSOR)?;
        settings(out, WARNINGS)?;

        settings(out, CODE_GEN)?;
        setting(out, 4, "MWCodeGen_X86_optimizeasm", if debug { "0" } else { "1" })?;
        setting(out, 4, "MWCodeGen_X86_disableopts", if debug { "1" } else { "0" })?;
        settings(out, CODE_GEN_TAIL)?;
        setting(
            out,
            4,
            "GlobalOptimizer_X86__optimizationlevel",
            if debug { "Level0" } else { "Level4" },
        )?;
        setting(out, 4, "GlobalOptimizer_X86__optfor", "Size")?;
        settings(out, DISASSEMBLER)?;
        settings(out, LINKER)?;
        out.push_str("\t\t\t</SETTINGLIST>\n");

        let libraries = Self::libraries(configuration);
        let file_names = self.file_names();

        out.push_str("\t\t\t<FILELIST>\n");
        if self.is_application() {
            for library in libraries {
                let flags = if release { "" } else { "Debug" };
                file(out, library, "Library", flags)?;
            }
        }
        for name in &file_names {
            let compiled = name.ends_with(".c") || name.ends_with(".cpp");
            let flags = if !release && compiled { "Debug" } else { "" };
            file(out, name, "Text", flags)?;
        }
        out.push_str("\t\t\t</FILELIST>\n");

        out.push_str("\t\t\t<LINKORDER>\n");
        if self.is_application() {
            for library in libraries {
                file_ref(out, 4, None, library)?;
            }
        }
        for name in &file_names {
            file_ref(out, 4, None, name)?;
        }
        out.push_str("\t\t\t</LINKORDER>\n");
        out.push_str("\t\t</TARGET>\n");
        Ok(())
    }

    fn write_groups(&self, out: &mut String) -> fmt::Result {
        let keep = |e: &SourceEntry| self.is_listed(e);
        let owner = self.target_name("Release");

        out.push_str("\t<GROUPLIST>\n");
        for entry in self.model.groups.root_entries() {
            if self.is_listed(entry) {
                file_ref(out, 2, Some(&owner), entry.file_name())?;
            }
        }
        for root in self.model.tree.roots() {
            if subtree_contains(root, &keep) {
                self.write_group(out, root, 2, &keep, &owner)?;
            }
        }

        if self.is_application() {
            out.push_str("\t\t<GROUP><NAME>Libraries</NAME>\n");
            for library in Self::libraries("Release") {
                file_ref(out, 3, Some(&owner), library)?;
            }
            file_ref(out, 3, Some(&self.target_name("Debug")), RUNTIME_DEBUG)?;
            out.push_str("\t\t</GROUP>\n");
        }
        out.push_str("\t</GROUPLIST>\n");
        Ok(())
    }

    fn write_group<F>(
        &self,
        out: &mut String,
        node: &GroupNode,
        depth: usize,
        keep: &F,
        owner: &str,
    ) -> fmt::Result
    where
        F: Fn(&SourceEntry) -> bool,
    {
        writeln!(out, "{}<GROUP><NAME>{}</NAME>", tabs(depth), xml_escape(&node.name))?;
        for entry in node.entries.iter().filter(|e| keep(e)) {
            file_ref(out, depth + 1, Some(owner), entry.file_name())?;
        }
        for child in node.children() {
            if subtree_contains(child, keep) {
                self.write_group(out, child, depth + 1, keep, owner)?;
            }
        }
        writeln!(out, "{}</GROUP>", tabs(depth))
    }
}

fn setting(out: &mut String, depth: usize, name: &str, value: &str) -> fmt::Result {
    writeln!(
        out,
        "{}<SETTING><NAME>{name}</NAME><VALUE>{}</VALUE></SETTING>",
        tabs(depth),
        xml_escape(value)
    )
}

fn settings(out: &mut String, table: &[(&str, &str)]) -> fmt::Result {
    table
        .iter()
        .try_for_each(|(name, value)| setting(out, 4, name, value))
}

fn search_path(out: &mut String, path: &str, root: &str, recursive: bool) -> fmt::Result {
    out.push_str("\t\t\t\t\t<SETTING>\n");
    out.push_str("\t\t\t\t\t\t<SETTING><NAME>SearchPath</NAME>\n");
    setting(out, 7, "Path", path)?;
    setting(out, 7, "PathFormat", "Windows")?;
    setting(out, 7, "PathRoot", root)?;
    out.push_str("\t\t\t\t\t\t</SETTING>\n");
    setting(out, 6, "Recursive", if recursive { "true" } else { "false" })?;
    setting(out, 6, "FrameworkPath", "false")?;
    setting(out, 6, "HostFlags", "All")?;
    out.push_str("\t\t\t\t\t</SETTING>\n");
    Ok(())
}

fn file(out: &mut String, path: &str, kind: &str, flags: &str) -> fmt::Result {
    out.push_str("\t\t\t\t<FILE>\n");
    out.push_str("\t\t\t\t\t<PATHTYPE>Name</PATHTYPE>\n");
    writeln!(out, "\t\t\t\t\t<PATH>{}</PATH>", xml_escape(path))?;
    out.push_str("\t\t\t\t\t<PATHFORMAT>Windows</PATHFORMAT>\n");
    writeln!(out, "\t\t\t\t\t<FILEKIND>{kind}</FILEKIND>")?;
    writeln!(out, "\t\t\t\t\t<FILEFLAGS>{flags}</FILEFLAGS>")?;
    out.push_str("\t\t\t\t</FILE>\n");
    Ok(())
}

fn file_ref(out: &mut String, depth: usize, target: Option<&str>, path: &str) -> fmt::Result {
    let indent = tabs(depth);
    writeln!(out, "{indent}<FILEREF>")?;
    if let Some(target) = target {
        writeln!(out, "{indent}\t<TARGETNAME>{}</TARGETNAME>", xml_escape(target))?;
    }
    writeln!(out, "{indent}\t<PATHTYPE>Name</PATHTYPE>")?;
    writeln!(out, "{indent}\t<PATH>{}</PATH>", xml_escape(path))?;
    writeln!(out, "{indent}\t<PATHFORMAT>Windows</PATHFORMAT>")?;
    writeln!(out, "{indent}</FILEREF>")
}

/// Emitter for CodeWarrior 9 (10 on Mac platforms).
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeWarriorEmitter;

impl CodeWarriorEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl TargetEmitter for CodeWarriorEmitter {
    fn name(&self) -> &'static str {
        "codewarrior"
    }

    fn handles(&self, ide: Ide) -> bool {
        ide == Ide::CodeWarrior
    }

    fn id_mode(&self) -> IdMode {
        IdMode::NamespaceHash
    }

    fn role_for(&self, _category: FileCategory) -> Option<&'static str> {
        None
    }

    #[instrument(skip_all, fields(ide = %request.ide, project = %request.configuration.name()))]
    fn emit(&self, request: &EmitRequest<'_>) -> ForgeResult<Vec<Artifact>> {
        if !self.handles(request.ide) {
            return Err(ApplicationError::UnsupportedTarget { ide: request.ide }.into());
        }
        let project = CodeWarriorProject::new(request);
        let text = project.render().map_err(emission_failed(request.ide))?;
        let path = format!("{}.mcp.xml", project.stem);
        debug!(path = %path, "Rendered CodeWarrior project");
        Ok(vec![Artifact::write(path, text)])
    }
}
