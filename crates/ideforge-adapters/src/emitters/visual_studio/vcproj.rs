//! `.vcproj` writer for Visual Studio 2005 and 2008.

use std::fmt::{self, Write};

use ideforge_core::domain::{GroupNode, ProjectKind, SourceEntry, paths};

use super::{VsProject, VsVersion};
use crate::emitters::{subtree_contains, tabs, xml_escape};

const WINDOWS_SDK_INCLUDES: &str = "$(SDKS)\\windows\\directx9;$(SDKS)\\windows\\opengl";
const WINDOWS_SDK_LIBRARIES: &str = "$(SDKS)\\windows\\opengl";

pub(super) fn render(project: &VsProject<'_>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let version = match project.version {
        VsVersion::Vs2008 => "9.00",
        _ => "8.00",
    };

    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<VisualStudioProject\n");
    out.push_str("\tProjectType=\"Visual C++\"\n");
    writeln!(out, "\tVersion=\"{version}\"")?;
    writeln!(out, "\tName=\"{}\"", xml_escape(project.config.name()))?;
    writeln!(out, "\tProjectGUID=\"{{{}}}\"", project.guid)?;
    out.push_str("\t>\n");

    out.push_str("\t<Platforms>\n");
    for platform in project.vs_platforms {
        writeln!(out, "\t\t<Platform Name=\"{}\" />", xml_escape(platform))?;
    }
    out.push_str("\t</Platforms>\n");

    out.push_str("\t<Configurations>\n");
    for (configuration, platform) in project.configuration_pairs() {
        write_configuration(&mut out, project, configuration, platform)?;
    }
    out.push_str("\t</Configurations>\n");

    write_files(&mut out, project)?;
    out.push_str("</VisualStudioProject>\n");
    Ok(out)
}

fn write_configuration(
    out: &mut String,
    project: &VsProject<'_>,
    configuration: &str,
    platform: &str,
) -> fmt::Result {
    let config = project.config;
    let is_library = config.kind().is_library();
    let is_release = configuration == "Release";
    let intermediate = project.intermediate_name(configuration, platform);
    let intermediate_end = if project.version == VsVersion::Vs2008 { "\\" } else { "" };

    out.push_str("\t\t<Configuration\n");
    writeln!(out, "\t\t\tName=\"{}|{}\"", xml_escape(configuration), xml_escape(platform))?;
    out.push_str("\t\t\tOutputDirectory=\"bin\\\"\n");
    writeln!(
        out,
        "\t\t\tIntermediateDirectory=\"temp\\{}{intermediate_end}\"",
        xml_escape(&intermediate)
    )?;
    writeln!(
        out,
        "\t\t\tConfigurationType=\"{}\"",
        if is_library { 4 } else { 1 }
    )?;
    out.push_str("\t\t\tUseOfMFC=\"0\"\n");
    out.push_str("\t\t\tATLMinimizesCRunTimeLibraryUsage=\"false\"\n");
    out.push_str("\t\t\tCharacterSet=\"1\"\n");
    out.push_str("\t\t\t>\n");

    // Compiler
    let mut defines = vec![if is_release { "NDEBUG" } else { "_DEBUG" }];
    match platform {
        "x64" => defines.extend(["WIN64", "_WINDOWS"]),
        "Win32" => defines.extend(["WIN32", "_WINDOWS"]),
        _ => {}
    }
    defines.extend(config.defines().iter().map(String::as_str));

    out.push_str("\t\t\t<Tool\n");
    out.push_str("\t\t\t\tName=\"VCCLCompilerTool\"\n");
    writeln!(
        out,
        "\t\t\t\tPreprocessorDefinitions=\"{}\"",
        xml_escape(&defines.join(";"))
    )?;
    for line in [
        "StringPooling=\"true\"",
        "ExceptionHandling=\"0\"",
        "StructMemberAlignment=\"4\"",
        "EnableFunctionLevelLinking=\"true\"",
        "FloatingPointModel=\"2\"",
        "RuntimeTypeInfo=\"false\"",
        "PrecompiledHeaderFile=\"\"",
        "WarningLevel=\"4\"",
        "SuppressStartupBanner=\"true\"",
    ] {
        writeln!(out, "\t\t\t\t{line}")?;
    }
    if is_library || !is_release {
        out.push_str("\t\t\t\tDebugInformationFormat=\"3\"\n");
        out.push_str("\t\t\t\tProgramDataBaseFileName=\"$(OutDir)\\$(TargetName).pdb\"\n");
    } else {
        out.push_str("\t\t\t\tDebugInformationFormat=\"0\"\n");
    }
    out.push_str("\t\t\t\tCallingConvention=\"1\"\n");
    out.push_str("\t\t\t\tCompileAs=\"2\"\n");
    out.push_str("\t\t\t\tFavorSizeOrSpeed=\"1\"\n");
    out.push_str("\t\t\t\tDisableSpecificWarnings=\"4201\"\n");
    if configuration == "Debug" {
        out.push_str("\t\t\t\tOptimization=\"0\"\n");
        if project.version == VsVersion::Vs2008 {
            out.push_str("\t\t\t\tEnableIntrinsicFunctions=\"true\"\n");
        }
    } else {
        out.push_str("\t\t\t\tOptimization=\"2\"\n");
        out.push_str("\t\t\t\tInlineFunctionExpansion=\"2\"\n");
        out.push_str("\t\t\t\tEnableIntrinsicFunctions=\"true\"\n");
        out.push_str("\t\t\t\tOmitFramePointers=\"true\"\n");
    }
    if is_release {
        out.push_str("\t\t\t\tBufferSecurityCheck=\"false\"\n");
        out.push_str("\t\t\t\tRuntimeLibrary=\"0\"\n");
    } else {
        out.push_str("\t\t\t\tBufferSecurityCheck=\"true\"\n");
        out.push_str("\t\t\t\tRuntimeLibrary=\"1\"\n");
    }
    let mut includes = project.include_directories();
    if project.is_windows() {
        includes.push(WINDOWS_SDK_INCLUDES.to_string());
    }
    writeln!(
        out,
        "\t\t\t\tAdditionalIncludeDirectories=\"{}\"",
        xml_escape(&includes.join(";"))
    )?;
    out.push_str("\t\t\t/>\n");

    out.push_str("\t\t\t<Tool\n");
    out.push_str("\t\t\t\tName=\"VCResourceCompilerTool\"\n");
    out.push_str("\t\t\t\tCulture=\"1033\"\n");
    out.push_str("\t\t\t/>\n");

    if is_library {
        write_librarian(out, project, &intermediate)?;
    } else {
        write_linker(out, project, &intermediate)?;
    }
    out.push_str("\t\t</Configuration>\n");
    Ok(())
}

fn write_librarian(out: &mut String, project: &VsProject<'_>, intermediate: &str) -> fmt::Result {
    out.push_str("\t\t\t<Tool\n");
    out.push_str("\t\t\t\tName=\"VCLibrarianTool\"\n");
    writeln!(
        out,
        "\t\t\t\tOutputFile=\"&quot;$(OutDir){}.lib&quot;\"",
        xml_escape(intermediate)
    )?;
    out.push_str("\t\t\t\tSuppressStartupBanner=\"true\"\n");
    out.push_str("\t\t\t/>\n");

    let Some(final_folder) = project.config.final_folder() else {
        return Ok(());
    };
    let folder = paths::to_back_slash_with_end(final_folder);
    let folder = xml_escape(&folder);
    let p4 = "&quot;$(perforce)\\p4&quot;";
    let crlf = "&#x0D;&#x0A;";
    let target = format!("{folder}$(TargetName)$(TargetExt)");
    let pdb = format!("{folder}$(TargetName).pdb");

    out.push_str("\t\t\t<Tool\n");
    out.push_str("\t\t\t\tName=\"VCPostBuildEventTool\"\n");
    writeln!(out, "\t\t\t\tDescription=\"Copying $(TargetName)$(TargetExt) to {folder}\"")?;
    write!(out, "\t\t\t\tCommandLine=\"")?;
    write!(out, "{p4} edit &quot;{target}&quot;{crlf}")?;
    write!(out, "{p4} edit &quot;{pdb}&quot;{crlf}")?;
    write!(out, "copy /Y &quot;$(OutDir)$(TargetName)$(TargetExt)&quot; &quot;{target}&quot;{crlf}")?;
    write!(out, "copy /Y &quot;$(OutDir)$(TargetName).pdb&quot; &quot;{pdb}&quot;{crlf}")?;
    write!(out, "{p4} revert -a &quot;{target}&quot;{crlf}")?;
    writeln!(out, "{p4} revert -a &quot;{pdb}&quot;{crlf}\"")?;
    out.push_str("\t\t\t/>\n");
    Ok(())
}

fn write_linker(out: &mut String, project: &VsProject<'_>, intermediate: &str) -> fmt::Result {
    let mut libraries: Vec<String> = project
        .config
        .include_folders()
        .iter()
        .map(|d| paths::to_back_slash(d))
        .collect();
    libraries.push(WINDOWS_SDK_LIBRARIES.to_string());

    out.push_str("\t\t\t<Tool\n");
    out.push_str("\t\t\t\tName=\"VCLinkerTool\"\n");
    writeln!(
        out,
        "\t\t\t\tOutputFile=\"&quot;$(OutDir){}.exe&quot;\"",
        xml_escape(intermediate)
    )?;
    writeln!(
        out,
        "\t\t\t\tAdditionalLibraryDirectories=\"{}\"",
        xml_escape(&libraries.join(";"))
    )?;
    // Console tools link against main(), everything else WinMain().
    let subsystem = match project.config.kind() {
        ProjectKind::Tool => 1,
        _ => 2,
    };
    writeln!(out, "\t\t\t\tSubSystem=\"{subsystem}\"")?;
    out.push_str("\t\t\t/>\n");
    Ok(())
}

/// The `<Files>` section: root files first, then one nested `<Filter>` per
/// group node that holds a listed file somewhere below it.
fn write_files(out: &mut String, project: &VsProject<'_>) -> fmt::Result {
    let categories = project.listed_categories();
    if !project.has_listed_file(categories) {
        return Ok(());
    }
    let keep = |e: &SourceEntry| categories.contains(&e.category());

    out.push_str("\t<Files>\n");
    for entry in project.model.groups.root_entries() {
        if keep(entry) {
            write_file(out, 2, entry)?;
        }
    }
    for node in project.model.tree.roots() {
        write_filter(out, 2, node, &keep)?;
    }
    out.push_str("\t</Files>\n");
    Ok(())
}

fn write_filter<F>(out: &mut String, depth: usize, node: &GroupNode, keep: &F) -> fmt::Result
where
    F: Fn(&SourceEntry) -> bool,
{
    if !subtree_contains(node, keep) {
        return Ok(());
    }
    writeln!(out, "{}<Filter Name=\"{}\">", tabs(depth), xml_escape(&node.name))?;
    for entry in &node.entries {
        if keep(entry) {
            write_file(out, depth + 1, entry)?;
        }
    }
    for child in node.children() {
        write_filter(out, depth + 1, child, keep)?;
    }
    writeln!(out, "{}</Filter>", tabs(depth))
}

fn write_file(out: &mut String, depth: usize, entry: &SourceEntry) -> fmt::Result {
    writeln!(
        out,
        "{}<File RelativePath=\"{}\" />",
        tabs(depth),
        xml_escape(&entry.windows_path())
    )
}
