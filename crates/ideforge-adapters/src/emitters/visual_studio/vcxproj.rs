//! `.vcxproj` and `.vcxproj.filters` writers for Visual Studio 2010.

use std::fmt::{self, Write};

use ideforge_core::domain::{
    FileCategory, GroupNode, Platform, ProjectKind, SemanticKey, SourceEntry, paths,
};

use super::VsProject;
use crate::emitters::{subtree_contains, xml_escape};

const MSBUILD_NAMESPACE: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

/// MSBuild item element per category, in the order item groups list them.
const ITEM_KINDS: &[(FileCategory, &str)] = &[
    (FileCategory::Header, "ClInclude"),
    (FileCategory::TranslationUnit, "ClCompile"),
    (FileCategory::WindowsResource, "ResourceCompile"),
    (FileCategory::Shader, "HLSL"),
];

/// The item kinds this project lists. Resources and shaders are Windows only.
fn item_kinds<'a>(
    project: &'a VsProject<'a>,
) -> impl Iterator<Item = (FileCategory, &'static str)> + 'a {
    ITEM_KINDS.iter().copied().filter(move |(category, _)| {
        project.is_windows()
            || matches!(category, FileCategory::Header | FileCategory::TranslationUnit)
    })
}

fn property_sheet(kind: ProjectKind) -> &'static str {
    match kind {
        ProjectKind::Library => "burger.libv10.props",
        ProjectKind::Tool => "burger.toolv10.props",
        ProjectKind::Game => "burger.gamev10.props",
    }
}

pub(super) fn render_project(project: &VsProject<'_>) -> Result<String, fmt::Error> {
    let config = project.config;
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    writeln!(
        out,
        "<Project DefaultTargets=\"Build\" ToolsVersion=\"4.0\" xmlns=\"{MSBUILD_NAMESPACE}\">"
    )?;

    if config.platform() == Platform::Shield {
        out.push_str("\t<PropertyGroup Label=\"NsightTegraProject\">\n");
        out.push_str("\t\t<NsightTegraProjectRevisionNumber>4</NsightTegraProjectRevisionNumber>\n");
        out.push_str("\t</PropertyGroup>\n");
    }

    out.push_str("\t<ItemGroup Label=\"ProjectConfigurations\">\n");
    for (configuration, platform) in project.configuration_pairs() {
        let configuration = xml_escape(configuration);
        let platform = xml_escape(platform);
        writeln!(out, "\t\t<ProjectConfiguration Include=\"{configuration}|{platform}\">")?;
        writeln!(out, "\t\t\t<Configuration>{configuration}</Configuration>")?;
        writeln!(out, "\t\t\t<Platform>{platform}</Platform>")?;
        out.push_str("\t\t</ProjectConfiguration>\n");
    }
    out.push_str("\t</ItemGroup>\n");

    out.push_str("\t<PropertyGroup Label=\"Globals\">\n");
    writeln!(out, "\t\t<ProjectName>{}</ProjectName>", xml_escape(config.name()))?;
    if let Some(final_folder) = config.final_folder() {
        writeln!(
            out,
            "\t\t<FinalFolder>{}</FinalFolder>",
            xml_escape(&paths::to_back_slash_with_end(final_folder))
        )?;
    }
    writeln!(out, "\t\t<ProjectGuid>{{{}}}</ProjectGuid>", project.guid)?;
    out.push_str("\t</PropertyGroup>\n");

    out.push_str("\t<Import Project=\"$(VCTargetsPath)\\Microsoft.Cpp.Default.props\" />\n");
    writeln!(
        out,
        "\t<Import Project=\"$(SDKS)\\visualstudio\\{}\" />",
        property_sheet(config.kind())
    )?;
    out.push_str("\t<Import Project=\"$(VCTargetsPath)\\Microsoft.Cpp.props\" />\n");
    out.push_str("\t<ImportGroup Label=\"ExtensionSettings\" />\n");
    out.push_str("\t<ImportGroup Label=\"PropertySheets\" />\n");
    out.push_str("\t<PropertyGroup Label=\"UserMacros\" />\n");

    write_item_definitions(&mut out, project)?;
    write_items(&mut out, project)?;

    out.push_str("\t<Import Project=\"$(VCTargetsPath)\\Microsoft.Cpp.targets\" />\n");
    out.push_str("\t<ImportGroup Label=\"ExtensionTargets\" />\n");
    out.push_str("</Project>\n");
    Ok(out)
}

fn write_item_definitions(out: &mut String, project: &VsProject<'_>) -> fmt::Result {
    let config = project.config;
    let discovered = project.model.include_directories();
    let folders = config.include_folders();
    let defines = config.defines();

    if !discovered.is_empty() || !folders.is_empty() || !defines.is_empty() {
        out.push_str("\t<ItemDefinitionGroup>\n");
        out.push_str("\t\t<ClCompile>\n");
        if !discovered.is_empty() || !folders.is_empty() {
            out.push_str("\t\t\t<AdditionalIncludeDirectories>");
            for dir in discovered {
                write!(out, "$(ProjectDir){};", xml_escape(&paths::to_back_slash(dir)))?;
            }
            for dir in folders {
                write!(out, "{};", xml_escape(&paths::to_back_slash(dir)))?;
            }
            out.push_str("%(AdditionalIncludeDirectories)</AdditionalIncludeDirectories>\n");
        }
        if !defines.is_empty() {
            out.push_str("\t\t\t<PreprocessorDefinitions>");
            for define in defines {
                write!(out, "{};", xml_escape(define))?;
            }
            out.push_str("%(PreprocessorDefinitions)</PreprocessorDefinitions>\n");
        }
        out.push_str("\t\t</ClCompile>\n");

        if !folders.is_empty() {
            out.push_str("\t\t<Link>\n");
            out.push_str("\t\t\t<AdditionalLibraryDirectories>");
            for dir in folders {
                write!(out, "{};", xml_escape(&paths::to_back_slash(dir)))?;
            }
            out.push_str("%(AdditionalLibraryDirectories)</AdditionalLibraryDirectories>\n");
            out.push_str("\t\t</Link>\n");
        }
        out.push_str("\t</ItemDefinitionGroup>\n");
    }

    // Sony toolchains take the debug switch from a property, not the configuration.
    if matches!(config.platform(), Platform::Ps3 | Platform::Ps4) {
        for (condition, define) in [("!=", "_DEBUG"), ("==", "NDEBUG")] {
            writeln!(
                out,
                "\t<ItemDefinitionGroup Condition=\"'$(BurgerConfiguration)'{condition}'Release'\">"
            )?;
            out.push_str("\t\t<ClCompile>\n");
            writeln!(
                out,
                "\t\t\t<PreprocessorDefinitions>{define};%(PreprocessorDefinitions)</PreprocessorDefinitions>"
            )?;
            out.push_str("\t\t</ClCompile>\n");
            out.push_str("\t</ItemDefinitionGroup>\n");
        }
    }
    Ok(())
}

fn write_items(out: &mut String, project: &VsProject<'_>) -> fmt::Result {
    let kinds: Vec<_> = item_kinds(project).collect();
    let categories: Vec<FileCategory> = kinds.iter().map(|(c, _)| *c).collect();
    if !project.has_listed_file(&categories) {
        return Ok(());
    }

    out.push_str("\t<ItemGroup>\n");
    for (category, element) in &kinds {
        for entry in project.model.catalog.by_category(std::slice::from_ref(category)) {
            let path = xml_escape(&entry.windows_path()).into_owned();
            if *category == FileCategory::Shader {
                writeln!(out, "\t\t<{element} Include=\"{path}\">")?;
                out.push_str("\t\t\t<VariableName>g_DisplayDirectX8BitPS</VariableName>\n");
                out.push_str("\t\t\t<TargetProfile>ps_2_0</TargetProfile>\n");
                out.push_str("\t\t\t<ObjectFileName>%(RootDir)%(Directory)%(FileName).h</ObjectFileName>\n");
                writeln!(out, "\t\t</{element}>")?;
            } else {
                writeln!(out, "\t\t<{element} Include=\"{path}\" />")?;
            }
        }
    }
    out.push_str("\t</ItemGroup>\n");
    Ok(())
}

/// The filters file, or `None` when every listed file sits at the root.
pub(super) fn render_filters(project: &VsProject<'_>) -> Result<Option<String>, fmt::Error> {
    let kinds: Vec<_> = item_kinds(project).collect();
    let listed = |e: &SourceEntry| kinds.iter().any(|(c, _)| *c == e.category());

    let mut filters = Vec::new();
    for root in project.model.tree.roots() {
        collect_filters(root, &listed, &mut filters);
    }
    if filters.is_empty() {
        return Ok(None);
    }

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    writeln!(out, "<Project ToolsVersion=\"4.0\" xmlns=\"{MSBUILD_NAMESPACE}\">")?;
    out.push_str("\t<ItemGroup>\n");

    for (category, element) in &kinds {
        for entry in project.model.catalog.by_category(std::slice::from_ref(category)) {
            let group = entry.group_key();
            if group.is_empty() {
                continue;
            }
            writeln!(
                out,
                "\t\t<{element} Include=\"{}\">",
                xml_escape(&entry.windows_path())
            )?;
            writeln!(
                out,
                "\t\t\t<Filter>{}</Filter>",
                xml_escape(&paths::to_back_slash(&group))
            )?;
            writeln!(out, "\t\t</{element}>")?;
        }
    }

    for node in filters {
        let name = paths::to_back_slash(&node.path);
        let id = project
            .resolver
            .resolve(&SemanticKey::group(&project.stem, &name));
        writeln!(out, "\t\t<Filter Include=\"{}\">", xml_escape(&name))?;
        writeln!(out, "\t\t\t<UniqueIdentifier>{{{id}}}</UniqueIdentifier>")?;
        out.push_str("\t\t</Filter>\n");
    }

    out.push_str("\t</ItemGroup>\n");
    out.push_str("</Project>\n");
    Ok(Some(out))
}

/// Pre-order list of the nodes that hold a listed file somewhere below them.
fn collect_filters<'a, F>(node: &'a GroupNode, listed: &F, out: &mut Vec<&'a GroupNode>)
where
    F: Fn(&SourceEntry) -> bool,
{
    if !subtree_contains(node, listed) {
        return;
    }
    out.push(node);
    for child in node.children() {
        collect_filters(child, listed, out);
    }
}
