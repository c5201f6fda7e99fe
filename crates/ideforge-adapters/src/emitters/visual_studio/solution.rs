//! `.sln` writer.

use std::fmt::{self, Write};

use super::VsProject;

/// The C++ project type GUID every solution entry carries.
const VC_PROJECT_TYPE: &str = "8BC9CEB8-8B4A-11D0-8D11-00A0C91BC942";

pub(super) fn render(project: &VsProject<'_>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let guid = &project.guid;

    // UTF-8 byte order mark on a line of its own.
    out.push_str("\u{FEFF}\n");
    writeln!(
        out,
        "Microsoft Visual Studio Solution File, Format Version {}",
        project.version.format_version()
    )?;
    writeln!(out, "# Visual Studio {}", project.version.year())?;
    writeln!(
        out,
        "Project(\"{{{VC_PROJECT_TYPE}}}\") = \"{}\", \"{}\", \"{{{guid}}}\"",
        project.config.name(),
        project.file_name(project.version.project_extension()),
    )?;
    out.push_str("EndProject\n");
    out.push_str("Global\n");

    out.push_str("\tGlobalSection(SolutionConfigurationPlatforms) = preSolution\n");
    for (configuration, platform) in project.configuration_pairs() {
        writeln!(out, "\t\t{configuration}|{platform} = {configuration}|{platform}")?;
    }
    out.push_str("\tEndGlobalSection\n");

    out.push_str("\tGlobalSection(ProjectConfigurationPlatforms) = postSolution\n");
    for (configuration, platform) in project.configuration_pairs() {
        let token = format!("{configuration}|{platform}");
        writeln!(out, "\t\t{{{guid}}}.{token}.ActiveCfg = {token}")?;
        writeln!(out, "\t\t{{{guid}}}.{token}.Build.0 = {token}")?;
    }
    out.push_str("\tEndGlobalSection\n");

    out.push_str("\tGlobalSection(SolutionProperties) = preSolution\n");
    out.push_str("\t\tHideSolutionNode = FALSE\n");
    out.push_str("\tEndGlobalSection\n");
    out.push_str("EndGlobal\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::super::tests::{config, emit, model, text};
    use ideforge_core::domain::{IdMode, Ide, Identifier, Platform, ProjectKind};

    #[test]
    fn starts_with_bom_and_version_header() {
        let cfg = config(ProjectKind::Tool, Platform::Windows);
        let sln = text(&emit(Ide::Vs2010, &cfg, &model(&["a.cpp"])), "burgerv10win.sln");
        assert!(sln.starts_with("\u{FEFF}\nMicrosoft Visual Studio Solution File, Format Version 11.00\n# Visual Studio 2010\n"));
        assert!(sln.contains("\"burger\", \"burgerv10win.vcxproj\""));
        assert!(sln.ends_with("EndGlobal\n"));
    }

    #[test]
    fn lists_every_configuration_platform_pair() {
        let cfg = config(ProjectKind::Tool, Platform::Windows);
        let sln = text(&emit(Ide::Vs2005, &cfg, &model(&["a.cpp"])), "burgervc8win.sln");
        let guid = Identifier::derive("burgervc8win", IdMode::NamespaceHash);

        for token in ["Debug|Win32", "Debug|x64", "Release|Win32", "Release|x64"] {
            assert!(sln.contains(&format!("\t\t{token} = {token}\n")));
            assert!(sln.contains(&format!("\t\t{{{guid}}}.{token}.ActiveCfg = {token}\n")));
            assert!(sln.contains(&format!("\t\t{{{guid}}}.{token}.Build.0 = {token}\n")));
        }
        let debug = sln.find("Debug|x64 =").unwrap();
        let release = sln.find("Release|Win32 =").unwrap();
        assert!(debug < release);
    }

    #[test]
    fn console_platform_uses_its_vs_name() {
        let cfg = config(ProjectKind::Game, Platform::Xbox360);
        let sln = text(&emit(Ide::Vs2008, &cfg, &model(&["a.cpp"])), "burgervc9x36.sln");
        assert!(sln.contains("Release|Xbox 360 = Release|Xbox 360"));
        assert!(!sln.contains("Win32"));
    }
}
