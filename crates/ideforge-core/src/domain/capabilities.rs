//! Static lookup tables for IDE codes, platform codes, build configuration
//! codes and source file classification.
//!
//! # Design Rationale
//!
//! Every short code that ends up in a generated file name or project file is
//! described exactly once here, keyed by a closed enum. Emitters never match
//! on strings to find a code; they call the lookup functions below. All
//! lookups are O(n) scans over small static slices.
//!
//! # Adding a New Platform
//!
//! 1. Add a variant to `Platform` in `value_objects.rs`
//! 2. Add one [`PlatformDef`] entry to [`PLATFORM_REGISTRY`]
//! 3. That's it — file names and Visual Studio platform lists derive from here

use crate::domain::value_objects::{FileCategory, Ide, Platform};

// ── IDE definitions ──────────────────────────────────────────────────────────

/// Describes how one IDE is named in generated artifacts.
#[derive(Debug, Clone, Copy)]
pub struct IdeDef {
    /// The IDE this definition describes.
    pub ide: Ide,

    /// Three-letter code embedded in project file names.
    pub code: &'static str,

    /// Code used instead of `code` when building for a Mac platform.
    pub mac_code: Option<&'static str>,

    /// Human-readable name for listings.
    pub display_name: &'static str,
}

/// Single source of truth for IDE codes.
pub static IDE_REGISTRY: &[IdeDef] = &[
    IdeDef {
        ide: Ide::Xcode3,
        code: "xc3",
        mac_code: None,
        display_name: "Xcode 3",
    },
    IdeDef {
        ide: Ide::Xcode4,
        code: "xc4",
        mac_code: None,
        display_name: "Xcode 4",
    },
    IdeDef {
        ide: Ide::Xcode5,
        code: "xc5",
        mac_code: None,
        display_name: "Xcode 5",
    },
    IdeDef {
        ide: Ide::Vs2003,
        code: "vc7",
        mac_code: None,
        display_name: "Visual Studio 2003",
    },
    IdeDef {
        ide: Ide::Vs2005,
        code: "vc8",
        mac_code: None,
        display_name: "Visual Studio 2005",
    },
    IdeDef {
        ide: Ide::Vs2008,
        code: "vc9",
        mac_code: None,
        display_name: "Visual Studio 2008",
    },
    IdeDef {
        ide: Ide::Vs2010,
        code: "v10",
        mac_code: None,
        display_name: "Visual Studio 2010",
    },
    IdeDef {
        ide: Ide::Vs2012,
        code: "v11",
        mac_code: None,
        display_name: "Visual Studio 2012",
    },
    IdeDef {
        ide: Ide::Vs2013,
        code: "v12",
        mac_code: None,
        display_name: "Visual Studio 2013",
    },
    IdeDef {
        ide: Ide::CodeBlocks,
        code: "cdb",
        mac_code: None,
        display_name: "Code::Blocks",
    },
    IdeDef {
        ide: Ide::Watcom,
        code: "wat",
        mac_code: None,
        display_name: "Open Watcom",
    },
    IdeDef {
        ide: Ide::CodeWarrior,
        code: "cw9",
        mac_code: Some("c10"),
        display_name: "CodeWarrior",
    },
];

// ── Platform definitions ─────────────────────────────────────────────────────

/// Describes how one platform is named in generated artifacts.
#[derive(Debug, Clone, Copy)]
pub struct PlatformDef {
    /// The platform this definition describes.
    pub platform: Platform,

    /// Three-letter code embedded in project file names.
    pub code: &'static str,

    /// Platform names as Visual Studio spells them. Empty when Visual Studio
    /// cannot target this platform.
    pub vs_platforms: &'static [&'static str],
}

/// Single source of truth for platform codes.
pub static PLATFORM_REGISTRY: &[PlatformDef] = &[
    PlatformDef {
        platform: Platform::Windows,
        code: "win",
        vs_platforms: &["Win32", "x64"],
    },
    PlatformDef {
        platform: Platform::MacOsx,
        code: "osx",
        vs_platforms: &[],
    },
    PlatformDef {
        platform: Platform::Linux,
        code: "lnx",
        vs_platforms: &[],
    },
    PlatformDef {
        platform: Platform::Ps3,
        code: "ps3",
        vs_platforms: &["PS3"],
    },
    PlatformDef {
        platform: Platform::Ps4,
        code: "ps4",
        vs_platforms: &["ORBIS"],
    },
    PlatformDef {
        platform: Platform::Xbox,
        code: "xbx",
        vs_platforms: &["Xbox"],
    },
    PlatformDef {
        platform: Platform::Xbox360,
        code: "x36",
        vs_platforms: &["Xbox 360"],
    },
    PlatformDef {
        platform: Platform::XboxOne,
        code: "one",
        vs_platforms: &["Xbox ONE"],
    },
    PlatformDef {
        platform: Platform::Shield,
        code: "shi",
        vs_platforms: &["Tegra-Android"],
    },
    PlatformDef {
        platform: Platform::Ios,
        code: "ios",
        vs_platforms: &[],
    },
    PlatformDef {
        platform: Platform::Mac,
        code: "mac",
        vs_platforms: &[],
    },
    PlatformDef {
        platform: Platform::MsDos,
        code: "dos",
        vs_platforms: &[],
    },
    PlatformDef {
        platform: Platform::BeOs,
        code: "bos",
        vs_platforms: &[],
    },
    PlatformDef {
        platform: Platform::Ouya,
        code: "oya",
        vs_platforms: &[],
    },
    PlatformDef {
        platform: Platform::Android,
        code: "and",
        vs_platforms: &["Android"],
    },
];

// ── Build configurations ─────────────────────────────────────────────────────

/// Short codes for well-known build configuration names. Matching is exact
/// (case-sensitive), as the names are also written verbatim into projects.
pub static CONFIGURATION_CODES: &[(&str, &str)] = &[
    ("Debug", "dbg"),
    ("Internal", "int"),
    ("Release", "rel"),
    ("Profile", "pro"),
];

/// Code used for any configuration not listed in [`CONFIGURATION_CODES`].
pub const UNKNOWN_CONFIGURATION_CODE: &str = "unk";

// ── Extension table ──────────────────────────────────────────────────────────

/// Lowercase suffix → category. Checked in order; the first suffix that the
/// lowercase file name ends with wins.
pub static EXTENSION_TABLE: &[(&str, FileCategory)] = &[
    (".c", FileCategory::TranslationUnit),
    (".cpp", FileCategory::TranslationUnit),
    (".hpp", FileCategory::Header),
    (".h", FileCategory::Header),
    (".hh", FileCategory::Header),
    (".i", FileCategory::Header),
    (".inc", FileCategory::Header),
    (".rc", FileCategory::WindowsResource),
    (".r", FileCategory::MacResource),
    (".rsrc", FileCategory::MacResource),
    (".hlsl", FileCategory::Shader),
];

// ── Lookup API ───────────────────────────────────────────────────────────────

/// Find the registry entry for an IDE.
///
/// Every `Ide` variant has an entry, so this only returns `None` if the
/// registry falls out of sync with the enum (caught by tests).
pub fn find_ide(ide: Ide) -> Option<&'static IdeDef> {
    IDE_REGISTRY.iter().find(|d| d.ide == ide)
}

/// Find the registry entry for a platform.
pub fn find_platform(platform: Platform) -> Option<&'static PlatformDef> {
    PLATFORM_REGISTRY.iter().find(|d| d.platform == platform)
}

/// The IDE code to embed in file names when building for `platform`.
pub fn ide_code(ide: Ide, platform: Platform) -> &'static str {
    match find_ide(ide) {
        Some(def) if platform.is_mac() => def.mac_code.unwrap_or(def.code),
        Some(def) => def.code,
        None => "",
    }
}

/// The platform code embedded in file names.
pub fn platform_code(platform: Platform) -> &'static str {
    find_platform(platform).map_or("", |d| d.code)
}

/// Visual Studio platform names for `platform`; empty if unsupported.
pub fn vs_platforms(platform: Platform) -> &'static [&'static str] {
    find_platform(platform).map_or(&[], |d| d.vs_platforms)
}

/// Short code for a build configuration name.
pub fn configuration_code(configuration: &str) -> &'static str {
    CONFIGURATION_CODES
        .iter()
        .find(|(name, _)| *name == configuration)
        .map_or(UNKNOWN_CONFIGURATION_CODE, |(_, code)| code)
}

/// Classify a file name by its lowercase suffix.
///
/// Returns `None` for files the model ignores.
pub fn classify(file_name: &str) -> Option<FileCategory> {
    let lower = file_name.to_ascii_lowercase();
    EXTENSION_TABLE
        .iter()
        .find(|(suffix, _)| lower.ends_with(suffix))
        .map(|(_, category)| *category)
}

/// The project file stem shared by every artifact of one target:
/// project name + IDE code + platform code.
pub fn project_stem(name: &str, ide: Ide, platform: Platform) -> String {
    format!("{}{}{}", name, ide_code(ide, platform), platform_code(platform))
}
