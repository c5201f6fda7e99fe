//! Domain value objects: Ide, Platform, ProjectKind, FileCategory.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO lookup data. Short codes, Visual Studio platform names and
//! the extension table live in `capabilities.rs`. This file only defines the
//! closed variant sets, their canonical spellings and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm, the `ALL` entry and the `FromStr` arm here
//! 3. Add a registry entry in `capabilities.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Ide ──────────────────────────────────────────────────────────────────────

/// An IDE or build tool a project file can be generated for.
///
/// Every variant is recognized. Whether a generator exists for it depends on
/// which emitters are registered, so asking for an unsupported target is a
/// normal, reportable case rather than a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ide {
    Xcode3,
    Xcode4,
    Xcode5,
    Vs2003,
    Vs2005,
    Vs2008,
    Vs2010,
    Vs2012,
    Vs2013,
    CodeBlocks,
    Watcom,
    CodeWarrior,
}

impl Ide {
    pub const ALL: &'static [Ide] = &[
        Self::Xcode3,
        Self::Xcode4,
        Self::Xcode5,
        Self::Vs2003,
        Self::Vs2005,
        Self::Vs2008,
        Self::Vs2010,
        Self::Vs2012,
        Self::Vs2013,
        Self::CodeBlocks,
        Self::Watcom,
        Self::CodeWarrior,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Xcode3 => "xcode3",
            Self::Xcode4 => "xcode4",
            Self::Xcode5 => "xcode5",
            Self::Vs2003 => "vs2003",
            Self::Vs2005 => "vs2005",
            Self::Vs2008 => "vs2008",
            Self::Vs2010 => "vs2010",
            Self::Vs2012 => "vs2012",
            Self::Vs2013 => "vs2013",
            Self::CodeBlocks => "codeblocks",
            Self::Watcom => "watcom",
            Self::CodeWarrior => "codewarrior",
        }
    }

    /// Xcode generations share one emitter and one platform default.
    pub const fn is_xcode(self) -> bool {
        matches!(self, Self::Xcode3 | Self::Xcode4 | Self::Xcode5)
    }
}

impl fmt::Display for Ide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ide {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xcode3" => Ok(Self::Xcode3),
            "xcode4" => Ok(Self::Xcode4),
            "xcode5" => Ok(Self::Xcode5),
            "vs2003" => Ok(Self::Vs2003),
            "vs2005" => Ok(Self::Vs2005),
            "vs2008" => Ok(Self::Vs2008),
            "vs2010" => Ok(Self::Vs2010),
            "vs2012" => Ok(Self::Vs2012),
            "vs2013" => Ok(Self::Vs2013),
            "codeblocks" | "cb" => Ok(Self::CodeBlocks),
            "watcom" => Ok(Self::Watcom),
            "codewarrior" | "cw" => Ok(Self::CodeWarrior),
            other => Err(DomainError::UnknownIde {
                name: other.to_string(),
            }),
        }
    }
}

// ── Platform ─────────────────────────────────────────────────────────────────

/// The platform the generated project builds for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    MacOsx,
    Linux,
    Ps3,
    Ps4,
    Xbox,
    Xbox360,
    XboxOne,
    Shield,
    Ios,
    Mac,
    MsDos,
    BeOs,
    Ouya,
    Android,
}

impl Platform {
    pub const ALL: &'static [Platform] = &[
        Self::Windows,
        Self::MacOsx,
        Self::Linux,
        Self::Ps3,
        Self::Ps4,
        Self::Xbox,
        Self::Xbox360,
        Self::XboxOne,
        Self::Shield,
        Self::Ios,
        Self::Mac,
        Self::MsDos,
        Self::BeOs,
        Self::Ouya,
        Self::Android,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOsx => "macosx",
            Self::Linux => "linux",
            Self::Ps3 => "ps3",
            Self::Ps4 => "ps4",
            Self::Xbox => "xbox",
            Self::Xbox360 => "xbox360",
            Self::XboxOne => "xboxone",
            Self::Shield => "shield",
            Self::Ios => "ios",
            Self::Mac => "mac",
            Self::MsDos => "msdos",
            Self::BeOs => "beos",
            Self::Ouya => "ouya",
            Self::Android => "android",
        }
    }

    /// Apple desktop platforms, where CodeWarrior uses its 10.x code.
    pub const fn is_mac(self) -> bool {
        matches!(self, Self::MacOsx | Self::Mac)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win" | "win32" => Ok(Self::Windows),
            "macosx" | "osx" => Ok(Self::MacOsx),
            "linux" => Ok(Self::Linux),
            "ps3" => Ok(Self::Ps3),
            "ps4" => Ok(Self::Ps4),
            "xbox" => Ok(Self::Xbox),
            "xbox360" => Ok(Self::Xbox360),
            "xboxone" => Ok(Self::XboxOne),
            "shield" => Ok(Self::Shield),
            "ios" => Ok(Self::Ios),
            "mac" => Ok(Self::Mac),
            "msdos" | "dos" => Ok(Self::MsDos),
            "beos" => Ok(Self::BeOs),
            "ouya" => Ok(Self::Ouya),
            "android" => Ok(Self::Android),
            other => Err(DomainError::UnknownPlatform {
                name: other.to_string(),
            }),
        }
    }
}

// ── ProjectKind ──────────────────────────────────────────────────────────────

/// What the project produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Library,
    Tool,
    Game,
}

impl ProjectKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Tool => "tool",
            Self::Game => "game",
        }
    }

    pub const fn is_library(self) -> bool {
        matches!(self, Self::Library)
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "library" | "lib" => Ok(Self::Library),
            "tool" | "app" | "application" => Ok(Self::Tool),
            "game" => Ok(Self::Game),
            other => Err(DomainError::UnknownKind {
                name: other.to_string(),
            }),
        }
    }
}

// ── FileCategory ─────────────────────────────────────────────────────────────

/// Classification of a discovered source file, derived from its extension.
///
/// Files whose extension has no entry in `capabilities::EXTENSION_TABLE`
/// never become catalog entries, so there is no "other" variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileCategory {
    Header,
    TranslationUnit,
    WindowsResource,
    MacResource,
    Shader,
}

impl FileCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::TranslationUnit => "translation-unit",
            Self::WindowsResource => "windows-resource",
            Self::MacResource => "mac-resource",
            Self::Shader => "shader",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
