//! Deterministic identifiers for files, groups and synthetic project objects.
//!
//! An [`Identifier`] is a pure function of a semantic key string and an
//! [`IdMode`]. No state is kept between calls, so the same key yields the
//! same identifier within a run, across runs and across machines.
//!
//! # Modes
//!
//! | mode | derivation | shape |
//! |---|---|---|
//! | [`IdMode::NamespaceHash`] | RFC 4122 v3 over the DNS namespace | `8-4-4-4-12` uppercase hex |
//! | [`IdMode::TruncatedContentHash`] | MD5 of the key with `/` → `\`, first 96 bits | 24 uppercase hex digits |
//!
//! Collisions are neither detected nor retried. For the truncated mode the
//! birthday bound puts a 50% collision chance at roughly 2^48 distinct keys,
//! far beyond any realistic project.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::source_entry::SourceEntry, error::DomainError, paths, value_objects::FileCategory,
};

/// Number of hex digits kept from the MD5 digest (96 bits).
const TRUNCATED_HEX_LEN: usize = 24;

// ── IdMode ───────────────────────────────────────────────────────────────────

/// How a target family turns semantic keys into identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdMode {
    NamespaceHash,
    TruncatedContentHash,
}

impl IdMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NamespaceHash => "namespace",
            Self::TruncatedContentHash => "truncated",
        }
    }
}

impl fmt::Display for IdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "namespace" | "namespace-hash" | "uuid" => Ok(Self::NamespaceHash),
            "truncated" | "truncated-content-hash" | "md5" => Ok(Self::TruncatedContentHash),
            other => Err(DomainError::UnknownIdMode {
                name: other.to_string(),
            }),
        }
    }
}

// ── Identifier ───────────────────────────────────────────────────────────────

/// Opaque uppercase hex token. Ordering is plain string order, which is the
/// order identifier-keyed sections are written in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Derive the identifier for `key` under `mode`.
    pub fn derive(key: &str, mode: IdMode) -> Self {
        match mode {
            IdMode::NamespaceHash => {
                let id = Uuid::new_v3(&Uuid::NAMESPACE_DNS, key.as_bytes());
                Self(id.hyphenated().to_string().to_ascii_uppercase())
            }
            IdMode::TruncatedContentHash => {
                let digest = Md5::digest(paths::to_back_slash(key).as_bytes());
                let mut hex = hex::encode_upper(digest);
                hex.truncate(TRUNCATED_HEX_LEN);
                Self(hex)
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── SemanticKey ──────────────────────────────────────────────────────────────

/// The string an identifier is derived from.
///
/// Constructors fix the key shape for each kind of entity so two emitters
/// asking for "the file x.cpp" always hash the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticKey(String);

impl SemanticKey {
    /// A file, keyed by its forward-slash relative path.
    pub fn file(relative_path: &str) -> Self {
        Self(paths::to_forward_slash(relative_path))
    }

    /// A file in a target-specific role (e.g. `a.cpp:Sources`).
    pub fn file_role(relative_path: &str, role: &str) -> Self {
        Self(format!("{}:{}", paths::to_forward_slash(relative_path), role))
    }

    /// A group, scoped by a literal the target chooses.
    pub fn group(scope: &str, group_path: &str) -> Self {
        Self(format!("{scope}{group_path}"))
    }

    /// A project-level object that has no file behind it.
    pub fn synthetic(role: &str, qualifier: &str) -> Self {
        Self(format!("{role}{qualifier}"))
    }

    /// Any other literal key (framework names, config file names, stems).
    pub fn literal(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SemanticKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── IdentifierResolver ───────────────────────────────────────────────────────

/// A source entry with the identifiers one target assigned to it.
#[derive(Debug, Clone)]
pub struct IdentifiedEntry {
    pub entry: Arc<SourceEntry>,
    pub identifier: Identifier,
    /// Present when the target has a role for the entry's category.
    pub category_identifier: Option<Identifier>,
}

/// Resolves semantic keys in one fixed mode.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierResolver {
    mode: IdMode,
}

impl IdentifierResolver {
    pub const fn new(mode: IdMode) -> Self {
        Self { mode }
    }

    pub const fn mode(&self) -> IdMode {
        self.mode
    }

    pub fn resolve(&self, key: &SemanticKey) -> Identifier {
        Identifier::derive(key.as_str(), self.mode)
    }

    /// Attach the file identifier and, if `role_for` yields a role for the
    /// entry's category, the category identifier.
    pub fn annotate<F>(&self, entry: &Arc<SourceEntry>, role_for: F) -> IdentifiedEntry
    where
        F: Fn(FileCategory) -> Option<&'static str>,
    {
        let path = entry.relative_path();
        IdentifiedEntry {
            entry: Arc::clone(entry),
            identifier: self.resolve(&SemanticKey::file(path)),
            category_identifier: role_for(entry.category())
                .map(|role| self.resolve(&SemanticKey::file_role(path, role))),
        }
    }
}
