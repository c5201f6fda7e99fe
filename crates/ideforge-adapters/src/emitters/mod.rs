//! Target emitters.
//!
//! Each emitter turns one [`ProjectModel`](ideforge_core::domain::ProjectModel)
//! into the files an IDE expects. Emitters are pure: they return
//! [`Artifact`](ideforge_core::application::Artifact)s and the generate
//! service writes them.
//!
//! | emitter | targets | identifiers |
//! |---|---|---|
//! | [`VisualStudioEmitter`] | vs2005, vs2008, vs2010 | namespace hash |
//! | [`XcodeEmitter`] | xcode3, xcode4, xcode5 | truncated content hash |
//! | [`CodeWarriorEmitter`] | codewarrior | none |

pub mod codewarrior;
pub mod visual_studio;
pub mod xcode;

use std::borrow::Cow;
use std::fmt;

use ideforge_core::{
    application::{ApplicationError, TargetEmitter},
    domain::{FileCategory, GroupNode, Ide, Platform, SourceEntry},
    error::ForgeError,
};

pub use codewarrior::CodeWarriorEmitter;
pub use visual_studio::VisualStudioEmitter;
pub use xcode::XcodeEmitter;

/// Every emitter that ships with ideforge.
pub fn builtin_emitters() -> Vec<Box<dyn TargetEmitter>> {
    vec![
        Box::new(VisualStudioEmitter::new()),
        Box::new(XcodeEmitter::new()),
        Box::new(CodeWarriorEmitter::new()),
    ]
}

/// Escape the five XML special characters.
pub(crate) fn xml_escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

pub(crate) fn tabs(depth: usize) -> String {
    "\t".repeat(depth)
}

/// Map a formatting failure while rendering into a per-target error.
pub(crate) fn emission_failed(ide: Ide) -> impl Fn(fmt::Error) -> ForgeError {
    move |e| {
        ApplicationError::EmissionFailed {
            ide,
            reason: e.to_string(),
        }
        .into()
    }
}

/// The categories the Windows-flavoured formats list as project files.
///
/// Resource scripts only belong in projects that build for Windows.
pub(crate) fn windows_categories(platform: Platform) -> &'static [FileCategory] {
    if platform == Platform::Windows {
        &[
            FileCategory::Header,
            FileCategory::TranslationUnit,
            FileCategory::WindowsResource,
        ]
    } else {
        &[FileCategory::Header, FileCategory::TranslationUnit]
    }
}

/// True if `node` or any node below it owns an entry that passes `keep`.
pub(crate) fn subtree_contains<F>(node: &GroupNode, keep: &F) -> bool
where
    F: Fn(&SourceEntry) -> bool,
{
    node.entries.iter().any(|e| keep(e)) || node.children().any(|c| subtree_contains(c, keep))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_leaves_plain_text_borrowed() {
        assert!(matches!(xml_escape("core\\a.cpp"), Cow::Borrowed(_)));
    }

    #[test]
    fn escape_replaces_specials() {
        assert_eq!(
            xml_escape(r#"a<b>&"c"'d'"#),
            "a&lt;b&gt;&amp;&quot;c&quot;&apos;d&apos;"
        );
    }

    #[test]
    fn builtin_emitters_cover_supported_targets() {
        let emitters = builtin_emitters();
        let supported: Vec<Ide> = Ide::ALL
            .iter()
            .copied()
            .filter(|ide| emitters.iter().any(|e| e.handles(*ide)))
            .collect();
        assert_eq!(
            supported,
            vec![
                Ide::Xcode3,
                Ide::Xcode4,
                Ide::Xcode5,
                Ide::Vs2005,
                Ide::Vs2008,
                Ide::Vs2010,
                Ide::CodeWarrior
            ]
        );
    }

    #[test]
    fn no_two_emitters_claim_the_same_target() {
        let emitters = builtin_emitters();
        for ide in Ide::ALL {
            let claims = emitters.iter().filter(|e| e.handles(*ide)).count();
            assert!(claims <= 1, "{ide} claimed by {claims} emitters");
        }
    }
}
