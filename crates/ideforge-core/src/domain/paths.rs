//! Path normalization shared by discovery, grouping and every emitter.
//!
//! All functions are total string transforms. Nothing here touches the
//! filesystem, so catalog ordering and group keys are identical on every host.

use std::cmp::Ordering;

/// Replace every `\` with `/`.
pub fn to_forward_slash(path: &str) -> String {
    path.replace('\\', "/")
}

/// Replace every `/` with `\`.
pub fn to_back_slash(path: &str) -> String {
    path.replace('/', "\\")
}

/// Like [`to_back_slash`], but guarantees a single trailing `\` on non-empty
/// input.
pub fn to_back_slash_with_end(path: &str) -> String {
    let mut out = to_back_slash(path);
    if !out.is_empty() && !out.ends_with('\\') {
        out.push('\\');
    }
    out
}

/// Remove leading `../` and `./` segments (either separator) until none remain.
///
/// A path made only of relative segments, such as `..` or `./..`, strips to `""`.
pub fn strip_relative_prefixes(path: &str) -> &str {
    let mut rest = path;
    loop {
        let next = ["../", "..\\", "./", ".\\"]
            .iter()
            .find_map(|prefix| rest.strip_prefix(prefix));
        match next {
            Some(stripped) => rest = stripped,
            None if rest == "." || rest == ".." => return "",
            None => return rest,
        }
    }
}

/// Text before the last separator, or `""` when there is none.
///
/// A backslash takes precedence: if the path contains any `\`, the split
/// happens at the last `\` even when a `/` appears after it.
pub fn parent_group_key(relative_path: &str) -> &str {
    if let Some(idx) = relative_path.rfind('\\') {
        return &relative_path[..idx];
    }
    relative_path
        .rfind('/')
        .map_or("", |idx| &relative_path[..idx])
}

/// The group a file belongs to: its parent directory with relative prefixes
/// removed, using forward slashes.
pub fn group_key(relative_path: &str) -> String {
    to_forward_slash(strip_relative_prefixes(parent_group_key(relative_path)))
}

/// The last path segment.
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// The single ordering used for catalogs and per-group file lists.
///
/// Compares byte-wise after converting `\` to `/`, so `a/b.h` and `a\b.h`
/// sort identically.
pub fn compare_normalized(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(normalize_byte);
    let b = b.bytes().map(normalize_byte);
    a.cmp(b)
}

fn normalize_byte(b: u8) -> u8 {
    if b == b'\\' { b'/' } else { b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_conversion() {
        assert_eq!(to_forward_slash("a\\b\\c.h"), "a/b/c.h");
        assert_eq!(to_back_slash("a/b/c.h"), "a\\b\\c.h");
        assert_eq!(to_back_slash_with_end("$(sdks)/windows/bin"), "$(sdks)\\windows\\bin\\");
        assert_eq!(to_back_slash_with_end("bin/"), "bin\\");
        assert_eq!(to_back_slash_with_end(""), "");
    }

    #[test]
    fn strips_all_leading_relative_segments() {
        assert_eq!(strip_relative_prefixes("../../src/core"), "src/core");
        assert_eq!(strip_relative_prefixes("./src"), "src");
        assert_eq!(strip_relative_prefixes(".\\..\\src"), "src");
        assert_eq!(strip_relative_prefixes("src/./x"), "src/./x");
        assert_eq!(strip_relative_prefixes(".."), "");
        assert_eq!(strip_relative_prefixes("."), "");
        assert_eq!(strip_relative_prefixes("../.."), "");
        assert_eq!(strip_relative_prefixes("..foo/x"), "..foo/x");
        assert_eq!(strip_relative_prefixes(""), "");
    }

    #[test]
    fn parent_key_prefers_backslash() {
        assert_eq!(parent_group_key("a/b/c.cpp"), "a/b");
        assert_eq!(parent_group_key("a\\b\\c.cpp"), "a\\b");
        assert_eq!(parent_group_key("a\\b/c.cpp"), "a");
        assert_eq!(parent_group_key("c.cpp"), "");
    }

    #[test]
    fn group_key_normalizes() {
        assert_eq!(group_key("../src/core/a.cpp"), "src/core");
        assert_eq!(group_key("./a.cpp"), "");
        assert_eq!(group_key("a.cpp"), "");
        assert_eq!(group_key("core/a.cpp"), "core");
        assert_eq!(group_key("../up.cpp"), "");
        assert_eq!(group_key("..\\..\\up.cpp"), "");
    }

    #[test]
    fn basename_handles_both_separators() {
        assert_eq!(basename("a/b/c.h"), "c.h");
        assert_eq!(basename("a\\c.h"), "c.h");
        assert_eq!(basename("c.h"), "c.h");
    }

    #[test]
    fn comparator_ignores_separator_style() {
        assert_eq!(compare_normalized("a/b.h", "a\\b.h"), Ordering::Equal);
        assert_eq!(compare_normalized("a.cpp", "b.h"), Ordering::Less);
        // '/' (0x2F) sorts after '.' (0x2E)
        assert_eq!(compare_normalized("a/x.h", "a.h"), Ordering::Greater);
    }
}
