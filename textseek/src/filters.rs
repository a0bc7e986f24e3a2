//! Path filters used by the document loader.
use glob::{MatchOptions, Pattern};
use std::path::Path;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Converts a path to the forward-slash form globs are written in
pub fn normalized(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Checks whether `relative` is selected by `pattern`.
///
/// A pattern without a `/` also matches against the bare file name, so `*.txt`
/// selects text files at any depth.
pub fn matches_file_pattern(relative: &Path, pattern: &Pattern) -> bool {
    if pattern.matches_with(&normalized(relative), MATCH_OPTIONS) {
        return true;
    }
    if !pattern.as_str().contains('/') {
        if let Some(name) = relative.file_name() {
            return pattern.matches_with(&name.to_string_lossy(), MATCH_OPTIONS);
        }
    }
    false
}

/// Checks if a file should be ignored based on ignore patterns
pub fn should_ignore(relative: &Path, ignore_patterns: &[Pattern]) -> bool {
    let path_str = normalized(relative);

    // Always ignore target/ and .git/ directories
    if path_str.starts_with("target/")
        || path_str.starts_with(".git/")
        || path_str.contains("/target/")
        || path_str.contains("/.git/")
    {
        return true;
    }

    ignore_patterns
        .iter()
        .any(|pattern| pattern.matches_with(&path_str, MATCH_OPTIONS))
}

/// Checks if a file is likely to be binary
pub fn is_likely_binary(path: &Path) -> bool {
    const BINARY_EXTENSIONS: &[&str] = &[
        "exe", "dll", "so", "dylib", "bin", "obj", "o", "class", "jar", "war", "ear", "png", "jpg",
        "jpeg", "gif", "bmp", "ico", "pdf", "doc", "docx", "xls", "xlsx", "zip", "tar", "gz", "7z",
        "rar",
    ];

    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            BINARY_EXTENSIONS
                .iter()
                .any(|bin_ext| bin_ext.eq_ignore_ascii_case(ext))
        })
}

/// Determines if a file becomes a document
pub fn should_include_file(
    relative: &Path,
    file_pattern: &Pattern,
    ignore_patterns: &[Pattern],
) -> bool {
    !is_likely_binary(relative)
        && matches_file_pattern(relative, file_pattern)
        && !should_ignore(relative, ignore_patterns)
}
