use std::path::Path;

/// Extension appended to script identifiers given without one
pub const DEFAULT_EXTENSION: &str = "js";

/// Whether the file name part of `script` carries a non-empty extension.
///
/// Uses `Path::extension`: a dotfile such as `.eslintrc` has no extension
/// and becomes `.eslintrc.js`.
pub fn has_extension(script: &str) -> bool {
    Path::new(script)
        .extension()
        .is_some_and(|ext| !ext.is_empty())
}

/// Append `.<default_extension>` when `script` has no extension of its own.
///
/// A leading dot on `default_extension` is ignored; an empty one leaves the
/// identifier untouched.
pub fn normalize_script(script: &str, default_extension: &str) -> String {
    let extension = default_extension.trim_start_matches('.');
    if extension.is_empty() || has_extension(script) {
        script.to_string()
    } else {
        format!("{script}.{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_default_extension() {
        assert_eq!(normalize_script("script", "js"), "script.js");
        assert_eq!(normalize_script("lib/tool", "js"), "lib/tool.js");
        assert_eq!(normalize_script("script", ".mjs"), "script.mjs");
    }

    #[test]
    fn test_keeps_existing_extension() {
        assert_eq!(normalize_script("script.js", "js"), "script.js");
        assert_eq!(normalize_script("script.cjs", "js"), "script.cjs");
        assert_eq!(normalize_script("dir.v2/run.ts", "js"), "dir.v2/run.ts");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for script in ["script", "a/b", "x.js", "trailing."] {
            let once = normalize_script(script, "js");
            assert_eq!(normalize_script(&once, "js"), once);
        }
    }

    #[test]
    fn test_dot_edge_cases() {
        // A trailing dot is an empty extension
        assert_eq!(normalize_script("trailing.", "js"), "trailing..js");
        // A dot only in a parent directory does not count
        assert_eq!(normalize_script("dir.v2/run", "js"), "dir.v2/run.js");
        assert!(!has_extension(".hidden"));
        assert_eq!(normalize_script(".eslintrc", "js"), ".eslintrc.js");
    }

    #[test]
    fn test_empty_default_extension() {
        assert_eq!(normalize_script("script", ""), "script");
    }
}
