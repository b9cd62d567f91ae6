//! `<$dir:PATTERN$>` resolution.
//!
//! The pattern is a shell-style glob relative to the expander's base
//! directory. `*` does not cross `/`, `**` matches any number of directories,
//! and hidden files only match when the pattern spells out the leading dot.
//! Only regular files are included. Matches come back in the `glob` crate's
//! order, which is sorted within each directory level.

use super::error::DirectiveError;
use super::orchestrator::Expander;
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Expand every file matching `pattern` and join the results with newlines.
///
/// A file that fails to read is replaced by a
/// [`DirectiveError::DirectoryReadFailure`] marker; the remaining files still
/// expand.
pub(crate) fn resolve(
    expander: &Expander,
    pattern: &str,
    depth: u32,
    errors: &mut Vec<DirectiveError>,
) -> Result<String, DirectiveError> {
    if depth == 0 {
        return Err(DirectiveError::DepthExceeded);
    }

    let files = matching_files(expander.base_dir(), pattern).map_err(|reason| {
        DirectiveError::DirectoryReadFailure {
            pattern: pattern.to_string(),
            reason,
        }
    })?;

    if files.is_empty() {
        return Err(DirectiveError::NoMatchingFiles {
            pattern: pattern.to_string(),
        });
    }

    debug!(pattern, count = files.len(), depth, "including directory");

    let mut sections = Vec::with_capacity(files.len());
    for path in &files {
        match include_file(expander, path, depth, errors) {
            Ok(section) => sections.push(section),
            Err(reason) => {
                let err = DirectiveError::DirectoryReadFailure {
                    pattern: pattern.to_string(),
                    reason,
                };
                warn!(path = %path.display(), "{}", err);
                sections.push(err.to_string());
                errors.push(err);
            }
        }
    }

    Ok(sections.join("\n"))
}

/// Read, expand, and optionally prefix one matched file.
fn include_file(
    expander: &Expander,
    path: &Path,
    depth: u32,
    errors: &mut Vec<DirectiveError>,
) -> Result<String, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let expanded = expander.expand_into(&content, depth - 1, errors);

    Ok(match expander.file_delimiter() {
        Some(delimiter) => {
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy())
                .unwrap_or_default();
            format!("{}\n{}", delimiter.render(&filename), expanded)
        }
        None => expanded,
    })
}

/// List the regular files matching `pattern` under `base_dir`.
///
/// The base directory is escaped so glob metacharacters in it are taken
/// literally. Returns the pattern error message if `pattern` is not a valid
/// glob.
pub(crate) fn matching_files(base_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, String> {
    let full_pattern = if Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        let base = Pattern::escape(&base_dir.to_string_lossy());
        format!("{}/{}", base.trim_end_matches('/'), pattern)
    };

    let entries = glob::glob_with(&full_pattern, MATCH_OPTIONS).map_err(|e| e.to_string())?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => debug!(error = %e, "skipping unreadable glob entry"),
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::FileDelimiter;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir_all(docs.join("nested")).unwrap();
        fs::write(docs.join("a.txt"), "A").unwrap();
        fs::write(docs.join("b.txt"), "B").unwrap();
        fs::write(docs.join("c.md"), "C").unwrap();
        fs::write(docs.join(".hidden.txt"), "H").unwrap();
        fs::write(docs.join("nested").join("d.txt"), "D").unwrap();
        dir
    }

    #[test]
    fn test_matching_files_sorted_and_files_only() {
        let dir = fixture();
        let files = matching_files(dir.path(), "docs/*").unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        // `nested` is a directory and `.hidden.txt` needs a literal dot.
        assert_eq!(names, vec!["a.txt", "b.txt", "c.md"]);
    }

    #[test]
    fn test_matching_files_hidden_with_literal_dot() {
        let dir = fixture();
        let files = matching_files(dir.path(), "docs/.*.txt").unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_matching_files_recursive() {
        let dir = fixture();
        let files = matching_files(dir.path(), "docs/**/*.txt").unwrap();
        assert!(files.iter().any(|p| p.ends_with("nested/d.txt")));
        assert!(files.iter().any(|p| p.ends_with("docs/a.txt")));
    }

    #[test]
    fn test_invalid_pattern() {
        let dir = fixture();
        assert!(matching_files(dir.path(), "docs/[").is_err());

        let expander = Expander::new(dir.path());
        let err = resolve(&expander, "docs/[", 5, &mut Vec::new()).unwrap_err();
        match err {
            DirectiveError::DirectoryReadFailure { pattern, .. } => assert_eq!(pattern, "docs/["),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_base_dir_with_glob_metacharacters() {
        let outer = TempDir::new().unwrap();
        let base = outer.path().join("proj[1]");
        fs::create_dir(&base).unwrap();
        fs::write(base.join("x.txt"), "X").unwrap();

        let files = matching_files(&base, "*.txt").unwrap();
        assert_eq!(files, vec![base.join("x.txt")]);
    }

    #[test]
    fn test_concatenates_with_newlines() {
        let dir = fixture();
        let expander = Expander::new(dir.path());
        let out = resolve(&expander, "docs/*.txt", 5, &mut Vec::new()).unwrap();
        assert_eq!(out, "A\nB");
    }

    #[test]
    fn test_delimiter_prefixes_each_file() {
        let dir = fixture();
        let expander = Expander::new(dir.path())
            .with_file_delimiter(FileDelimiter::parse("--- {filename} ---").unwrap());
        let out = resolve(&expander, "docs/*.txt", 5, &mut Vec::new()).unwrap();
        assert_eq!(out, "--- a.txt ---\nA\n--- b.txt ---\nB");
    }

    #[test]
    fn test_no_match() {
        let dir = fixture();
        let expander = Expander::new(dir.path());
        let err = resolve(&expander, "nomatch/*.xyz", 5, &mut Vec::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[ERROR: No files found matching nomatch/*.xyz]"
        );
    }

    #[test]
    fn test_zero_depth() {
        let dir = fixture();
        let expander = Expander::new(dir.path());
        let err = resolve(&expander, "docs/*.txt", 0, &mut Vec::new()).unwrap_err();
        assert_eq!(err, DirectiveError::DepthExceeded);
    }

    #[test]
    fn test_unreadable_file_is_reported_inline() {
        let dir = fixture();
        // Invalid UTF-8 cannot be read as text.
        fs::write(dir.path().join("docs").join("bin.txt"), [0xff, 0xfe, 0x00]).unwrap();
        let expander = Expander::new(dir.path());

        let mut errors = Vec::new();
        let out = resolve(&expander, "docs/*.txt", 5, &mut errors).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "A");
        assert_eq!(lines[1], "B");
        assert!(lines[2].starts_with("[ERROR: Failed to process directory docs/*.txt: "));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_included_files_are_expanded() {
        let dir = fixture();
        fs::write(dir.path().join("docs").join("z.txt"), "Z<$docs/c.md$>").unwrap();
        let expander = Expander::new(dir.path());

        let out = resolve(&expander, "docs/z.txt", 2, &mut Vec::new()).unwrap();
        assert_eq!(out, "ZC");

        let mut errors = Vec::new();
        let out = resolve(&expander, "docs/z.txt", 1, &mut errors).unwrap();
        assert_eq!(out, "Z[ERROR: Maximum inclusion depth reached]");
        assert_eq!(errors, vec![DirectiveError::DepthExceeded]);
    }
}
