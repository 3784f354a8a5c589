//! Webpack-style tilde-import resolution.
//!
//! A `~` prefix marks a specifier as dependency-relative: `~bootstrap/scss/grid`
//! means "find `bootstrap/scss/grid` under the nearest `node_modules`", not
//! "relative to the importing file". Resolution probes an ordered candidate
//! list per directory level, climbing from the importing file's directory to
//! the filesystem root.
//!
//! Candidate order is normative and mirrors the stylesheet ecosystem's import
//! conventions: explicit file, then implicit extensions, then `_`-prefixed
//! partial forms, then package index files. A direct file always beats its own
//! partial form, and both beat the index fallback.

use std::path::{Path, PathBuf};

/// Extensions probed when a tilde import omits one, in preference order.
pub const STYLESHEET_EXTENSIONS: &[&str] = &["scss", "sass", "css"];

/// Directory name that roots dependency-relative subpaths.
const DEPENDENCY_DIR: &str = "node_modules";

/// File stem of a package's importable index partial.
const INDEX_STEM: &str = "_index";

/// Resolves a tilde-prefixed import specifier to an existing file.
///
/// Only specifiers starting with `~` are eligible; `~/` is excluded (that
/// prefix means "resolve from the project root" by webpack convention, which
/// is someone else's job). Ineligible or unmatched specifiers return `None`,
/// telling the caller to try its next resolution strategy.
///
/// # Example
///
/// ```rust,ignore
/// let file = Path::new("/project/src/app.module.scss");
/// let grid = resolve_tilde_import("~bootstrap/scss/grid", file);
/// // -> Some("/project/node_modules/bootstrap/scss/_grid.scss")
/// ```
pub fn resolve_tilde_import(specifier: &str, importing_file: &Path) -> Option<PathBuf> {
    let subpath = eligible_subpath(specifier)?;
    let candidates = candidate_subpaths(subpath);

    // Climb one directory level at a time, testing every candidate in order
    // at each level. The first existing file wins.
    let start = importing_file.parent()?;
    for dir in start.ancestors() {
        for candidate in &candidates {
            let probe = dir.join(candidate);
            if probe.is_file() {
                return Some(probe);
            }
        }
    }

    None
}

/// Returns the package-relative subpath of an eligible specifier.
fn eligible_subpath(specifier: &str) -> Option<&str> {
    let rest = specifier.strip_prefix('~')?;
    if rest.is_empty() || rest.starts_with('/') {
        return None;
    }
    Some(rest)
}

fn has_recognized_extension(subpath: &str) -> bool {
    STYLESHEET_EXTENSIONS
        .iter()
        .any(|ext| subpath.ends_with(&format!(".{}", ext)))
}

/// Builds the ordered candidate list for one specifier:
/// direct/extension candidates, their partial variants, then index files.
fn candidate_subpaths(subpath: &str) -> Vec<PathBuf> {
    let base = format!("{}/{}", DEPENDENCY_DIR, subpath);

    let directs: Vec<String> = if has_recognized_extension(subpath) {
        vec![base.clone()]
    } else {
        STYLESHEET_EXTENSIONS
            .iter()
            .map(|ext| format!("{}.{}", base, ext))
            .collect()
    };

    let partials: Vec<String> = directs.iter().filter_map(|d| partial_variant(d)).collect();

    let mut candidates = directs;
    candidates.extend(partials);
    for ext in STYLESHEET_EXTENSIONS {
        candidates.push(format!("{}/{}.{}", base, INDEX_STEM, ext));
    }

    candidates.into_iter().map(PathBuf::from).collect()
}

/// The `_`-prefixed sibling of a candidate, unless it is already a partial.
fn partial_variant(candidate: &str) -> Option<String> {
    let (dir, name) = candidate.rsplit_once('/')?;
    if name.starts_with('_') {
        return None;
    }
    Some(format!("{}/_{}", dir, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate_strings(specifier: &str) -> Vec<String> {
        candidate_subpaths(specifier)
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_candidates_without_extension() {
        assert_eq!(
            candidate_strings("bootstrap/scss/grid"),
            vec![
                "node_modules/bootstrap/scss/grid.scss",
                "node_modules/bootstrap/scss/grid.sass",
                "node_modules/bootstrap/scss/grid.css",
                "node_modules/bootstrap/scss/_grid.scss",
                "node_modules/bootstrap/scss/_grid.sass",
                "node_modules/bootstrap/scss/_grid.css",
                "node_modules/bootstrap/scss/grid/_index.scss",
                "node_modules/bootstrap/scss/grid/_index.sass",
                "node_modules/bootstrap/scss/grid/_index.css",
            ]
        );
    }

    #[test]
    fn test_candidates_with_explicit_extension() {
        assert_eq!(
            candidate_strings("bootstrap/scss/grid.scss"),
            vec![
                "node_modules/bootstrap/scss/grid.scss",
                "node_modules/bootstrap/scss/_grid.scss",
                "node_modules/bootstrap/scss/grid.scss/_index.scss",
                "node_modules/bootstrap/scss/grid.scss/_index.sass",
                "node_modules/bootstrap/scss/grid.scss/_index.css",
            ]
        );
    }

    #[test]
    fn test_candidates_for_existing_partial_have_no_partial_variant() {
        assert_eq!(
            candidate_strings("bootstrap/scss/_grid.scss"),
            vec![
                "node_modules/bootstrap/scss/_grid.scss",
                "node_modules/bootstrap/scss/_grid.scss/_index.scss",
                "node_modules/bootstrap/scss/_grid.scss/_index.sass",
                "node_modules/bootstrap/scss/_grid.scss/_index.css",
            ]
        );
    }

    #[test]
    fn test_scoped_package_candidates() {
        let candidates = candidate_strings("@org/pkg/theme");
        assert_eq!(candidates[0], "node_modules/@org/pkg/theme.scss");
        assert_eq!(candidates[3], "node_modules/@org/pkg/_theme.scss");
        assert_eq!(candidates[6], "node_modules/@org/pkg/theme/_index.scss");
    }

    #[test]
    fn test_eligibility() {
        assert_eq!(eligible_subpath("~pkg/file"), Some("pkg/file"));
        assert_eq!(eligible_subpath("pkg/file"), None);
        assert_eq!(eligible_subpath("color.scss"), None);
        assert_eq!(eligible_subpath("~/color.scss"), None);
        assert_eq!(eligible_subpath("~"), None);
    }
}
