//! Compiler-style path-alias resolution.
//!
//! A [`PathAliases`] table is built from a base directory plus prefix
//! remappings of the `{"@styles/*": ["src/styles/*"]}` shape. Lookup matches
//! the most specific pattern (exact entries beat wildcards, longer wildcard
//! prefixes beat shorter ones), substitutes the starred portion into each
//! target in order, and probes the filesystem for the result — as written,
//! then with each implicit stylesheet extension appended.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::AliasError;

/// Extensions appended when an alias target omits one, in probe order.
const ALIAS_EXTENSIONS: &[&str] = &["sass", "scss"];

#[derive(Debug, Clone)]
enum AliasPattern {
    Exact(String),
    Wildcard { prefix: String, suffix: String },
}

#[derive(Debug, Clone)]
struct AliasMapping {
    pattern: AliasPattern,
    targets: Vec<String>,
}

/// Path-remapping table derived from a compiler's base-directory and
/// prefix-mapping configuration.
///
/// Construction validates the table; lookup is infallible and returns the
/// first mapped path that exists on disk.
#[derive(Debug, Clone)]
pub struct PathAliases {
    base_dir: PathBuf,
    mappings: Vec<AliasMapping>,
}

impl PathAliases {
    /// Builds an alias table rooted at `base_dir`.
    ///
    /// Each mapping pairs a pattern (at most one `*`) with substitution
    /// targets relative to `base_dir` (each at most one `*`, and only when
    /// the pattern has one).
    ///
    /// # Errors
    ///
    /// Returns [`AliasError`] when a pattern or target is malformed.
    pub fn new<P: AsRef<Path>>(
        base_dir: P,
        mappings: &[(String, Vec<String>)],
    ) -> Result<Self, AliasError> {
        let mut parsed = Vec::with_capacity(mappings.len());
        for (pattern, targets) in mappings {
            parsed.push(parse_mapping(pattern, targets)?);
        }

        // Most specific first: exact entries, then wildcards by descending
        // prefix length.
        parsed.sort_by_key(|mapping| match &mapping.pattern {
            AliasPattern::Exact(_) => (0usize, 0usize),
            AliasPattern::Wildcard { prefix, .. } => (1, usize::MAX - prefix.len()),
        });

        Ok(Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            mappings: parsed,
        })
    }

    /// Resolves `specifier` through the table, returning the first mapped
    /// path that exists on disk.
    pub fn lookup(&self, specifier: &str) -> Option<PathBuf> {
        for mapping in &self.mappings {
            let star = match &mapping.pattern {
                AliasPattern::Exact(pattern) => {
                    if pattern == specifier {
                        Some("")
                    } else {
                        None
                    }
                }
                AliasPattern::Wildcard { prefix, suffix } => specifier
                    .strip_prefix(prefix.as_str())
                    .and_then(|rest| rest.strip_suffix(suffix.as_str())),
            };
            let Some(star) = star else { continue };

            for target in &mapping.targets {
                let substituted = target.replacen('*', star, 1);
                if let Some(existing) = self.probe(&substituted) {
                    return Some(existing);
                }
            }
        }
        None
    }

    /// Probes a substituted target as written, then with implicit extensions.
    fn probe(&self, relative: &str) -> Option<PathBuf> {
        let candidate = self.base_dir.join(relative);
        if candidate.is_file() {
            return Some(candidate);
        }
        for ext in ALIAS_EXTENSIONS {
            let with_ext = append_extension(&candidate, ext);
            if with_ext.is_file() {
                return Some(with_ext);
            }
        }
        None
    }
}

/// Appends `.ext` without replacing an existing extension.
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_os_string();
    os.push(format!(".{}", ext));
    PathBuf::from(os)
}

fn parse_mapping(pattern: &str, targets: &[String]) -> Result<AliasMapping, AliasError> {
    let parsed_pattern = match pattern.match_indices('*').count() {
        0 => AliasPattern::Exact(pattern.to_string()),
        1 => {
            let (prefix, rest) = pattern.split_once('*').unwrap_or((pattern, ""));
            AliasPattern::Wildcard {
                prefix: prefix.to_string(),
                suffix: rest.to_string(),
            }
        }
        _ => return Err(AliasError::MultipleWildcards(pattern.to_string())),
    };

    for target in targets {
        match target.match_indices('*').count() {
            0 => {}
            1 => {
                if matches!(parsed_pattern, AliasPattern::Exact(_)) {
                    return Err(AliasError::TargetWildcardWithoutPattern(
                        target.clone(),
                        pattern.to_string(),
                    ));
                }
            }
            _ => {
                return Err(AliasError::MultipleTargetWildcards(
                    target.clone(),
                    pattern.to_string(),
                ));
            }
        }
    }

    Ok(AliasMapping {
        pattern: parsed_pattern,
        targets: targets.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_multiple_pattern_wildcards() {
        let err = PathAliases::new("/base", &[("a/*/b/*".into(), vec!["x/*".into()])]);
        assert!(matches!(err, Err(AliasError::MultipleWildcards(_))));
    }

    #[test]
    fn test_rejects_multiple_target_wildcards() {
        let err = PathAliases::new("/base", &[("a/*".into(), vec!["x/*/*".into()])]);
        assert!(matches!(err, Err(AliasError::MultipleTargetWildcards(_, _))));
    }

    #[test]
    fn test_rejects_target_wildcard_for_exact_pattern() {
        let err = PathAliases::new("/base", &[("theme".into(), vec!["x/*".into()])]);
        assert!(matches!(
            err,
            Err(AliasError::TargetWildcardWithoutPattern(_, _))
        ));
    }

    #[test]
    fn test_lookup_misses_unmapped_specifier() {
        let aliases =
            PathAliases::new("/base", &[("@styles/*".into(), vec!["styles/*".into()])]).unwrap();
        assert_eq!(aliases.lookup("bootstrap/grid"), None);
    }

    #[test]
    fn test_append_extension_keeps_existing_suffix() {
        assert_eq!(
            append_extension(Path::new("/a/b.theme"), "scss"),
            PathBuf::from("/a/b.theme.scss")
        );
    }
}
