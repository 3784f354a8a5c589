//! Local-scope rewriting.
//!
//! The walker tokenizes canonical CSS and rewrites class selectors and
//! `@keyframes` names in place. Only rule-level structure is inspected:
//! style-rule bodies are skipped wholesale, at-rules that nest further rules
//! (`@media`, `@supports`, ...) are descended into, and `:global(...)` /
//! `:local(...)` selector groups switch the scoping mode.

use std::ops::Range;
use std::path::Path;

use cssparser::{ParseError, Parser, ParserInput, Token};
use xxhash_rust::xxh3::xxh3_64;

use crate::{CssExports, ExportMap};

/// Scoping mode for the current selector fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Local,
    Global,
}

/// What the next `{` block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingAt {
    /// No at-rule prelude is open; the block is a style-rule body (skip).
    None,
    /// A nesting at-rule prelude (`@media` family); descend into the block.
    Nest,
    /// Any other at-rule; skip the block.
    Skip,
}

struct ScopeState<'a> {
    file_name: &'a Path,
    replacements: Vec<(Range<usize>, String)>,
    exports: ExportMap,
}

impl ScopeState<'_> {
    /// The generated name for `original`, minting and exporting it on first
    /// sight.
    fn scoped(&mut self, original: &str) -> String {
        if let Some(existing) = self.exports.get(original) {
            return existing.to_string();
        }
        let generated = scoped_name(self.file_name, original);
        self.exports.insert(original, generated.clone());
        generated
    }
}

/// The generated (scope-hashed) form of a local name.
///
/// Deterministic per file stem + name, so repeated extractions of the same
/// module agree and distinct modules get distinct names.
pub fn scoped_name(file_name: &Path, name: &str) -> String {
    let stem = file_name
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("module");
    let digest = xxh3_64(format!("{}:{}", stem, name).as_bytes());
    format!("{}_{:08x}", name, (digest & 0xffff_ffff) as u32)
}

/// Rewrites local class and keyframe names to their generated forms and
/// collects the export mapping.
///
/// Total: malformed CSS yields whatever names were recognized before the
/// walker lost the structure, never an error. Rewrites are in-place token
/// replacements, so line numbers and the start column of every renamed
/// identifier survive unchanged.
pub fn scope_stylesheet(css: &str, file_name: &Path) -> CssExports {
    let mut state = ScopeState {
        file_name,
        replacements: Vec::new(),
        exports: ExportMap::new(),
    };

    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    walk_rules(&mut parser, Mode::Local, &mut state);

    state.replacements.sort_by_key(|(range, _)| range.start);

    let mut out = String::with_capacity(css.len() + 16 * state.replacements.len());
    let mut copied_to = 0;
    for (range, generated) in &state.replacements {
        out.push_str(&css[copied_to..range.start]);
        out.push_str(generated);
        copied_to = range.end;
    }
    out.push_str(&css[copied_to..]);

    CssExports {
        css: out,
        exports: state.exports,
    }
}

fn walk_rules<'i>(parser: &mut Parser<'i, '_>, base_mode: Mode, state: &mut ScopeState<'_>) {
    let mut pending_at = PendingAt::None;
    let mut selector_mode = base_mode;

    loop {
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(_) | Token::Comment(_) => {}

            Token::Delim('.') => {
                let ident_start = parser.position().byte_index();
                let next = match parser.next_including_whitespace_and_comments() {
                    Ok(next) => next.clone(),
                    Err(_) => break,
                };
                if let Token::Ident(ref name) = next {
                    let ident_end = parser.position().byte_index();
                    if selector_mode == Mode::Local && pending_at == PendingAt::None {
                        let generated = state.scoped(name);
                        state.replacements.push((ident_start..ident_end, generated));
                    }
                }
            }

            Token::Colon => {
                let next = match parser.next_including_whitespace_and_comments() {
                    Ok(next) => next.clone(),
                    Err(_) => break,
                };
                match next {
                    Token::Function(ref name) => {
                        let mode = if name.eq_ignore_ascii_case("global") {
                            Mode::Global
                        } else if name.eq_ignore_ascii_case("local") {
                            Mode::Local
                        } else {
                            // :not(), :is() and friends keep the current mode.
                            selector_mode
                        };
                        let _ = parser.parse_nested_block(
                            |block| -> Result<(), ParseError<'i, ()>> {
                                walk_rules(block, mode, state);
                                Ok(())
                            },
                        );
                    }
                    Token::Ident(ref name) => {
                        // Bare `:global` / `:local` switches mode for the rest
                        // of the selector.
                        if name.eq_ignore_ascii_case("global") {
                            selector_mode = Mode::Global;
                        } else if name.eq_ignore_ascii_case("local") {
                            selector_mode = Mode::Local;
                        }
                    }
                    _ => {}
                }
            }

            Token::AtKeyword(ref name) => {
                if is_keyframes(name) {
                    scope_keyframes_name(parser, selector_mode, state);
                    pending_at = PendingAt::Skip;
                } else if is_nesting_at_rule(name) {
                    pending_at = PendingAt::Nest;
                } else {
                    pending_at = PendingAt::Skip;
                }
            }

            Token::CurlyBracketBlock => {
                if pending_at == PendingAt::Nest {
                    let _ = parser.parse_nested_block(
                        |block| -> Result<(), ParseError<'i, ()>> {
                            walk_rules(block, base_mode, state);
                            Ok(())
                        },
                    );
                }
                // Unconsumed blocks (style-rule bodies, skipped at-rules) are
                // stepped over by the next token fetch.
                pending_at = PendingAt::None;
                selector_mode = base_mode;
            }

            Token::Semicolon => {
                pending_at = PendingAt::None;
            }

            Token::Comma => {
                selector_mode = base_mode;
            }

            _ => {}
        }
    }
}

/// Scopes the custom-ident that names a `@keyframes` rule.
fn scope_keyframes_name<'i>(
    parser: &mut Parser<'i, '_>,
    selector_mode: Mode,
    state: &mut ScopeState<'_>,
) {
    loop {
        let name_start = parser.position().byte_index();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => return,
        };
        match token {
            Token::WhiteSpace(_) | Token::Comment(_) => continue,
            Token::Ident(ref name) => {
                let name_end = parser.position().byte_index();
                if selector_mode == Mode::Local {
                    let generated = state.scoped(name);
                    state.replacements.push((name_start..name_end, generated));
                }
            }
            _ => {}
        }
        break;
    }
}

fn is_keyframes(name: &str) -> bool {
    name.eq_ignore_ascii_case("keyframes")
        || name.eq_ignore_ascii_case("-webkit-keyframes")
        || name.eq_ignore_ascii_case("-moz-keyframes")
        || name.eq_ignore_ascii_case("-o-keyframes")
}

fn is_nesting_at_rule(name: &str) -> bool {
    name.eq_ignore_ascii_case("media")
        || name.eq_ignore_ascii_case("supports")
        || name.eq_ignore_ascii_case("container")
        || name.eq_ignore_ascii_case("layer")
        || name.eq_ignore_ascii_case("scope")
        || name.eq_ignore_ascii_case("document")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(css: &str) -> CssExports {
        scope_stylesheet(css, Path::new("fixture.module.css"))
    }

    #[test]
    fn test_class_selector_is_scoped_and_exported() {
        let result = extract(".btn { color: red; }");
        let generated = result.exports.get("btn").unwrap();
        assert!(generated.starts_with("btn_"));
        assert_eq!(generated.len(), "btn_".len() + 8);
        assert_eq!(result.css, format!(".{} {{ color: red; }}", generated));
    }

    #[test]
    fn test_scoped_name_is_deterministic_per_file() {
        let a = scoped_name(Path::new("button.module.css"), "btn");
        let b = scoped_name(Path::new("button.module.css"), "btn");
        let other = scoped_name(Path::new("card.module.css"), "btn");
        assert_eq!(a, b);
        assert_ne!(a, other);
    }

    #[test]
    fn test_duplicate_selectors_export_once() {
        let result = extract(".a { color: red; }\n.a:hover { color: blue; }");
        assert_eq!(result.exports.len(), 1);
        let generated = result.exports.get("a").unwrap();
        assert_eq!(result.css.matches(generated).count(), 2);
    }

    #[test]
    fn test_export_order_is_first_occurrence_order() {
        let result = extract(".z {}\n.a {}\n.z {}\n.m {}");
        let keys: Vec<&str> = result.exports.iter().map(|(original, _)| original).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_global_classes_are_untouched() {
        let result = extract(":global(.raw) { color: red; }");
        assert!(result.exports.is_empty());
        assert!(result.css.contains(".raw"));
    }

    #[test]
    fn test_local_inside_global_restores_scoping() {
        let result = extract(":global(.raw :local(.inner)) { color: red; }");
        assert_eq!(result.exports.len(), 1);
        assert!(result.exports.get("inner").is_some());
        assert!(result.css.contains(".raw"));
    }

    #[test]
    fn test_bare_global_switches_selector_mode() {
        let result = extract(":global .raw { color: red; }\n.scoped { color: blue; }");
        assert_eq!(result.exports.len(), 1);
        assert!(result.exports.get("scoped").is_some());
        assert!(result.css.contains(".raw"));
    }

    #[test]
    fn test_keyframes_name_is_scoped_and_exported() {
        let result = extract("@keyframes fade { from { opacity: 0; } to { opacity: 1; } }");
        let generated = result.exports.get("fade").unwrap();
        assert!(generated.starts_with("fade_"));
        assert!(result.css.contains(&format!("@keyframes {}", generated)));
        // Keyframe step selectors stay as written.
        assert!(result.css.contains("from {"));
    }

    #[test]
    fn test_media_blocks_are_descended_into() {
        let result = extract("@media (min-width: 600px) { .wide { display: flex; } }");
        assert_eq!(result.exports.len(), 1);
        assert!(result.exports.get("wide").is_some());
    }

    #[test]
    fn test_declaration_values_are_not_rewritten() {
        let result = extract(".a { background: url(btn.png); margin: .5em; }");
        assert_eq!(result.exports.len(), 1);
        assert!(result.css.contains("url(btn.png)"));
        assert!(result.css.contains(".5em"));
    }

    #[test]
    fn test_compound_selectors() {
        let result = extract("div.a > .b + .c:hover { color: red; }");
        let keys: Vec<&str> = result.exports.iter().map(|(original, _)| original).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_line_structure_is_preserved() {
        let css = ".a {\n  color: red;\n}\n\n.b {\n  color: blue;\n}\n";
        let result = extract(css);
        assert_eq!(result.css.lines().count(), css.lines().count());
        // The generated name starts where the original did.
        let generated = result.exports.get("b").unwrap();
        let css_line = result.css.lines().nth(4).unwrap();
        assert!(css_line.starts_with(&format!(".{}", generated)));
    }

    #[test]
    fn test_empty_and_malformed_input() {
        assert!(extract("").exports.is_empty());
        let result = extract(".unclosed { color: red;");
        assert!(result.exports.get("unclosed").is_some());
    }
}
