//! Declaration synthesis.
//!
//! Turns an export mapping into declaration text a type checker can consume.
//! Two operating modes:
//!
//! - **Aggregate** (default): one `declare let classes` block keyed by the
//!   untransformed original names, plus an `export let` binding per valid
//!   transformed identifier
//! - **Position-accurate**: one output line per canonical-CSS line, each
//!   carrying the `export let` fragments whose generated names map back to
//!   that original-source line — so "go to definition" on a binding lands on
//!   the right line of the stylesheet
//!
//! Synthesis is total: an empty mapping produces a declaration with an empty
//! property set, and a caller-supplied template strategy may replace the
//! result wholesale.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use sourcemap::SourceMap;

use stylebind_extract::ExportMap;
use stylebind_render::Logger;

use crate::options::Options;
use crate::transform::transform_classname;

/// A syntactically valid bare identifier.
static VALID_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_$][a-zA-Z0-9_$]*$").expect("identifier pattern"));

/// Reserved words of the target type system; sorted for binary search.
const RESERVED_WORDS: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Whether a transformed candidate may become a named export.
pub fn is_valid_identifier(name: &str) -> bool {
    VALID_IDENTIFIER.is_match(name) && RESERVED_WORDS.binary_search(&name).is_err()
}

/// Everything synthesis consumes for one stylesheet.
pub struct DtsInput<'a> {
    /// Ordered original-name to generated-name mapping.
    pub exports: &'a ExportMap,
    /// Canonical CSS the generated names live in.
    pub css: &'a str,
    /// Position-mapping record, when the renderer produced one.
    pub source_map: Option<&'a SourceMap>,
    /// Absolute path of the originating stylesheet.
    pub file_name: &'a Path,
}

/// Context handed to a custom declaration template.
pub struct TemplateContext<'a> {
    /// The export mapping synthesis worked from.
    pub classes: &'a ExportMap,
    /// Absolute path of the originating stylesheet.
    pub file_name: &'a Path,
    /// Reporting collaborator.
    pub logger: &'a dyn Logger,
}

/// Caller-supplied post-processing hook.
///
/// The return value replaces the synthesized text entirely — full override,
/// not an append.
pub trait DtsTemplate: Send + Sync {
    fn render(&self, dts: &str, context: &TemplateContext<'_>) -> String;
}

/// Synthesizes declaration text from one extraction result.
pub fn create_dts(
    input: &DtsInput<'_>,
    options: &Options,
    logger: &dyn Logger,
    template: Option<&dyn DtsTemplate>,
) -> String {
    let mut dts = aggregate_dts(input.exports, options);

    if options.go_to_definition {
        if let Some(source_map) = input.source_map {
            dts = position_accurate_dts(input, source_map, options);
        }
    }

    if let Some(template) = template {
        let context = TemplateContext {
            classes: input.exports,
            file_name: input.file_name,
            logger,
        };
        return template.render(&dts, &context);
    }

    dts
}

fn property_fragment(name: &str, possibly_undefined: bool) -> String {
    if possibly_undefined {
        format!("'{}'?: string;", name)
    } else {
        format!("'{}': string;", name)
    }
}

fn named_export_fragment(name: &str) -> String {
    format!("export let {}: string;", name)
}

/// Aggregate mode: every original name as a property, every valid
/// transformed candidate as a named export.
fn aggregate_dts(exports: &ExportMap, options: &Options) -> String {
    let possibly_undefined = options.no_unchecked_indexed_access;

    let mut properties: Vec<String> = exports
        .iter()
        .map(|(original, _)| property_fragment(original, possibly_undefined))
        .collect();
    if options.allow_unknown_classnames {
        properties.push("[key: string]: string;".to_string());
    }

    let mut dts = format!(
        "declare let classes: {{\n  {}\n}};\nexport default classes;\n",
        properties.join("\n  ")
    );

    if options.named_exports {
        let named: Vec<String> = exports
            .iter()
            .flat_map(|(original, _)| transform_classname(options.classname_transform, original))
            .filter(|candidate| is_valid_identifier(candidate))
            .map(|candidate| named_export_fragment(&candidate))
            .collect();
        if !named.is_empty() {
            dts.push_str(&named.join("\n"));
            dts.push('\n');
        }
    }

    dts
}

/// Position-accurate mode: per-line export fragments, joined with empty
/// lines preserved so line N of the output corresponds to line N of the
/// original source.
fn position_accurate_dts(
    input: &DtsInput<'_>,
    source_map: &SourceMap,
    options: &Options,
) -> String {
    let css_lines: Vec<&str> = input.css.split('\n').collect();
    let mut dts_lines: Vec<String> = vec![String::new(); css_lines.len()];

    for (original, generated) in input.exports.iter() {
        let candidate = match transform_classname(options.classname_transform, original)
            .into_iter()
            .next()
        {
            Some(candidate) => candidate,
            None => continue,
        };
        if !is_valid_identifier(&candidate) {
            continue;
        }

        // Degrades to the first line when the generated name cannot be found
        // or the record has no token for its position.
        let original_line = match find_generated_name(&css_lines, generated) {
            Some((line, column)) => source_map
                .lookup_token(line as u32, column as u32)
                .map(|token| token.get_src_line() as usize)
                .unwrap_or(0),
            None => 0,
        };

        if original_line >= dts_lines.len() {
            dts_lines.resize(original_line + 1, String::new());
        }
        dts_lines[original_line].push_str(&named_export_fragment(&candidate));
    }

    dts_lines.join("\n")
}

/// Finds the first boundary-delimited occurrence of a generated name.
///
/// The match must be preceded by a selector-start `.`, a `:` (pseudo or
/// animation reference) or whitespace, and must not be followed by a
/// character that could extend the identifier.
fn find_generated_name(lines: &[&str], generated: &str) -> Option<(usize, usize)> {
    if generated.is_empty() {
        return None;
    }
    for (line_index, line) in lines.iter().enumerate() {
        let mut search_from = 0;
        while let Some(found) = line[search_from..].find(generated) {
            let start = search_from + found;
            let end = start + generated.len();
            if has_selector_boundary(line, start, end) {
                return Some((line_index, start));
            }
            search_from = start + 1;
        }
    }
    None
}

fn has_selector_boundary(line: &str, start: usize, end: usize) -> bool {
    let preceded = line[..start]
        .chars()
        .next_back()
        .map(|c| c == '.' || c == ':' || c.is_whitespace())
        .unwrap_or(false);
    let extended = line[end..]
        .chars()
        .next()
        .map(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        .unwrap_or(false);
    preceded && !extended
}
