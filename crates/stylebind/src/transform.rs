//! Classname transforms.
//!
//! One original name becomes one or more candidate identifiers depending on
//! the configured [`ClassnameTransform`]. The first candidate is always
//! defined, even for a name no transform can improve.
//!
//! Two distinct casings are involved, and the distinction is load-bearing:
//!
//! - [`camel_case`] applies full word-boundary camel-casing (the reference
//!   implementation's lodash rules): separators split words, as do case
//!   boundaries, and separator characters are dropped
//! - [`dash_case`] only collapses hyphen runs, upper-casing the single
//!   character that follows each run; underscores and trailing hyphens stay
//!
//! Authors who write hyphenated class names and want the plain dash-removal
//! convention get `Dashes`/`DashesOnly` without the rest of the camel rules.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::ClassnameTransform;

/// A hyphen run followed by the word character to upper-case.
static DASH_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-+([0-9A-Za-z_])").expect("dash boundary pattern"));

/// Produces the candidate identifiers for one original class name.
///
/// The first entry is always present: the original name for `AsIs`,
/// `CamelCase` and `Dashes`, the transformed name otherwise. The two-entry
/// modes only add their transformed form when it differs from the original.
pub fn transform_classname(mode: ClassnameTransform, classname: &str) -> Vec<String> {
    match mode {
        ClassnameTransform::AsIs => vec![classname.to_string()],
        ClassnameTransform::CamelCase => {
            let mut entries = vec![classname.to_string()];
            let transformed = camel_case(classname);
            if transformed != classname {
                entries.push(transformed);
            }
            entries
        }
        ClassnameTransform::CamelCaseOnly => vec![camel_case(classname)],
        ClassnameTransform::Dashes => {
            let mut entries = vec![classname.to_string()];
            let transformed = dash_case(classname);
            if transformed != classname {
                entries.push(transformed);
            }
            entries
        }
        ClassnameTransform::DashesOnly => vec![dash_case(classname)],
    }
}

/// Full camel-casing with the reference library's word rules.
pub fn camel_case(classname: &str) -> String {
    let words = split_words(classname);
    if words.is_empty() {
        // Nothing but separators; there is no word to case.
        return classname.to_string();
    }

    let mut out = String::with_capacity(classname.len());
    for (index, word) in words.iter().enumerate() {
        let lower = word.to_ascii_lowercase();
        if index == 0 {
            out.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

/// Narrow dash-removal casing: `-+x` becomes `X`, everything else stays.
pub fn dash_case(classname: &str) -> String {
    DASH_BOUNDARY
        .replace_all(classname, |caps: &regex::Captures<'_>| {
            caps[1].to_ascii_uppercase()
        })
        .into_owned()
}

/// Splits a name into words the way the reference library does for ASCII:
/// non-alphanumerics separate, case boundaries split, an uppercase run
/// followed by a capitalized word splits before the final capital, and
/// digits attach to a preceding lowercase or capitalized word.
fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if !c.is_ascii_alphanumeric() {
            i += 1;
            continue;
        }

        let start = i;

        if c.is_ascii_digit() {
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            words.push(chars[start..i].iter().collect());
            continue;
        }

        if c.is_ascii_lowercase() {
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                i += 1;
            }
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            words.push(chars[start..i].iter().collect());
            continue;
        }

        // Uppercase run.
        while i < chars.len() && chars[i].is_ascii_uppercase() {
            i += 1;
        }
        let run = i - start;
        if run == 1 || (i < chars.len() && chars[i].is_ascii_lowercase()) {
            if run > 1 {
                // "HTMLParser" splits as "HTML" + "Parser".
                words.push(chars[start..i - 1].iter().collect());
            }
            let word_start = if run == 1 { start } else { i - 1 };
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                i += 1;
            }
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            words.push(chars[word_start..i].iter().collect());
        } else {
            words.push(chars[start..i].iter().collect());
        }
    }

    words
}
