//! Module-file recognition.
//!
//! Only file names matching the module pattern go through the pipeline. The
//! default pattern recognizes `*.module.css`, `*.module.scss` and
//! `*.module.sass`; hosts can override it with a custom regex, and a
//! malformed override is reported and ignored rather than crashing the host.

use once_cell::sync::Lazy;
use regex::Regex;

use stylebind_render::Logger;

use crate::options::Options;

/// Default module-file pattern source.
pub const DEFAULT_MODULE_PATTERN: &str = r"\.module\.(sa|sc|c)ss$";

static DEFAULT_MATCHER: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_MODULE_PATTERN).expect("default module pattern"));

/// A specifier starting with `./` or `../`.
static RELATIVE_SPECIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.\.?($|[\\/])").expect("relative specifier pattern"));

/// Compiled module-file matchers for one pipeline setup.
#[derive(Debug, Clone)]
pub struct Matchers {
    module_pattern: Regex,
}

impl Matchers {
    /// Builds matchers from the configured options.
    ///
    /// A `custom_matcher` that fails to compile is reported through the
    /// logger and replaced by the default pattern.
    pub fn new(logger: &dyn Logger, options: &Options) -> Self {
        let module_pattern = match &options.custom_matcher {
            Some(source) => match Regex::new(source) {
                Ok(pattern) => pattern,
                Err(err) => {
                    logger.error(&err);
                    DEFAULT_MATCHER.clone()
                }
            },
            None => DEFAULT_MATCHER.clone(),
        };
        Self { module_pattern }
    }

    /// Whether a file name names a stylesheet module.
    pub fn is_stylesheet_module(&self, file_name: &str) -> bool {
        self.module_pattern.is_match(file_name)
    }

    /// Whether a specifier names a stylesheet module via a relative path.
    pub fn is_relative_module(&self, specifier: &str) -> bool {
        self.is_stylesheet_module(specifier) && RELATIVE_SPECIFIER.is_match(specifier)
    }
}

impl Default for Matchers {
    fn default() -> Self {
        Self {
            module_pattern: DEFAULT_MATCHER.clone(),
        }
    }
}
