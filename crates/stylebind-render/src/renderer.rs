//! The renderer seam.
//!
//! Per-dialect compilers are external engines behind the [`Renderer`] trait.
//! This crate ships only [`PassthroughRenderer`] (plain CSS needs no
//! rendering); SCSS-family, Less and Stylus engines are host-supplied and
//! registered per dialect on a [`RendererRegistry`].

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sourcemap::SourceMap;
use stylebind_resolve::ImportResolver;

use crate::dialect::Dialect;
use crate::error::RenderError;
use crate::logger::Logger;

/// Everything an engine gets to see for one render.
///
/// Borrowed for the duration of a single synchronous render call; nothing
/// here outlives the invocation.
pub struct RenderContext<'a> {
    /// Absolute path of the stylesheet being rendered.
    pub file_name: &'a Path,
    /// Dialect the dispatch selected.
    pub dialect: Dialect,
    /// Reporting collaborator.
    pub logger: &'a dyn Logger,
    /// Import-resolution strategies, tried in order before the engine's own
    /// load-path search. Alias resolution first, tilde resolution second.
    pub resolvers: &'a [&'a dyn ImportResolver],
    /// Directories searched for imports, in order: the originating file's
    /// directory, the dependency directory, then caller-supplied and
    /// environment-supplied paths.
    pub load_paths: &'a [PathBuf],
    /// Opaque per-dialect engine options.
    pub options: Option<&'a serde_json::Value>,
}

impl RenderContext<'_> {
    /// Runs the resolver strategy list for one import specifier.
    ///
    /// Engines call this before their own resolution; `None` means every
    /// strategy deferred.
    pub fn resolve_import(&self, specifier: &str) -> Option<PathBuf> {
        self.resolvers
            .iter()
            .find_map(|resolver| resolver.resolve(specifier, self.file_name))
    }
}

/// Canonical CSS plus the optional position-mapping record.
pub struct RenderOutput {
    /// Canonical CSS text.
    pub css: String,
    /// Source map correlating canonical-CSS positions back to the original
    /// source, when the engine produces one.
    pub source_map: Option<SourceMap>,
}

impl RenderOutput {
    /// Plain CSS output with no position mapping.
    pub fn css_only(css: impl Into<String>) -> Self {
        Self {
            css: css.into(),
            source_map: None,
        }
    }

    /// The degraded result a broken stylesheet collapses to.
    pub fn empty() -> Self {
        Self::css_only(String::new())
    }
}

impl fmt::Debug for RenderOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOutput")
            .field("css_len", &self.css.len())
            .field("has_source_map", &self.source_map.is_some())
            .finish()
    }
}

/// A dialect engine that can turn stylesheet source into canonical CSS.
///
/// Engines are opaque to this crate: they receive the raw source and a
/// [`RenderContext`] and either produce a [`RenderOutput`] or fail with a
/// [`RenderError`] that the normalizer will contain.
pub trait Renderer: Send + Sync {
    /// Renders `source` to canonical CSS.
    fn render(&self, source: &str, ctx: &RenderContext<'_>) -> Result<RenderOutput, RenderError>;
}

/// Identity renderer for dialects that are already canonical CSS.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughRenderer;

impl Renderer for PassthroughRenderer {
    fn render(&self, source: &str, _ctx: &RenderContext<'_>) -> Result<RenderOutput, RenderError> {
        Ok(RenderOutput::css_only(source))
    }
}

/// One registered engine per dialect.
///
/// The default registry wires [`Dialect::Css`] to the pass-through renderer
/// and leaves every rendered dialect unregistered; asking the normalizer for
/// an unregistered dialect is a contained render failure, not a panic.
pub struct RendererRegistry {
    engines: HashMap<Dialect, Arc<dyn Renderer>>,
}

impl Default for RendererRegistry {
    fn default() -> Self {
        let mut registry = Self {
            engines: HashMap::new(),
        };
        registry.register(Dialect::Css, Arc::new(PassthroughRenderer));
        registry
    }
}

impl RendererRegistry {
    /// Registers (or replaces) the engine for a dialect.
    pub fn register(&mut self, dialect: Dialect, engine: Arc<dyn Renderer>) {
        self.engines.insert(dialect, engine);
    }

    /// Looks up the engine for a dialect.
    pub fn get(&self, dialect: Dialect) -> Option<&dyn Renderer> {
        self.engines.get(&dialect).map(|engine| engine.as_ref())
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dialects: Vec<&Dialect> = self.engines.keys().collect();
        dialects.sort_by_key(|d| d.extension());
        f.debug_struct("RendererRegistry")
            .field("dialects", &dialects)
            .finish()
    }
}
