//! The normalization failure boundary.

use std::sync::Arc;

use crate::renderer::{RenderContext, RenderOutput, Renderer, RendererRegistry};
use crate::RenderError;

/// Dispatches a stylesheet to the right engine and contains every failure.
///
/// A caller-supplied custom renderer, when present, preempts the registry
/// for every dialect and is treated as fully opaque. Either way, a failed
/// render is reported through the context's logger and degraded to
/// [`RenderOutput::empty`] — normalization itself never fails.
pub struct Normalizer {
    registry: RendererRegistry,
    custom: Option<Arc<dyn Renderer>>,
}

impl Normalizer {
    /// A normalizer dispatching through `registry`.
    pub fn new(registry: RendererRegistry) -> Self {
        Self {
            registry,
            custom: None,
        }
    }

    /// Installs a custom renderer that preempts the registry entirely.
    pub fn with_custom(mut self, custom: Arc<dyn Renderer>) -> Self {
        self.custom = Some(custom);
        self
    }

    /// Renders `source` to canonical CSS, degrading failures to empty output.
    pub fn normalize(&self, source: &str, ctx: &RenderContext<'_>) -> RenderOutput {
        let result = match &self.custom {
            Some(renderer) => renderer.render(source, ctx),
            None => match self.registry.get(ctx.dialect) {
                Some(renderer) => renderer.render(source, ctx),
                None => Err(RenderError::MissingRenderer(ctx.dialect)),
            },
        };

        match result {
            Ok(output) => output,
            Err(err) => {
                ctx.logger.error(&err);
                RenderOutput::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dialect, Logger, NullLogger};
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingLogger {
        errors: AtomicUsize,
    }

    impl Logger for CountingLogger {
        fn log(&self, _message: &str) {}

        fn error(&self, _error: &dyn std::error::Error) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn render(
            &self,
            _source: &str,
            _ctx: &RenderContext<'_>,
        ) -> Result<RenderOutput, RenderError> {
            Err(RenderError::Engine("unexpected token".into()))
        }
    }

    fn ctx<'a>(dialect: Dialect, logger: &'a dyn Logger) -> RenderContext<'a> {
        RenderContext {
            file_name: Path::new("/project/src/a.module.scss"),
            dialect,
            logger,
            resolvers: &[],
            load_paths: &[],
            options: None,
        }
    }

    #[test]
    fn test_css_passes_through_by_default() {
        let normalizer = Normalizer::new(RendererRegistry::default());
        let output = normalizer.normalize(".a {}", &ctx(Dialect::Css, &NullLogger));
        assert_eq!(output.css, ".a {}");
    }

    #[test]
    fn test_missing_engine_is_logged_and_degrades_to_empty() {
        let logger = CountingLogger::default();
        let normalizer = Normalizer::new(RendererRegistry::default());
        let output = normalizer.normalize(".a {}", &ctx(Dialect::Scss, &logger));
        assert_eq!(output.css, "");
        assert_eq!(logger.errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_engine_failure_is_logged_and_degrades_to_empty() {
        let logger = CountingLogger::default();
        let mut registry = RendererRegistry::default();
        registry.register(Dialect::Scss, Arc::new(FailingRenderer));
        let normalizer = Normalizer::new(registry);
        let output = normalizer.normalize("not valid scss {", &ctx(Dialect::Scss, &logger));
        assert_eq!(output.css, "");
        assert_eq!(logger.errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_custom_renderer_preempts_registry() {
        struct Upper;
        impl Renderer for Upper {
            fn render(
                &self,
                source: &str,
                _ctx: &RenderContext<'_>,
            ) -> Result<RenderOutput, RenderError> {
                Ok(RenderOutput::css_only(source.to_uppercase()))
            }
        }

        let normalizer =
            Normalizer::new(RendererRegistry::default()).with_custom(Arc::new(Upper));
        let output = normalizer.normalize(".a {}", &ctx(Dialect::Css, &NullLogger));
        assert_eq!(output.css, ".A {}");
    }
}
