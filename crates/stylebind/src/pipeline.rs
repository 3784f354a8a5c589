//! The stylesheet-to-declaration pipeline.
//!
//! A [`Pipeline`] is built once at setup — options, logger, engines, alias
//! table, extractor, template, search paths all resolved up front — and then
//! invoked synchronously per stylesheet. [`Pipeline::declarations`] is total:
//! every failure inside the chain is contained and degrades to a valid (if
//! empty) declaration, so the host's integration never sees an error.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use stylebind_extract::{CssExports, ExportExtractor, ScopedExtractor};
use stylebind_render::{
    Dialect, FacadeLogger, Logger, Normalizer, RenderContext, Renderer, RendererRegistry,
};
use stylebind_resolve::{ImportResolver, PathAliases, TildeResolver};

use crate::config::SearchPathConfig;
use crate::dts::{create_dts, DtsInput, DtsTemplate};
use crate::matcher::Matchers;
use crate::options::Options;

/// Directory name searched for package-provided stylesheets.
const DEPENDENCY_DIR: &str = "node_modules";

/// The assembled stylesheet-to-declaration pipeline.
pub struct Pipeline {
    options: Options,
    logger: Arc<dyn Logger>,
    normalizer: Normalizer,
    extractor: Arc<dyn ExportExtractor>,
    template: Option<Arc<dyn DtsTemplate>>,
    aliases: Option<PathAliases>,
    search_paths: SearchPathConfig,
    extra_load_paths: Vec<PathBuf>,
    matchers: Matchers,
}

impl Pipeline {
    /// Starts building a pipeline.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// The module-file matchers compiled for this pipeline.
    pub fn matchers(&self) -> &Matchers {
        &self.matchers
    }

    /// Synthesizes declaration text for one stylesheet.
    ///
    /// Total: a stylesheet that fails to render yields the empty-set
    /// declaration, with the failure reported through the logger.
    pub fn declarations(&self, source: &str, file_name: &Path) -> String {
        let dialect = Dialect::from_path(file_name);

        let raw = match &self.options.additional_data {
            Some(prefix) => format!("{}{}", prefix, source),
            None => source.to_string(),
        };

        // Import strategies for the SCSS family: aliases first, tilde second.
        let tilde = TildeResolver;
        let mut resolvers: Vec<&dyn ImportResolver> = Vec::new();
        if dialect.is_scss_family() {
            if let Some(aliases) = &self.aliases {
                resolvers.push(aliases);
            }
            resolvers.push(&tilde);
        }

        let mut load_paths: Vec<PathBuf> = Vec::new();
        if let Some(dir) = file_name.parent() {
            load_paths.push(dir.to_path_buf());
        }
        load_paths.push(PathBuf::from(DEPENDENCY_DIR));
        load_paths.extend(self.extra_load_paths.iter().cloned());
        load_paths.extend(self.search_paths.include_paths().iter().cloned());

        let ctx = RenderContext {
            file_name,
            dialect,
            logger: self.logger.as_ref(),
            resolvers: &resolvers,
            load_paths: &load_paths,
            options: self.options.renderer_options.for_dialect(dialect),
        };

        let output = self.normalizer.normalize(&raw, &ctx);
        let CssExports { css, exports } = self.extractor.extract(&output.css, file_name);

        let input = DtsInput {
            exports: &exports,
            css: &css,
            source_map: output.source_map.as_ref(),
            file_name,
        };
        create_dts(
            &input,
            &self.options,
            self.logger.as_ref(),
            self.template.as_deref(),
        )
    }
}

/// Builder resolving every pipeline strategy once, at setup.
pub struct PipelineBuilder {
    options: Options,
    logger: Option<Arc<dyn Logger>>,
    renderers: RendererRegistry,
    custom_renderer: Option<Arc<dyn Renderer>>,
    extractor: Option<Arc<dyn ExportExtractor>>,
    template: Option<Arc<dyn DtsTemplate>>,
    aliases: Option<PathAliases>,
    search_paths: Option<SearchPathConfig>,
    extra_load_paths: Vec<PathBuf>,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            options: Options::default(),
            logger: None,
            renderers: RendererRegistry::default(),
            custom_renderer: None,
            extractor: None,
            template: None,
            aliases: None,
            search_paths: None,
            extra_load_paths: Vec::new(),
        }
    }

    /// Sets the user-facing options.
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Sets the reporting collaborator. Defaults to [`FacadeLogger`].
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Registers the engine for a rendered dialect.
    pub fn renderer(mut self, dialect: Dialect, engine: Arc<dyn Renderer>) -> Self {
        self.renderers.register(dialect, engine);
        self
    }

    /// Installs a custom renderer that preempts per-dialect dispatch.
    pub fn custom_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.custom_renderer = Some(renderer);
        self
    }

    /// Replaces the default export extractor.
    pub fn extractor(mut self, extractor: Arc<dyn ExportExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Installs a declaration template that replaces synthesized output.
    pub fn template(mut self, template: Arc<dyn DtsTemplate>) -> Self {
        self.template = Some(template);
        self
    }

    /// Sets the compiler path-alias table consulted before tilde resolution.
    pub fn aliases(mut self, aliases: PathAliases) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// Sets the captured environment search paths.
    pub fn search_paths(mut self, search_paths: SearchPathConfig) -> Self {
        self.search_paths = Some(search_paths);
        self
    }

    /// Adds caller-supplied import search paths, tried after the dependency
    /// directory and before environment paths.
    pub fn load_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.extra_load_paths = paths;
        self
    }

    /// Assembles the pipeline.
    pub fn build(self) -> Pipeline {
        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(FacadeLogger) as Arc<dyn Logger>);
        logger.log(&format!("options: {:?}", self.options));

        let mut normalizer = Normalizer::new(self.renderers);
        if let Some(custom) = self.custom_renderer {
            normalizer = normalizer.with_custom(custom);
        }

        let matchers = Matchers::new(logger.as_ref(), &self.options);

        Pipeline {
            options: self.options,
            logger,
            normalizer,
            extractor: self
                .extractor
                .unwrap_or_else(|| Arc::new(ScopedExtractor) as Arc<dyn ExportExtractor>),
            template: self.template,
            aliases: self.aliases,
            search_paths: self.search_paths.unwrap_or_default(),
            extra_load_paths: self.extra_load_paths,
            matchers,
        }
    }
}
