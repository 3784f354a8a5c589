//! # Stylebind - Typed Declarations for Stylesheet Modules
//!
//! `stylebind` synthesizes type declarations for CSS-like stylesheet modules
//! so a static type checker can validate imports of locally-scoped class
//! names. For each module file it:
//!
//! 1. **Normalizes** the dialect (CSS, SCSS/SASS, Less, Stylus) to canonical
//!    CSS through registered renderer engines, wiring webpack-style tilde
//!    imports and compiler path aliases into SCSS-family import resolution
//! 2. **Extracts** the exposed class-selector and keyframe names as an
//!    ordered original-name → generated-name mapping
//! 3. **Synthesizes** declaration text: an aggregate `classes` object plus
//!    named exports, or position-accurate per-line bindings when a source
//!    map allows "go to definition" to land on the right stylesheet line
//!
//! The pipeline is synchronous, re-entrant and total: broken stylesheets
//! degrade to empty-but-valid declarations, reported through the [`Logger`]
//! collaborator, and nothing escapes as an error or panic.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::path::Path;
//! use stylebind::Pipeline;
//!
//! let pipeline = Pipeline::builder().build();
//!
//! let file = Path::new("/project/src/button.module.css");
//! assert!(pipeline.matchers().is_stylesheet_module("button.module.css"));
//!
//! let dts = pipeline.declarations(".btn { color: red; }", file);
//! assert!(dts.contains("'btn': string;"));
//! assert!(dts.contains("export let btn: string;"));
//! ```
//!
//! ## Configuration
//!
//! Options use camelCase wire names and deserialize from host configuration:
//!
//! ```rust
//! use stylebind::Options;
//!
//! let options: Options = serde_json::from_str(r#"{
//!     "classnameTransform": "camelCase",
//!     "goToDefinition": true
//! }"#).unwrap();
//! ```
//!
//! Renderer engines for the SCSS family, Less and Stylus are host-supplied
//! through [`PipelineBuilder::renderer`]; plain CSS passes through built-in.
//! Custom renderers and declaration templates are injected the same way,
//! resolved once at setup.

mod config;
mod dts;
mod matcher;
mod options;
mod pipeline;
mod transform;

// Declaration synthesis
pub use dts::{create_dts, is_valid_identifier, DtsInput, DtsTemplate, TemplateContext};

// Configuration
pub use config::{SearchPathConfig, SEARCH_PATH_VAR};
pub use options::{ClassnameTransform, Options, RendererOptions};

// Module recognition
pub use matcher::{Matchers, DEFAULT_MODULE_PATTERN};

// Classname transforms
pub use transform::{camel_case, dash_case, transform_classname};

// Pipeline assembly
pub use pipeline::{Pipeline, PipelineBuilder};

// Re-export the collaborator seams from the member crates.
pub use stylebind_extract::{CssExports, ExportExtractor, ExportMap, ScopedExtractor};
pub use stylebind_render::{
    Dialect, FacadeLogger, Logger, NullLogger, Normalizer, PassthroughRenderer, RenderContext,
    RenderError, RenderOutput, Renderer, RendererRegistry,
};
pub use stylebind_resolve::{
    resolve_tilde_import, AliasError, ImportResolver, PathAliases, TildeResolver,
    STYLESHEET_EXTENSIONS,
};
