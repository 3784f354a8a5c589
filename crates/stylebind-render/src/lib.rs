//! # Stylebind Render - Dialect Normalization
//!
//! `stylebind-render` turns stylesheet source in any supported dialect into
//! canonical CSS, ready for class-name extraction. It owns three seams:
//!
//! - [`Dialect`]: the closed set of recognized dialects, selected from the
//!   file extension in one place
//! - [`Renderer`]: the engine abstraction — per-dialect compilers are opaque
//!   functions behind this trait, registered on a [`RendererRegistry`]
//! - [`Logger`]: the reporting collaborator every caught failure goes through
//!
//! The [`Normalizer`] is the failure boundary: a renderer error of any kind
//! (syntax, unresolved import, missing engine) is logged and degraded to an
//! empty canonical-CSS result. Nothing past this module ever sees a broken
//! stylesheet as anything other than an empty-but-valid one.
//!
//! ## Import resolution
//!
//! SCSS-family engines receive an ordered list of
//! [`ImportResolver`](stylebind_resolve::ImportResolver) strategies through
//! [`RenderContext::resolvers`]: a path-alias table first, the tilde resolver
//! second. Engines try each in turn and fall back to their own load-path
//! search when all return `None`.
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//! use stylebind_render::{
//!     Dialect, NullLogger, Normalizer, RenderContext, RendererRegistry,
//! };
//!
//! let normalizer = Normalizer::new(RendererRegistry::default());
//! let ctx = RenderContext {
//!     file_name: Path::new("app.module.css"),
//!     dialect: Dialect::Css,
//!     logger: &NullLogger,
//!     resolvers: &[],
//!     load_paths: &[],
//!     options: None,
//! };
//!
//! // Plain CSS passes through unchanged.
//! let output = normalizer.normalize(".a { color: red; }", &ctx);
//! assert_eq!(output.css, ".a { color: red; }");
//! ```

mod dialect;
mod error;
mod logger;
mod normalize;
mod renderer;

pub use dialect::Dialect;
pub use error::RenderError;
pub use logger::{FacadeLogger, Logger, NullLogger};
pub use normalize::Normalizer;
pub use renderer::{
    PassthroughRenderer, RenderContext, RenderOutput, Renderer, RendererRegistry,
};
