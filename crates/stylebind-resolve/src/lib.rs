//! # Stylebind Resolve - Stylesheet Import Resolution
//!
//! `stylebind-resolve` locates the files behind stylesheet import specifiers.
//! It implements two resolution strategies:
//!
//! - [`resolve_tilde_import`]: webpack-style `~` imports, resolved against the
//!   nearest `node_modules` directory with the stylesheet ecosystem's fallback
//!   conventions (implicit extensions, `_`-prefixed partials, package index
//!   files)
//! - [`PathAliases`]: compiler-style path remapping (`baseUrl` + `paths` with
//!   `*` wildcards)
//!
//! Both implement the [`ImportResolver`] trait so callers can try them as an
//! ordered strategy list. A miss is a defined `None`, never an error: it tells
//! the caller to fall through to its own default resolution.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stylebind_resolve::{ImportResolver, PathAliases, TildeResolver};
//!
//! let aliases = PathAliases::new("/project", &[
//!     ("@styles/*".into(), vec!["src/styles/*".into()]),
//! ])?;
//!
//! // Strategies in priority order: aliases first, then tilde imports.
//! let resolvers: Vec<&dyn ImportResolver> = vec![&aliases, &TildeResolver];
//! let importing_file = std::path::Path::new("/project/src/app.module.scss");
//!
//! for resolver in &resolvers {
//!     if let Some(path) = resolver.resolve("~bootstrap/scss/grid", importing_file) {
//!         println!("resolved to {}", path.display());
//!         break;
//!     }
//! }
//! ```

mod alias;
mod error;
mod tilde;

use std::path::{Path, PathBuf};

pub use alias::PathAliases;
pub use error::AliasError;
pub use tilde::{resolve_tilde_import, STYLESHEET_EXTENSIONS};

/// A single import-resolution strategy.
///
/// Implementations answer "which file does this specifier name?" for the
/// specifiers they understand, and return `None` for everything else so the
/// next strategy in the caller's list gets a chance.
pub trait ImportResolver: Send + Sync {
    /// Resolves `specifier` as seen from `importing_file`.
    ///
    /// `None` means "not mine" or "no match", both of which defer to the next
    /// strategy; it is never an error.
    fn resolve(&self, specifier: &str, importing_file: &Path) -> Option<PathBuf>;
}

/// Tilde-import strategy wrapping [`resolve_tilde_import`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TildeResolver;

impl ImportResolver for TildeResolver {
    fn resolve(&self, specifier: &str, importing_file: &Path) -> Option<PathBuf> {
        resolve_tilde_import(specifier, importing_file)
    }
}

impl ImportResolver for PathAliases {
    fn resolve(&self, specifier: &str, _importing_file: &Path) -> Option<PathBuf> {
        self.lookup(specifier)
    }
}
