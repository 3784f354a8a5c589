//! Error types for dialect rendering.

use thiserror::Error;

use crate::dialect::Dialect;

/// Errors surfaced by renderer engines.
///
/// These never cross the [`Normalizer`](crate::Normalizer) boundary: every
/// variant is caught there, reported through the logger, and degraded to an
/// empty canonical-CSS result.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The engine rejected the source (syntax error, evaluation error).
    #[error("render failed: {0}")]
    Engine(String),

    /// An import could not be resolved by any strategy or load path.
    #[error("unresolved import '{0}'")]
    UnresolvedImport(String),

    /// No engine is registered for a dialect that needs one.
    #[error("no renderer registered for dialect '{0}'")]
    MissingRenderer(Dialect),

    /// Reading an imported file failed.
    #[error("I/O error during render: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderError::MissingRenderer(Dialect::Scss);
        assert_eq!(err.to_string(), "no renderer registered for dialect 'scss'");

        let err = RenderError::UnresolvedImport("~missing/pkg".into());
        assert!(err.to_string().contains("~missing/pkg"));
    }
}
