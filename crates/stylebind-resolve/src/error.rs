//! Error types for the resolve crate.

use thiserror::Error;

/// Errors raised while building a [`PathAliases`](crate::PathAliases) table.
///
/// Resolution itself never errors (a miss is `None`); only a malformed
/// remapping configuration is rejected, at construction time.
#[derive(Debug, Error)]
pub enum AliasError {
    /// An alias pattern may contain at most one `*` wildcard.
    #[error("alias pattern '{0}' has more than one wildcard")]
    MultipleWildcards(String),

    /// An alias target may contain at most one `*` wildcard.
    #[error("alias target '{0}' for pattern '{1}' has more than one wildcard")]
    MultipleTargetWildcards(String, String),

    /// A wildcard target needs a wildcard pattern to substitute from.
    #[error("alias target '{0}' has a wildcard but pattern '{1}' does not")]
    TargetWildcardWithoutPattern(String, String),
}
