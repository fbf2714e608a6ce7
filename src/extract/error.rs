//! The fatal error surface of the extraction pass.

use thiserror::Error;

/// Errors that abort a pass.
///
/// Everything else the pass encounters (unknown kinds, stray
/// identifiers, unsliceable subtrees) is downgraded to a
/// [`Diagnostic`](super::Diagnostic); only a malformed tree that nests
/// past the configured depth bound is fatal, since continuing would risk
/// unbounded stack growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("syntax tree nesting exceeds the configured depth limit of {limit}")]
    DepthExceeded { limit: usize },
}
