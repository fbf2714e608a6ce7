//! Outline extraction.
//!
//! The traversal engine drives one synchronous depth-first pass over the
//! collaborator's walk events and feeds them through the resolver state
//! machine. Each call owns its own arena, scope stack, window and
//! diagnostics; nothing is shared between invocations, and nothing is
//! patched incrementally — the caller re-runs the pass on every relevant
//! document change.

mod arena;
mod diagnostics;
mod error;
mod resolver;
mod window;

pub use diagnostics::{Diagnostic, Severity};
pub use error::ExtractError;

use tracing::trace;

use crate::profile::Profile;
use crate::symbol::SymbolNode;
use crate::tree::{CstNode, TextSource, WalkEvent};
use resolver::Resolver;

/// Default bound on tree nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Tuning knobs for a pass.
#[derive(Clone, Copy, Debug)]
pub struct ExtractOptions {
    /// Nesting depth at which the pass gives up with
    /// [`ExtractError::DepthExceeded`] instead of risking overflow on a
    /// malformed tree.
    pub max_depth: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The result of a pass: the resolved forest in document order, plus
/// the non-fatal diagnostics collected along the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outline {
    pub symbols: Vec<SymbolNode>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Outline {
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Extraction entry point carrying options.
#[derive(Clone, Copy, Debug, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Run one pass over `events` against `profile`, slicing node text
    /// out of `text`.
    ///
    /// Unclassified kinds are ignored; stray identifiers and skipped
    /// subtrees become diagnostics; only a depth-bound violation is
    /// fatal, in which case the caller may fall back to an empty forest.
    pub fn extract<N, I, T>(
        &self,
        events: I,
        text: &T,
        profile: &Profile,
    ) -> Result<Outline, ExtractError>
    where
        N: CstNode,
        I: IntoIterator<Item = WalkEvent<N>>,
        T: TextSource + ?Sized,
    {
        let mut resolver = Resolver::new(profile);
        let mut depth = 0usize;
        // While skipping, the failed node and the depth of its enter
        // event; processing resumes after its matching leave.
        let mut skipping: Option<(N, usize)> = None;

        for event in events {
            match event {
                WalkEvent::Enter(node) => {
                    depth += 1;
                    if depth > self.options.max_depth {
                        return Err(ExtractError::DepthExceeded {
                            limit: self.options.max_depth,
                        });
                    }
                    if skipping.is_some() {
                        continue;
                    }
                    if let Err(diagnostic) = resolver.enter(&node, text) {
                        trace!(kind = node.kind(), "skipping subtree");
                        resolver.record(diagnostic);
                        skipping = Some((node, depth));
                    }
                }
                WalkEvent::Leave(node) => {
                    if let Some((skip_node, skip_depth)) = skipping.as_ref() {
                        let done = *skip_depth == depth && skip_node == &node;
                        depth = depth.saturating_sub(1);
                        if done {
                            skipping = None;
                        }
                        continue;
                    }
                    depth = depth.saturating_sub(1);
                    resolver.leave(&node);
                }
            }
        }

        let (symbols, diagnostics) = resolver.finish();
        Ok(Outline {
            symbols,
            diagnostics,
        })
    }
}

/// Run one pass with default options. See [`Extractor::extract`].
pub fn extract<N, I, T>(events: I, text: &T, profile: &Profile) -> Result<Outline, ExtractError>
where
    N: CstNode,
    I: IntoIterator<Item = WalkEvent<N>>,
    T: TextSource + ?Sized,
{
    Extractor::default().extract(events, text, profile)
}
