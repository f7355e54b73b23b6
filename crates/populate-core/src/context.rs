//! Traversal context and the context handed to randomizers.
//!
//! [`TraversalContext`] mirrors the active recursion of one root populate
//! call: a stack of member names rendered as a dotted path, plus the set of
//! type names currently under construction (the cycle guard). Both are
//! created fresh per root call and discarded at its end.

use crate::config::PopulateConfig;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Per-call traversal state: path stack and cycle guard.
#[derive(Debug, Default)]
pub struct TraversalContext {
    stack: Vec<String>,
    under_construction: HashSet<String>,
}

impl TraversalContext {
    /// Create an empty context for a new root populate call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a member name onto the path before descending into it.
    pub(crate) fn push_member(&mut self, name: &str) {
        self.stack.push(name.to_string());
    }

    /// Pop the last member name after returning from it.
    pub(crate) fn pop_member(&mut self) {
        self.stack.pop();
    }

    /// The dotted path from the root to the member under construction,
    /// e.g. `"b2.a2.s2"`. Empty at the root.
    pub fn current_path(&self) -> String {
        self.stack.join(".")
    }

    /// Current recursion depth in members.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Mark a type as under construction on the active path.
    ///
    /// Returns `false` if the type is already being constructed, in which
    /// case the caller must not recurse into it.
    pub(crate) fn enter_type(&mut self, name: &str) -> bool {
        self.under_construction.insert(name.to_string())
    }

    /// Unmark a type once its construction finished.
    pub(crate) fn leave_type(&mut self, name: &str) {
        self.under_construction.remove(name);
    }
}

/// Context handed to a randomizer at invocation time.
///
/// Exposes the current traversal path (read-only), the ambient
/// configuration and the engine's seeded RNG. Randomizers must not assume
/// the context persists past the call.
pub struct RandomizerContext<'a> {
    traversal: &'a TraversalContext,
    config: &'a PopulateConfig,
    rng: &'a mut StdRng,
}

impl<'a> RandomizerContext<'a> {
    pub(crate) fn new(
        traversal: &'a TraversalContext,
        config: &'a PopulateConfig,
        rng: &'a mut StdRng,
    ) -> Self {
        Self {
            traversal,
            config,
            rng,
        }
    }

    /// Dotted path of the member currently being populated.
    ///
    /// Matching is by exact string equality; there is no glob layer.
    pub fn current_field(&self) -> String {
        self.traversal.current_path()
    }

    /// Current recursion depth in members.
    pub fn depth(&self) -> usize {
        self.traversal.depth()
    }

    /// Ambient configuration of the running populate call.
    pub fn config(&self) -> &PopulateConfig {
        self.config
    }

    /// The engine's seeded RNG. Values must be drawn from here to keep
    /// population deterministic under a fixed seed.
    pub fn rng(&mut self) -> &mut StdRng {
        self.rng
    }
}
