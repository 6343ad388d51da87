//! Search configuration.

use serde::{Deserialize, Serialize};

/// Which evaluator scores positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Explicit frame-stack evaluator (see [`Solver`](crate::Solver)).
    #[default]
    Iterative,
    /// Plain recursive minimax (see [`recursive_value`](crate::recursive_value)).
    Recursive,
}

/// Options for a search.
///
/// The default runs the iterative evaluator with no node budget, which always
/// completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub method: Method,
    /// Maximum positions a single iterative evaluation may visit.
    /// Ignored by the recursive evaluator.
    pub node_budget: Option<u64>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_node_budget(mut self, budget: u64) -> Self {
        self.node_budget = Some(budget);
        self
    }
}
