//! Error types for type formula operations.
//!
//! Building and rendering a formula never fail. Errors only come from the
//! checked operations: replacing a parameter by index and depth-bounded
//! rendering.

use std::fmt;

/// Errors returned by the checked `TypeFormula` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormulaError {
    /// A parameter index past the end of `type_parameters`.
    ParameterOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of parameters the formula has.
        arity: usize,
    },

    /// The formula is deeper than the caller allowed.
    DepthLimitExceeded {
        /// The maximum depth requested.
        limit: usize,
        /// The actual depth of the formula.
        depth: usize,
    },
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaError::ParameterOutOfBounds { index, arity } => {
                write!(f, "Type parameter index {index} out of bounds for arity {arity}")
            }
            FormulaError::DepthLimitExceeded { limit, depth } => {
                write!(f, "Type formula depth {depth} exceeds limit {limit}")
            }
        }
    }
}

impl std::error::Error for FormulaError {}

/// Result type for type formula operations.
pub type Result<T> = std::result::Result<T, FormulaError>;
