//! Rendering formulas as text.
//!
//! The canonical form is the name alone for a non-generic formula, otherwise
//! the name followed by the rendered parameters joined with `", "` inside
//! angle brackets:
//!
//! ```text
//! rendered := name ( "<" params ">" )?
//! params   := rendered ( ", " rendered )*
//! ```

use crate::error::{FormulaError, Result};
use crate::formula::TypeFormula;
use formula_log::debug;
use std::fmt;

/// Pending output while walking the tree.
enum Step<'a> {
    Formula(&'a TypeFormula),
    Text(&'static str),
}

impl fmt::Display for TypeFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Step::Formula(self)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Text(text) => f.write_str(text)?,
                Step::Formula(formula) => {
                    f.write_str(formula.name())?;

                    let params = formula.type_parameters();
                    if params.is_empty() {
                        continue;
                    }

                    write!(f, "<")?;
                    // Pushed back to front so they pop in declaration order.
                    stack.push(Step::Text(">"));
                    for (i, param) in params.iter().enumerate().rev() {
                        stack.push(Step::Formula(param));
                        if i > 0 {
                            stack.push(Step::Text(", "));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

impl TypeFormula {
    /// Renders the formula if it is at most `max_depth` levels deep.
    ///
    /// # Errors
    ///
    /// [`FormulaError::DepthLimitExceeded`] when `self.depth() > max_depth`.
    pub fn render_bounded(&self, max_depth: usize) -> Result<String> {
        let depth = self.depth();
        if depth > max_depth {
            debug!(
                "refusing to render {} (depth {depth}, limit {max_depth})",
                self.name()
            );
            return Err(FormulaError::DepthLimitExceeded {
                limit: max_depth,
                depth,
            });
        }

        Ok(self.to_string())
    }
}
