//! The `TypeFormula` tree.
//!
//! A formula is a base type name plus an ordered list of nested formulas, its
//! type parameters. `Map<String, List<Int>>` is the node `Map` with two
//! parameters, `String` and `List<Int>`.
//!
//! # Design
//!
//! - Fields are private and there are no setters. A formula is built once and
//!   read afterwards; [`TypeFormula::with_parameter`] returns a modified copy.
//! - Parameters are owned by their parent, so a formula can never contain
//!   itself and every tree is finite.
//! - Traversals (`depth`, `node_count`, `iter`), rendering, cloning,
//!   comparing, hashing and dropping use explicit stacks, so deep trees do
//!   not overflow the call stack. Only the derived `Debug` recurses.

use crate::error::{FormulaError, Result};
use std::hash::{Hash, Hasher};

/// A possibly generic type expression.
///
/// Equality is structural: same name and equal parameters in the same order.
#[derive(Debug)]
pub struct TypeFormula {
    name: String,
    type_parameters: Vec<TypeFormula>,
}

impl TypeFormula {
    /// Creates a formula from a name and its type parameters, stored as given.
    ///
    /// Any name is accepted, including the empty string.
    pub fn new(name: impl Into<String>, type_parameters: Vec<TypeFormula>) -> Self {
        Self {
            name: name.into(),
            type_parameters,
        }
    }

    /// Creates a formula with no type parameters.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// The base type name, e.g. `List` in `List<Int>`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type parameters in declaration order.
    pub fn type_parameters(&self) -> &[TypeFormula] {
        &self.type_parameters
    }

    /// Whether the formula has at least one type parameter.
    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }

    /// Number of direct type parameters.
    pub fn arity(&self) -> usize {
        self.type_parameters.len()
    }

    /// The type parameter at `index`, if there is one.
    pub fn parameter(&self, index: usize) -> Option<&TypeFormula> {
        self.type_parameters.get(index)
    }

    /// Height of the tree. A formula without parameters has depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];

        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.type_parameters.iter().map(|p| (p, depth + 1)));
        }

        max
    }

    /// Number of formulas in the tree, this one included.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Visits every formula in the tree, parents before their parameters and
    /// parameters left to right.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Returns a copy with the parameter at `index` replaced by `parameter`.
    ///
    /// # Errors
    ///
    /// [`FormulaError::ParameterOutOfBounds`] if `index >= self.arity()`.
    pub fn with_parameter(&self, index: usize, parameter: TypeFormula) -> Result<TypeFormula> {
        if index >= self.arity() {
            return Err(FormulaError::ParameterOutOfBounds {
                index,
                arity: self.arity(),
            });
        }

        let mut formula = self.clone();
        formula.type_parameters[index] = parameter;
        Ok(formula)
    }

    /// Splits the formula into its name and parameters.
    pub fn into_parts(mut self) -> (String, Vec<TypeFormula>) {
        (
            std::mem::take(&mut self.name),
            std::mem::take(&mut self.type_parameters),
        )
    }
}

impl Clone for TypeFormula {
    fn clone(&self) -> Self {
        // Each frame is a source node and the copies of its parameters made so far.
        let mut frames = vec![(self, Vec::with_capacity(self.arity()))];

        while let Some((node, copies)) = frames.pop() {
            if let Some(next) = node.type_parameters.get(copies.len()) {
                frames.push((node, copies));
                frames.push((next, Vec::with_capacity(next.arity())));
                continue;
            }

            let copy = TypeFormula::new(node.name.clone(), copies);
            match frames.last_mut() {
                Some((_, parent_copies)) => parent_copies.push(copy),
                None => return copy,
            }
        }

        unreachable!("the root frame always returns its copy")
    }
}

impl PartialEq for TypeFormula {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];

        while let Some((a, b)) = pairs.pop() {
            if a.name != b.name || a.arity() != b.arity() {
                return false;
            }
            pairs.extend(a.type_parameters.iter().zip(&b.type_parameters));
        }

        true
    }
}

impl Eq for TypeFormula {}

impl Hash for TypeFormula {
    // Names and arities in pre-order identify the tree, matching `eq`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        for node in self.iter() {
            node.name.hash(state);
            node.arity().hash(state);
        }
    }
}

impl Drop for TypeFormula {
    // Flattens the tree before it is freed; the derived drop would recurse
    // once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.type_parameters);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.type_parameters);
        }
    }
}

impl From<&str> for TypeFormula {
    fn from(name: &str) -> Self {
        Self::leaf(name)
    }
}

impl From<String> for TypeFormula {
    fn from(name: String) -> Self {
        Self::leaf(name)
    }
}

impl<'a> IntoIterator for &'a TypeFormula {
    type Item = &'a TypeFormula;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Pre-order iterator over a formula tree, created by [`TypeFormula::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: Vec<&'a TypeFormula>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TypeFormula;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the leftmost parameter is popped first.
        self.stack.extend(node.type_parameters.iter().rev());
        Some(node)
    }
}
