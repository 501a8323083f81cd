//! Incremental construction of formulas.

use crate::formula::TypeFormula;
use formula_log::trace;

/// Builds a [`TypeFormula`] one parameter at a time.
///
/// ```
/// use type_formula::TypeFormulaBuilder;
///
/// let map = TypeFormulaBuilder::new("Map")
///     .leaf_param("String")
///     .param(TypeFormulaBuilder::new("List").leaf_param("Int").build())
///     .build();
///
/// assert_eq!(map.to_string(), "Map<String, List<Int>>");
/// ```
#[derive(Debug, Clone)]
pub struct TypeFormulaBuilder {
    name: String,
    type_parameters: Vec<TypeFormula>,
}

impl TypeFormulaBuilder {
    /// Starts a formula named `name` with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
        }
    }

    /// Appends a type parameter after the ones already added.
    pub fn param(mut self, parameter: TypeFormula) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    /// Appends a parameter that has no parameters of its own.
    pub fn leaf_param(self, name: impl Into<String>) -> Self {
        self.param(TypeFormula::leaf(name))
    }

    /// Appends every parameter from `parameters`, in iteration order.
    pub fn params(mut self, parameters: impl IntoIterator<Item = TypeFormula>) -> Self {
        self.type_parameters.extend(parameters);
        self
    }

    /// Finishes the formula.
    pub fn build(self) -> TypeFormula {
        let formula = TypeFormula::new(self.name, self.type_parameters);
        trace!("built type formula {}", formula);
        formula
    }
}
