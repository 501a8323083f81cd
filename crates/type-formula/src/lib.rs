//! Generic type expressions and their canonical text form.
//!
//! A [`TypeFormula`] is a type name with an ordered list of nested formulas
//! as its type parameters. Rendering it with [`std::fmt::Display`] produces
//! strings such as `List<Map<String, Int>>`.
//!
//! ```
//! use type_formula::TypeFormula;
//!
//! let ty = TypeFormula::new(
//!     "Pair",
//!     vec![TypeFormula::new("List", vec!["Int".into()]), "Bool".into()],
//! );
//! assert_eq!(ty.to_string(), "Pair<List<Int>, Bool>");
//! ```

pub mod builder;
pub mod display;
pub mod error;
pub mod formula;

pub use builder::TypeFormulaBuilder;
pub use error::{FormulaError, Result};
pub use formula::{Iter, TypeFormula};
