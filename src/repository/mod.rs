pub mod formulas;
pub use formulas::{FormulaRepository, InMemoryFormulaRepository, RepositoryError, SavedFormula};
