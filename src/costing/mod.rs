pub mod cost_table;
pub mod evaluator;
pub mod formula;
pub mod ingredient_map;

pub use cost_table::CostTable;
pub use evaluator::evaluate_dish_cost;
pub use formula::{parse_formula, Formula, FormulaError, Term};
pub use ingredient_map::{IngredientMap, Usage};
