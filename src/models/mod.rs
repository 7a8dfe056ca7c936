mod cost;
mod dish;
mod summary;

pub use cost::Cost;
pub use dish::{normalize_key, Dish, IngredientCost, IngredientUsage, Workbook};
pub use summary::{ProcessParameters, SummaryRow};
