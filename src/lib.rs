pub mod cli;
pub mod costing;
pub mod error;
pub mod interface;
pub mod models;
pub mod process;
pub mod summary;
pub mod workbook;

pub use error::{RecipeError, Result};
pub use models::{Cost, Dish, SummaryRow, Workbook};
