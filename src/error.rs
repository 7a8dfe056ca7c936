use thiserror::Error;

use crate::costing::FormulaError;
use crate::process::LookupKind;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Malformed formula for dish '{dish}': {source}")]
    MalformedFormula {
        dish: String,
        #[source]
        source: FormulaError,
    },

    #[error("Formula for dish '{dish}' references '{reference}', which is not one of its ingredients")]
    UnknownIngredientReference { dish: String, reference: String },

    #[error("No {kind} lookup for dish '{dish}' (key '{key}'){}", suggestion_suffix(.suggestion))]
    Lookup {
        dish: String,
        key: String,
        kind: LookupKind,
        suggestion: Option<String>,
    },

    #[error("Cost of dish '{dish}' is too large to represent")]
    CostOutOfRange { dish: String },

    #[error("Dish listed more than once: {0}")]
    DuplicateDish(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(", did you mean '{}'?", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
