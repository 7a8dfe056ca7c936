use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{RecipeError, Result};
use crate::models::{Dish, IngredientCost, IngredientUsage, Workbook};
use crate::process::LookupTables;

pub const DISH_SHEET: &str = "dish.csv";
pub const DISH_INGREDIENT_SHEET: &str = "dish_ingredient.csv";
pub const INGREDIENT_COST_SHEET: &str = "ingredient_cost.csv";

/// Load the three sheets of a recipe book directory.
pub fn load_workbook<P: AsRef<Path>>(dir: P) -> Result<Workbook> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(RecipeError::InvalidInput(format!(
            "recipe book directory not found: {}",
            dir.display()
        )));
    }

    let workbook = Workbook {
        dishes: read_sheet::<Dish, _>(dir.join(DISH_SHEET))?,
        usages: read_sheet::<IngredientUsage, _>(dir.join(DISH_INGREDIENT_SHEET))?,
        costs: read_sheet::<IngredientCost, _>(dir.join(INGREDIENT_COST_SHEET))?,
    };

    info!(
        "Loaded recipe book {} ({} dishes, {} ingredient rows, {} cost rows)",
        dir.display(),
        workbook.dishes.len(),
        workbook.usages.len(),
        workbook.costs.len()
    );
    Ok(workbook)
}

/// Read one sheet as rows of `T`, matched by header name.
///
/// Surrounding whitespace in cells is trimmed and blank cells map to `None`.
pub fn read_sheet<T, P>(path: P) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let rows = rdr.deserialize().collect::<std::result::Result<Vec<T>, _>>()?;
    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load process lookup tables from a JSON file.
pub fn load_lookups<P: AsRef<Path>>(path: P) -> Result<LookupTables> {
    let content = fs::read_to_string(path)?;
    let tables: LookupTables = serde_json::from_str(&content)?;
    Ok(tables)
}
