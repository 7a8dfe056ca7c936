use std::collections::HashSet;

use tracing::info;

use crate::costing::{evaluate_dish_cost, CostTable, IngredientMap};
use crate::error::{RecipeError, Result};
use crate::models::{Cost, Dish, ProcessParameters, SummaryRow, Workbook};
use crate::process::{flag_most_energy, resolve_parameters, ProcessLookup};

/// Compute the summary for a whole recipe book.
///
/// Rows follow dish-sheet order. The run stops at the first fatal error, so
/// either every dish gets a complete row or no rows are returned.
pub fn summarize(workbook: &Workbook, lookup: &dyn ProcessLookup) -> Result<Vec<SummaryRow>> {
    check_unique_dishes(&workbook.dishes)?;

    let costs = CostTable::from_rows(&workbook.costs)?;
    let ingredients = IngredientMap::from_rows(&workbook.usages)?;
    info!(
        "Loaded {} dishes, {} ingredient costs, ingredients for {} dishes",
        workbook.dishes.len(),
        costs.len(),
        ingredients.len()
    );

    let dish_costs = workbook
        .dishes
        .iter()
        .map(|dish| evaluate_dish_cost(dish, &ingredients, &costs))
        .collect::<Result<Vec<_>>>()?;

    let params = workbook
        .dishes
        .iter()
        .map(|dish| resolve_parameters(dish, lookup))
        .collect::<Result<Vec<_>>>()?;

    let flags = flag_most_energy(&params);

    let rows = build_rows(&workbook.dishes, dish_costs, params, flags);
    info!("Generated summary with {} rows", rows.len());
    Ok(rows)
}

/// Zip the per-dish columns into rows, in dish order.
///
/// All columns must have one entry per dish.
pub fn build_rows(
    dishes: &[Dish],
    costs: Vec<Cost>,
    params: Vec<ProcessParameters>,
    flags: Vec<bool>,
) -> Vec<SummaryRow> {
    debug_assert_eq!(dishes.len(), costs.len());
    debug_assert_eq!(dishes.len(), params.len());
    debug_assert_eq!(dishes.len(), flags.len());

    dishes
        .iter()
        .zip(costs)
        .zip(params)
        .zip(flags)
        .map(|(((dish, cost), p), flag)| {
            SummaryRow::new(dish.name.clone(), cost, p.temperature, p.duration, flag)
        })
        .collect()
}

fn check_unique_dishes(dishes: &[Dish]) -> Result<()> {
    let mut seen = HashSet::with_capacity(dishes.len());
    for dish in dishes {
        if !seen.insert(dish.key()) {
            return Err(RecipeError::DuplicateDish(dish.name.clone()));
        }
    }
    Ok(())
}
