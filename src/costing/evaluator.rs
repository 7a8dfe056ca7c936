use tracing::{debug, warn};

use crate::costing::{parse_formula, CostTable, Formula, IngredientMap, Usage};
use crate::error::{RecipeError, Result};
use crate::models::{Cost, Dish};

/// Evaluate the recipe cost of one dish.
///
/// Each formula term contributes `coefficient * quantity * unit_cost` for the
/// usage it references. An empty formula sums every usage of the dish, so a
/// dish without ingredients costs zero. A single ingredient without a known
/// cost makes the whole dish cost `Cost::Unknown`.
pub fn evaluate_dish_cost(
    dish: &Dish,
    ingredients: &IngredientMap,
    costs: &CostTable,
) -> Result<Cost> {
    let formula = parse_formula(&dish.formula).map_err(|source| RecipeError::MalformedFormula {
        dish: dish.name.clone(),
        source,
    })?;
    let usages = ingredients.usages_for(&dish.name);

    let weighted = resolve_terms(dish, &formula, usages)?;

    let total: Cost = weighted
        .iter()
        .map(|(coefficient, usage)| unit_cost(dish, usage, costs) * (coefficient * usage.quantity))
        .sum();

    if total.value().is_some_and(|v| !v.is_finite()) {
        return Err(RecipeError::CostOutOfRange {
            dish: dish.name.clone(),
        });
    }

    debug!("Dish '{}': formula '{}' -> {}", dish.name, dish.formula, total);
    Ok(total)
}

/// Pair every formula term with the usage it names.
fn resolve_terms<'a>(
    dish: &Dish,
    formula: &Formula,
    usages: &'a [Usage],
) -> Result<Vec<(f64, &'a Usage)>> {
    if formula.is_empty() {
        return Ok(usages.iter().map(|u| (1.0, u)).collect());
    }

    let mut weighted = Vec::with_capacity(formula.terms().len());
    for term in formula.terms() {
        let usage = find_usage(usages, &term.reference).ok_or_else(|| {
            RecipeError::UnknownIngredientReference {
                dish: dish.name.clone(),
                reference: term.reference.clone(),
            }
        })?;
        weighted.push((term.coefficient, usage));
    }

    for usage in usages {
        if !weighted.iter().any(|(_, u)| std::ptr::eq(*u, usage)) {
            warn!(
                "Dish '{}' lists ingredient '{}' but its formula does not use it",
                dish.name, usage.ingredient
            );
        }
    }

    Ok(weighted)
}

/// Aliases take priority over ingredient names.
fn find_usage<'a>(usages: &'a [Usage], reference: &str) -> Option<&'a Usage> {
    usages
        .iter()
        .find(|u| u.matches_alias(reference))
        .or_else(|| usages.iter().find(|u| u.matches_ingredient(reference)))
}

fn unit_cost(dish: &Dish, usage: &Usage, costs: &CostTable) -> Cost {
    let cost = Cost::from_option(costs.lookup(&usage.ingredient));
    if !cost.is_known() {
        warn!(
            "Missing ingredient cost for '{}' in dish '{}'",
            usage.ingredient, dish.name
        );
    }
    cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IngredientCost, IngredientUsage};
    use assert_float_eq::assert_float_absolute_eq;

    fn cost_table() -> CostTable {
        CostTable::from_rows(&[
            IngredientCost::new("flour", Some(1.5)),
            IngredientCost::new("egg", Some(0.3)),
            IngredientCost::new("butter", Some(2.0)),
            IngredientCost::new("saffron", None),
        ])
        .unwrap()
    }

    fn ingredient_map() -> IngredientMap {
        IngredientMap::from_rows(&[
            IngredientUsage::new("roast", "flour", 2.0).with_alias("A"),
            IngredientUsage::new("roast", "egg", 3.0).with_alias("B"),
            IngredientUsage::new("paella", "saffron", 1.0),
            IngredientUsage::new("paella", "flour", 1.0),
            IngredientUsage::new("cake", "butter", 1.0),
            IngredientUsage::new("cake", "egg", 1.0),
        ])
        .unwrap()
    }

    fn known(cost: Cost) -> f64 {
        cost.value().expect("cost should be known")
    }

    #[test]
    fn test_weighted_sum_by_name() {
        let dish = Dish::new("roast", "flour + egg");
        let cost = evaluate_dish_cost(&dish, &ingredient_map(), &cost_table()).unwrap();
        assert_float_absolute_eq!(known(cost), 3.9, 1e-9);
    }

    #[test]
    fn test_weighted_sum_by_alias_with_coefficients() {
        let dish = Dish::new("Roast", "=2*A + B");
        let cost = evaluate_dish_cost(&dish, &ingredient_map(), &cost_table()).unwrap();
        // 2 * (2 * 1.5) + 3 * 0.3
        assert_float_absolute_eq!(known(cost), 6.9, 1e-9);
    }

    #[test]
    fn test_empty_formula_sums_all_usages() {
        let dish = Dish::new("cake", "");
        let cost = evaluate_dish_cost(&dish, &ingredient_map(), &cost_table()).unwrap();
        assert_float_absolute_eq!(known(cost), 2.3, 1e-9);
    }

    #[test]
    fn test_no_usages_costs_zero() {
        let dish = Dish::new("water", "");
        let cost = evaluate_dish_cost(&dish, &ingredient_map(), &cost_table()).unwrap();
        assert_eq!(cost, Cost::Known(0.0));
    }

    #[test]
    fn test_missing_cost_is_unknown() {
        let dish = Dish::new("paella", "saffron + flour");
        let cost = evaluate_dish_cost(&dish, &ingredient_map(), &cost_table()).unwrap();
        assert_eq!(cost, Cost::Unknown);
    }

    #[test]
    fn test_missing_cost_row_is_unknown() {
        let map = IngredientMap::from_rows(&[IngredientUsage::new("stew", "truffle", 1.0)]).unwrap();
        let dish = Dish::new("stew", "truffle");
        let cost = evaluate_dish_cost(&dish, &map, &cost_table()).unwrap();
        assert_eq!(cost, Cost::Unknown);
    }

    #[test]
    fn test_unreferenced_missing_cost_is_ignored() {
        let dish = Dish::new("paella", "flour");
        let cost = evaluate_dish_cost(&dish, &ingredient_map(), &cost_table()).unwrap();
        assert_float_absolute_eq!(known(cost), 1.5, 1e-9);
    }

    #[test]
    fn test_unknown_reference_is_error() {
        let dish = Dish::new("roast", "flour + sugar");
        let err = evaluate_dish_cost(&dish, &ingredient_map(), &cost_table()).unwrap_err();
        match err {
            RecipeError::UnknownIngredientReference { dish, reference } => {
                assert_eq!(dish, "roast");
                assert_eq!(reference, "sugar");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reference_without_usages_is_error() {
        let dish = Dish::new("water", "flour");
        let err = evaluate_dish_cost(&dish, &ingredient_map(), &cost_table()).unwrap_err();
        assert!(matches!(err, RecipeError::UnknownIngredientReference { .. }));
    }

    #[test]
    fn test_malformed_formula_is_error() {
        let dish = Dish::new("roast", "flour * egg");
        let err = evaluate_dish_cost(&dish, &ingredient_map(), &cost_table()).unwrap_err();
        match err {
            RecipeError::MalformedFormula { dish, source } => {
                assert_eq!(dish, "roast");
                assert_eq!(source.position, 8);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_same_ingredient_under_two_aliases() {
        let map = IngredientMap::from_rows(&[
            IngredientUsage::new("cake", "egg", 2.0).with_alias("A"),
            IngredientUsage::new("cake", "egg", 3.0).with_alias("C"),
        ])
        .unwrap();

        let blank = evaluate_dish_cost(&Dish::new("cake", ""), &map, &cost_table()).unwrap();
        assert_float_absolute_eq!(known(blank), 1.5, 1e-9);

        let by_alias = evaluate_dish_cost(&Dish::new("cake", "A + C"), &map, &cost_table()).unwrap();
        assert_float_absolute_eq!(known(by_alias), 1.5, 1e-9);
    }

    #[test]
    fn test_overflowing_weight_is_malformed() {
        let dish = Dish::new("roast", "1e400*flour - 1e400*egg");
        let err = evaluate_dish_cost(&dish, &ingredient_map(), &cost_table()).unwrap_err();
        assert!(matches!(err, RecipeError::MalformedFormula { .. }));
    }

    #[test]
    fn test_overflowing_total_is_error() {
        let map = IngredientMap::from_rows(&[
            IngredientUsage::new("feast", "flour", 1e308),
            IngredientUsage::new("feast", "butter", 1e308),
        ])
        .unwrap();
        let dish = Dish::new("feast", "flour + butter");
        let err = evaluate_dish_cost(&dish, &map, &cost_table()).unwrap_err();
        assert!(matches!(err, RecipeError::CostOutOfRange { dish } if dish == "feast"));
    }

    #[test]
    fn test_alias_shadows_ingredient_name() {
        // Alias "egg" points at flour, so it wins over the ingredient named egg.
        let map = IngredientMap::from_rows(&[
            IngredientUsage::new("trick", "flour", 1.0).with_alias("egg"),
            IngredientUsage::new("trick", "egg", 1.0),
        ])
        .unwrap();
        let dish = Dish::new("trick", "egg");
        let cost = evaluate_dish_cost(&dish, &map, &cost_table()).unwrap();
        assert_float_absolute_eq!(known(cost), 1.5, 1e-9);
    }
}
