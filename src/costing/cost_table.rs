use std::collections::HashMap;

use tracing::debug;

use crate::error::{RecipeError, Result};
use crate::models::{normalize_key, IngredientCost};

/// Unit cost per ingredient, keyed by normalized ingredient name.
#[derive(Debug, Clone, Default)]
pub struct CostTable {
    /// `None` records an ingredient listed with a blank cost.
    costs: HashMap<String, Option<f64>>,
}

impl CostTable {
    /// Build the table from the `ingredient_cost` sheet.
    ///
    /// Deduplicates by normalized name (last occurrence wins, even when that
    /// row has a blank cost).
    pub fn from_rows(rows: &[IngredientCost]) -> Result<Self> {
        let mut costs = HashMap::with_capacity(rows.len());

        for (i, row) in rows.iter().enumerate() {
            if let Some(cost) = row.cost {
                if !cost.is_finite() || cost < 0.0 {
                    return Err(RecipeError::InvalidInput(format!(
                        "ingredient_cost row {}: cost for '{}' must be a non-negative number, got {}",
                        i + 1,
                        row.ingredient,
                        cost
                    )));
                }
            }

            let key = normalize_key(&row.ingredient);
            if let Some(previous) = costs.insert(key, row.cost) {
                debug!(
                    "Ingredient '{}' listed again; cost {:?} replaces {:?}",
                    row.ingredient, row.cost, previous
                );
            }
        }

        Ok(Self { costs })
    }

    /// Unit cost for an ingredient, if known.
    pub fn lookup(&self, ingredient: &str) -> Option<f64> {
        self.costs.get(&normalize_key(ingredient)).copied().flatten()
    }

    /// Whether the ingredient has a row at all (known or blank cost).
    pub fn contains(&self, ingredient: &str) -> bool {
        self.costs.contains_key(&normalize_key(ingredient))
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
