use std::collections::HashMap;

use tracing::debug;

use crate::error::{RecipeError, Result};
use crate::models::{normalize_key, IngredientUsage};

/// One ingredient used by a dish, with keys already normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Usage {
    pub ingredient: String,
    pub alias: Option<String>,
    pub quantity: f64,
}

impl Usage {
    /// Whether a formula reference names this usage, by alias or by ingredient.
    pub fn matches(&self, reference: &str) -> bool {
        self.matches_alias(reference) || self.matches_ingredient(reference)
    }

    pub fn matches_alias(&self, reference: &str) -> bool {
        self.alias.as_deref() == Some(normalize_key(reference).as_str())
    }

    pub fn matches_ingredient(&self, reference: &str) -> bool {
        self.ingredient == normalize_key(reference)
    }

    /// Whether two rows describe the same usage: same alias, or same
    /// ingredient when neither has an alias.
    fn same_slot(&self, other: &Usage) -> bool {
        match (&self.alias, &other.alias) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.ingredient == other.ingredient,
            _ => false,
        }
    }
}

/// Ingredient usages grouped by normalized dish name, in sheet order.
#[derive(Debug, Clone, Default)]
pub struct IngredientMap {
    dishes: HashMap<String, Vec<Usage>>,
}

impl IngredientMap {
    /// Build the map from the `dish_ingredient` sheet.
    ///
    /// Rows are keyed by alias when they have one, otherwise by ingredient, so
    /// one ingredient may appear under several aliases. A repeated key keeps
    /// its first position and takes the values of the last row.
    pub fn from_rows(rows: &[IngredientUsage]) -> Result<Self> {
        let mut dishes: HashMap<String, Vec<Usage>> = HashMap::new();

        for (i, row) in rows.iter().enumerate() {
            let quantity = row.quantity.unwrap_or(1.0);
            if !quantity.is_finite() || quantity < 0.0 {
                return Err(RecipeError::InvalidInput(format!(
                    "dish_ingredient row {}: quantity of '{}' in '{}' must be a non-negative number, got {}",
                    i + 1,
                    row.ingredient,
                    row.dish,
                    quantity
                )));
            }

            let usage = Usage {
                ingredient: normalize_key(&row.ingredient),
                alias: row
                    .alias
                    .as_deref()
                    .map(normalize_key)
                    .filter(|a| !a.is_empty()),
                quantity,
            };

            let usages = dishes.entry(normalize_key(&row.dish)).or_default();
            match usages.iter_mut().find(|u| u.same_slot(&usage)) {
                Some(existing) => {
                    debug!(
                        "Ingredient '{}' ({:?}) listed again for dish '{}'; last row wins",
                        row.ingredient, usage.alias, row.dish
                    );
                    *existing = usage;
                }
                None => usages.push(usage),
            }
        }

        Ok(Self { dishes })
    }

    /// Usages for a dish in sheet order; empty when the dish has none.
    pub fn usages_for(&self, dish: &str) -> &[Usage] {
        self.dishes
            .get(&normalize_key(dish))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of dishes with at least one usage.
    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
