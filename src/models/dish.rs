use serde::Deserialize;

/// Canonical key for joins across sheets and lookups (trimmed, lowercase).
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A row of the `dish` sheet.
///
/// The lookup key columns are optional; when blank the dish name is used.
#[derive(Debug, Clone, Deserialize)]
pub struct Dish {
    #[serde(rename = "dish")]
    pub name: String,

    #[serde(rename = "recipe_cost", default)]
    pub formula: String,

    #[serde(rename = "temperature", default)]
    pub temperature_key: Option<String>,

    #[serde(rename = "duration", default)]
    pub duration_key: Option<String>,
}

impl Dish {
    pub fn new(name: &str, formula: &str) -> Self {
        Self {
            name: name.to_string(),
            formula: formula.to_string(),
            temperature_key: None,
            duration_key: None,
        }
    }

    /// Canonical key for lookups (trimmed, lowercase name).
    pub fn key(&self) -> String {
        normalize_key(&self.name)
    }

    /// Key used against the temperature lookup.
    pub fn temperature_key(&self) -> String {
        lookup_key(self.temperature_key.as_deref(), &self.name)
    }

    /// Key used against the duration lookup.
    pub fn duration_key(&self) -> String {
        lookup_key(self.duration_key.as_deref(), &self.name)
    }
}

fn lookup_key(explicit: Option<&str>, fallback: &str) -> String {
    match explicit {
        Some(k) if !k.trim().is_empty() => normalize_key(k),
        _ => normalize_key(fallback),
    }
}

/// A row of the `dish_ingredient` sheet.
///
/// `alias` is the short name (e.g. `A`) a formula may use instead of the
/// ingredient name. A blank quantity counts as one unit.
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientUsage {
    pub dish: String,

    pub ingredient: String,

    #[serde(default)]
    pub quantity: Option<f64>,

    #[serde(rename = "ingredient_map", default)]
    pub alias: Option<String>,
}

impl IngredientUsage {
    pub fn new(dish: &str, ingredient: &str, quantity: f64) -> Self {
        Self {
            dish: dish.to_string(),
            ingredient: ingredient.to_string(),
            quantity: Some(quantity),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }
}

/// A row of the `ingredient_cost` sheet. A blank cost means the cost is unknown.
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientCost {
    pub ingredient: String,

    #[serde(default)]
    pub cost: Option<f64>,
}

impl IngredientCost {
    pub fn new(ingredient: &str, cost: Option<f64>) -> Self {
        Self {
            ingredient: ingredient.to_string(),
            cost,
        }
    }
}

/// The three sheets of a recipe book, each in sheet order.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub dishes: Vec<Dish>,
    pub usages: Vec<IngredientUsage>,
    pub costs: Vec<IngredientCost>,
}
