use super::Cost;

/// Temperature and duration resolved for one dish.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessParameters {
    /// Dish name as written in the dish sheet.
    pub dish: String,

    /// Process temperature in degrees Celsius.
    pub temperature: f64,

    /// Process duration in minutes.
    pub duration: f64,
}

impl ProcessParameters {
    pub fn new(dish: &str, temperature: f64, duration: f64) -> Self {
        Self {
            dish: dish.to_string(),
            temperature,
            duration,
        }
    }

    /// Energy metric used to rank dishes (temperature x duration).
    #[inline]
    pub fn energy(&self) -> f64 {
        self.temperature * self.duration
    }
}

/// One output row of the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Dish name as written in the dish sheet.
    pub dish: String,

    /// Total ingredient cost, or unknown when any ingredient cost is missing.
    pub recipe_cash_cost: Cost,

    pub temp_deg_c: f64,

    pub time_mins: f64,

    /// Whether this dish has the highest energy of the run (ties all flagged).
    pub most_energy: bool,
}

impl SummaryRow {
    pub fn new(
        dish: String,
        recipe_cash_cost: Cost,
        temp_deg_c: f64,
        time_mins: f64,
        most_energy: bool,
    ) -> Self {
        Self {
            dish,
            recipe_cash_cost,
            temp_deg_c,
            time_mins,
            most_energy,
        }
    }

    pub fn energy(&self) -> f64 {
        self.temp_deg_c * self.time_mins
    }
}
