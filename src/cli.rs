use clap::Parser;

/// RecipeSummary — Summarize dish cost and cooking energy from a recipe book.
#[derive(Parser, Debug)]
#[command(name = "recipe_summary")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Recipe book directory holding dish.csv, dish_ingredient.csv and ingredient_cost.csv.
    #[arg(short, long, default_value = "recipe_book")]
    pub file: String,

    /// Path of the summary CSV to write.
    #[arg(short, long, default_value = "summary.csv")]
    pub output: String,

    /// JSON file with temperature and duration tables (defaults to the built-in tables).
    #[arg(short, long)]
    pub lookups: Option<String>,

    /// Print the summary instead of writing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter derived from the verbosity count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
