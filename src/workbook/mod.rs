mod output;
mod sheets;

pub use output::{format_cost, format_flag, format_number, write_summary, SUMMARY_HEADER};
pub use sheets::{
    load_lookups, load_workbook, read_sheet, DISH_INGREDIENT_SHEET, DISH_SHEET,
    INGREDIENT_COST_SHEET,
};
