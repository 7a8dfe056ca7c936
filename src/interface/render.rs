use crate::models::SummaryRow;
use crate::workbook::{format_cost, format_flag, format_number, SUMMARY_HEADER};

/// Render summary rows as an aligned text table.
pub fn render_summary(rows: &[SummaryRow]) -> String {
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.dish.clone(),
                format_cost(row.recipe_cash_cost),
                format_number(row.temp_deg_c),
                format_number(row.time_mins),
                format_flag(row.most_energy).to_string(),
            ]
        })
        .collect();

    // Column widths in characters, not bytes, so accented dish names line up.
    let mut widths = SUMMARY_HEADER.map(|h| h.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &SUMMARY_HEADER.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, w))| {
            if i == 0 {
                format!("{:<width$}", cell, width = *w)
            } else {
                format!("{:>width$}", cell, width = *w)
            }
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Print the summary table for a dry run.
pub fn display_summary(rows: &[SummaryRow]) {
    if rows.is_empty() {
        println!("No dishes in the recipe book.");
        return;
    }

    println!();
    println!("=== Recipe Summary ({} dishes) ===", rows.len());
    println!();
    print!("{}", render_summary(rows));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cost;

    #[test]
    fn test_render_summary_alignment() {
        let rows = vec![
            SummaryRow::new("roast".to_string(), Cost::Known(3.9), 200.0, 75.0, false),
            SummaryRow::new("sautée".to_string(), Cost::Unknown, 160.0, 99.0, true),
        ];
        let table = render_summary(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("dish  "));
        assert!(lines[2].starts_with("roast   "));
        assert!(lines[3].contains("NaN"));
        assert!(lines[3].ends_with("True"));
        assert_eq!(lines[2].chars().count(), lines[3].chars().count());
    }
}
