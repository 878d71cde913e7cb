//! Textual spend-chart rendering.

use crate::domain::Category;
use crate::errors::ChartError;

/// Most categories a single chart can hold.
pub const MAX_CHART_CATEGORIES: usize = 4;

const TITLE: &str = "Percentage spent by category";
const CELL_WIDTH: usize = 3;

/// Renders a bar chart of each category's share of total withdrawals,
/// followed by a vertical name legend.
///
/// Eleven rows cover the thresholds 100 down to 0 in steps of ten; a
/// category's column is marked on every row its percentage reaches. Bar and
/// legend rows carry a single trailing space after the last cell.
///
/// Degenerate input is rejected with a [`ChartError`]: an empty slice, more
/// than [`MAX_CHART_CATEGORIES`] entries, or no withdrawals anywhere (the
/// percentages would divide by zero).
pub fn render_spend_chart(categories: &[Category]) -> Result<String, ChartError> {
    if categories.is_empty() {
        return Err(ChartError::NoCategories);
    }
    if categories.len() > MAX_CHART_CATEGORIES {
        return Err(ChartError::TooManyCategories {
            count: categories.len(),
            max: MAX_CHART_CATEGORIES,
        });
    }

    let percentages = spend_percentages(categories)?;

    let mut lines = vec![TITLE.to_string()];
    for threshold in (0..=100u32).rev().step_by(10) {
        let mut row = format!("{threshold:>3}|");
        for pct in &percentages {
            row.push_str(if *pct >= threshold { " o " } else { "   " });
        }
        row.push(' ');
        lines.push(row);
    }
    lines.push(format!(
        "    {}",
        "-".repeat(CELL_WIDTH * categories.len() + 1)
    ));
    lines.extend(legend_rows(categories));
    Ok(lines.join("\n"))
}

/// Each category's share of the combined withdrawals, rounded half away
/// from zero to a whole percentage. Categories without withdrawals come
/// out at zero.
fn spend_percentages(categories: &[Category]) -> Result<Vec<u32>, ChartError> {
    let total: f64 = categories.iter().map(Category::withdrawn_total).sum();
    if total == 0.0 {
        return Err(ChartError::NoWithdrawals);
    }
    Ok(categories
        .iter()
        .map(|category| (category.withdrawn_total() / total * 100.0).round() as u32)
        .collect())
}

fn longest_name(categories: &[Category]) -> usize {
    categories
        .iter()
        .map(|category| category.name().chars().count())
        .max()
        .unwrap_or(0)
}

/// One legend row per character of the longest name; columns whose name has
/// run out render a blank cell.
fn legend_rows(categories: &[Category]) -> Vec<String> {
    (0..longest_name(categories))
        .map(|row_idx| {
            let mut row = String::from("    ");
            for category in categories {
                match category.name().chars().nth(row_idx) {
                    Some(ch) => {
                        row.push(' ');
                        row.push(ch);
                        row.push(' ');
                    }
                    None => row.push_str("   "),
                }
            }
            row.push(' ');
            row
        })
        .collect()
}
