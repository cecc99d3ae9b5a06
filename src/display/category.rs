//! Category status table

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::format_category_name;
use crate::ledger::CategoryStatus;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "")]
    icon: String,
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Budget")]
    budgeted: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
}

impl CategoryRow {
    fn new(status: &CategoryStatus, symbol: &str) -> Self {
        let remaining = status.remaining.format_with_symbol(symbol);
        Self {
            icon: status.meta.icon.clone(),
            name: format_category_name(&status.key),
            spent: status.spent.format_with_symbol(symbol),
            budgeted: status.budgeted.format_with_symbol(symbol),
            remaining: if status.is_overspent() {
                format!("{} *", remaining)
            } else {
                remaining
            },
            used: status
                .percent_used
                .map(|p| format!("{}%", p))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// One-line status, e.g. "Food: $666.50 of $800.00 (83% used), $133.50 remaining"
pub fn format_category_line(status: &CategoryStatus, symbol: &str) -> String {
    let used = status
        .percent_used
        .map(|p| format!(" ({}% used)", p))
        .unwrap_or_default();
    let position = if status.is_overspent() {
        format!("{} over budget", status.remaining.abs().format_with_symbol(symbol))
    } else {
        format!("{} remaining", status.remaining.format_with_symbol(symbol))
    };

    format!(
        "{}: {} of {}{}, {}",
        format_category_name(&status.key),
        status.spent.format_with_symbol(symbol),
        status.budgeted.format_with_symbol(symbol),
        used,
        position
    )
}

/// Format every category status as a table
pub fn format_category_table(statuses: &[CategoryStatus], symbol: &str) -> String {
    if statuses.is_empty() {
        return "No categories configured.".to_string();
    }

    let rows: Vec<CategoryRow> = statuses.iter().map(|s| CategoryRow::new(s, symbol)).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut output = table.to_string();
    if statuses.iter().any(CategoryStatus::is_overspent) {
        output.push_str("\n* over budget");
    }
    output
}
