//! Summary card formatting

use crate::ledger::Summary;

/// Format the headline figures for terminal output
pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let savings_rate = summary
        .savings_rate
        .map(|rate| format!("{}%", rate))
        .unwrap_or_else(|| "n/a (no income)".to_string());

    let mut output = String::new();
    output.push_str(&format!(
        "Total Income:     {:>14}\n",
        summary.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expenses:   {:>14}\n",
        summary.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining Budget: {:>14}{}\n",
        summary.remaining.format_with_symbol(symbol),
        if summary.is_over_budget() { " *" } else { "" }
    ));
    output.push_str(&format!("Savings Rate:     {:>14}\n", savings_rate));
    output
}
