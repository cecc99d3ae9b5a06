//! Small text helpers shared by the dashboard views

use chrono::{DateTime, Utc};

const DAY_MS: u64 = 24 * 60 * 60 * 1000;

/// Turn a category key into a title: "health-care" becomes "Health Care"
pub fn format_category_name(key: &str) -> String {
    key.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Describe a timestamp relative to `now`
///
/// Anything within the last 24 hours is "Today", the 24 hours before that
/// "Yesterday", then "N days ago" up to a week, then the formatted date.
pub fn format_relative_date(
    timestamp: DateTime<Utc>,
    now: DateTime<Utc>,
    date_format: &str,
) -> String {
    let elapsed_ms = (now - timestamp).num_milliseconds().unsigned_abs();
    // Counted in started days, so the current instant is day 1
    let days = elapsed_ms.div_ceil(DAY_MS).max(1);

    match days {
        1 => "Today".to_string(),
        2 => "Yesterday".to_string(),
        d if d <= 7 => format!("{} days ago", d - 1),
        _ => timestamp.format(date_format).to_string(),
    }
}
