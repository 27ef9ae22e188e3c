/// Date formatting for sale records
use chrono::NaiveDate;

/// Format an ISO sale date for display: "2024-11-05" -> "05 Nov 2024"
///
/// A time part ("2024-11-05T10:00:00" or "2024-11-05 10:00:00") is dropped.
/// Anything that is not a valid date is returned unchanged.
pub fn format_sale_date(date_str: &str) -> String {
    let date_part = date_str
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}
