/// Utilities for date formatting
///
/// Dates travel as ISO strings (`YYYY-MM-DD`) and are shown as `dd/MM/yyyy`.
use chrono::NaiveDate;

/// Display format for dates
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Format a date for display
/// Example: 2025-07-06 -> "06/07/2025"
pub fn format_naive_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Format ISO date string to dd/MM/yyyy format
/// Example: "2025-07-06" or "2025-07-06T14:02:26Z" -> "06/07/2025"
///
/// Unparsable input is returned unchanged.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format_naive_date(date),
        Err(_) => date_str.to_string(),
    }
}

/// Format an optional date, `-` when absent
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_naive_date).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-07-06"), "06/07/2025");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_format_optional_date() {
        assert_eq!(format_optional_date(None), "-");
        assert_eq!(
            format_optional_date(NaiveDate::from_ymd_opt(2025, 6, 2)),
            "02/06/2025"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date("2025-13-40"), "2025-13-40");
        assert_eq!(format_date(""), "");
    }
}
