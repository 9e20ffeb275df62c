/// Utilities for date and time formatting
///
/// Backend timestamps arrive as UTC; tables show them without seconds.
use chrono::{DateTime, Utc};

/// "2024-12-01 10:30", or "-" when unknown
pub fn format_datetime(dt: Option<DateTime<Utc>>) -> String {
    dt.map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// "01.12.2024", or "-" when unknown
pub fn format_date(dt: Option<DateTime<Utc>>) -> String {
    dt.map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Amount with two decimals and a rupee sign
pub fn format_money(value: f64) -> String {
    format!("₹{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 1, 10, 30, 59).unwrap();
        assert_eq!(format_datetime(Some(dt)), "2024-12-01 10:30");
        assert_eq!(format_date(Some(dt)), "01.12.2024");
    }

    #[test]
    fn test_missing_dates() {
        assert_eq!(format_datetime(None), "-");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1425.0), "₹1425.00");
        assert_eq!(format_money(12.5), "₹12.50");
    }
}
