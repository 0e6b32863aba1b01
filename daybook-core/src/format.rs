//! Formatting helpers for console output.

/// Format a diary row as `<date> - <entry>`.
pub fn format_diary_line(date: &str, entry: &str) -> String {
    format!("{date} - {entry}")
}

/// Format the savings total line.
///
/// An empty table prints a bare `$0`. Otherwise the sum keeps its
/// round-trip float form with a fractional part (`12.5`, `20.0`).
pub fn format_total_savings(total: Option<f64>) -> String {
    match total {
        Some(sum) => format!("Total Savings: ${sum:?}"),
        None => "Total Savings: $0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_diary_line() {
        assert_eq!(
            format_diary_line("2024-03-09", "Went hiking"),
            "2024-03-09 - Went hiking"
        );
        assert_eq!(format_diary_line("2024-03-09", ""), "2024-03-09 - ");
    }

    #[test]
    fn test_format_total_savings() {
        assert_eq!(format_total_savings(None), "Total Savings: $0");
        assert_eq!(format_total_savings(Some(12.5)), "Total Savings: $12.5");
        assert_eq!(format_total_savings(Some(20.0)), "Total Savings: $20.0");
        assert_eq!(format_total_savings(Some(0.0)), "Total Savings: $0.0");
        assert_eq!(format_total_savings(Some(-3.25)), "Total Savings: $-3.25");
    }
}
