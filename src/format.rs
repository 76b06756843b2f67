//! Display formatting shared by the table, charts, status line and CSV export.
//!
//! Consumers format independently but through these helpers, so two-decimal
//! rounding and date layouts stay identical everywhere.

use chrono::{Datelike, NaiveDate};

/// `MM/YYYY`, used for chart labels and table rows.
pub fn month_year(date: NaiveDate) -> String {
    format!("{:02}/{}", date.month(), date.year())
}

/// `DD/MM/YYYY`, used by the CSV export.
pub fn day_month_year(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `R$ 5.49`
pub fn currency(value: f64) -> String {
    format!("R$ {value:.2}")
}

/// `0.39%`
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Fixed decimals, or `-` for a missing value.
pub fn optional(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "-".to_string(),
    }
}

/// Fractional year (`2025.0` = January 2025) used as the plot x coordinate.
pub fn fractional_year(date: NaiveDate) -> f64 {
    date.year() as f64 + (date.month0() as f64) / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_layouts() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(month_year(d), "03/2025");
        assert_eq!(day_month_year(d), "07/03/2025");
    }

    #[test]
    fn numbers_round_to_two_decimals() {
        assert_eq!(currency(5.499), "R$ 5.50");
        assert_eq!(percent(-0.126), "-0.13%");
        assert_eq!(optional(Some(0.01234), 4), "0.0123");
        assert_eq!(optional(None, 2), "-");
    }

    #[test]
    fn fractional_year_steps_by_month() {
        let jan = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let jul = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        assert_eq!(fractional_year(jan), 2025.0);
        assert_eq!(fractional_year(jul), 2025.5);
    }
}
