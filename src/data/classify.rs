use super::model::{Category, Record};

/// First projected period: November 2025. Everything from this month on is a
/// forecast, everything before is observed.
pub const PROJECTION_START_YEAR: i32 = 2025;
pub const PROJECTION_START_MONTH: u32 = 11;

/// Classify a record as historical or projected from its `year` / `month`.
pub fn classify(record: &Record) -> Category {
    classify_period(record.year, record.month)
}

/// Classification rule on a raw (year, month) pair.
pub fn classify_period(year: i32, month: u32) -> Category {
    if year > PROJECTION_START_YEAR
        || (year == PROJECTION_START_YEAR && month >= PROJECTION_START_MONTH)
    {
        Category::Projection
    } else {
        Category::Historical
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    #[test]
    fn boundary_months() {
        assert_eq!(classify(&record(2025, 10, 5.0)), Category::Historical);
        assert_eq!(classify(&record(2025, 11, 5.0)), Category::Projection);
        assert_eq!(classify(&record(2025, 12, 5.0)), Category::Projection);
        assert_eq!(classify(&record(2026, 1, 5.0)), Category::Projection);
    }

    #[test]
    fn earlier_years_are_historical_regardless_of_month() {
        assert_eq!(classify_period(2024, 12), Category::Historical);
        assert_eq!(classify_period(2000, 11), Category::Historical);
    }

    #[test]
    fn uses_stored_year_month_not_date() {
        // date says 2026, ANO/MES say 2025-10: the stored fields win
        let mut r = record(2026, 1, 5.0);
        r.year = 2025;
        r.month = 10;
        assert_eq!(classify(&r), Category::Historical);
    }
}
