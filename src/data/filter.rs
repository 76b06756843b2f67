use super::classify::classify;
use super::model::{FilterCriteria, Record};

// ---------------------------------------------------------------------------
// Filter predicate: year AND month AND category
// ---------------------------------------------------------------------------

/// Whether a record passes all three predicates of `criteria`.
///
/// * `year`     – skipped when `None`, otherwise must equal `record.year`
/// * `month`    – skipped when `None`, otherwise must equal `record.month`
/// * `category` – skipped for `All`, otherwise must match [`classify`]
pub fn matches(record: &Record, criteria: &FilterCriteria) -> bool {
    if criteria.year.is_some_and(|y| record.year != y) {
        return false;
    }
    if criteria.month.is_some_and(|m| record.month != m) {
        return false;
    }
    criteria.category.accepts(classify(record))
}

/// Return indices of records that pass the criteria, in original order.
pub fn filtered_indices(records: &[Record], criteria: &FilterCriteria) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches(r, criteria))
        .map(|(i, _)| i)
        .collect()
}

/// Borrowing variant of [`filtered_indices`].
pub fn filter_records<'a>(records: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
    records.iter().filter(|r| matches(r, criteria)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;
    use crate::data::model::CategoryFilter;

    fn sample() -> Vec<Record> {
        vec![
            record(2024, 11, 5.0),
            record(2025, 1, 5.1),
            record(2025, 10, 5.2),
            record(2025, 11, 5.3),
            record(2025, 12, 5.4),
            record(2026, 1, 5.5),
            record(2026, 11, 5.6),
        ]
    }

    #[test]
    fn default_criteria_keep_everything() {
        let records = sample();
        let out = filter_records(&records, &FilterCriteria::default());
        assert_eq!(out.len(), records.len());
        assert!(out.iter().zip(&records).all(|(a, b)| *a == b));
    }

    #[test]
    fn year_filter() {
        let records = sample();
        let c = FilterCriteria::from_selectors(2025, 0, CategoryFilter::All);
        assert_eq!(filtered_indices(&records, &c), vec![1, 2, 3, 4]);
    }

    #[test]
    fn month_filter_spans_years() {
        let records = sample();
        let c = FilterCriteria::from_selectors(0, 11, CategoryFilter::All);
        assert_eq!(filtered_indices(&records, &c), vec![0, 3, 6]);
    }

    #[test]
    fn category_filter() {
        let records = sample();
        let hist = FilterCriteria::from_selectors(0, 0, CategoryFilter::Historical);
        assert_eq!(filtered_indices(&records, &hist), vec![0, 1, 2]);
        let proj = FilterCriteria::from_selectors(0, 0, CategoryFilter::Projection);
        assert_eq!(filtered_indices(&records, &proj), vec![3, 4, 5, 6]);
    }

    #[test]
    fn predicates_combine_conjunctively() {
        let records = sample();
        let c = FilterCriteria::from_selectors(2025, 11, CategoryFilter::Projection);
        assert_eq!(filtered_indices(&records, &c), vec![3]);
        let c = FilterCriteria::from_selectors(2025, 11, CategoryFilter::Historical);
        assert!(filtered_indices(&records, &c).is_empty());
    }

    #[test]
    fn year_without_records_yields_empty_view() {
        let records = sample();
        let c = FilterCriteria::from_selectors(1999, 0, CategoryFilter::All);
        assert!(filter_records(&records, &c).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = sample();
        let c = FilterCriteria::from_selectors(0, 0, CategoryFilter::Projection);
        let once: Vec<Record> = filter_records(&records, &c).into_iter().cloned().collect();
        let twice: Vec<Record> = filter_records(&once, &c).into_iter().cloned().collect();
        assert_eq!(once, twice);
        assert_eq!(filtered_indices(&records, &c), filtered_indices(&records, &c));
    }
}
