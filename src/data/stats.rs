use chrono::NaiveDate;
use serde::Serialize;

use super::classify::classify;
use super::model::{Category, Record};

/// Summary numbers over a sequence of records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Statistics {
    pub count: usize,
    /// Arithmetic mean of `fuel_price`; 0 for an empty sequence.
    pub average_fuel_price: f64,
    /// `ipca_accumulated` of the last record (0 if empty or null).
    pub last_accumulated_ipca: f64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub historical_count: usize,
    pub projection_count: usize,
}

/// Summarize records in sequence order. The sequence is expected to be sorted
/// ascending by date, so the last element carries the latest accumulated IPCA.
pub fn summarize<'a, I>(records: I) -> Statistics
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut stats = Statistics::default();
    let mut fuel_sum = 0.0;
    let mut last: Option<&Record> = None;

    for r in records {
        stats.count += 1;
        fuel_sum += r.fuel_price;
        if stats.first_date.is_none() {
            stats.first_date = Some(r.date);
        }
        match classify(r) {
            Category::Historical => stats.historical_count += 1,
            Category::Projection => stats.projection_count += 1,
        }
        last = Some(r);
    }

    if let Some(last) = last {
        stats.average_fuel_price = fuel_sum / stats.count as f64;
        stats.last_accumulated_ipca = last.ipca_accumulated.unwrap_or(0.0);
        stats.last_date = Some(last.date);
    }
    stats
}
