use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Column names of the fixed dataset layout
// ---------------------------------------------------------------------------

pub const COL_DATE: &str = "DATA";
pub const COL_YEAR: &str = "ANO";
pub const COL_MONTH: &str = "MES";
pub const COL_FUEL_PRICE: &str = "Gasolina_Preco";
pub const COL_IPCA_MONTHLY: &str = "IPCA_Mensal";
pub const COL_IPCA_ACCUMULATED: &str = "IPCA_Acumulado";
pub const COL_LAG0: &str = "LAG_0";

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// One monthly observation: fuel price plus the IPCA inflation figures.
///
/// `year` and `month` are stored as read from `ANO` / `MES` and drive
/// classification; `date` drives ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    pub year: i32,
    /// 1..=12
    pub month: u32,
    pub fuel_price: f64,
    pub ipca_monthly: f64,
    pub ipca_accumulated: Option<f64>,
    pub lag0: Option<f64>,
    /// Any other numeric column: column_name → value (None if unparsable).
    pub extra: BTreeMap<String, Option<f64>>,
}

// ---------------------------------------------------------------------------
// Category – historical vs projected
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Historical,
    Projection,
}

impl Category {
    /// Label used by the table badge and the CSV export.
    pub fn label(self) -> &'static str {
        match self {
            Category::Historical => "Histórico",
            Category::Projection => "Projeção",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category selector of the filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Historical,
    Projection,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 3] = [
        CategoryFilter::All,
        CategoryFilter::Historical,
        CategoryFilter::Projection,
    ];

    /// Whether a record of `category` passes this selector.
    pub fn accepts(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Historical => category == Category::Historical,
            CategoryFilter::Projection => category == Category::Projection,
        }
    }

    /// Label for the filter controls.
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All data",
            CategoryFilter::Historical => "Historical",
            CategoryFilter::Projection => "Projection",
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CategoryFilter::All => "all",
            CategoryFilter::Historical => "historical",
            CategoryFilter::Projection => "projection",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// FilterCriteria – year / month / category selection
// ---------------------------------------------------------------------------

/// `None` for year or month means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FilterCriteria {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub category: CategoryFilter,
}

impl FilterCriteria {
    /// Build criteria from raw selector values where `0` stands for "all".
    pub fn from_selectors(year: i32, month: u32, category: CategoryFilter) -> Self {
        FilterCriteria {
            year: (year != 0).then_some(year),
            month: (month != 0).then_some(month),
            category,
        }
    }

    pub fn is_default(&self) -> bool {
        *self == FilterCriteria::default()
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year.map_or_else(|| "all".to_string(), |y| y.to_string());
        let month = self.month.map_or_else(|| "all".to_string(), |m| m.to_string());
        write!(f, "year={year}, month={month}, category={}", self.category)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete parsed sequence
// ---------------------------------------------------------------------------

/// The full parsed sequence, sorted ascending by date, with the year index
/// used to populate the year selector.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All retained records, ascending by `date`.
    pub records: Vec<Record>,
    /// Header column names, in file order.
    pub column_names: Vec<String>,
    /// Distinct `year` values, ascending.
    pub years: Vec<i32>,
}

impl Dataset {
    /// Sort the records (stable) and build the year index.
    pub fn from_records(column_names: Vec<String>, mut records: Vec<Record>) -> Self {
        records.sort_by_key(|r| r.date);
        let years: Vec<i32> = records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Dataset {
            records,
            column_names,
            years,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First and last date covered, if any.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.records.first()?.date, self.records.last()?.date))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(year: i32, month: u32, fuel_price: f64) -> Record {
        Record {
            date: NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            year,
            month,
            fuel_price,
            ipca_monthly: 0.4,
            ipca_accumulated: Some(1.0),
            lag0: None,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn from_records_sorts_and_indexes_years() {
        let ds = Dataset::from_records(
            vec![],
            vec![record(2026, 1, 6.0), record(2024, 5, 5.0), record(2025, 2, 5.5)],
        );
        let dates: Vec<_> = ds.records.iter().map(|r| (r.year, r.month)).collect();
        assert_eq!(dates, vec![(2024, 5), (2025, 2), (2026, 1)]);
        assert_eq!(ds.years, vec![2024, 2025, 2026]);
        assert_eq!(
            ds.period(),
            Some((
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
            ))
        );
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let ds = Dataset::from_records(
            vec![],
            vec![record(2025, 3, 1.0), record(2024, 1, 9.0), record(2025, 3, 2.0)],
        );
        let prices: Vec<f64> = ds.records.iter().map(|r| r.fuel_price).collect();
        assert_eq!(prices, vec![9.0, 1.0, 2.0]);
    }

    #[test]
    fn criteria_from_selectors_maps_zero_to_all() {
        let c = FilterCriteria::from_selectors(0, 0, CategoryFilter::All);
        assert!(c.is_default());

        let c = FilterCriteria::from_selectors(2025, 3, CategoryFilter::Projection);
        assert_eq!(c.year, Some(2025));
        assert_eq!(c.month, Some(3));
        assert_eq!(c.to_string(), "year=2025, month=3, category=projection");
    }
}
