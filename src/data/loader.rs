use std::fmt;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use csv::StringRecord;
use log::{debug, info, warn};

use super::model::{
    Dataset, Record, COL_DATE, COL_FUEL_PRICE, COL_IPCA_ACCUMULATED, COL_IPCA_MONTHLY, COL_LAG0,
    COL_MONTH, COL_YEAR,
};
use crate::error::{DashboardError, MalformedRowError};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Where the dataset text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` locations are fetched, anything else is a path.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(location.to_string())
        } else {
            DataSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Result of parsing: the dataset plus a record of every dropped row.
#[derive(Debug, Clone)]
pub struct ParsedDataset {
    pub dataset: Dataset,
    pub report: LoadReport,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Data rows seen (header excluded, blank lines excluded).
    pub rows_read: usize,
    pub retained: usize,
    pub skipped: Vec<MalformedRowError>,
}

impl LoadReport {
    pub fn dropped(&self) -> usize {
        self.skipped.len()
    }
}

/// Fetch the dataset text and parse it.
pub fn load_source(source: &DataSource) -> Result<ParsedDataset, DashboardError> {
    let text = fetch_text(source)?;
    let parsed = parse_records(&text)?;
    info!(
        "Loaded {} records from {source} ({} rows dropped)",
        parsed.dataset.len(),
        parsed.report.dropped()
    );
    Ok(parsed)
}

/// Read the raw dataset text from disk or over HTTP.
pub fn fetch_text(source: &DataSource) -> Result<String, DashboardError> {
    match source {
        DataSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| DashboardError::fetch(path.display().to_string(), e)),
        DataSource::Url(url) => fetch_url(url).map_err(|e| DashboardError::fetch(url.clone(), e)),
    }
}

fn fetch_url(url: &str) -> Result<String, reqwest::Error> {
    reqwest::blocking::get(url)?.error_for_status()?.text()
}

// ---------------------------------------------------------------------------
// Record parser
// ---------------------------------------------------------------------------

/// Parse comma-separated text (first line = header, no quoting) into a
/// date-sorted dataset.
///
/// Rows with the wrong field count, an absent or unparsable `DATA`, or a missing
/// `Gasolina_Preco` / `IPCA_Mensal` are skipped and recorded in the report.
/// Any other numeric field that fails to parse becomes `None`.
pub fn parse_records(text: &str) -> Result<ParsedDataset, DashboardError> {
    if text.trim().is_empty() {
        return Err(DashboardError::EmptyDataset);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    // Input is already UTF-8 and quoting is off, so no record can fail to read.
    let mut rows = reader.records().flatten();

    let headers: Vec<String> = rows
        .next()
        .ok_or(DashboardError::EmptyDataset)?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let layout = ColumnLayout::from_headers(&headers);
    if layout.date.is_none() {
        warn!("Header has no {COL_DATE} column, every row will be dropped");
    }

    let mut report = LoadReport::default();
    let mut records = Vec::new();

    for row in rows {
        report.rows_read += 1;
        let line = row.position().map_or(0, |p| p.line());
        let outcome = if row.len() != headers.len() {
            Err(MalformedRowError::FieldCount {
                line,
                expected: headers.len(),
                found: row.len(),
            })
        } else {
            layout.build_record(&row, line)
        };

        match outcome {
            Ok(record) => records.push(record),
            Err(skip) => {
                match skip {
                    MalformedRowError::MissingRequired { .. } => debug!("Skipping row: {skip}"),
                    _ => warn!("Skipping malformed row: {skip}"),
                }
                report.skipped.push(skip);
            }
        }
    }

    report.retained = records.len();
    info!(
        "Parsed {} data rows: {} retained, {} dropped",
        report.rows_read,
        report.retained,
        report.dropped()
    );

    Ok(ParsedDataset {
        dataset: Dataset::from_records(headers, records),
        report,
    })
}

// -- Column layout --

/// Header positions of the known columns; everything else goes to `extra`.
struct ColumnLayout {
    date: Option<usize>,
    year: Option<usize>,
    month: Option<usize>,
    fuel_price: Option<usize>,
    ipca_monthly: Option<usize>,
    ipca_accumulated: Option<usize>,
    lag0: Option<usize>,
    extra: Vec<(usize, String)>,
}

const KNOWN_COLUMNS: [&str; 7] = [
    COL_DATE,
    COL_YEAR,
    COL_MONTH,
    COL_FUEL_PRICE,
    COL_IPCA_MONTHLY,
    COL_IPCA_ACCUMULATED,
    COL_LAG0,
];

impl ColumnLayout {
    fn from_headers(headers: &[String]) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let extra = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !KNOWN_COLUMNS.contains(&h.as_str()))
            .map(|(i, h)| (i, h.clone()))
            .collect();

        ColumnLayout {
            date: find(COL_DATE),
            year: find(COL_YEAR),
            month: find(COL_MONTH),
            fuel_price: find(COL_FUEL_PRICE),
            ipca_monthly: find(COL_IPCA_MONTHLY),
            ipca_accumulated: find(COL_IPCA_ACCUMULATED),
            lag0: find(COL_LAG0),
            extra,
        }
    }

    fn build_record(&self, row: &StringRecord, line: u64) -> Result<Record, MalformedRowError> {
        let raw_date = field(row, self.date).unwrap_or_default();
        let date = parse_date(raw_date).ok_or_else(|| MalformedRowError::InvalidDate {
            line,
            value: raw_date.to_string(),
        })?;

        let fuel_price = field(row, self.fuel_price).and_then(parse_float).ok_or(
            MalformedRowError::MissingRequired {
                line,
                column: COL_FUEL_PRICE,
            },
        )?;
        let ipca_monthly = field(row, self.ipca_monthly).and_then(parse_float).ok_or(
            MalformedRowError::MissingRequired {
                line,
                column: COL_IPCA_MONTHLY,
            },
        )?;

        let year = field(row, self.year)
            .and_then(|s| s.parse::<i32>().ok())
            .unwrap_or_else(|| {
                debug!("line {line}: no usable {COL_YEAR}, using year of {date}");
                date.year()
            });
        let month = field(row, self.month)
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|m| (1..=12).contains(m))
            .unwrap_or_else(|| {
                debug!("line {line}: no usable {COL_MONTH}, using month of {date}");
                date.month()
            });

        let extra = self
            .extra
            .iter()
            .map(|(i, name)| (name.clone(), field(row, Some(*i)).and_then(parse_float)))
            .collect();

        Ok(Record {
            date,
            year,
            month,
            fuel_price,
            ipca_monthly,
            ipca_accumulated: field(row, self.ipca_accumulated).and_then(parse_float),
            lag0: field(row, self.lag0).and_then(parse_float),
            extra,
        })
    }
}

fn field(row: &StringRecord, idx: Option<usize>) -> Option<&str> {
    row.get(idx?)
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM` (first of the month) and ISO date-times.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.split(|c: char| c == 'T' || c == ' ').next().unwrap_or(s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{date_part}-01"), "%Y-%m-%d"))
        .ok()
}

/// Numeric coercion never fails the row: empty, unparsable and non-finite
/// values all become `None`.
fn parse_float(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
