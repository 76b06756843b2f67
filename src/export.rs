//! CSV export of the current filtered view.
//!
//! The exported file is meant for spreadsheets; it is never read back by the
//! parser (different header, `DD/MM/YYYY` dates).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use log::info;

use crate::data::classify::classify;
use crate::data::model::Record;
use crate::error::DashboardError;
use crate::format;

pub const EXPORT_HEADERS: [&str; 6] = [
    "Data",
    "Preço Gasolina (R$)",
    "IPCA Mensal (%)",
    "IPCA Acumulado (%)",
    "Variação Gasolina (%)",
    "Tipo",
];

/// `dados_ipca_combustiveis_<YYYY-MM-DD>.csv`
pub fn default_file_name(today: NaiveDate) -> String {
    format!("dados_ipca_combustiveis_{}.csv", today.format("%Y-%m-%d"))
}

/// Write `records` as CSV to any writer. Fails with `NothingToExport` on an
/// empty view.
pub fn write_csv<W: Write>(writer: W, records: &[&Record]) -> Result<(), DashboardError> {
    if records.is_empty() {
        return Err(DashboardError::NothingToExport);
    }

    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    wtr.write_record(EXPORT_HEADERS)
        .map_err(DashboardError::export)?;

    for r in records {
        wtr.write_record([
            format::day_month_year(r.date),
            format!("{:.2}", r.fuel_price),
            format!("{:.2}", r.ipca_monthly),
            format::optional(r.ipca_accumulated, 2),
            format::optional(r.lag0.map(|v| v * 100.0), 2),
            classify(r).label().to_string(),
        ])
        .map_err(DashboardError::export)?;
    }

    wtr.flush().map_err(DashboardError::export)?;
    Ok(())
}

/// Export to a file on disk.
pub fn export_to_path(path: &Path, records: &[&Record]) -> Result<(), DashboardError> {
    if records.is_empty() {
        return Err(DashboardError::NothingToExport);
    }
    let file = File::create(path).map_err(DashboardError::export)?;
    write_csv(file, records)?;
    info!("Exported {} records to {}", records.len(), path.display());
    Ok(())
}
