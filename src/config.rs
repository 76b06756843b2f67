//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::data::loader::DataSource;
use crate::data::model::{CategoryFilter, FilterCriteria};

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATA_SOURCE: &str = "data/data.csv";

/// Fuel price and IPCA dashboard.
///
/// Opens a desktop window by default; `--headless` runs the load / filter /
/// summarize pipeline once and prints the result.
#[derive(Debug, Clone, Parser)]
#[command(name = "ipca-dashboard", version, about)]
pub struct Args {
    /// Dataset file path or http(s) URL
    #[arg(
        short = 'd',
        long = "data",
        value_name = "PATH|URL",
        env = "IPCA_DASHBOARD_DATA",
        default_value = DEFAULT_DATA_SOURCE
    )]
    pub data: String,

    /// Run without a window and print the summaries
    #[arg(long)]
    pub headless: bool,

    /// Initial year filter (0 = all years)
    #[arg(long, default_value_t = 0)]
    pub year: i32,

    /// Initial month filter (0 = all months)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=12))]
    pub month: u32,

    /// Initial category filter
    #[arg(long, value_enum, default_value_t = CategoryFilter::All)]
    pub category: CategoryFilter,

    /// Headless: write the filtered view as CSV to this path
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Headless: print the summaries as JSON
    #[arg(long)]
    pub json: bool,

    /// Start the window in the dark theme (default: follow the OS setting)
    #[arg(long)]
    pub dark: bool,
}

impl Args {
    pub fn source(&self) -> DataSource {
        DataSource::parse(&self.data)
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_selectors(self.year, self.month, self.category)
    }
}
