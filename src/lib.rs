//! Fuel price and IPCA inflation dashboard: the data pipeline and the state
//! shared by the desktop front-end and the headless CLI.

pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod format;
pub mod state;

pub use error::{DashboardError, MalformedRowError};
