use thiserror::Error;

// ---------------------------------------------------------------------------
// Fatal errors – abort loading or exporting
// ---------------------------------------------------------------------------

/// Errors that halt the pipeline (load) or an export action.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The dataset could not be read from disk or fetched over HTTP.
    #[error("failed to fetch dataset from {location}: {source}")]
    Fetch {
        location: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The input has no header line.
    #[error("dataset is empty (no header line)")]
    EmptyDataset,

    /// Export was requested while the filtered view is empty.
    #[error("no data to export with the current filters")]
    NothingToExport,

    #[error("failed to write CSV export: {source}")]
    Export {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl DashboardError {
    pub fn fetch(
        location: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        DashboardError::Fetch {
            location: location.into(),
            source: source.into(),
        }
    }

    pub fn export(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        DashboardError::Export {
            source: source.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Row-level problems – recorded, never fatal
// ---------------------------------------------------------------------------

/// A data row that was skipped while parsing. `line` is 1-based and counts
/// the header as line 1.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedRowError {
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unparsable date '{value}'")]
    InvalidDate { line: u64, value: String },

    #[error("line {line}: missing required value for {column}")]
    MissingRequired { line: u64, column: &'static str },
}

impl MalformedRowError {
    pub fn line(&self) -> u64 {
        match self {
            MalformedRowError::FieldCount { line, .. }
            | MalformedRowError::InvalidDate { line, .. }
            | MalformedRowError::MissingRequired { line, .. } => *line,
        }
    }
}
