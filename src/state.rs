use log::{error, info};

use crate::data::filter::filtered_indices;
use crate::data::loader::{LoadReport, ParsedDataset};
use crate::data::model::{CategoryFilter, Dataset, FilterCriteria, Record};
use crate::data::stats::{summarize, Statistics};
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Commands and events
// ---------------------------------------------------------------------------

/// A user action on the filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `None` = all years.
    SetYear(Option<i32>),
    /// `None` = all months.
    SetMonth(Option<u32>),
    SetCategory(CategoryFilter),
    /// Replace the whole criteria at once.
    Apply(FilterCriteria),
    /// Back to all years, all months, all categories.
    Reset,
}

/// Emitted after the filtered view has been rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewUpdated {
    pub visible: usize,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full dashboard state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Dataset>,

    /// Rows dropped while parsing the current dataset.
    pub load_report: Option<LoadReport>,

    /// Active filter selection.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current criteria (cached). Replaced
    /// wholesale on every change, never edited in place.
    pub visible_indices: Vec<usize>,

    /// Summary over the full dataset (hero figures).
    pub overall: Statistics,

    /// Summary over the filtered view.
    pub visible: Statistics,

    /// Persistent error banner text.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly parsed dataset and show it unfiltered.
    pub fn set_dataset(&mut self, parsed: ParsedDataset) {
        let ParsedDataset { dataset, report } = parsed;
        self.overall = summarize(&dataset.records);
        self.criteria = FilterCriteria::default();
        self.visible_indices = (0..dataset.len()).collect();
        self.visible = self.overall;

        self.dataset = Some(dataset);
        self.load_report = Some(report);
        self.status_message = None;
    }

    /// A fatal load failure: drop any data and keep the error visible.
    pub fn set_load_error(&mut self, err: &DashboardError) {
        error!("Failed to load dataset: {err}");
        self.dataset = None;
        self.load_report = None;
        self.visible_indices = Vec::new();
        self.overall = Statistics::default();
        self.visible = Statistics::default();
        self.status_message = Some(format!("Error loading dataset: {err}"));
    }

    /// Store the outcome of a load attempt.
    pub fn apply_load(&mut self, result: Result<ParsedDataset, DashboardError>) {
        match result {
            Ok(parsed) => self.set_dataset(parsed),
            Err(e) => self.set_load_error(&e),
        }
    }

    /// Update the criteria and rebuild the view. Returns `None` while no
    /// dataset is loaded.
    pub fn dispatch(&mut self, command: Command) -> Option<ViewUpdated> {
        match command {
            Command::SetYear(year) => self.criteria.year = year,
            Command::SetMonth(month) => self.criteria.month = month,
            Command::SetCategory(category) => self.criteria.category = category,
            Command::Apply(criteria) => self.criteria = criteria,
            Command::Reset => {
                self.criteria = FilterCriteria::default();
                info!("Filters reset");
            }
        }
        self.refilter()
    }

    /// Recompute `visible_indices` and the filtered statistics.
    pub fn refilter(&mut self) -> Option<ViewUpdated> {
        let ds = self.dataset.as_ref()?;
        let indices = filtered_indices(&ds.records, &self.criteria);
        let visible = summarize(indices.iter().map(|&i| &ds.records[i]));
        let total = ds.len();

        self.visible_indices = indices;
        self.visible = visible;
        info!(
            "Filters applied ({}): {} of {} records",
            self.criteria,
            self.visible_indices.len(),
            total
        );
        Some(ViewUpdated {
            visible: self.visible_indices.len(),
            total,
        })
    }

    /// The filtered view, in dataset order.
    pub fn visible_records(&self) -> Vec<&Record> {
        match &self.dataset {
            Some(ds) => self.visible_indices.iter().map(|&i| &ds.records[i]).collect(),
            None => Vec::new(),
        }
    }

    /// Years offered by the year selector.
    pub fn years(&self) -> &[i32] {
        self.dataset
            .as_ref()
            .map(|ds| ds.years.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_records;

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.apply_load(parse_records(
            "DATA,ANO,MES,Gasolina_Preco,IPCA_Mensal,IPCA_Acumulado,LAG_0\n\
             2025-10-01,2025,10,6.0,0.1,4.0,\n\
             2024-10-01,2024,10,5.0,0.2,3.0,\n\
             2025-11-01,2025,11,7.0,0.3,4.3,\n\
             bad,row\n",
        ));
        state
    }

    #[test]
    fn load_shows_everything() {
        let state = loaded();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert_eq!(state.years(), &[2024, 2025]);
        assert_eq!(state.overall.count, 3);
        assert_eq!(state.overall.last_accumulated_ipca, 4.3);
        assert_eq!(state.visible, state.overall);
        assert_eq!(state.load_report.as_ref().map(|r| r.dropped()), Some(1));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn dispatch_rebuilds_view_and_stats() {
        let mut state = loaded();
        let ev = state.dispatch(Command::SetYear(Some(2025)));
        assert_eq!(ev, Some(ViewUpdated { visible: 2, total: 3 }));
        assert_eq!(state.visible.count, 2);
        assert!((state.visible.average_fuel_price - 6.5).abs() < 1e-9);

        state.dispatch(Command::SetCategory(CategoryFilter::Projection));
        let prices: Vec<f64> = state.visible_records().iter().map(|r| r.fuel_price).collect();
        assert_eq!(prices, vec![7.0]);

        // hero figures stay on the full dataset
        assert_eq!(state.overall.count, 3);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = loaded();
        state.dispatch(Command::SetMonth(Some(11)));
        assert_eq!(state.visible_indices, vec![2]);

        let ev = state.dispatch(Command::Reset);
        assert!(state.criteria.is_default());
        assert_eq!(ev, Some(ViewUpdated { visible: 3, total: 3 }));
    }

    #[test]
    fn dispatch_without_dataset_is_a_no_op() {
        let mut state = AppState::default();
        assert_eq!(state.dispatch(Command::SetYear(Some(2025))), None);
        assert!(state.visible_records().is_empty());
    }

    #[test]
    fn load_error_clears_data_and_sets_banner() {
        let mut state = loaded();
        state.apply_load(parse_records(""));
        assert!(state.dataset.is_none());
        assert!(state.visible_indices.is_empty());
        assert!(state
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("empty")));
    }
}
