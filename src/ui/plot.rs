use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use ipca_dashboard::data::model::Record;
use ipca_dashboard::format;
use ipca_dashboard::state::AppState;

use crate::color::ChartPalette;

const CHART_HEIGHT: f32 = 220.0;
/// Bar width in fractional years (a month is 1/12).
const BAR_WIDTH: f64 = 0.8 / 12.0;

// ---------------------------------------------------------------------------
// Chart grid (central panel)
// ---------------------------------------------------------------------------

/// Render the four charts over the filtered view.
pub fn charts(ui: &mut Ui, state: &AppState, palette: &ChartPalette) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a dataset to view charts  (File → Open…)");
        });
        return;
    }

    let records = state.visible_records();
    if records.is_empty() {
        ui.heading("No data found for the selected filters.");
        return;
    }

    ui.columns(2, |cols| {
        fuel_price_chart(&mut cols[0], &records, palette);
        monthly_ipca_chart(&mut cols[1], &records, palette);
    });
    ui.add_space(8.0);
    ui.columns(2, |cols| {
        accumulated_ipca_chart(&mut cols[0], &records, palette);
        comparison_chart(&mut cols[1], &records, palette);
    });
}

fn series(records: &[&Record], value: impl Fn(&Record) -> f64) -> Vec<[f64; 2]> {
    records
        .iter()
        .map(|r| [format::fractional_year(r.date), value(r)])
        .collect()
}

fn fuel_price_chart(ui: &mut Ui, records: &[&Record], palette: &ChartPalette) {
    ui.strong("Gasoline price");
    Plot::new("fuel_price_plot")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("R$")
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::new(series(records, |r| r.fuel_price)))
                .name("Gasoline price (R$)")
                .color(palette.fuel)
                .width(2.0);
            plot_ui.line(line);
        });
}

fn monthly_ipca_chart(ui: &mut Ui, records: &[&Record], palette: &ChartPalette) {
    ui.strong("Monthly IPCA");
    let bars: Vec<Bar> = records
        .iter()
        .map(|r| {
            Bar::new(format::fractional_year(r.date), r.ipca_monthly)
                .width(BAR_WIDTH)
                .fill(palette.ipca_bar(r.ipca_monthly))
                .name(format::month_year(r.date))
        })
        .collect();

    Plot::new("monthly_ipca_plot")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("%")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Monthly IPCA (%)"));
        });
}

fn accumulated_ipca_chart(ui: &mut Ui, records: &[&Record], palette: &ChartPalette) {
    ui.strong("Accumulated IPCA");
    // Null accumulated values are left out of the line rather than drawn as 0.
    let points: PlotPoints = records
        .iter()
        .filter_map(|r| Some([format::fractional_year(r.date), r.ipca_accumulated?]))
        .collect();

    Plot::new("accumulated_ipca_plot")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("%")
        .show(ui, |plot_ui| {
            let line = Line::new(points)
                .name("Accumulated IPCA (%)")
                .color(palette.ipca_accumulated)
                .width(2.0);
            plot_ui.line(line);
        });
}

fn comparison_chart(ui: &mut Ui, records: &[&Record], palette: &ChartPalette) {
    ui.strong("Gasoline vs monthly IPCA (normalised)");
    let dates: Vec<f64> = records
        .iter()
        .map(|r| format::fractional_year(r.date))
        .collect();
    let fuel = normalize_to_max(records.iter().map(|r| r.fuel_price));
    let ipca = normalize_to_max(records.iter().map(|r| r.ipca_monthly));

    let to_points = |values: Vec<f64>| -> Vec<[f64; 2]> {
        dates.iter().zip(values).map(|(&x, y)| [x, y]).collect()
    };

    Plot::new("comparison_plot")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("% of max")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::new(to_points(fuel)))
                    .name("Gasoline (normalised)")
                    .color(palette.fuel)
                    .width(2.0),
            );
            plot_ui.line(
                Line::new(PlotPoints::new(to_points(ipca)))
                    .name("Monthly IPCA (normalised)")
                    .color(palette.ipca_up)
                    .width(2.0),
            );
        });
}

/// Scale values so the maximum maps to 100. A zero maximum leaves all zeros.
fn normalize_to_max(values: impl Iterator<Item = f64> + Clone) -> Vec<f64> {
    let max = values.clone().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() || max == 0.0 {
        return values.map(|_| 0.0).collect();
    }
    values.map(|v| v / max * 100.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_scales_to_hundred() {
        let out = normalize_to_max([2.0, 4.0, 1.0].into_iter());
        assert_eq!(out, vec![50.0, 100.0, 25.0]);
    }

    #[test]
    fn normalize_handles_zero_max() {
        let out = normalize_to_max([0.0, -1.0].into_iter());
        assert_eq!(out, vec![0.0, 0.0]);
    }
}
