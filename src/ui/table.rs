use eframe::egui::{Align, Color32, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use ipca_dashboard::data::classify::classify;
use ipca_dashboard::format;
use ipca_dashboard::state::AppState;

use crate::color::ChartPalette;

const HEADERS: [&str; 6] = [
    "Date",
    "Gasoline (R$)",
    "Monthly IPCA",
    "Accumulated IPCA",
    "LAG_0",
    "Type",
];
const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Data table (filtered view)
// ---------------------------------------------------------------------------

/// Render one row per visible record, in view order.
pub fn data_table(ui: &mut Ui, state: &AppState, palette: &ChartPalette) {
    if state.dataset.is_none() {
        return;
    }
    let records = state.visible_records();

    ui.heading("Data");
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(70.0))
        .columns(Column::auto().at_least(100.0), HEADERS.len() - 2)
        .column(Column::remainder())
        .min_scrolled_height(0.0)
        .max_scroll_height(360.0)
        .header(ROW_HEIGHT, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            if records.is_empty() {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.weak("No data found for the selected filters.");
                    });
                    for _ in 1..HEADERS.len() {
                        row.col(|_| {});
                    }
                });
                return;
            }

            body.rows(ROW_HEIGHT, records.len(), |mut row| {
                let r = records[row.index()];
                let category = classify(r);

                row.col(|ui| {
                    ui.label(format::month_year(r.date));
                });
                row.col(|ui| {
                    ui.label(format::currency(r.fuel_price));
                });
                row.col(|ui| {
                    ui.label(format::percent(r.ipca_monthly));
                });
                row.col(|ui| {
                    ui.label(
                        r.ipca_accumulated
                            .map_or_else(|| "-".to_string(), format::percent),
                    );
                });
                row.col(|ui| {
                    ui.label(format::optional(r.lag0, 4));
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(category.label())
                            .background_color(palette.category(category))
                            .color(Color32::BLACK),
                    );
                });
            });
        });
}
