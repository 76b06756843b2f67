use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use ipca_dashboard::data::loader::DataSource;
use ipca_dashboard::data::model::CategoryFilter;
use ipca_dashboard::data::stats::Statistics;
use ipca_dashboard::format;
use ipca_dashboard::state::{AppState, Command};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// How many dropped-row messages the side panel lists.
const MAX_LISTED_DROPS: usize = 20;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Actions the top bar hands back to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    Open,
    Reload,
    Export,
    ToggleTheme,
}

/// Render the top menu / toolbar.
pub fn top_bar(
    ui: &mut Ui,
    state: &AppState,
    source: &DataSource,
    dark_mode: bool,
    notice: Option<&str>,
) -> Option<TopBarAction> {
    let mut action = None;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                action = Some(TopBarAction::Open);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                action = Some(TopBarAction::Reload);
                ui.close_menu();
            }
            let can_export = !state.visible_indices.is_empty();
            if ui
                .add_enabled(can_export, egui::Button::new("Export CSV…"))
                .clicked()
            {
                action = Some(TopBarAction::Export);
                ui.close_menu();
            }
        });

        let theme_label = if dark_mode { "☀ Light" } else { "🌙 Dark" };
        if ui.button(theme_label).clicked() {
            action = Some(TopBarAction::ToggleTheme);
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            let period = ds
                .period()
                .map(|(first, last)| {
                    format!(
                        ", {} to {}",
                        format::month_year(first),
                        format::month_year(last)
                    )
                })
                .unwrap_or_default();
            ui.label(format!(
                "{source}: {} records, {} visible{period}",
                ds.len(),
                state.visible_indices.len(),
            ));
        }

        if let Some(text) = notice {
            ui.separator();
            ui.label(text);
        }
    });

    // Persistent banner for fatal load errors.
    if let Some(msg) = &state.status_message {
        ui.label(RichText::new(format!("⚠ {msg}")).color(Color32::RED).strong());
    }

    action
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter controls. Changes are pushed to `commands`, not applied.
pub fn side_panel(ui: &mut Ui, state: &AppState, commands: &mut Vec<Command>) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Year ----
            ui.strong("Year");
            let mut year = state.criteria.year;
            egui::ComboBox::from_id_salt("year_filter")
                .selected_text(year.map_or_else(|| "All years".to_string(), |y| y.to_string()))
                .show_ui(ui, |ui: &mut Ui| {
                    ui.selectable_value(&mut year, None, "All years");
                    for &y in state.years() {
                        ui.selectable_value(&mut year, Some(y), y.to_string());
                    }
                });
            if year != state.criteria.year {
                commands.push(Command::SetYear(year));
            }
            ui.add_space(6.0);

            // ---- Month ----
            ui.strong("Month");
            let mut month = state.criteria.month;
            egui::ComboBox::from_id_salt("month_filter")
                .selected_text(month.map_or("All months", month_name))
                .show_ui(ui, |ui: &mut Ui| {
                    ui.selectable_value(&mut month, None, "All months");
                    for m in 1..=12u32 {
                        ui.selectable_value(&mut month, Some(m), month_name(m));
                    }
                });
            if month != state.criteria.month {
                commands.push(Command::SetMonth(month));
            }
            ui.add_space(6.0);

            // ---- Category ----
            ui.strong("Data type");
            let mut category = state.criteria.category;
            for option in CategoryFilter::ALL {
                ui.radio_value(&mut category, option, option.label());
            }
            if category != state.criteria.category {
                commands.push(Command::SetCategory(category));
            }
            ui.add_space(6.0);

            if ui
                .add_enabled(!state.criteria.is_default(), egui::Button::new("Reset filters"))
                .clicked()
            {
                commands.push(Command::Reset);
            }

            ui.separator();
            ui.strong("Filtered view");
            stats_grid(ui, "filtered_stats", &state.visible);

            if let Some(report) = &state.load_report {
                if report.dropped() > 0 {
                    ui.separator();
                    egui::CollapsingHeader::new(format!("{} rows dropped", report.dropped()))
                        .id_salt("dropped_rows")
                        .default_open(false)
                        .show(ui, |ui: &mut Ui| {
                            for issue in report.skipped.iter().take(MAX_LISTED_DROPS) {
                                ui.small(issue.to_string());
                            }
                            if report.dropped() > MAX_LISTED_DROPS {
                                ui.small(format!("… and {} more", report.dropped() - MAX_LISTED_DROPS));
                            }
                        });
                }
            }
        });
}

fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("?")
}

fn stats_grid(ui: &mut Ui, id: &str, stats: &Statistics) {
    egui::Grid::new(id).num_columns(2).show(ui, |ui: &mut Ui| {
        ui.label("Records");
        ui.label(stats.count.to_string());
        ui.end_row();
        ui.label("Historical / projection");
        ui.label(format!("{} / {}", stats.historical_count, stats.projection_count));
        ui.end_row();
        ui.label("Average gasoline");
        ui.label(format::currency(stats.average_fuel_price));
        ui.end_row();
        ui.label("Latest accumulated IPCA");
        ui.label(format::percent(stats.last_accumulated_ipca));
        ui.end_row();
    });
}

// ---------------------------------------------------------------------------
// Hero statistics (full dataset)
// ---------------------------------------------------------------------------

/// Headline figures computed over the full dataset, not the filtered view.
pub fn hero_stats(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        return;
    }
    let stats = &state.overall;
    ui.horizontal(|ui: &mut Ui| {
        hero_card(ui, "Data points", stats.count.to_string());
        hero_card(ui, "Average gasoline price", format::currency(stats.average_fuel_price));
        hero_card(ui, "Accumulated IPCA", format::percent(stats.last_accumulated_ipca));
    });
}

fn hero_card(ui: &mut Ui, title: &str, value: String) {
    ui.group(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label(RichText::new(title).small());
            ui.label(RichText::new(value).heading().strong());
        });
    });
}
