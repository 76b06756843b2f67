use eframe::egui;

use ipca_dashboard::config::Args;
use ipca_dashboard::data::loader::{load_source, DataSource};
use ipca_dashboard::export;
use ipca_dashboard::state::{AppState, Command};

use crate::color::ChartPalette;
use crate::ui::panels::{self, TopBarAction};
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
    source: DataSource,
    dark_mode: bool,
    /// Short confirmation shown in the top bar (e.g. after an export).
    notice: Option<String>,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, args: &Args) -> Self {
        let mut app = Self {
            state: AppState::default(),
            source: args.source(),
            dark_mode: start_in_dark_mode(args.dark, cc.egui_ctx.system_theme()),
            notice: None,
        };
        apply_theme(&cc.egui_ctx, app.dark_mode);
        app.load();

        let criteria = args.criteria();
        if !criteria.is_default() {
            app.state.dispatch(Command::Apply(criteria));
        }
        app
    }

    /// (Re)load the dataset from the current source.
    fn load(&mut self) {
        self.notice = None;
        self.state.apply_load(load_source(&self.source));
    }

    fn open_file_dialog(&mut self) {
        let file = rfd::FileDialog::new()
            .set_title("Open fuel price / IPCA dataset")
            .add_filter("CSV", &["csv"])
            .pick_file();

        if let Some(path) = file {
            self.source = DataSource::File(path);
            self.load();
        }
    }

    fn export_dialog(&mut self) {
        let records = self.state.visible_records();
        if records.is_empty() {
            self.notice = Some("No data to export".to_string());
            return;
        }

        let today = chrono::Local::now().date_naive();
        let file = rfd::FileDialog::new()
            .set_title("Export filtered data")
            .set_file_name(export::default_file_name(today))
            .add_filter("CSV", &["csv"])
            .save_file();

        if let Some(path) = file {
            self.notice = Some(match export::export_to_path(&path, &records) {
                Ok(()) => format!("Exported {} records", records.len()),
                Err(e) => {
                    log::error!("Export failed: {e}");
                    format!("Export failed: {e}")
                }
            });
        }
    }
}

/// `--dark` forces the dark theme; otherwise follow the OS preference.
fn start_in_dark_mode(forced_dark: bool, system: Option<egui::Theme>) -> bool {
    forced_dark || system == Some(egui::Theme::Dark)
}

fn apply_theme(ctx: &egui::Context, dark: bool) {
    ctx.set_visuals(if dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let palette = ChartPalette::for_theme(self.dark_mode);
        let mut commands: Vec<Command> = Vec::new();

        // ---- Top panel: menu bar + error banner ----
        let action = egui::TopBottomPanel::top("top_bar")
            .show(ctx, |ui| {
                panels::top_bar(ui, &self.state, &self.source, self.dark_mode, self.notice.as_deref())
            })
            .inner;

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state, &mut commands);
            });

        // ---- Central panel: hero figures, charts, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::hero_stats(ui, &self.state);
                    ui.separator();
                    plot::charts(ui, &self.state, &palette);
                    ui.separator();
                    table::data_table(ui, &self.state, &palette);
                });
        });

        // Commands are applied after rendering so every panel in a frame
        // sees the same view.
        for command in commands {
            self.state.dispatch(command);
        }

        match action {
            Some(TopBarAction::Open) => self.open_file_dialog(),
            Some(TopBarAction::Reload) => self.load(),
            Some(TopBarAction::Export) => self.export_dialog(),
            Some(TopBarAction::ToggleTheme) => {
                self.dark_mode = !self.dark_mode;
                apply_theme(ctx, self.dark_mode);
            }
            None => {}
        }
    }
}
