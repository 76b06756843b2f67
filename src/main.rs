mod app;
mod color;
mod headless;
mod ui;

use anyhow::{anyhow, Result};
use app::DashboardApp;
use clap::Parser;
use eframe::egui;
use ipca_dashboard::config::Args;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.headless {
        let stdout = std::io::stdout();
        return headless::run(&args, &mut stdout.lock());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "IPCA & Fuel Prices Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, &args)))),
    )
    .map_err(|e| anyhow!("failed to start the dashboard window: {e}"))
}
