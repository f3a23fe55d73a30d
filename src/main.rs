mod app;
mod charts;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::RustyRocketApp;
use eframe::egui;
use state::AppState;

/// Data file looked up in the working directory at startup.
const DATA_FILE: &str = "launch_records.csv";

fn main() -> eframe::Result {
    env_logger::init();

    // The dashboard never opens without a valid dataset.
    let dataset = match data::loader::load_file(Path::new(DATA_FILE)) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Failed to load {DATA_FILE}: {e:#}");
            log::error!("Run `cargo run --bin generate_sample` to create sample data.");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} launch records across {} sites",
        dataset.len(),
        dataset.sites.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Rocket – Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(RustyRocketApp::new(AppState::new(dataset))))),
    )
}
