use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RustyRocketApp {
    pub state: AppState,
}

impl RustyRocketApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for RustyRocketApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(230.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::control_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie over scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            // Split the height between the charts, leaving room for the pie
            // title and the separator.
            let chart_height = ((ui.available_height() - 48.0) / 2.0).max(100.0);
            plot::success_pie_chart(ui, &self.state, chart_height);
            ui.separator();
            plot::payload_scatter_chart(ui, &self.state, chart_height);
        });
    }
}
