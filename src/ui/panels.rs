use eframe::egui::{self, ScrollArea, Slider, Ui};

use crate::data::filter::{SiteSelection, PAYLOAD_MAX, PAYLOAD_MIN, PAYLOAD_STEP};
use crate::state::AppState;

/// Dropdown options: short display label and the site value it selects.
const SITE_OPTIONS: [(&str, &str); 4] = [
    ("LC-40", "CCAFS LC-40"),
    ("SLC-40", "CCAFS SLC-40"),
    ("LC-39A", "KSC LC-39A"),
    ("SLC-4E", "VAFB SLC-4E"),
];

/// Label shown for the all-sites option.
const ALL_SITES_LABEL: &str = "All Sites";

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the control panel.
pub fn control_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            site_selector(ui, state);
            ui.separator();
            payload_slider(ui, state);
            ui.separator();

            ui.label(format!(
                "{} of {} launches in view",
                state.scatter.point_count(),
                state.dataset.len()
            ));
        });
}

/// Launch site dropdown.
fn site_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Launch Site");

    egui::ComboBox::from_id_salt("site-dropdown")
        .selected_text(site_label(&state.selected_site))
        .show_ui(ui, |ui: &mut Ui| {
            let all_selected = state.selected_site == SiteSelection::All;
            if ui.selectable_label(all_selected, ALL_SITES_LABEL).clicked() {
                state.select_site(SiteSelection::All);
            }
            for (label, site) in SITE_OPTIONS {
                let selected = state.selected_site.as_value() == site;
                if ui.selectable_label(selected, label).clicked() {
                    state.select_site(SiteSelection::Site(site.to_owned()));
                }
            }
        });
}

/// Short display label for the current selection.
fn site_label(selection: &SiteSelection) -> &str {
    match selection {
        SiteSelection::All => ALL_SITES_LABEL,
        SiteSelection::Site(name) => SITE_OPTIONS
            .iter()
            .find(|(_, site)| *site == name.as_str())
            .map(|(label, _)| *label)
            .unwrap_or(name),
    }
}

/// Payload mass range, one slider per bound. Each handle is bounded by the
/// other, so the range can never invert.
fn payload_slider(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Payload range (kg)");

    let mut low = state.payload_range.low();
    let mut high = state.payload_range.high();

    let low_changed = ui
        .add(
            Slider::new(&mut low, PAYLOAD_MIN..=high)
                .step_by(PAYLOAD_STEP)
                .fixed_decimals(0)
                .suffix(" kg")
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            Slider::new(&mut high, low..=PAYLOAD_MAX)
                .step_by(PAYLOAD_STEP)
                .fixed_decimals(0)
                .suffix(" kg")
                .text("max"),
        )
        .changed();

    if low_changed || high_changed {
        state.set_payload_range(low, high);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top title bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Launch Records Dashboard");
        ui.separator();
        ui.label(format!(
            "{} launches loaded, {} in view",
            state.dataset.len(),
            state.scatter.point_count()
        ));
    });
}
