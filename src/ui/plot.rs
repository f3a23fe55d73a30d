use std::f64::consts::TAU;

use eframe::egui::{RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::charts::{PAYLOAD_SCATTER_ID, SUCCESS_PIE_ID};
use crate::color;
use crate::state::AppState;

/// Arc resolution of a full circle, in outline points.
const PIE_ARC_POINTS: usize = 128;
/// Wedge radius in plot coordinates.
const PIE_RADIUS: f64 = 1.0;
/// Radial position of the percentage labels.
const PIE_LABEL_RADIUS: f64 = 0.65;
/// Smallest share that still gets its own percentage label.
const PIE_MIN_LABELED_FRACTION: f64 = 0.04;

// ---------------------------------------------------------------------------
// Success pie (upper chart region)
// ---------------------------------------------------------------------------

/// Render the cached pie specification as a pie chart.
///
/// Wedges start at twelve o'clock and run clockwise, one per slice, with a
/// percentage label on every slice large enough to carry one. An empty pie
/// shows a placeholder message instead.
pub fn success_pie_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let spec = &state.pie;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&spec.title);
    });

    let total = spec.total();
    let colors = color::generate_palette(spec.slices.len());

    Plot::new(SUCCESS_PIE_ID)
        .height(height)
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_x(-1.3)
        .include_x(1.3)
        .include_y(-1.3)
        .include_y(1.3)
        .show(ui, |plot_ui| {
            if total == 0 {
                plot_ui.text(Text::new(
                    PlotPoint::new(0.0, 0.0),
                    RichText::new("No launches match the current selection").heading(),
                ));
                return;
            }

            let mut angle = TAU / 4.0;
            for (slice, color) in spec.slices.iter().zip(colors) {
                if slice.value == 0 {
                    continue;
                }
                let fraction = slice.value as f64 / total as f64;
                let sweep = fraction * TAU;

                plot_ui.polygon(
                    Polygon::new(wedge_points(angle, sweep))
                        .name(&slice.label)
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, color)),
                );

                if fraction >= PIE_MIN_LABELED_FRACTION {
                    let mid = angle - sweep / 2.0;
                    plot_ui.text(Text::new(
                        PlotPoint::new(PIE_LABEL_RADIUS * mid.cos(), PIE_LABEL_RADIUS * mid.sin()),
                        RichText::new(format!("{:.1}%", fraction * 100.0)).strong(),
                    ));
                }

                angle -= sweep;
            }
        });
}

/// Build the closed outline of one wedge.
fn wedge_points(start: f64, sweep: f64) -> Vec<[f64; 2]> {
    let steps = ((sweep / TAU) * PIE_ARC_POINTS as f64).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    // A slice covering the whole circle stays a plain disc, with no spoke to
    // the centre.
    if TAU - sweep > 1e-9 {
        points.push([0.0, 0.0]);
    }
    for i in 0..=steps {
        let angle = start - sweep * (i as f64 / steps as f64);
        points.push([PIE_RADIUS * angle.cos(), PIE_RADIUS * angle.sin()]);
    }
    points
}

// ---------------------------------------------------------------------------
// Payload scatter (lower chart region)
// ---------------------------------------------------------------------------

/// Render the cached scatter specification, one point series per booster
/// version category. Series colours come from the shared colour map so they
/// stay stable while the filters change.
pub fn payload_scatter_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let spec = &state.scatter;

    Plot::new(PAYLOAD_SCATTER_ID)
        .height(height)
        .legend(Legend::default())
        .x_axis_label(&spec.x_label)
        .y_axis_label(&spec.y_label)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &spec.series {
                let points: PlotPoints = series.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&series.label)
                        .color(state.color_map.color_for(&series.label))
                        .radius(3.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wedge_points_quarter_circle() {
        let points = wedge_points(TAU / 4.0, TAU / 4.0);

        // Centre vertex plus the arc from twelve o'clock to three o'clock.
        assert_eq!(points[0], [0.0, 0.0]);
        let first = points[1];
        let last = points[points.len() - 1];
        assert!(first[0].abs() < 1e-9);
        assert!((first[1] - PIE_RADIUS).abs() < 1e-9);
        assert!((last[0] - PIE_RADIUS).abs() < 1e-9);
        assert!(last[1].abs() < 1e-9);
    }

    #[test]
    fn test_wedge_points_arc_stays_on_radius() {
        let points = wedge_points(TAU / 4.0, TAU / 3.0);
        for point in &points[1..] {
            let r = (point[0] * point[0] + point[1] * point[1]).sqrt();
            assert!((r - PIE_RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn test_wedge_points_full_circle_has_no_centre_spoke() {
        let points = wedge_points(TAU / 4.0, TAU);
        for point in &points {
            let r = (point[0] * point[0] + point[1] * point[1]).sqrt();
            assert!((r - PIE_RADIUS).abs() < 1e-9);
        }
    }
}
