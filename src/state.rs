use crate::charts::{self, PieSpec, ScatterSpec};
use crate::color::ColorMap;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once before the window opens and never changes;
/// everything else derives from it plus the two control values. The chart
/// specifications are cached and recomputed only when the control feeding
/// them changes.
pub struct AppState {
    /// Loaded dataset, read-only for the lifetime of the process.
    pub dataset: LaunchDataset,

    /// Current site dropdown value.
    pub selected_site: SiteSelection,

    /// Current payload slider window.
    pub payload_range: PayloadRange,

    /// Booster category colours, fixed at startup.
    pub color_map: ColorMap,

    /// Pie specification for the current site selection (cached).
    pub pie: PieSpec,

    /// Scatter specification for the current selection (cached).
    pub scatter: ScatterSpec,
}

impl AppState {
    /// Build the initial state: all sites selected, payload window spanning
    /// the dataset's payload extent (the whole domain when no records exist).
    pub fn new(dataset: LaunchDataset) -> Self {
        let color_map = ColorMap::new(&dataset.booster_categories);
        let selected_site = SiteSelection::All;
        let payload_range = dataset
            .payload_extent()
            .map(|(min, max)| PayloadRange::new(min, max))
            .unwrap_or_else(PayloadRange::full);

        let pie = charts::success_pie(&dataset, &selected_site);
        let scatter = charts::payload_scatter(&dataset, &selected_site, &payload_range);

        AppState {
            dataset,
            selected_site,
            payload_range,
            color_map,
            pie,
            scatter,
        }
    }

    /// Change the site selection; both charts depend on it.
    pub fn select_site(&mut self, selection: SiteSelection) {
        if self.selected_site == selection {
            return;
        }
        self.selected_site = selection;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Change the payload window; only the scatter chart depends on it.
    pub fn set_payload_range(&mut self, a: f64, b: f64) {
        let range = PayloadRange::new(a, b);
        if self.payload_range == range {
            return;
        }
        self.payload_range = range;
        self.refresh_scatter();
    }

    fn refresh_pie(&mut self) {
        self.pie = charts::success_pie(&self.dataset, &self.selected_site);
    }

    fn refresh_scatter(&mut self) {
        self.scatter =
            charts::payload_scatter(&self.dataset, &self.selected_site, &self.payload_range);
    }
}
