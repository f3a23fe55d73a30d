use std::fmt;

use super::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Selection domain
// ---------------------------------------------------------------------------

/// Lower bound of the payload selection domain, in kg.
pub const PAYLOAD_MIN: f64 = 0.0;
/// Upper bound of the payload selection domain, in kg.
pub const PAYLOAD_MAX: f64 = 10_000.0;
/// Step between selectable payload marks, in kg.
pub const PAYLOAD_STEP: f64 = 1_000.0;

/// Sentinel value the site selector reports when no single site is chosen.
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// SiteSelection – site dropdown state
// ---------------------------------------------------------------------------

/// Current launch-site selection: every site, or one named site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// The raw selector value: a site name, or the `"ALL"` sentinel.
    pub fn as_value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }

    /// Whether a launch from `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

// ---------------------------------------------------------------------------
// PayloadRange – payload slider state
// ---------------------------------------------------------------------------

/// Inclusive payload mass window.
///
/// Construction keeps the bounds ordered (`low <= high`) and inside the
/// selection domain, so a stored range is always valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Build a range from two bounds in either order, clamped to the domain.
    pub fn new(a: f64, b: f64) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        PayloadRange {
            low: low.clamp(PAYLOAD_MIN, PAYLOAD_MAX),
            high: high.clamp(PAYLOAD_MIN, PAYLOAD_MAX),
        }
    }

    /// The whole selection domain.
    pub fn full() -> Self {
        PayloadRange {
            low: PAYLOAD_MIN,
            high: PAYLOAD_MAX,
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Membership test, inclusive at both bounds.
    pub fn contains(&self, payload_kg: f64) -> bool {
        payload_kg >= self.low && payload_kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// Record filtering
// ---------------------------------------------------------------------------

/// Return indices of launches that pass the current selection.
///
/// A launch passes when:
/// * the site selection is `All`, or its site equals the selected site
/// * its payload mass lies within the range, bounds included
pub fn filtered_indices(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: &PayloadRange,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(&rec.site) && range.contains(rec.payload_kg))
        .map(|(i, _)| i)
        .collect()
}
