use std::collections::BTreeMap;

use crate::data::filter::{PayloadRange, SiteSelection, filtered_indices};
use crate::data::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Output identifiers
// ---------------------------------------------------------------------------

/// Stable id of the pie chart region (also its egui plot id).
pub const SUCCESS_PIE_ID: &str = "success-pie-chart";
/// Stable id of the scatter chart region (also its egui plot id).
pub const PAYLOAD_SCATTER_ID: &str = "success-payload-scatter-chart";

// ---------------------------------------------------------------------------
// Chart specifications – plain values the plot layer renders
// ---------------------------------------------------------------------------

/// One pie slice: a label and its launch count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// Everything the pie region needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieSpec {
    /// Sum of all slice values.
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One scatter series: the points sharing a booster version category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub label: String,
    /// `[payload_kg, outcome]` pairs in dataset order.
    pub points: Vec<[f64; 2]>,
}

/// Everything the scatter region needs to draw itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterSpec {
    /// Number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Chart handlers – pure functions from (dataset, selection) to a spec
// ---------------------------------------------------------------------------

/// Build the success pie spec for the current site selection.
///
/// * `All`: one slice per distinct site, valued by that site's success
///   count. A site without successes keeps its zero-valued slice.
/// * One site: exactly two slices, failures then successes at that site.
///
/// An unknown or empty site yields zero-count slices, never an error.
pub fn success_pie(dataset: &LaunchDataset, selection: &SiteSelection) -> PieSpec {
    match selection {
        SiteSelection::All => {
            let mut successes: BTreeMap<&str, u64> =
                dataset.sites.iter().map(|s| (s.as_str(), 0)).collect();
            for rec in &dataset.records {
                if rec.outcome.is_success() {
                    *successes.entry(rec.site.as_str()).or_insert(0) += 1;
                }
            }
            PieSpec {
                title: "Total Success Launches by Site".to_owned(),
                slices: successes
                    .into_iter()
                    .map(|(site, value)| PieSlice {
                        label: site.to_owned(),
                        value,
                    })
                    .collect(),
            }
        }
        SiteSelection::Site(site) => {
            let mut failed = 0;
            let mut success = 0;
            for rec in dataset.records.iter().filter(|r| r.site == *site) {
                match rec.outcome {
                    Outcome::Failure => failed += 1,
                    Outcome::Success => success += 1,
                }
            }
            PieSpec {
                title: format!("Total Launches for site {site}"),
                slices: vec![
                    PieSlice {
                        label: Outcome::Failure.to_string(),
                        value: failed,
                    },
                    PieSlice {
                        label: Outcome::Success.to_string(),
                        value: success,
                    },
                ],
            }
        }
    }
}

/// Build the payload/outcome scatter spec for the current selection.
///
/// Keeps every launch whose payload lies inside `range` (bounds included)
/// and whose site passes `selection`, grouped into one series per booster
/// version category, sorted by category name. The y-axis label is the raw
/// selector value, the `"ALL"` sentinel included.
pub fn payload_scatter(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: &PayloadRange,
) -> ScatterSpec {
    let mut by_category: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for idx in filtered_indices(dataset, selection, range) {
        let rec = &dataset.records[idx];
        by_category
            .entry(rec.booster_category.as_str())
            .or_default()
            .push([rec.payload_kg, rec.outcome.as_y()]);
    }

    ScatterSpec {
        x_label: "Payload Mass (kg)".to_owned(),
        y_label: selection.as_value().to_owned(),
        series: by_category
            .into_iter()
            .map(|(label, points)| ScatterSeries {
                label: label.to_owned(),
                points,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn record(site: &str, payload_kg: f64, class: i64, category: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_owned(),
            payload_kg,
            outcome: Outcome::from_class(class).unwrap(),
            booster_category: category.to_owned(),
        }
    }

    /// Four sites with known outcomes; payloads cover both domain bounds.
    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 0.0, 0, "v1.0"),
            record("CCAFS LC-40", 525.0, 1, "v1.0"),
            record("CCAFS LC-40", 5000.0, 1, "v1.1"),
            record("CCAFS SLC-40", 3170.0, 0, "FT"),
            record("KSC LC-39A", 5000.0, 1, "FT"),
            record("KSC LC-39A", 9600.0, 1, "B5"),
            record("VAFB SLC-4E", 10_000.0, 0, "FT"),
        ])
    }

    fn site(name: &str) -> SiteSelection {
        SiteSelection::Site(name.to_owned())
    }

    #[test]
    fn test_all_sites_pie_has_one_slice_per_site() {
        let ds = dataset();
        let pie = success_pie(&ds, &SiteSelection::All);

        assert_eq!(pie.title, "Total Success Launches by Site");
        assert_eq!(pie.slices.len(), ds.sites.len());
        let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
    }

    #[test]
    fn test_all_sites_pie_counts_successes_per_site() {
        let pie = success_pie(&dataset(), &SiteSelection::All);
        let values: Vec<u64> = pie.slices.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![2, 0, 2, 0]);
        // Slices sum to the number of success launches in the dataset.
        assert_eq!(pie.total(), 4);
    }

    #[test]
    fn test_single_site_pie_has_failed_then_success() {
        let pie = success_pie(&dataset(), &site("CCAFS LC-40"));

        assert_eq!(pie.title, "Total Launches for site CCAFS LC-40");
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.slices[0].label, "Failed");
        assert_eq!(pie.slices[0].value, 1);
        assert_eq!(pie.slices[1].label, "Success");
        assert_eq!(pie.slices[1].value, 2);
        // Slices sum to the number of launches at the site.
        assert_eq!(pie.total(), 3);
    }

    #[test]
    fn test_unknown_site_pie_is_zero_valued() {
        let pie = success_pie(&dataset(), &site("CCAFS SLC-3W"));
        assert_eq!(pie.title, "Total Launches for site CCAFS SLC-3W");
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.total(), 0);
    }

    #[test]
    fn test_scatter_full_domain_includes_every_record_once() {
        let ds = dataset();
        let spec = payload_scatter(&ds, &SiteSelection::All, &PayloadRange::full());
        assert_eq!(spec.point_count(), ds.len());
    }

    #[test]
    fn test_scatter_range_bounds_are_inclusive() {
        let ds = dataset();
        let spec = payload_scatter(&ds, &SiteSelection::All, &PayloadRange::new(525.0, 9600.0));

        // 0.0 and 10000.0 fall outside, everything else stays.
        assert_eq!(spec.point_count(), 5);
        let xs: Vec<f64> = spec
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p[0]))
            .collect();
        assert!(xs.contains(&525.0));
        assert!(xs.contains(&9600.0));
        assert!(!xs.contains(&0.0));
        assert!(!xs.contains(&10_000.0));
    }

    #[test]
    fn test_scatter_degenerate_range_keeps_exact_matches() {
        let spec = payload_scatter(
            &dataset(),
            &SiteSelection::All,
            &PayloadRange::new(5000.0, 5000.0),
        );
        assert_eq!(spec.point_count(), 2);
        for series in &spec.series {
            for point in &series.points {
                assert_eq!(point[0], 5000.0);
            }
        }
    }

    #[test]
    fn test_scatter_combines_site_and_range() {
        let spec = payload_scatter(
            &dataset(),
            &site("CCAFS LC-40"),
            &PayloadRange::new(0.0, 1000.0),
        );
        assert_eq!(spec.point_count(), 2);
        let mut points: Vec<[f64; 2]> = spec
            .series
            .iter()
            .flat_map(|s| s.points.iter().copied())
            .collect();
        points.sort_by(|a, b| a[0].total_cmp(&b[0]));
        assert_eq!(points, vec![[0.0, 0.0], [525.0, 1.0]]);
    }

    #[test]
    fn test_scatter_groups_by_booster_category() {
        let spec = payload_scatter(&dataset(), &SiteSelection::All, &PayloadRange::full());

        let labels: Vec<&str> = spec.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["B5", "FT", "v1.0", "v1.1"]);

        // Points within a series keep dataset order.
        let ft = spec.series.iter().find(|s| s.label == "FT").unwrap();
        assert_eq!(
            ft.points,
            vec![[3170.0, 0.0], [5000.0, 1.0], [10_000.0, 0.0]]
        );
    }

    #[test]
    fn test_scatter_y_label_is_raw_selection_value() {
        let ds = dataset();
        let range = PayloadRange::full();

        let all = payload_scatter(&ds, &SiteSelection::All, &range);
        assert_eq!(all.x_label, "Payload Mass (kg)");
        assert_eq!(all.y_label, "ALL");

        let one = payload_scatter(&ds, &site("VAFB SLC-4E"), &range);
        assert_eq!(one.y_label, "VAFB SLC-4E");
    }

    #[test]
    fn test_scatter_empty_result_is_still_valid() {
        let spec = payload_scatter(&dataset(), &site("CCAFS SLC-3W"), &PayloadRange::full());
        assert!(spec.series.is_empty());
        assert_eq!(spec.point_count(), 0);
        assert_eq!(spec.y_label, "CCAFS SLC-3W");
    }

    #[test]
    fn test_handlers_are_idempotent() {
        let ds = dataset();
        let selection = site("KSC LC-39A");
        let range = PayloadRange::new(1000.0, 9600.0);

        assert_eq!(
            success_pie(&ds, &selection),
            success_pie(&ds, &selection)
        );
        assert_eq!(
            payload_scatter(&ds, &selection, &range),
            payload_scatter(&ds, &selection, &range)
        );
    }
}
