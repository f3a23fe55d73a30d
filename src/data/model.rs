use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Outcome – binary launch result
// ---------------------------------------------------------------------------

/// Launch outcome, decoded from the source `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

/// A `class` value other than 0 or 1.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid outcome class {0} (expected 0 or 1)")]
pub struct InvalidOutcome(pub i64);

impl Outcome {
    /// Decode the numeric `class` column (0 = failure, 1 = success).
    pub fn from_class(class: i64) -> Result<Self, InvalidOutcome> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(InvalidOutcome(other)),
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Numeric projection for the scatter y axis.
    pub fn as_y(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }
}

/// Displays with the slice vocabulary used by the charts.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failed"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site name, e.g. "CCAFS LC-40".
    pub site: String,
    /// Payload mass in kilograms (non-negative).
    pub payload_kg: f64,
    /// Mission outcome.
    pub outcome: Outcome,
    /// Booster version category, e.g. "FT".
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed value indices.
///
/// Built once at startup and never mutated afterwards: filtering and the
/// chart handlers only ever derive new views from it.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches (rows), in source-file order.
    pub records: Vec<LaunchRecord>,
    /// Sorted distinct launch site names.
    pub sites: Vec<String>,
    /// Sorted distinct booster version categories.
    pub booster_categories: Vec<String>,
}

impl LaunchDataset {
    /// Build the value indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut site_set: BTreeSet<&str> = BTreeSet::new();
        let mut category_set: BTreeSet<&str> = BTreeSet::new();
        for rec in &records {
            site_set.insert(&rec.site);
            category_set.insert(&rec.booster_category);
        }
        let sites: Vec<String> = site_set.into_iter().map(str::to_owned).collect();
        let booster_categories: Vec<String> =
            category_set.into_iter().map(str::to_owned).collect();

        LaunchDataset {
            records,
            sites,
            booster_categories,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no launches.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest payload mass across all launches, if any.
    pub fn payload_extent(&self) -> Option<(f64, f64)> {
        if self.records.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for rec in &self.records {
            min = min.min(rec.payload_kg);
            max = max.max(rec.payload_kg);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload_kg: f64, class: i64, category: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_owned(),
            payload_kg,
            outcome: Outcome::from_class(class).unwrap(),
            booster_category: category.to_owned(),
        }
    }

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(0), Ok(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Ok(Outcome::Success));
        assert_eq!(Outcome::from_class(2), Err(InvalidOutcome(2)));
        assert_eq!(Outcome::from_class(-1), Err(InvalidOutcome(-1)));
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::Failure.to_string(), "Failed");
        assert_eq!(Outcome::Success.to_string(), "Success");
    }

    #[test]
    fn test_outcome_y_projection() {
        assert_eq!(Outcome::Failure.as_y(), 0.0);
        assert_eq!(Outcome::Success.as_y(), 1.0);
    }

    #[test]
    fn test_dataset_indices_sorted_distinct() {
        let ds = LaunchDataset::from_records(vec![
            record("VAFB SLC-4E", 500.0, 1, "FT"),
            record("CCAFS LC-40", 2500.0, 0, "v1.1"),
            record("CCAFS LC-40", 3000.0, 1, "FT"),
        ]);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(ds.booster_categories, vec!["FT", "v1.1"]);
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
    }

    #[test]
    fn test_payload_extent() {
        let ds = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 9600.0, 1, "B5"),
            record("KSC LC-39A", 0.0, 0, "v1.0"),
            record("CCAFS SLC-40", 4200.0, 1, "B4"),
        ]);
        assert_eq!(ds.payload_extent(), Some((0.0, 9600.0)));
    }

    #[test]
    fn test_payload_extent_empty() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.payload_extent(), None);
    }
}
