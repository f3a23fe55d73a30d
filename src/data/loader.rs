use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

/// Columns every source file must carry. Extra columns are ignored.
const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch records from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the required column names (recommended)
/// * `.json` – records-oriented array of row objects with the same keys
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Raw row shape shared by both formats
// ---------------------------------------------------------------------------

/// One source row as it appears in the file, before validation.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_kg: f64,
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl RawRecord {
    /// Validate the row and convert it into the domain record.
    fn into_record(self) -> Result<LaunchRecord> {
        let outcome = Outcome::from_class(self.class)?;
        if !self.payload_kg.is_finite() || self.payload_kg < 0.0 {
            bail!(
                "payload mass {} is not a non-negative number of kg",
                self.payload_kg
            );
        }
        Ok(LaunchRecord {
            site: self.site,
            payload_kg: self.payload_kg,
            outcome,
            booster_category: self.booster_category,
        })
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one launch per row.
/// Works with files written by Pandas (`df.to_csv()`), including the
/// nameless leading index column those carry.
fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_csv(file)
}

fn read_csv(input: impl Read) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(input);

    let headers = reader.headers().context("reading CSV headers")?;
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            bail!("CSV missing '{required}' column");
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        let record = raw
            .into_record()
            .with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 2500.0,
///     "class": 1,
///     "Booster Version Category": "FT"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    read_json(&text)
}

fn read_json(text: &str) -> Result<LaunchDataset> {
    let rows: Vec<RawRecord> = serde_json::from_str(text).context("parsing JSON records")?;

    let mut records = Vec::with_capacity(rows.len());
    for (row_no, raw) in rows.into_iter().enumerate() {
        let record = raw
            .into_record()
            .with_context(|| format!("Row {row_no}"))?;
        records.push(record);
    }

    Ok(LaunchDataset::from_records(records))
}
