//! XML dataset loader
//!
//! The dataset is a `<root>` element holding one `<row>` per person. Child
//! elements other than the ones mapped below (e.g. `guid`) are ignored.

use roster_core::{Record, RecordSource, RosterError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize)]
struct XmlDataset {
    #[serde(rename = "row", default)]
    rows: Vec<XmlRow>,
}

#[derive(Debug, Deserialize)]
struct XmlRow {
    id: u64,

    #[serde(default)]
    first_name: String,

    #[serde(default)]
    last_name: String,

    #[serde(default)]
    age: u32,

    #[serde(default)]
    gender: String,

    /// Free-text bio
    #[serde(default)]
    about: String,
}

impl From<XmlRow> for Record {
    fn from(row: XmlRow) -> Self {
        Record::new(
            row.id,
            row.first_name,
            row.last_name,
            row.age,
            row.gender,
            row.about,
        )
    }
}

/// Parse dataset records from XML text
pub fn parse_dataset(content: &str) -> Result<Vec<Record>, RosterError> {
    let dataset: XmlDataset = quick_xml::de::from_str(content)
        .map_err(|e| RosterError::Load(format!("Malformed dataset: {}", e)))?;

    Ok(dataset.rows.into_iter().map(Record::from).collect())
}

/// XML dataset file used as a record source
#[derive(Debug, Clone)]
pub struct XmlDatasetFile {
    path: PathBuf,
}

impl XmlDatasetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for XmlDatasetFile {
    fn load(&self) -> Result<Vec<Record>, RosterError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            RosterError::Load(format!(
                "Failed to read dataset '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let records = parse_dataset(&content)?;
        info!(
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}
