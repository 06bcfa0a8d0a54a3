//! Dataset and settings loading for Roster
//!
//! This crate reads the XML person dataset into records and parses the
//! YAML settings file, including environment variable substitution.

pub mod dataset;
pub mod settings;

pub use dataset::{parse_dataset, XmlDatasetFile};
pub use settings::{parse_settings, parse_settings_file};

use roster_core::{RecordStore, RosterError};

/// Load a record store from an XML dataset file
pub fn load_store(path: &str) -> Result<RecordStore, RosterError> {
    RecordStore::load(&XmlDatasetFile::new(path))
}
