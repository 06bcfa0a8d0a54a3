//! Record sources

use super::Record;
use crate::error::Result;

/// Anything that can produce the ordered record sequence for a store
///
/// Implementations must derive each record's full name at load time, which
/// [`Record::new`] does.
pub trait RecordSource {
    /// Produce all records in source order
    fn load(&self) -> Result<Vec<Record>>;
}

/// In-memory records, mostly useful for tests and embedding
impl RecordSource for Vec<Record> {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.clone())
    }
}
