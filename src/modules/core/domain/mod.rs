//! Domain models for Roster

mod query;
mod record;
mod settings;
mod source;
mod store;

pub use query::Query;
pub use record::Record;
pub use settings::{ServerConfig, Settings};
pub use source::RecordSource;
pub use store::RecordStore;
