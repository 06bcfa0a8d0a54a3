//! Search command implementation

use clap::Args;
use roster_core::Query;
use roster_parser::load_store;
use roster_types::{OrderBy, OrderField, User};

/// Search command arguments
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// XML dataset file
    pub dataset: String,

    /// Number of records to return
    #[arg(long, default_value_t = 1)]
    pub limit: usize,

    /// Zero-based offset into the matching records
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Substring to look for in full name or bio
    #[arg(long, default_value = "")]
    pub query: String,

    /// Field to order by (Id, Age, Name)
    #[arg(long, default_value = "Name")]
    pub order_field: OrderField,

    /// Order direction: -1, 0 (keep dataset order) or 1
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub order_by: OrderBy,
}

impl SearchCommand {
    /// Execute the search command
    pub fn execute(&self) -> anyhow::Result<()> {
        let users = self.search()?;
        println!("{}", serde_json::to_string_pretty(&users)?);
        Ok(())
    }

    /// Load the dataset and run the query without pagination lookahead
    pub fn search(&self) -> anyhow::Result<Vec<User>> {
        let store = load_store(&self.dataset)?;
        let query = self.query();
        Ok(store.search(&query).iter().map(|r| r.to_user()).collect())
    }

    fn query(&self) -> Query {
        Query::new(self.limit)
            .with_offset(self.offset)
            .with_text(self.query.as_str())
            .ordered_by(self.order_field, self.order_by)
    }
}
