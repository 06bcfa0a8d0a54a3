//! Find command implementation

use clap::Args;
use roster_client::SearchClient;
use roster_types::SearchRequest;
use std::time::Duration;
use tracing::error;

/// Find command arguments
#[derive(Args, Debug)]
pub struct FindCommand {
    /// Base URL of the search server
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    pub url: String,

    /// Access token sent with the request
    #[arg(long, env = "ROSTER_ACCESS_TOKEN")]
    pub token: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub timeout_ms: u64,

    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub limit: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i64,

    #[arg(long, default_value = "")]
    pub query: String,

    #[arg(long)]
    pub order_field: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub order_by: Option<i64>,
}

impl FindCommand {
    /// Execute the find command
    pub async fn execute(&self) -> anyhow::Result<()> {
        let mut client =
            SearchClient::new(self.url.as_str()).with_timeout(Duration::from_millis(self.timeout_ms));
        if let Some(token) = &self.token {
            client = client.with_access_token(token.as_str());
        }

        let response = client.find(&self.request()).await.map_err(|e| {
            error!("Search failed: {}", e);
            e
        })?;

        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }

    fn request(&self) -> SearchRequest {
        SearchRequest {
            limit: self.limit,
            offset: self.offset,
            query: self.query.clone(),
            order_field: self.order_field.clone(),
            order_by: self.order_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_find_request() {
        let cli = Cli::try_parse_from([
            "roster",
            "find",
            "--limit",
            "3",
            "--order-field",
            "Age",
            "--order-by",
            "-1",
        ])
        .unwrap();
        let Commands::Find(cmd) = cli.command else {
            panic!("expected find command");
        };
        let request = cmd.request();
        assert_eq!(request.limit, 3);
        assert_eq!(request.offset, 0);
        assert_eq!(request.order_field.as_deref(), Some("Age"));
        assert_eq!(request.order_by, Some(-1));
    }

    #[tokio::test]
    async fn test_find_negative_limit_fails() {
        let cli = Cli::try_parse_from(["roster", "find", "--limit", "-1"]).unwrap();
        let Commands::Find(cmd) = cli.command else {
            panic!("expected find command");
        };
        assert!(cmd.execute().await.is_err());
    }
}
