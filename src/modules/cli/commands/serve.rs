//! Serve command implementation

use anyhow::Context;
use clap::Args;
use roster_core::Settings;
use roster_parser::{load_store, parse_settings_file};
use roster_runtime::Runtime;
use tracing::info;

/// Serve command arguments
#[derive(Args, Debug)]
pub struct ServeCommand {
    /// Settings file path (YAML)
    #[arg(short = 'f', long = "file")]
    pub config: Option<String>,

    /// Override the dataset path
    #[arg(long)]
    pub dataset: Option<String>,

    /// Override server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Require this access token on every request
    #[arg(long, env = "ROSTER_ACCESS_TOKEN")]
    pub token: Option<String>,
}

impl ServeCommand {
    /// Execute the serve command
    pub async fn execute(&self) -> anyhow::Result<()> {
        let settings = match &self.config {
            Some(path) => {
                info!("Loading settings from: {}", path);
                parse_settings_file(path)?
            }
            None => Settings::default(),
        };
        let settings = self.apply_overrides(settings);

        let dataset = settings
            .dataset
            .clone()
            .context("no dataset configured; pass --dataset or set `dataset` in the settings file")?;
        let store = load_store(&dataset)?;

        let runtime = Runtime::new(settings, store);
        runtime.run().await?;

        Ok(())
    }

    /// Apply CLI overrides on top of file settings
    fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(dataset) = &self.dataset {
            settings.dataset = Some(dataset.clone());
        }
        if let Some(port) = self.port {
            settings.server_mut().port = Some(port);
        }
        if let Some(token) = &self.token {
            settings.server_mut().access_token = Some(token.clone());
        }
        settings
    }
}
