//! YAML settings loader with environment placeholders

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use roster_core::{RosterError, Settings};

/// Placeholder pattern: {{ env.VAR_NAME }}
static ENV_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*env\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

/// Parse settings from a YAML file
pub fn parse_settings_file(path: &str) -> Result<Settings, RosterError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| RosterError::Config(format!("Failed to read file '{}': {}", path, e)))?;

    parse_settings(&content)
}

/// Parse settings from YAML text
///
/// Placeholders are replaced before parsing; any unset variable fails the
/// whole file.
pub fn parse_settings(content: &str) -> Result<Settings, RosterError> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let content = substitute_env(content, |name| std::env::var(name).ok())?;

    serde_yaml::from_str(&content)
        .map_err(|e| RosterError::Config(format!("Invalid settings: {}", e)))
}

fn substitute_env(
    content: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, RosterError> {
    let mut missing: Vec<String> = Vec::new();

    let result = ENV_PATTERN.replace_all(content, |cap: &Captures| {
        let name = &cap[1];
        lookup(name).unwrap_or_else(|| {
            missing.push(name.to_string());
            String::new()
        })
    });

    if !missing.is_empty() {
        return Err(RosterError::EnvVarNotFound(missing.join(", ")));
    }

    Ok(result.into_owned())
}
