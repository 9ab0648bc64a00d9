use crate::errors::{AirutError, Result};
use std::path::Path;

/// Configuration for Airut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub version: u64,
    pub webhook_url: Option<String>,
    pub image_url: Option<String>,
    pub project_name: Option<String>,
    pub repository: Option<String>,
    pub ignored_contributors: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            webhook_url: None,
            image_url: None,
            project_name: None,
            repository: None,
            ignored_contributors: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from .airut/config.toml
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(".airut").join("config.toml");
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)?;
        Self::parse(&text)
    }

    fn parse(text: &str) -> Result<Self> {
        let value: toml::Value = text
            .parse()
            .map_err(|e| AirutError::Config(format!("invalid config.toml: {e}")))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .unwrap_or(1);
        let version = u64::try_from(version).unwrap_or(1);

        let ignored_contributors = value
            .get("contributors")
            .and_then(|v| v.as_table())
            .and_then(|t| t.get("ignored"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str())
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            version,
            webhook_url: table_str(&value, "webhook", "url"),
            image_url: table_str(&value, "webhook", "image_url"),
            project_name: table_str(&value, "project", "name"),
            repository: table_str(&value, "project", "repository"),
            ignored_contributors,
        })
    }
}

fn table_str(value: &toml::Value, table: &str, key: &str) -> Option<String> {
    value
        .get(table)
        .and_then(|v| v.as_table())
        .and_then(|t| t.get(key))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}
