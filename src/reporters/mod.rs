//! Output reporters for ranked language data
//!
//! Supports:
//! - `text` - Terminal output with colors and usage bars
//! - `json` - Machine-readable JSON, keys in rank order

mod json;
mod text;

use crate::models::TopLangData;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render ranked languages in the given format
pub fn report(username: &str, data: &TopLangData, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(username, data),
        OutputFormat::Json => json::render(data),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::aggregate::{aggregate, Weights};
    use crate::models::RepositoryNode;

    pub(crate) fn test_data() -> TopLangData {
        let repos = vec![
            RepositoryNode::new("api")
                .with_language("Rust", Some("#dea584"), 7_500)
                .with_language("Shell", Some("#89e051"), 500),
            RepositoryNode::new("site")
                .with_language("TypeScript", Some("#3178c6"), 2_000),
        ];
        aggregate(&repos, &[] as &[&str], Weights::default())
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("svg".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_report_dispatch() {
        let data = test_data();
        let json = report("octocat", &data, OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));
        let text = report("octocat", &data, OutputFormat::Text).unwrap();
        assert!(text.contains("octocat"));
    }
}
