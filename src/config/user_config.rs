//! User-level configuration for toplangs
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/toplangs/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::github::DEFAULT_API_URL;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub github: GithubConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GithubConfig {
    /// Personal access tokens, tried in order when one is rate limited
    #[serde(default)]
    pub tokens: Vec<String>,

    /// Repositories left out of every ranking
    #[serde(default)]
    pub exclude_repo: Vec<String>,

    /// GraphQL endpoint (default: https://api.github.com/graphql)
    pub api_url: Option<String>,

    /// Request timeout in seconds (default: 30)
    pub timeout_secs: Option<u64>,

    /// Pause before rotating to the next token, in milliseconds (default: 0)
    pub retry_delay_ms: Option<u64>,
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/toplangs/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = Self::user_config_path()
            .map(|p| Self::load_file(&p))
            .transpose()?
            .unwrap_or_default();
        config.apply_env(std::env::vars());
        Ok(config)
    }

    /// Read a config file; a missing file yields defaults
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str::<UserConfig>(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Get the user config directory path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("toplangs").join("config.toml"))
    }

    /// Override file settings from environment variables
    ///
    /// `PAT_1`, `PAT_2`, ... replace the configured tokens (ordered by
    /// number), `EXCLUDE_REPO` is a comma-separated list of repository
    /// names and `GITHUB_GRAPHQL_URL` replaces the endpoint.
    pub fn apply_env<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut pats: Vec<(u32, String)> = Vec::new();
        for (key, value) in vars {
            if let Some(index) = key.strip_prefix("PAT_").and_then(|n| n.parse::<u32>().ok()) {
                if !value.trim().is_empty() {
                    pats.push((index, value.trim().to_string()));
                }
                continue;
            }
            match key.as_str() {
                "EXCLUDE_REPO" => self.github.exclude_repo = parse_list(&value),
                "GITHUB_GRAPHQL_URL" if !value.trim().is_empty() => {
                    self.github.api_url = Some(value.trim().to_string())
                }
                _ => {}
            }
        }
        if !pats.is_empty() {
            pats.sort_by_key(|(index, _)| *index);
            self.github.tokens = pats.into_iter().map(|(_, token)| token).collect();
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.github.tokens
    }

    /// Process-wide exclusion list
    pub fn exclude_repo(&self) -> &[String] {
        &self.github.exclude_repo
    }

    pub fn api_url(&self) -> &str {
        self.github.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.github.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.github.retry_delay_ms.unwrap_or(0))
    }

    /// Check if at least one token is configured
    pub fn has_tokens(&self) -> bool {
        !self.github.tokens.is_empty()
    }

    /// Initialize user config directory and create example config
    pub fn init_user_config() -> Result<PathBuf> {
        let config_path = Self::user_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::write_example(&config_path)?;
        Ok(config_path)
    }

    /// Write the commented example config unless the file already exists
    pub fn write_example(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if !config_path.exists() {
            let example = r#"# toplangs User Configuration

[github]
# Personal access tokens (read:user scope). When one hits the rate limit
# the next is used. PAT_1, PAT_2, ... environment variables take priority.
# tokens = ["ghp_..."]

# Repositories to leave out of every ranking (EXCLUDE_REPO env, comma separated)
# exclude_repo = ["dotfiles", "homepage"]

# GraphQL endpoint, e.g. for GitHub Enterprise
# api_url = "https://api.github.com/graphql"

# timeout_secs = 30
# retry_delay_ms = 0
"#;
            std::fs::write(config_path, example)?;
        }

        Ok(())
    }
}

/// Split a comma-separated list, dropping blanks
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
