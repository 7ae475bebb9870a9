//! toplangs - rank the languages a GitHub user writes
//!
//! Collects every repository of a user through the GitHub GraphQL API
//! (cursor pagination, token rotation on rate limits) and merges their
//! language breakdowns into one ranked distribution.
//!
//! # Example
//!
//! ```rust,no_run
//! use toplangs::fetch_top_languages;
//!
//! // PAT_1 must hold a GitHub token
//! let top = fetch_top_languages("octocat", &[], 1.0, 0.0)?;
//! for lang in top.iter() {
//!     println!("{} {:.0} ({} repos)", lang.name, lang.size, lang.count);
//! }
//! # Ok::<(), toplangs::TopLangsError>(())
//! ```

pub mod aggregate;
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod reporters;
pub mod text;

pub use aggregate::{aggregate, Weights};
pub use collector::collect_all;
pub use config::UserConfig;
pub use error::{TopLangsError, TopLangsResult};
pub use github::{GithubClient, PageFetcher, RetryPolicy, SingleAttempt, TokenRotation};
pub use models::{LanguageStat, RepositoryNode, TopLangData};

use tracing::info;

/// Fetches and ranks languages with a fixed fetcher, retry policy and
/// process-wide exclusion list
pub struct TopLangs {
    fetcher: Box<dyn PageFetcher>,
    retry: Box<dyn RetryPolicy>,
    exclude_repo: Vec<String>,
}

impl TopLangs {
    pub fn new(fetcher: Box<dyn PageFetcher>, retry: Box<dyn RetryPolicy>) -> Self {
        Self {
            fetcher,
            retry,
            exclude_repo: Vec::new(),
        }
    }

    /// GitHub client rotating through the configured tokens
    pub fn from_config(config: &UserConfig) -> Self {
        let fetcher = GithubClient::new(config.api_url(), config.timeout());
        let retry = TokenRotation::new(config.tokens().to_vec()).with_delay(config.retry_delay());
        Self::new(Box::new(fetcher), Box::new(retry))
            .with_excluded(config.exclude_repo().to_vec())
    }

    /// Repositories excluded from every call, in addition to per-call lists
    pub fn with_excluded(mut self, exclude_repo: Vec<String>) -> Self {
        self.exclude_repo = exclude_repo;
        self
    }

    pub fn excluded(&self) -> &[String] {
        &self.exclude_repo
    }

    /// Collect all of `username`'s repositories and rank their languages.
    pub fn fetch(
        &self,
        username: &str,
        exclude_repo: &[String],
        weights: Weights,
    ) -> TopLangsResult<TopLangData> {
        let repos = collect_all(username, self.fetcher.as_ref(), self.retry.as_ref())?;

        let excluded: Vec<&str> = self
            .exclude_repo
            .iter()
            .chain(exclude_repo)
            .map(String::as_str)
            .collect();
        let top = aggregate(&repos, &excluded, weights);

        info!(
            "Ranked {} languages across {} repositories of {}",
            top.len(),
            repos.len(),
            username.trim()
        );
        Ok(top)
    }
}

/// Rank `username`'s languages using tokens and exclusions from the
/// environment and user config file.
///
/// Fails with `Validation` before any request when the username is blank
/// or a weight is negative or not finite.
pub fn fetch_top_languages(
    username: &str,
    exclude_repo: &[String],
    size_weight: f64,
    count_weight: f64,
) -> TopLangsResult<TopLangData> {
    collector::validate_username(username)?;
    let weights = Weights::new(size_weight, count_weight)?;
    let config = UserConfig::load().map_err(|e| TopLangsError::Config(e.to_string()))?;
    TopLangs::from_config(&config).fetch(username, exclude_repo, weights)
}
