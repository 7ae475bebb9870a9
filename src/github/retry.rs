//! Retry policies wrapping a single page fetch
//!
//! The collector is agnostic to how retries happen; it hands the fetcher
//! and variables to a `RetryPolicy` and takes whatever comes back.

use crate::error::{TopLangsError, TopLangsResult};
use crate::github::client::PageFetcher;
use crate::github::response::{GraphQlResponse, PageVariables};
use std::time::Duration;
use tracing::warn;

/// Wraps a page fetch, retrying transient failures
pub trait RetryPolicy {
    fn run(
        &self,
        fetcher: &dyn PageFetcher,
        variables: &PageVariables,
    ) -> TopLangsResult<GraphQlResponse>;
}

/// Rotates through personal access tokens
///
/// Attempt `n` uses token `n`. A rate-limited response or a rejected token
/// moves on to the next token; any other failure is returned as-is. Once
/// every token has been tried the fetch fails with `MaxRetries`.
#[derive(Debug, Clone)]
pub struct TokenRotation {
    tokens: Vec<String>,
    delay: Duration,
}

impl TokenRotation {
    pub fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            delay: Duration::ZERO,
        }
    }

    /// Sleep `delay × attempt` before each rotation
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl RetryPolicy for TokenRotation {
    fn run(
        &self,
        fetcher: &dyn PageFetcher,
        variables: &PageVariables,
    ) -> TopLangsResult<GraphQlResponse> {
        if self.tokens.is_empty() {
            return Err(TopLangsError::NoTokens);
        }

        for (attempt, token) in self.tokens.iter().enumerate() {
            if attempt > 0 && !self.delay.is_zero() {
                std::thread::sleep(self.delay * attempt as u32);
            }
            match fetcher.fetch_page(variables, Some(token)) {
                Ok(response) if response.is_rate_limited() => {
                    warn!("PAT_{} failed: rate limited", attempt + 1);
                }
                Ok(response) => return Ok(response),
                Err(e) if e.is_credential_failure() => {
                    warn!("PAT_{} failed: {}", attempt + 1, e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(TopLangsError::MaxRetries)
    }
}

/// One attempt, no retries
#[derive(Debug, Clone, Default)]
pub struct SingleAttempt {
    token: Option<String>,
}

impl SingleAttempt {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

impl RetryPolicy for SingleAttempt {
    fn run(
        &self,
        fetcher: &dyn PageFetcher,
        variables: &PageVariables,
    ) -> TopLangsResult<GraphQlResponse> {
        fetcher.fetch_page(variables, self.token.as_deref())
    }
}
