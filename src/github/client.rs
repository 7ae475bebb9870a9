//! GitHub GraphQL client
//!
//! Fetches one page of a user's repositories with their language
//! breakdown. Uses ureq (sync HTTP) — no async runtime needed.

use crate::error::{TopLangsError, TopLangsResult};
use crate::github::response::{GraphQlResponse, PageVariables};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.github.com/graphql";

const REPOSITORIES_QUERY: &str = r#"
query userInfo($login: String!, $after: String) {
  user(login: $login) {
    repositories(ownerAffiliations: OWNER, isFork: false, first: 100, after: $after) {
      nodes {
        name
        languages(first: 10, orderBy: {field: SIZE, direction: DESC}) {
          edges {
            size
            node {
              color
              name
            }
          }
        }
      }
      pageInfo {
        endCursor
        hasNextPage
      }
    }
  }
}
"#;

/// Messages GitHub returns for tokens that will never work
const REJECTED_TOKEN_MESSAGES: &[&str] = &["Bad credentials", "Sorry. Your account was suspended."];

/// Source of repository pages
///
/// `token` is chosen by the retry policy, so a fetcher never decides
/// which credential to use.
pub trait PageFetcher {
    fn fetch_page(
        &self,
        variables: &PageVariables,
        token: Option<&str>,
    ) -> TopLangsResult<GraphQlResponse>;
}

/// Fetches pages from the GitHub GraphQL endpoint
pub struct GithubClient {
    api_url: String,
    agent: ureq::Agent,
}

fn make_agent(timeout: Duration) -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false) // status codes are mapped to TopLangsError below
        .timeout_global(Some(timeout))
        .build()
        .new_agent()
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_url: api_url.into(),
            agent: make_agent(timeout),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, Duration::from_secs(30))
    }
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'static str,
    variables: &'a PageVariables,
}

/// REST-style error body GitHub sends with 4xx statuses
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl PageFetcher for GithubClient {
    fn fetch_page(
        &self,
        variables: &PageVariables,
        token: Option<&str>,
    ) -> TopLangsResult<GraphQlResponse> {
        debug!(
            "Fetching repositories of {} after {:?}",
            variables.login, variables.repos_after
        );

        let body = GraphQlRequest {
            query: REPOSITORIES_QUERY,
            variables,
        };

        let mut req = self
            .agent
            .post(self.api_url.as_str())
            .header("Content-Type", "application/json")
            .header("User-Agent", concat!("toplangs/", env!("CARGO_PKG_VERSION")));
        if let Some(token) = token {
            req = req.header("Authorization", &format!("bearer {}", token));
        }

        let response = req
            .send_json(&body)
            .map_err(|e| TopLangsError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            let text = response.into_body().read_to_string().unwrap_or_default();
            return Err(classify_error_status(status, &text));
        }

        response
            .into_body()
            .read_json::<GraphQlResponse>()
            .map_err(|e| TopLangsError::Parse(e.to_string()))
    }
}

/// Map a failed HTTP response to an error, recognising rejected tokens
fn classify_error_status(status: u16, body: &str) -> TopLangsError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| body.trim().to_string());

    if REJECTED_TOKEN_MESSAGES.contains(&message.as_str()) {
        TopLangsError::BadCredentials(message)
    } else {
        TopLangsError::Http { status, message }
    }
}
