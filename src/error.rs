//! Error types for fetching and ranking languages

use thiserror::Error;

/// Fallback message when GitHub reports an error without a usable message
pub const GRAPHQL_ERROR_MESSAGE: &str =
    "Something went wrong while trying to retrieve the language data using the GraphQL API.";

/// Message used when GitHub cannot find the requested user
pub const USER_NOT_FOUND_MESSAGE: &str = "Could not fetch user.";

/// Errors that can occur while collecting or ranking languages
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopLangsError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{0}")]
    UserNotFound(String),

    #[error("GitHub API error: {0}")]
    Upstream(String),

    #[error("{0}")]
    GraphQl(String),

    #[error("No GitHub API tokens found. Set PAT_1 (and optionally PAT_2, PAT_3, ...)")]
    NoTokens,

    #[error("Downtime due to GitHub API rate limiting")]
    MaxRetries,

    #[error("GitHub rejected the token: {0}")]
    BadCredentials(String),

    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to parse GitHub response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl TopLangsError {
    /// Whether another token might succeed where this one failed
    pub fn is_credential_failure(&self) -> bool {
        matches!(self, TopLangsError::BadCredentials(_))
    }
}

pub type TopLangsResult<T> = Result<T, TopLangsError>;
