//! GitHub GraphQL access
//!
//! Split into the transport (`GithubClient`, implementing `PageFetcher`),
//! the response shapes, and the retry policies wrapping each page fetch.
//!
//! # Environment Variables
//!
//! - `PAT_1`, `PAT_2`, ...: personal access tokens, rotated on rate limits
//! - `GITHUB_GRAPHQL_URL`: endpoint override (GitHub Enterprise)

mod client;
mod response;
mod retry;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{GithubClient, PageFetcher, DEFAULT_API_URL};
pub use response::{
    GraphQlError, GraphQlResponse, PageInfo, PageVariables, RepositoryConnection, ResponseData,
    UserData,
};
pub use retry::{RetryPolicy, SingleAttempt, TokenRotation};
