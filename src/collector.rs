//! Cursor pagination over a user's repositories
//!
//! Pages are fetched strictly in sequence since each cursor comes from the
//! previous page. The loop ends when GitHub reports `hasNextPage = false`;
//! an upstream that never does would keep the loop running.

use crate::error::{TopLangsError, TopLangsResult, GRAPHQL_ERROR_MESSAGE, USER_NOT_FOUND_MESSAGE};
use crate::github::{GraphQlError, PageFetcher, PageVariables, RetryPolicy};
use crate::models::RepositoryNode;
use crate::text::first_line;
use tracing::{debug, error};

/// Upstream messages are cut to one line of this many characters
const MESSAGE_WIDTH: usize = 90;

/// Require a non-blank username
pub fn validate_username(username: &str) -> TopLangsResult<&str> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(TopLangsError::Validation(
            "username is required".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Fetch every page of `username`'s repositories.
pub fn collect_all(
    username: &str,
    fetcher: &dyn PageFetcher,
    retry: &dyn RetryPolicy,
) -> TopLangsResult<Vec<RepositoryNode>> {
    let login = validate_username(username)?;

    let mut variables = PageVariables::first(login);
    let mut repos = Vec::new();
    let mut pages = 0usize;

    loop {
        let response = retry.run(fetcher, &variables)?;

        if let Some(err) = response.first_error() {
            error!(
                "GitHub returned an error for {}: type={:?} message={:?}",
                login, err.error_type, err.message
            );
            return Err(error_from_envelope(err));
        }

        let Some(connection) = response.into_repositories() else {
            error!("GitHub returned no user payload for {}", login);
            return Err(TopLangsError::UserNotFound(
                USER_NOT_FOUND_MESSAGE.to_string(),
            ));
        };

        pages += 1;
        debug!(
            "Page {} for {}: {} repositories",
            pages,
            login,
            connection.nodes.len()
        );
        repos.extend(connection.nodes);

        if !connection.page_info.has_next_page {
            break;
        }
        match connection.page_info.end_cursor {
            Some(cursor) => variables.repos_after = Some(cursor),
            None => {
                return Err(TopLangsError::Upstream(
                    "GitHub reported another page without a cursor".to_string(),
                ))
            }
        }
    }

    debug!(
        "Collected {} repositories for {} in {} pages",
        repos.len(),
        login,
        pages
    );
    Ok(repos)
}

fn error_from_envelope(err: &GraphQlError) -> TopLangsError {
    let message = err.message.as_deref().filter(|m| !m.trim().is_empty());

    if err.is_type("NOT_FOUND") {
        return TopLangsError::UserNotFound(
            message.unwrap_or(USER_NOT_FOUND_MESSAGE).to_string(),
        );
    }

    match message.and_then(|m| first_line(m, MESSAGE_WIDTH)) {
        Some(line) => TopLangsError::Upstream(line),
        None => TopLangsError::GraphQl(GRAPHQL_ERROR_MESSAGE.to_string()),
    }
}
