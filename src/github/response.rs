//! GitHub GraphQL request and response shapes

use crate::models::RepositoryNode;
use serde::{Deserialize, Serialize};

/// Variables of the repositories query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageVariables {
    pub login: String,
    /// Cursor of the previous page, `None` for the first page
    #[serde(rename = "after")]
    pub repos_after: Option<String>,
}

impl PageVariables {
    pub fn first(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            repos_after: None,
        }
    }
}

/// One entry of the GraphQL `errors` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlError {
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl GraphQlError {
    pub fn is_type(&self, ty: &str) -> bool {
        self.error_type.as_deref() == Some(ty)
    }
}

/// Full body of a GraphQL response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseData {
    #[serde(default)]
    pub user: Option<UserData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConnection {
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    #[serde(default)]
    pub nodes: Vec<RepositoryNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "endCursor", default)]
    pub end_cursor: Option<String>,
}

impl GraphQlResponse {
    /// A successful page of repositories
    pub fn page(nodes: Vec<RepositoryNode>, end_cursor: Option<&str>) -> Self {
        Self {
            data: Some(ResponseData {
                user: Some(UserData {
                    repositories: RepositoryConnection {
                        page_info: PageInfo {
                            has_next_page: end_cursor.is_some(),
                            end_cursor: end_cursor.map(str::to_string),
                        },
                        nodes,
                    },
                }),
            }),
            errors: None,
        }
    }

    /// A response carrying only an error envelope
    pub fn error(error_type: Option<&str>, message: Option<&str>) -> Self {
        Self {
            data: None,
            errors: Some(vec![GraphQlError {
                error_type: error_type.map(str::to_string),
                message: message.map(str::to_string),
            }]),
        }
    }

    /// First reported error, if the envelope holds any
    pub fn first_error(&self) -> Option<&GraphQlError> {
        self.errors.as_ref().and_then(|e| e.first())
    }

    pub fn is_rate_limited(&self) -> bool {
        self.first_error()
            .is_some_and(|e| e.is_type("RATE_LIMITED"))
    }

    pub fn repositories(&self) -> Option<&RepositoryConnection> {
        self.data
            .as_ref()
            .and_then(|d| d.user.as_ref())
            .map(|u| &u.repositories)
    }

    pub fn into_repositories(self) -> Option<RepositoryConnection> {
        self.data
            .and_then(|d| d.user)
            .map(|u| u.repositories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page() {
        let json = r##"{"data": {"user": {"repositories": {
            "pageInfo": {"hasNextPage": true, "endCursor": "Y3Vyc29yOjEwMA=="},
            "nodes": [{"name": "toplangs", "languages": {"edges": [
                {"size": 512, "node": {"name": "Rust", "color": "#dea584"}}
            ]}}]
        }}}}"##;
        let resp: GraphQlResponse = serde_json::from_str(json).unwrap();
        let repos = resp.repositories().unwrap();
        assert!(repos.page_info.has_next_page);
        assert_eq!(repos.page_info.end_cursor.as_deref(), Some("Y3Vyc29yOjEwMA=="));
        assert_eq!(repos.nodes[0].edges()[0].size, 512);
        assert!(resp.first_error().is_none());
    }

    #[test]
    fn test_parse_error_envelope() {
        let json = r#"{"data": {"user": null}, "errors": [
            {"type": "NOT_FOUND", "path": ["user"], "message": "Could not resolve to a User with the login of 'nobody'."}
        ]}"#;
        let resp: GraphQlResponse = serde_json::from_str(json).unwrap();
        let err = resp.first_error().unwrap();
        assert!(err.is_type("NOT_FOUND"));
        assert!(resp.repositories().is_none());
        assert!(!resp.is_rate_limited());
    }

    #[test]
    fn test_rate_limited() {
        let resp = GraphQlResponse::error(Some("RATE_LIMITED"), Some("API rate limit exceeded"));
        assert!(resp.is_rate_limited());
    }

    #[test]
    fn test_variables_serialize_cursor_as_after() {
        let vars = PageVariables {
            login: "octocat".into(),
            repos_after: Some("abc".into()),
        };
        let json = serde_json::to_value(&vars).unwrap();
        assert_eq!(json["login"], "octocat");
        assert_eq!(json["after"], "abc");

        let first = serde_json::to_value(PageVariables::first("octocat")).unwrap();
        assert!(first["after"].is_null());
    }
}
