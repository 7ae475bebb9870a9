//! Core data models for toplangs
//!
//! Repository and language shapes mirror the GitHub GraphQL response so
//! they deserialize directly from a page of results. `TopLangData` is the
//! ranked output of aggregation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A language as reported by GitHub linguist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    /// Hex color, `None` for languages GitHub has no color for
    #[serde(default)]
    pub color: Option<String>,
}

/// One (language, bytes) observation attached to a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEdge {
    pub size: u64,
    pub node: Language,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConnection {
    #[serde(default)]
    pub edges: Vec<LanguageEdge>,
}

/// A repository with its language breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryNode {
    pub name: String,
    /// Repository size, only used to order repositories before flattening
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub languages: Option<LanguageConnection>,
}

impl RepositoryNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
            languages: None,
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_language(mut self, name: &str, color: Option<&str>, size: u64) -> Self {
        self.languages
            .get_or_insert_with(LanguageConnection::default)
            .edges
            .push(LanguageEdge {
                size,
                node: Language {
                    name: name.to_string(),
                    color: color.map(str::to_string),
                },
            });
        self
    }

    /// Language edges, empty when GitHub returned no language connection
    pub fn edges(&self) -> &[LanguageEdge] {
        self.languages
            .as_ref()
            .map(|l| l.edges.as_slice())
            .unwrap_or(&[])
    }
}

/// Aggregated usage of one language across repositories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub name: String,
    pub color: Option<String>,
    /// Summed bytes before weighting, weighted score after
    pub size: f64,
    /// Number of repositories contributing this language
    pub count: u32,
}

/// Languages ranked by descending weighted size
///
/// Iteration order is rank order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopLangData(IndexMap<String, LanguageStat>);

impl TopLangData {
    pub(crate) fn from_ranked(stats: Vec<LanguageStat>) -> Self {
        Self(stats.into_iter().map(|s| (s.name.clone(), s)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&LanguageStat> {
        self.0.get(name)
    }

    /// 0-based rank of a language
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.0.get_index_of(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageStat> {
        self.0.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Drop the given languages (matched case-insensitively), keeping rank order
    pub fn without(mut self, hidden: &[String]) -> Self {
        if hidden.is_empty() {
            return self;
        }
        let hidden: Vec<String> = hidden.iter().map(|h| h.trim().to_lowercase()).collect();
        self.0
            .retain(|name, _| !hidden.contains(&name.to_lowercase()));
        self
    }

    /// Keep only the `n` highest ranked languages
    pub fn truncate(mut self, n: usize) -> Self {
        self.0.truncate(n);
        self
    }

    pub fn total_size(&self) -> f64 {
        self.0.values().map(|s| s.size).sum()
    }

    /// Share of the total weighted size, in percent, per language in rank order
    pub fn percentages(&self) -> Vec<(&LanguageStat, f64)> {
        let total = self.total_size();
        self.0
            .values()
            .map(|s| {
                let pct = if total > 0.0 { s.size / total * 100.0 } else { 0.0 };
                (s, pct)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(name: &str, size: f64, count: u32) -> LanguageStat {
        LanguageStat {
            name: name.to_string(),
            color: None,
            size,
            count,
        }
    }

    #[test]
    fn test_repository_without_languages_has_no_edges() {
        let json = r#"{"name": "empty"}"#;
        let repo: RepositoryNode = serde_json::from_str(json).unwrap();
        assert!(repo.edges().is_empty());
        assert_eq!(repo.size, None);
    }

    #[test]
    fn test_repository_deserializes_graphql_shape() {
        let json = r##"{
            "name": "toplangs",
            "languages": {"edges": [
                {"size": 1200, "node": {"name": "Rust", "color": "#dea584"}},
                {"size": 40, "node": {"name": "Nix", "color": null}}
            ]}
        }"##;
        let repo: RepositoryNode = serde_json::from_str(json).unwrap();
        assert_eq!(repo.edges().len(), 2);
        assert_eq!(repo.edges()[0].node.color.as_deref(), Some("#dea584"));
        assert_eq!(repo.edges()[1].node.color, None);
    }

    #[test]
    fn test_without_is_case_insensitive() {
        let data = TopLangData::from_ranked(vec![
            stat("Rust", 10.0, 1),
            stat("HTML", 5.0, 1),
            stat("Go", 1.0, 1),
        ]);
        let data = data.without(&["html".to_string()]);
        assert_eq!(data.names().collect::<Vec<_>>(), vec!["Rust", "Go"]);
    }

    #[test]
    fn test_truncate_keeps_top() {
        let data = TopLangData::from_ranked(vec![stat("A", 3.0, 1), stat("B", 2.0, 1)]);
        let data = data.truncate(1);
        assert_eq!(data.len(), 1);
        assert_eq!(data.rank_of("A"), Some(0));
    }

    #[test]
    fn test_percentages() {
        let data = TopLangData::from_ranked(vec![stat("A", 75.0, 2), stat("B", 25.0, 1)]);
        let pcts: Vec<f64> = data.percentages().into_iter().map(|(_, p)| p).collect();
        assert_eq!(pcts, vec![75.0, 25.0]);
        assert!(TopLangData::default().percentages().is_empty());
    }

    #[test]
    fn test_serializes_in_rank_order() {
        let data = TopLangData::from_ranked(vec![stat("Zig", 9.0, 1), stat("Ada", 1.0, 1)]);
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.find("Zig").unwrap() < json.find("Ada").unwrap());
    }
}
