//! Language aggregation and ranking
//!
//! Merges per-repository language sizes into one ranked distribution.
//!
//! # Scoring Formula
//!
//! ```text
//! score = total_bytes ^ size_weight × repo_count ^ count_weight
//! ```
//!
//! The defaults (`size_weight = 1`, `count_weight = 0`) rank purely by total
//! bytes. `count_weight = 1` lets breadth across repositories dominate, and
//! `size_weight = 0` ranks by repository count alone.

use crate::error::{TopLangsError, TopLangsResult};
use crate::models::{LanguageStat, RepositoryNode, TopLangData};
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::debug;

/// Exponents of the scoring formula
///
/// Only built through `new` or `default`, so both are always finite and
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    size: f64,
    count: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            size: 1.0,
            count: 0.0,
        }
    }
}

impl Weights {
    /// Validated weights; both must be finite and non-negative
    pub fn new(size: f64, count: f64) -> TopLangsResult<Self> {
        for (label, value) in [("size_weight", size), ("count_weight", count)] {
            if !value.is_finite() || value < 0.0 {
                return Err(TopLangsError::Validation(format!(
                    "{label} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(Self { size, count })
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn count(&self) -> f64 {
        self.count
    }

    /// Weighted score for a language; `powf(0, 0)` is 1, so zero weights never yield NaN
    pub fn score(&self, size: f64, count: u32) -> f64 {
        size.powf(self.size) * f64::from(count).powf(self.count)
    }
}

/// Rank languages across `repos`, skipping repositories named in `excluded`.
pub fn aggregate<S: AsRef<str>>(
    repos: &[RepositoryNode],
    excluded: &[S],
    weights: Weights,
) -> TopLangData {
    let excluded: HashSet<&str> = excluded.iter().map(|s| s.as_ref()).collect();

    // Largest repositories first, so first-seen colors and tie order are stable
    let mut ordered: Vec<&RepositoryNode> = repos.iter().collect();
    ordered.sort_by(|a, b| b.size.cmp(&a.size));

    let merged = ordered
        .into_iter()
        .filter(|repo| !excluded.contains(repo.name.as_str()))
        .filter(|repo| !repo.edges().is_empty())
        .fold(IndexMap::<String, LanguageStat>::new(), |mut acc, repo| {
            // A repository counts once per language, even if it lists one twice
            let mut seen: HashSet<&str> = HashSet::new();
            for edge in repo.edges() {
                let first_in_repo = seen.insert(edge.node.name.as_str());
                acc.entry(edge.node.name.clone())
                    .and_modify(|stat| {
                        stat.size += edge.size as f64;
                        if first_in_repo {
                            stat.count += 1;
                        }
                    })
                    .or_insert_with(|| LanguageStat {
                        name: edge.node.name.clone(),
                        color: edge.node.color.clone(),
                        size: edge.size as f64,
                        count: 1,
                    });
            }
            acc
        });

    let mut ranked: Vec<LanguageStat> = merged
        .into_values()
        .map(|mut stat| {
            stat.size = weights.score(stat.size, stat.count);
            stat
        })
        .collect();
    ranked.sort_by(|a, b| b.size.total_cmp(&a.size));

    debug!(
        "Aggregated {} languages from {} repositories ({} excluded names)",
        ranked.len(),
        repos.len(),
        excluded.len()
    );

    TopLangData::from_ranked(ranked)
}
