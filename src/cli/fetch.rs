//! Default command - fetch, rank and print a user's languages

use crate::aggregate::Weights;
use crate::config::UserConfig;
use crate::reporters::{self, OutputFormat};
use crate::TopLangs;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

pub struct FetchOptions<'a> {
    pub username: &'a str,
    pub exclude_repo: &'a [String],
    pub size_weight: f64,
    pub count_weight: f64,
    pub hide: &'a [String],
    pub langs_count: Option<usize>,
    pub format: OutputFormat,
    pub output: Option<&'a Path>,
}

pub fn run(opts: FetchOptions<'_>) -> Result<()> {
    crate::collector::validate_username(opts.username)?;
    let weights = Weights::new(opts.size_weight, opts.count_weight)?;

    let config = UserConfig::load()?;
    if !config.has_tokens() {
        anyhow::bail!(
            "No GitHub token configured. Set PAT_1 or run 'toplangs config init'."
        );
    }
    debug!(
        "Using {} token(s), {} configured exclusions",
        config.tokens().len(),
        config.exclude_repo().len()
    );

    let top = TopLangs::from_config(&config)
        .fetch(opts.username, opts.exclude_repo, weights)
        .with_context(|| format!("Failed to fetch languages for {}", opts.username.trim()))?;

    let mut top = top.without(opts.hide);
    if let Some(n) = opts.langs_count {
        top = top.truncate(n);
    }

    let rendered = reporters::report(opts.username.trim(), &top, opts.format)?;
    match opts.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
