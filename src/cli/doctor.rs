//! Doctor command - check environment

use crate::config::UserConfig;
use anyhow::Result;
use console::style;

pub fn run() -> Result<()> {
    println!("🩺 toplangs Doctor\n");

    let ok = style("✓").green();
    let bad = style("✗").red();

    let config = match UserConfig::load() {
        Ok(config) => {
            println!("{} Config: OK", ok);
            config
        }
        Err(e) => {
            println!("{} Config: {}", bad, e);
            UserConfig::default()
        }
    };

    let tokens = config.tokens().len();
    if tokens > 0 {
        println!(
            "{} GitHub tokens: {} (rotated when rate limited)",
            ok, tokens
        );
    } else {
        println!("{} GitHub tokens: none configured", bad);
        println!("  Set PAT_1 (and optionally PAT_2, PAT_3, ...) or add tokens to the config file");
    }

    println!("{} Endpoint: {}", ok, config.api_url());

    if config.exclude_repo().is_empty() {
        println!("○ Excluded repositories: none");
    } else {
        println!(
            "○ Excluded repositories: {}",
            config.exclude_repo().join(", ")
        );
    }

    if tokens == 0 {
        anyhow::bail!("No GitHub token configured");
    }
    println!("\n✅ All checks passed!");
    Ok(())
}
