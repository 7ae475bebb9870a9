//! CLI command definitions and handlers

mod doctor;
mod fetch;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Largest number of languages `--langs-count` can ask for
const MAX_LANGS_COUNT: usize = 20;

/// Parse a scoring weight (finite, non-negative)
fn parse_weight(s: &str) -> Result<f64, String> {
    let w: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !w.is_finite() || w < 0.0 {
        Err("weight must be a non-negative number".to_string())
    } else {
        Ok(w)
    }
}

/// Parse a language count, clamped to 1-20
fn parse_langs_count(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    Ok(n.clamp(1, MAX_LANGS_COUNT))
}

/// toplangs - rank the languages a GitHub user writes
#[derive(Parser, Debug)]
#[command(name = "toplangs")]
#[command(
    version,
    about = "Rank the programming languages used across a GitHub user's repositories",
    long_about = "Collects every repository a GitHub user owns through the GraphQL API and \
merges their language breakdowns into one ranked list.\n\n\
Ranking score = total_bytes ^ size_weight × repo_count ^ count_weight\n\n\
Tokens are read from PAT_1, PAT_2, ... (rotated when one is rate limited) \
or from ~/.config/toplangs/config.toml.",
    after_help = "\
Examples:
  toplangs octocat                              Rank by total bytes
  toplangs octocat --count-weight 1             Favour languages used in many repos
  toplangs octocat --size-weight 0 --count-weight 1   Rank by repo count only
  toplangs octocat --exclude-repo dotfiles,site Leave repositories out
  toplangs octocat --hide html,css --langs-count 5    Top 5 without markup
  toplangs octocat --format json                JSON output for scripting
  toplangs config init                          Create a config file"
)]
pub struct Cli {
    /// GitHub username
    #[arg(value_name = "USERNAME")]
    pub username: Option<String>,

    /// Repositories to leave out (comma separated, adds to EXCLUDE_REPO)
    #[arg(long, value_delimiter = ',')]
    pub exclude_repo: Vec<String>,

    /// Exponent applied to total bytes
    #[arg(long, default_value = "1", value_parser = parse_weight)]
    pub size_weight: f64,

    /// Exponent applied to the number of repositories using a language
    #[arg(long, default_value = "0", value_parser = parse_weight)]
    pub count_weight: f64,

    /// Languages to hide from the output (comma separated, case-insensitive)
    #[arg(long, value_delimiter = ',')]
    pub hide: Vec<String>,

    /// Number of languages to show (1-20, default: all)
    #[arg(long, value_parser = parse_langs_count)]
    pub langs_count: Option<usize>,

    /// Output format: text, json
    #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Output file path (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the user config file (~/.config/toplangs/config.toml)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Check environment setup (tokens, config, exclusions)
    Doctor,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize config file with example settings
    Init,
    /// Show current config and paths
    Show,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Config { action }) => run_config_action(action),
        Some(Commands::Doctor) => doctor::run(),
        None => {
            let Some(username) = cli.username.as_deref() else {
                anyhow::bail!(
                    "A GitHub username is required. Run 'toplangs --help' for usage."
                );
            };
            fetch::run(fetch::FetchOptions {
                username,
                exclude_repo: &cli.exclude_repo,
                size_weight: cli.size_weight,
                count_weight: cli.count_weight,
                hide: &cli.hide,
                langs_count: cli.langs_count,
                format: cli.format.parse()?,
                output: cli.output.as_deref(),
            })
        }
    }
}

fn run_config_action(action: ConfigAction) -> Result<()> {
    use crate::config::UserConfig;
    match action {
        ConfigAction::Init => {
            let path = UserConfig::init_user_config()?;
            println!("✅ Config initialized at: {}", path.display());
            println!("\nEdit to add your GitHub tokens:");
            println!("  {}", path.display());
            println!("\nOr set via environment:");
            println!("  export PAT_1=\"ghp_...\"");
            Ok(())
        }
        ConfigAction::Show => show_config(),
    }
}

fn show_config() -> Result<()> {
    let config = crate::config::UserConfig::load()?;
    println!("📁 Config path:");
    if let Some(user_path) = crate::config::UserConfig::user_config_path() {
        let status = if user_path.exists() {
            "✓"
        } else {
            "(not found)"
        };
        println!("  User: {} {}", user_path.display(), status);
    }
    println!();
    println!("🔗 Endpoint: {}", config.api_url());
    println!("🔑 Tokens:   {}", config.tokens().len());
    if config.exclude_repo().is_empty() {
        println!("🚫 Excluded: none");
    } else {
        println!("🚫 Excluded: {}", config.exclude_repo().join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("0.5"), Ok(0.5));
        assert_eq!(parse_weight("0"), Ok(0.0));
        assert!(parse_weight("-1").is_err());
        assert!(parse_weight("inf").is_err());
        assert!(parse_weight("abc").is_err());
    }

    #[test]
    fn test_parse_langs_count_clamps() {
        assert_eq!(parse_langs_count("0"), Ok(1));
        assert_eq!(parse_langs_count("5"), Ok(5));
        assert_eq!(parse_langs_count("99"), Ok(20));
        assert!(parse_langs_count("five").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["toplangs", "octocat"]);
        assert_eq!(cli.username.as_deref(), Some("octocat"));
        assert_eq!(cli.size_weight, 1.0);
        assert_eq!(cli.count_weight, 0.0);
        assert!(cli.exclude_repo.is_empty());
        assert_eq!(cli.langs_count, None);
        assert_eq!(cli.format, "text");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_lists_split_on_commas() {
        let cli = Cli::parse_from([
            "toplangs",
            "octocat",
            "--exclude-repo",
            "a,b",
            "--hide",
            "HTML",
            "--count-weight",
            "1",
        ]);
        assert_eq!(cli.exclude_repo, vec!["a", "b"]);
        assert_eq!(cli.hide, vec!["HTML"]);
        assert_eq!(cli.count_weight, 1.0);
    }

    #[test]
    fn test_cli_config_subcommand() {
        let cli = Cli::parse_from(["toplangs", "config", "show"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Show
            })
        ));
    }

    #[test]
    fn test_cli_rejects_negative_weight() {
        assert!(Cli::try_parse_from(["toplangs", "octocat", "--size-weight", "-2"]).is_err());
    }

    #[test]
    fn test_missing_username_is_error() {
        let cli = Cli::parse_from(["toplangs"]);
        assert!(run(cli).is_err());
    }
}
