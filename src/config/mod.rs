//! Configuration module for toplangs
//!
//! This module handles:
//! - GitHub tokens (PAT_1, PAT_2, ... or config file)
//! - The process-wide repository exclusion list
//! - Endpoint and timeout settings

mod user_config;

pub use user_config::{parse_list, GithubConfig, UserConfig};
