//! JSON reporter
//!
//! Outputs the ranked language map as pretty-printed JSON. Object keys keep
//! rank order, so `jq 'keys_unsorted[0]'` is the top language.

use crate::models::TopLangData;
use anyhow::Result;

pub fn render(data: &TopLangData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
