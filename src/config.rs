use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub enum SimpleOutputFormat {
    #[serde(rename = "text_print")]
    TextPrint,
    #[serde(rename = "json_print")]
    JsonPrint,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OutputFormat {
    Simple(SimpleOutputFormat),
    HtmlFile { html_output: PathBuf },
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Simple(SimpleOutputFormat::TextPrint)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub api_base_url: String,
    pub user_id: i64,
    #[serde(default)]
    pub habit_name: Option<String>,
    #[serde(default)]
    pub resolution_date: Option<NaiveDate>,
    #[serde(default)]
    pub output_format: OutputFormat,
}

pub fn load_config(path: &Path) -> Result<Config> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading config from {path:?}"))?;
    serde_json::from_str(&contents).with_context(|| "parsing config JSON")
}
