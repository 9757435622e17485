use chrono::Utc;
use std::{
    env,
    path::PathBuf,
    str::FromStr
};
use url::Url;

use crate::error::ConfigError;

const ENV_FILE: &str = "dailyarxiv.env";
const DEFAULT_CATEGORY: &str = "cs.CV";
const DEFAULT_BASE_URL: &str = "https://arxiv.org";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Markdown
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Markdown => "md"
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(ConfigError::UnknownFormat(other.to_string()))
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub categories: Vec<String>,
    pub base_url: Url,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub user_agent: Option<String>,
}

impl Config {
    pub fn new(categories: Vec<String>, base_url: Url, output: PathBuf, format: OutputFormat) -> Self {
        Config {
            categories,
            base_url,
            output,
            format,
            user_agent: None
        }
    }

    /// Reads `dailyarxiv.env` when present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env_file(ENV_FILE)?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let categories = parse_categories(&lookup("CATEGORIES").unwrap_or_default());

        let raw_url = lookup("ARXIV_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_url)
            .map_err(|source| ConfigError::InvalidBaseUrl { url: raw_url.clone(), source })?;

        let format = match lookup("OUTPUT_FORMAT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default()
        };
        let output = lookup("OUTPUT")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| default_output(format));

        let mut config = Self::new(categories, base_url, output, format);
        config.user_agent = lookup("USER_AGENT").filter(|ua| !ua.trim().is_empty());
        Ok(config)
    }
}

impl Default for Config {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        let format = OutputFormat::default();
        Config {
            categories: vec![String::from(DEFAULT_CATEGORY)],
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            output: default_output(format),
            format,
            user_agent: None
        }
    }
}

// A missing env file is fine, the variables may come from the shell.
fn load_env_file(path: &str) -> Result<(), ConfigError> {
    match dotenvy::from_filename(path) {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(source) => Err(ConfigError::EnvFile { path: path.to_string(), source })
    }
}

// Comma separated, e.g. "math.QA, math.RT". Falls back to a single category.
pub fn parse_categories(raw: &str) -> Vec<String> {
    let categories = raw.split(',')
        .map(str::trim)
        .filter(|cat| !cat.is_empty())
        .map(String::from)
        .collect::<Vec<_>>();
    if categories.is_empty() {
        vec![String::from(DEFAULT_CATEGORY)]
    } else {
        categories
    }
}

fn default_output(format: OutputFormat) -> PathBuf {
    let key = Utc::now().format("%y%m%d").to_string();
    PathBuf::from(format!("arxiv_{}.{}", key, format.extension()))
}
