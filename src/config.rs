//! Runtime configuration, read from `.env` and the process environment.
//!
//! A variable already set in the environment wins over the same key in
//! `.env`.

use log::{debug, warn};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://vehicle-rc-information-v2.p.rapidapi.com/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REPORTS_DIR: &str = "reports";

#[derive(Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub endpoint: Url,
    pub timeout: Duration,
    pub reports_dir: PathBuf,
    /// Skip the live lookup and go straight to demo data.
    pub offline: bool,
}

impl Config {
    pub fn load(dotenv: &Path) -> Result<Config, failure::Error> {
        let file_vars = match fs::read_to_string(dotenv) {
            Ok(contents) => parse_dotenv(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No {} file found", dotenv.display());
                HashMap::new()
            }
            Err(e) => return Err(format_err!("Unable to read {}: {}", dotenv.display(), e)),
        };
        Config::from_vars(|key| env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    pub fn from_vars<F>(var: F) -> Result<Config, failure::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = var("RAPIDAPI_KEY").filter(|k| !k.trim().is_empty());
        let endpoint_str =
            var("VEHICLE_INFO_API_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&endpoint_str)
            .map_err(|e| format_err!("Invalid VEHICLE_INFO_API_URL '{}': {}", endpoint_str, e))?;
        let timeout_secs = match var("VEHICLE_INFO_TIMEOUT_SECS") {
            Some(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|_| format_err!("Invalid VEHICLE_INFO_TIMEOUT_SECS '{}'", s))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let reports_dir = var("VEHICLE_INFO_REPORTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORTS_DIR));
        Ok(Config {
            api_key,
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
            reports_dir,
            offline: false,
        })
    }
}

/// Parses `KEY=VALUE` lines. Blank lines and `#` comments are skipped, as is
/// an `export ` prefix; one layer of matching quotes is stripped from values.
pub fn parse_dotenv(contents: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    for (n, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = match line.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => (key.trim(), value.trim()),
            _ => {
                warn!("Ignoring malformed .env line {}", n + 1);
                continue;
            }
        };
        vars.insert(key.to_string(), unquote(value).to_string());
    }
    vars
}

fn unquote(value: &str) -> &str {
    for quote in &['"', '\''] {
        if value.len() >= 2 && value.starts_with(*quote) && value.ends_with(*quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
