use anyhow::{Context, Result, bail};
use bankofx_core::ColumnMapping;
use bankofx_core::time::{DEFAULT_TZ_LABEL, now_in_zone};
use bankofx_ingest::NormalizerOptions;
use bankofx_ofx::StatementContext;
use bankofx_ofx::render::DEFAULT_BANK_ID;
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable that replaces the configured account number.
pub const ACCOUNT_ENV: &str = "ACCOUNT_NUMBER_OVERRIDE";

pub const DEFAULT_ACCOUNT_ID: &str = "123456789";

/// On-disk TOML config. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub account_id: String,
    pub bank_id: String,
    /// Literal offset label for timestamps, e.g. "-6"
    pub tz_label: String,
    /// IANA zone; when set it wins over `tz_label`
    pub timezone: Option<String>,
    /// CSV quote character
    pub quote: String,
    pub columns: ColumnMapping,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account_id: DEFAULT_ACCOUNT_ID.to_string(),
            bank_id: DEFAULT_BANK_ID.to_string(),
            tz_label: DEFAULT_TZ_LABEL.to_string(),
            timezone: None,
            quote: "|".to_string(),
            columns: ColumnMapping::default(),
        }
    }
}

/// Run settings, resolved once at start-up and never mutated.
#[derive(Debug, Clone)]
pub struct Settings {
    pub account_id: String,
    pub bank_id: String,
    pub generated_at: NaiveDateTime,
    pub tz_label: String,
    pub normalizer: NormalizerOptions,
}

impl Settings {
    pub fn statement_context(&self) -> StatementContext {
        StatementContext {
            account_id: self.account_id.clone(),
            bank_id: self.bank_id.clone(),
            generated_at: self.generated_at,
            tz_label: self.tz_label.clone(),
        }
    }
}

/// Load `path` if given, otherwise the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(p) = path else {
        return Ok(Config::default());
    };
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

impl Config {
    /// Apply the account override (empty counts as unset), validate, and
    /// capture "now".
    pub fn resolve(self, account_override: Option<String>) -> Result<Settings> {
        let quote = match self.quote.as_bytes() {
            [q] if q.is_ascii() => *q,
            _ => bail!("quote must be a single ASCII character, got {:?}", self.quote),
        };

        let (generated_at, tz_label) = match &self.timezone {
            Some(tz) => now_in_zone(tz)?,
            None => (Local::now().naive_local(), self.tz_label),
        };

        let account_id = account_override
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(self.account_id);

        Ok(Settings {
            account_id,
            bank_id: self.bank_id,
            generated_at,
            tz_label,
            normalizer: NormalizerOptions {
                columns: self.columns,
                quote,
            },
        })
    }
}
