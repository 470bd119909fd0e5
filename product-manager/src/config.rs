use anyhow::Context;
use chrono_tz::Tz;

use crate::locale::Locale;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Zone in which "today" is evaluated for intake dates.
    pub timezone: Tz,
    pub locale: Locale,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn load() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timezone = lookup("PRODUCT_TIMEZONE").unwrap_or_else(|| "Asia/Ho_Chi_Minh".into());
        let timezone: Tz = timezone.parse().map_err(|e| {
            anyhow::anyhow!("PRODUCT_TIMEZONE must be an IANA time zone name: {}", e)
        })?;

        let locale: Locale = lookup("PRODUCT_LOCALE")
            .unwrap_or_else(|| "vi".into())
            .parse()
            .context("PRODUCT_LOCALE must be vi or en")?;

        let log_format = match lookup("LOG_FORMAT").as_deref().unwrap_or("text") {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => anyhow::bail!("LOG_FORMAT must be text or json, got {}", other),
        };

        Ok(Self {
            timezone,
            locale,
            log_format,
        })
    }
}
