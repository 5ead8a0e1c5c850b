use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{Context, anyhow};
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::shared::core::event_calendar::EventCalendar;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub calendar: EventCalendar,
    pub seed_path: PathBuf,
    pub telegram_bot_token: Option<String>,
    pub telegram_api_base: String,
    pub notify_timeout: Duration,
    pub workshop_limit: usize,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let offset_hours: i32 = try_load("EVENT_UTC_OFFSET_HOURS", "3")?;
        let mut calendar = EventCalendar::from_utc_offset_hours(offset_hours)
            .ok_or_else(|| anyhow!("EVENT_UTC_OFFSET_HOURS out of range: {offset_hours}"))?;
        if let Some(day) = optional("EVENT_DATE") {
            let day = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
                .with_context(|| format!("Invalid EVENT_DATE value: {day}"))?;
            calendar = calendar.pinned_to(day);
        }

        Ok(Self {
            host: try_load("APP_HOST", "0.0.0.0")?,
            port: try_load("APP_PORT", "8080")?,
            calendar,
            seed_path: try_load("DIRECTORY_SEED_PATH", "./seed/directory.json")?,
            telegram_bot_token: optional("TELEGRAM_BOT_TOKEN"),
            telegram_api_base: try_load("TELEGRAM_API_BASE", "https://api.telegram.org")?,
            notify_timeout: Duration::from_millis(try_load("NOTIFY_TIMEOUT_MS", "5000")?),
            workshop_limit: try_load("WORKSHOP_MAX_REGISTRATIONS", "1")?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = optional(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow!("Environment misconfigured: {key}={raw}: {e}")
    })
}
