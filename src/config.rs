// src/config.rs
use chrono::{FixedOffset, Offset, Utc};
use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::StepPolicy;

/// Moscow time, where the marketplace's auctions are scheduled.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 180;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("UTC offset out of range: {0} minutes")]
    OffsetOutOfRange(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Offset used when printing absolute dates and times.
    pub utc_offset: FixedOffset,
    pub step_policy: StepPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: "127.0.0.1".to_string(),
            port: 8080,
            utc_offset: moscow_offset(),
            step_policy: StepPolicy::Unchecked,
        }
    }
}

fn moscow_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60).unwrap_or_else(|| Utc.fix())
}

impl Settings {
    /// Reads `ETP_*` variables, after loading a `.env` file if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Settings::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let host = lookup("ETP_HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "ETP_PORT")?.unwrap_or(defaults.port);
        let utc_offset = match parse_var::<i32, _>(&lookup, "ETP_UTC_OFFSET_MINUTES")? {
            Some(minutes) => minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .ok_or(ConfigError::OffsetOutOfRange(minutes))?,
            None => defaults.utc_offset,
        };
        let step_policy = parse_var(&lookup, "ETP_ENFORCE_BID_STEP")?.unwrap_or(defaults.step_policy);

        Ok(Settings {
            host,
            port,
            utc_offset,
            step_policy,
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}
