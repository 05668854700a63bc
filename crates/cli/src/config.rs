//! Environment-driven configuration for the demo binary.

use std::ops::RangeInclusive;

use thiserror::Error;
use worklog_observability::{LogFormat, ParseLogFormatError};
use worklog_timekeeping::Workday;

pub const STANDARD_HOURS_VAR: &str = "WORKLOG_STANDARD_HOURS";
pub const REVENUE_MONTH_VAR: &str = "WORKLOG_REVENUE_MONTH";
pub const LOG_FORMAT_VAR: &str = "WORKLOG_LOG_FORMAT";

const DEFAULT_REVENUE_MONTH: i32 = 9;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an integer (got `{value}`)")]
    NotAnInteger { var: &'static str, value: String },

    #[error("{var} must be within {min}..={max} (got {value})")]
    OutOfRange {
        var: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("{var}: {source}")]
    LogFormat {
        var: &'static str,
        source: ParseLogFormatError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Length of a standard working day, used for overtime.
    pub standard_hours: i32,
    /// Month number the revenue report is computed for.
    pub revenue_month: i32,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            standard_hours: Workday::DEFAULT_WORKING_HOURS,
            revenue_month: DEFAULT_REVENUE_MONTH,
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let standard_hours = match lookup(STANDARD_HOURS_VAR) {
            Some(raw) => parse_bounded(STANDARD_HOURS_VAR, &raw, 0..=24)?,
            None => defaults.standard_hours,
        };
        let revenue_month = match lookup(REVENUE_MONTH_VAR) {
            Some(raw) => parse_bounded(REVENUE_MONTH_VAR, &raw, 1..=12)?,
            None => defaults.revenue_month,
        };
        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse::<LogFormat>().map_err(|source| ConfigError::LogFormat {
                var: LOG_FORMAT_VAR,
                source,
            })?,
            None => defaults.log_format,
        };

        Ok(Self {
            standard_hours,
            revenue_month,
            log_format,
        })
    }
}

fn parse_bounded(
    var: &'static str,
    raw: &str,
    bounds: RangeInclusive<i32>,
) -> Result<i32, ConfigError> {
    let value: i32 = raw.trim().parse().map_err(|_| ConfigError::NotAnInteger {
        var,
        value: raw.to_string(),
    })?;
    if !bounds.contains(&value) {
        return Err(ConfigError::OutOfRange {
            var,
            value,
            min: *bounds.start(),
            max: *bounds.end(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.standard_hours, 8);
        assert_eq!(config.revenue_month, 9);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            (STANDARD_HOURS_VAR, "7"),
            (REVENUE_MONTH_VAR, " 8 "),
            (LOG_FORMAT_VAR, "pretty"),
        ])
        .unwrap();
        assert_eq!(config.standard_hours, 7);
        assert_eq!(config.revenue_month, 8);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_non_integer_hours() {
        let err = config_from(&[(STANDARD_HOURS_VAR, "eight")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "WORKLOG_STANDARD_HOURS must be an integer (got `eight`)"
        );
    }

    #[test]
    fn rejects_month_out_of_range() {
        let err = config_from(&[(REVENUE_MONTH_VAR, "13")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::OutOfRange {
                var: REVENUE_MONTH_VAR,
                value: 13,
                min: 1,
                max: 12,
            }
        );
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = config_from(&[(LOG_FORMAT_VAR, "xml")]).unwrap_err();
        assert!(matches!(err, ConfigError::LogFormat { .. }));
    }
}
