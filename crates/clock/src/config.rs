//! Clock configuration

use std::env;

/// Default IANA zone used when none is configured
pub const DEFAULT_TIMEZONE: &str = "Europe/Istanbul";

/// Clock configuration
///
/// The zone only affects how timestamps are rendered and where calendar-day
/// boundaries fall (`advance(day, …)`, next-midnight countdowns); all other
/// arithmetic is epoch-millisecond based.
#[derive(Debug, Clone)]
pub struct ClockConfig {
    /// IANA timezone name, e.g. "Europe/Istanbul"
    pub timezone: String,
}

impl ClockConfig {
    pub fn new(timezone: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
        }
    }

    /// Read the configuration from the environment (`TIMEZONE`)
    pub fn from_env() -> Self {
        Self {
            timezone: env::var("TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string()),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_zone() {
        assert_eq!(ClockConfig::default().timezone, "Europe/Istanbul");
    }
}
