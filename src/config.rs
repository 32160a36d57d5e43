use chrono_tz::Tz;
use tracing::warn;

use crate::error::JournalError;
use crate::models::RecordKind;

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Kolkata;

#[derive(Debug, Clone)]
pub struct Config {
    // Display
    pub currency: String,
    pub timezone: Tz,

    // Calendar
    pub record_kind: RecordKind,
    /// Fixed seed for the mock generator; random each run when unset.
    pub seed: Option<u64>,

    // Routing
    pub login_path: String,
    pub onboarding_path: String,
    pub landing_path: String,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let timezone = parse_timezone(&env("JOURNAL_TIMEZONE", DEFAULT_TIMEZONE.name()))
            .unwrap_or_else(|e| {
                warn!("{}; falling back to {}", e, DEFAULT_TIMEZONE.name());
                DEFAULT_TIMEZONE
            });

        let record_kind = env("JOURNAL_RECORD_KIND", "futures")
            .parse()
            .unwrap_or_else(|e: JournalError| {
                warn!("{}; falling back to futures", e);
                RecordKind::Futures
            });

        Config {
            currency: env("JOURNAL_CURRENCY", "₹"),
            timezone,
            record_kind,
            seed: parse_seed(&env("JOURNAL_SEED", "")).unwrap_or_else(|e| {
                warn!("{}; generating unseeded data", e);
                None
            }),
            login_path: env("JOURNAL_LOGIN_PATH", "/auth"),
            onboarding_path: env("JOURNAL_ONBOARDING_PATH", "/onboarding"),
            landing_path: env("JOURNAL_LANDING_PATH", "/"),
            log_level: env("JOURNAL_LOG_LEVEL", "INFO"),
        }
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz, JournalError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| JournalError::UnknownTimezone(name.to_string()))
}

/// Blank means unseeded; anything else must be a `u64`.
pub fn parse_seed(raw: &str) -> Result<Option<u64>, JournalError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| JournalError::InvalidSeed(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::default_test_config;

    #[test]
    fn parses_iana_names() {
        assert_eq!(parse_timezone("Asia/Kolkata").unwrap(), chrono_tz::Asia::Kolkata);
        assert_eq!(parse_timezone(" UTC ").unwrap(), chrono_tz::UTC);
        assert_eq!(
            parse_timezone("Mars/Olympus"),
            Err(JournalError::UnknownTimezone("Mars/Olympus".to_string()))
        );
    }

    #[test]
    fn seed_is_optional_but_must_be_numeric() {
        assert_eq!(parse_seed(""), Ok(None));
        assert_eq!(parse_seed("  "), Ok(None));
        assert_eq!(parse_seed(" 42 "), Ok(Some(42)));
        assert_eq!(
            parse_seed("forty-two"),
            Err(JournalError::InvalidSeed("forty-two".to_string()))
        );
        assert_eq!(parse_seed("-1"), Err(JournalError::InvalidSeed("-1".to_string())));
        assert_eq!(default_test_config().seed, Some(42));
    }
}
