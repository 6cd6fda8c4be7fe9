use dashboard_core::DataError;

/// Tunables for the fetch-or-fallback pipeline. All of these can come from
/// the environment; defaults match the observed dashboard behavior.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Freshness window before a cached result is considered stale.
    pub cache_ttl_secs: i64,
    /// Live attempts before degrading to demo data. Zero is allowed and
    /// means "demo mode": every fetch goes straight to the generator.
    pub max_retries: u32,
    /// Scaling factor for the inter-retry delay (`base * 2^attempt`).
    pub backoff_base_secs: f64,
    /// History window requested from the provider, in calendar days.
    pub lookback_days: i64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 300,
            max_retries: 3,
            backoff_base_secs: 2.0,
            lookback_days: 180,
        }
    }
}

impl FetchConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl_secs: env_parse("CACHE_TTL_SECS", defaults.cache_ttl_secs),
            max_retries: env_parse("MAX_RETRIES", defaults.max_retries),
            backoff_base_secs: env_parse("BACKOFF_BASE_SECS", defaults.backoff_base_secs),
            lookback_days: env_parse("LOOKBACK_DAYS", defaults.lookback_days),
        }
    }

    pub fn validate(&self) -> Result<(), DataError> {
        if self.cache_ttl_secs < 0 {
            return Err(DataError::InvalidConfig(format!(
                "cache_ttl_secs must be non-negative, got {}",
                self.cache_ttl_secs
            )));
        }
        if !self.backoff_base_secs.is_finite() || self.backoff_base_secs < 0.0 {
            return Err(DataError::InvalidConfig(format!(
                "backoff_base_secs must be a non-negative number, got {}",
                self.backoff_base_secs
            )));
        }
        if self.lookback_days < 1 {
            return Err(DataError::InvalidConfig(format!(
                "lookback_days must be at least 1, got {}",
                self.lookback_days
            )));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(FetchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_ttl() {
        let config = FetchConfig {
            cache_ttl_secs: -1,
            ..FetchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DataError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_bad_backoff_and_lookback() {
        let config = FetchConfig {
            backoff_base_secs: f64::NAN,
            ..FetchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = FetchConfig {
            lookback_days: 0,
            ..FetchConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
