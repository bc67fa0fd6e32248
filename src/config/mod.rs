#[cfg(feature = "cli")]
pub mod cli;

use crate::adapters::akashi::DEFAULT_AKASHI_URL;
use crate::adapters::rollbar::{LogOnlyReporter, RollbarReporter};
use crate::domain::ports::FaultReporter;
use crate::utils::error::{AkapunError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_url, Validate,
};
use std::env;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_ROLLBAR_ENVIRONMENT: &str = "production";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Startup configuration, read once and shared read-only afterwards.
#[derive(Clone)]
pub struct AkapunConfig {
    pub akashi_base_url: String,
    pub corp_id: String,
    pub akashi_token: String,
    pub rollbar_token: Option<String>,
    pub rollbar_environment: String,
    pub request_timeout_secs: u64,
}

// 不輸出憑證
impl std::fmt::Debug for AkapunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AkapunConfig")
            .field("akashi_base_url", &self.akashi_base_url)
            .field("corp_id", &self.corp_id)
            .field("akashi_token", &"***")
            .field("rollbar_token", &self.rollbar_token.as_ref().map(|_| "***"))
            .field("rollbar_environment", &self.rollbar_environment)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl AkapunConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let request_timeout_secs = match lookup("AKAPUN_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| AkapunError::InvalidConfigValueError {
                    field: "AKAPUN_REQUEST_TIMEOUT_SECS".to_string(),
                    value: raw.clone(),
                    reason: "Value must be a whole number of seconds".to_string(),
                })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            akashi_base_url: lookup("AKASHI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_AKASHI_URL.to_string()),
            corp_id: validate_required_field("AKASHI_CORP_ID", lookup("AKASHI_CORP_ID"))?,
            akashi_token: validate_required_field("AKASHI_TOKEN", lookup("AKASHI_TOKEN"))?,
            rollbar_token: lookup("ROLLBAR_TOKEN").filter(|token| !token.trim().is_empty()),
            rollbar_environment: lookup("ROLLBAR_ENVIRONMENT")
                .unwrap_or_else(|| DEFAULT_ROLLBAR_ENVIRONMENT.to_string()),
            request_timeout_secs,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Rollbar when a token is configured, otherwise faults are only logged.
    pub fn fault_reporter(&self) -> Arc<dyn FaultReporter> {
        match &self.rollbar_token {
            Some(token) => Arc::new(RollbarReporter::new(
                token.clone(),
                self.rollbar_environment.clone(),
            )),
            None => {
                tracing::warn!("ROLLBAR_TOKEN is not set, faults will only be logged");
                Arc::new(LogOnlyReporter)
            }
        }
    }
}

impl Validate for AkapunConfig {
    fn validate(&self) -> Result<()> {
        validate_url("akashi_base_url", &self.akashi_base_url)?;
        validate_non_empty_string("corp_id", &self.corp_id)?;
        validate_non_empty_string("akashi_token", &self.akashi_token)?;
        validate_non_empty_string("rollbar_environment", &self.rollbar_environment)?;
        validate_range("request_timeout_secs", self.request_timeout_secs, 1, 300)?;

        tracing::info!("✅ Configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            AkapunConfig::from_lookup(lookup_from(&[("AKASHI_CORP_ID", "corp-id"), ("AKASHI_TOKEN", "foo")]))
                .unwrap();

        assert_eq!(config.akashi_base_url, "https://atnd.ak4.jp/api/cooperation");
        assert_eq!(config.corp_id, "corp-id");
        assert_eq!(config.akashi_token, "foo");
        assert!(config.rollbar_token.is_none());
        assert_eq!(config.rollbar_environment, "production");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_corp_id() {
        let err = AkapunConfig::from_lookup(lookup_from(&[("AKASHI_TOKEN", "foo")])).unwrap_err();
        assert!(matches!(err, AkapunError::MissingConfigError { field } if field == "AKASHI_CORP_ID"));
    }

    #[test]
    fn test_overrides_and_blank_rollbar_token() {
        let config = AkapunConfig::from_lookup(lookup_from(&[
            ("AKASHI_CORP_ID", "corp-id"),
            ("AKASHI_TOKEN", "foo"),
            ("AKASHI_BASE_URL", "http://localhost:8080"),
            ("ROLLBAR_TOKEN", "  "),
            ("ROLLBAR_ENVIRONMENT", "staging"),
            ("AKAPUN_REQUEST_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.akashi_base_url, "http://localhost:8080");
        assert!(config.rollbar_token.is_none());
        assert_eq!(config.rollbar_environment, "staging");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_invalid_timeout() {
        let err = AkapunConfig::from_lookup(lookup_from(&[
            ("AKASHI_CORP_ID", "corp-id"),
            ("AKASHI_TOKEN", "foo"),
            ("AKAPUN_REQUEST_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AkapunError::InvalidConfigValueError { .. }));

        let config = AkapunConfig::from_lookup(lookup_from(&[
            ("AKASHI_CORP_ID", "corp-id"),
            ("AKASHI_TOKEN", "foo"),
            ("AKAPUN_REQUEST_TIMEOUT_SECS", "0"),
        ]))
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_token_and_bad_url() {
        let config = AkapunConfig::from_lookup(lookup_from(&[
            ("AKASHI_CORP_ID", "corp-id"),
            ("AKASHI_TOKEN", ""),
        ]))
        .unwrap();
        assert!(config.validate().is_err());

        let config = AkapunConfig::from_lookup(lookup_from(&[
            ("AKASHI_CORP_ID", "corp-id"),
            ("AKASHI_TOKEN", "foo"),
            ("AKASHI_BASE_URL", "atnd.ak4.jp"),
        ]))
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_tokens() {
        let config = AkapunConfig::from_lookup(lookup_from(&[
            ("AKASHI_CORP_ID", "corp-id"),
            ("AKASHI_TOKEN", "secret-token"),
            ("ROLLBAR_TOKEN", "secret-rollbar"),
        ]))
        .unwrap();

        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-token"));
        assert!(!debug.contains("secret-rollbar"));
    }
}
