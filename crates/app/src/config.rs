//! Dashboard configuration — JSON document with per-field defaults.
//!
//! The host page may embed a JSON object (see the dashboard adapter for where
//! it is read from). Every field has a sensible default so the document is
//! optional, and any subset of fields may be given.

use serde::Deserialize;
use watchdog_domain::chart::ChartConfig;
use watchdog_domain::message;
use watchdog_domain::sample::DEFAULT_CAPACITY;
use watchdog_domain::simulator;
use watchdog_domain::submit;

use crate::services::live_session::LiveSettings;

/// Top-level configuration.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Backend endpoint settings.
    pub api: ApiConfig,
    /// Live chart settings.
    pub live: LiveConfig,
    /// Message feed settings.
    pub messages: MessagesConfig,
    /// Transient button label timings.
    pub feedback: FeedbackConfig,
    /// Information about the device host serving the page.
    pub host: HostConfig,
}

/// Backend endpoint configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix prepended to `/api/...` paths; empty means same origin.
    pub base_url: String,
}

/// Live view configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LiveConfig {
    pub y_min: f64,
    pub y_max: f64,
    /// Rolling buffer capacity per chart.
    pub max_points: usize,
    /// Samples pushed when a chart's loop starts.
    pub warmup_samples: usize,
    /// Milliseconds between simulated samples.
    pub tick_ms: u32,
}

/// Message feed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    /// Milliseconds between polls.
    pub poll_ms: u32,
}

/// Transient label configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Milliseconds the config button shows "Sent"/"Error" before reverting.
    pub config_revert_ms: u32,
    /// Milliseconds the message button shows "Sent"/"Error" before reverting.
    pub message_revert_ms: u32,
}

/// Device host information.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// LAN address of the host, shown in the footer when present.
    pub address: Option<String>,
}

impl DashboardConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Validation`] for values the dashboard cannot run with.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check semantic constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] describing the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chart_config()
            .validate()
            .map_err(|err| ConfigError::Validation(err.to_string()))?;
        if self.live.tick_ms == 0 {
            return Err(ConfigError::Validation("live.tick_ms must be non-zero".to_string()));
        }
        if self.messages.poll_ms == 0 {
            return Err(ConfigError::Validation(
                "messages.poll_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Chart range and history length for live charts.
    #[must_use]
    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            y_min: self.live.y_min,
            y_max: self.live.y_max,
            max_points: self.live.max_points,
        }
    }

    /// Timing of the live session's update loops.
    #[must_use]
    pub fn live_settings(&self) -> LiveSettings {
        LiveSettings {
            warmup_samples: self.live.warmup_samples,
            tick_ms: self.live.tick_ms,
        }
    }
}

impl ApiConfig {
    /// Full URL of an API path such as `/api/devices`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            y_min: 0.0,
            y_max: 2000.0,
            max_points: DEFAULT_CAPACITY,
            warmup_samples: simulator::WARMUP_SAMPLES,
            tick_ms: simulator::TICK_MS,
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            poll_ms: message::POLL_MS,
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            config_revert_ms: submit::REVERT_MS,
            message_revert_ms: submit::REVERT_MS,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse dashboard configuration")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.chart_config(), ChartConfig::default());
        assert_eq!(config.live_settings(), LiveSettings::default());
        assert_eq!(config.messages.poll_ms, 2000);
        assert_eq!(config.feedback.config_revert_ms, 1200);
        assert!(config.host.address.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_empty_object() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn should_parse_partial_document_with_defaults() {
        let config = DashboardConfig::from_json(
            r#"{ "live": { "y_max": 3600 }, "host": { "address": "192.168.1.20" } }"#,
        )
        .unwrap();
        assert_eq!(config.live.y_max, 3600.0);
        assert_eq!(config.live.max_points, DEFAULT_CAPACITY);
        assert_eq!(config.host.address.as_deref(), Some("192.168.1.20"));
    }

    #[test]
    fn should_reject_empty_chart_range() {
        let result = DashboardConfig::from_json(r#"{ "live": { "y_min": 10, "y_max": 10 } }"#);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_zero_periods() {
        let mut config = DashboardConfig::default();
        config.live.tick_ms = 0;
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.messages.poll_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_report_parse_error_for_invalid_json() {
        assert!(matches!(
            DashboardConfig::from_json("invalid {{{"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn should_join_base_url_and_path() {
        let mut config = DashboardConfig::default();
        assert_eq!(config.api.url("/api/devices"), "/api/devices");
        config.api.base_url = "http://192.168.1.20:8000/".to_string();
        assert_eq!(config.api.url("/api/devices"), "http://192.168.1.20:8000/api/devices");
    }
}
