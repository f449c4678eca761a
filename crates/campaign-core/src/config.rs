//! # Client configuration
//!
//! Read once at startup from an inline JSON block in the host page:
//!
//! ```html
//! <script id="campaign-config" type="application/json">
//!   { "api_base": "https://api.example.com", "log_level": "debug" }
//! </script>
//! ```
//!
//! Every field has a default, so a missing block or an empty object gives
//! the stock behaviour: same-origin API, 5 s notifications on auth pages,
//! 3 s on the dashboard.

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for API paths. Empty means same origin.
    pub api_base: String,
    /// Notification lifetime on the auth pages.
    pub auth_notice_ms: u32,
    /// Notification lifetime on the dashboard.
    pub dashboard_notice_ms: u32,
    pub delays: FollowUpDelays,
    /// `log` level filter name (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            auth_notice_ms: 5000,
            dashboard_notice_ms: 3000,
            delays: FollowUpDelays::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Pause between a successful auth action and the redirect or form switch
/// that follows it, so the success message can be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowUpDelays {
    pub login_redirect_ms: u32,
    pub register_ms: u32,
    pub forgot_ms: u32,
    pub reset_ms: u32,
}

impl Default for FollowUpDelays {
    fn default() -> Self {
        Self {
            login_redirect_ms: 1000,
            register_ms: 1500,
            forgot_ms: 2000,
            reset_ms: 1500,
        }
    }
}

impl ClientConfig {
    /// Element id of the inline configuration block.
    pub fn element_id() -> &'static str {
        "campaign-config"
    }

    /// Parse from JSON. Unknown fields are ignored.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Absolute URL (or same-origin path) for an API path like `/api/campaigns`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(ClientConfig::from_json("{}").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = ClientConfig::from_json(
            r#"{"api_base": "https://api.example.com/", "delays": {"forgot_ms": 10}}"#,
        )
        .unwrap();
        assert_eq!(config.delays.forgot_ms, 10);
        assert_eq!(config.delays.login_redirect_ms, 1000);
        assert_eq!(config.dashboard_notice_ms, 3000);
        assert_eq!(config.endpoint("/api/campaigns"), "https://api.example.com/api/campaigns");
    }

    #[test]
    fn test_same_origin_endpoint() {
        assert_eq!(ClientConfig::default().endpoint("/api/auth/me"), "/api/auth/me");
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(ClientConfig::from_json("{not json").is_err());
    }
}
