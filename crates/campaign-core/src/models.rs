//! Client Models
//!
//! Data structures matching backend JSON payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Logged-in user as returned by `GET /api/auth/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

/// Campaign lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 3] = [
        CampaignStatus::Active,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Completed => "Completed",
        }
    }

    /// CSS class for the status badge, e.g. `status-active`
    pub fn badge_class(self) -> &'static str {
        match self {
            CampaignStatus::Active => "status-active",
            CampaignStatus::Paused => "status-paused",
            CampaignStatus::Completed => "status-completed",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CampaignStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown campaign status: {s}"))
    }
}

/// Campaign record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub client: String,
    pub start_date: String,
    pub status: CampaignStatus,
    pub created_at: String,
}

/// Body of `POST /api/campaigns`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCampaign {
    pub name: String,
    pub client: String,
    pub start_date: String,
    pub status: CampaignStatus,
}

/// Aggregate counts from `GET /api/dashboard`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_campaigns: usize,
    pub active_campaigns: usize,
    pub paused_campaigns: usize,
    pub completed_campaigns: usize,
}

// ========================
// Auth Payloads
// ========================

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ForgotPasswordRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResetPasswordRequest<'a> {
    pub token: &'a str,
    pub new_password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdate {
    pub status: CampaignStatus,
}

/// Login response. The server sends `{message, user}`; both are optional so
/// that any 2xx JSON object counts as success.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForgotPasswordResponse {
    pub reset_token: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{message}` acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_from_server_json() {
        let json = r#"{
            "id": "c1",
            "name": "Spring Launch",
            "client": "Acme",
            "start_date": "2024-03-01",
            "status": "Paused",
            "created_at": "2024-02-20T10:15:00.123456",
            "user_id": "u1"
        }"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.status, CampaignStatus::Paused);
        assert_eq!(campaign.client, "Acme");
    }

    #[test]
    fn test_status_parse_and_badge() {
        assert_eq!("Completed".parse::<CampaignStatus>(), Ok(CampaignStatus::Completed));
        assert!("completed".parse::<CampaignStatus>().is_err());
        assert_eq!(CampaignStatus::Active.badge_class(), "status-active");
    }

    #[test]
    fn test_request_bodies_use_server_field_names() {
        let body = serde_json::to_value(ResetPasswordRequest { token: "abc", new_password: "secret1" }).unwrap();
        assert_eq!(body, serde_json::json!({"token": "abc", "new_password": "secret1"}));

        let body = serde_json::to_value(StatusUpdate { status: CampaignStatus::Active }).unwrap();
        assert_eq!(body, serde_json::json!({"status": "Active"}));
    }
}
