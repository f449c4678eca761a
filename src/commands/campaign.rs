//! Campaign Commands
//!
//! Frontend bindings for `/api/campaigns` and `/api/dashboard`.

use campaign_core::models::StatusUpdate;
use campaign_core::routes::campaign_api_path;
use campaign_core::{ApiError, Campaign, CampaignStatus, ClientConfig, DashboardAction, DashboardSummary, NewCampaign};

use super::{get_json, send_empty, send_json};

pub async fn list_campaigns(config: &ClientConfig) -> Result<Vec<Campaign>, ApiError> {
    get_json(config, "/api/campaigns", DashboardAction::Load.fallback_error()).await
}

pub async fn create_campaign(config: &ClientConfig, campaign: &NewCampaign) -> Result<Campaign, ApiError> {
    send_json(config, "POST", "/api/campaigns", campaign, DashboardAction::Create.fallback_error()).await
}

pub async fn update_campaign_status(
    config: &ClientConfig,
    campaign_id: &str,
    status: CampaignStatus,
) -> Result<Campaign, ApiError> {
    let path = campaign_api_path(campaign_id);
    send_json(config, "PUT", &path, &StatusUpdate { status }, DashboardAction::Update.fallback_error()).await
}

pub async fn delete_campaign(config: &ClientConfig, campaign_id: &str) -> Result<(), ApiError> {
    let path = campaign_api_path(campaign_id);
    send_empty(config, "DELETE", &path, DashboardAction::Delete.fallback_error()).await
}

pub async fn fetch_dashboard(config: &ClientConfig) -> Result<DashboardSummary, ApiError> {
    get_json(config, "/api/dashboard", "Failed to fetch dashboard data").await
}
