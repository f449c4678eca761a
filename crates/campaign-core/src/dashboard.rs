//! Campaign Dashboard State
//!
//! Full campaign list, the filtered view derived from it, dashboard counts
//! and the pending modal action.

use crate::error::ApiError;
use crate::models::{Campaign, CampaignStatus, DashboardSummary};

/// Status selection plus free-text search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// `None` matches every status
    pub status: Option<CampaignStatus>,
    pub search: String,
}

impl FilterState {
    /// Build from the raw `<select>` and search input values
    pub fn from_inputs(status_value: &str, search: &str) -> Self {
        Self {
            status: status_value.parse().ok(),
            search: search.to_string(),
        }
    }

    pub fn matches(&self, campaign: &Campaign) -> bool {
        let status_match = self.status.map_or(true, |status| campaign.status == status);
        if !status_match {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        campaign.name.to_lowercase().contains(&needle)
            || campaign.client.to_lowercase().contains(&needle)
    }
}

/// Campaigns held by the dashboard page.
///
/// `filtered` is recomputed after every mutation, so it always reflects the
/// current filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignBook {
    campaigns: Vec<Campaign>,
    filtered: Vec<Campaign>,
    filter: FilterState,
}

impl CampaignBook {
    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn filtered(&self) -> &[Campaign] {
        &self.filtered
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Replace everything with a freshly loaded list
    pub fn replace_all(&mut self, campaigns: Vec<Campaign>) {
        self.campaigns = campaigns;
        self.apply_filters();
    }

    /// Add a created campaign. An id already present is replaced in place.
    pub fn insert(&mut self, campaign: Campaign) {
        match self.campaigns.iter_mut().find(|c| c.id == campaign.id) {
            Some(existing) => {
                log::debug!("campaign {} already listed, replacing", campaign.id);
                *existing = campaign;
            }
            None => self.campaigns.push(campaign),
        }
        self.apply_filters();
    }

    /// Swap in the server's copy of an updated campaign. Returns false when
    /// the id is not in the local list.
    pub fn replace(&mut self, updated: Campaign) -> bool {
        let found = self
            .campaigns
            .iter_mut()
            .find(|c| c.id == updated.id)
            .map(|c| *c = updated)
            .is_some();
        self.apply_filters();
        found
    }

    pub fn remove(&mut self, campaign_id: &str) {
        self.campaigns.retain(|c| c.id != campaign_id);
        self.apply_filters();
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.apply_filters();
    }

    pub fn get(&self, campaign_id: &str) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == campaign_id)
    }

    pub fn apply_filters(&mut self) {
        self.filtered = self
            .campaigns
            .iter()
            .filter(|c| self.filter.matches(c))
            .cloned()
            .collect();
    }

    /// Counts over the full list, independent of the filter
    pub fn counts(&self) -> DashboardCounts {
        DashboardCounts::from_campaigns(&self.campaigns)
    }
}

/// Totals shown in the dashboard header cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub total: usize,
    pub active: usize,
    pub paused: usize,
    pub completed: usize,
}

impl DashboardCounts {
    pub fn from_campaigns(campaigns: &[Campaign]) -> Self {
        let count = |status| campaigns.iter().filter(|c| c.status == status).count();
        Self {
            total: campaigns.len(),
            active: count(CampaignStatus::Active),
            paused: count(CampaignStatus::Paused),
            completed: count(CampaignStatus::Completed),
        }
    }

    pub fn matches_summary(&self, summary: &DashboardSummary) -> bool {
        self.total == summary.total_campaigns
            && self.active == summary.active_campaigns
            && self.paused == summary.paused_campaigns
            && self.completed == summary.completed_campaigns
    }
}

/// Dialog currently open on the dashboard, carrying its pending action
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Edit {
        campaign_id: String,
        status: CampaignStatus,
    },
    Delete {
        campaign_id: String,
        name: String,
        client: String,
    },
    ChangePassword,
}

impl Modal {
    pub fn edit(campaign: &Campaign) -> Self {
        Modal::Edit {
            campaign_id: campaign.id.clone(),
            status: campaign.status,
        }
    }

    pub fn delete(campaign: &Campaign) -> Self {
        Modal::Delete {
            campaign_id: campaign.id.clone(),
            name: campaign.name.clone(),
            client: campaign.client.clone(),
        }
    }
}

/// Calls made from the dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    Load,
    Create,
    Update,
    Delete,
    ChangePassword,
}

impl DashboardAction {
    /// Error text when the server gives none
    pub fn fallback_error(self) -> &'static str {
        match self {
            DashboardAction::Load => "Failed to fetch campaigns",
            DashboardAction::Create => "Failed to add campaign",
            DashboardAction::Update => "Failed to update campaign",
            DashboardAction::Delete => "Failed to delete campaign",
            DashboardAction::ChangePassword => "Failed to change password",
        }
    }

    pub fn failure_message(self, err: &ApiError) -> String {
        let prefix = match self {
            DashboardAction::Load => "Error loading campaigns",
            DashboardAction::Create => "Error adding campaign",
            DashboardAction::Update => "Error updating campaign",
            DashboardAction::Delete => "Error deleting campaign",
            DashboardAction::ChangePassword => "Error changing password",
        };
        format!("{prefix}: {err}")
    }

    pub fn success_message(self) -> Option<&'static str> {
        match self {
            DashboardAction::Load => None,
            DashboardAction::Create => Some("Campaign added successfully!"),
            DashboardAction::Update => Some("Campaign status updated successfully!"),
            DashboardAction::Delete => Some("Campaign deleted successfully!"),
            DashboardAction::ChangePassword => Some("Password changed successfully!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::RequestSequence;

    fn make_campaign(id: &str, name: &str, client: &str, status: CampaignStatus) -> Campaign {
        Campaign {
            id: id.to_string(),
            name: name.to_string(),
            client: client.to_string(),
            start_date: "2024-01-05".to_string(),
            status,
            created_at: "2024-01-01T09:00:00".to_string(),
        }
    }

    fn sample_book() -> CampaignBook {
        let mut book = CampaignBook::default();
        book.replace_all(vec![
            make_campaign("1", "Spring Sale", "Acme", CampaignStatus::Active),
            make_campaign("2", "Winter Promo", "Globex", CampaignStatus::Paused),
            make_campaign("3", "Launch", "acme labs", CampaignStatus::Completed),
            make_campaign("4", "Brand Refresh", "Initech", CampaignStatus::Active),
        ]);
        book
    }

    fn ids(campaigns: &[Campaign]) -> Vec<&str> {
        campaigns.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_status_filter_selects_exact_subset() {
        let mut book = sample_book();
        book.set_filter(FilterState::from_inputs("Active", ""));

        let expected: Vec<&Campaign> = book
            .campaigns()
            .iter()
            .filter(|c| c.status == CampaignStatus::Active)
            .collect();
        assert_eq!(book.filtered().iter().collect::<Vec<_>>(), expected);
        assert_eq!(ids(book.filtered()), vec!["1", "4"]);
    }

    #[test]
    fn test_search_matches_name_or_client_case_insensitively() {
        let mut book = sample_book();
        book.set_filter(FilterState::from_inputs("", "ACME"));
        assert_eq!(ids(book.filtered()), vec!["1", "3"]);

        book.set_filter(FilterState::from_inputs("", "promo"));
        assert_eq!(ids(book.filtered()), vec!["2"]);

        book.set_filter(FilterState::from_inputs("Completed", "acme"));
        assert_eq!(ids(book.filtered()), vec!["3"]);
    }

    #[test]
    fn test_empty_filter_shows_everything() {
        let mut book = sample_book();
        book.set_filter(FilterState::from_inputs("", ""));
        assert_eq!(book.filtered().len(), 4);
    }

    #[test]
    fn test_insert_appears_once_and_respects_filter() {
        let mut book = sample_book();
        book.set_filter(FilterState::from_inputs("Paused", ""));

        let created = make_campaign("5", "Autumn", "Hooli", CampaignStatus::Active);
        book.insert(created.clone());
        book.insert(created);

        assert_eq!(book.campaigns().iter().filter(|c| c.id == "5").count(), 1);
        assert!(book.filtered().iter().all(|c| c.status == CampaignStatus::Paused));

        book.set_filter(FilterState::default());
        assert_eq!(book.filtered().iter().filter(|c| c.id == "5").count(), 1);
    }

    #[test]
    fn test_create_during_reload_survives_stale_snapshot() {
        let mut book = sample_book();
        let mut seq = RequestSequence::default();

        let ticket = seq.begin();
        let snapshot = book.campaigns().to_vec();

        book.insert(make_campaign("5", "Autumn", "Hooli", CampaignStatus::Active));
        seq.invalidate();

        if seq.is_current(ticket) {
            book.replace_all(snapshot);
        }
        assert_eq!(book.campaigns().iter().filter(|c| c.id == "5").count(), 1);
        assert_eq!(book.counts().total, 5);
    }

    #[test]
    fn test_replace_updates_entry_by_id() {
        let mut book = sample_book();
        book.set_filter(FilterState::from_inputs("Active", ""));

        let updated = make_campaign("2", "Winter Promo", "Globex", CampaignStatus::Active);
        assert!(book.replace(updated));
        assert_eq!(book.get("2").map(|c| c.status), Some(CampaignStatus::Active));
        assert_eq!(ids(book.filtered()), vec!["1", "2", "4"]);

        let unknown = make_campaign("99", "Ghost", "Nobody", CampaignStatus::Paused);
        assert!(!book.replace(unknown));
        assert!(book.get("99").is_none());
    }

    #[test]
    fn test_remove_clears_both_lists() {
        let mut book = sample_book();
        book.remove("1");
        assert!(book.get("1").is_none());
        assert!(book.filtered().iter().all(|c| c.id != "1"));
        assert_eq!(book.campaigns().len(), 3);
    }

    #[test]
    fn test_counts_ignore_filter() {
        let mut book = sample_book();
        book.set_filter(FilterState::from_inputs("Paused", "nothing matches"));
        assert!(book.filtered().is_empty());

        let counts = book.counts();
        assert_eq!(counts, DashboardCounts { total: 4, active: 2, paused: 1, completed: 1 });
        assert!(counts.active + counts.paused + counts.completed <= counts.total);
    }

    #[test]
    fn test_counts_compare_with_server_summary() {
        let counts = sample_book().counts();
        let summary = DashboardSummary {
            total_campaigns: 4,
            active_campaigns: 2,
            paused_campaigns: 1,
            completed_campaigns: 1,
        };
        assert!(counts.matches_summary(&summary));
        assert!(!counts.matches_summary(&DashboardSummary::default()));
    }

    #[test]
    fn test_modal_targets() {
        let campaign = make_campaign("7", "Gala", "Umbrella", CampaignStatus::Paused);
        assert_eq!(
            Modal::edit(&campaign),
            Modal::Edit { campaign_id: "7".into(), status: CampaignStatus::Paused }
        );
        assert_eq!(
            Modal::delete(&campaign),
            Modal::Delete { campaign_id: "7".into(), name: "Gala".into(), client: "Umbrella".into() }
        );
    }

    #[test]
    fn test_action_messages() {
        let err = ApiError::Status { status: 404, message: "Campaign not found".into() };
        assert_eq!(
            DashboardAction::Delete.failure_message(&err),
            "Error deleting campaign: Campaign not found"
        );
        assert_eq!(DashboardAction::Create.success_message(), Some("Campaign added successfully!"));
        assert_eq!(DashboardAction::Load.success_message(), None);
    }
}
