//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use campaign_core::{Campaign, CampaignBook, FilterState, Modal, RequestSequence, User};
use leptos::prelude::*;
use reactive_stores::Store;

/// Dashboard page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Signed-in user, set once the session check passes
    pub user: Option<User>,
    /// Full campaign list, filtered view and filter
    pub book: CampaignBook,
    /// True until the first campaign load settles
    pub loading: bool,
    /// Open dialog, if any
    pub modal: Option<Modal>,
    /// Guards against out-of-order list loads
    pub load_sequence: RequestSequence,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the campaign list with a fresh load
pub fn store_set_campaigns(store: &DashboardStore, campaigns: Vec<Campaign>) {
    store.book().write().replace_all(campaigns);
}

/// Add a created campaign to the store
pub fn store_insert_campaign(store: &DashboardStore, campaign: Campaign) {
    store.load_sequence().write().invalidate();
    store.book().write().insert(campaign);
}

/// Update a campaign in the store by ID
pub fn store_update_campaign(store: &DashboardStore, updated: Campaign) {
    store.load_sequence().write().invalidate();
    let id = updated.id.clone();
    let status = updated.status;
    if let Some(previous) = store.book().with_untracked(|book| book.get(&id).map(|c| c.status)) {
        log::debug!("campaign {} status {} -> {}", id, previous, status);
    }
    if !store.book().write().replace(updated) {
        log::warn!("updated campaign {} is not in the local list", id);
    }
}

/// Remove a campaign from the store by ID
pub fn store_remove_campaign(store: &DashboardStore, campaign_id: &str) {
    store.load_sequence().write().invalidate();
    store.book().write().remove(campaign_id);
}

pub fn store_set_filter(store: &DashboardStore, filter: FilterState) {
    store.book().write().set_filter(filter);
}

pub fn store_open_modal(store: &DashboardStore, modal: Modal) {
    *store.modal().write() = Some(modal);
}

pub fn store_close_modal(store: &DashboardStore) {
    *store.modal().write() = None;
}
