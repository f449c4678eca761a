//! Dashboard Flow Helpers
//!
//! Campaign list loading and result reporting shared by the dashboard
//! components.

use campaign_core::{ApiError, ClientConfig, DashboardAction};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{AppContext, Notifier};
use crate::store::{store_set_campaigns, DashboardStateStoreFields, DashboardStore};

/// Reload the campaign list. A response is applied only if no newer load
/// or local create/update/delete happened since it started.
pub fn load_campaigns(ctx: AppContext, store: DashboardStore, notifier: Notifier) {
    let ticket = store.load_sequence().write().begin();
    let config = ctx.config();

    spawn_local(async move {
        let result = commands::list_campaigns(&config).await;
        // A stale load still ends the placeholder; the list on screen is newer.
        *store.loading().write() = false;
        if !store.load_sequence().with_untracked(|seq| seq.is_current(ticket)) {
            log::debug!("dropping stale campaign list response");
            return;
        }

        match result {
            Ok(campaigns) => {
                log::info!("loaded {} campaigns", campaigns.len());
                store_set_campaigns(&store, campaigns);
                compare_summary(&config, store).await;
            }
            Err(err) => notifier.error(DashboardAction::Load.failure_message(&err)),
        }
    });
}

/// Cross-check local counts against the server's dashboard summary
async fn compare_summary(config: &ClientConfig, store: DashboardStore) {
    match commands::fetch_dashboard(config).await {
        Ok(summary) => {
            let counts = store.book().with_untracked(|book| book.counts());
            if counts.matches_summary(&summary) {
                log::debug!("dashboard summary matches local counts");
            } else {
                log::warn!(
                    "dashboard summary {:?} differs from local counts {:?}",
                    summary,
                    counts
                );
            }
        }
        Err(err) => log::warn!("dashboard summary unavailable: {}", err),
    }
}

/// Notify the outcome of a dashboard call. Returns the value on success.
pub fn report<T>(notifier: Notifier, action: DashboardAction, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => {
            if let Some(message) = action.success_message() {
                notifier.success(message);
            }
            Some(value)
        }
        Err(err) => {
            notifier.error(action.failure_message(&err));
            None
        }
    }
}
