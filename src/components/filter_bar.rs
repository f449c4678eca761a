//! Filter Bar Component
//!
//! Status filter, free-text search and list controls. The filter lives in
//! the store so the list and the inputs never disagree.

use campaign_core::{CampaignStatus, FilterState};
use leptos::prelude::*;

use crate::components::dashboard_flow::load_campaigns;
use crate::context::{use_app_context, use_notifier};
use crate::store::{store_set_filter, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let notifier = use_notifier();

    let status_value = move || {
        store
            .book()
            .with(|book| book.filter().status.map(|s| s.as_str()).unwrap_or(""))
    };
    let search_value = move || store.book().with(|book| book.filter().search.clone());

    let on_status = move |ev: web_sys::Event| {
        let search = store.book().with_untracked(|book| book.filter().search.clone());
        store_set_filter(&store, FilterState::from_inputs(&event_target_value(&ev), &search));
    };
    let on_search = move |ev: web_sys::Event| {
        let status = store.book().with_untracked(|book| book.filter().status);
        store_set_filter(
            &store,
            FilterState {
                status,
                search: event_target_value(&ev),
            },
        );
    };

    view! {
        <div class="filter-bar">
            <select id="statusFilter" prop:value=status_value on:change=on_status>
                <option value="">"All Statuses"</option>
                {CampaignStatus::ALL
                    .iter()
                    .map(|status| view! { <option value=status.as_str()>{status.to_string()}</option> })
                    .collect_view()}
            </select>
            <input
                id="searchInput"
                type="search"
                placeholder="Search by name or client..."
                prop:value=search_value
                on:input=on_search
            />
            <button
                type="button"
                class="btn btn-secondary"
                on:click=move |_| store_set_filter(&store, FilterState::default())
            >
                "Clear Filters"
            </button>
            <button
                type="button"
                class="btn btn-secondary"
                title="Reload campaigns"
                on:click=move |_| load_campaigns(ctx, store, notifier)
            >
                <i class="fas fa-rotate"></i>
                " Refresh"
            </button>
        </div>
    }
}
