//! Dashboard Stats Component

use leptos::prelude::*;

use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// Counts over the unfiltered campaign list
#[component]
pub fn DashboardStats() -> impl IntoView {
    let store = use_dashboard_store();
    let counts = Memo::new(move |_| store.book().with(|book| book.counts()));

    view! {
        <section class="stats-grid">
            <StatCard id="totalCampaigns" label="Total Campaigns" value=Signal::derive(move || counts.get().total) />
            <StatCard id="activeCampaigns" label="Active" value=Signal::derive(move || counts.get().active) />
            <StatCard id="pausedCampaigns" label="Paused" value=Signal::derive(move || counts.get().paused) />
            <StatCard id="completedCampaigns" label="Completed" value=Signal::derive(move || counts.get().completed) />
        </section>
    }
}

#[component]
fn StatCard(id: &'static str, label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h3>{label}</h3>
            <p id=id class="stat-number">{move || value.get()}</p>
        </div>
    }
}
