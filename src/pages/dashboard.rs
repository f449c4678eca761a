//! Dashboard Page
//!
//! Checks the session first. Nothing else loads until the user is known;
//! an anonymous visitor is sent back to the sign-in page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::dashboard_flow::load_campaigns;
use crate::components::{
    ActiveModal, CampaignForm, CampaignList, DashboardStats, FilterBar, NotificationBanner, UserHeader,
};
use crate::context::{use_app_context, Notifier};
use crate::navigation;
use crate::store::{DashboardState, DashboardStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = Notifier::new(ctx.config().dashboard_notice_ms);
    provide_context(notifier);

    let store = Store::new(DashboardState::new());
    provide_context(store);

    let (authenticated, set_authenticated) = signal(false);

    let config = ctx.config();
    spawn_local(async move {
        match commands::current_user(&config).await {
            Ok(user) => {
                log::info!("session user {}", user.email);
                *store.user().write() = Some(user);
                set_authenticated.set(true);
                load_campaigns(ctx, store, notifier);
            }
            Err(err) => {
                match err.status() {
                    Some(status) => log::info!("not authenticated (HTTP {})", status),
                    None => log::warn!("session check failed: {}", err),
                }
                navigation::navigate("/");
            }
        }
    });

    view! {
        <Show
            when=move || authenticated.get()
            fallback=|| view! { <div class="loading">"Checking session..."</div> }
        >
            <div class="dashboard">
                <UserHeader />
                <NotificationBanner />
                <main class="dashboard-main">
                    <DashboardStats />
                    <CampaignForm />
                    <section class="campaigns-section">
                        <h2>"Campaigns"</h2>
                        <FilterBar />
                        <CampaignList />
                    </section>
                </main>
                <ActiveModal />
            </div>
        </Show>
    }
}
