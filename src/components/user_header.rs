//! User Header Component
//!
//! Greeting for the signed-in user with account controls.

use campaign_core::Modal;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::navigation;
use crate::store::{store_open_modal, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn UserHeader() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    let greeting = move || {
        store
            .user()
            .with(|user| user.as_ref().map(|u| format!("Welcome, {}", u.name)))
            .unwrap_or_default()
    };

    let on_logout = move |_: web_sys::MouseEvent| {
        let config = ctx.config();
        spawn_local(async move {
            if let Err(e) = commands::logout(&config).await {
                log::error!("logout failed: {}", e);
            }
            navigation::navigate("/");
        });
    };

    view! {
        <header class="dashboard-header">
            <h1>"Campaign Tracker"</h1>
            <div class="user-info">
                <span id="userGreeting">{greeting}</span>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| store_open_modal(&store, Modal::ChangePassword)
                >
                    "Change Password"
                </button>
                <button id="logoutBtn" class="btn btn-secondary" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
