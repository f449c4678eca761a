//! Campaign Tracker Frontend App
//!
//! Loads client configuration, starts logging and mounts the page for the
//! current path.

use campaign_core::{ClientConfig, Route};
use leptos::prelude::*;

use crate::context::AppContext;
use crate::logging;
use crate::navigation;
use crate::pages::{AuthPage, DashboardPage, ForgotPasswordPage, RegisterPage, ResetPasswordPage};

/// Read `<script id="campaign-config" type="application/json">` from the
/// host page. Missing or malformed config falls back to defaults.
fn load_config() -> ClientConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ClientConfig::element_id()))
        .and_then(|el| el.text_content());

    match text {
        Some(text) if !text.trim().is_empty() => ClientConfig::from_json(&text).unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("[app] invalid client config, using defaults: {}", e).into());
            ClientConfig::default()
        }),
        _ => ClientConfig::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    logging::init(&config.log_level);

    let path = navigation::current_path();
    let route = Route::from_path(&path);
    log::info!("starting on {} ({:?})", path, route);

    provide_context(AppContext::new(config));

    match route {
        Route::Auth => view! { <AuthPage /> }.into_any(),
        Route::Register => view! { <RegisterPage /> }.into_any(),
        Route::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        Route::ResetPassword => view! { <ResetPasswordPage /> }.into_any(),
        Route::Dashboard => view! { <DashboardPage /> }.into_any(),
        Route::NotFound => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="auth-container">
            <div class="auth-card">
                <h2>"Page not found"</h2>
                <a href=Route::Auth.path() class="auth-link">"Go to sign in"</a>
            </div>
        </div>
    }
}
