//! Browser Navigation
//!
//! Thin wrappers over `window.location` plus delayed actions.

use campaign_core::routes::token_from_query;
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

/// Path of the current page, `/` when unavailable
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// `token` query parameter of the current page
pub fn query_token() -> Option<String> {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    token_from_query(&search)
}

pub fn navigate(href: &str) {
    log::info!("navigating to {}", href);
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(href) {
        log::error!("navigation to {} failed: {:?}", href, e);
    }
}

/// Run `action` after `delay_ms` milliseconds
pub fn after(delay_ms: u32, action: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        action();
    });
}

/// `YYYY-MM-DD` for today in local time
pub fn today() -> String {
    campaign_core::format::input_date(chrono::Local::now().date_naive())
}
