//! Notification Banner Component

use leptos::prelude::*;

use crate::context::use_notifier;

/// Transient status message for the current page. Click to dismiss early.
#[component]
pub fn NotificationBanner() -> impl IntoView {
    let notifier = use_notifier();

    move || {
        notifier.current().map(|notice| {
            let class = notice.class();
            view! {
                <div class=class role="status" on:click=move |_| notifier.dismiss()>
                    {notice.message}
                </div>
            }
        })
    }
}
