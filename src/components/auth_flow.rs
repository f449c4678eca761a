//! Auth Flow Helpers
//!
//! Shared result handling and form-to-form links for the auth forms.

use campaign_core::{ApiError, AuthAction, AuthForm, AuthForms, AuthMode, AuthOutcome, FollowUpAction, FollowUpDelays};
use leptos::prelude::*;

use crate::context::Notifier;
use crate::navigation;

/// Report an auth result once and schedule what follows a success
pub fn finish_auth(
    notifier: Notifier,
    forms: RwSignal<AuthForms>,
    mode: AuthMode,
    delays: FollowUpDelays,
    action: AuthAction,
    result: Result<AuthOutcome, ApiError>,
) {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => {
            notifier.error(action.failure_message(&err));
            return;
        }
    };

    notifier.success(outcome.success_message(mode));
    let follow_up = outcome.follow_up(mode, &delays);
    navigation::after(follow_up.delay_ms, move || match follow_up.action {
        FollowUpAction::Navigate(href) => navigation::navigate(&href),
        show => {
            forms.try_update(|f| f.apply(&show));
        }
    });
}

/// CSS class for a form container
pub fn form_class(forms: RwSignal<AuthForms>, form: AuthForm) -> impl Fn() -> &'static str {
    move || {
        if forms.with(|f| f.is_active(form)) {
            "auth-form active"
        } else {
            "auth-form"
        }
    }
}

/// Link to another auth form: an in-page switch on the combined page, a
/// plain link between standalone pages.
#[component]
pub fn AuthLink(
    forms: RwSignal<AuthForms>,
    mode: AuthMode,
    to: AuthForm,
    label: &'static str,
) -> impl IntoView {
    match mode {
        AuthMode::InPage => view! {
            <a
                href="#"
                class="auth-link"
                on:click=move |ev| {
                    ev.prevent_default();
                    forms.update(|f| f.switch_to(to));
                }
            >
                {label}
            </a>
        }
        .into_any(),
        AuthMode::Standalone => view! {
            <a href=to.route().path() class="auth-link">{label}</a>
        }
        .into_any(),
    }
}
