//! Auth Pages
//!
//! The combined sign-in page switches between all four forms in place. The
//! standalone pages each host one form and link to one another.

use campaign_core::{AuthForm, AuthForms, AuthMode};
use leptos::prelude::*;

use crate::components::{ForgotPasswordForm, LoginForm, NotificationBanner, RegisterForm, ResetPasswordForm};
use crate::context::{use_app_context, Notifier};
use crate::navigation;

fn provide_auth_notifier() {
    let config = use_app_context().config();
    provide_context(Notifier::new(config.auth_notice_ms));
}

/// `/`: every auth form, one visible at a time
#[component]
pub fn AuthPage() -> impl IntoView {
    provide_auth_notifier();
    let forms = RwSignal::new(AuthForms::from_query_token(navigation::query_token()));
    let mode = AuthMode::InPage;

    view! {
        <AuthShell>
            <LoginForm forms=forms mode=mode />
            <RegisterForm forms=forms mode=mode />
            <ForgotPasswordForm forms=forms mode=mode />
            <ResetPasswordForm forms=forms mode=mode />
        </AuthShell>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    provide_auth_notifier();
    let forms = RwSignal::new(AuthForms::showing(AuthForm::Register));

    view! {
        <AuthShell>
            <RegisterForm forms=forms mode=AuthMode::Standalone />
        </AuthShell>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    provide_auth_notifier();
    let forms = RwSignal::new(AuthForms::showing(AuthForm::Forgot));

    view! {
        <AuthShell>
            <ForgotPasswordForm forms=forms mode=AuthMode::Standalone />
        </AuthShell>
    }
}

/// `/reset-password?token=...`
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    provide_auth_notifier();
    let mut initial = AuthForms::showing(AuthForm::Reset);
    if let Some(token) = navigation::query_token() {
        initial.inputs.reset.token = token;
    }
    let forms = RwSignal::new(initial);

    view! {
        <AuthShell>
            <ResetPasswordForm forms=forms mode=AuthMode::Standalone />
        </AuthShell>
    }
}

#[component]
fn AuthShell(children: Children) -> impl IntoView {
    view! {
        <div class="auth-container">
            <div class="auth-card">
                <div class="auth-brand">
                    <h1>"Campaign Tracker"</h1>
                </div>
                <NotificationBanner />
                {children()}
            </div>
        </div>
    }
}
