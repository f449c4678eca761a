//! Login Form Component

use campaign_core::validation::validate_email;
use campaign_core::{AuthAction, AuthField, AuthForm, AuthForms, AuthMode, AuthOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::auth_fields::{AuthInput, AuthPasswordInput};
use crate::components::auth_flow::{finish_auth, form_class, AuthLink};
use crate::context::{use_app_context, use_notifier};

/// Email/password sign-in
#[component]
pub fn LoginForm(forms: RwSignal<AuthForms>, mode: AuthMode) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let inputs = forms.with_untracked(|f| f.inputs.login.clone());
        if let Err(err) = validate_email(&inputs.email) {
            notifier.error(err.to_string());
            return;
        }

        let config = ctx.config();
        set_submitting.set(true);
        spawn_local(async move {
            let result = commands::login(&config, &inputs.email, &inputs.password)
                .await
                .map(|resp| {
                    if let Some(user) = resp.user {
                        log::info!("signed in as {}", user.email);
                    }
                    AuthOutcome::LoggedIn
                });
            set_submitting.try_set(false);
            finish_auth(notifier, forms, mode, config.delays, AuthAction::Login, result);
        });
    };

    view! {
        <div class=form_class(forms, AuthForm::Login)>
            <h2>"Sign In"</h2>
            <form on:submit=on_submit>
                <AuthInput forms=forms field=AuthField::LoginEmail id="loginEmail" label="Email" input_type="email" />
                <AuthPasswordInput forms=forms field=AuthField::LoginPassword id="loginPassword" label="Password" />
                <button type="submit" class="btn btn-primary" disabled=submitting>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <div class="auth-links">
                <AuthLink forms=forms mode=mode to=AuthForm::Forgot label="Forgot password?" />
                <span>"Don't have an account? "</span>
                <AuthLink forms=forms mode=mode to=AuthForm::Register label="Sign up" />
            </div>
        </div>
    }
}
