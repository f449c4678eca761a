//! Forgot Password Form Component
//!
//! Requests a reset token. The backend returns the token directly and it is
//! shown to the user; on the combined page the reset form opens with it
//! filled in, on the standalone page the browser moves to `/reset-password`.

use campaign_core::validation::validate_email;
use campaign_core::{AuthAction, AuthField, AuthForm, AuthForms, AuthMode, AuthOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::auth_fields::AuthInput;
use crate::components::auth_flow::{finish_auth, form_class, AuthLink};
use crate::context::{use_app_context, use_notifier};

#[component]
pub fn ForgotPasswordForm(forms: RwSignal<AuthForms>, mode: AuthMode) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = forms.with_untracked(|f| f.inputs.forgot.email.clone());
        if let Err(err) = validate_email(&email) {
            notifier.error(err.to_string());
            return;
        }

        let config = ctx.config();
        set_submitting.set(true);
        spawn_local(async move {
            let result = commands::forgot_password(&config, &email)
                .await
                .map(AuthOutcome::ResetIssued);
            set_submitting.try_set(false);
            finish_auth(notifier, forms, mode, config.delays, AuthAction::ForgotPassword, result);
        });
    };

    view! {
        <div class=form_class(forms, AuthForm::Forgot)>
            <h2>"Forgot Password"</h2>
            <p class="auth-hint">"Enter your email to receive a reset token."</p>
            <form on:submit=on_submit>
                <AuthInput forms=forms field=AuthField::ForgotEmail id="forgotEmail" label="Email" input_type="email" />
                <button type="submit" class="btn btn-primary" disabled=submitting>
                    {move || if submitting.get() { "Sending..." } else { "Send Reset Link" }}
                </button>
            </form>
            <div class="auth-links">
                <AuthLink forms=forms mode=mode to=AuthForm::Login label="Back to sign in" />
            </div>
        </div>
    }
}
