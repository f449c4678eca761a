//! Reset Password Form Component

use campaign_core::validation::validate_password;
use campaign_core::{AuthAction, AuthField, AuthForm, AuthForms, AuthMode, AuthOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::auth_fields::{AuthInput, AuthPasswordInput};
use crate::components::auth_flow::{finish_auth, form_class, AuthLink};
use crate::context::{use_app_context, use_notifier};

/// Set a new password with a reset token
#[component]
pub fn ResetPasswordForm(forms: RwSignal<AuthForms>, mode: AuthMode) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let inputs = forms.with_untracked(|f| f.inputs.reset.clone());
        if let Err(err) = validate_password(&inputs.new_password, &inputs.confirm_new_password) {
            notifier.error(err.to_string());
            return;
        }

        let config = ctx.config();
        set_submitting.set(true);
        spawn_local(async move {
            let result = commands::reset_password(&config, &inputs.token, &inputs.new_password)
                .await
                .map(|_| AuthOutcome::PasswordReset);
            set_submitting.try_set(false);
            finish_auth(notifier, forms, mode, config.delays, AuthAction::ResetPassword, result);
        });
    };

    view! {
        <div class=form_class(forms, AuthForm::Reset)>
            <h2>"Reset Password"</h2>
            <form on:submit=on_submit>
                <AuthInput forms=forms field=AuthField::ResetToken id="resetToken" label="Reset Token" />
                <AuthPasswordInput forms=forms field=AuthField::ResetPassword id="newPassword" label="New Password" />
                <AuthPasswordInput forms=forms field=AuthField::ResetConfirm id="confirmPassword" label="Confirm New Password" />
                <button type="submit" class="btn btn-primary" disabled=submitting>
                    {move || if submitting.get() { "Resetting..." } else { "Reset Password" }}
                </button>
            </form>
            <div class="auth-links">
                <AuthLink forms=forms mode=mode to=AuthForm::Login label="Back to sign in" />
            </div>
        </div>
    }
}
