//! Register Form Component

use campaign_core::validation::{validate_email, validate_password};
use campaign_core::{AuthAction, AuthField, AuthForm, AuthForms, AuthMode, AuthOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::auth_fields::{AuthInput, AuthPasswordInput};
use crate::components::auth_flow::{finish_auth, form_class, AuthLink};
use crate::context::{use_app_context, use_notifier};

/// New account form
#[component]
pub fn RegisterForm(forms: RwSignal<AuthForms>, mode: AuthMode) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let inputs = forms.with_untracked(|f| f.inputs.register.clone());
        let checked = validate_email(&inputs.email)
            .and_then(|_| validate_password(&inputs.password, &inputs.confirm_password));
        if let Err(err) = checked {
            notifier.error(err.to_string());
            return;
        }

        let config = ctx.config();
        set_submitting.set(true);
        spawn_local(async move {
            let result = commands::register(&config, &inputs.name, &inputs.email, &inputs.password)
                .await
                .map(|_| AuthOutcome::Registered);
            set_submitting.try_set(false);
            finish_auth(notifier, forms, mode, config.delays, AuthAction::Register, result);
        });
    };

    view! {
        <div class=form_class(forms, AuthForm::Register)>
            <h2>"Create Account"</h2>
            <form on:submit=on_submit>
                <AuthInput forms=forms field=AuthField::RegisterName id="registerName" label="Full Name" />
                <AuthInput forms=forms field=AuthField::RegisterEmail id="registerEmail" label="Email" input_type="email" />
                <AuthPasswordInput forms=forms field=AuthField::RegisterPassword id="registerPassword" label="Password" />
                <AuthPasswordInput forms=forms field=AuthField::RegisterConfirm id="registerConfirmPassword" label="Confirm Password" />
                <button type="submit" class="btn btn-primary" disabled=submitting>
                    {move || if submitting.get() { "Creating account..." } else { "Create Account" }}
                </button>
            </form>
            <div class="auth-links">
                <span>"Already have an account? "</span>
                <AuthLink forms=forms mode=mode to=AuthForm::Login label="Sign in" />
            </div>
        </div>
    }
}
