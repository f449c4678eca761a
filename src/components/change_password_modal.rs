//! Change Password Modal Component

use campaign_core::validation::validate_password;
use campaign_core::DashboardAction;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::dashboard_flow::report;
use crate::components::modal_frame::ModalFrame;
use crate::context::{use_app_context, use_notifier};
use crate::store::{store_close_modal, use_dashboard_store};

/// Password change for the signed-in user
#[component]
pub fn ChangePasswordModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let notifier = use_notifier();

    let (current, set_current) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = current.get_untracked();
        let new_password = new_password.get_untracked();
        if let Err(err) = validate_password(&new_password, &confirm.get_untracked()) {
            notifier.error(err.to_string());
            return;
        }
        let config = ctx.config();
        set_saving.set(true);

        spawn_local(async move {
            let result = commands::change_password(&config, &current, &new_password).await;
            set_saving.try_set(false);
            if report(notifier, DashboardAction::ChangePassword, result).is_some() {
                store_close_modal(&store);
            }
        });
    };

    view! {
        <ModalFrame id="changePasswordModal" title="Change Password">
            <form on:submit=on_submit>
                <PasswordField id="currentPassword" label="Current Password" value=current set_value=set_current />
                <PasswordField id="changeNewPassword" label="New Password" value=new_password set_value=set_new_password />
                <PasswordField id="changeConfirmPassword" label="Confirm New Password" value=confirm set_value=set_confirm />
                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| store_close_modal(&store)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=saving>
                        "Change Password"
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}

#[component]
fn PasswordField(
    id: &'static str,
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                type="password"
                required
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </div>
    }
}
