//! Auth Form Inputs
//!
//! Inputs bound to one [`AuthField`] of the page's form state.

use campaign_core::{AuthField, AuthForms};
use leptos::prelude::*;

/// Plain text/email input
#[component]
pub fn AuthInput(
    forms: RwSignal<AuthForms>,
    field: AuthField,
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                required
                prop:value=move || forms.with(|f| f.inputs.value(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    forms.update(|f| f.inputs.set(field, value));
                }
            />
        </div>
    }
}

/// Password input with a show/hide toggle
#[component]
pub fn AuthPasswordInput(
    forms: RwSignal<AuthForms>,
    field: AuthField,
    id: &'static str,
    label: &'static str,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <div class="password-input">
                <input
                    id=id
                    type=move || if visible.get() { "text" } else { "password" }
                    required
                    prop:value=move || forms.with(|f| f.inputs.value(field).to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        forms.update(|f| f.inputs.set(field, value));
                    }
                />
                <button
                    type="button"
                    class="password-toggle"
                    title=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    <i class=move || if visible.get() { "fas fa-eye-slash" } else { "fas fa-eye" }></i>
                </button>
            </div>
        </div>
    }
}
