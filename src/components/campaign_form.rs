//! Campaign Form Component
//!
//! Form for adding a campaign. Resets after a successful create.

use campaign_core::{CampaignStatus, DashboardAction, NewCampaign};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::dashboard_flow::report;
use crate::context::{use_app_context, use_notifier};
use crate::navigation;
use crate::store::{store_insert_campaign, use_dashboard_store};

#[component]
pub fn CampaignForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let notifier = use_notifier();

    let (name, set_name) = signal(String::new());
    let (client, set_client) = signal(String::new());
    let (start_date, set_start_date) = signal(navigation::today());
    let (status, set_status) = signal(CampaignStatus::Active);
    let (submitting, set_submitting) = signal(false);

    let reset = move || {
        set_name.set(String::new());
        set_client.set(String::new());
        set_start_date.set(navigation::today());
        set_status.set(CampaignStatus::Active);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let campaign = NewCampaign {
            name: name.get_untracked().trim().to_string(),
            client: client.get_untracked().trim().to_string(),
            start_date: start_date.get_untracked(),
            status: status.get_untracked(),
        };
        let config = ctx.config();
        set_submitting.set(true);

        spawn_local(async move {
            let result = commands::create_campaign(&config, &campaign).await;
            set_submitting.try_set(false);
            if let Some(created) = report(notifier, DashboardAction::Create, result) {
                store_insert_campaign(&store, created);
                reset();
            }
        });
    };

    view! {
        <section class="campaign-form-section">
            <h2>"Add New Campaign"</h2>
            <form id="campaignForm" class="campaign-form" on:submit=on_submit>
                <div class="form-row">
                    <div class="form-group">
                        <label for="campaignName">"Campaign Name"</label>
                        <input
                            id="campaignName"
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="clientName">"Client"</label>
                        <input
                            id="clientName"
                            type="text"
                            required
                            prop:value=move || client.get()
                            on:input=move |ev| set_client.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="startDate">"Start Date"</label>
                        <input
                            id="startDate"
                            type="date"
                            required
                            prop:value=move || start_date.get()
                            on:input=move |ev| set_start_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="campaignStatus">"Status"</label>
                        <StatusSelect id="campaignStatus" value=status set_value=set_status />
                    </div>
                </div>
                <button type="submit" class="btn btn-primary" disabled=submitting>
                    {move || if submitting.get() { "Adding..." } else { "Add Campaign" }}
                </button>
            </form>
        </section>
    }
}

/// `<select>` over every campaign status
#[component]
pub fn StatusSelect(
    id: &'static str,
    value: ReadSignal<CampaignStatus>,
    set_value: WriteSignal<CampaignStatus>,
) -> impl IntoView {
    view! {
        <select
            id=id
            prop:value=move || value.get().as_str()
            on:change=move |ev| {
                match event_target_value(&ev).parse::<CampaignStatus>() {
                    Ok(status) => set_value.set(status),
                    Err(_) => log::warn!("unknown status option selected"),
                }
            }
        >
            {CampaignStatus::ALL
                .iter()
                .map(|status| {
                    view! { <option value=status.as_str()>{status.to_string()}</option> }
                })
                .collect_view()}
        </select>
    }
}
