//! Edit Modal Component

use campaign_core::{CampaignStatus, DashboardAction};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::campaign_form::StatusSelect;
use crate::components::dashboard_flow::report;
use crate::components::modal_frame::ModalFrame;
use crate::context::{use_app_context, use_notifier};
use crate::store::{store_close_modal, store_update_campaign, use_dashboard_store};

/// Change the status of one campaign
#[component]
pub fn EditModal(campaign_id: String, status: CampaignStatus) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let notifier = use_notifier();
    let (selected, set_selected) = signal(status);
    let (saving, set_saving) = signal(false);
    let campaign_id = StoredValue::new(campaign_id);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = campaign_id.get_value();
        let status = selected.get_untracked();
        let config = ctx.config();
        set_saving.set(true);

        spawn_local(async move {
            let result = commands::update_campaign_status(&config, &id, status).await;
            set_saving.try_set(false);
            if let Some(updated) = report(notifier, DashboardAction::Update, result) {
                store_update_campaign(&store, updated);
                store_close_modal(&store);
            }
        });
    };

    view! {
        <ModalFrame id="editModal" title="Edit Campaign Status">
            <form id="editForm" on:submit=on_submit>
                <div class="form-group">
                    <label for="editStatus">"Status"</label>
                    <StatusSelect id="editStatus" value=selected set_value=set_selected />
                </div>
                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| store_close_modal(&store)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=saving>
                        "Update Status"
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
