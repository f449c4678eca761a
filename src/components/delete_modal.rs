//! Delete Modal Component
//!
//! Confirmation dialog with a preview of the campaign being removed.

use campaign_core::DashboardAction;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::dashboard_flow::report;
use crate::components::modal_frame::ModalFrame;
use crate::context::{use_app_context, use_notifier};
use crate::store::{store_close_modal, store_remove_campaign, use_dashboard_store};

#[component]
pub fn DeleteModal(campaign_id: String, name: String, client: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let notifier = use_notifier();
    let (deleting, set_deleting) = signal(false);
    let campaign_id = StoredValue::new(campaign_id);

    let on_confirm = move |_: web_sys::MouseEvent| {
        let id = campaign_id.get_value();
        let config = ctx.config();
        set_deleting.set(true);

        spawn_local(async move {
            let result = commands::delete_campaign(&config, &id).await;
            set_deleting.try_set(false);
            if report(notifier, DashboardAction::Delete, result).is_some() {
                store_remove_campaign(&store, &id);
                store_close_modal(&store);
            }
        });
    };

    view! {
        <ModalFrame id="deleteModal" title="Delete Campaign">
            <p>"Are you sure you want to delete this campaign?"</p>
            <div id="deletePreview" class="delete-preview">
                <strong>{name}</strong>
                <span>" ("{client}")"</span>
            </div>
            <div class="modal-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| store_close_modal(&store)>
                    "Cancel"
                </button>
                <button type="button" class="btn btn-danger" disabled=deleting on:click=on_confirm>
                    "Delete"
                </button>
            </div>
        </ModalFrame>
    }
}
