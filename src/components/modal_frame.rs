//! Modal Frame Component
//!
//! Backdrop, title bar and close button shared by the dashboard dialogs.

use campaign_core::Modal;
use leptos::prelude::*;

use crate::components::change_password_modal::ChangePasswordModal;
use crate::components::delete_modal::DeleteModal;
use crate::components::edit_modal::EditModal;
use crate::store::{store_close_modal, use_dashboard_store, DashboardStateStoreFields};

/// Dialog shell. Closes on the X button or a click on the backdrop.
#[component]
pub fn ModalFrame(id: &'static str, title: &'static str, children: Children) -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <div id=id class="modal show" on:click=move |_| store_close_modal(&store)>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button
                        type="button"
                        class="close"
                        aria-label="Close"
                        on:click=move |_| store_close_modal(&store)
                    >
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// The open dialog, if any
#[component]
pub fn ActiveModal() -> impl IntoView {
    let store = use_dashboard_store();

    move || {
        store.modal().get().map(|modal| match modal {
            Modal::Edit { campaign_id, status } => {
                view! { <EditModal campaign_id=campaign_id status=status /> }.into_any()
            }
            Modal::Delete { campaign_id, name, client } => {
                view! { <DeleteModal campaign_id=campaign_id name=name client=client /> }.into_any()
            }
            Modal::ChangePassword => view! { <ChangePasswordModal /> }.into_any(),
        })
    }
}
