//! Campaign List Component
//!
//! One card per campaign in the filtered view.

use campaign_core::format::format_date;
use campaign_core::{Campaign, Modal};
use leptos::prelude::*;

use crate::store::{store_open_modal, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn CampaignList() -> impl IntoView {
    let store = use_dashboard_store();
    let campaigns = move || store.book().with(|book| book.filtered().to_vec());

    view! {
        <section id="campaignsList" class="campaigns-list">
            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <div class="loading">"Loading campaigns..."</div> }
            >
                <Show
                    when=move || store.book().with(|book| !book.filtered().is_empty())
                    fallback=|| view! {
                        <div class="empty-state">
                            <h3>"No campaigns found"</h3>
                            <p>"Add a campaign or adjust the filters."</p>
                        </div>
                    }
                >
                    <For
                        each=campaigns
                        key=|c| (c.id.clone(), c.status)
                        children=move |campaign| view! { <CampaignCard campaign=campaign /> }
                    />
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn CampaignCard(campaign: Campaign) -> impl IntoView {
    let store = use_dashboard_store();
    let edit = Modal::edit(&campaign);
    let delete = Modal::delete(&campaign);

    view! {
        <div class="campaign-card" data-id=campaign.id.clone()>
            <div class="campaign-header">
                <h3 class="campaign-name">{campaign.name.clone()}</h3>
                <span class=format!("status-badge {}", campaign.status.badge_class())>
                    {campaign.status.to_string()}
                </span>
            </div>
            <div class="campaign-details">
                <p><strong>"Client: "</strong>{campaign.client.clone()}</p>
                <p><strong>"Start Date: "</strong>{format_date(&campaign.start_date)}</p>
                <p class="campaign-created">"Created: " {format_date(&campaign.created_at)}</p>
            </div>
            <div class="campaign-actions">
                <button
                    class="btn btn-small btn-edit"
                    on:click=move |_| store_open_modal(&store, edit.clone())
                >
                    "Edit"
                </button>
                <button
                    class="btn btn-small btn-danger"
                    on:click=move |_| store_open_modal(&store, delete.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
