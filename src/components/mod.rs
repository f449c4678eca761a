//! UI Components
//!
//! Reusable Leptos components.

mod auth_fields;
mod auth_flow;
mod campaign_form;
mod campaign_list;
mod change_password_modal;
pub mod dashboard_flow;
mod dashboard_stats;
mod delete_modal;
mod edit_modal;
mod filter_bar;
mod forgot_password_form;
mod login_form;
mod modal_frame;
mod notification_banner;
mod register_form;
mod reset_password_form;
mod user_header;

pub use campaign_form::CampaignForm;
pub use campaign_list::CampaignList;
pub use dashboard_stats::DashboardStats;
pub use filter_bar::FilterBar;
pub use forgot_password_form::ForgotPasswordForm;
pub use login_form::LoginForm;
pub use modal_frame::ActiveModal;
pub use notification_banner::NotificationBanner;
pub use register_form::RegisterForm;
pub use reset_password_form::ResetPasswordForm;
pub use user_header::UserHeader;
