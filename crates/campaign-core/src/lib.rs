//! Campaign Tracker Core
//!
//! Browser-independent pieces of the campaign tracker client: data models,
//! form validation, auth form state, notification bookkeeping, campaign
//! filtering and dashboard counts, route parsing and API response decoding.
//!
//! Nothing here touches the DOM, so all of it is tested natively.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod forms;
pub mod models;
pub mod notification;
pub mod response;
pub mod routes;
pub mod sequence;
pub mod validation;

pub use config::{ClientConfig, FollowUpDelays};
pub use dashboard::{CampaignBook, DashboardAction, DashboardCounts, FilterState, Modal};
pub use error::{ApiError, ValidationError};
pub use forms::{AuthAction, AuthField, AuthForm, AuthForms, AuthMode, AuthOutcome, FollowUp, FollowUpAction};
pub use models::{Campaign, CampaignStatus, DashboardSummary, NewCampaign, User};
pub use notification::{Notice, NoticeBoard, NotificationKind};
pub use routes::Route;
pub use sequence::{RequestSequence, Ticket};
