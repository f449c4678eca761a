//! Pages
//!
//! One top-level component per client route.

mod auth;
mod dashboard;

pub use auth::{AuthPage, ForgotPasswordPage, RegisterPage, ResetPasswordPage};
pub use dashboard::DashboardPage;
