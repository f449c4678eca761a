//! Auth Commands
//!
//! Frontend bindings for `/api/auth/*`.

use campaign_core::models::{
    ChangePasswordRequest, ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest, LoginResponse,
    MessageResponse, RegisterRequest, ResetPasswordRequest,
};
use campaign_core::{ApiError, AuthAction, ClientConfig, DashboardAction, User};

use super::{get_json, send_empty, send_json};

pub async fn login(config: &ClientConfig, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest { email, password };
    send_json(config, "POST", "/api/auth/login", &body, AuthAction::Login.fallback_error()).await
}

pub async fn register(config: &ClientConfig, name: &str, email: &str, password: &str) -> Result<MessageResponse, ApiError> {
    let body = RegisterRequest { name, email, password };
    send_json(config, "POST", "/api/auth/register", &body, AuthAction::Register.fallback_error()).await
}

/// Returns the reset token
pub async fn forgot_password(config: &ClientConfig, email: &str) -> Result<String, ApiError> {
    let body = ForgotPasswordRequest { email };
    let resp: ForgotPasswordResponse = send_json(
        config,
        "POST",
        "/api/auth/forgot-password",
        &body,
        AuthAction::ForgotPassword.fallback_error(),
    )
    .await?;
    Ok(resp.reset_token)
}

pub async fn reset_password(config: &ClientConfig, token: &str, new_password: &str) -> Result<MessageResponse, ApiError> {
    let body = ResetPasswordRequest { token, new_password };
    send_json(config, "POST", "/api/auth/reset-password", &body, AuthAction::ResetPassword.fallback_error()).await
}

pub async fn change_password(
    config: &ClientConfig,
    current_password: &str,
    new_password: &str,
) -> Result<MessageResponse, ApiError> {
    let body = ChangePasswordRequest { current_password, new_password };
    send_json(
        config,
        "POST",
        "/api/auth/change-password",
        &body,
        DashboardAction::ChangePassword.fallback_error(),
    )
    .await
}

/// Current session user. Any non-2xx means "not signed in".
pub async fn current_user(config: &ClientConfig) -> Result<User, ApiError> {
    get_json(config, "/api/auth/me", "Authentication required").await
}

pub async fn logout(config: &ClientConfig) -> Result<(), ApiError> {
    send_empty(config, "POST", "/api/auth/logout", "Logout failed").await
}
