//! Auth Form State
//!
//! The sign-in page holds four forms (login, register, forgot, reset) and
//! shows exactly one. This module owns which one is active, every form's
//! input values, and what happens after each auth action succeeds.

use crate::config::FollowUpDelays;
use crate::error::ApiError;
use crate::routes::{reset_password_href, Route};

/// Named auth form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthForm {
    #[default]
    Login,
    Register,
    Forgot,
    Reset,
}

impl AuthForm {
    pub const ALL: [AuthForm; 4] = [AuthForm::Login, AuthForm::Register, AuthForm::Forgot, AuthForm::Reset];

    /// Standalone page hosting this form
    pub fn route(self) -> Route {
        match self {
            AuthForm::Login => Route::Auth,
            AuthForm::Register => Route::Register,
            AuthForm::Forgot => Route::ForgotPassword,
            AuthForm::Reset => Route::ResetPassword,
        }
    }
}

/// One input of one auth form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    LoginEmail,
    LoginPassword,
    RegisterName,
    RegisterEmail,
    RegisterPassword,
    RegisterConfirm,
    ForgotEmail,
    ResetToken,
    ResetPassword,
    ResetConfirm,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginInputs {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterInputs {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotInputs {
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetInputs {
    pub token: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

/// Every auth input on the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthInputs {
    pub login: LoginInputs,
    pub register: RegisterInputs,
    pub forgot: ForgotInputs,
    pub reset: ResetInputs,
}

impl AuthInputs {
    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::LoginEmail => &self.login.email,
            AuthField::LoginPassword => &self.login.password,
            AuthField::RegisterName => &self.register.name,
            AuthField::RegisterEmail => &self.register.email,
            AuthField::RegisterPassword => &self.register.password,
            AuthField::RegisterConfirm => &self.register.confirm_password,
            AuthField::ForgotEmail => &self.forgot.email,
            AuthField::ResetToken => &self.reset.token,
            AuthField::ResetPassword => &self.reset.new_password,
            AuthField::ResetConfirm => &self.reset.confirm_new_password,
        }
    }

    pub fn set(&mut self, field: AuthField, value: String) {
        let slot = match field {
            AuthField::LoginEmail => &mut self.login.email,
            AuthField::LoginPassword => &mut self.login.password,
            AuthField::RegisterName => &mut self.register.name,
            AuthField::RegisterEmail => &mut self.register.email,
            AuthField::RegisterPassword => &mut self.register.password,
            AuthField::RegisterConfirm => &mut self.register.confirm_password,
            AuthField::ForgotEmail => &mut self.forgot.email,
            AuthField::ResetToken => &mut self.reset.token,
            AuthField::ResetPassword => &mut self.reset.new_password,
            AuthField::ResetConfirm => &mut self.reset.confirm_new_password,
        };
        *slot = value;
    }
}

/// Form-state controller for an auth page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForms {
    current: AuthForm,
    pub inputs: AuthInputs,
}

impl AuthForms {
    /// Initial state: login, or reset with the token pre-filled when the page
    /// was opened with `?token=...`.
    pub fn from_query_token(token: Option<String>) -> Self {
        let mut forms = Self::default();
        if let Some(token) = token {
            forms.show(AuthForm::Reset);
            forms.inputs.reset.token = token;
        }
        forms
    }

    /// State for a standalone page that only hosts `form`
    pub fn showing(form: AuthForm) -> Self {
        Self {
            current: form,
            inputs: AuthInputs::default(),
        }
    }

    pub fn current(&self) -> AuthForm {
        self.current
    }

    pub fn is_active(&self, form: AuthForm) -> bool {
        self.current == form
    }

    pub fn show(&mut self, form: AuthForm) {
        self.current = form;
    }

    /// Empty every input, whichever form is active
    pub fn clear(&mut self) {
        self.inputs = AuthInputs::default();
    }

    /// Switch forms from a navigation link
    pub fn switch_to(&mut self, form: AuthForm) {
        self.show(form);
        self.clear();
    }

    pub fn apply(&mut self, action: &FollowUpAction) {
        if let FollowUpAction::Show { form, clear, token } = action {
            self.show(*form);
            if *clear {
                self.clear();
            }
            if let Some(token) = token {
                self.inputs.reset.token = token.clone();
            }
        }
    }
}

/// Where the auth forms live. The combined page switches forms in place;
/// the standalone pages navigate between routes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    InPage,
    Standalone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
}

impl AuthAction {
    /// Default error text, also used as the failure notification prefix
    pub fn fallback_error(self) -> &'static str {
        match self {
            AuthAction::Login => "Login failed",
            AuthAction::Register => "Registration failed",
            AuthAction::ForgotPassword => "Failed to send reset link",
            AuthAction::ResetPassword => "Password reset failed",
        }
    }

    pub fn failure_message(self, err: &ApiError) -> String {
        format!("{}: {}", self.fallback_error(), err)
    }
}

/// Successful result of an auth action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    LoggedIn,
    Registered,
    ResetIssued(String),
    PasswordReset,
}

impl AuthOutcome {
    pub fn success_message(&self, mode: AuthMode) -> String {
        match (self, mode) {
            (AuthOutcome::LoggedIn, _) => "Login successful! Redirecting...".to_string(),
            (AuthOutcome::Registered, AuthMode::InPage) => "Registration successful! Please sign in.".to_string(),
            (AuthOutcome::Registered, AuthMode::Standalone) => {
                "Registration successful! Redirecting to login...".to_string()
            }
            (AuthOutcome::ResetIssued(token), _) => format!("Reset token generated: {token}"),
            (AuthOutcome::PasswordReset, AuthMode::InPage) => {
                "Password reset successful! Please sign in.".to_string()
            }
            (AuthOutcome::PasswordReset, AuthMode::Standalone) => {
                "Password reset successful! Redirecting to login...".to_string()
            }
        }
    }

    pub fn follow_up(&self, mode: AuthMode, delays: &FollowUpDelays) -> FollowUp {
        let show_login = FollowUpAction::Show { form: AuthForm::Login, clear: true, token: None };
        match (self, mode) {
            (AuthOutcome::LoggedIn, _) => FollowUp {
                delay_ms: delays.login_redirect_ms,
                action: FollowUpAction::Navigate(Route::Dashboard.path().to_string()),
            },
            (AuthOutcome::Registered, AuthMode::InPage) => FollowUp {
                delay_ms: delays.register_ms,
                action: show_login,
            },
            (AuthOutcome::Registered, AuthMode::Standalone) => FollowUp {
                delay_ms: delays.register_ms,
                action: FollowUpAction::Navigate(Route::Auth.path().to_string()),
            },
            (AuthOutcome::ResetIssued(token), AuthMode::InPage) => FollowUp {
                delay_ms: delays.forgot_ms,
                action: FollowUpAction::Show {
                    form: AuthForm::Reset,
                    clear: false,
                    token: Some(token.clone()),
                },
            },
            (AuthOutcome::ResetIssued(token), AuthMode::Standalone) => FollowUp {
                delay_ms: delays.forgot_ms,
                action: FollowUpAction::Navigate(reset_password_href(token)),
            },
            (AuthOutcome::PasswordReset, AuthMode::InPage) => FollowUp {
                delay_ms: delays.reset_ms,
                action: show_login,
            },
            (AuthOutcome::PasswordReset, AuthMode::Standalone) => FollowUp {
                delay_ms: delays.reset_ms,
                action: FollowUpAction::Navigate(Route::Auth.path().to_string()),
            },
        }
    }
}

/// Delayed step after a successful auth action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUp {
    pub delay_ms: u32,
    pub action: FollowUpAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUpAction {
    Navigate(String),
    Show {
        form: AuthForm,
        clear: bool,
        token: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> AuthForms {
        let mut forms = AuthForms::default();
        forms.inputs.login.email = "a@b.com".into();
        forms.inputs.register.name = "Ann".into();
        forms.inputs.forgot.email = "a@b.com".into();
        forms.inputs.reset.new_password = "secret".into();
        forms
    }

    #[test]
    fn test_defaults_to_login() {
        let forms = AuthForms::from_query_token(None);
        assert_eq!(forms.current(), AuthForm::Login);
        assert!(forms.inputs.reset.token.is_empty());
    }

    #[test]
    fn test_query_token_opens_reset() {
        let forms = AuthForms::from_query_token(Some("tok".into()));
        assert_eq!(forms.current(), AuthForm::Reset);
        assert_eq!(forms.inputs.reset.token, "tok");
    }

    #[test]
    fn test_exactly_one_form_active() {
        let mut forms = AuthForms::default();
        for form in AuthForm::ALL {
            forms.show(form);
            let active: Vec<_> = AuthForm::ALL.into_iter().filter(|f| forms.is_active(*f)).collect();
            assert_eq!(active, vec![form]);
        }
    }

    #[test]
    fn test_clear_empties_every_form() {
        let mut forms = filled();
        forms.show(AuthForm::Register);
        forms.clear();
        assert_eq!(forms.inputs, AuthInputs::default());
        assert_eq!(forms.current(), AuthForm::Register);
    }

    #[test]
    fn test_switch_to_clears() {
        let mut forms = filled();
        forms.switch_to(AuthForm::Forgot);
        assert_eq!(forms.current(), AuthForm::Forgot);
        assert_eq!(forms.inputs, AuthInputs::default());
    }

    #[test]
    fn test_login_scenario() {
        let outcome = AuthOutcome::LoggedIn;
        assert_eq!(outcome.success_message(AuthMode::InPage), "Login successful! Redirecting...");
        let follow_up = outcome.follow_up(AuthMode::InPage, &FollowUpDelays::default());
        assert_eq!(follow_up.delay_ms, 1000);
        assert_eq!(follow_up.action, FollowUpAction::Navigate("/dashboard".into()));
    }

    #[test]
    fn test_forgot_in_page_shows_reset_with_token() {
        let outcome = AuthOutcome::ResetIssued("XYZ123".into());
        assert!(outcome.success_message(AuthMode::InPage).contains("XYZ123"));

        let follow_up = outcome.follow_up(AuthMode::InPage, &FollowUpDelays::default());
        assert_eq!(follow_up.delay_ms, 2000);

        let mut forms = AuthForms::default();
        forms.switch_to(AuthForm::Forgot);
        forms.inputs.forgot.email = "a@b.com".into();
        forms.apply(&follow_up.action);
        assert_eq!(forms.current(), AuthForm::Reset);
        assert_eq!(forms.inputs.reset.token, "XYZ123");
    }

    #[test]
    fn test_forgot_standalone_navigates_with_token() {
        let follow_up = AuthOutcome::ResetIssued("XYZ123".into())
            .follow_up(AuthMode::Standalone, &FollowUpDelays::default());
        assert_eq!(follow_up.action, FollowUpAction::Navigate("/reset-password?token=XYZ123".into()));
    }

    #[test]
    fn test_register_and_reset_return_to_login() {
        let delays = FollowUpDelays::default();
        for outcome in [AuthOutcome::Registered, AuthOutcome::PasswordReset] {
            let mut forms = filled();
            forms.show(AuthForm::Register);
            forms.apply(&outcome.follow_up(AuthMode::InPage, &delays).action);
            assert_eq!(forms.current(), AuthForm::Login);
            assert_eq!(forms.inputs, AuthInputs::default());

            assert_eq!(
                outcome.follow_up(AuthMode::Standalone, &delays).action,
                FollowUpAction::Navigate("/".into())
            );
        }
        assert_eq!(
            AuthOutcome::Registered.success_message(AuthMode::InPage),
            "Registration successful! Please sign in."
        );
    }

    #[test]
    fn test_navigate_leaves_forms_untouched() {
        let mut forms = filled();
        forms.apply(&FollowUpAction::Navigate("/".into()));
        assert_eq!(forms, filled());
    }

    #[test]
    fn test_failure_message() {
        let err = ApiError::Status { status: 401, message: "Invalid email or password".into() };
        assert_eq!(AuthAction::Login.failure_message(&err), "Login failed: Invalid email or password");
        let err = ApiError::Transport("Failed to fetch".into());
        assert_eq!(
            AuthAction::ForgotPassword.failure_message(&err),
            "Failed to send reset link: Failed to fetch"
        );
    }

    #[test]
    fn test_field_access() {
        let mut inputs = AuthInputs::default();
        inputs.set(AuthField::RegisterConfirm, "secret".into());
        inputs.set(AuthField::ResetToken, "tok".into());
        assert_eq!(inputs.register.confirm_password, "secret");
        assert_eq!(inputs.value(AuthField::ResetToken), "tok");
        assert_eq!(inputs.value(AuthField::LoginEmail), "");
    }

    #[test]
    fn test_standalone_routes() {
        assert_eq!(AuthForm::Login.route().path(), "/");
        assert_eq!(AuthForm::Forgot.route().path(), "/forgot-password");
        assert_eq!(AuthForms::showing(AuthForm::Register).current(), AuthForm::Register);
    }
}
