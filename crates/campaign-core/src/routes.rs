//! Client Routes
//!
//! Each page of the client is served at its own path; the app picks the page
//! from `location.pathname` on load.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;

/// Characters left as-is in one path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Combined sign-in page with in-page register/forgot/reset forms
    Auth,
    Register,
    ForgotPassword,
    ResetPassword,
    Dashboard,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/index.html" => Route::Auth,
            "/register" => Route::Register,
            "/forgot-password" => Route::ForgotPassword,
            "/reset-password" => Route::ResetPassword,
            "/dashboard" => Route::Dashboard,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Auth | Route::NotFound => "/",
            Route::Register => "/register",
            Route::ForgotPassword => "/forgot-password",
            Route::ResetPassword => "/reset-password",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// `/reset-password?token=...` with the token form-encoded
pub fn reset_password_href(token: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("token", token)
        .finish();
    format!("{}?{}", Route::ResetPassword.path(), query)
}

/// Value of the `token` parameter in a `location.search` string.
/// Empty values count as absent.
pub fn token_from_query(search: &str) -> Option<String> {
    form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(k, _)| k == "token")
        .map(|(_, v)| v.into_owned())
        .filter(|t| !t.is_empty())
}

/// `/api/campaigns/{id}` with the id escaped as one path segment
pub fn campaign_api_path(campaign_id: &str) -> String {
    format!("/api/campaigns/{}", utf8_percent_encode(campaign_id, PATH_SEGMENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Auth);
        assert_eq!(Route::from_path(""), Route::Auth);
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_path("/reset-password"), Route::ResetPassword);
        assert_eq!(Route::from_path("/forgot-password"), Route::ForgotPassword);
        assert_eq!(Route::from_path("/register"), Route::Register);
        assert_eq!(Route::from_path("/admin"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trips_for_pages() {
        for route in [Route::Register, Route::ForgotPassword, Route::ResetPassword, Route::Dashboard] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_reset_href_encodes_token() {
        assert_eq!(reset_password_href("XYZ123"), "/reset-password?token=XYZ123");
        assert_eq!(reset_password_href("a b&c=d"), "/reset-password?token=a+b%26c%3Dd");
    }

    #[test]
    fn test_token_from_query() {
        assert_eq!(token_from_query("?token=abc123"), Some("abc123".into()));
        assert_eq!(token_from_query("?x=1&token=a%20b%26c"), Some("a b&c".into()));
        assert_eq!(token_from_query("?token="), None);
        assert_eq!(token_from_query("?tokens=zzz"), None);
        assert_eq!(token_from_query(""), None);
    }

    #[test]
    fn test_token_from_query_decodes_plus_as_space() {
        assert_eq!(token_from_query("token=a+b"), Some("a b".into()));
    }

    #[test]
    fn test_campaign_api_path_escapes_id() {
        assert_eq!(campaign_api_path("42"), "/api/campaigns/42");
        assert_eq!(campaign_api_path("a/b?c"), "/api/campaigns/a%2Fb%3Fc");
    }

    #[test]
    fn test_token_survives_href_round_trip() {
        let token = "5f/a+b=c";
        let href = reset_password_href(token);
        let (_, search) = href.split_once('?').unwrap();
        assert_eq!(token_from_query(search), Some(token.to_string()));
    }
}
