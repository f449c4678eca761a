//! API Response Decoding
//!
//! Turns a completed HTTP exchange (status + body text) into a typed result.
//! Non-2xx responses carry the server's `{"error": "..."}` message when there
//! is one, otherwise the caller-supplied default.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a JSON body of type `T`, or the error it describes.
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
    fallback: &str,
) -> Result<T, ApiError> {
    ensure_success(status, body, fallback)?;
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Check the status of a call whose body is not needed.
pub fn ensure_success(status: u16, body: &str, fallback: &str) -> Result<(), ApiError> {
    if is_success(status) {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string());
    Err(ApiError::Status { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Campaign, ForgotPasswordResponse, LoginResponse};

    #[test]
    fn test_login_accepts_any_json_object() {
        let login: LoginResponse = decode_response(200, r#"{"token":"t"}"#, "Login failed").unwrap();
        assert_eq!(login, LoginResponse::default());
    }

    #[test]
    fn test_server_error_message_is_used() {
        let err = decode_response::<LoginResponse>(401, r#"{"error":"Invalid email or password"}"#, "Login failed")
            .unwrap_err();
        assert_eq!(err, ApiError::Status { status: 401, message: "Invalid email or password".into() });
        assert_eq!(err.to_string(), "Invalid email or password");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_fallback_when_body_has_no_error() {
        for body in ["", "<html>Bad Gateway</html>", "{}", r#"{"error":""}"#, r#"{"error":null}"#] {
            let err = ensure_success(502, body, "Failed to delete campaign").unwrap_err();
            assert_eq!(err.to_string(), "Failed to delete campaign", "{body}");
        }
    }

    #[test]
    fn test_forgot_password_token() {
        let resp: ForgotPasswordResponse =
            decode_response(200, r#"{"message":"ok","reset_token":"XYZ123"}"#, "Failed to send reset link").unwrap();
        assert_eq!(resp.reset_token, "XYZ123");
    }

    #[test]
    fn test_success_with_wrong_shape_is_decode_error() {
        let err = decode_response::<Vec<Campaign>>(200, r#"{"campaigns":[]}"#, "Failed to fetch campaigns").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_no_content_is_ok() {
        assert_eq!(ensure_success(204, "", "Failed to delete campaign"), Ok(()));
    }
}
