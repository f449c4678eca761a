//! API Command Wrappers
//!
//! Frontend bindings to the backend HTTP API, organized by domain. Every
//! command returns `Result<T, ApiError>`; reporting the error is left to the
//! event handler that issued it.

mod auth;
mod campaign;

use campaign_core::response::{decode_response, ensure_success};
use campaign_core::{ApiError, ClientConfig};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, Response};

// Re-export all public items
pub use auth::*;
pub use campaign::*;

/// Status and body text of a completed request
struct HttpReply {
    status: u16,
    body: String,
}

/// Issue one request with the session cookie attached.
async fn send(config: &ClientConfig, method: &str, path: &str, body: Option<String>) -> Result<HttpReply, ApiError> {
    let url = config.endpoint(path);
    log::debug!("{} {}", method, url);

    let init = RequestInit::new();
    init.set_method(method);
    init.set_credentials(RequestCredentials::SameOrigin);
    if let Some(body) = body {
        let headers = Headers::new().map_err(js_error)?;
        headers.set("Content-Type", "application/json").map_err(js_error)?;
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(&url, &init).map_err(js_error)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    Ok(HttpReply {
        status: response.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

async fn get_json<T: DeserializeOwned>(config: &ClientConfig, path: &str, fallback: &str) -> Result<T, ApiError> {
    let reply = send(config, "GET", path, None).await?;
    decode_response(reply.status, &reply.body, fallback)
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    config: &ClientConfig,
    method: &str,
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<T, ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Transport(format!("could not encode request: {}", e)))?;
    let reply = send(config, method, path, Some(json)).await?;
    decode_response(reply.status, &reply.body, fallback)
}

/// Request whose response body is ignored
async fn send_empty(config: &ClientConfig, method: &str, path: &str, fallback: &str) -> Result<(), ApiError> {
    let reply = send(config, method, path, None).await?;
    ensure_success(reply.status, &reply.body, fallback)
}

/// Message of a JS exception, or its debug form for non-Error values
fn js_error(value: JsValue) -> ApiError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Transport(message)
}
