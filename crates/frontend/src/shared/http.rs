//! Thin JSON wrappers over `gloo_net` used by every `api.rs` module.

use super::api_error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

fn ensure_ok(response: &Response, url: &str) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status(),
            url: url.to_string(),
        })
    }
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(&response, url)?;

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(&response, url)?;

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// DELETE; any 2xx counts as success and the body is ignored.
pub async fn delete(url: &str) -> Result<(), ApiError> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(&response, url)
}
