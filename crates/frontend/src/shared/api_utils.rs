//! API utilities for frontend-backend communication
//!
//! Builds API URLs from [`AppConfig`] and performs JSON GET requests,
//! mapping transport and status failures onto [`ApiError`].

use crate::shared::api_error::ApiError;
use crate::shared::config::AppConfig;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
pub fn api_base() -> String {
    AppConfig::load().api_base
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/products?sort=relevance");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a JSON body with a bearer token
pub async fn get_json_with_bearer<T>(path: &str, token: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = api_url(path);
    log::debug!("GET {} (authorized)", url);

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response).await
}

/// GET a JSON body without authorization
pub async fn get_json<T>(path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = api_url(path);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response).await
}

async fn read_json<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if let Some(error) = ApiError::from_status(response.status()) {
        return Err(error);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
