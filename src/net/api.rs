//! REST API helpers for the backend auth and review endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`ApiError`] values whose `Display` text is safe to
//! show in the form that triggered the call.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::ClientConfig;

use super::types::{AnalysisResult, AnalyzeRequest, LoginRequest, RegisterRequest, ReviewDetail, User, UserReviews};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const ANALYZE_ENDPOINT: &str = "/api/analyze";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Pull a human-readable `detail` out of a backend error body.
///
/// Validation errors carry a list of objects instead of a string; those are
/// reduced to their first `msg`.
#[cfg(any(test, feature = "hydrate"))]
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?;
    let text = match detail {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items.first()?.get("msg")?.as_str()?.to_owned(),
        _ => return None,
    };
    let text = text.trim();
    if text.is_empty() { None } else { Some(text.to_owned()) }
}

#[cfg(any(test, feature = "hydrate"))]
fn user_reviews_endpoint(user_id: i64) -> String {
    format!("/api/user/{user_id}/reviews")
}

#[cfg(any(test, feature = "hydrate"))]
fn review_endpoint(review_id: u64) -> String {
    format!("/api/reviews/{review_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str, fallback: &str) -> ApiError {
    ApiError::Status {
        status,
        message: error_detail(body).unwrap_or_else(|| fallback.to_owned()),
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(
    config: &ClientConfig,
    path: &str,
    payload: &T,
    fallback: &str,
) -> Result<gloo_net::http::Response, ApiError> {
    let resp = gloo_net::http::Request::post(&config.endpoint(path))
        .credentials(web_sys::RequestCredentials::Include)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        log::warn!("{path} failed with status {status}");
        return Err(status_error(status, &body, fallback));
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(config: &ClientConfig, path: &str, fallback: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(&config.endpoint(path))
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        log::warn!("{path} failed with status {status}");
        return Err(status_error(status, &body, fallback));
    }
    decode_body(&body)
}

/// Exchange credentials for a profile via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error if the request fails, the backend rejects the
/// credentials, or the response body is not a [`User`].
pub async fn login(config: &ClientConfig, request: &LoginRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(config, LOGIN_ENDPOINT, request, "Login failed").await?;
        resp.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// The caller still has to sign in afterwards; registration does not start a
/// session.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the account.
pub async fn register(config: &ClientConfig, request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(config, REGISTER_ENDPOINT, request, "Registration failed").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// Submit a snippet for analysis via `POST /api/analyze`.
///
/// # Errors
///
/// Returns an error if the request fails, the backend rejects the snippet,
/// or the response body is not an [`AnalysisResult`].
pub async fn analyze_code(config: &ClientConfig, request: &AnalyzeRequest) -> Result<AnalysisResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(config, ANALYZE_ENDPOINT, request, "Analysis failed").await?;
        resp.json::<AnalysisResult>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a user's review stats and recent reviews from
/// `GET /api/user/{user_id}/reviews`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not [`UserReviews`].
pub async fn fetch_user_reviews(config: &ClientConfig, user_id: i64) -> Result<UserReviews, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(config, &user_reviews_endpoint(user_id), "Failed to load reviews").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, user_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one stored review from `GET /api/reviews/{review_id}`.
///
/// # Errors
///
/// Returns an error if the request fails, the review does not exist, or the
/// body is not a [`ReviewDetail`].
pub async fn fetch_review(config: &ClientConfig, review_id: u64) -> Result<ReviewDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(config, &review_endpoint(review_id), "Review not found").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, review_id);
        Err(ApiError::Unavailable)
    }
}
