//! Remote API Client
//!
//! Fetch-and-normalize layer over the two upstream Star Wars services,
//! organized as a category catalog plus shared request plumbing.

pub mod catalog;
mod resources;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use resources::*;

/// Everything that can go wrong between a page and the remote API.
///
/// Views never match on these: they render `to_string()` and offer a
/// manual retry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error, status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("invalid data structure received from API")]
    BadEnvelope,
    #[error("{0} not found")]
    NotFound(String),
}

/// Shared GET helper: one request, status check, JSON decode.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
