//! REST client for the customers collection.

use contracts::api::messages::ApiMessage;
use contracts::domain::customer::aggregate::{Customer, CustomerDraft};
use gloo_net::http::{Request, Response};
use thiserror::Error;

use crate::shared::api_utils::customers_endpoint;

/// What went wrong talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, serialization).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response body did not decode into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

/// Fetch the whole customer collection.
pub async fn fetch_customers() -> Result<Vec<Customer>, ApiError> {
    let response = Request::get(&customers_endpoint())
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    ensure_ok(response)?
        .json::<Vec<Customer>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch a single customer by identifier.
pub async fn fetch_customer(id: i64) -> Result<Customer, ApiError> {
    let response = Request::get(&format!("{}/{}", customers_endpoint(), id))
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    ensure_ok(response)?
        .json::<Customer>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create a new customer from the draft.
pub async fn create_customer(draft: &CustomerDraft) -> Result<ApiMessage, ApiError> {
    let response = Request::post(&customers_endpoint())
        .json(draft)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    ensure_ok(response)?
        .json::<ApiMessage>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Update an existing customer; the draft carries the identifier.
pub async fn update_customer(draft: &CustomerDraft) -> Result<ApiMessage, ApiError> {
    let response = Request::put(&customers_endpoint())
        .json(draft)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    ensure_ok(response)?
        .json::<ApiMessage>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Delete a customer by identifier.
pub async fn delete_customer(id: i64) -> Result<ApiMessage, ApiError> {
    let response = Request::delete(&format!("{}/{}", customers_endpoint(), id))
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    ensure_ok(response)?
        .json::<ApiMessage>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
