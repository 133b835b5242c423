//! Typed client for the kiosk backend.
//!
//! All endpoints live under a fixed base origin and speak JSON. Responses are
//! read as text and decoded with `serde_json` so decode failures carry a
//! useful error instead of an opaque JS value.

use mixkiosk_core::catalog::{Cocktail, Ingredient, IngredientStatus, RefillOutcome};
use mixkiosk_core::order::{OrderConfirmation, OrderRequest};
use mixkiosk_core::pin::{PinCheckRequest, PinCheckResponse, PinPurpose};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::dom;

/// Backend origin the kiosk talks to.
pub const API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

fn request_error(err: &wasm_bindgen::JsValue) -> ApiError {
    ApiError::Request(dom::js_error_message(err))
}

#[allow(clippy::future_not_send)]
async fn decode_response<T: DeserializeOwned>(
    response: web_sys::Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    let text = dom::response_text(&response)
        .await
        .map_err(|err| request_error(&err))?;
    Ok(serde_json::from_str(&text)?)
}

#[allow(clippy::future_not_send)]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = dom::fetch_response(&api_url(path))
        .await
        .map_err(|err| request_error(&err))?;
    decode_response(response).await
}

#[allow(clippy::future_not_send)]
async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let json_body = serde_json::to_string(body)?;
    let response = dom::post_json_response(&api_url(path), &json_body)
        .await
        .map_err(|err| request_error(&err))?;
    decode_response(response).await
}

/// Fetch the full drink list.
///
/// # Errors
/// Returns an error on transport failure, non-2xx status, or a malformed body.
#[allow(clippy::future_not_send)]
pub async fn load_cocktails() -> Result<Vec<Cocktail>, ApiError> {
    get_json("/api/cocktails").await
}

/// Fetch the ingredient rows for one drink.
///
/// # Errors
/// Returns an error on transport failure, non-2xx status, or a malformed body.
#[allow(clippy::future_not_send)]
pub async fn load_ingredients(cocktail_id: u32) -> Result<Vec<Ingredient>, ApiError> {
    get_json(&format!("/api/cocktails/{cocktail_id}/ingredients")).await
}

/// Fetch the stock level of every ingredient (admin view).
///
/// # Errors
/// Returns an error on transport failure, non-2xx status, or a malformed body.
#[allow(clippy::future_not_send)]
pub async fn load_ingredient_levels() -> Result<Vec<IngredientStatus>, ApiError> {
    get_json("/api/ingredients").await
}

/// Verify a PIN against the backend for the given purpose.
///
/// # Errors
/// Returns an error on transport failure, non-2xx status, or a malformed body.
/// A wrong PIN is not an error; it comes back as `Ok(false)`.
#[allow(clippy::future_not_send)]
pub async fn check_pin(pin: &str, purpose: PinPurpose) -> Result<bool, ApiError> {
    let body = PinCheckRequest {
        pin: pin.to_string(),
        purpose,
    };
    let response: PinCheckResponse = post_json("/api/check-pin", &body).await?;
    Ok(response.valid)
}

/// Order a drink.
///
/// # Errors
/// Returns an error on transport failure, non-2xx status, or a malformed body.
#[allow(clippy::future_not_send)]
pub async fn place_order(cocktail_id: u32) -> Result<OrderConfirmation, ApiError> {
    post_json("/api/order", &OrderRequest { cocktail_id }).await
}

#[derive(Clone, Copy, Debug, Serialize)]
struct RefillRequest {
    ingredient_id: u32,
    amount: f64,
}

#[derive(Clone, Copy, Debug, Serialize)]
struct RefillAllRequest {
    level: f64,
}

/// Top up a single ingredient by `amount` milliliters.
///
/// # Errors
/// Returns an error on transport failure, non-2xx status, or a malformed body.
#[allow(clippy::future_not_send)]
pub async fn refill_ingredient(ingredient_id: u32, amount: f64) -> Result<RefillOutcome, ApiError> {
    post_json(
        "/api/ingredients/refill",
        &RefillRequest {
            ingredient_id,
            amount,
        },
    )
    .await
}

/// Set every ingredient to `level` milliliters.
///
/// # Errors
/// Returns an error on transport failure, non-2xx status, or a malformed body.
#[allow(clippy::future_not_send)]
pub async fn refill_all(level: f64) -> Result<RefillOutcome, ApiError> {
    post_json("/api/ingredients/refill_all", &RefillAllRequest { level }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_urls_are_rooted_at_the_backend_origin() {
        assert_eq!(api_url("/api/cocktails"), "http://127.0.0.1:5000/api/cocktails");
        assert_eq!(
            api_url("/api/cocktails/7/ingredients"),
            "http://127.0.0.1:5000/api/cocktails/7/ingredients"
        );
    }
}
