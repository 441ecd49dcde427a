//! REST API handlers for the sales flow

use super::{
    session::{resolve_customer_id, with_session},
    state::SharedState,
};
use crate::{error::SalesError, reservation::OfferAcceptanceRequest};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for the sales operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart/:product_id", post(add_to_cart))
        .route("/current-offer", get(current_offer))
        .route("/accept-offer", post(accept_offer))
        .route("/current-customer", get(current_customer))
}

/// Endpoint: POST /cart/:product_id
/// Appends the product to the session customer's cart.
async fn add_to_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(product_id): Path<String>,
) -> Result<Response, SalesError> {
    let (customer_id, is_new_session) = resolve_customer_id(&headers);

    state.sales.add_to_cart(&customer_id, &product_id)?;

    Ok(with_session(
        StatusCode::OK.into_response(),
        &customer_id,
        is_new_session,
    ))
}

/// Endpoint: GET /current-offer
/// Prices the session customer's cart.
async fn current_offer(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Response, SalesError> {
    let (customer_id, is_new_session) = resolve_customer_id(&headers);

    let offer = state.sales.get_current_offer(&customer_id)?;

    Ok(with_session(
        Json(offer).into_response(),
        &customer_id,
        is_new_session,
    ))
}

/// Endpoint: POST /accept-offer
/// Accepts the current offer and returns where to pay.
async fn accept_offer(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Json<OfferAcceptanceRequest>, JsonRejection>,
) -> Result<Response, SalesError> {
    let (customer_id, is_new_session) = resolve_customer_id(&headers);
    let Json(request) = body.map_err(|e| SalesError::InvalidRequest(e.body_text()))?;

    let details = state.sales.accept_offer(&customer_id, request)?;

    Ok(with_session(
        Json(details).into_response(),
        &customer_id,
        is_new_session,
    ))
}

/// Endpoint: GET /current-customer
async fn current_customer(headers: HeaderMap) -> Response {
    let (customer_id, is_new_session) = resolve_customer_id(&headers);
    with_session(customer_id.clone().into_response(), &customer_id, is_new_session)
}
