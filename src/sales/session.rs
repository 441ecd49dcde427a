//! Customer session resolution.
//!
//! The customer is identified by the `sales_session` cookie. Requests without
//! one are given a fresh customer id, which the response hands back as a cookie.

use axum::{
    http::{header, HeaderMap, HeaderValue},
    response::Response,
};
use uuid::Uuid;

/// Name of the cookie carrying the customer id
pub const SESSION_COOKIE: &str = "sales_session";

/// Returns the customer id from the session cookie, or a new one.
///
/// The flag is `true` when the id was just created and still has to be sent
/// back to the client.
pub fn resolve_customer_id(headers: &HeaderMap) -> (String, bool) {
    match session_from_cookies(headers) {
        Some(customer_id) => (customer_id, false),
        None => (Uuid::new_v4().simple().to_string(), true),
    }
}

fn session_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// Attaches the session cookie to `response` for a newly created session.
pub fn with_session(mut response: Response, customer_id: &str, is_new_session: bool) -> Response {
    if is_new_session {
        let cookie = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, customer_id);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}
