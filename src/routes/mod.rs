//! API route handlers
//!
//! - `health`: liveness probe
//! - `coffees`: CRUD over the coffee collection

pub mod coffees;
pub mod health;

use crate::error::ServerError;

/// Root acknowledgement
///
/// A bare text body so external uptime checks stay trivial.
pub async fn root() -> &'static str {
    "Coffee server is getting hotter."
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
