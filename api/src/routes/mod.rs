//! HTTP route handlers

pub mod auth;
pub mod health;
pub mod users;

use actix_web::{HttpRequest, HttpResponse};

use crate::handlers::{self, request_language};

/// Fallback for unmatched paths
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    handlers::not_found(request_language(&req))
}
