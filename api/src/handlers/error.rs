//! Maps domain errors and extractor failures to JSON error responses
//!
//! Every error body has the shape of [`ErrorResponse`]: a stable code, a
//! message localized from `Accept-Language` and a timestamp.

use std::collections::BTreeMap;

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::{header, StatusCode};
use actix_web::{Error, HttpRequest, HttpResponse};
use lp_core::errors::{DomainError, ErrorKind};
use lp_shared::{error_codes, ErrorResponse, Language};
use validator::ValidationErrors;

use super::messages;

/// Language preferred by the client, English when unspecified
pub fn request_language(req: &HttpRequest) -> Language {
    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(Language::from_accept_language)
        .unwrap_or_default()
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn handle_domain_error(error: DomainError, language: Language) -> HttpResponse {
    let kind = error.kind();
    match kind {
        ErrorKind::Internal => log::error!("Request failed: {}", error),
        _ => log::debug!("Request rejected: {}", error),
    }

    let body = ErrorResponse::new(error.code(), messages::error_message(&error, language));
    HttpResponse::build(status_for(kind)).json(body)
}

/// 400 for a request body that parsed but failed validation
pub fn validation_error(errors: &ValidationErrors, language: Language) -> HttpResponse {
    let fields: BTreeMap<&'static str, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| (field, errors.iter().map(|e| e.code.to_string()).collect()))
        .collect();

    let message = if fields.contains_key("new_password") {
        messages::password_min_length(language)
    } else {
        messages::invalid_request(language)
    };

    let body = ErrorResponse::new(error_codes::VALIDATION_ERROR, message).add_detail("fields", fields);
    HttpResponse::BadRequest().json(body)
}

/// 400 for input that could not be parsed
pub fn bad_request(reason: impl std::fmt::Display, language: Language) -> HttpResponse {
    let body = ErrorResponse::new(error_codes::BAD_REQUEST, messages::invalid_request(language))
        .add_detail("reason", reason.to_string());
    HttpResponse::BadRequest().json(body)
}

pub fn not_found(language: Language) -> HttpResponse {
    let body = ErrorResponse::new(error_codes::NOT_FOUND, messages::resource_not_found(language));
    HttpResponse::NotFound().json(body)
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    let response = bad_request(&err, request_language(req));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    let response = bad_request(&err, request_language(req));
    InternalError::from_response(err, response).into()
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    let response = bad_request(&err, request_language(req));
    InternalError::from_response(err, response).into()
}
