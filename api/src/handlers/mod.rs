//! Response construction shared by all routes

pub mod error;
pub mod messages;

pub use error::{
    bad_request, handle_domain_error, json_error_handler, not_found, path_error_handler,
    query_error_handler, request_language, status_for, validation_error,
};
