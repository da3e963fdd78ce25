//! Type definitions module
//!
//! - `language` - Internationalization and language types
//! - `pagination` - Page requests and paginated results
//! - `response` - Confirmation and health check bodies

pub mod language;
pub mod pagination;
pub mod response;

pub use language::Language;
pub use pagination::{PageRequest, PaginatedResult, PaginationMeta, SortOrder};
pub use response::{HealthResponse, HealthStatus, MessageResponse};
