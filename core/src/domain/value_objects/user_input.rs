//! Inputs accepted by the user service.

use lp_shared::types::pagination::PageRequest;

use crate::domain::entities::user::{Role, UserSortColumn};

/// Data for an administrator-created user; the password is never supplied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub role: Role,
}

impl CreateUser {
    /// An active `USER` with the given email and name
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            phone: None,
            is_active: true,
            role: Role::User,
        }
    }
}

/// Paginated user listing with optional search over name and email
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub page: PageRequest<UserSortColumn>,

    /// Case-insensitive substring matched against name or email
    pub search: Option<String>,
}

impl UserQuery {
    pub fn new(page: PageRequest<UserSortColumn>, search: Option<String>) -> Self {
        let search = search
            .map(|term| term.trim().to_string())
            .filter(|term| !term.is_empty());
        Self { page, search }
    }
}
