//! Client-facing view of a user.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::{Role, User};

/// A user without credentials or bookkeeping timestamps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub role: Role,
    pub must_change_password: bool,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            phone: user.phone,
            is_active: user.is_active,
            role: user.role,
            must_change_password: user.must_change_password,
        }
    }
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        user.clone().into()
    }
}
