//! User entity representing an account in the system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authorization role of a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Database and claim representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login email, unique across all rows including soft-deleted ones
    pub email: String,

    pub name: String,

    pub phone: Option<String>,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Disabled accounts cannot log in
    pub is_active: bool,

    pub role: Role,

    /// Set when the password was issued by an administrator
    pub must_change_password: bool,

    /// Soft-delete marker
    pub deleted_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active `USER` account
    pub fn new(email: impl Into<String>, name: impl Into<String>, password_hash: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            name: name.into(),
            phone: None,
            password_hash: password_hash.into(),
            is_active: true,
            role: Role::User,
            must_change_password: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Canonical form used for storage and lookups
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Marks the user as deleted without removing the row
    pub fn soft_delete(&mut self) {
        let now = Utc::now();
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    /// Applies the provided fields, ignoring the rest
    pub fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(password_hash) = patch.password_hash {
            self.password_hash = password_hash;
        }
        if let Some(must_change_password) = patch.must_change_password {
            self.must_change_password = must_change_password;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update of a user. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
    pub role: Option<Role>,
    pub password_hash: Option<String>,
    pub must_change_password: Option<bool>,
}

impl UserPatch {
    /// A patch that replaces the password and sets the change-required flag
    pub fn password(password_hash: impl Into<String>, must_change_password: bool) -> Self {
        Self {
            password_hash: Some(password_hash.into()),
            must_change_password: Some(must_change_password),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Columns a user listing may be sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UserSortColumn {
    #[default]
    Id,
    Name,
    Email,
    IsActive,
    Role,
    CreatedAt,
}

impl UserSortColumn {
    /// Resolves a query parameter; unknown columns fall back to `CreatedAt`
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "id" => UserSortColumn::Id,
            "name" => UserSortColumn::Name,
            "email" => UserSortColumn::Email,
            "is_active" => UserSortColumn::IsActive,
            "role" => UserSortColumn::Role,
            _ => UserSortColumn::CreatedAt,
        }
    }

    pub fn as_column(&self) -> &'static str {
        match self {
            UserSortColumn::Id => "id",
            UserSortColumn::Name => "name",
            UserSortColumn::Email => "email",
            UserSortColumn::IsActive => "is_active",
            UserSortColumn::Role => "role",
            UserSortColumn::CreatedAt => "created_at",
        }
    }
}
