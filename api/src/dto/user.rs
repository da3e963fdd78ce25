use lp_core::domain::entities::user::{Role, UserPatch, UserSortColumn};
use lp_core::domain::value_objects::{CreateUser, UserQuery};
use lp_shared::types::pagination::{PageRequest, SortOrder, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, MIN_LIMIT};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Public view of a user
pub use lp_core::domain::value_objects::UserProfile as UserResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    /// Defaults to active
    pub is_active: Option<bool>,

    /// Defaults to `USER`
    pub role: Option<Role>,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(request: CreateUserRequest) -> Self {
        let mut input = CreateUser::new(request.email, request.name);
        input.phone = request.phone;
        if let Some(is_active) = request.is_active {
            input.is_active = is_active;
        }
        if let Some(role) = request.role {
            input.role = role;
        }
        input
    }
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    pub is_active: Option<bool>,
    pub role: Option<Role>,
}

impl UpdateUserRequest {
    /// Patch applied by an administrator
    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            email: self.email,
            name: self.name,
            phone: self.phone,
            is_active: self.is_active,
            role: self.role,
            ..Default::default()
        }
    }

    /// Patch applied by users to themselves: role and activation are ignored
    pub fn into_self_patch(self) -> UserPatch {
        UserPatch {
            is_active: None,
            role: None,
            ..self.into_patch()
        }
    }
}

/// Query string of `GET /users/paginated`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PaginationQuery {
    #[validate(range(min = 1))]
    pub page: Option<u32>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,

    pub search: Option<String>,

    /// Column name; unknown names sort by creation date
    pub sort_by: Option<String>,

    /// `ASC` or `DESC`, case-insensitive
    pub sort_order: Option<String>,
}

impl PaginationQuery {
    /// Fails with a description when `sort_order` is not a direction
    pub fn into_user_query(self) -> Result<UserQuery, String> {
        let sort_order = match self.sort_order.as_deref() {
            Some(order) => order.parse::<SortOrder>()?,
            None => SortOrder::Asc,
        };
        let sort_by = self
            .sort_by
            .as_deref()
            .map(UserSortColumn::from_param)
            .unwrap_or_default();

        let page = PageRequest::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.limit.unwrap_or(DEFAULT_LIMIT).clamp(MIN_LIMIT, MAX_LIMIT),
            sort_by,
            sort_order,
        );
        Ok(UserQuery::new(page, self.search))
    }
}
