use crate::app::user_service::UserService;
use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
}

/// Pagination query parameters for the list endpoint.
#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// 1-based page number (default 1).
    pub page: Option<u32>,
    /// Records per page (default 10).
    pub limit: Option<u32>,
}

/// Body for `POST /users`. Both fields are required and must be non-empty;
/// they are optional here so the presence check can answer with the
/// documented validation message instead of a deserialization error.
#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Body for `PUT /users/{id}`. Absent fields are left unchanged.
#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct UserListResponse {
    pub data: Vec<User>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct UserResponse {
    pub data: User,
}

/// Mutation result: a human-readable confirmation plus the affected record.
#[derive(Serialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    pub data: User,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Every failure body carries exactly one "error" field.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
