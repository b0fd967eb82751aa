//! CRUD handlers for the user collection.

use crate::app::user_service::ServiceError;
use crate::domain::user::{NewUser, UserPatch};
use crate::transport::http::handlers::meta;
use crate::transport::http::types::{
    AppState, CreateUserRequest, ErrorResponse, ListUsersQuery, MessageResponse, UpdateUserRequest,
    UserListResponse, UserResponse,
};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// A non-integer `{id}` segment means the route does not really match, so it
/// answers like any other unknown endpoint.
macro_rules! require_id {
    ($id:expr) => {
        match $id {
            Ok(Path(id)) => id,
            Err(_) => return meta::endpoint_not_found().await.into_response(),
        }
    };
}

#[utoipa::path(
    get,
    path = "/users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "One page of the collection", body = UserListResponse)
    )
)]
pub async fn list_users_handler(
    State(state): State<AppState>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> Response {
    // Unparseable pagination values fall back to the defaults rather than
    // failing the request.
    let Query(query) = query.unwrap_or_else(|_| {
        Query(ListUsersQuery {
            page: None,
            limit: None,
        })
    });
    match state.users.list(query.page, query.limit).await {
        Ok(page) => Json(UserListResponse {
            data: page.users,
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The matching record", body = UserResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    )
)]
pub async fn get_user_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let id = require_id!(id);
    match state.users.get(id).await {
        Ok(user) => Json(UserResponse { data: user }).into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Missing fields or duplicate email", body = ErrorResponse)
    )
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Response {
    // A missing or malformed body fails the same presence check as missing
    // fields.
    let Ok(Json(body)) = body else {
        return ServiceError::MissingFields.into_response();
    };
    let new_user = NewUser {
        name: body.name.unwrap_or_default(),
        email: body.email.unwrap_or_default(),
    };
    match state.users.create(new_user).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "User created successfully".to_string(),
                data: user,
            }),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "No data provided or duplicate email", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    )
)]
pub async fn update_user_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Response {
    let id = require_id!(id);
    // A missing or malformed body counts as an empty patch; the service still
    // checks record existence first, so an unknown id answers 404.
    let patch = body.ok().map(|Json(body)| UserPatch {
        name: body.name,
        email: body.email,
    });
    match state.users.update(id, patch).await {
        Ok(user) => Json(MessageResponse {
            message: "User updated successfully".to_string(),
            data: user,
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    )
)]
pub async fn delete_user_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let id = require_id!(id);
    match state.users.delete(id).await {
        Ok(user) => Json(MessageResponse {
            message: "User deleted successfully".to_string(),
            data: user,
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}
