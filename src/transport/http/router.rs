use crate::domain::user::User;
use crate::transport::http::handlers::{health, meta, users};
use crate::transport::http::types::{
    AppState, CreateUserRequest, ErrorResponse, HealthResponse, MessageResponse, UpdateUserRequest,
    UserListResponse, UserResponse,
};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        meta::index_handler,
        health::healthcheck_handler,
        users::list_users_handler,
        users::get_user_handler,
        users::create_user_handler,
        users::update_user_handler,
        users::delete_user_handler
    ),
    components(schemas(
        User,
        CreateUserRequest,
        UpdateUserRequest,
        UserListResponse,
        UserResponse,
        MessageResponse,
        HealthResponse,
        ErrorResponse
    ))
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Each method router carries its own 405 fallback so a known path hit with
/// an unsupported method answers with the documented JSON body; the top-level
/// fallback covers unknown paths with the 404 body.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(meta::index_handler).fallback(meta::method_not_allowed),
        )
        .route(
            "/health",
            get(health::healthcheck_handler).fallback(meta::method_not_allowed),
        )
        .route(
            "/users",
            get(users::list_users_handler)
                .post(users::create_user_handler)
                .fallback(meta::method_not_allowed),
        )
        .route(
            "/users/:id",
            get(users::get_user_handler)
                .put(users::update_user_handler)
                .delete(users::delete_user_handler)
                .fallback(meta::method_not_allowed),
        )
        .fallback(meta::endpoint_not_found)
        .with_state(app_state)
}
