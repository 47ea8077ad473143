use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{UpsertUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::identity::AuthenticatedUser,
        model::user::UpsertUserParams,
        service::user::UserService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedPath},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// Create the caller's profile.
///
/// The username is taken from the identity asserted by the gateway, never from the body.
///
/// # Returns
/// - `201 Created` - Profile created
/// - `400 Bad Request` - Invalid profile fields
/// - `401 Unauthorized` - No caller identity
/// - `409 Conflict` - The caller already has a profile
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = UpsertUserDto,
    responses(
        (status = 201, description = "Profile created", body = UserDto),
        (status = 400, description = "Invalid profile fields", body = ErrorDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 409, description = "Profile already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<UpsertUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpsertUserParams::from_dto(caller.0, payload)?;
    let user = UserService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get the caller's profile.
///
/// # Returns
/// - `200 OK` - The caller's profile
/// - `401 Unauthorized` - No caller identity
/// - `404 Not Found` - The caller has not created a profile yet
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Caller's profile", body = UserDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get(caller.username()).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get a profile by username.
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    tag = USER_TAG,
    params(
        ("username" = String, Path, description = "Username of the profile")
    ),
    responses(
        (status = 200, description = "Profile found", body = UserDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    ValidatedPath(username): ValidatedPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get(&username).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Replace the caller's profile.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Invalid profile fields
/// - `404 Not Found` - The caller has no profile to replace
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpsertUserDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Invalid profile fields", body = ErrorDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<UpsertUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpsertUserParams::from_dto(caller.0, payload)?;
    let user = UserService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete the caller's profile.
#[utoipa::path(
    delete,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_me(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(caller.username()).await?;

    Ok(StatusCode::NO_CONTENT)
}
