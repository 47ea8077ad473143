use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        application::{ApplicationDto, CreateApplicationDto, UpdateApplicationStatusDto},
    },
    server::{
        error::AppError,
        middleware::identity::AuthenticatedUser,
        model::application::{ApplicationDecision, CreateApplicationParams},
        service::application::ApplicationService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedPath},
    },
};

/// Tag for grouping application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "applications";

/// Apply to look after an announcement's pets.
///
/// # Returns
/// - `201 Created` - Application sent
/// - `400 Bad Request` - Caller owns the announcement, or it is closed
/// - `404 Not Found` - Unknown announcement
/// - `409 Conflict` - Caller already applied
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application sent", body = ApplicationDto),
        (status = 400, description = "Announcement cannot receive this application", body = ErrorDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 409, description = "Already applied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateApplicationParams::from_dto(caller.0, payload);
    let application = ApplicationService::new(&state.db).apply(params).await?;

    Ok((StatusCode::CREATED, Json(application.into_dto())))
}

/// List the caller's applications, newest first.
#[utoipa::path(
    get,
    path = "/api/applications/mine",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "Caller's applications", body = Vec<ApplicationDto>),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_applications(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let applications = ApplicationService::new(&state.db)
        .get_by_guardian(caller.username())
        .await?;

    let dto: Vec<_> = applications.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// List the applications an announcement received, oldest first.
///
/// # Access Control
/// - Announcement owner only
#[utoipa::path(
    get,
    path = "/api/applications/announcement/{id}",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Announcement ID")
    ),
    responses(
        (status = 200, description = "Applications for the announcement", body = Vec<ApplicationDto>),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the announcement", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_announcement_applications(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedPath(announcement_id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let applications = ApplicationService::new(&state.db)
        .get_by_announcement(&caller, announcement_id)
        .await?;

    let dto: Vec<_> = applications.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Accept or refuse an application.
///
/// # Access Control
/// - Announcement owner only
///
/// # Returns
/// - `200 OK` - Updated application
/// - `400 Bad Request` - Status is not `Accepted` or `Refused`
/// - `403 Forbidden` - Caller does not own the announcement
/// - `404 Not Found` - Unknown application
/// - `409 Conflict` - Another application was already accepted
#[utoipa::path(
    put,
    path = "/api/applications/{id}/status",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationStatusDto,
    responses(
        (status = 200, description = "Application updated", body = ApplicationDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the announcement", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Another application was already accepted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_application_status(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateApplicationStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let decision = ApplicationDecision::from_dto(payload)?;
    let application = ApplicationService::new(&state.db)
        .decide(&caller, id, decision)
        .await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

/// Withdraw an application.
///
/// # Access Control
/// - The guardian who sent it only
#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 204, description = "Application withdrawn"),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 403, description = "Caller did not send this application", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_application(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    ApplicationService::new(&state.db)
        .withdraw(&caller, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
