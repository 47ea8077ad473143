use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PaginationParams},
        chat::{DiscussionDto, MessageDto, OpenDiscussionDto, PaginatedMessagesDto, SendMessageDto},
    },
    server::{
        error::AppError,
        middleware::identity::AuthenticatedUser,
        model::{
            chat::{OpenDiscussionParams, SendMessageParams},
            pagination::PageParams,
        },
        service::chat::ChatService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedPath, ValidatedQuery},
    },
};

/// Tag for grouping chat endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

/// Find or open a discussion with another user.
///
/// Calling this again for the same pair of users and announcement, in either
/// direction, returns the existing discussion.
///
/// # Returns
/// - `201 Created` - A new discussion was opened
/// - `200 OK` - The existing discussion
/// - `400 Bad Request` - The recipient is the caller
#[utoipa::path(
    post,
    path = "/api/discussions",
    tag = CHAT_TAG,
    request_body = OpenDiscussionDto,
    responses(
        (status = 201, description = "Discussion opened", body = DiscussionDto),
        (status = 200, description = "Existing discussion", body = DiscussionDto),
        (status = 400, description = "Cannot open a discussion with yourself", body = ErrorDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn open_discussion(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<OpenDiscussionDto>,
) -> Result<impl IntoResponse, AppError> {
    let recipient_username = payload.recipient_username.trim().to_string();
    if recipient_username.is_empty() {
        return Err(AppError::validation(
            "recipient_username",
            "recipient_username must not be empty",
        ));
    }

    let params = OpenDiscussionParams {
        sender_username: caller.0,
        recipient_username,
        announcement_id: payload.announcement_id,
    };

    let (discussion, created) = ChatService::new(&state.db).open(params).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(discussion.into_dto())))
}

/// List the caller's discussions, most recently active first.
#[utoipa::path(
    get,
    path = "/api/discussions",
    tag = CHAT_TAG,
    responses(
        (status = 200, description = "Caller's discussions", body = Vec<DiscussionDto>),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_discussions(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let discussions = ChatService::new(&state.db)
        .get_for_user(caller.username())
        .await?;

    let dto: Vec<_> = discussions.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a page of a discussion's messages, oldest first.
///
/// # Access Control
/// - Discussion participants only
#[utoipa::path(
    get,
    path = "/api/discussions/{id}/messages",
    tag = CHAT_TAG,
    params(
        ("id" = i32, Path, description = "Discussion ID"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Page of messages", body = PaginatedMessagesDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 404, description = "Discussion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedPath(discussion_id): ValidatedPath<i32>,
    ValidatedQuery(pagination): ValidatedQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageParams::from_dto(pagination)?;
    let messages = ChatService::new(&state.db)
        .get_messages(&caller, discussion_id, page)
        .await?;

    Ok((StatusCode::OK, Json(messages.into_dto())))
}

/// Post a message into a discussion.
///
/// # Access Control
/// - Discussion participants only
///
/// # Returns
/// - `201 Created` - Message posted
/// - `400 Bad Request` - Empty content or more than 2000 characters
/// - `403 Forbidden` - Caller is not a participant
/// - `404 Not Found` - Unknown discussion
#[utoipa::path(
    post,
    path = "/api/discussions/{id}/messages",
    tag = CHAT_TAG,
    params(
        ("id" = i32, Path, description = "Discussion ID")
    ),
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message posted", body = MessageDto),
        (status = 400, description = "Invalid message content", body = ErrorDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 404, description = "Discussion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    ValidatedPath(discussion_id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SendMessageParams::from_dto(discussion_id, caller.username().to_string(), payload)?;
    let message = ChatService::new(&state.db)
        .send_message(&caller, params)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}
