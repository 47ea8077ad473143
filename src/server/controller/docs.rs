//! OpenAPI documents, one per service.
//!
//! Each service only documents the paths it serves. The documents are exposed at
//! `GET /api/<service>/openapi.json` behind the same trust check as every other route.

use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        announcement::{
            AnnouncementDto, CreateAnnouncementDto, PaginatedAnnouncementsDto,
            UpdateAnnouncementDto,
        },
        api::ErrorDto,
        application::{ApplicationDto, CreateApplicationDto, UpdateApplicationStatusDto},
        chat::{DiscussionDto, MessageDto, OpenDiscussionDto, PaginatedMessagesDto, SendMessageDto},
        favorite::{AddFavoriteDto, FavoriteDto, FavoriteStatusDto},
        rating::{CreateRatingDto, PaginatedRatingsDto, RatingDto, RatingSummaryDto},
        user::{UpsertUserDto, UserDto},
    },
    server::config::ServiceKind,
};

/// Registers the gateway-asserted identity header as the security scheme.
struct GatewayIdentityAddon;

impl Modify for GatewayIdentityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "GatewayIdentity",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-Auth-Username",
                "Username asserted by the gateway after it verified the bearer token.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&GatewayIdentityAddon),
    info(title = "petguard users service"),
    security(("GatewayIdentity" = [])),
    paths(
        super::user::create_user,
        super::user::get_me,
        super::user::get_user,
        super::user::update_me,
        super::user::delete_me,
    ),
    components(schemas(UserDto, UpsertUserDto, ErrorDto))
)]
pub struct UsersApiDoc;

#[derive(OpenApi)]
#[openapi(
    modifiers(&GatewayIdentityAddon),
    info(title = "petguard announcements service"),
    paths(
        super::announcement::create_announcement,
        super::announcement::list_announcements,
        super::announcement::get_my_announcements,
        super::announcement::get_announcement,
        super::announcement::update_announcement,
        super::announcement::delete_announcement,
    ),
    components(schemas(
        AnnouncementDto,
        CreateAnnouncementDto,
        UpdateAnnouncementDto,
        PaginatedAnnouncementsDto,
        ErrorDto
    ))
)]
pub struct AnnouncementsApiDoc;

#[derive(OpenApi)]
#[openapi(
    modifiers(&GatewayIdentityAddon),
    info(title = "petguard applications service"),
    security(("GatewayIdentity" = [])),
    paths(
        super::application::create_application,
        super::application::get_my_applications,
        super::application::get_announcement_applications,
        super::application::update_application_status,
        super::application::delete_application,
    ),
    components(schemas(
        ApplicationDto,
        CreateApplicationDto,
        UpdateApplicationStatusDto,
        ErrorDto
    ))
)]
pub struct ApplicationsApiDoc;

#[derive(OpenApi)]
#[openapi(
    modifiers(&GatewayIdentityAddon),
    info(title = "petguard chat service"),
    security(("GatewayIdentity" = [])),
    paths(
        super::chat::open_discussion,
        super::chat::list_discussions,
        super::chat::get_messages,
        super::chat::send_message,
    ),
    components(schemas(
        DiscussionDto,
        OpenDiscussionDto,
        MessageDto,
        SendMessageDto,
        PaginatedMessagesDto,
        ErrorDto
    ))
)]
pub struct ChatApiDoc;

#[derive(OpenApi)]
#[openapi(
    modifiers(&GatewayIdentityAddon),
    info(title = "petguard favorites service"),
    security(("GatewayIdentity" = [])),
    paths(
        super::favorite::add_favorite,
        super::favorite::list_favorites,
        super::favorite::get_favorite_status,
        super::favorite::remove_favorite,
    ),
    components(schemas(FavoriteDto, AddFavoriteDto, FavoriteStatusDto, ErrorDto))
)]
pub struct FavoritesApiDoc;

#[derive(OpenApi)]
#[openapi(
    modifiers(&GatewayIdentityAddon),
    info(title = "petguard ratings service"),
    paths(
        super::rating::create_rating,
        super::rating::get_user_ratings,
        super::rating::get_user_rating_summary,
        super::rating::delete_rating,
    ),
    components(schemas(
        RatingDto,
        CreateRatingDto,
        RatingSummaryDto,
        PaginatedRatingsDto,
        ErrorDto
    ))
)]
pub struct RatingsApiDoc;

/// Builds the OpenAPI document of a service.
pub fn openapi_for(kind: ServiceKind) -> utoipa::openapi::OpenApi {
    match kind {
        ServiceKind::Users => UsersApiDoc::openapi(),
        ServiceKind::Announcements => AnnouncementsApiDoc::openapi(),
        ServiceKind::Applications => ApplicationsApiDoc::openapi(),
        ServiceKind::Chat => ChatApiDoc::openapi(),
        ServiceKind::Favorites => FavoritesApiDoc::openapi(),
        ServiceKind::Ratings => RatingsApiDoc::openapi(),
    }
}
