//! Route tables of the backend services.
//!
//! Every service mounts its routes under its full `/api/<prefix>` path so the
//! gateway can forward requests without rewriting them.

use axum::{
    http::HeaderValue,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::server::{
    config::ServiceKind,
    controller::{announcement, application, chat, docs::openapi_for, favorite, rating, user},
    middleware::{cors::cors_layer, trust::require_gateway_secret},
    state::AppState,
};

/// Routes served by one service, without middleware or state.
pub fn router(kind: ServiceKind) -> Router<AppState> {
    let routes = match kind {
        ServiceKind::Users => Router::new()
            .route("/api/users", post(user::create_user))
            .route(
                "/api/users/me",
                get(user::get_me)
                    .put(user::update_me)
                    .delete(user::delete_me),
            )
            .route("/api/users/{username}", get(user::get_user)),
        ServiceKind::Announcements => Router::new()
            .route(
                "/api/announcements",
                get(announcement::list_announcements).post(announcement::create_announcement),
            )
            .route(
                "/api/announcements/mine",
                get(announcement::get_my_announcements),
            )
            .route(
                "/api/announcements/{id}",
                get(announcement::get_announcement)
                    .put(announcement::update_announcement)
                    .delete(announcement::delete_announcement),
            ),
        ServiceKind::Applications => Router::new()
            .route("/api/applications", post(application::create_application))
            .route(
                "/api/applications/mine",
                get(application::get_my_applications),
            )
            .route(
                "/api/applications/announcement/{id}",
                get(application::get_announcement_applications),
            )
            .route(
                "/api/applications/{id}/status",
                put(application::update_application_status),
            )
            .route(
                "/api/applications/{id}",
                delete(application::delete_application),
            ),
        ServiceKind::Chat => Router::new()
            .route(
                "/api/discussions",
                get(chat::list_discussions).post(chat::open_discussion),
            )
            .route(
                "/api/discussions/{id}/messages",
                get(chat::get_messages).post(chat::send_message),
            ),
        ServiceKind::Favorites => Router::new()
            .route(
                "/api/favorites",
                get(favorite::list_favorites).post(favorite::add_favorite),
            )
            .route(
                "/api/favorites/{announcement_id}",
                get(favorite::get_favorite_status).delete(favorite::remove_favorite),
            ),
        ServiceKind::Ratings => Router::new()
            .route("/api/ratings", post(rating::create_rating))
            .route("/api/ratings/user/{username}", get(rating::get_user_ratings))
            .route(
                "/api/ratings/user/{username}/summary",
                get(rating::get_user_rating_summary),
            )
            .route("/api/ratings/{id}", delete(rating::delete_rating)),
    };

    routes.route(
        &format!("{}/openapi.json", kind.path_prefix()),
        get(move || async move { Json(openapi_for(kind)) }),
    )
}

/// Builds a ready-to-serve service application.
///
/// The trust check wraps every route and the fallback, so unknown paths are
/// rejected the same way as known ones. CORS sits outside it so that preflight
/// requests from browsers are answered without the gateway secret.
///
/// # Arguments
/// - `kind` - Which service's routes to mount
/// - `state` - Shared state holding the database pool and the gateway secret
/// - `cors_origins` - Origins allowed by the CORS policy
pub fn build(kind: ServiceKind, state: AppState, cors_origins: Vec<HeaderValue>) -> Router {
    router(kind)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_gateway_secret,
        ))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
