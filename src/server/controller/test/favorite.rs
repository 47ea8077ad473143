use serde_json::json;
use test_utils::factory;

use super::*;

#[tokio::test]
async fn add_check_and_remove_favorite() {
    let (app, db) = app_with_db(ServiceKind::Favorites).await;
    let announcement = factory::create_announcement(&db, "alice").await.unwrap();
    let status_uri = format!("/api/favorites/{}", announcement.id);
    let body = Some(json!({ "announcement_id": announcement.id }));

    let (status, _) = send(&app, relayed(Method::POST, "/api/favorites", Some("bob"), body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, relayed(Method::POST, "/api/favorites", Some("bob"), body)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, state) = send(&app, relayed(Method::GET, &status_uri, Some("bob"), None)).await;
    assert_eq!(state["favorite"], true);
    let (_, state) = send(&app, relayed(Method::GET, &status_uri, Some("carol"), None)).await;
    assert_eq!(state["favorite"], false);

    let (status, list) = send(&app, relayed(Method::GET, "/api/favorites", Some("bob"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["announcement_id"], announcement.id);

    let (status, _) = send(&app, relayed(Method::DELETE, &status_uri, Some("bob"), None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, relayed(Method::DELETE, &status_uri, Some("bob"), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cannot_favorite_a_missing_announcement() {
    let app = app(ServiceKind::Favorites).await;

    let (status, _) = send(
        &app,
        relayed(
            Method::POST,
            "/api/favorites",
            Some("bob"),
            Some(json!({ "announcement_id": 404 })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
