//! HTTP-level tests driving a full service router over an in-memory database.

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::{
    config::ServiceKind,
    middleware::trust::{GatewaySecret, GATEWAY_SECRET_HEADER, USERNAME_HEADER},
    router,
    state::AppState,
};

mod favorite;

const SECRET: &str = "test-gateway-secret";
const ORIGIN: &str = "http://localhost:3000";

/// Builds the router of one service backed by a fresh database holding every table.
async fn app(kind: ServiceKind) -> Router {
    app_with_db(kind).await.0
}

/// Same as [`app`], also handing back the database so tests can seed rows
/// owned by other services.
async fn app_with_db(kind: ServiceKind) -> (Router, DatabaseConnection) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.unwrap();

    let state = AppState::new(db.clone(), GatewaySecret::new(SECRET));
    let app = router::build(kind, state, vec![HeaderValue::from_static(ORIGIN)]);

    (app, db)
}

/// A request as relayed by the gateway: secret set, username set when `caller` is given.
fn relayed(method: Method, uri: &str, caller: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(GATEWAY_SECRET_HEADER, SECRET);

    if let Some(caller) = caller {
        builder = builder.header(USERNAME_HEADER, caller);
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends a request and returns the status with the JSON body (`Null` when empty).
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
