//! Request forwarding.
//!
//! Bodies are buffered in both directions. The trust headers are always removed
//! from the inbound request and set again by the gateway, so a client can never
//! pick the username a backend sees.

use std::time::Instant;

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, HeaderMap, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;

use crate::server::{
    error::gateway::GatewayError,
    gateway::GatewayState,
    middleware::trust::{GATEWAY_SECRET_HEADER, USERNAME_HEADER},
};

/// Largest request body the gateway will buffer.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Fallback handler forwarding every request to the backend of its route.
pub async fn forward(State(state): State<GatewayState>, request: Request) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    match relay(&state, request).await {
        Ok((route, response)) => {
            tracing::info!(
                request_id = %request_id,
                method = %method,
                path = %path,
                route = %route,
                status = response.status().as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Forwarded request"
            );
            response
        }
        Err(err) => {
            tracing::warn!(
                request_id = %request_id,
                method = %method,
                path = %path,
                "Gateway rejected request: {}",
                err
            );
            err.into_response()
        }
    }
}

async fn relay(state: &GatewayState, request: Request) -> Result<(String, Response), GatewayError> {
    let (parts, body) = request.into_parts();
    let path = parts.uri.path();

    let matched = state
        .routes
        .resolve(&parts.method, path)
        .ok_or_else(|| GatewayError::NoRoute(path.to_string()))?;
    let route = matched.route;

    // Public routes still pass a valid identity along; a bad token there is ignored.
    let username = match state.verifier.username(&parts.headers) {
        Ok(Some(username)) => Some(username),
        Ok(None) if route.authenticated => {
            return Err(GatewayError::Unauthorized(
                "missing bearer token".to_string(),
            ))
        }
        Err(err) if route.authenticated => return Err(err),
        _ => None,
    };

    let body = to_bytes(body, MAX_BODY_BYTES).await.map_err(body_error)?;

    let mut headers = parts.headers.clone();
    strip_hop_by_hop(&mut headers);
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);
    headers.remove(GATEWAY_SECRET_HEADER);
    headers.remove(USERNAME_HEADER);

    let mut rewritten = matched.rewrite(headers);

    // Rewrites run first so no rule can override the trust headers.
    rewritten.headers.remove(GATEWAY_SECRET_HEADER);
    rewritten.headers.remove(USERNAME_HEADER);
    rewritten
        .headers
        .insert(GATEWAY_SECRET_HEADER, state.secret.clone());
    if let Some(username) = username {
        let value = HeaderValue::from_str(&username)
            .map_err(|_| GatewayError::Unauthorized("username is not a valid header".to_string()))?;
        rewritten.headers.insert(USERNAME_HEADER, value);
    }

    let target = rewritten.target_uri(parts.uri.query());
    let backend = rewritten.backend.to_string();

    tracing::debug!(route = %route.name, target = %target, "Forwarding request");

    let upstream = state
        .client
        .request(parts.method.clone(), target)
        .headers(rewritten.headers)
        .timeout(state.upstream_timeout)
        .body(body)
        .send()
        .await
        .map_err(|source| upstream_error(&backend, source))?;

    let status = upstream.status();
    let mut response_headers = upstream.headers().clone();
    strip_hop_by_hop(&mut response_headers);
    response_headers.remove(header::CONTENT_LENGTH);

    let bytes = upstream
        .bytes()
        .await
        .map_err(|source| upstream_error(&backend, source))?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;

    Ok((route.name.clone(), response))
}

fn body_error(err: axum::Error) -> GatewayError {
    let over_limit = std::error::Error::source(&err)
        .is_some_and(|source| source.is::<LengthLimitError>());
    if over_limit {
        GatewayError::PayloadTooLarge(MAX_BODY_BYTES)
    } else {
        GatewayError::BadRequest(format!("Unreadable request body: {}", err))
    }
}

fn upstream_error(backend: &str, source: reqwest::Error) -> GatewayError {
    if source.is_timeout() {
        GatewayError::Timeout(backend.to_string())
    } else {
        GatewayError::Upstream {
            backend: backend.to_string(),
            source,
        }
    }
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    // Headers named in `Connection` are hop-by-hop as well.
    let listed: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();

    for name in listed.iter().chain(HOP_BY_HOP.iter()) {
        headers.remove(name);
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, time::Duration};

    use axum::{
        http::{Method, StatusCode},
        Json, Router,
    };
    use regex::Regex;
    use serde_json::Value;
    use tokio::net::TcpListener;
    use tower::ServiceExt;
    use url::Url;

    use super::*;
    use crate::server::{
        gateway::{
            identity::tests::token_for,
            rewrite::RewriteRule,
            route::{Route, RoutePattern, RouteTable},
        },
    };

    const SECRET: &str = "gateway-secret";
    const JWT_SECRET: &str = "jwt-secret";

    /// Starts a backend answering every request with its path, query and headers.
    async fn echo_backend() -> Url {
        async fn echo(request: Request) -> (StatusCode, Json<Value>) {
            let headers: BTreeMap<String, String> = request
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
                .collect();
            let path = request.uri().path().to_string();
            let query = request.uri().query().map(str::to_string);
            let body = to_bytes(request.into_body(), usize::MAX).await.unwrap();

            (
                StatusCode::CREATED,
                Json(serde_json::json!({
                    "path": path,
                    "query": query,
                    "headers": headers,
                    "body": String::from_utf8_lossy(&body),
                })),
            )
        }

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, Router::new().fallback(echo))
                .await
                .unwrap();
        });

        Url::parse(&format!("http://{}", addr)).unwrap()
    }

    fn route(name: &str, prefix: &str, backend: Url, authenticated: bool) -> Route {
        Route {
            name: name.to_string(),
            pattern: RoutePattern::Prefix(prefix.to_string()),
            methods: None,
            rewrites: vec![],
            backend,
            authenticated,
        }
    }

    fn gateway(routes: Vec<Route>) -> Router {
        gateway_with_timeout(routes, Duration::from_secs(5))
    }

    fn gateway_with_timeout(routes: Vec<Route>, upstream_timeout: Duration) -> Router {
        let client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let state = GatewayState::new(
            RouteTable::new(routes),
            client,
            HeaderValue::from_static(SECRET),
            JWT_SECRET,
            upstream_timeout,
        );

        Router::new().fallback(forward).with_state(state)
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn bearer() -> String {
        format!("Bearer {}", token_for(JWT_SECRET, "alice", 3600))
    }

    #[tokio::test]
    async fn injects_trust_headers_and_drops_spoofed_ones() {
        let backend = echo_backend().await;
        let app = gateway(vec![route("users", "/api/users", backend, true)]);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri("/api/users/me?verbose=1")
                    .header(header::AUTHORIZATION, bearer())
                    .header(USERNAME_HEADER, "mallory")
                    .header(GATEWAY_SECRET_HEADER, "guess")
                    .header(header::CONNECTION, "x-private")
                    .header("x-private", "drop me")
                    .body(Body::from(r#"{"email":"a@b.c"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let echoed = json_body(response).await;
        assert_eq!(echoed["path"], "/api/users/me");
        assert_eq!(echoed["query"], "verbose=1");
        assert_eq!(echoed["body"], r#"{"email":"a@b.c"}"#);
        assert_eq!(echoed["headers"][USERNAME_HEADER], "alice");
        assert_eq!(echoed["headers"][GATEWAY_SECRET_HEADER], SECRET);
        assert!(echoed["headers"].get("x-private").is_none());
    }

    #[tokio::test]
    async fn applies_route_rewrites() {
        let backend = echo_backend().await;
        let mut legacy = route("legacy", "/chat", backend, true);
        legacy.rewrites = vec![
            RewriteRule::RewritePath {
                pattern: Regex::new("^/chat/(?P<rest>.*)$").unwrap(),
                replacement: "/api/discussions/${rest}".to_string(),
            },
            RewriteRule::SetRequestHeader {
                name: HeaderName::from_static("x-auth-username"),
                value: HeaderValue::from_static("mallory"),
            },
        ];
        let app = gateway(vec![legacy]);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/chat/7/messages")
                    .header(header::AUTHORIZATION, bearer())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let echoed = json_body(response).await;
        assert_eq!(echoed["path"], "/api/discussions/7/messages");
        assert_eq!(echoed["headers"][USERNAME_HEADER], "alice");
    }

    #[tokio::test]
    async fn authenticated_route_requires_a_token() {
        let backend = echo_backend().await;
        let app = gateway(vec![route("users", "/api/users", backend, true)]);

        let missing = app
            .clone()
            .oneshot(Request::builder().uri("/api/users/me").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

        let invalid = app
            .oneshot(
                Request::builder()
                    .uri("/api/users/me")
                    .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(invalid.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn public_route_forwards_without_identity() {
        let backend = echo_backend().await;
        let app = gateway(vec![route("public", "/api/announcements", backend, false)]);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/announcements")
                    .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                    .header(USERNAME_HEADER, "mallory")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let echoed = json_body(response).await;
        assert!(echoed["headers"].get(USERNAME_HEADER).is_none());
        assert_eq!(echoed["headers"][GATEWAY_SECRET_HEADER], SECRET);
    }

    #[tokio::test]
    async fn unmatched_path_is_not_found() {
        let backend = echo_backend().await;
        let app = gateway(vec![route("users", "/api/users", backend, true)]);

        let response = app
            .oneshot(Request::builder().uri("/api/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["error"], "No route matches /api/unknown");
    }

    #[tokio::test]
    async fn unreachable_backend_is_bad_gateway() {
        // Bind then drop so nothing listens on the port.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = Url::parse(&format!("http://{}", addr)).unwrap();
        let app = gateway(vec![route("users", "/api/users", backend, false)]);

        let response = app
            .oneshot(Request::builder().uri("/api/users/bob").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(response).await["error"], "Bad gateway");
    }

    #[tokio::test]
    async fn slow_backend_is_gateway_timeout() {
        async fn stall() -> StatusCode {
            tokio::time::sleep(Duration::from_secs(2)).await;
            StatusCode::OK
        }

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, Router::new().fallback(stall))
                .await
                .unwrap();
        });

        let backend = Url::parse(&format!("http://{}", addr)).unwrap();
        let app = gateway_with_timeout(
            vec![route("users", "/api/users", backend, false)],
            Duration::from_millis(200),
        );

        let response = app
            .oneshot(Request::builder().uri("/api/users/bob").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(json_body(response).await["error"], "Gateway timeout");
    }

    #[tokio::test]
    async fn oversized_body_is_payload_too_large() {
        let backend = echo_backend().await;
        let app = gateway(vec![route("announcements", "/api/announcements", backend, false)]);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/announcements")
                    .body(Body::from(vec![b'a'; MAX_BODY_BYTES + 1]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            json_body(response).await["error"],
            format!("Request body exceeds {} bytes", MAX_BODY_BYTES)
        );
    }

    #[test]
    fn connection_listed_headers_are_hop_by_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive, x-trace"));
        headers.insert("x-trace", HeaderValue::from_static("1"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        strip_hop_by_hop(&mut headers);

        assert!(headers.get("x-trace").is_none());
        assert!(headers.get(header::CONNECTION).is_none());
        assert_eq!(headers.len(), 1);
    }
}
