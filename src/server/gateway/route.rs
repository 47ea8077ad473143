//! Ordered route table of the gateway.
//!
//! Routes are tried in the order they were declared and the first match wins.
//! The table is never sorted, so a narrow public route placed before a broad
//! authenticated one takes precedence over it.

use axum::http::{HeaderMap, Method};
use regex::Regex;
use url::Url;

use crate::server::gateway::rewrite::RewriteRule;

/// How a route recognises request paths.
#[derive(Debug, Clone)]
pub enum RoutePattern {
    /// Matches the prefix itself and any path below it, on segment boundaries.
    Prefix(String),
    /// Matches the whole path. Compiled anchored, see [`RoutePattern::regex`].
    Regex(Regex),
}

impl RoutePattern {
    /// Compiles a full-path regex. The expression is anchored at both ends.
    pub fn regex(source: &str) -> Result<Self, regex::Error> {
        Regex::new(&format!("^(?:{})$", source)).map(Self::Regex)
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Prefix(prefix) => {
                let prefix = prefix.trim_end_matches('/');
                if prefix.is_empty() {
                    return true;
                }
                match path.strip_prefix(prefix) {
                    Some(rest) => rest.is_empty() || rest.starts_with('/'),
                    None => false,
                }
            }
            Self::Regex(regex) => regex.is_match(path),
        }
    }
}

/// One entry of the route table.
#[derive(Debug, Clone)]
pub struct Route {
    pub name: String,
    pub pattern: RoutePattern,
    /// Methods the route accepts. `None` accepts every method.
    pub methods: Option<Vec<Method>>,
    /// Applied in declaration order before forwarding.
    pub rewrites: Vec<RewriteRule>,
    /// Base URL of the backend. Its path, if any, is kept as a prefix.
    pub backend: Url,
    /// Whether a valid bearer token is required.
    pub authenticated: bool,
}

impl Route {
    pub fn matches(&self, method: &Method, path: &str) -> bool {
        let method_allowed = self
            .methods
            .as_ref()
            .is_none_or(|methods| methods.contains(method));

        method_allowed && self.pattern.matches(path)
    }

    /// Applies the route's rewrite rules, in order, to a path and a header map.
    pub fn rewrite(&self, path: &str, mut headers: HeaderMap) -> RewrittenRequest {
        let mut path = path.to_string();
        for rule in &self.rewrites {
            path = rule.apply(&path, &mut headers);
        }

        RewrittenRequest {
            backend: self.backend.clone(),
            path,
            headers,
        }
    }
}

/// A route selected for a request path.
#[derive(Debug, Clone, Copy)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub path: &'a str,
}

impl<'a> RouteMatch<'a> {
    pub fn rewrite(&self, headers: HeaderMap) -> RewrittenRequest {
        self.route.rewrite(self.path, headers)
    }

    /// Upstream URL for this match, with path rewrites applied and header rules ignored.
    pub fn target_uri(&self, query: Option<&str>) -> Url {
        self.rewrite(HeaderMap::new()).target_uri(query)
    }
}

/// Path and headers after rewriting, ready to be sent to the backend.
#[derive(Debug, Clone)]
pub struct RewrittenRequest {
    pub backend: Url,
    pub path: String,
    pub headers: HeaderMap,
}

impl RewrittenRequest {
    /// Joins the backend base URL, the rewritten path and the original query string.
    ///
    /// A backend of `http://svc:8080/base` and a path of `/items` give
    /// `http://svc:8080/base/items`.
    pub fn target_uri(&self, query: Option<&str>) -> Url {
        let mut url = self.backend.clone();

        let base = url.path().trim_end_matches('/').to_string();
        let path = if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };
        url.set_path(&format!("{}{}", base, path));
        url.set_query(query.filter(|q| !q.is_empty()));

        url
    }
}

/// Routes in declaration order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Returns the first route matching the method and path.
    pub fn resolve<'a>(&'a self, method: &Method, path: &'a str) -> Option<RouteMatch<'a>> {
        self.routes
            .iter()
            .find(|route| route.matches(method, path))
            .map(|route| RouteMatch { route, path })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(name: &str, pattern: RoutePattern, authenticated: bool) -> Route {
        Route {
            name: name.to_string(),
            pattern,
            methods: None,
            rewrites: vec![],
            backend: Url::parse("http://127.0.0.1:9000").unwrap(),
            authenticated,
        }
    }

    #[test]
    fn prefix_matches_on_segment_boundaries() {
        let pattern = RoutePattern::Prefix("/api/users".to_string());

        assert!(pattern.matches("/api/users"));
        assert!(pattern.matches("/api/users/"));
        assert!(pattern.matches("/api/users/me"));
        assert!(!pattern.matches("/api/usersettings"));
        assert!(!pattern.matches("/api"));
    }

    #[test]
    fn regex_is_anchored() {
        let pattern = RoutePattern::regex("/api/announcements(/[0-9]+)?").unwrap();

        assert!(pattern.matches("/api/announcements"));
        assert!(pattern.matches("/api/announcements/42"));
        assert!(!pattern.matches("/api/announcements/mine"));
        assert!(!pattern.matches("/prefix/api/announcements"));
    }

    #[test]
    fn first_declared_route_wins() {
        let table = RouteTable::new(vec![
            route(
                "public",
                RoutePattern::regex("/api/announcements/[0-9]+").unwrap(),
                false,
            ),
            route(
                "private",
                RoutePattern::Prefix("/api/announcements".to_string()),
                true,
            ),
        ]);

        let matched = table.resolve(&Method::GET, "/api/announcements/7").unwrap();
        assert_eq!(matched.route.name, "public");

        let matched = table.resolve(&Method::GET, "/api/announcements/mine").unwrap();
        assert_eq!(matched.route.name, "private");

        // Reversing the declaration order makes the broad route shadow the narrow one
        let reversed = RouteTable::new(table.routes().iter().rev().cloned().collect());
        let matched = reversed.resolve(&Method::GET, "/api/announcements/7").unwrap();
        assert_eq!(matched.route.name, "private");
    }

    #[test]
    fn method_filter_skips_to_next_route() {
        let mut public = route(
            "public",
            RoutePattern::Prefix("/api/announcements".to_string()),
            false,
        );
        public.methods = Some(vec![Method::GET]);
        let private = route(
            "private",
            RoutePattern::Prefix("/api/announcements".to_string()),
            true,
        );
        let table = RouteTable::new(vec![public, private]);

        assert_eq!(
            table.resolve(&Method::GET, "/api/announcements").unwrap().route.name,
            "public"
        );
        assert_eq!(
            table.resolve(&Method::POST, "/api/announcements").unwrap().route.name,
            "private"
        );
    }

    #[test]
    fn unmatched_path_resolves_to_none() {
        let table = RouteTable::new(vec![route(
            "users",
            RoutePattern::Prefix("/api/users".to_string()),
            true,
        )]);

        assert!(table.resolve(&Method::GET, "/api/unknown").is_none());
    }

    #[test]
    fn target_uri_keeps_backend_base_path_and_query() {
        let rewritten = RewrittenRequest {
            backend: Url::parse("http://svc:8080/base/").unwrap(),
            path: "/items".to_string(),
            headers: HeaderMap::new(),
        };

        assert_eq!(
            rewritten.target_uri(Some("page=2&per_page=5")).as_str(),
            "http://svc:8080/base/items?page=2&per_page=5"
        );
        assert_eq!(
            rewritten.target_uri(None).as_str(),
            "http://svc:8080/base/items"
        );
    }

    #[test]
    fn match_target_uri_applies_path_rewrites() {
        let mut legacy = route(
            "legacy",
            RoutePattern::Prefix("/v1".to_string()),
            true,
        );
        legacy.rewrites = vec![RewriteRule::StripPrefix { segments: 1 }];
        let table = RouteTable::new(vec![legacy]);

        let matched = table.resolve(&Method::GET, "/v1/api/users/me").unwrap();
        assert_eq!(
            matched.target_uri(Some("x=1")).as_str(),
            "http://127.0.0.1:9000/api/users/me?x=1"
        );
    }
}
