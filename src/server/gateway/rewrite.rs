//! Request rewrite rules applied by the gateway before forwarding.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use regex::Regex;

#[derive(Debug, Clone)]
pub enum RewriteRule {
    /// Regex replacement on the path. The replacement may reference named
    /// captures with `${name}`.
    RewritePath { pattern: Regex, replacement: String },
    /// Drops the first `segments` path segments.
    StripPrefix { segments: usize },
    SetRequestHeader { name: HeaderName, value: HeaderValue },
    RemoveRequestHeader { name: HeaderName },
}

impl RewriteRule {
    /// Applies the rule and returns the resulting path.
    ///
    /// Header rules leave the path untouched and path rules leave headers untouched.
    pub fn apply(&self, path: &str, headers: &mut HeaderMap) -> String {
        match self {
            Self::RewritePath {
                pattern,
                replacement,
            } => pattern.replace(path, replacement.as_str()).into_owned(),
            Self::StripPrefix { segments } => strip_segments(path, *segments),
            Self::SetRequestHeader { name, value } => {
                headers.insert(name.clone(), value.clone());
                path.to_string()
            }
            Self::RemoveRequestHeader { name } => {
                headers.remove(name);
                path.to_string()
            }
        }
    }
}

fn strip_segments(path: &str, segments: usize) -> String {
    let trailing_slash = path.len() > 1 && path.ends_with('/');
    let rest: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .skip(segments)
        .collect();

    if rest.is_empty() {
        return "/".to_string();
    }

    let mut stripped = format!("/{}", rest.join("/"));
    if trailing_slash {
        stripped.push('/');
    }
    stripped
}
