//! Conditional GET support for rendered pages.

use axum::http::{HeaderMap, header};
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::time::SystemTime;

/// `Last-Modified` value for a render timestamp.
pub fn http_date(at: DateTime<Utc>) -> String {
    httpdate::fmt_http_date(SystemTime::from(at))
}

fn strip_weak_prefix(s: &str) -> &str {
    s.strip_prefix("W/")
        .or_else(|| s.strip_prefix("w/"))
        .unwrap_or(s)
}

/// Opaque value of an entity tag with any weak prefix and quotes removed.
pub fn etag_value(token: &str) -> Cow<'_, str> {
    let token = strip_weak_prefix(token.trim());
    let inner = token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(token);

    if inner.contains('\\') {
        Cow::Owned(inner.replace('\\', ""))
    } else {
        Cow::Borrowed(inner)
    }
}

/// Weak comparison, as `If-None-Match` requires.
pub fn weak_match(a: &str, b: &str) -> bool {
    etag_value(a) == etag_value(b)
}

/// `If-None-Match` matches `etag` via `*` or any listed candidate.
pub fn inm_matches(headers: &HeaderMap, etag: &str) -> bool {
    let Some(value) = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let value = value.trim();
    value == "*"
        || value
            .split(',')
            .map(str::trim)
            .any(|candidate| weak_match(candidate, etag))
}

/// `If-Modified-Since` is at or after the render time (second precision).
pub fn ims_matches(headers: &HeaderMap, rendered_at: DateTime<Utc>) -> bool {
    headers
        .get(header::IF_MODIFIED_SINCE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| httpdate::parse_http_date(value).ok())
        .is_some_and(|since| {
            DateTime::<Utc>::from(since).timestamp() >= rendered_at.timestamp()
        })
}

/// `If-None-Match` takes precedence; `If-Modified-Since` is only consulted
/// when it is absent.
pub fn is_not_modified(headers: &HeaderMap, etag: &str, rendered_at: DateTime<Utc>) -> bool {
    if headers.contains_key(header::IF_NONE_MATCH) {
        inm_matches(headers, etag)
    } else {
        ims_matches(headers, rendered_at)
    }
}
