//! The admin gate: a trivial comparison against the stored credential.
//!
//! This is deliberately not a session protocol. Logging in sets a cookie to
//! the stored digest's hex form, and every admin request re-compares it with
//! the credential on disk. Rotating the password invalidates old cookies.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

use crate::state::AppState;

pub const ADMIN_COOKIE: &str = "hibi_admin";

/// True when the request carries the current admin cookie.
///
/// Always false while no password is set; the login page explains how to set
/// one.
pub fn is_admin(state: &AppState, headers: &HeaderMap) -> bool {
    let Ok(Some(cred)) = state.credentials().load() else {
        return false;
    };
    cookie_value(headers, ADMIN_COOKIE)
        .map(|value| value == cred.digest_hex())
        .unwrap_or(false)
}

/// Extracts a cookie value from the request's `Cookie` headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    for header in headers.get_all(COOKIE) {
        let Ok(raw) = header.to_str() else { continue };
        for pair in raw.split(';') {
            if let Some((key, value)) = pair.trim().split_once('=') {
                if key == name {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

pub fn login_cookie(token: &str) -> String {
    format!("{ADMIN_COOKIE}={token}; Path=/; HttpOnly")
}

pub fn logout_cookie() -> String {
    format!("{ADMIN_COOKIE}=; Path=/; HttpOnly; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn cookie_value_finds_the_named_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("other=1; hibi_admin=abc123; last=x"),
        );
        assert_eq!(
            cookie_value(&headers, ADMIN_COOKIE),
            Some("abc123".to_string())
        );
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn cookie_value_handles_absent_header() {
        let headers = HeaderMap::new();
        assert_eq!(cookie_value(&headers, ADMIN_COOKIE), None);
    }
}
