//! HTTP Basic Authentication gate for the admin routes.
//!
//! There is no session state and no token issuance: every admin request
//! carries credentials, checked against the configured username and password
//! in constant time.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use base64::Engine;
use portfolio_core::error::CoreError;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::AppState;

/// Configured admin username and password.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    /// Check a presented username/password pair.
    ///
    /// Both comparisons run in constant time, and both always run, so a
    /// valid username cannot be probed through response timing.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        let user_ok = constant_time_eq(username.as_bytes(), self.username.as_bytes());
        let pass_ok = constant_time_eq(password.as_bytes(), self.password.as_bytes());
        user_ok & pass_ok
    }
}

/// Proof that the request carried valid admin credentials.
///
/// Use this as an extractor parameter on every `/admin` handler:
///
/// ```ignore
/// async fn dashboard(_admin: AdminAuth, State(state): State<AppState>) -> ... {}
/// ```
///
/// Rejections are 401 responses carrying a `WWW-Authenticate: Basic`
/// challenge, so browsers prompt for credentials.
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth;

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let encoded = header.strip_prefix("Basic ").ok_or_else(|| {
            unauthorized("Invalid Authorization format. Expected: Basic <credentials>")
        })?;

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded.trim())
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or_else(|| unauthorized("Malformed Basic credentials"))?;

        let (username, password) = decoded
            .split_once(':')
            .ok_or_else(|| unauthorized("Malformed Basic credentials"))?;

        if state.config.admin.matches(username, password) {
            Ok(AdminAuth)
        } else {
            Err(unauthorized("Invalid username or password"))
        }
    }
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}

/// Constant-time comparison. Hashing both sides to fixed-length digests
/// before the `subtle` comparison hides the length of either input as well
/// as its content.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let hash_a = Sha256::digest(a);
    let hash_b = Sha256::digest(b);
    hash_a.ct_eq(&hash_b).into()
}
