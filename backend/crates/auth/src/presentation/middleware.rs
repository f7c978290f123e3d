//! Auth Middleware
//!
//! Gate for protected routes. Verifies the token and attaches [`AuthUser`]
//! to the request extensions; never touches the database.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use platform::{bearer::extract_bearer_token, cookie::extract_cookie};

use crate::application::config::AuthConfig;
use crate::application::token::{AuthUser, TokenService};
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGate {
    tokens: Arc<TokenService>,
    cookie_name: Arc<str>,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenService>, config: &AuthConfig) -> Self {
        Self {
            tokens,
            cookie_name: Arc::from(config.cookie_name.as_str()),
        }
    }

    /// Bearer header wins over the cookie when both are present
    fn candidate_token(&self, headers: &HeaderMap) -> Option<String> {
        extract_bearer_token(headers).or_else(|| extract_cookie(headers, &self.cookie_name))
    }

    pub fn authenticate(&self, headers: &HeaderMap) -> Result<AuthUser, AuthError> {
        let token = self.candidate_token(headers).ok_or(AuthError::MissingToken)?;
        self.tokens.verify(&token)
    }
}

/// Middleware that requires a valid token
pub async fn require_auth(
    State(gate): State<AuthGate>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = gate.authenticate(req.headers())?;

    tracing::debug!(user_id = %identity.user_id, role = %identity.role, "Request authenticated");
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
