//! `AuthUser` extractor — pulls the JWT from the Authorization header,
//! validates it, and injects the caller's context.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use eventhub_core::error::AppError;
use eventhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = extract_context(parts, state)?;
        Ok(AuthUser(ctx))
    }
}

/// Like [`AuthUser`] but never rejects: routes that allow anonymous
/// access get `None` when the header is missing or the token invalid.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<RequestContext>);

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuthUser(extract_context(parts, state).ok()))
    }
}

fn extract_context(parts: &Parts, state: &AppState) -> Result<RequestContext, ApiError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication("Unauthorized"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

    let claims = state.jwt_decoder.decode_token(token)?;

    Ok(RequestContext::new(
        claims.user_id(),
        claims.email,
        claims.roles,
    ))
}
