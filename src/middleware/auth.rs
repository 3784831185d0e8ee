use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Locate the bearer credential in the request, if any.
///
/// Checks the `Authorization: Bearer` header first, then falls back to a
/// `token` cookie. Absence is a normal outcome (`None`), distinct from an
/// invalid credential.
pub fn extract_credential(parts: &Parts) -> Option<String> {
    if let Some(value) = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        && let Some(token) = value.strip_prefix("Bearer ")
    {
        return Some(token.to_string());
    }

    parts
        .headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                (name == "token").then(|| value.to_string())
            })
        })
}

/// Extractor that validates the bearer credential and provides the
/// authenticated principal's claims.
///
/// Rejection is always 401: a missing credential and a failing verification
/// are indistinguishable to the caller.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_credential(parts)
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Missing credentials")))?;

        let claims = verify_token(&token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
