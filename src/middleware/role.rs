//! Role-based authorization middleware.
//!
//! Two composition styles share one check:
//!
//! 1. Layer-based gating of a whole router via
//!    `middleware::from_fn_with_state` and [`require_roles`]
//! 2. In-handler, per-method gating via [`check_any_role`] / [`check_role`]
//!
//! Role checks run only after the credential is validated, so an invalid
//! credential always yields 401, never 403.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};

use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware that admits only principals whose role is in `allowed_roles`.
///
/// An empty allow-list means "any authenticated role", so this degenerates
/// to plain authentication.
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/locations", get(list_locations))
///     .layer(middleware::from_fn_with_state(
///         state.clone(),
///         |state, req, next| require_roles(state, req, next, vec![UserRole::SuperAdmin]),
///     ));
/// ```
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    // 401 before any role comparison
    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    check_any_role(&auth_user, &allowed_roles)?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

/// Gate a router to authenticated principals of any role.
pub async fn require_authenticated(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_roles(State(state), req, next, vec![]).await
}

/// Gate a router to SuperAdmin only.
pub async fn require_superadmin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_roles(State(state), req, next, vec![UserRole::SuperAdmin]).await
}

/// Gate a router to management roles (SuperAdmin or Manager).
pub async fn require_manager(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_roles(
        State(state),
        req,
        next,
        vec![UserRole::SuperAdmin, UserRole::Manager],
    )
    .await
}

/// Check that the principal holds exactly `required_role`.
pub fn check_role(auth_user: &AuthUser, required_role: UserRole) -> Result<(), AppError> {
    check_any_role(auth_user, std::slice::from_ref(&required_role))
}

/// Check that the principal's role is in `allowed_roles`.
///
/// An empty allow-list admits any authenticated role. The role string in the
/// claims must parse to a known role; an unknown role is treated as
/// forbidden rather than a server error.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if allowed_roles.is_empty() {
        return Ok(());
    }

    let user_role = UserRole::parse(&auth_user.0.role).ok_or_else(|| {
        AppError::forbidden(anyhow::anyhow!(
            "Access denied. Unrecognized role: {}",
            auth_user.0.role
        ))
    })?;

    if !allowed_roles.contains(&user_role) {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required roles: {:?}, but user has role: {:?}",
            allowed_roles,
            user_role
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn auth_user(role: &str) -> AuthUser {
        AuthUser(crate::modules::auth::model::Claims {
            sub: "00000000-0000-0000-0000-000000000000".to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            role: role.to_string(),
            exp: 9999999999,
            iat: 1234567890,
        })
    }

    #[test]
    fn test_empty_allow_list_admits_any_authenticated_role() {
        assert!(check_any_role(&auth_user("SuperAdmin"), &[]).is_ok());
        assert!(check_any_role(&auth_user("Manager"), &[]).is_ok());
        assert!(check_any_role(&auth_user("Attendant"), &[]).is_ok());
    }

    #[test]
    fn test_role_in_allow_list() {
        let allowed = [UserRole::SuperAdmin, UserRole::Manager];
        assert!(check_any_role(&auth_user("SuperAdmin"), &allowed).is_ok());
        assert!(check_any_role(&auth_user("Manager"), &allowed).is_ok());
    }

    #[test]
    fn test_role_outside_allow_list_is_forbidden() {
        let allowed = [UserRole::SuperAdmin, UserRole::Manager];
        let err = check_any_role(&auth_user("Attendant"), &allowed).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_unknown_role_is_forbidden_not_internal() {
        let err = check_any_role(&auth_user("Janitor"), &[UserRole::SuperAdmin]).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_check_role_exact() {
        assert!(check_role(&auth_user("SuperAdmin"), UserRole::SuperAdmin).is_ok());
        assert!(check_role(&auth_user("Manager"), UserRole::SuperAdmin).is_err());
    }
}
