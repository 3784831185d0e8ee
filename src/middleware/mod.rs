//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`auth`]: Credential extraction and the `AuthUser` extractor
//! - [`role`]: Role-based authorization middleware and in-handler checks
//!
//! # Authorization flow
//!
//! 1. Client sends a request with `Authorization: Bearer <token>` (or a
//!    `token` cookie)
//! 2. The `AuthUser` extractor validates the JWT and attaches the claims;
//!    a missing or invalid credential short-circuits with 401
//! 3. Role checks run only after the credential is valid: a disallowed role
//!    short-circuits with 403
//! 4. The handler executes only after an allow decision
//!
//! Role gating comes in two flavors, both backed by the same check:
//!
//! ```ignore
//! // Static: gate a whole router at registration time
//! init_locations_router()
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_manager));
//!
//! // Dynamic: gate per HTTP method inside the handler
//! async fn delete_feed_type(auth_user: AuthUser, ...) -> Result<_, AppError> {
//!     check_any_role(&auth_user, &[UserRole::SuperAdmin])?;
//!     // ...
//! }
//! ```

pub mod auth;
pub mod role;
