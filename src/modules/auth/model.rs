//! Authentication data models and DTOs.
//!
//! # Core types
//!
//! - [`Claims`] - the principal attached to a request after verification
//! - [`UserRole`] - the closed role enumeration used by allow-lists
//! - [`User`] - user entity as returned by the API (never the password hash)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validator::not_blank;

/// JWT claims. The principal for the duration of a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub name: String,
    pub email: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

/// Roles recognized by route allow-lists.
///
/// Ordered by privilege: SuperAdmin > Manager > Attendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserRole {
    SuperAdmin,
    Manager,
    Attendant,
}

impl UserRole {
    /// Parse the role string carried in claims and stored on users.
    /// Returns `None` for anything outside the closed set.
    pub fn parse(role: &str) -> Option<Self> {
        match role {
            "SuperAdmin" => Some(UserRole::SuperAdmin),
            "Manager" => Some(UserRole::Manager),
            "Attendant" => Some(UserRole::Attendant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "SuperAdmin",
            UserRole::Manager => "Manager",
            UserRole::Attendant => "Attendant",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(custom(function = not_blank))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    /// Optional role; defaults to Attendant. SuperAdmin cannot be
    /// self-assigned through the API.
    pub role: Option<UserRole>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_round_trip() {
        for role in [UserRole::SuperAdmin, UserRole::Manager, UserRole::Attendant] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("superadmin"), None);
        assert_eq!(UserRole::parse(""), None);
    }

    #[test]
    fn test_register_dto_validation() {
        use validator::Validate;

        let dto = RegisterRequestDto {
            name: "Amina Yusuf".to_string(),
            email: "amina@farm.example".to_string(),
            password: "password123".to_string(),
            role: None,
        };
        assert!(dto.validate().is_ok());

        let blank_name = RegisterRequestDto {
            name: "   ".to_string(),
            email: "amina@farm.example".to_string(),
            password: "password123".to_string(),
            role: None,
        };
        assert!(blank_name.validate().is_err());

        let short_password = RegisterRequestDto {
            name: "Amina Yusuf".to_string(),
            email: "amina@farm.example".to_string(),
            password: "short".to_string(),
            role: None,
        };
        assert!(short_password.validate().is_err());
    }
}
