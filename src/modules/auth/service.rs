use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::{AppError, map_unique_violation};
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, LoginResponse, RegisterRequestDto, User, UserRole};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto))]
    pub async fn register_user(db: &PgPool, dto: RegisterRequestDto) -> Result<User, AppError> {
        let role = dto.role.unwrap_or(UserRole::Attendant);

        // SuperAdmins are provisioned via the CLI only
        if role == UserRole::SuperAdmin {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "SuperAdmin accounts cannot be created through the API"
            )));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (name, email, password, role)
               VALUES ($1, $2, $3, $4)
               RETURNING id, name, email, role, created_at, updated_at"#,
        )
        .bind(dto.name.trim())
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(role.as_str())
        .fetch_one(db)
        .await
        .map_err(|e| map_unique_violation(e, "A user with this email already exists"))?;

        Ok(user)
    }

    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            name: String,
            email: String,
            role: String,
            password: String,
            created_at: chrono::DateTime<chrono::Utc>,
            updated_at: chrono::DateTime<chrono::Utc>,
        }

        let row = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, name, email, role, password, created_at, updated_at FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid email or password")))?;

        let is_valid = verify_password(&dto.password, &row.password)?;

        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid email or password"
            )));
        }

        let access_token =
            create_access_token(row.id, &row.name, &row.email, &row.role, jwt_config)?;

        Ok(LoginResponse {
            access_token,
            user: User {
                id: row.id,
                name: row.name,
                email: row.email,
                role: row.role,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::model::UserRole;
    use axum::http::StatusCode;

    fn register_dto(email: &str, role: Option<UserRole>) -> RegisterRequestDto {
        RegisterRequestDto {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
            role,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_defaults_to_attendant(pool: PgPool) {
        let email = format!("reg-{}@test.com", Uuid::new_v4());
        let user = AuthService::register_user(&pool, register_dto(&email, None))
            .await
            .unwrap();
        assert_eq!(user.role, "Attendant");
        assert_eq!(user.email, email);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_hashes_password(pool: PgPool) {
        let email = format!("reg-{}@test.com", Uuid::new_v4());
        AuthService::register_user(&pool, register_dto(&email, None))
            .await
            .unwrap();

        let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE email = $1")
            .bind(&email)
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_ne!(stored, "password123");
        assert!(crate::utils::password::verify_password("password123", &stored).unwrap());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_duplicate_email_conflicts(pool: PgPool) {
        let email = format!("reg-{}@test.com", Uuid::new_v4());
        AuthService::register_user(&pool, register_dto(&email, None))
            .await
            .unwrap();

        let err = AuthService::register_user(&pool, register_dto(&email, None))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_superadmin_forbidden(pool: PgPool) {
        let email = format!("reg-{}@test.com", Uuid::new_v4());
        let err = AuthService::register_user(
            &pool,
            register_dto(&email, Some(UserRole::SuperAdmin)),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_login_success_and_wrong_password(pool: PgPool) {
        let email = format!("login-{}@test.com", Uuid::new_v4());
        AuthService::register_user(&pool, register_dto(&email, Some(UserRole::Manager)))
            .await
            .unwrap();

        let jwt_config = JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry: 3600,
        };

        let response = AuthService::login_user(
            &pool,
            LoginRequest {
                email: email.clone(),
                password: "password123".to_string(),
            },
            &jwt_config,
        )
        .await
        .unwrap();
        assert_eq!(response.user.role, "Manager");
        assert!(!response.access_token.is_empty());

        let err = AuthService::login_user(
            &pool,
            LoginRequest {
                email,
                password: "wrong-password".to_string(),
            },
            &jwt_config,
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }
}
