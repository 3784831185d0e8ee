use sqlx::PgPool;

use crate::modules::auth::model::UserRole;
use crate::utils::password::hash_password;

/// Seed a SuperAdmin account. SuperAdmins cannot be created through the
/// registration endpoint, only through this command.
pub async fn create_superadmin(
    db: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let hashed_password =
        hash_password(password).map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let result = sqlx::query(
        "INSERT INTO users (name, email, password, role)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(name)
    .bind(email)
    .bind(hashed_password)
    .bind(UserRole::SuperAdmin.as_str())
    .execute(db)
    .await?;

    if result.rows_affected() == 0 {
        return Err("User with this email already exists".into());
    }

    Ok(())
}
