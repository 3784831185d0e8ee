//! Database configuration and connection pool initialization.
//!
//! The database URL is read from the `DATABASE_URL` environment variable.
//! The returned [`PgPool`] is cheaply cloneable and lives in the application
//! state for the lifetime of the process.
//!
//! # Panics
//!
//! [`init_db_pool`] panics if `DATABASE_URL` is unset or the connection
//! cannot be established; the server cannot do anything useful without it.

use sqlx::PgPool;
use std::env;

pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
