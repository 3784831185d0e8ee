//! Configuration modules for the Herdbook API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables via a `from_env` constructor.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL database connection pool initialization
//! - [`jwt`]: JWT authentication configuration

pub mod cors;
pub mod database;
pub mod jwt;
