//! Utility modules for the Herdbook API.
//!
//! This module contains shared utilities used throughout the application:
//!
//! - [`errors`]: Application error types and handling
//! - [`events`]: In-process domain event dispatch
//! - [`jwt`]: JWT token creation and verification
//! - [`pagination`]: Request pagination utilities
//! - [`password`]: Password hashing and verification

pub mod errors;
pub mod events;
pub mod jwt;
pub mod pagination;
pub mod password;
