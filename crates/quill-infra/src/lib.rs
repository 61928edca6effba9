//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! the SeaORM-backed Postgres repositories and the JWT/Argon2 auth services.

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, JwtTokenService};
pub use database::{DatabaseConfig, connect};
