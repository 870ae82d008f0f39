//! External service clients.

pub mod auth;

pub use auth::{AuthClient, AuthError};
