//! Middleware layers for the API.

pub mod session;

pub use session::{create_session_layer, session_keys};
