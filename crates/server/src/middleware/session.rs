//! Session middleware configuration.
//!
//! Sessions are held in memory: the cart deliberately has no cross-session
//! lifetime, so there is nothing to persist. A session (and with it the
//! cart) disappears on inactivity or process restart.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "shoplytix_session";

/// Session expiry time in seconds (8 hours, one store shift).
const SESSION_EXPIRY_SECONDS: i64 = 8 * 60 * 60;

/// Keys under which values live in the session.
pub mod session_keys {
    /// The serialized [`shoplytix_core::Cart`] for this session.
    pub const CART: &str = "cart";
    /// Set to `true` once the upstream login has succeeded.
    pub const AUTHENTICATED: &str = "authenticated";
}

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
