//! Runtime server configuration and session key loading.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use actix_web::cookie::{Key, SameSite};
use mockable::{Clock, DefaultClock};
use tracing::warn;

use dishared::domain::ports::EntityStore;
use dishared::outbound::memory::InMemoryEntityStore;

/// Minimum key material accepted by [`Key::derive_from`].
const MIN_KEY_BYTES: usize = 32;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: EntityStore,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ServerConfig {
    /// Configuration over an empty in-memory store and the system clock.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            store: InMemoryEntityStore::entity_store(),
            clock: Arc::new(DefaultClock),
        }
    }

    /// Serve from `store` instead of a fresh empty one.
    #[must_use]
    pub fn with_entity_store(mut self, store: EntityStore) -> Self {
        self.store = store;
        self
    }

    /// Use `clock` for timestamps and trending periods.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

/// Read the session key from `path`.
///
/// An unreadable or too-short key file falls back to a random key when
/// `allow_ephemeral` is set or in debug builds; sessions then do not survive
/// a restart.
///
/// # Errors
/// Returns an I/O error when the key cannot be loaded and no fallback is
/// allowed.
pub fn load_session_key(path: &Path, allow_ephemeral: bool) -> std::io::Result<Key> {
    let loaded = std::fs::read(path).and_then(|bytes| {
        if bytes.len() < MIN_KEY_BYTES {
            Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("session key must be at least {MIN_KEY_BYTES} bytes"),
            ))
        } else {
            Ok(Key::derive_from(&bytes))
        }
    });
    match loaded {
        Ok(key) => Ok(key),
        Err(err) if allow_ephemeral || cfg!(debug_assertions) => {
            warn!(path = %path.display(), error = %err, "using temporary session key (dev only)");
            Ok(Key::generate())
        }
        Err(err) => Err(std::io::Error::other(format!(
            "failed to read session key at {}: {err}",
            path.display()
        ))),
    }
}
