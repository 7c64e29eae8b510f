//! Transient object-URL registry.
//!
//! Local tracks address in-memory bytes through short-lived `blob:` URLs.
//! The registry mints one URL per upload and holds the bytes until the URL
//! is revoked; the playlist store revokes exactly once, at removal time.
//! Nothing else is allowed to revoke a track's URL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

/// Cloneable handle to the registry, shared between the store (mint/revoke)
/// and the media element (resolve).
#[derive(Clone, Default)]
pub struct ObjectUrls {
    inner: Arc<Mutex<HashMap<Url, Arc<[u8]>>>>,
}

impl ObjectUrls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `bytes` under a freshly minted `blob:` URL and return it.
    pub fn mint(&self, bytes: impl Into<Arc<[u8]>>) -> Url {
        let url = Url::parse(&format!("blob:playdeck/{}", Uuid::new_v4()))
            .expect("minted blob URL is well-formed");
        let bytes = bytes.into();
        debug!(url = %url, len = bytes.len(), "minted object URL");
        if let Ok(mut live) = self.inner.lock() {
            live.insert(url.clone(), bytes);
        }
        url
    }

    /// Look up the bytes behind a minted URL.
    pub fn resolve(&self, url: &Url) -> Option<Arc<[u8]>> {
        self.inner.lock().ok().and_then(|live| live.get(url).cloned())
    }

    /// Release a minted URL. Returns true only the first time; a second
    /// revoke of the same URL is a bug in the caller.
    pub fn revoke(&self, url: &Url) -> bool {
        let released = self
            .inner
            .lock()
            .is_ok_and(|mut live| live.remove(url).is_some());
        if released {
            debug!(url = %url, "revoked object URL");
        } else {
            warn!(url = %url, "revoke of unknown or already-revoked object URL");
        }
        released
    }

    /// Number of live handles. Zero once every local track has been removed.
    pub fn live(&self) -> usize {
        self.inner.lock().map(|live| live.len()).unwrap_or(0)
    }
}
