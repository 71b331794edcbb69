use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use log::debug;

use super::PackageQuery;

/// A query session that remembers each lookup until the session is dropped
/// or explicitly invalidated.
///
/// Nothing is cached unless a caller wraps its query in one of these.
pub struct CachedQuery<Q: PackageQuery> {
    inner: Q,
    cache: Mutex<HashMap<String, Option<String>>>,
}

impl<Q: PackageQuery> CachedQuery<Q> {
    pub fn new(inner: Q) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Forget the cached result for `name`.
    pub fn invalidate(&self, name: &str) {
        self.lock().remove(name);
    }

    /// Forget every cached result.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn into_inner(self) -> Q {
        self.inner
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Option<String>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<Q: PackageQuery> PackageQuery for CachedQuery<Q> {
    fn installed_version(&self, name: &str) -> Option<String> {
        if let Some(cached) = self.lock().get(name) {
            debug!("Using cached installed version for '{}'", name);
            return cached.clone();
        }

        let version = self.inner.installed_version(name);
        self.lock().insert(name.to_string(), version.clone());
        version
    }
}
