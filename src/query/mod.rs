//! Installed-version lookups against the host package manager.
//!
//! [`PackageQuery`] is the seam between version logic and the system. The
//! rpm-backed [`RpmQuery`] is the production implementation; [`CachedQuery`]
//! wraps any query with an explicit per-session cache.

mod cache;
mod rpm;

pub use cache::CachedQuery;
pub use rpm::{DEFAULT_RPM, QUERY_FORMAT, RpmQuery};

/// Resolve the installed version of a package.
#[cfg_attr(test, mockall::automock)]
pub trait PackageQuery: Send + Sync {
    /// Returns the `epoch:version-release` text of the installed package,
    /// or None when it is not installed or the lookup itself failed.
    fn installed_version(&self, name: &str) -> Option<String>;
}
