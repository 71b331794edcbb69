//! "Is this package installed (at this version)?" checks.

use std::cmp::Ordering;

use log::debug;

use crate::query::PackageQuery;
use crate::version::{CompareOptions, Scheme, parse_version};

/// How an installed version is matched against a wanted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstalledOptions {
    pub compare_epoch: bool,
    /// Require an equal version; otherwise the installed one only has to be at least as new
    pub exact: bool,
    pub scheme: Scheme,
}

impl Default for InstalledOptions {
    fn default() -> Self {
        Self {
            compare_epoch: false,
            exact: true,
            scheme: Scheme::Simple,
        }
    }
}

impl InstalledOptions {
    fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            compare_epoch: self.compare_epoch,
            scheme: self.scheme,
        }
    }
}

/// Check whether `name` is installed, and optionally whether it satisfies `version`.
///
/// Issues exactly one query per call. A package that cannot be found, or a
/// query that fails, counts as not installed.
#[tracing::instrument(skip(query))]
pub fn is_installed<Q: PackageQuery>(
    query: &Q,
    name: &str,
    version: Option<&str>,
    options: &InstalledOptions,
) -> bool {
    let Some(installed) = query.installed_version(name) else {
        debug!("Package '{}' is not installed", name);
        return false;
    };

    let Some(wanted) = version else {
        return true;
    };

    let ord = parse_version(&installed).compare(&parse_version(wanted), &options.compare_options());
    debug!(
        "Package '{}': installed {} vs wanted {}: {:?}",
        name, installed, wanted, ord
    );

    if options.exact {
        ord == Ordering::Equal
    } else {
        ord != Ordering::Less
    }
}
