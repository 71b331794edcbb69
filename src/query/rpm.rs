use log::{debug, warn};

use super::PackageQuery;
use crate::runtime::Runtime;

/// Package manager binary used when nothing else is configured.
pub const DEFAULT_RPM: &str = "rpm";

/// One `epoch:version-release` line per installed instance. rpm prints
/// `(none)` for a missing epoch.
pub const QUERY_FORMAT: &str = "%{EPOCH}:%{VERSION}-%{RELEASE}\\n";

/// Looks up installed packages with `rpm -q`.
pub struct RpmQuery<R: Runtime> {
    runtime: R,
    rpm: String,
}

impl<R: Runtime> RpmQuery<R> {
    pub fn new(runtime: R, rpm: impl Into<String>) -> Self {
        Self {
            runtime,
            rpm: rpm.into(),
        }
    }

    pub fn rpm(&self) -> &str {
        &self.rpm
    }

    fn args(name: &str) -> Vec<String> {
        vec![
            "-q".to_string(),
            "--queryformat".to_string(),
            QUERY_FORMAT.to_string(),
            name.to_string(),
        ]
    }
}

impl<R: Runtime> PackageQuery for RpmQuery<R> {
    #[tracing::instrument(skip(self))]
    fn installed_version(&self, name: &str) -> Option<String> {
        if name.is_empty() || name.starts_with('-') {
            debug!("Refusing to query invalid package name '{}'", name);
            return None;
        }

        let output = match self.runtime.run_command(&self.rpm, &Self::args(name)) {
            Ok(output) => output,
            Err(e) => {
                warn!("Package query for '{}' failed: {:#}", name, e);
                return None;
            }
        };

        if !output.success() {
            debug!(
                "'{}' is not installed ({:?}): {}",
                name,
                output.code,
                output.stdout.trim()
            );
            return None;
        }

        // Multiple lines when several versions are installed side by side
        let version = output
            .stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())?;

        debug!("Installed version of '{}': {}", name, version);
        Some(version.to_string())
    }
}
