use log::debug;

use crate::{
    query::{DEFAULT_RPM, RpmQuery},
    runtime::Runtime,
};

/// Environment variable naming the rpm binary when `--rpm` is not given.
pub const RPM_ENV: &str = "PKGVER_RPM";

pub struct Config<R: Runtime> {
    pub runtime: R,
    pub rpm: String,
}

impl<R: Runtime> Config<R> {
    /// Resolve the rpm binary: explicit flag, then `PKGVER_RPM`, then `rpm` on PATH.
    pub fn new(runtime: R, rpm: Option<String>) -> Self {
        let rpm = rpm
            .filter(|path| !path.is_empty())
            .or_else(|| runtime.env_var(RPM_ENV).ok().filter(|path| !path.is_empty()))
            .unwrap_or_else(|| DEFAULT_RPM.to_string());
        debug!("Using package manager binary '{}'", rpm);

        Self { runtime, rpm }
    }

    pub fn into_query(self) -> RpmQuery<R> {
        RpmQuery::new(self.runtime, self.rpm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;

    fn runtime_with_env(value: Option<&'static str>) -> MockRuntime {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_env_var()
            .with(eq(RPM_ENV))
            .returning(move |_| value.map(String::from).ok_or(std::env::VarError::NotPresent));
        runtime
    }

    #[test]
    fn test_config_defaults_to_rpm() {
        let config = Config::new(runtime_with_env(None), None);
        assert_eq!(config.rpm, "rpm");
    }

    #[test]
    fn test_config_reads_env() {
        let config = Config::new(runtime_with_env(Some("/usr/local/bin/rpm")), None);
        assert_eq!(config.rpm, "/usr/local/bin/rpm");
    }

    #[test]
    fn test_config_ignores_empty_env() {
        let config = Config::new(runtime_with_env(Some("")), None);
        assert_eq!(config.rpm, "rpm");
    }

    #[test]
    fn test_config_flag_wins() {
        let mut runtime = MockRuntime::new();
        runtime.expect_env_var().never();

        let config = Config::new(runtime, Some("/opt/rpm".into()));
        assert_eq!(config.rpm, "/opt/rpm");
        assert_eq!(config.into_query().rpm(), "/opt/rpm");
    }
}
