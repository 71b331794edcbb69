use anyhow::Result;
use std::io::Write;

use crate::installed::{InstalledOptions, is_installed};
use crate::query::PackageQuery;

/// Print `true` or `false` for whether `name` is installed and satisfies `version`.
#[tracing::instrument(skip(out, query))]
pub fn installed<W: Write, Q: PackageQuery>(
    out: &mut W,
    query: &Q,
    name: &str,
    version: Option<&str>,
    options: &InstalledOptions,
) -> Result<bool> {
    let result = is_installed(query, name, version, options);
    writeln!(out, "{}", result)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::MockPackageQuery;

    #[test]
    fn test_installed_prints_result() {
        let mut query = MockPackageQuery::new();
        query
            .expect_installed_version()
            .returning(|_| Some("(none):1.2-1".to_string()));

        let mut out = Vec::new();
        let result = installed(&mut out, &query, "foo", Some("1.2-1"), &InstalledOptions::default())
            .unwrap();
        assert!(result);
        assert_eq!(String::from_utf8(out).unwrap(), "true\n");

        let mut out = Vec::new();
        let result = installed(&mut out, &query, "foo", Some("1.3"), &InstalledOptions::default())
            .unwrap();
        assert!(!result);
        assert_eq!(String::from_utf8(out).unwrap(), "false\n");
    }
}
