//! Package version parsing, ordering and installed-package checks for
//! RPM-style `[EPOCH:]VERSION[-RELEASE]` strings.

pub mod commands;
pub mod installed;
pub mod query;
pub mod runtime;
pub mod version;

pub use installed::{InstalledOptions, is_installed};
pub use version::{
    CompareOptions, ParsedVersion, Scheme, VersionValue, compare_versions, compare_versions_i32,
    compare_versions_with, parse_version,
};
