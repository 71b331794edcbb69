//! Package version parsing and ordering.
//!
//! Versions follow the RPM `[EPOCH:]VERSION[-RELEASE]` layout. Parsing is
//! lenient and total, and comparison always yields an ordering.
//!
//! # Structure
//!
//! - `parse` - splitting raw strings into [`ParsedVersion`]
//! - `rpmvercmp` - RPM segment ordering used by [`Scheme::Rpm`]

mod parse;
mod rpmvercmp;

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

pub use parse::{DEFAULT_RELEASE, EPOCH_UNSET, parse_version};
pub use rpmvercmp::rpmvercmp;

/// The upstream version part of a package version.
///
/// `Structured` is only built when every dot-separated segment is a plain
/// number, so numeric comparison never mixes with text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum VersionValue {
    Structured { raw: String, segments: Vec<u64> },
    Opaque(String),
}

impl VersionValue {
    /// The version text as it appeared in the input.
    pub fn raw(&self) -> &str {
        match self {
            VersionValue::Structured { raw, .. } => raw,
            VersionValue::Opaque(raw) => raw,
        }
    }

    pub fn segments(&self) -> Option<&[u64]> {
        match self {
            VersionValue::Structured { segments, .. } => Some(segments),
            VersionValue::Opaque(_) => None,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, VersionValue::Structured { .. })
    }

    /// Compare two versions under the simple scheme.
    ///
    /// Structured pairs compare segment by segment, padding the shorter side
    /// with zeros. Any other pairing falls back to lexical order of the raw text.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.segments(), other.segments()) {
            (Some(a), Some(b)) => compare_segments(a, b),
            _ => self.raw().cmp(other.raw()),
        }
    }
}

impl fmt::Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}

fn compare_segments(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for idx in 0..len {
        let left = a.get(idx).copied().unwrap_or(0);
        let right = b.get(idx).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// A version string split into epoch, version and release.
///
/// Built fresh for each comparison and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedVersion {
    pub epoch: u64,
    pub version: VersionValue,
    pub release: String,
    /// Leading integer of the release, 0 when not numeric
    pub release_major: u64,
    /// Release segments after the first, joined with `.`
    pub release_remainder: String,
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.epoch, self.version, self.release)
    }
}

/// How version and release text is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Dotted-numeric versions with a lexical fallback; release split into
    /// a leading integer and a lexical remainder.
    #[default]
    Simple,
    /// Full RPM ordering of version and release via [`rpmvercmp`].
    Rpm,
}

impl std::str::FromStr for Scheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Scheme::Simple),
            "rpm" => Ok(Scheme::Rpm),
            other => Err(anyhow::anyhow!(
                "Unknown version scheme '{}', expected 'simple' or 'rpm'",
                other
            )),
        }
    }
}

/// Options for [`compare_versions_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompareOptions {
    /// Epoch only takes part in the ordering when this is set
    pub compare_epoch: bool,
    pub scheme: Scheme,
}

impl ParsedVersion {
    /// Order two parsed versions, stopping at the first field that differs.
    pub fn compare(&self, other: &Self, options: &CompareOptions) -> Ordering {
        if options.compare_epoch {
            match self.epoch.cmp(&other.epoch) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }

        match options.scheme {
            Scheme::Simple => self
                .version
                .compare(&other.version)
                .then_with(|| self.release_major.cmp(&other.release_major))
                .then_with(|| self.release_remainder.cmp(&other.release_remainder)),
            Scheme::Rpm => rpmvercmp(self.version.raw(), other.version.raw())
                .then_with(|| rpmvercmp(&self.release, &other.release)),
        }
    }
}

/// Compare two raw version strings under the simple scheme.
///
/// Epoch is ignored unless `compare_epoch` is set.
pub fn compare_versions(a: &str, b: &str, compare_epoch: bool) -> Ordering {
    compare_versions_with(
        a,
        b,
        &CompareOptions {
            compare_epoch,
            ..Default::default()
        },
    )
}

/// Same as [`compare_versions`], returning `-1`, `0` or `1`.
pub fn compare_versions_i32(a: &str, b: &str, compare_epoch: bool) -> i32 {
    compare_versions(a, b, compare_epoch) as i32
}

pub fn compare_versions_with(a: &str, b: &str, options: &CompareOptions) -> Ordering {
    let ord = parse_version(a).compare(&parse_version(b), options);
    log::debug!("Compared '{}' with '{}': {:?}", a, b, ord);
    ord
}
