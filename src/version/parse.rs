//! Lenient parsing of `[EPOCH:]VERSION[-RELEASE]` strings.
//!
//! Every input produces a [`ParsedVersion`]. Malformed pieces fall back to
//! their defaults instead of failing.

use super::{ParsedVersion, VersionValue};

/// Epoch marker printed by rpm when a package has no epoch.
pub const EPOCH_UNSET: &str = "(none)";

/// Release used when the input has no `-RELEASE` part.
pub const DEFAULT_RELEASE: &str = "0";

/// Parse a raw version string. Only the first `:` and the first `-` are significant.
pub fn parse_version(raw: &str) -> ParsedVersion {
    let (epoch, rest) = match raw.split_once(':') {
        Some((token, rest)) => (parse_epoch(token), rest),
        None => (0, raw),
    };

    let (version, release) = rest.split_once('-').unwrap_or((rest, DEFAULT_RELEASE));
    let (release_major, release_remainder) = split_release(release);

    ParsedVersion {
        epoch,
        version: VersionValue::parse(version),
        release: release.to_string(),
        release_major,
        release_remainder,
    }
}

fn parse_epoch(token: &str) -> u64 {
    if token == EPOCH_UNSET {
        return 0;
    }
    token.parse().unwrap_or(0)
}

/// Split a release into its leading integer and the rest, rejoined with `.`.
fn split_release(release: &str) -> (u64, String) {
    let (head, tail) = release.split_once('.').unwrap_or((release, ""));
    (head.parse().unwrap_or(0), tail.to_string())
}

impl VersionValue {
    /// Build the structured form when every segment is a plain number, else keep the raw text.
    pub fn parse(raw: &str) -> Self {
        match parse_segments(raw) {
            Some(segments) => VersionValue::Structured {
                raw: raw.to_string(),
                segments,
            },
            None => VersionValue::Opaque(raw.to_string()),
        }
    }
}

fn parse_segments(raw: &str) -> Option<Vec<u64>> {
    raw.split('.')
        .map(|segment| {
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            segment.parse::<u64>().ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let parsed = parse_version("1:2.0.3-4.el9");
        assert_eq!(parsed.epoch, 1);
        assert_eq!(parsed.version.segments(), Some(&[2, 0, 3][..]));
        assert_eq!(parsed.release, "4.el9");
        assert_eq!(parsed.release_major, 4);
        assert_eq!(parsed.release_remainder, "el9");
    }

    #[test]
    fn test_parse_without_epoch_or_release() {
        let parsed = parse_version("3.1");
        assert_eq!(parsed.epoch, 0);
        assert_eq!(parsed.version.raw(), "3.1");
        assert_eq!(parsed.release, "0");
        assert_eq!(parsed.release_major, 0);
        assert_eq!(parsed.release_remainder, "");
    }

    #[test]
    fn test_parse_unset_epoch() {
        assert_eq!(parse_version("(none):3.1-2").epoch, 0);
        assert_eq!(parse_version("0:3.1-2").epoch, 0);
    }

    #[test]
    fn test_parse_non_numeric_epoch_is_zero() {
        assert_eq!(parse_version("abc:1.0-1").epoch, 0);
        assert_eq!(parse_version(":1.0-1").epoch, 0);
        assert_eq!(parse_version("-3:1.0-1").epoch, 0);
    }

    #[test]
    fn test_parse_only_first_separators_count() {
        let parsed = parse_version("2:1.0:beta-3-4.fc40");
        assert_eq!(parsed.epoch, 2);
        assert_eq!(parsed.version, VersionValue::Opaque("1.0:beta".into()));
        assert_eq!(parsed.release, "3-4.fc40");
        assert_eq!(parsed.release_major, 0);
        assert_eq!(parsed.release_remainder, "fc40");
    }

    #[test]
    fn test_parse_release_decomposition() {
        let parsed = parse_version("1.0-12.1.el8_4");
        assert_eq!(parsed.release_major, 12);
        assert_eq!(parsed.release_remainder, "1.el8_4");

        let parsed = parse_version("1.0-rc1.2");
        assert_eq!(parsed.release_major, 0);
        assert_eq!(parsed.release_remainder, "2");

        let parsed = parse_version("1.0-");
        assert_eq!(parsed.release, "");
        assert_eq!(parsed.release_major, 0);
        assert_eq!(parsed.release_remainder, "");
    }

    #[test]
    fn test_parse_is_total() {
        for input in ["", ":", "-", ":-", "::--", "...", "(none)", "1..2", "a-b-c"] {
            let parsed = parse_version(input);
            // Opaque or structured, never a panic
            let _ = parsed.version.raw();
        }

        let parsed = parse_version("");
        assert_eq!(parsed.epoch, 0);
        assert_eq!(parsed.version, VersionValue::Opaque(String::new()));
        assert_eq!(parsed.release, "0");
    }

    #[test]
    fn test_structured_requires_numeric_segments() {
        assert!(VersionValue::parse("1.2.10").is_structured());
        assert!(VersionValue::parse("007").is_structured());
        assert!(!VersionValue::parse("1.0a").is_structured());
        assert!(!VersionValue::parse("1..0").is_structured());
        assert!(!VersionValue::parse("1.0.").is_structured());
        assert!(!VersionValue::parse("+1").is_structured());
        assert!(!VersionValue::parse("99999999999999999999999").is_structured());
    }
}
