use anyhow::Result;
use std::io::Write;

use crate::version::{CompareOptions, compare_versions_with};

/// Print `-1`, `0` or `1` for `a` relative to `b`.
pub fn compare<W: Write>(out: &mut W, a: &str, b: &str, options: &CompareOptions) -> Result<i32> {
    let result = compare_versions_with(a, b, options) as i32;
    writeln!(out, "{}", result)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Scheme;

    fn run(a: &str, b: &str, options: CompareOptions) -> (i32, String) {
        let mut out = Vec::new();
        let result = compare(&mut out, a, b, &options).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_compare_prints_result() {
        assert_eq!(run("1.0-1", "1.0-2", CompareOptions::default()), (-1, "-1\n".into()));
        assert_eq!(run("2.0-1", "2.0-1", CompareOptions::default()), (0, "0\n".into()));
        assert_eq!(run("1.10", "1.9", CompareOptions::default()), (1, "1\n".into()));
    }

    #[test]
    fn test_compare_epoch_flag() {
        let epoch = CompareOptions {
            compare_epoch: true,
            scheme: Scheme::Simple,
        };
        assert_eq!(run("5:1.0-1", "0:1.0-1", CompareOptions::default()).0, 0);
        assert_eq!(run("5:1.0-1", "0:1.0-1", epoch).0, 1);
    }
}
