//! RPM segment ordering.
//!
//! Strings are split into alternating runs of digits and letters, with any
//! other character acting as a separator. Numeric runs compare numerically,
//! alphabetic runs compare lexically, and a numeric run is newer than an
//! alphabetic one. `~` sorts before anything (pre-releases), `^` sorts after
//! the plain version but before any further segment (snapshots).

use std::cmp::Ordering;

fn is_separator(c: char) -> bool {
    !c.is_ascii_alphanumeric() && c != '~' && c != '^'
}

/// Split off the leading run of characters matching `pred`.
fn take_run(s: &str, pred: impl Fn(char) -> bool) -> (&str, &str) {
    let end = s.find(|c: char| !pred(c)).unwrap_or(s.len());
    s.split_at(end)
}

/// Compare two version or release strings the way `rpm` orders them.
pub fn rpmvercmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let mut left = a;
    let mut right = b;

    loop {
        left = left.trim_start_matches(is_separator);
        right = right.trim_start_matches(is_separator);

        match (left.strip_prefix('~'), right.strip_prefix('~')) {
            (Some(l), Some(r)) => {
                left = l;
                right = r;
                continue;
            }
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => {}
        }

        // A caret beats the end of the other string but loses to any segment
        match (left.strip_prefix('^'), right.strip_prefix('^')) {
            (Some(l), Some(r)) => {
                left = l;
                right = r;
                continue;
            }
            (Some(_), None) if right.is_empty() => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) if left.is_empty() => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => {}
        }

        if left.is_empty() || right.is_empty() {
            break;
        }

        let numeric = left.starts_with(|c: char| c.is_ascii_digit());
        let pred = |c: char| {
            if numeric {
                c.is_ascii_digit()
            } else {
                c.is_ascii_alphabetic()
            }
        };

        let (l_run, l_rest) = take_run(left, pred);
        let (r_run, r_rest) = take_run(right, pred);

        // Segments of different kinds: numbers are newer than letters
        if r_run.is_empty() {
            return if numeric {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let ord = if numeric {
            let l_num = l_run.trim_start_matches('0');
            let r_num = r_run.trim_start_matches('0');
            l_num.len().cmp(&r_num.len()).then_with(|| l_num.cmp(r_num))
        } else {
            l_run.cmp(r_run)
        };
        if ord != Ordering::Equal {
            return ord;
        }

        left = l_rest;
        right = r_rest;
    }

    // Whichever side still has segments is newer
    match (left.is_empty(), right.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, _) => Ordering::Greater,
    }
}
