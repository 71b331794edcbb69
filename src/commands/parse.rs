use anyhow::Result;
use std::io::Write;

use crate::version::{ParsedVersion, VersionValue, parse_version};

/// Print the fields of a parsed version, either as `key: value` lines or as JSON.
pub fn parse<W: Write>(out: &mut W, raw: &str, json: bool) -> Result<ParsedVersion> {
    let parsed = parse_version(raw);

    if json {
        serde_json::to_writer_pretty(&mut *out, &parsed)?;
        writeln!(out)?;
        return Ok(parsed);
    }

    let kind = match &parsed.version {
        VersionValue::Structured { .. } => "structured",
        VersionValue::Opaque(_) => "opaque",
    };
    writeln!(out, "epoch: {}", parsed.epoch)?;
    writeln!(out, "version: {} ({})", parsed.version, kind)?;
    writeln!(out, "release: {}", parsed.release)?;
    writeln!(out, "release_major: {}", parsed.release_major)?;
    writeln!(out, "release_remainder: {}", parsed.release_remainder)?;
    Ok(parsed)
}
