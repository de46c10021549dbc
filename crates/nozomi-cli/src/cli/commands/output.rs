//! Plain or JSON rendering of resolved URLs.

use anyhow::Result;
use nozomi_core::config::OutputFormat;
use serde::Serialize;
use std::io::Write;

/// An input (tag, post, hash or file) and the URL it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub input: String,
    pub url: String,
}

impl Resolved {
    pub fn new(input: impl Into<String>, url: String) -> Self {
        Self {
            input: input.into(),
            url,
        }
    }
}

pub fn print_resolved<W: Write>(
    out: &mut W,
    format: OutputFormat,
    resolved: &[Resolved],
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for r in resolved {
                writeln!(out, "{}", r.url)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, resolved)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
