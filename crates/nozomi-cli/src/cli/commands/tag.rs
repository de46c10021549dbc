//! `nozomi tag` – sanitize tags and resolve their index files.

use anyhow::{Context, Result};
use nozomi_core::{create_tag_filepath, sanitize_tag};

use super::Resolved;

pub fn run_tag(tags: &[String]) -> Result<Vec<Resolved>> {
    tags.iter()
        .map(|raw| -> Result<Resolved> {
            let tag = sanitize_tag(raw).with_context(|| format!("tag '{raw}'"))?;
            let url = create_tag_filepath(&tag)?;
            Ok(Resolved::new(raw.as_str(), url))
        })
        .collect()
}
