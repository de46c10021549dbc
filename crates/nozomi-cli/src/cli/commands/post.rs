//! `nozomi post` – resolve post JSON URLs from post page URLs or IDs.

use anyhow::{Context, Result};
use nozomi_core::{create_post_filepath, parse_post_id};

use super::Resolved;

/// A bare decimal ID is taken as is; anything else must be a post page URL.
fn post_id_from_arg(arg: &str) -> Result<u64> {
    if let Ok(id) = arg.parse::<u64>() {
        return Ok(id);
    }
    parse_post_id(arg).with_context(|| format!("post '{arg}'"))
}

pub fn run_post(posts: &[String]) -> Result<Vec<Resolved>> {
    posts
        .iter()
        .map(|arg| -> Result<Resolved> {
            let id = post_id_from_arg(arg)?;
            Ok(Resolved::new(arg.as_str(), create_post_filepath(id)))
        })
        .collect()
}
