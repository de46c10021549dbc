//! `nozomi post-media` – list media URLs from a local post JSON file.

use anyhow::{Context, Result};
use nozomi_core::PostMetadata;
use std::fs;
use std::path::Path;

use super::Resolved;

pub fn run_post_media(path: &Path) -> Result<Vec<Resolved>> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let post = PostMetadata::from_json(&text).with_context(|| format!("decode {}", path.display()))?;
    tracing::info!(postid = post.postid, "listing media for post");
    Ok(post
        .imageurls
        .iter()
        .zip(post.media_filepaths())
        .map(|(media, url)| Resolved::new(media.dataid.as_str(), url))
        .collect())
}
