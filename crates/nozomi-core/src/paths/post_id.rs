//! Post ID extraction from post page URLs.

use crate::error::{NozomiError, Result};

const POST_PREFIX: &str = "post/";
const POST_SUFFIX: &str = ".html";

/// Extracts the numeric post ID from a URL like `https://nozomi.la/post/123456.html`.
///
/// The ID is the shortest text between the first `post/` and the next `.html`.
/// Fails with `InvalidUrlFormat` when there is no such segment and with
/// `InvalidPostId` when the captured text is not a non-negative integer.
pub fn parse_post_id(url: &str) -> Result<u64> {
    tracing::info!("parsing post id from url {}", url);
    let raw = capture_post_segment(url).ok_or_else(|| {
        NozomiError::InvalidUrlFormat(format!("the provided url {url} could not be parsed"))
    })?;
    raw.parse::<u64>().map_err(|_| NozomiError::InvalidPostId {
        url: url.to_string(),
        raw: raw.to_string(),
    })
}

/// Text between the first `post/` and the following `.html`, if both exist.
fn capture_post_segment(url: &str) -> Option<&str> {
    let start = url.find(POST_PREFIX)? + POST_PREFIX.len();
    let rest = &url[start..];
    let end = rest.find(POST_SUFFIX)?;
    Some(&rest[..end])
}
