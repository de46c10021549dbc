//! URL construction for nozomi.la files.
//!
//! Builds the URLs of media files, post metadata JSON files and tag index
//! (`.nozomi`) files from sanitized tags, post IDs and media descriptors.

mod post_id;
mod shard;
mod tag;

pub use post_id::parse_post_id;
pub use shard::shard_path;
pub use tag::{encode_tag, sanitize_tag, validate_tag_sanitized};

use crate::error::{NozomiError, Result};
use crate::media::MediaMetaData;

/// Host serving tag index and post JSON files.
const JSON_HOST: &str = "https://j.nozomi.la";

/// Builds the URL of a media file on a post.
///
/// Videos are served from `v.` with their own extension, gifs from `g.`,
/// and every other image from `w.` as webp.
///
/// # Examples
///
/// - `{dataid: "abcde", is_video: false, type: "gif"}` → `https://g.nozomi.la/e/d/abcde.gif`
/// - `{dataid: "abcde", is_video: true, type: "mp4"}` → `https://v.nozomi.la/e/d/abcde.mp4`
pub fn create_media_filepath(media: &MediaMetaData) -> String {
    let (subdomain, extension) = if media.is_video {
        ("v", media.media_type.as_str())
    } else if media.media_type == "gif" {
        ("g", "gif")
    } else {
        ("w", "webp")
    };
    let path = shard_path(&media.dataid);
    format!("https://{subdomain}.nozomi.la/{path}.{extension}")
}

/// Builds the URL of the `.nozomi` index file for a sanitized tag.
pub fn create_tag_filepath(sanitized_tag: &str) -> Result<String> {
    tracing::info!("creating tag filepath for sanitized tag '{}'", sanitized_tag);
    let encoded = encode_tag(sanitized_tag).map_err(|_| {
        NozomiError::InvalidTagFormat(
            "tag must be sanitized before creating a filepath".to_string(),
        )
    })?;
    Ok(format!("{JSON_HOST}/nozomi/{encoded}.nozomi"))
}

/// Builds the URL of a post's metadata JSON file.
pub fn create_post_filepath(post_id: u64) -> String {
    tracing::info!("creating post filepath for post id {}", post_id);
    let path = shard_path(&post_id.to_string());
    format!("{JSON_HOST}/post/{path}.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(dataid: &str, is_video: bool, media_type: &str) -> MediaMetaData {
        MediaMetaData {
            dataid: dataid.to_string(),
            is_video,
            media_type: media_type.to_string(),
            ..MediaMetaData::default()
        }
    }

    #[test]
    fn media_gif() {
        assert_eq!(
            create_media_filepath(&media("abcde", false, "gif")),
            "https://g.nozomi.la/e/d/abcde.gif"
        );
    }

    #[test]
    fn media_image_as_webp() {
        assert_eq!(
            create_media_filepath(&media("abcde", false, "jpg")),
            "https://w.nozomi.la/e/d/abcde.webp"
        );
        assert_eq!(
            create_media_filepath(&media("abcde", false, "png")),
            "https://w.nozomi.la/e/d/abcde.webp"
        );
    }

    #[test]
    fn media_video_keeps_type() {
        assert_eq!(
            create_media_filepath(&media("abcde", true, "mp4")),
            "https://v.nozomi.la/e/d/abcde.mp4"
        );
        // Video flag wins over the gif type.
        assert_eq!(
            create_media_filepath(&media("abcde", true, "gif")),
            "https://v.nozomi.la/e/d/abcde.gif"
        );
    }

    #[test]
    fn media_short_hash() {
        assert_eq!(
            create_media_filepath(&media("ab", false, "gif")),
            "https://g.nozomi.la/ab.gif"
        );
    }

    #[test]
    fn tag_filepath() {
        assert_eq!(
            create_tag_filepath("cat").unwrap(),
            "https://j.nozomi.la/nozomi/cat.nozomi"
        );
        assert_eq!(
            create_tag_filepath("fate/stay_night").unwrap(),
            "https://j.nozomi.la/nozomi/fate%2fstay_night.nozomi"
        );
    }

    #[test]
    fn tag_filepath_requires_sanitized() {
        match create_tag_filepath("-cat") {
            Err(NozomiError::InvalidTagFormat(msg)) => assert!(msg.contains("sanitized")),
            other => panic!("expected InvalidTagFormat, got {other:?}"),
        }
        assert!(matches!(
            create_tag_filepath(""),
            Err(NozomiError::InvalidTagFormat(_))
        ));
    }

    #[test]
    fn post_filepath() {
        assert_eq!(
            create_post_filepath(123),
            "https://j.nozomi.la/post/3/2/123.json"
        );
        assert_eq!(create_post_filepath(12), "https://j.nozomi.la/post/12.json");
        assert_eq!(
            create_post_filepath(123456),
            "https://j.nozomi.la/post/6/5/123456.json"
        );
    }
}
