//! Media descriptors and post metadata as found in a post's JSON file.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::paths::{create_media_filepath, create_post_filepath};

/// One media file attached to a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMetaData {
    /// Content hash; drives the sharded file path.
    pub dataid: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_video: bool,
    /// File type as reported by the site, e.g. "gif", "jpg" or "mp4".
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub imageurl: Option<String>,
}

/// The part of a post's JSON file needed to locate its files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    pub postid: u64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub imageurls: Vec<MediaMetaData>,
}

impl PostMetadata {
    /// Decode a post JSON document. Unknown keys are ignored.
    pub fn from_json(text: &str) -> Result<Self> {
        let post: PostMetadata = serde_json::from_str(text)?;
        tracing::debug!(
            postid = post.postid,
            media = post.imageurls.len(),
            "decoded post metadata"
        );
        Ok(post)
    }

    /// URLs of every media file on the post, in listing order.
    pub fn media_filepaths(&self) -> Vec<String> {
        self.imageurls.iter().map(create_media_filepath).collect()
    }

    /// URL of this post's own JSON file.
    pub fn json_filepath(&self) -> String {
        create_post_filepath(self.postid)
    }
}

/// Raw forms the site uses for boolean flags.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Number(i64),
    Float(f64),
    Text(String),
}

/// Truthiness of a flag: non-empty strings and non-zero numbers are set,
/// `null` is unset.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawFlag>::deserialize(deserializer)?;
    Ok(match raw {
        None => false,
        Some(RawFlag::Bool(b)) => b,
        Some(RawFlag::Number(n)) => n != 0,
        Some(RawFlag::Float(x)) => x != 0.0,
        Some(RawFlag::Text(s)) => !s.is_empty(),
    })
}
