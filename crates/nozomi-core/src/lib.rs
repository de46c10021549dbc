pub mod config;
pub mod error;
pub mod logging;

pub mod media;
pub mod paths;

pub use error::{NozomiError, Result};
pub use media::{MediaMetaData, PostMetadata};
pub use paths::{
    create_media_filepath, create_post_filepath, create_tag_filepath, encode_tag, parse_post_id,
    sanitize_tag, shard_path, validate_tag_sanitized,
};
