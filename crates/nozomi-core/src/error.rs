//! Error type for tag, post ID and post JSON handling.

use thiserror::Error;

/// Failure of one of the path or input-normalization helpers.
///
/// Every helper returns these directly; nothing is logged and dropped.
#[derive(Debug, Error)]
pub enum NozomiError {
    /// Tag is empty, starts with `-`, or was not sanitized before use.
    #[error("invalid tag format: {0}")]
    InvalidTagFormat(String),

    /// URL does not contain a `post/<id>.html` segment.
    #[error("invalid url format: {0}")]
    InvalidUrlFormat(String),

    /// The `post/<id>.html` segment was found but `<id>` is not an integer.
    #[error("invalid post id {raw:?} in url {url}")]
    InvalidPostId { url: String, raw: String },

    /// Post metadata JSON could not be decoded.
    #[error("invalid post json: {0}")]
    InvalidPostJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NozomiError>;
