//! Search tag sanitation, validation and the site's tag encoder.

use crate::error::{NozomiError, Result};

/// Characters dropped from a tag during sanitation.
const STRIPPED_CHARS: [char; 3] = ['/', '#', '%'];

/// Characters the site percent-encodes in tag index file names.
const ENCODED_CHARS: [char; 7] = [';', '/', '?', ':', '@', '=', '&'];

/// Normalizes a raw search tag into the form the site indexes.
///
/// - Lowercases the tag
/// - Trims leading/trailing whitespace
/// - Removes every `/`, `#` and `%`
///
/// The result must be non-empty and must not start with `-`.
pub fn sanitize_tag(tag: &str) -> Result<String> {
    tracing::info!("sanitizing tag '{}'", tag);
    let sanitized: String = tag
        .to_lowercase()
        .trim()
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect();
    validate_tag_sanitized(&sanitized)?;
    Ok(sanitized)
}

/// Checks that a tag is in sanitized form: non-empty and not starting with `-`.
pub fn validate_tag_sanitized(tag: &str) -> Result<()> {
    tracing::debug!("validating that tag '{}' is sanitized", tag);
    if tag.is_empty() {
        return Err(NozomiError::InvalidTagFormat(format!(
            "the tag '{tag}' is invalid, cannot be empty"
        )));
    }
    if tag.starts_with('-') {
        return Err(NozomiError::InvalidTagFormat(format!(
            "the tag '{tag}' is invalid, cannot begin with character '-'"
        )));
    }
    Ok(())
}

/// Encodes a sanitized tag with the site's narrow URL encoder.
///
/// Only `; / ? : @ = &` are replaced, each by `%` and its lowercase hex code
/// point (`;` becomes `%3b`). Everything else is left as is.
pub fn encode_tag(sanitized_tag: &str) -> Result<String> {
    validate_tag_sanitized(sanitized_tag)?;
    tracing::debug!("encoding sanitized tag '{}'", sanitized_tag);
    let mut out = String::with_capacity(sanitized_tag.len());
    for c in sanitized_tag.chars() {
        if ENCODED_CHARS.contains(&c) {
            out.push_str(&format!("%{:x}", u32::from(c)));
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_trims_and_strips() {
        assert_eq!(sanitize_tag(" Foo/Bar# ").unwrap(), "foobar");
        assert_eq!(sanitize_tag("100%").unwrap(), "100");
        assert_eq!(sanitize_tag("\tBlue_Sky\n").unwrap(), "blue_sky");
    }

    #[test]
    fn strips_after_trim() {
        // Whitespace behind a stripped character survives the trim.
        assert_eq!(sanitize_tag("/ a").unwrap(), " a");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            sanitize_tag(""),
            Err(NozomiError::InvalidTagFormat(_))
        ));
        assert!(matches!(
            sanitize_tag("  #/%  "),
            Err(NozomiError::InvalidTagFormat(_))
        ));
    }

    #[test]
    fn rejects_leading_dash() {
        assert!(matches!(
            sanitize_tag("-abc"),
            Err(NozomiError::InvalidTagFormat(_))
        ));
        assert!(matches!(
            sanitize_tag("  -abc"),
            Err(NozomiError::InvalidTagFormat(_))
        ));
    }

    #[test]
    fn dash_inside_is_fine() {
        assert_eq!(sanitize_tag("a-b").unwrap(), "a-b");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for tag in ["cat", "abc123", "x", "0"] {
            let once = sanitize_tag(tag).unwrap();
            assert_eq!(sanitize_tag(&once).unwrap(), once);
        }
    }

    #[test]
    fn encodes_reserved_chars() {
        assert_eq!(encode_tag("a;b&c").unwrap(), "a%3bb%26c");
        assert_eq!(encode_tag("k?v:w@x=y").unwrap(), "k%3fv%3aw%40x%3dy");
        assert_eq!(encode_tag("a/b").unwrap(), "a%2fb");
    }

    #[test]
    fn encode_leaves_other_chars() {
        assert_eq!(encode_tag("blue_sky+1 .").unwrap(), "blue_sky+1 .");
        assert_eq!(encode_tag("café").unwrap(), "café");
    }

    #[test]
    fn encode_rejects_unsanitized() {
        assert!(matches!(
            encode_tag("-abc"),
            Err(NozomiError::InvalidTagFormat(_))
        ));
        assert!(matches!(encode_tag(""), Err(NozomiError::InvalidTagFormat(_))));
    }
}
