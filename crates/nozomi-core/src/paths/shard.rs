//! Two-level directory sharding for post and media files.

/// Computes the sharded path of a media hash or stringified post ID.
///
/// IDs shorter than 3 characters are used as is. Otherwise the path is
/// `<last>/<second-to-last>/<id>`, e.g. `abcde` maps to `e/d/abcde`.
/// Works on characters, not bytes.
pub fn shard_path(id: &str) -> String {
    tracing::debug!("calculating shard path for '{}'", id);
    let mut tail = id.chars().rev();
    match (tail.next(), tail.next(), tail.next()) {
        (Some(last), Some(second_last), Some(_)) => format!("{last}/{second_last}/{id}"),
        _ => id.to_string(),
    }
}
