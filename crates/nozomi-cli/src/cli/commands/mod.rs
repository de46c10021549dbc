//! CLI command handlers. Each command resolves its inputs to URLs; printing is shared.

mod media;
mod output;
mod post;
mod post_media;
mod tag;

pub use media::run_media;
pub use output::{print_resolved, Resolved};
pub use post::run_post;
pub use post_media::run_post_media;
pub use tag::run_tag;
