//! CLI for resolving nozomi.la file URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nozomi_core::config::NozomiConfig;
use std::io::Write;
use std::path::Path;

use commands::{print_resolved, run_media, run_post, run_post_media, run_tag, Resolved};

/// Top-level CLI for the nozomi path helpers.
#[derive(Debug, Parser)]
#[command(name = "nozomi")]
#[command(about = "Resolve nozomi.la tag index, post JSON and media URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Sanitize search tags and print their .nozomi index URLs.
    Tag {
        /// Raw search tags.
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Print the post JSON URL for post page URLs or bare post IDs.
    Post {
        /// Post page URL (".../post/<id>.html") or numeric post ID.
        #[arg(required = true)]
        posts: Vec<String>,
    },

    /// Print the URL of a single media file.
    Media {
        /// Media content hash.
        dataid: String,

        /// File type reported by the site (e.g. gif, jpg, mp4).
        #[arg(long = "type", value_name = "TYPE")]
        media_type: String,

        /// The media is a video.
        #[arg(long)]
        video: bool,
    },

    /// Print the media URLs listed in a local post JSON file.
    PostMedia {
        /// Path to the post JSON file.
        path: String,
    },
}

impl CliCommand {
    /// Resolve the command's inputs and print them in the configured format.
    pub fn run<W: Write>(self, cfg: &NozomiConfig, out: &mut W) -> Result<()> {
        tracing::debug!("running with config: {:?}", cfg);

        let resolved: Vec<Resolved> = match self {
            CliCommand::Tag { tags } => run_tag(&tags)?,
            CliCommand::Post { posts } => run_post(&posts)?,
            CliCommand::Media {
                dataid,
                media_type,
                video,
            } => run_media(&dataid, &media_type, video),
            CliCommand::PostMedia { path } => run_post_media(Path::new(&path))?,
        };

        print_resolved(out, cfg.output, &resolved)
    }
}

#[cfg(test)]
mod tests;
