use crate::prelude::{println, *};
use chrono::{DateTime, Utc};
use fbgraph_core::Comment;

pub mod list;
pub mod read;

#[derive(Debug, clap::Parser)]
#[command(name = "comments")]
#[command(about = "Comment responses (single comment or the comments edge)")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Map a `/{object-id}/comments` response
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Map a single comment response
    #[clap(name = "read")]
    Read(read::ReadOptions),
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!(
            "JSON store: {}",
            if global.json_store {
                "enabled"
            } else {
                "disabled"
            }
        );
        println!();
    }

    match app.command {
        Commands::List(options) => list::run(options, global),
        Commands::Read(options) => read::run(options, global),
    }
}

/// Format a comment timestamp for display
pub fn format_timestamp(time: Option<DateTime<Utc>>) -> Option<String> {
    time.map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Display name of a comment's author, falling back to its id
pub fn author_name(comment: &Comment) -> String {
    comment
        .from()
        .and_then(|from| from.name().or(from.id()))
        .unwrap_or("unknown")
        .to_string()
}
