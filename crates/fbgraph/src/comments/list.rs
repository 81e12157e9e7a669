use crate::prelude::{println, *};
use colored::Colorize;
use fbgraph_core::{create_comment_list, Comment, JsonStore, ResponseList};
use std::path::PathBuf;

use super::{author_name, format_timestamp, truncate_text};

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// File holding the response body; reads stdin when omitted
    #[arg(short, long, env = "FBGRAPH_FILE")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the raw JSON recorded for each comment (requires --json-store)
    #[arg(long, conflicts_with = "json")]
    pub raw: bool,
}

pub fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let conf = global.configuration();
    if options.raw && !conf.is_json_store_enabled() {
        return Err(Error::JsonStoreDisabled.into());
    }

    let res = crate::input::read_response(options.file.as_deref())?;
    let mut store = JsonStore::new();
    let comments = create_comment_list(&res, &conf, &mut store).map_err(Error::from)?;

    if global.verbose {
        println!("Mapped {} comments", comments.len());
    }

    if options.raw {
        println!("{}", format_raw(&comments, &store)?);
    } else if options.json {
        println!("{}", format_list_json(&comments)?);
    } else {
        println!("{}", format_list_text(&comments));
    }

    Ok(())
}

/// Convert the comment list to a JSON string
fn format_list_json(comments: &ResponseList<Comment>) -> Result<String> {
    serde_json::to_string_pretty(comments).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// One raw JSON document per line, in response order
///
/// Reads the recorded `data` array rather than per-comment entries, since
/// comments without an `id` (or sharing one) collapse to a single entry.
fn format_raw(comments: &ResponseList<Comment>, store: &JsonStore) -> Result<String> {
    let data = store
        .raw_json(comments)
        .and_then(|raw| raw.as_array())
        .ok_or_else(|| eyre!("No raw JSON recorded for this comment list"))?;

    Ok(data
        .iter()
        .map(|element| element.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Render the comment list as a table followed by paging information
fn format_list_text(comments: &ResponseList<Comment>) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!("COMMENTS ({})", comments.len()).bright_cyan().bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if comments.is_empty() {
        result.push_str(&format!("\n{}\n", "No comments in this response.".yellow()));
    } else {
        let mut table = new_table();
        table.set_titles(prettytable::row!["ID", "From", "Created", "Likes", "Message"]);

        for comment in comments {
            table.add_row(prettytable::row![
                comment.id().unwrap_or("-"),
                author_name(comment),
                format_timestamp(comment.created_time()).unwrap_or_else(|| "-".to_string()),
                comment
                    .like_count()
                    .map_or_else(|| "-".to_string(), |n| n.to_string()),
                truncate_text(comment.message().unwrap_or(""), 60)
            ]);
        }

        result.push('\n');
        result.push_str(&table.to_string());
    }

    if let Some(summary) = comments.summary() {
        if let Some(total) = summary.total_count {
            result.push_str(&format!("\n{}: {}\n", "Total".green(), total));
        }
    }

    if let Some(paging) = comments.paging() {
        if let Some(after) = paging.cursors.as_ref().and_then(|c| c.after.as_deref()) {
            result.push_str(&format!("{}: {}\n", "After cursor".green(), after));
        }
        if let Some(next) = &paging.next {
            result.push_str(&format!("{}: {}\n", "Next page".green(), next.cyan()));
        }
    }

    result
}
