use crate::prelude::{println, *};
use fbgraph_core::{Comment, JsonStore};
use std::path::PathBuf;

use super::{author_name, format_timestamp};

#[derive(Debug, clap::Args, Clone)]
pub struct ReadOptions {
    /// File holding the response body; reads stdin when omitted
    #[arg(short, long, env = "FBGRAPH_FILE")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the raw JSON recorded for the comment (requires --json-store)
    #[arg(long, conflicts_with = "json")]
    pub raw: bool,
}

pub fn run(options: ReadOptions, global: crate::Global) -> Result<()> {
    let conf = global.configuration();
    if options.raw && !conf.is_json_store_enabled() {
        return Err(Error::JsonStoreDisabled.into());
    }

    let res = crate::input::read_response(options.file.as_deref())?;
    let mut store = JsonStore::new();
    let comment = Comment::from_response(&res, &conf, &mut store).map_err(Error::from)?;

    if options.raw {
        let raw = store
            .raw_json(&comment)
            .ok_or_else(|| eyre!("No raw JSON recorded for comment {}", comment))?;
        println!("{}", serde_json::to_string_pretty(raw)?);
    } else if options.json {
        println!("{}", serde_json::to_string_pretty(&comment)?);
    } else {
        println!("{}", format_comment_text(&comment));
    }

    Ok(())
}

/// Render a single comment as a two-column table followed by its message
fn format_comment_text(comment: &Comment) -> String {
    let mut table = new_table();
    table.add_row(prettytable::row!["ID", comment.id().unwrap_or("-")]);
    table.add_row(prettytable::row!["From", author_name(comment)]);

    if let Some(created) = format_timestamp(comment.created_time()) {
        table.add_row(prettytable::row!["Created", created]);
    }

    if let Some(likes) = comment.like_count() {
        table.add_row(prettytable::row!["Likes", likes]);
    }

    if let Some(user_likes) = comment.is_user_likes() {
        table.add_row(prettytable::row!["You like this", user_likes]);
    }

    if let Some(can_remove) = comment.can_remove() {
        table.add_row(prettytable::row!["Can remove", can_remove]);
    }

    let mut result = table.to_string();

    if let Some(message) = comment.message() {
        result.push_str("\nMessage:\n");
        result.push_str(message);
        result.push('\n');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_comment_text() {
        let json = serde_json::json!({
            "id": "42",
            "from": {"id": "9", "name": "Ann"},
            "message": "Looks good",
            "created_time": "2012-08-14T05:41:23+0000",
            "like_count": 3,
            "user_likes": true
        });
        let comment = Comment::from_json(json.as_object().unwrap()).unwrap();

        let text = format_comment_text(&comment);

        assert!(text.contains("42"));
        assert!(text.contains("Ann"));
        assert!(text.contains("2012-08-14 05:41:23 UTC"));
        assert!(text.contains("You like this"));
        assert!(!text.contains("Can remove"));
        assert!(text.ends_with("Message:\nLooks good\n"));
    }
}
