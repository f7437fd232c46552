use crate::types::PhotoSummary;
use std::fmt::Display;
use std::io::{self, Write};

fn or_none<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}

pub fn format_photo_line(photo: &PhotoSummary) -> String {
    format!(
        "- {} (Album: {}, Likes: {}, Comments: {})",
        or_none(&photo.title),
        or_none(&photo.album_title),
        or_none(&photo.likes_count),
        or_none(&photo.comments_count),
    )
}

pub fn write_report<W: Write>(out: &mut W, photos: &[PhotoSummary]) -> io::Result<()> {
    writeln!(out, "Found {} photos:", photos.len())?;
    for photo in photos {
        writeln!(out, "{}", format_photo_line(photo))?;
    }
    writeln!(out, "Connection closed.")
}

/// Joins the error chain with ": ", skipping a cause whose text the
/// previous message already ends with (sqlx repeats its source that way).
pub fn failure_reason(error: &anyhow::Error) -> String {
    let mut parts: Vec<String> = Vec::new();
    for cause in error.chain() {
        let text = cause.to_string();
        if parts.last().is_some_and(|prev| prev.ends_with(&text)) {
            continue;
        }
        parts.push(text);
    }
    parts.join(": ").replace(['\r', '\n'], " ")
}

/// Prints the error chain on a single line
pub fn write_failure<W: Write>(out: &mut W, error: &anyhow::Error) -> io::Result<()> {
    writeln!(out, "Failed to connect: {}", failure_reason(error))
}

pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &anyhow::Result<Vec<PhotoSummary>>,
) -> io::Result<()> {
    let written = match outcome {
        Ok(photos) => write_report(out, photos),
        Err(e) => write_failure(out, e),
    };
    written?;
    out.flush()
}
