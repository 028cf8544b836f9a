use crate::types::{Clip, Movie};

/// Character cap for descriptions in human-readable output.
pub const DESCRIPTION_DISPLAY_LIMIT: usize = 300;

/// Format a movie as a human-readable block.
pub fn format_movie_readable(movie: &Movie) -> String {
    let mut output = String::new();

    output.push_str(&format!("Title: {}\n", movie.title));
    output.push_str(&format!("Category: {}\n", movie.category));
    output.push_str(&format!("Stars: {}\n", movie.stars.join(", ")));
    output.push_str(&format!("Duration: {} minutes\n", movie.duration_minutes));
    output.push_str(&format!(
        "Description: {}\n",
        truncate_chars(&movie.description, DESCRIPTION_DISPLAY_LIMIT)
    ));

    output
}

/// Format a clip as a one-line entry.
pub fn format_clip_readable(clip: &Clip) -> String {
    format!("{} ({} min)", clip.title, clip.duration_minutes)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
