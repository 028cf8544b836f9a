//! Heuristic extraction of movie metadata from free-text titles and
//! descriptions.
//!
//! This is approximate, rule-of-thumb parsing with no grammatical
//! validation; false positives and negatives are expected and accepted.

/// Non-name terms that commonly appear capitalized in upload titles.
pub const DEFAULT_STOPLIST: &[&str] = &[
    "Latest", "Yoruba", "Movie", "Drama", "Part", "Episode", "Starring",
];

/// Keep only the text before the first `-` or `|`, trimmed.
///
/// Uploaders place the movie name before a separator; titles without one
/// pass through unchanged.
pub fn clean_title(raw: &str) -> String {
    match raw.find(['-', '|']) {
        Some(idx) => raw[..idx].trim().to_string(),
        None => raw.trim().to_string(),
    }
}

/// Guess cast names from the combined title and description.
///
/// Scans for runs of capitalized words (an uppercase letter followed by
/// lowercase letters). Stoplist words are dropped and split runs, so
/// "Starring Bola Aina" yields just "Bola Aina". Candidates keep
/// first-seen order with duplicates removed; an empty result becomes
/// `["Unknown"]`.
pub fn extract_stars(title: &str, description: &str, stoplist: &[&str]) -> Vec<String> {
    let combined = format!("{} {}", title, description);
    let mut stars: Vec<String> = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    for token in combined.split_whitespace() {
        match candidate_word(token) {
            (Some(word), ends_run) if !stoplist.contains(&word) => {
                run.push(word);
                if ends_run {
                    flush_run(&mut run, &mut stars);
                }
            }
            _ => flush_run(&mut run, &mut stars),
        }
    }
    flush_run(&mut run, &mut stars);

    if stars.is_empty() {
        stars.push("Unknown".to_string());
    }
    stars
}

/// Extract the candidate word inside a whitespace token.
///
/// Leading punctuation is stripped; trailing punctuation keeps the word
/// but ends the current run.
fn candidate_word(token: &str) -> (Option<&str>, bool) {
    let Some(start) = token.find(|c: char| c.is_ascii_alphabetic()) else {
        return (None, true);
    };
    let rest = &token[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    let word = &rest[..end];
    let ends_run = end < rest.len();

    let mut chars = word.chars();
    let qualifies = matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && word.len() >= 2
        && chars.all(|c| c.is_ascii_lowercase());

    if qualifies {
        (Some(word), ends_run)
    } else {
        (None, true)
    }
}

fn flush_run(run: &mut Vec<&str>, stars: &mut Vec<String>) {
    if run.is_empty() {
        return;
    }
    let name = run.join(" ");
    if !stars.iter().any(|s| s == &name) {
        stars.push(name);
    }
    run.clear();
}

/// Join the first 5 non-empty lines of the raw description.
///
/// Each line is trimmed; an empty result becomes "No description".
pub fn summarize_description(raw: &str) -> String {
    let summary = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(5)
        .collect::<Vec<_>>()
        .join(" ");

    if summary.is_empty() {
        "No description".to_string()
    } else {
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_title_keeps_text_before_first_separator() {
        assert_eq!(
            clean_title("Aye Ife - Latest Yoruba Movie 2023"),
            "Aye Ife"
        );
        assert_eq!(clean_title("Owo Eje | Full Movie"), "Owo Eje");
        assert_eq!(clean_title("Ija-Agba - Part 2"), "Ija");
    }

    #[test]
    fn clean_title_passes_through_without_separator() {
        assert_eq!(clean_title("  Ayinla  "), "Ayinla");
        assert_eq!(clean_title("Ayinla Omowura"), "Ayinla Omowura");
    }

    #[test]
    fn stars_from_title_and_description() {
        let stars = extract_stars(
            "Aye Ife - Latest Yoruba Movie 2023 Starring Bola Aina",
            "A romantic drama.\nStarring Bola Aina and Kemi Afolabi.\n\n\n",
            DEFAULT_STOPLIST,
        );
        assert_eq!(stars, vec!["Aye Ife", "Bola Aina", "Kemi Afolabi"]);
    }

    #[test]
    fn stars_default_to_unknown() {
        let stars = extract_stars("latest yoruba movie", "no names here", DEFAULT_STOPLIST);
        assert_eq!(stars, vec!["Unknown"]);

        let stars = extract_stars("Latest Yoruba Movie", "Drama Part Episode", DEFAULT_STOPLIST);
        assert_eq!(stars, vec!["Unknown"]);
    }

    #[test]
    fn stars_are_unique_and_ordered() {
        let stars = extract_stars(
            "Bola Aina",
            "Kemi Afolabi with Bola Aina and Kemi Afolabi",
            DEFAULT_STOPLIST,
        );
        assert_eq!(stars, vec!["Bola Aina", "Kemi Afolabi"]);
    }

    #[test]
    fn stoplist_words_split_runs() {
        let stars = extract_stars("Odunlade Adekola Latest Kemi Afolabi", "", DEFAULT_STOPLIST);
        assert_eq!(stars, vec!["Odunlade Adekola", "Kemi Afolabi"]);
    }

    #[test]
    fn trailing_punctuation_ends_a_run() {
        let stars = extract_stars("", "Kemi Afolabi. Bola Aina", DEFAULT_STOPLIST);
        assert_eq!(stars, vec!["Kemi Afolabi", "Bola Aina"]);
    }

    #[test]
    fn stoplist_is_injectable() {
        let stars = extract_stars("Premiere Bola Aina", "", &["Premiere"]);
        assert_eq!(stars, vec!["Bola Aina"]);
    }

    #[test]
    fn description_summary_takes_first_five_non_empty_lines() {
        let raw = "one\n\n two \nthree\nfour\nfive\nsix";
        assert_eq!(summarize_description(raw), "one two three four five");
    }

    #[test]
    fn description_summary_defaults_when_empty() {
        assert_eq!(summarize_description(""), "No description");
        assert_eq!(summarize_description("\n  \n\n"), "No description");
    }
}
