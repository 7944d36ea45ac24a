//! Text normalization for written answers.

use unicode_normalization::UnicodeNormalization;

const ARTICLES: [&str; 3] = ["a", "an", "the"];

/// Canonicalize an English answer for comparison.
///
/// Applies NFKC, lowercases, folds the right single quote to `'`, turns every
/// character outside `[a-z0-9' ]` into a space, collapses whitespace, and drops
/// leading articles.
pub fn normalize_english(text: &str) -> String {
    let folded: String = text.nfkc().collect();
    let lowered = folded.trim().to_lowercase().replace('\u{2019}', "'");

    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || c == '\'' {
                c
            } else {
                ' '
            }
        })
        .collect();

    let collapsed = normalize_whitespace(&cleaned);
    strip_articles(&collapsed).to_string()
}

/// Canonicalize a kanji answer: NFKC, then remove all whitespace
/// (including the ideographic space U+3000).
pub fn normalize_kanji(text: &str) -> String {
    let folded: String = text.nfkc().collect();
    folded.trim().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Trim and collapse runs of whitespace into single spaces.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Repeats so that "the a book" and "a book" normalize the same way on every pass.
fn strip_articles(mut s: &str) -> &str {
    'outer: loop {
        for article in ARTICLES {
            if let Some(rest) = s.strip_prefix(article) {
                if rest.starts_with(' ') {
                    s = rest.trim_start();
                    continue 'outer;
                }
            }
        }
        return s;
    }
}
