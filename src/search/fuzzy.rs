//! Fuzzy string ratios on a 0-100 scale.
//!
//! `partial_token_sort_ratio` ignores word order, case and punctuation,
//! and scores a short query by the best matching stretch of the longer
//! text, so "luke" scores 100 against "Luke Skywalker".

/// Lowercase, turn every non-alphanumeric character into a space, trim.
#[must_use]
pub fn process(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                ' '
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Processed text with its words sorted and single-space joined.
#[must_use]
pub fn token_sort(text: &str) -> String {
    let processed = process(text);
    let mut tokens: Vec<&str> = processed.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Best ratio of the shorter string against every equal-length window of
/// the longer one. Either string empty scores 0.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    if short.is_empty() {
        return 0;
    }
    if long.contains(short) {
        return 100;
    }

    let width = short.chars().count();
    let bounds: Vec<usize> = long
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(long.len()))
        .collect();

    let mut best = 0.0_f64;
    for start in 0..bounds.len().saturating_sub(width) {
        let window = &long[bounds[start]..bounds[start + width]];
        let similarity = strsim::normalized_levenshtein(short, window);
        if similarity > best {
            best = similarity;
        }
    }
    (best * 100.0).round() as u8
}

/// `partial_ratio` of the token-sorted forms of both strings.
#[must_use]
pub fn partial_token_sort_ratio(a: &str, b: &str) -> u8 {
    partial_ratio(&token_sort(a), &token_sort(b))
}
