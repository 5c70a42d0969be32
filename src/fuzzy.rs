use std::collections::HashSet;

/// Normalize text for comparisons: lowercase, drop every character that is
/// not a lowercase letter, digit or space, collapse whitespace runs, trim.
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trigram shingles of the normalized, space-stripped text.
///
/// Strings shorter than three characters degenerate to a singleton set
/// containing the (possibly short) string itself.
pub fn trigrams(text: &str) -> HashSet<String> {
    let compact: Vec<char> = normalize(text)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if compact.len() < 3 {
        return HashSet::from([compact.into_iter().collect()]);
    }
    compact.windows(3).map(|w| w.iter().collect()).collect()
}

/// Similarity score in [0, 1] between two item names.
///
/// Substring containment in either direction wins outright; otherwise the
/// score is the Jaccard similarity of the two trigram sets. Empty or
/// non-alphanumeric input scores 0 and never errors.
pub fn similarity(a: &str, b: &str) -> f64 {
    let na = normalize(a);
    let nb = normalize(b);
    if na.is_empty() || nb.is_empty() {
        return 0.0;
    }

    if na.contains(&nb) || nb.contains(&na) {
        return 1.0;
    }

    let ta = trigrams(&na);
    let tb = trigrams(&nb);
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }

    let intersection = ta.intersection(&tb).count();
    let union = ta.union(&tb).count();
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
