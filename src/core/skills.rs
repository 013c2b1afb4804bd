/// Skill matching against the static vocabulary
///
/// This is Stage 2 of the scoring pipeline. Matching is substring-based by
/// default: a vocabulary entry like "sql" also matches inside "sqlite".
/// That imprecision is the documented heuristic, not a bug; the stricter
/// word-boundary mode is an explicit configuration option.

/// Check whether a vocabulary phrase occurs in the normalized text
pub fn phrase_matches(normalized: &str, phrase: &str, word_boundary: bool) -> bool {
    if phrase.is_empty() {
        return false;
    }
    if !word_boundary {
        return normalized.contains(phrase);
    }
    // Normalized text has single spaces only, so padding both sides makes
    // every token boundary an explicit space
    let padded = format!(" {} ", normalized);
    padded.contains(&format!(" {} ", phrase))
}

/// Scan normalized text against the skill vocabulary
///
/// Returns the matched skills in vocabulary order. The vocabulary is
/// deduplicated at construction, so the output carries no duplicates.
pub fn match_skills(normalized: &str, vocab: &[String], word_boundary: bool) -> Vec<String> {
    vocab
        .iter()
        .filter(|skill| phrase_matches(normalized, skill, word_boundary))
        .cloned()
        .collect()
}

/// Matched-skill count over vocabulary size, as a percentage rounded to
/// 2 decimal places
pub fn coverage_pct(matched_count: usize, vocab_size: usize) -> f64 {
    if vocab_size == 0 {
        return 0.0;
    }
    let pct = matched_count as f64 / vocab_size as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}
