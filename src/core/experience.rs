/// Experience scoring (Stage 4)
///
/// Sums non-overlapping substring occurrences of every action verb in the
/// normalized text. Same substring caveat as skill matching ("led" also
/// counts inside "knowledge" unless word-boundary mode is on). Zero is a
/// meaningful result and fires a weak-point rule downstream.
pub fn experience_score(normalized: &str, verbs: &[String], word_boundary: bool) -> u32 {
    if word_boundary {
        let padded = format!(" {} ", normalized);
        verbs
            .iter()
            .map(|verb| padded.matches(&format!(" {} ", verb)).count() as u32)
            .sum()
    } else {
        verbs
            .iter()
            .map(|verb| normalized.matches(verb.as_str()).count() as u32)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verbs() -> Vec<String> {
        ["managed", "led", "developed", "created", "designed", "organized"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_counts_all_occurrences() {
        let count = experience_score("managed a team and managed a budget led delivery", &verbs(), false);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_zero_when_no_verbs_present() {
        assert_eq!(experience_score("skills python sql excel", &verbs(), false), 0);
    }

    #[test]
    fn test_substring_counting() {
        // "led" occurs inside "knowledgeable"
        assert_eq!(experience_score("knowledgeable in rust", &verbs(), false), 1);
        assert_eq!(experience_score("knowledgeable in rust", &verbs(), true), 0);
    }

    #[test]
    fn test_word_boundary_counting() {
        let count = experience_score("led two teams and led a rewrite", &verbs(), true);
        assert_eq!(count, 2);
    }
}
