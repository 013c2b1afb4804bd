use crate::core::skills::phrase_matches;

/// Minimum raw word count below which a resume reads as too short
pub const MIN_WORD_COUNT: usize = 100;

pub const WARN_TOO_SHORT: &str = "Resume seems too short.";
pub const WARN_NO_ACTION_VERBS: &str = "Weak experience section (no action verbs found).";
pub const WARN_FEW_SKILLS: &str = "Very few skills detected.";
pub const WARN_NO_NUMBERS: &str = "No measurable achievements (no numbers found).";
pub const WARN_MISSING_IMPORTANT_PREFIX: &str = "Missing important skills: ";

/// Weak-point diagnosis (Stage 7)
///
/// Fixed rule-evaluation order: length, experience, skills, missing
/// numbers, missing important skills. Every applicable rule fires; none
/// short-circuits another. The output order is the rule order, not a
/// severity ranking.
pub fn diagnose(
    raw_text: &str,
    normalized: &str,
    matched_skill_count: usize,
    experience_count: u32,
    skill_threshold: usize,
    important_skills: &[String],
    word_boundary: bool,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if raw_text.split_whitespace().count() < MIN_WORD_COUNT {
        warnings.push(WARN_TOO_SHORT.to_string());
    }

    if experience_count == 0 {
        warnings.push(WARN_NO_ACTION_VERBS.to_string());
    }

    if matched_skill_count < skill_threshold {
        warnings.push(WARN_FEW_SKILLS.to_string());
    }

    if !raw_text.chars().any(|c| c.is_ascii_digit()) {
        warnings.push(WARN_NO_NUMBERS.to_string());
    }

    let missing: Vec<&str> = important_skills
        .iter()
        .filter(|skill| !phrase_matches(normalized, skill, word_boundary))
        .map(|s| s.as_str())
        .collect();
    if !missing.is_empty() {
        warnings.push(format!(
            "{}{}",
            WARN_MISSING_IMPORTANT_PREFIX,
            missing.join(", ")
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    // ~120 words, digits present
    fn long_text() -> String {
        let mut text = String::new();
        for i in 0..120 {
            text.push_str(&format!("word{} ", i));
        }
        text
    }

    #[test]
    fn test_short_resume_rule_fires_alone() {
        // 50 words, digits present, plenty of skills and verbs
        let raw: String = (0..50).map(|i| format!("word{} ", i)).collect();
        let warnings = diagnose(&raw, &raw.to_lowercase(), 10, 5, 3, &[], false);
        assert_eq!(warnings, vec![WARN_TOO_SHORT.to_string()]);
    }

    #[test]
    fn test_no_action_verbs_rule() {
        let raw = long_text();
        let warnings = diagnose(&raw, &raw, 10, 0, 3, &[], false);
        assert_eq!(warnings, vec![WARN_NO_ACTION_VERBS.to_string()]);
    }

    #[test]
    fn test_few_skills_rule() {
        let raw = long_text();
        let warnings = diagnose(&raw, &raw, 2, 5, 3, &[], false);
        assert_eq!(warnings, vec![WARN_FEW_SKILLS.to_string()]);

        // Threshold boundary: exactly at threshold does not fire
        let warnings = diagnose(&raw, &raw, 3, 5, 3, &[], false);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_no_numbers_rule() {
        let raw: String = (0..120).map(|_| "word ").collect();
        let warnings = diagnose(&raw, &raw, 10, 5, 3, &[], false);
        assert_eq!(warnings, vec![WARN_NO_NUMBERS.to_string()]);
    }

    #[test]
    fn test_missing_important_skills_rule() {
        let raw = long_text();
        let important = vec!["python".to_string(), "sql".to_string()];
        let normalized = format!("{} python", raw);
        let warnings = diagnose(&raw, &normalized, 10, 5, 3, &important, false);
        assert_eq!(
            warnings,
            vec![format!("{}sql", WARN_MISSING_IMPORTANT_PREFIX)]
        );
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let raw = "short text without verbs or skills";
        let important = vec!["python".to_string()];
        let warnings = diagnose(raw, raw, 0, 0, 3, &important, false);
        assert_eq!(
            warnings,
            vec![
                WARN_TOO_SHORT.to_string(),
                WARN_NO_ACTION_VERBS.to_string(),
                WARN_FEW_SKILLS.to_string(),
                WARN_NO_NUMBERS.to_string(),
                format!("{}python", WARN_MISSING_IMPORTANT_PREFIX),
            ]
        );
    }
}
