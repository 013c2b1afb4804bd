use crate::models::{CompositeWeights, FeatureSet, Tier};

/// Caps applied to the experience and keyword terms before weighting.
/// Deliberate ceiling policies: a resume repeating one action verb 500
/// times must not dominate the composite.
const EXPERIENCE_CAP: f64 = 50.0;
const KEYWORD_CAP: f64 = 100.0;

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Canonical weighted composite formula (Stage 6)
///
/// ```text
/// score = w.skills     * coverage_pct
///       + w.experience * min(experience_count, 50) * 2
///       + w.keyword    * min(keyword_score, 100)
///       + w.grammar    * grammar_score
/// ```
///
/// The default grammar weight assumes the 100-point grammar scale. The
/// result is rounded to 2 decimal places and deliberately not clamped
/// above 100; extreme inputs read as "exceptionally strong".
pub fn composite_score(
    skills_coverage_pct: f64,
    experience_count: u32,
    keyword_score: f64,
    grammar_score: f64,
    weights: &CompositeWeights,
) -> f64 {
    let experience_term = (experience_count as f64).min(EXPERIENCE_CAP) * 2.0;
    let keyword_term = keyword_score.min(KEYWORD_CAP);

    round2(
        weights.skills * skills_coverage_pct
            + weights.experience * experience_term
            + weights.keyword * keyword_term
            + weights.grammar * grammar_score,
    )
}

/// Composite score plus tier for an extracted feature set
pub fn composite_for(features: &FeatureSet, weights: &CompositeWeights) -> (f64, Tier) {
    let score = composite_score(
        features.skills_coverage_pct,
        features.experience_count,
        features.keyword_score,
        features.grammar_score,
        weights,
    );
    (score, Tier::from_score(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights() -> CompositeWeights {
        CompositeWeights::default()
    }

    #[test]
    fn test_canonical_formula() {
        // 0.4*50 + 0.3*min(10,50)*2 + 0.2*min(80,100) + 0.1*90
        let score = composite_score(50.0, 10, 80.0, 90.0, &weights());
        assert_eq!(score, 51.0);
    }

    #[test]
    fn test_experience_cap() {
        let capped = composite_score(0.0, 50, 0.0, 0.0, &weights());
        let over = composite_score(0.0, 500, 0.0, 0.0, &weights());
        assert_eq!(capped, 30.0);
        assert_eq!(over, capped);
    }

    #[test]
    fn test_keyword_cap() {
        let capped = composite_score(0.0, 0, 100.0, 0.0, &weights());
        let over = composite_score(0.0, 0, 1000.0, 0.0, &weights());
        assert_eq!(capped, 20.0);
        assert_eq!(over, capped);
    }

    #[test]
    fn test_not_clamped_above_100() {
        // 0.4*100 + 0.3*100 + 0.2*100 + 0.1*100 = 100; push coverage over
        let score = composite_score(120.0, 50, 100.0, 100.0, &weights());
        assert!(score > 100.0);
    }

    #[test]
    fn test_monotonic_in_each_input() {
        let base = composite_score(40.0, 5, 60.0, 80.0, &weights());
        assert!(composite_score(45.0, 5, 60.0, 80.0, &weights()) >= base);
        assert!(composite_score(40.0, 6, 60.0, 80.0, &weights()) >= base);
        assert!(composite_score(40.0, 5, 70.0, 80.0, &weights()) >= base);
        assert!(composite_score(40.0, 5, 60.0, 90.0, &weights()) >= base);
    }

    #[test]
    fn test_zero_inputs() {
        assert_eq!(composite_score(0.0, 0, 0.0, 0.0, &weights()), 0.0);
    }

    #[test]
    fn test_rounding() {
        // 0.4 * 16.67 = 6.668 -> 6.67
        let score = composite_score(16.67, 0, 0.0, 0.0, &weights());
        assert_eq!(score, 6.67);
    }
}
