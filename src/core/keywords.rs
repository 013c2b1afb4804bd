use std::collections::HashSet;

use crate::models::KeywordVariant;

/// Keyword/density scoring (Stage 3)
///
/// The canonical variant is the total token count, which is what the
/// default composite weights assume. The distinct-token variant divides
/// the distinct count by a fixed constant of 10; the two are not
/// numerically comparable, so a deployment picks exactly one.
pub fn keyword_score(normalized: &str, variant: KeywordVariant) -> f64 {
    match variant {
        KeywordVariant::Total => normalized.split_whitespace().count() as f64,
        KeywordVariant::Distinct => {
            let distinct: HashSet<&str> = normalized.split_whitespace().collect();
            distinct.len() as f64 / 10.0
        }
    }
}
