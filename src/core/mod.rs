// Core pipeline exports
pub mod analyzer;
pub mod diagnostics;
pub mod experience;
pub mod keywords;
pub mod normalize;
pub mod scoring;
pub mod skills;

pub use analyzer::{Analysis, AnalysisError, Analyzer};
pub use diagnostics::diagnose;
pub use experience::experience_score;
pub use keywords::keyword_score;
pub use normalize::normalize;
pub use scoring::{composite_for, composite_score, round2};
pub use skills::{coverage_pct, match_skills, phrase_matches};
