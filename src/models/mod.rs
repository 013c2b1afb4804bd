// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Vocabulary, GrammarScale, KeywordVariant, CompositeWeights, ScoringConfig, GrammarIssue, GrammarReport, FeatureSet, Tier, CompositeResult};
pub use requests::{AnalyzeRequest, FeaturesRequest};
pub use responses::{AnalyzeResponse, FeaturesResponse, HealthResponse, ErrorResponse};
