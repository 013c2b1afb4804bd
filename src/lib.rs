//! Resume Screen - heuristic resume scoring and screening service
//!
//! This library implements the resume scoring pipeline: text
//! normalization, skill matching, keyword and experience scoring, weighted
//! composite scoring with tier mapping, weak-point diagnosis, and an
//! optional job-category prediction from a pre-trained classifier.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{normalize, Analysis, AnalysisError, Analyzer};
pub use crate::models::{
    CompositeResult, CompositeWeights, FeatureSet, GrammarReport, GrammarScale, ScoringConfig,
    Tier, Vocabulary,
};
