use serde::{Deserialize, Serialize};

use crate::models::domain::{FeatureSet, GrammarIssue, Tier};

/// Response for the analyze endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(rename = "analysisId")]
    pub analysis_id: String,
    pub features: FeatureSet,
    #[serde(rename = "compositeScore")]
    pub composite_score: f64,
    pub tier: Tier,
    #[serde(rename = "weakPoints")]
    pub weak_points: Vec<String>,
    #[serde(rename = "predictedCategory", default, skip_serializing_if = "Option::is_none")]
    pub predicted_category: Option<String>,
    #[serde(rename = "grammarIssues", default, skip_serializing_if = "Vec::is_empty")]
    pub grammar_issues: Vec<GrammarIssue>,
    /// Informational notes for degraded stages (grammar unavailable,
    /// classifier unavailable)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Response for the features-only endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesResponse {
    pub features: FeatureSet,
    #[serde(rename = "weakPoints")]
    pub weak_points: Vec<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "grammarConfigured")]
    pub grammar_configured: bool,
    #[serde(rename = "classifierLoaded")]
    pub classifier_loaded: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
