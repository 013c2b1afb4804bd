use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to analyze a resume
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    /// Raw resume text (manual entry or output of an upstream text
    /// extractor)
    #[validate(length(min = 1))]
    pub text: String,
    /// Call the external grammar-check collaborator (soft-fails to the
    /// neutral score when unavailable)
    #[serde(default = "default_true")]
    #[serde(alias = "check_grammar", rename = "checkGrammar")]
    pub check_grammar: bool,
    /// Run the pre-trained category classifier if one is loaded
    #[serde(default = "default_true")]
    pub classify: bool,
    /// Include individual grammar issues in the response
    #[serde(default)]
    #[serde(alias = "include_issues", rename = "includeIssues")]
    pub include_issues: bool,
}

fn default_true() -> bool {
    true
}

/// Request for feature extraction only (no collaborator calls)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeaturesRequest {
    #[validate(length(min = 1))]
    pub text: String,
}
