use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::models::GrammarIssue;

/// Errors that can occur when calling the grammar-check service
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("grammar service returned error: {0}")]
    ApiError(String),
}

/// Grammar-check collaborator client
///
/// Speaks the LanguageTool check protocol: a form-encoded POST with the
/// raw (not normalized) text, answered with a list of flagged spans and
/// replacement suggestions. The call is best-effort; callers substitute
/// the neutral grammar score when it fails.
pub struct GrammarClient {
    endpoint: String,
    language: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<RawMatch>,
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    #[serde(default)]
    message: String,
    offset: usize,
    length: usize,
    context: RawContext,
    #[serde(default)]
    replacements: Vec<RawReplacement>,
}

#[derive(Debug, Default, Deserialize)]
struct RawContext {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct RawReplacement {
    value: String,
}

impl GrammarClient {
    /// Create a new grammar client
    pub fn new(endpoint: String, language: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            language,
            client,
        }
    }

    /// Check raw resume text, returning the flagged issues
    ///
    /// Punctuation and case matter for grammar checking, so this takes the
    /// original text, never the normalized form.
    pub async fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        tracing::debug!("Checking grammar via: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("text", text), ("language", &self.language)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GrammarError::ApiError(format!(
                "grammar check failed: {}",
                response.status()
            )));
        }

        let parsed: CheckResponse = response.json().await?;

        Ok(parsed
            .matches
            .into_iter()
            .map(|m| GrammarIssue {
                message: m.message,
                context: m.context.text,
                offset: m.offset,
                length: m.length,
                replacements: m.replacements.into_iter().map(|r| r.value).collect(),
            })
            .collect())
    }
}
