use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::models::FeatureSet;

/// Number of features the model was trained on; the vector order is a
/// hard external contract
pub const FEATURE_DIM: usize = 4;

/// Errors from the classification collaborator
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact unavailable: {0}")]
    Unavailable(String),

    #[error("prediction failed: {0}")]
    Prediction(String),
}

/// Pre-trained job-category classifier
///
/// Loaded once at startup from an opaque JSON artifact: a per-feature
/// standard scaler plus per-class linear coefficients and intercepts.
/// Prediction scales the feature vector and takes the argmax of the class
/// scores. Training and serialization of the artifact are out of scope;
/// this adapter only enforces the input contract.
pub struct CategoryClassifier {
    classes: Vec<String>,
    scaler: Scaler,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct ModelArtifact {
    classes: Vec<String>,
    scaler: Scaler,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct Scaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

/// Build the model's feature vector in its fixed training order:
/// skills count, keyword score, experience count, grammar score
pub fn feature_vector(features: &FeatureSet) -> [f64; FEATURE_DIM] {
    [
        features.skills_count as f64,
        features.keyword_score,
        features.experience_count as f64,
        features.grammar_score,
    ]
}

impl CategoryClassifier {
    /// Load the model artifact from disk, validating its shape
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ModelError::Unavailable(format!("{}: {}", path.as_ref().display(), e)))?;

        let artifact: ModelArtifact = serde_json::from_str(&raw)
            .map_err(|e| ModelError::Unavailable(format!("invalid model artifact: {}", e)))?;

        if artifact.classes.is_empty() {
            return Err(ModelError::Unavailable("model has no classes".to_string()));
        }
        if artifact.scaler.mean.len() != FEATURE_DIM || artifact.scaler.scale.len() != FEATURE_DIM {
            return Err(ModelError::Unavailable(format!(
                "scaler expects {} features",
                FEATURE_DIM
            )));
        }
        if artifact.coefficients.len() != artifact.classes.len()
            || artifact.intercepts.len() != artifact.classes.len()
            || artifact.coefficients.iter().any(|row| row.len() != FEATURE_DIM)
        {
            return Err(ModelError::Unavailable(
                "coefficient shape does not match classes/features".to_string(),
            ));
        }

        Ok(Self {
            classes: artifact.classes,
            scaler: artifact.scaler,
            coefficients: artifact.coefficients,
            intercepts: artifact.intercepts,
        })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Predict a job-category label for a feature vector
    ///
    /// The vector must be in the fixed training order (see
    /// [`feature_vector`]).
    pub fn predict(&self, features: &[f64]) -> Result<&str, ModelError> {
        if features.len() != FEATURE_DIM {
            return Err(ModelError::Prediction(format!(
                "expected {} features, got {}",
                FEATURE_DIM,
                features.len()
            )));
        }
        if features.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::Prediction(
                "feature vector contains non-finite values".to_string(),
            ));
        }

        let scaled: Vec<f64> = features
            .iter()
            .zip(self.scaler.mean.iter().zip(self.scaler.scale.iter()))
            .map(|(x, (mean, scale))| {
                if *scale == 0.0 {
                    0.0
                } else {
                    (x - mean) / scale
                }
            })
            .collect();

        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (idx, (coefs, intercept)) in self
            .coefficients
            .iter()
            .zip(self.intercepts.iter())
            .enumerate()
        {
            let score: f64 =
                coefs.iter().zip(scaled.iter()).map(|(c, x)| c * x).sum::<f64>() + intercept;
            if score > best_score {
                best_score = score;
                best = idx;
            }
        }

        Ok(&self.classes[best])
    }
}
