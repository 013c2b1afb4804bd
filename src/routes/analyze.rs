use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{AnalysisError, Analyzer};
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, ErrorResponse, FeaturesRequest, FeaturesResponse,
    GrammarReport, HealthResponse,
};
use crate::services::{feature_vector, CategoryClassifier, GrammarClient};

/// Application state shared across all handlers
///
/// Everything here is immutable after startup; concurrent requests share
/// it read-only.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub grammar: Option<Arc<GrammarClient>>,
    pub classifier: Option<Arc<CategoryClassifier>>,
}

/// Configure all resume-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/resume/analyze", web::post().to(analyze_resume))
        .route("/resume/features", web::post().to(extract_features));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        grammar_configured: state.grammar.is_some(),
        classifier_loaded: state.classifier.is_some(),
        timestamp: chrono::Utc::now(),
    })
}

/// Full resume analysis endpoint
///
/// POST /api/v1/resume/analyze
///
/// Request body:
/// ```json
/// {
///   "text": "string",
///   "checkGrammar": true,
///   "classify": true,
///   "includeIssues": false
/// }
/// ```
async fn analyze_resume(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for analyze request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "input_missing".to_string(),
            message: "provide resume text".to_string(),
            status_code: 400,
        });
    }

    let mut notes = Vec::new();
    let scale = state.analyzer.scoring().grammar_scale;

    // Grammar stage: external collaborator applied to the raw text,
    // soft-failing to the neutral score
    let grammar_report = match (&state.grammar, req.check_grammar) {
        (Some(client), true) => match client.check(&req.text).await {
            Ok(issues) => GrammarReport::from_issues(issues, scale),
            Err(e) => {
                tracing::warn!("Grammar check failed, using neutral score: {}", e);
                notes.push("grammar check unavailable; neutral score applied".to_string());
                GrammarReport::neutral(scale)
            }
        },
        (None, true) => {
            notes.push("grammar check not configured; neutral score applied".to_string());
            GrammarReport::neutral(scale)
        }
        (_, false) => GrammarReport::neutral(scale),
    };

    let analysis = match state.analyzer.analyze(&req.text, &grammar_report) {
        Ok(analysis) => analysis,
        Err(AnalysisError::InputMissing) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "input_missing".to_string(),
                message: "provide resume text".to_string(),
                status_code: 400,
            });
        }
    };

    // Classification stage: independent of scoring, never a hard failure
    let predicted_category = match (&state.classifier, req.classify) {
        (Some(model), true) => {
            let vector = feature_vector(&analysis.composite.features);
            match model.predict(&vector) {
                Ok(label) => Some(label.to_string()),
                Err(e) => {
                    tracing::warn!("Classification failed: {}", e);
                    notes.push("classification unavailable".to_string());
                    None
                }
            }
        }
        (None, true) => {
            notes.push("no category model loaded".to_string());
            None
        }
        (_, false) => None,
    };

    tracing::info!(
        "Analyzed resume: score={}, tier={}, weak_points={}",
        analysis.composite.score,
        analysis.composite.tier,
        analysis.weak_points.len()
    );

    HttpResponse::Ok().json(AnalyzeResponse {
        analysis_id: uuid::Uuid::new_v4().to_string(),
        features: analysis.composite.features,
        composite_score: analysis.composite.score,
        tier: analysis.composite.tier,
        weak_points: analysis.weak_points,
        predicted_category,
        grammar_issues: if req.include_issues {
            grammar_report.issues
        } else {
            vec![]
        },
        notes,
        timestamp: chrono::Utc::now(),
    })
}

/// Feature extraction endpoint (no collaborator calls)
///
/// POST /api/v1/resume/features
async fn extract_features(
    state: web::Data<AppState>,
    req: web::Json<FeaturesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for features request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "input_missing".to_string(),
            message: "provide resume text".to_string(),
            status_code: 400,
        });
    }

    match state.analyzer.analyze_without_grammar(&req.text) {
        Ok(analysis) => HttpResponse::Ok().json(FeaturesResponse {
            features: analysis.composite.features,
            weak_points: analysis.weak_points,
            timestamp: chrono::Utc::now(),
        }),
        Err(AnalysisError::InputMissing) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "input_missing".to_string(),
            message: "provide resume text".to_string(),
            status_code: 400,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            grammar_configured: false,
            classifier_loaded: false,
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
