mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use crate::config::Settings;
use crate::core::Analyzer;
use crate::models::{ScoringConfig, Vocabulary};
use crate::routes::analyze::AppState;
use crate::services::{CategoryClassifier, GrammarClient};
use std::sync::Arc;
use tracing::{error, info, warn};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Resume Screen service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Build the read-only vocabularies
    let vocab = Vocabulary::new(
        settings.vocab.skills,
        settings.vocab.action_verbs,
        settings.vocab.important_skills,
    );

    info!(
        "Vocabulary loaded: {} skills, {} action verbs, {} important skills",
        vocab.skills.len(),
        vocab.action_verbs.len(),
        vocab.important_skills.len()
    );

    // Initialize the analyzer with the canonical scoring configuration
    let scoring = ScoringConfig {
        skill_threshold: settings.scoring.skill_threshold,
        word_boundary: settings.scoring.word_boundary,
        grammar_scale: settings.scoring.grammar_scale,
        keyword_variant: settings.scoring.keyword_variant,
        weights: settings.scoring.weights,
    };

    info!("Analyzer initialized with weights: {:?}", scoring.weights);

    let analyzer = Arc::new(Analyzer::new(vocab, scoring));

    // Initialize the grammar-check collaborator (optional)
    let grammar = settings.grammar.endpoint.map(|endpoint| {
        info!("Grammar check enabled via {}", endpoint);
        Arc::new(GrammarClient::new(
            endpoint,
            settings.grammar.language,
            settings.grammar.timeout_secs,
        ))
    });

    if grammar.is_none() {
        warn!("No grammar endpoint configured, analyses will use the neutral grammar score");
    }

    // Load the category model (optional - the service runs without it)
    let classifier = match settings.classifier.model_path {
        Some(path) => match CategoryClassifier::load(&path) {
            Ok(model) => {
                info!("Category model loaded from {} ({} classes)", path, model.classes().len());
                Some(Arc::new(model))
            }
            Err(e) => {
                warn!("Category model unavailable, classification disabled: {}", e);
                None
            }
        },
        None => {
            warn!("No category model configured, classification disabled");
            None
        }
    };

    // Build application state
    let app_state = AppState {
        analyzer,
        grammar,
        classifier,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
