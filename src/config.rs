use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{CompositeWeights, GrammarScale, KeywordVariant};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub vocab: VocabSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub grammar: GrammarSettings,
    #[serde(default)]
    pub classifier: ClassifierSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            vocab: VocabSettings::default(),
            scoring: ScoringSettings::default(),
            grammar: GrammarSettings::default(),
            classifier: ClassifierSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Static vocabularies scanned against normalized resume text
#[derive(Debug, Clone, Deserialize)]
pub struct VocabSettings {
    #[serde(default = "default_skills")]
    pub skills: Vec<String>,
    #[serde(default = "default_action_verbs")]
    pub action_verbs: Vec<String>,
    /// Subset of skills whose absence triggers a weak-point warning
    #[serde(default)]
    pub important_skills: Vec<String>,
}

impl Default for VocabSettings {
    fn default() -> Self {
        Self {
            skills: default_skills(),
            action_verbs: default_action_verbs(),
            important_skills: vec![],
        }
    }
}

fn default_skills() -> Vec<String> {
    [
        "python", "java", "sql", "machine learning", "deep learning", "excel",
        "communication", "leadership", "tensorflow", "pytorch", "html", "css",
        "javascript", "data analysis", "project management", "tableau",
        "power bi", "problem solving",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_action_verbs() -> Vec<String> {
    ["managed", "led", "developed", "created", "designed", "organized"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_skill_threshold")]
    pub skill_threshold: usize,
    #[serde(default)]
    pub word_boundary: bool,
    #[serde(default)]
    pub grammar_scale: GrammarScale,
    #[serde(default)]
    pub keyword_variant: KeywordVariant,
    #[serde(default)]
    pub weights: CompositeWeights,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            skill_threshold: default_skill_threshold(),
            word_boundary: false,
            grammar_scale: GrammarScale::default(),
            keyword_variant: KeywordVariant::default(),
            weights: CompositeWeights::default(),
        }
    }
}

fn default_skill_threshold() -> usize { 3 }

#[derive(Debug, Clone, Deserialize)]
pub struct GrammarSettings {
    /// LanguageTool-compatible check endpoint; None disables the check
    pub endpoint: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_grammar_timeout")]
    pub timeout_secs: u64,
}

impl Default for GrammarSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            language: default_language(),
            timeout_secs: default_grammar_timeout(),
        }
    }
}

fn default_language() -> String { "en-US".to_string() }
fn default_grammar_timeout() -> u64 { 10 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassifierSettings {
    /// Path to the pre-trained category model artifact; None disables
    /// classification
    pub model_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local config file (config/local.toml, for development overrides)
    /// 4. Environment variables (prefixed with RESUME_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. RESUME_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("RESUME")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("RESUME")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocab() {
        let vocab = VocabSettings::default();
        assert!(vocab.skills.contains(&"python".to_string()));
        assert!(vocab.skills.contains(&"machine learning".to_string()));
        assert_eq!(vocab.action_verbs.len(), 6);
        assert!(vocab.important_skills.is_empty());
    }

    #[test]
    fn test_default_scoring() {
        let scoring = ScoringSettings::default();
        assert_eq!(scoring.skill_threshold, 3);
        assert!(!scoring.word_boundary);
        assert_eq!(scoring.weights.skills, 0.4);
        assert_eq!(scoring.weights.experience, 0.3);
        assert_eq!(scoring.weights.keyword, 0.2);
        assert_eq!(scoring.weights.grammar, 0.1);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
