use thiserror::Error;

use crate::core::{
    diagnostics::diagnose,
    experience::experience_score,
    keywords::keyword_score,
    normalize::normalize,
    scoring::composite_for,
    skills::{coverage_pct, match_skills},
};
use crate::models::{
    CompositeResult, FeatureSet, GrammarReport, ScoringConfig, Vocabulary,
};

/// Errors surfaced by the analysis pipeline
///
/// Grammar and classifier failures are recovered before they reach this
/// level (neutral score, omitted category); only missing input aborts an
/// analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no resume text provided")]
    InputMissing,
}

/// Result of one analysis pass
#[derive(Debug, Clone)]
pub struct Analysis {
    pub normalized: String,
    pub composite: CompositeResult,
    pub weak_points: Vec<String>,
}

/// Main analysis orchestrator - implements the resume scoring pipeline
///
/// # Pipeline Stages
/// 1. Text normalization
/// 2. Skill matching and coverage
/// 3. Keyword/density scoring
/// 4. Experience (action verb) scoring
/// 5. Composite scoring and tier mapping
/// 6. Weak-point diagnosis
///
/// The grammar stage runs outside this struct (it is an external
/// collaborator call); its report is passed in, already resolved to either
/// real issues or the neutral default. The whole pass is a pure function
/// of the input text, the grammar report, and the read-only vocabularies.
#[derive(Debug, Clone)]
pub struct Analyzer {
    vocab: Vocabulary,
    scoring: ScoringConfig,
}

impl Analyzer {
    pub fn new(vocab: Vocabulary, scoring: ScoringConfig) -> Self {
        Self { vocab, scoring }
    }

    pub fn with_defaults() -> Self {
        Self {
            vocab: Vocabulary::new(
                crate::config::VocabSettings::default().skills,
                crate::config::VocabSettings::default().action_verbs,
                vec![],
            ),
            scoring: ScoringConfig::default(),
        }
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Run the full pipeline over raw resume text
    ///
    /// # Arguments
    /// * `raw_text` - Unprocessed resume text
    /// * `grammar` - Grammar stage output (real or neutral)
    ///
    /// # Errors
    /// `AnalysisError::InputMissing` when the text is empty or whitespace
    pub fn analyze(
        &self,
        raw_text: &str,
        grammar: &GrammarReport,
    ) -> Result<Analysis, AnalysisError> {
        if raw_text.trim().is_empty() {
            return Err(AnalysisError::InputMissing);
        }

        let normalized = normalize(raw_text);

        let matched_skills = match_skills(
            &normalized,
            &self.vocab.skills,
            self.scoring.word_boundary,
        );
        let skills_count = matched_skills.len();
        let skills_coverage_pct = coverage_pct(skills_count, self.vocab.skills.len());

        let keyword = keyword_score(&normalized, self.scoring.keyword_variant);

        let experience_count = experience_score(
            &normalized,
            &self.vocab.action_verbs,
            self.scoring.word_boundary,
        );

        let features = FeatureSet {
            matched_skills,
            skills_count,
            skills_coverage_pct,
            keyword_score: keyword,
            word_count: raw_text.split_whitespace().count(),
            experience_count,
            grammar_issue_count: grammar.issue_count,
            grammar_score: grammar.score,
        };

        let weak_points = diagnose(
            raw_text,
            &normalized,
            features.skills_count,
            features.experience_count,
            self.scoring.skill_threshold,
            &self.vocab.important_skills,
            self.scoring.word_boundary,
        );

        let (score, tier) = composite_for(&features, &self.scoring.weights);

        Ok(Analysis {
            normalized,
            composite: CompositeResult {
                score,
                tier,
                features,
            },
            weak_points,
        })
    }

    /// Feature extraction without a grammar collaborator: the grammar
    /// stage is reported as the neutral default
    pub fn analyze_without_grammar(&self, raw_text: &str) -> Result<Analysis, AnalysisError> {
        let neutral = GrammarReport::neutral(self.scoring.grammar_scale);
        self.analyze(raw_text, &neutral)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
