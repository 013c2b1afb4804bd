use serde::{Deserialize, Serialize};

/// Read-only skill/verb vocabularies, built once at startup.
///
/// Entries are lowercased and deduplicated preserving first-seen order, so
/// matched-skill lists are stable for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub skills: Vec<String>,
    pub action_verbs: Vec<String>,
    pub important_skills: Vec<String>,
}

impl Vocabulary {
    pub fn new(
        skills: Vec<String>,
        action_verbs: Vec<String>,
        important_skills: Vec<String>,
    ) -> Self {
        Self {
            skills: dedup_lowercase(skills),
            action_verbs: dedup_lowercase(action_verbs),
            important_skills: dedup_lowercase(important_skills),
        }
    }
}

fn dedup_lowercase(entries: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    entries
        .into_iter()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty() && seen.insert(e.clone()))
        .collect()
}

/// Scale the grammar score is expressed on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammarScale {
    /// `max(0, 100 - issues)`; assumed by the default composite weights
    #[default]
    Hundred,
    /// `max(0, 10 - issues)` decile scale
    Ten,
}

impl GrammarScale {
    /// Score reported when the grammar collaborator is unavailable
    pub fn neutral_score(self) -> f64 {
        match self {
            GrammarScale::Hundred => 70.0,
            GrammarScale::Ten => 7.0,
        }
    }

    pub fn score_for(self, issue_count: u32) -> f64 {
        let ceiling = match self {
            GrammarScale::Hundred => 100.0,
            GrammarScale::Ten => 10.0,
        };
        (ceiling - issue_count as f64).max(0.0)
    }
}

/// Which keyword/density measure feeds the composite formula
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordVariant {
    /// Total whitespace-delimited token count (canonical)
    #[default]
    Total,
    /// Distinct token count divided by 10
    Distinct,
}

/// Composite formula weights
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CompositeWeights {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_keyword_weight")]
    pub keyword: f64,
    #[serde(default = "default_grammar_weight")]
    pub grammar: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            experience: default_experience_weight(),
            keyword: default_keyword_weight(),
            grammar: default_grammar_weight(),
        }
    }
}

fn default_skills_weight() -> f64 { 0.4 }
fn default_experience_weight() -> f64 { 0.3 }
fn default_keyword_weight() -> f64 { 0.2 }
fn default_grammar_weight() -> f64 { 0.1 }

/// The single canonical scoring configuration (one formula, one scale,
/// one keyword variant per deployment)
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub skill_threshold: usize,
    pub word_boundary: bool,
    pub grammar_scale: GrammarScale,
    pub keyword_variant: KeywordVariant,
    pub weights: CompositeWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            skill_threshold: 3,
            word_boundary: false,
            grammar_scale: GrammarScale::default(),
            keyword_variant: KeywordVariant::default(),
            weights: CompositeWeights::default(),
        }
    }
}

/// One issue flagged by the external grammar-check collaborator.
///
/// Consumed, never mutated; the pipeline counts these and optionally
/// surfaces them in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarIssue {
    pub message: String,
    pub context: String,
    pub offset: usize,
    pub length: usize,
    pub replacements: Vec<String>,
}

/// Grammar stage output, including the degraded (collaborator down) case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarReport {
    #[serde(rename = "issueCount")]
    pub issue_count: u32,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<GrammarIssue>,
    /// True when the collaborator was unavailable and the neutral default
    /// score was substituted
    pub degraded: bool,
}

impl GrammarReport {
    pub fn from_issues(issues: Vec<GrammarIssue>, scale: GrammarScale) -> Self {
        let issue_count = issues.len() as u32;
        Self {
            issue_count,
            score: scale.score_for(issue_count),
            issues,
            degraded: false,
        }
    }

    /// Soft-failure report: neutral score, no issues, marked degraded
    pub fn neutral(scale: GrammarScale) -> Self {
        Self {
            issue_count: 0,
            score: scale.neutral_score(),
            issues: vec![],
            degraded: true,
        }
    }
}

/// Per-request feature extraction output, immutable once computed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSet {
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "skillsCount")]
    pub skills_count: usize,
    /// Matched skills / vocabulary size, as a percentage (2 decimal places)
    #[serde(rename = "skillsCoveragePct")]
    pub skills_coverage_pct: f64,
    #[serde(rename = "keywordScore")]
    pub keyword_score: f64,
    #[serde(rename = "wordCount")]
    pub word_count: usize,
    #[serde(rename = "experienceCount")]
    pub experience_count: u32,
    #[serde(rename = "grammarIssueCount")]
    pub grammar_issue_count: u32,
    #[serde(rename = "grammarScore")]
    pub grammar_score: f64,
}

/// Qualitative tier derived from the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Strong,
    Average,
    Weak,
}

impl Tier {
    /// Fixed thresholds; boundary values belong to the higher tier
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Tier::Strong
        } else if score >= 50.0 {
            Tier::Average
        } else {
            Tier::Weak
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Strong => write!(f, "Strong"),
            Tier::Average => write!(f, "Average"),
            Tier::Weak => write!(f, "Weak"),
        }
    }
}

/// Terminal output of the scoring pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeResult {
    pub score: f64,
    pub tier: Tier,
    pub features: FeatureSet,
}
