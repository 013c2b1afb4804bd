// Integration tests for Resume Screen

use resume_screen::core::{AnalysisError, Analyzer};
use resume_screen::models::{
    GrammarIssue, GrammarReport, GrammarScale, ScoringConfig, Tier, Vocabulary,
};
use resume_screen::services::{feature_vector, CategoryClassifier};

fn default_analyzer() -> Analyzer {
    Analyzer::with_defaults()
}

fn clean_grammar() -> GrammarReport {
    GrammarReport::from_issues(vec![], GrammarScale::Hundred)
}

const SCENARIO_A: &str = "Managed a team of 5 engineers to deliver a machine learning \
                          platform using python and sql, improving efficiency by 30%.";

#[test]
fn test_end_to_end_scenario_a() {
    let analyzer = default_analyzer();
    let analysis = analyzer.analyze(SCENARIO_A, &clean_grammar()).unwrap();

    assert!(analysis.normalized.contains("managed"));
    assert!(analysis.normalized.contains("python"));
    assert!(analysis.normalized.contains("sql"));
    assert!(analysis.normalized.contains("machine learning"));

    let features = &analysis.composite.features;
    for expected in ["python", "sql", "machine learning"] {
        assert!(
            features.matched_skills.iter().any(|s| s == expected),
            "expected {} in matched skills",
            expected
        );
    }
    assert!(features.experience_count >= 1);

    // Under 100 words: too-short fires; digits present: no-numbers does not
    assert!(analysis.weak_points.contains(&"Resume seems too short.".to_string()));
    assert!(!analysis
        .weak_points
        .iter()
        .any(|w| w.contains("No measurable achievements")));
}

#[test]
fn test_end_to_end_empty_input() {
    let analyzer = default_analyzer();
    let result = analyzer.analyze("", &clean_grammar());
    assert!(matches!(result, Err(AnalysisError::InputMissing)));
}

#[test]
fn test_grammar_issues_lower_the_score() {
    let analyzer = default_analyzer();

    let clean = analyzer.analyze(SCENARIO_A, &clean_grammar()).unwrap();

    let issues: Vec<GrammarIssue> = (0..20)
        .map(|i| GrammarIssue {
            message: "Possible spelling mistake found.".to_string(),
            context: "…".to_string(),
            offset: i,
            length: 1,
            replacements: vec![],
        })
        .collect();
    let flagged = GrammarReport::from_issues(issues, GrammarScale::Hundred);
    let messy = analyzer.analyze(SCENARIO_A, &flagged).unwrap();

    assert_eq!(messy.composite.features.grammar_issue_count, 20);
    assert_eq!(messy.composite.features.grammar_score, 80.0);
    assert!(messy.composite.score < clean.composite.score);
}

#[test]
fn test_word_boundary_mode_changes_matches() {
    let vocab = Vocabulary::new(
        vec!["sql".to_string(), "java".to_string()],
        vec!["led".to_string()],
        vec![],
    );

    let substring = Analyzer::new(vocab.clone(), ScoringConfig::default());
    let boundary = Analyzer::new(
        vocab,
        ScoringConfig {
            word_boundary: true,
            ..ScoringConfig::default()
        },
    );

    let text = "Knowledgeable javascript engineer using sqlite";
    let loose = substring.analyze(text, &clean_grammar()).unwrap();
    let strict = boundary.analyze(text, &clean_grammar()).unwrap();

    // Substring mode sees "sql" in sqlite, "java" in javascript, "led" in
    // knowledgeable; boundary mode sees none of them
    assert_eq!(loose.composite.features.skills_count, 2);
    assert!(loose.composite.features.experience_count >= 1);
    assert_eq!(strict.composite.features.skills_count, 0);
    assert_eq!(strict.composite.features.experience_count, 0);
}

#[test]
fn test_important_skills_warning_end_to_end() {
    let vocab = Vocabulary::new(
        vec!["python".to_string(), "sql".to_string(), "excel".to_string()],
        vec!["managed".to_string()],
        vec!["python".to_string(), "excel".to_string()],
    );
    let analyzer = Analyzer::new(vocab, ScoringConfig::default());

    let analysis = analyzer
        .analyze("Managed reporting in python for 3 years", &clean_grammar())
        .unwrap();

    assert!(analysis
        .weak_points
        .contains(&"Missing important skills: excel".to_string()));
}

#[test]
fn test_classifier_consumes_pipeline_features() {
    use std::io::Write;

    let artifact = r#"{
        "classes": ["data_science", "office_admin"],
        "scaler": {
            "mean": [2.0, 20.0, 1.0, 80.0],
            "scale": [2.0, 20.0, 1.0, 10.0]
        },
        "coefficients": [
            [2.0, 0.1, 1.0, 0.0],
            [-2.0, 0.1, -1.0, 0.0]
        ],
        "intercepts": [0.0, 0.0]
    }"#;
    let path = std::env::temp_dir().join("resume_screen_it_model.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(artifact.as_bytes()).unwrap();

    let model = CategoryClassifier::load(&path).unwrap();
    let analyzer = default_analyzer();
    let analysis = analyzer.analyze(SCENARIO_A, &clean_grammar()).unwrap();

    let vector = feature_vector(&analysis.composite.features);
    let label = model.predict(&vector).unwrap();
    assert_eq!(label, "data_science");
}

#[test]
fn test_tier_progression() {
    let analyzer = default_analyzer();

    // Sparse text lands in Weak
    let weak = analyzer
        .analyze("short note without anything useful", &clean_grammar())
        .unwrap();
    assert_eq!(weak.composite.tier, Tier::Weak);

    // Dense, skill-heavy text climbs the tiers
    let mut strong_text = String::from(
        "python java sql machine learning deep learning excel communication \
         leadership tensorflow pytorch html css javascript data analysis \
         project management tableau power bi problem solving. ",
    );
    for i in 0..15 {
        strong_text.push_str(&format!(
            "Managed and led team {} and developed {} dashboards. ",
            i,
            i * 3
        ));
    }
    let strong = analyzer.analyze(&strong_text, &clean_grammar()).unwrap();
    assert_eq!(strong.composite.tier, Tier::Strong);
    assert!(strong.composite.score > weak.composite.score);
}
