use screener_companion::prompt::build_analysis_prompt;
use screener_core::{AnswerStore, AnswerValue, PatternResult};
use screener_rules::analyze_patterns;

#[test]
fn prompt_without_detections_says_so() {
    let prompt = build_analysis_prompt(&AnswerStore::new(), &[]);
    assert!(prompt.contains("- Reported Diagnoses: None listed\n"));
    assert!(prompt.contains("- Functional Impairment Score: 0/10\n"));
    assert!(prompt.contains("- Symptom Time Course: Not specified\n"));
    assert!(prompt.contains("- No specific clinical thresholds met on this screener.\n"));
}

#[test]
fn prompt_lists_only_detected_clusters() {
    let mut answers = AnswerStore::new();
    answers.insert("ph_12", AnswerValue::Text("Asthma".into()));
    answers.insert("c3", AnswerValue::Scale(6.0));
    answers.insert("s0_2", AnswerValue::Choice("Yes".into()));
    answers.insert("t1", AnswerValue::Choice("No".into()));

    let prompt = build_analysis_prompt(&answers, &analyze_patterns(&answers));
    assert!(prompt.contains("- Reported Diagnoses: Asthma\n"));
    assert!(prompt.contains("- Functional Impairment Score: 6/10\n"));
    assert!(prompt.contains(
        "- Reality-testing concerns (Differential: Psychotic Disorder, Schizophrenia Spectrum)\n"
    ));
    assert!(!prompt.contains("Trauma/cue reactivity"));
    assert!(!prompt.contains("No specific clinical thresholds"));
}

#[test]
fn missing_differential_prints_placeholder() {
    let pattern = PatternResult {
        name: "Custom".to_string(),
        detected: true,
        message: None,
        urgent: None,
        dsm_differential: None,
    };
    let prompt = build_analysis_prompt(&AnswerStore::new(), &[pattern]);
    assert!(prompt.contains("- Custom (Differential: N/A)\n"));
}

#[test]
fn prompt_ends_with_disclaimer_instruction() {
    let prompt = build_analysis_prompt(&AnswerStore::new(), &[]);
    assert!(prompt.starts_with("Act as a professional Clinical Mental Health Assistant."));
    assert!(prompt.ends_with("not a medical diagnosis."));
}
