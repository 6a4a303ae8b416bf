//! Analysis prompt builder.
//!
//! Turns the already-computed findings and a handful of scalar answers into
//! the plain-text prompt sent to the companion model. Only detected
//! clusters are listed; ruled-out ones add noise without context.

use screener_core::{AnswerStore, PatternResult};
use screener_rules::predicates::{TIME_COURSE, impairment};

const DIAGNOSES: &str = "ph_12";

const INSTRUCTIONS: &str = "\
Please provide a structured clinical analysis with the following sections:
1. **Professional Insights**: A concise summary of what these results might indicate clinically.
2. **Coping Tips**: 3 specific, evidence-based strategies relevant to the detected patterns (e.g., grounding for trauma, activation for mood).
3. **Recommendations**: Key points the patient should discuss with their doctor.

Tone: Empathetic, professional, and objective.
IMPORTANT: Start with a clear disclaimer that this is AI-generated and not a medical diagnosis.";

/// Build the companion prompt from a snapshot of answers and its findings.
pub fn build_analysis_prompt(answers: &AnswerStore, patterns: &[PatternResult]) -> String {
    let diagnoses = answers
        .text(DIAGNOSES)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("None listed");
    let time_course = answers.text(TIME_COURSE).unwrap_or("Not specified");

    let mut prompt = String::from(
        "Act as a professional Clinical Mental Health Assistant. \
         Analyze the following patient self-screening data.\n\n",
    );

    prompt.push_str("PATIENT CONTEXT:\n");
    prompt.push_str(&format!("- Reported Diagnoses: {diagnoses}\n"));
    prompt.push_str(&format!(
        "- Functional Impairment Score: {}/10\n",
        impairment(answers)
    ));
    prompt.push_str(&format!("- Symptom Time Course: {time_course}\n\n"));

    prompt.push_str("DETECTED SYMPTOM CLUSTERS:\n");
    let mut any = false;
    for pattern in patterns.iter().filter(|p| p.detected) {
        any = true;
        prompt.push_str(&format!(
            "- {} (Differential: {})\n",
            pattern.name,
            pattern.dsm_differential.as_deref().unwrap_or("N/A")
        ));
    }
    if !any {
        prompt.push_str("- No specific clinical thresholds met on this screener.\n");
    }

    prompt.push('\n');
    prompt.push_str(INSTRUCTIONS);
    prompt
}
