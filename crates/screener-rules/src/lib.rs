//! screener-rules
//!
//! Decision logic for the screening questionnaire. Pure functions over a
//! read-only [`AnswerStore`]: section routing and the battery of
//! symptom-cluster rules. No I/O, no shared state.

pub mod predicates;
pub mod routing;
pub mod rules;

use screener_core::{AnswerStore, PatternResult};
use serde::Serialize;
use tracing::{debug, warn};
use ts_rs::TS;

pub use routing::compute_route;

/// Trait implemented by each symptom-cluster rule.
pub trait PatternRule: Send + Sync {
    /// Stable identifier (e.g. "panic", "reality").
    fn id(&self) -> &str;

    /// Cluster name shown in reports, also for ruled-out entries.
    fn name(&self) -> &str;

    /// Entry questions of the section this rule reads. The rule is only
    /// reported when at least one of them was answered.
    fn entry_keys(&self) -> &'static [&'static str];

    /// Finding text reported when the rule fires.
    fn message(&self) -> &str;

    /// Provisional differential reported when the rule fires.
    fn differential(&self) -> &str;

    /// Whether a positive result needs urgent clinician review.
    fn is_urgent(&self) -> bool {
        false
    }

    /// The rule's boolean formula.
    fn detect(&self, answers: &AnswerStore) -> bool;

    fn is_gated_in(&self, answers: &AnswerStore) -> bool {
        self.entry_keys()
            .iter()
            .any(|key| predicates::was_entered(answers, key))
    }

    /// Evaluate against `answers`; `None` when the section was never entered.
    fn evaluate(&self, answers: &AnswerStore) -> Option<PatternResult> {
        if !self.is_gated_in(answers) {
            return None;
        }

        if !self.detect(answers) {
            return Some(PatternResult::ruled_out(self.name()));
        }

        Some(PatternResult {
            name: self.name().to_string(),
            detected: true,
            message: Some(self.message().to_string()),
            urgent: self.is_urgent().then_some(true),
            dsm_differential: Some(self.differential().to_string()),
        })
    }
}

/// Serializable summary of a registered rule.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RuleInfo {
    pub id: String,
    pub name: String,
    pub entry_keys: Vec<String>,
    pub differential: String,
    pub urgent: bool,
}

/// Return all registered rules, in report order.
pub fn all_rules() -> Vec<Box<dyn PatternRule>> {
    vec![
        Box::new(rules::panic::Panic),
        Box::new(rules::intrusion::Intrusion),
        Box::new(rules::trauma::Trauma),
        Box::new(rules::worry::Worry),
        Box::new(rules::mood::Mood),
        Box::new(rules::activation::Activation),
        Box::new(rules::executive::Executive),
        Box::new(rules::substance::Substance),
        Box::new(rules::reality::Reality),
    ]
}

/// Look up a rule by ID.
pub fn get_rule(id: &str) -> Option<Box<dyn PatternRule>> {
    all_rules().into_iter().find(|r| r.id() == id)
}

pub fn rule_catalog() -> Vec<RuleInfo> {
    all_rules()
        .iter()
        .map(|r| RuleInfo {
            id: r.id().to_string(),
            name: r.name().to_string(),
            entry_keys: r.entry_keys().iter().map(|k| k.to_string()).collect(),
            differential: r.differential().to_string(),
            urgent: r.is_urgent(),
        })
        .collect()
}

/// Run every rule whose section was entered. Order follows [`all_rules`];
/// the length varies with how many sections the respondent reached.
pub fn analyze_patterns(answers: &AnswerStore) -> Vec<PatternResult> {
    let results: Vec<PatternResult> = all_rules()
        .iter()
        .filter_map(|rule| rule.evaluate(answers))
        .collect();

    let detected = results.iter().filter(|r| r.detected).count();
    debug!(evaluated = results.len(), detected, "analyzed patterns");
    if has_urgent_finding(&results) {
        warn!("urgent finding detected; clinician review required");
    }

    results
}

pub fn detected_patterns(results: &[PatternResult]) -> Vec<&PatternResult> {
    results.iter().filter(|r| r.detected).collect()
}

pub fn has_urgent_finding(results: &[PatternResult]) -> bool {
    results.iter().any(|r| r.detected && r.is_urgent())
}
