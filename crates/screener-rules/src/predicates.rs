//! Answer predicates shared by the router and the pattern rules.
//!
//! Every helper treats a missing or mistyped answer as the neutral case:
//! not affirmative, count 0, impairment 0.

use screener_core::{AnswerStore, AnswerValue};

/// Single-select time-course answer from the core section.
pub const TIME_COURSE: &str = "c1";
/// Multi-select list of affected domains from the core section.
pub const DOMAINS: &str = "c2";
/// 0–10 impairment scale from the core section.
pub const IMPAIRMENT: &str = "c3";
/// Safety follow-up about unusual experiences.
pub const SAFETY_FOLLOW_UP: &str = "s0_2";

pub const YES: &str = "Yes";
pub const NOT_SURE: &str = "Not sure";

/// Minimum impairment score several rules require.
pub const IMPAIRMENT_THRESHOLD: f64 = 5.0;

/// Whether a section's entry question was reached. An empty string or a
/// zero scale counts as not entered; any list, even an empty one, counts.
pub fn was_entered(answers: &AnswerStore, id: &str) -> bool {
    match answers.get(id) {
        None => false,
        Some(AnswerValue::Choice(s) | AnswerValue::Text(s) | AnswerValue::Date(s)) => !s.is_empty(),
        Some(AnswerValue::MultiChoice(_)) => true,
        Some(AnswerValue::Scale(v)) => *v != 0.0 && !v.is_nan(),
    }
}

/// "Yes" or "Not sure". Uncertainty is enough to keep investigating.
pub fn is_affirmative(answers: &AnswerStore, id: &str) -> bool {
    matches!(answers.text(id), Some(YES | NOT_SURE))
}

pub fn is_strictly_yes(answers: &AnswerStore, id: &str) -> bool {
    answers.text(id) == Some(YES)
}

pub fn answer_is(answers: &AnswerStore, id: &str, option: &str) -> bool {
    answers.text(id) == Some(option)
}

pub fn answer_in(answers: &AnswerStore, id: &str, options: &[&str]) -> bool {
    answers.text(id).is_some_and(|v| options.contains(&v))
}

/// Number of options picked on a multi-select question.
pub fn count(answers: &AnswerStore, id: &str) -> usize {
    answers.choices(id).len()
}

/// How many of `ids` were answered affirmatively.
pub fn count_affirmative(answers: &AnswerStore, ids: &[&str]) -> usize {
    ids.iter().filter(|id| is_affirmative(answers, id)).count()
}

/// Multi-select labels carry qualifying text, so membership is substring
/// containment rather than equality.
pub fn has_label_containing(answers: &AnswerStore, id: &str, needle: &str) -> bool {
    answers.choices(id).iter().any(|label| label.contains(needle))
}

pub fn has_domain(answers: &AnswerStore, needle: &str) -> bool {
    has_label_containing(answers, DOMAINS, needle)
}

pub fn impairment(answers: &AnswerStore) -> f64 {
    answers.scale(IMPAIRMENT).unwrap_or(0.0)
}

pub fn meets_impairment(answers: &AnswerStore) -> bool {
    impairment(answers) >= IMPAIRMENT_THRESHOLD
}
