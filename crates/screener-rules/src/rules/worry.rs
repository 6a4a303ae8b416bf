use screener_core::AnswerStore;

use crate::PatternRule;
use crate::predicates::{answer_in, count, is_affirmative, meets_impairment};

/// W2 options describing worry that is hard to control.
pub const HARD_TO_CONTROL: [&str; 2] = ["It’s hard to stop", "I can’t stop once it starts"];

/// Minimum number of tension symptoms picked on W3.
pub const MIN_TENSION_SYMPTOMS: usize = 3;

/// Worry section.
pub struct Worry;

impl PatternRule for Worry {
    fn id(&self) -> &str {
        "worry"
    }

    fn name(&self) -> &str {
        "Worry/tension loop"
    }

    fn entry_keys(&self) -> &'static [&'static str] {
        &["w1"]
    }

    fn message(&self) -> &str {
        "Worry/tension pattern likely (GAD-like)"
    }

    fn differential(&self) -> &str {
        "Generalized Anxiety Disorder (GAD)"
    }

    fn detect(&self, a: &AnswerStore) -> bool {
        is_affirmative(a, "w1")
            && answer_in(a, "w2", &HARD_TO_CONTROL)
            && count(a, "w3") >= MIN_TENSION_SYMPTOMS
            && meets_impairment(a)
    }
}
