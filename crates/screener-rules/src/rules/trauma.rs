use screener_core::AnswerStore;

use crate::PatternRule;
use crate::predicates::{answer_is, is_affirmative, meets_impairment};

/// T5 duration option that is too recent to count.
pub const UNDER_ONE_MONTH: &str = "<1 month";

/// Trauma section.
pub struct Trauma;

impl PatternRule for Trauma {
    fn id(&self) -> &str {
        "trauma"
    }

    fn name(&self) -> &str {
        "Trauma/cue reactivity"
    }

    fn entry_keys(&self) -> &'static [&'static str] {
        &["t1"]
    }

    fn message(&self) -> &str {
        "Trauma/cue reactivity pattern likely"
    }

    fn differential(&self) -> &str {
        "PTSD, Acute Stress Disorder"
    }

    // An unanswered T5 does not rule the pattern out.
    fn detect(&self, a: &AnswerStore) -> bool {
        is_affirmative(a, "t1")
            && is_affirmative(a, "t2")
            && is_affirmative(a, "t3")
            && !answer_is(a, "t5", UNDER_ONE_MONTH)
            && meets_impairment(a)
    }
}
