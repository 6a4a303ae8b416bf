use screener_core::AnswerStore;

use crate::PatternRule;
use crate::predicates::{is_affirmative, is_strictly_yes, meets_impairment};

/// Panic section: recurrent alarm surges (P1, P2) with a confirmed
/// behavioural consequence (P5 or P6) and at least moderate impairment.
pub struct Panic;

impl PatternRule for Panic {
    fn id(&self) -> &str {
        "panic"
    }

    fn name(&self) -> &str {
        "Panic/body alarm surges"
    }

    fn entry_keys(&self) -> &'static [&'static str] {
        &["p1"]
    }

    fn message(&self) -> &str {
        "Panic/alarm pattern likely"
    }

    fn differential(&self) -> &str {
        "Panic Disorder, Agoraphobia"
    }

    fn detect(&self, a: &AnswerStore) -> bool {
        is_affirmative(a, "p1")
            && is_affirmative(a, "p2")
            && (is_strictly_yes(a, "p5") || is_strictly_yes(a, "p6"))
            && meets_impairment(a)
    }
}
