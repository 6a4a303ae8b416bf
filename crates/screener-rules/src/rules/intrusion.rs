use screener_core::AnswerStore;

use crate::PatternRule;
use crate::predicates::{answer_in, is_affirmative};

/// O9 options that count as meaningful interference.
pub const INTERFERING: [&str; 2] = ["Moderately", "Severely"];

/// Intrusions section: unwanted thoughts (O1) with neutralising acts (O2)
/// that interfere at least moderately (O9).
pub struct Intrusion;

impl PatternRule for Intrusion {
    fn id(&self) -> &str {
        "intrusion"
    }

    fn name(&self) -> &str {
        "Intrusion/compulsion loop"
    }

    fn entry_keys(&self) -> &'static [&'static str] {
        &["o1"]
    }

    fn message(&self) -> &str {
        "Intrusion/compulsion loop likely"
    }

    fn differential(&self) -> &str {
        "Obsessive-Compulsive Disorder (OCD)"
    }

    fn detect(&self, a: &AnswerStore) -> bool {
        is_affirmative(a, "o1") && is_affirmative(a, "o2") && answer_in(a, "o9", &INTERFERING)
    }
}
