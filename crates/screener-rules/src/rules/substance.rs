use screener_core::AnswerStore;

use crate::PatternRule;
use crate::predicates::is_affirmative;

pub struct Substance;

impl PatternRule for Substance {
    fn id(&self) -> &str {
        "substance"
    }

    fn name(&self) -> &str {
        "Substance-related pattern"
    }

    fn entry_keys(&self) -> &'static [&'static str] {
        &["s1"]
    }

    fn message(&self) -> &str {
        "Substance-related pattern likely"
    }

    fn differential(&self) -> &str {
        "Substance Use Disorder"
    }

    fn detect(&self, a: &AnswerStore) -> bool {
        is_affirmative(a, "s2") && is_affirmative(a, "s4")
    }
}
