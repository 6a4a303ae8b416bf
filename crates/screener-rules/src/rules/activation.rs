use screener_core::AnswerStore;

use crate::PatternRule;
use crate::predicates::{count, is_affirmative};

/// Activation section.
pub struct Activation;

impl PatternRule for Activation {
    fn id(&self) -> &str {
        "activation"
    }

    fn name(&self) -> &str {
        "Activation/drive shift"
    }

    fn entry_keys(&self) -> &'static [&'static str] {
        &["a1"]
    }

    fn message(&self) -> &str {
        "Activation/drive shift pattern likely"
    }

    fn differential(&self) -> &str {
        "Bipolar Spectrum Disorder"
    }

    fn detect(&self, a: &AnswerStore) -> bool {
        is_affirmative(a, "a1") && count(a, "a2") >= 3 && is_affirmative(a, "a5")
    }
}
