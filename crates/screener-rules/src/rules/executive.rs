use screener_core::AnswerStore;

use crate::PatternRule;
use crate::predicates::{count_affirmative, is_affirmative, meets_impairment};

/// Inattention and hyperactivity items counted toward the threshold.
pub const SYMPTOM_ITEMS: [&str; 6] = ["e1", "e2", "e3", "e4", "e5", "e_hyper"];

pub const MIN_SYMPTOMS: usize = 4;

/// Executive section: long-standing onset (E6) plus at least four
/// affirmative symptom items and at least moderate impairment.
pub struct Executive;

impl PatternRule for Executive {
    fn id(&self) -> &str {
        "executive"
    }

    fn name(&self) -> &str {
        "Executive control pattern"
    }

    fn entry_keys(&self) -> &'static [&'static str] {
        &["e1"]
    }

    fn message(&self) -> &str {
        "Chronic executive control pattern likely"
    }

    fn differential(&self) -> &str {
        "ADHD (Attention-Deficit/Hyperactivity Disorder)"
    }

    fn detect(&self, a: &AnswerStore) -> bool {
        is_affirmative(a, "e6")
            && count_affirmative(a, &SYMPTOM_ITEMS) >= MIN_SYMPTOMS
            && meets_impairment(a)
    }
}
