use screener_core::AnswerStore;

use crate::PatternRule;
use crate::predicates::{answer_is, count, is_affirmative};

/// M3 duration option that is too short to count.
pub const UNDER_ONE_WEEK: &str = "<1 week";

pub const MIN_SYMPTOMS: usize = 5;

/// Mood section: low mood (M1) or lost interest (M2) lasting at least a
/// week, with five or more symptoms overall.
pub struct Mood;

impl Mood {
    /// M1, M2 and M6 count one each when affirmative; every item picked on
    /// the symptom checklist counts one.
    pub fn symptom_count(a: &AnswerStore) -> usize {
        ["m1", "m2", "m6"]
            .iter()
            .filter(|id| is_affirmative(a, id))
            .count()
            + count(a, "m_symptoms")
    }
}

impl PatternRule for Mood {
    fn id(&self) -> &str {
        "mood"
    }

    fn name(&self) -> &str {
        "Mood shutdown/low reward"
    }

    fn entry_keys(&self) -> &'static [&'static str] {
        &["m1"]
    }

    fn message(&self) -> &str {
        "Mood shutdown pattern likely (MDD-like)"
    }

    fn differential(&self) -> &str {
        "Major Depressive Disorder (MDD)"
    }

    fn detect(&self, a: &AnswerStore) -> bool {
        (is_affirmative(a, "m1") || is_affirmative(a, "m2"))
            && !answer_is(a, "m3", UNDER_ONE_WEEK)
            && Self::symptom_count(a) >= MIN_SYMPTOMS
    }
}
