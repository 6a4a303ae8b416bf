use screener_core::AnswerStore;

use crate::PatternRule;
use crate::predicates::{SAFETY_FOLLOW_UP, is_strictly_yes};

/// Reality-testing section.
///
/// Reachable from the safety follow-up as well as from the core domain
/// list, so either entry question gates it in. Any single "Yes" fires it,
/// and a positive result is always urgent.
pub struct Reality;

impl PatternRule for Reality {
    fn id(&self) -> &str {
        "reality"
    }

    fn name(&self) -> &str {
        "Reality-testing concerns"
    }

    fn entry_keys(&self) -> &'static [&'static str] {
        &["r1", SAFETY_FOLLOW_UP]
    }

    fn message(&self) -> &str {
        "Urgent clinician review recommended"
    }

    fn differential(&self) -> &str {
        "Psychotic Disorder, Schizophrenia Spectrum"
    }

    fn is_urgent(&self) -> bool {
        true
    }

    fn detect(&self, a: &AnswerStore) -> bool {
        ["r1", "r2", "r3", SAFETY_FOLLOW_UP]
            .iter()
            .any(|id| is_strictly_yes(a, id))
    }
}
