//! Section routing.
//!
//! Runs once, when the respondent leaves the core section, and decides
//! which optional clinical sections follow it.

use screener_core::{AnswerStore, SectionId};
use tracing::debug;

use crate::predicates::{
    NOT_SURE, SAFETY_FOLLOW_UP, TIME_COURSE, YES, answer_in, answer_is, has_domain,
};

/// Time-course option that routes to the panic section.
pub const SUDDEN_SPIKES: &str = "It comes in sudden spikes that peak within minutes–hours";
/// Time-course option that routes to the trauma section.
pub const CUE_TRIGGERED: &str =
    "It’s mostly triggered by specific cues (places/people/memories/sensations)";
/// Time-course option that routes to the activation section.
pub const DISTINCT_EPISODES: &str = "It comes in distinct episodes lasting days–weeks";

type Trigger = fn(&AnswerStore) -> bool;

/// Optional sections paired with their trigger, in route order.
static TRIGGERS: [(SectionId, Trigger); 9] = [
    (SectionId::Panic, panic),
    (SectionId::Intrusions, intrusions),
    (SectionId::Trauma, trauma),
    (SectionId::Worry, worry),
    (SectionId::Executive, executive),
    (SectionId::Mood, mood),
    (SectionId::Substance, substance),
    (SectionId::Reality, reality),
    (SectionId::Activation, activation),
];

fn panic(a: &AnswerStore) -> bool {
    has_domain(a, "Panic") || answer_is(a, TIME_COURSE, SUDDEN_SPIKES)
}

fn intrusions(a: &AnswerStore) -> bool {
    has_domain(a, "Intrusive thoughts")
}

fn trauma(a: &AnswerStore) -> bool {
    has_domain(a, "Trauma reminders") || answer_is(a, TIME_COURSE, CUE_TRIGGERED)
}

fn worry(a: &AnswerStore) -> bool {
    has_domain(a, "Worry")
}

fn executive(a: &AnswerStore) -> bool {
    has_domain(a, "Attention")
}

fn mood(a: &AnswerStore) -> bool {
    has_domain(a, "Mood")
}

fn substance(a: &AnswerStore) -> bool {
    has_domain(a, "Alcohol")
}

fn reality(a: &AnswerStore) -> bool {
    answer_in(a, SAFETY_FOLLOW_UP, &[YES, NOT_SURE]) || has_domain(a, "Unusual experiences")
}

fn activation(a: &AnswerStore) -> bool {
    answer_is(a, TIME_COURSE, DISTINCT_EPISODES)
}

/// Optional sections whose trigger fires, each at most once, in priority order.
pub fn triggered_sections(answers: &AnswerStore) -> Vec<SectionId> {
    TRIGGERS
        .iter()
        .filter(|(_, fires)| fires(answers))
        .map(|(section, _)| *section)
        .collect()
}

/// The full route: fixed prefix, triggered sections, then results.
pub fn compute_route(answers: &AnswerStore) -> Vec<SectionId> {
    let optional = triggered_sections(answers);

    let mut route = Vec::with_capacity(SectionId::PREFIX.len() + optional.len() + 1);
    route.extend(SectionId::PREFIX);
    route.extend(optional.iter().copied());
    route.push(SectionId::Results);

    debug!(optional = ?optional, total = route.len(), "computed route");
    route
}
