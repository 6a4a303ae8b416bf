//! Session controller.
//!
//! Owns the answer store for one respondent and drives navigation through
//! the route. The engines only ever see a read-only borrow or an explicit
//! snapshot of the store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use screener_core::{AnswerStore, AnswerValue, PatternResult, Question, QuestionId, SectionId};
use screener_rules::predicates::YES;
use screener_rules::{analyze_patterns, compute_route};

/// Safety question asking whether the respondent is in immediate danger.
pub const IMMEDIATE_DANGER: &str = "s0_1";

/// First trauma question; "No" lets the respondent skip the rest.
pub const TRAUMA_GATE: &str = "t1";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SessionState")]
pub struct ScreeningSession {
    pub id: Uuid,
    pub started_at: jiff::Timestamp,
    answers: AnswerStore,
    route: Vec<SectionId>,
    index: usize,
    emergency: bool,
    route_locked: bool,
}

/// Unchecked wire form of a session; the index must point into the route.
#[derive(Deserialize)]
struct SessionState {
    id: Uuid,
    started_at: jiff::Timestamp,
    answers: AnswerStore,
    route: Vec<SectionId>,
    index: usize,
    emergency: bool,
    route_locked: bool,
}

impl TryFrom<SessionState> for ScreeningSession {
    type Error = String;

    fn try_from(state: SessionState) -> Result<Self, Self::Error> {
        if state.index >= state.route.len() {
            return Err(format!(
                "section index {} is outside a route of {} sections",
                state.index,
                state.route.len()
            ));
        }

        Ok(Self {
            id: state.id,
            started_at: state.started_at,
            answers: state.answers,
            route: state.route,
            index: state.index,
            emergency: state.emergency,
            route_locked: state.route_locked,
        })
    }
}

impl Default for ScreeningSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreeningSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: jiff::Timestamp::now(),
            answers: AnswerStore::new(),
            route: SectionId::PREFIX.to_vec(),
            index: 0,
            emergency: false,
            route_locked: false,
        }
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// Stable copy for callers that evaluate while answers keep arriving.
    pub fn snapshot(&self) -> AnswerStore {
        self.answers.clone()
    }

    pub fn route(&self) -> &[SectionId] {
        &self.route
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn is_emergency(&self) -> bool {
        self.emergency
    }

    pub fn is_route_locked(&self) -> bool {
        self.route_locked
    }

    /// Record or overwrite an answer. Reporting immediate danger ends the
    /// questionnaire.
    pub fn record_answer(&mut self, id: impl Into<QuestionId>, value: AnswerValue) {
        let id = id.into();
        if id == IMMEDIATE_DANGER && value.as_text() == Some(YES) {
            tracing::warn!(session = %self.id, "immediate danger reported; entering emergency mode");
            self.emergency = true;
        }
        self.answers.insert(id, value);
    }

    pub fn current_section(&self) -> SectionId {
        if self.emergency {
            return SectionId::Emergency;
        }
        self.route
            .get(self.index)
            .copied()
            .unwrap_or(SectionId::Results)
    }

    pub fn is_complete(&self) -> bool {
        self.current_section() == SectionId::Results
    }

    /// Move to the next section.
    ///
    /// Leaving the core section for the first time computes the route from
    /// the answers so far and fixes it for the rest of the session.
    pub fn advance(&mut self) -> SectionId {
        if self.emergency {
            return SectionId::Emergency;
        }

        if self.current_section() == SectionId::Core && !self.route_locked {
            let core_at = self.index;
            self.route = compute_route(&self.answers);
            self.route_locked = true;
            self.index = core_at + 1;
            tracing::info!(
                session = %self.id,
                sections = self.route.len(),
                "route fixed after core intake"
            );
        } else if self.index + 1 < self.route.len() {
            self.index += 1;
        }

        self.current_section()
    }

    pub fn go_back(&mut self) -> SectionId {
        if !self.emergency && self.index > 0 {
            self.index -= 1;
        }
        self.current_section()
    }

    /// Whether the current page may be submitted.
    ///
    /// Multi-select, free text and dates are optional; everything else must
    /// be answered. Answering "No" to the first trauma question is enough.
    pub fn can_proceed(&self, questions: &[Question]) -> bool {
        match self.current_section() {
            SectionId::Intro | SectionId::Results => return true,
            SectionId::Emergency => return false,
            _ => {}
        }

        if self.skips_rest_of_trauma() {
            return true;
        }

        questions
            .iter()
            .all(|q| q.kind.is_optional_input() || self.answers.is_answered(&q.id))
    }

    pub fn skips_rest_of_trauma(&self) -> bool {
        self.current_section() == SectionId::Trauma
            && self.answers.text(TRAUMA_GATE) == Some("No")
    }

    /// Current findings, evaluated fresh on every call.
    pub fn findings(&self) -> Vec<PatternResult> {
        analyze_patterns(&self.answers)
    }
}
