//! Page-by-page replay of a finished answer set through a session.

use screener_core::{AnswerStore, Section, SectionId};

use crate::session::ScreeningSession;

/// Where a replay ended and what it passed through.
#[derive(Debug)]
pub struct Replay {
    /// Every section shown, in order, including the one it stopped on.
    pub visited: Vec<SectionId>,
    /// Set when a page had unanswered required questions.
    pub blocked_at: Option<SectionId>,
    pub session: ScreeningSession,
}

impl Replay {
    pub fn last(&self) -> Option<SectionId> {
        self.visited.last().copied()
    }
}

/// Feed `answers` into a fresh session one page at a time, the way the
/// questionnaire UI would.
///
/// Stops on the results page, on the emergency screen, or on the first
/// page that cannot be submitted. Sections missing from `catalog` are
/// treated as pages without questions.
pub fn replay_answers(answers: &AnswerStore, catalog: &[Section]) -> Replay {
    let mut session = ScreeningSession::new();
    let mut visited = Vec::new();
    let mut blocked_at = None;

    loop {
        let current = session.current_section();
        visited.push(current);
        if matches!(current, SectionId::Results | SectionId::Emergency) {
            break;
        }

        let questions = catalog
            .iter()
            .find(|s| s.id == current)
            .map(|s| s.questions.as_slice())
            .unwrap_or(&[]);
        for question in questions {
            if let Some(value) = answers.get(&question.id) {
                session.record_answer(question.id.clone(), value.clone());
            }
        }

        if session.is_emergency() {
            continue;
        }
        if !session.can_proceed(questions) {
            tracing::debug!(section = %current, "replay blocked on unanswered questions");
            blocked_at = Some(current);
            break;
        }
        session.advance();
    }

    tracing::info!(
        session = %session.id,
        visited = visited.len(),
        blocked = blocked_at.is_some(),
        "replay finished"
    );

    Replay {
        visited,
        blocked_at,
        session,
    }
}
