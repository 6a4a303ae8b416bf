//! Question-by-question transcript of the sections a respondent traversed.

use serde::{Deserialize, Serialize};

use screener_core::{AnswerStore, AnswerValue, Section, SectionId};

pub const NOT_ANSWERED: &str = "Not answered";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptItem {
    pub question_id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSection {
    pub id: SectionId,
    pub title: String,
    pub items: Vec<TranscriptItem>,
}

pub fn format_answer(value: Option<&AnswerValue>) -> String {
    match value {
        Some(v) if !v.is_blank() => v.display(),
        _ => NOT_ANSWERED.to_string(),
    }
}

/// Walk `route` in order and pair every catalog question with its answer.
///
/// The intro and results pages carry no questions and are skipped, as is
/// any routed section the catalog does not describe.
pub fn build_transcript(
    route: &[SectionId],
    catalog: &[Section],
    answers: &AnswerStore,
) -> Vec<TranscriptSection> {
    route
        .iter()
        .filter(|id| !matches!(id, SectionId::Intro | SectionId::Results))
        .filter_map(|id| {
            let Some(section) = catalog.iter().find(|s| s.id == *id) else {
                tracing::debug!(section = %id, "no catalog entry for routed section");
                return None;
            };

            let items = section
                .questions
                .iter()
                .map(|q| TranscriptItem {
                    question_id: q.id.clone(),
                    question: q.text.clone(),
                    answer: format_answer(answers.get(&q.id)),
                })
                .collect();

            Some(TranscriptSection {
                id: *id,
                title: section.title.clone(),
                items,
            })
        })
        .collect()
}
