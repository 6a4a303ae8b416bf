use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::section::SectionId;

/// Input widget a question is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum QuestionType {
    YesNo,
    SingleSelect,
    MultiSelect,
    Scale,
    Text,
    Date,
}

impl QuestionType {
    /// Whether a section may be submitted with this question left blank.
    pub fn is_optional_input(&self) -> bool {
        matches!(
            self,
            QuestionType::MultiSelect | QuestionType::Text | QuestionType::Date
        )
    }
}

/// One authored question. The catalog is content, not logic.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub sub_text: Option<String>,
    pub placeholder: Option<String>,
}

/// A titled group of questions shown as one page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
}
