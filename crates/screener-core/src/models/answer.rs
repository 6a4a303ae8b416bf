use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Opaque question identifier from the authored catalog (e.g. `"c1"`, `"m_symptoms"`).
pub type QuestionId = String;

/// A single respondent-supplied value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerValue {
    /// Single-select or yes/no option label.
    Choice(String),
    /// Multi-select option labels, in the order they were picked.
    MultiChoice(Vec<String>),
    /// Numeric scale value (e.g. 0–10 impairment).
    Scale(f64),
    /// Free text.
    Text(String),
    /// Date string as entered.
    Date(String),
}

impl AnswerValue {
    /// The string payload of a choice, text or date answer.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Choice(s) | AnswerValue::Text(s) | AnswerValue::Date(s) => Some(s),
            AnswerValue::MultiChoice(_) | AnswerValue::Scale(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AnswerValue::MultiChoice(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scale(&self) -> Option<f64> {
        match self {
            AnswerValue::Scale(v) => Some(*v),
            _ => None,
        }
    }

    /// True for an empty string payload. Lists and numbers are never empty:
    /// an empty multi-select still means the question was shown and submitted.
    pub fn is_blank(&self) -> bool {
        self.as_text().is_some_and(|s| s.trim().is_empty())
    }

    /// Human-readable rendering used in transcripts and summaries.
    pub fn display(&self) -> String {
        match self {
            AnswerValue::Choice(s) | AnswerValue::Text(s) | AnswerValue::Date(s) => s.clone(),
            AnswerValue::MultiChoice(items) => items.join(", "),
            AnswerValue::Scale(v) => v.to_string(),
        }
    }
}

/// Mapping from question id to the respondent's answer.
///
/// A key is present only once the respondent reached and answered that
/// question. Absence means "not answered" and every accessor degrades to a
/// neutral value rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerStore(BTreeMap<QuestionId, AnswerValue>);

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or overwrite an answer.
    pub fn insert(&mut self, id: impl Into<QuestionId>, value: AnswerValue) {
        self.0.insert(id.into(), value);
    }

    pub fn get(&self, id: &str) -> Option<&AnswerValue> {
        self.0.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Present and not a blank string.
    pub fn is_answered(&self, id: &str) -> bool {
        self.get(id).is_some_and(|v| !v.is_blank())
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(AnswerValue::as_text)
    }

    /// Multi-select labels; empty when absent or not a list.
    pub fn choices(&self, id: &str) -> &[String] {
        self.get(id).and_then(AnswerValue::as_list).unwrap_or(&[])
    }

    pub fn scale(&self, id: &str) -> Option<f64> {
        self.get(id).and_then(AnswerValue::as_scale)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.0.iter()
    }

    /// Build a store from the untyped object a web form produces:
    /// strings become choices, string arrays multi-choices, numbers scales.
    /// `null` entries are treated as unanswered and skipped.
    pub fn from_loose_json(value: &serde_json::Value) -> Result<Self, CoreError> {
        let object = value.as_object().ok_or(CoreError::NotAnObject)?;
        let mut store = Self::new();

        for (id, raw) in object {
            let answer = match raw {
                serde_json::Value::Null => continue,
                serde_json::Value::String(s) => AnswerValue::Choice(s.clone()),
                serde_json::Value::Number(n) => {
                    let v = n.as_f64().ok_or_else(|| CoreError::MalformedAnswer {
                        question_id: id.clone(),
                    })?;
                    AnswerValue::Scale(v)
                }
                serde_json::Value::Array(items) => {
                    let labels = items
                        .iter()
                        .map(|item| item.as_str().map(str::to_string))
                        .collect::<Option<Vec<_>>>()
                        .ok_or_else(|| CoreError::MalformedAnswer {
                            question_id: id.clone(),
                        })?;
                    AnswerValue::MultiChoice(labels)
                }
                serde_json::Value::Bool(_) | serde_json::Value::Object(_) => {
                    return Err(CoreError::MalformedAnswer {
                        question_id: id.clone(),
                    });
                }
            };
            store.insert(id.clone(), answer);
        }

        Ok(store)
    }

    pub fn from_loose_str(json: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_loose_json(&value)
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for AnswerStore {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
