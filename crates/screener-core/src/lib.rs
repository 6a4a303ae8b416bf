//! screener-core
//!
//! Pure domain types for the self-screening questionnaire: answers,
//! sections, findings, and the shape of the authored question catalog.
//! No routing or scoring logic lives here.

pub mod error;
pub mod models;

pub use error::CoreError;
pub use models::answer::{AnswerStore, AnswerValue, QuestionId};
pub use models::pattern::PatternResult;
pub use models::question::{Question, QuestionType, Section};
pub use models::section::SectionId;
