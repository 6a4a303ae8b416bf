use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("answer document must be a JSON object")]
    NotAnObject,

    #[error("malformed answer for question '{question_id}'")]
    MalformedAnswer { question_id: String },

    #[error("unknown section: {0}")]
    UnknownSection(String),
}
