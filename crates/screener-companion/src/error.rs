use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompanionError {
    #[error("text generation failed: {0}")]
    Invocation(String),

    #[error("text generation backend unavailable: {0}")]
    Unavailable(String),
}
