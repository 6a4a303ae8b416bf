use std::future::Future;

use screener_core::{AnswerStore, PatternResult};
use tracing::{info, warn};

use crate::error::CompanionError;
use crate::prompt::build_analysis_prompt;

pub const EMPTY_REPLY: &str = "No analysis generated.";

/// A text-generation backend.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, CompanionError>> + Send;
}

/// Ask the companion for a narrative analysis of the current findings.
///
/// A blank reply is replaced with [`EMPTY_REPLY`]; backend failures are
/// returned to the caller, which decides how to surface them.
pub async fn request_analysis<G: TextGenerator>(
    generator: &G,
    answers: &AnswerStore,
    patterns: &[PatternResult],
) -> Result<String, CompanionError> {
    let prompt = build_analysis_prompt(answers, patterns);
    let detected = patterns.iter().filter(|p| p.detected).count();
    info!(detected, prompt_chars = prompt.len(), "requesting companion analysis");

    let reply = generator.generate(&prompt).await.inspect_err(|e| {
        warn!(error = %e, "companion analysis failed");
    })?;

    if reply.trim().is_empty() {
        return Ok(EMPTY_REPLY.to_string());
    }
    Ok(reply)
}
