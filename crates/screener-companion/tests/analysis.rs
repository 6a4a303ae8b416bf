use std::sync::Mutex;

use screener_companion::analysis::{EMPTY_REPLY, TextGenerator, request_analysis};
use screener_companion::error::CompanionError;
use screener_core::AnswerStore;

struct Canned {
    reply: Result<String, String>,
    seen: Mutex<Vec<String>>,
}

impl Canned {
    fn new(reply: Result<&str, &str>) -> Self {
        Self {
            reply: reply.map(str::to_string).map_err(str::to_string),
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl TextGenerator for Canned {
    async fn generate(&self, prompt: &str) -> Result<String, CompanionError> {
        self.seen.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(CompanionError::Invocation)
    }
}

#[tokio::test]
async fn reply_is_returned_verbatim() {
    let generator = Canned::new(Ok("Disclaimer: AI-generated.\nInsights..."));
    let reply = request_analysis(&generator, &AnswerStore::new(), &[])
        .await
        .unwrap();
    assert_eq!(reply, "Disclaimer: AI-generated.\nInsights...");

    let seen = generator.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains("DETECTED SYMPTOM CLUSTERS:"));
}

#[tokio::test]
async fn blank_reply_becomes_placeholder() {
    let generator = Canned::new(Ok("  \n"));
    let reply = request_analysis(&generator, &AnswerStore::new(), &[])
        .await
        .unwrap();
    assert_eq!(reply, EMPTY_REPLY);
}

#[tokio::test]
async fn backend_errors_propagate() {
    let generator = Canned::new(Err("quota exceeded"));
    let err = request_analysis(&generator, &AnswerStore::new(), &[])
        .await
        .unwrap_err();
    assert!(matches!(err, CompanionError::Invocation(msg) if msg == "quota exceeded"));
}
